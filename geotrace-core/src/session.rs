// Per-session search history and report cache

use std::collections::{HashMap, VecDeque};

/// How many recent searches each history keeps
pub const HISTORY_CAPACITY: usize = 5;

/// Fixed-capacity list, newest first, that ignores repeats.
///
/// Pushing a value already present leaves the order untouched; pushing past
/// capacity drops the oldest entry.
#[derive(Debug, Clone)]
pub struct RecentList<T> {
    items: VecDeque<T>,
    capacity: usize,
}

impl<T: PartialEq> RecentList<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Returns true when the value was inserted
    pub fn push(&mut self, value: T) -> bool {
        if self.capacity == 0 || self.items.contains(&value) {
            return false;
        }
        self.items.push_front(value);
        self.items.truncate(self.capacity);
        true
    }

    pub fn contains(&self, value: &T) -> bool {
        self.items.contains(value)
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T: PartialEq> Default for RecentList<T> {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

/// State one user accumulates across lookups.
///
/// Reports are cached under the literal searched string; the cache is never
/// pruned together with the history, so a key that fell out of the history can
/// still be recalled.
#[derive(Debug, Default)]
pub struct Session {
    pub phone_history: RecentList<String>,
    pub ip_history: RecentList<String>,
    phone_reports: HashMap<String, String>,
    ip_reports: HashMap<String, String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_phone(&mut self, number: &str, report: String) {
        self.phone_history.push(number.to_string());
        self.phone_reports.insert(number.to_string(), report);
    }

    pub fn record_ip(&mut self, ip: &str, report: String) {
        self.ip_history.push(ip.to_string());
        self.ip_reports.insert(ip.to_string(), report);
    }

    pub fn phone_report(&self, number: &str) -> Option<&str> {
        self.phone_reports.get(number).map(String::as_str)
    }

    pub fn ip_report(&self, ip: &str) -> Option<&str> {
        self.ip_reports.get(ip).map(String::as_str)
    }

    /// Cached report for either kind of key
    pub fn report(&self, key: &str) -> Option<&str> {
        self.phone_report(key).or_else(|| self.ip_report(key))
    }
}
