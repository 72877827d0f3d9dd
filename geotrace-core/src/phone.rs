// Phone number validation and offline enrichment

use crate::country;
use crate::error::{PhoneError, Result};
use crate::model::{NumberType, UNKNOWN};
use phonenumber::{Mode, PhoneNumber, Type};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Outcome of prefixing and parsing user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneValidation {
    /// The input with its `+<dialing code>` prefix, used as the lookup key
    pub number: String,
    pub is_valid: bool,
}

/// Facts about a number that need no network access
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberDetails {
    pub country: String,
    pub region: String,
    pub carrier: String,
    pub time_zones: Vec<String>,
    pub number_type: NumberType,
    pub is_valid: bool,
    pub formatted_number: String,
}

impl NumberDetails {
    /// First candidate time zone, or "Unknown"
    pub fn timezone(&self) -> String {
        self.time_zones
            .first()
            .cloned()
            .unwrap_or_else(|| UNKNOWN.to_string())
    }

    /// Region worth adding to a geocoding query, if it says more than the country
    pub fn query_region(&self) -> Option<&str> {
        if self.region == UNKNOWN || self.region.eq_ignore_ascii_case(&self.country) {
            None
        } else {
            Some(&self.region)
        }
    }
}

/// Prefix the dialing code unless the input already starts with `+`
pub fn prefix_number(raw: &str, dialing_code: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with('+') {
        raw.to_string()
    } else {
        format!("+{}{}", dialing_code.trim().trim_start_matches('+'), raw)
    }
}

/// Parse an international number (it must carry its `+` prefix)
pub fn parse_number(number: &str) -> Result<PhoneNumber> {
    let number = number.trim();
    if number.is_empty() {
        return Err(PhoneError::Empty);
    }
    phonenumber::parse(None, number).map_err(|e| PhoneError::Parse {
        input: number.to_string(),
        reason: e.to_string(),
    })
}

pub fn validate_phone_number(raw: &str, dialing_code: &str) -> Result<PhoneValidation> {
    if raw.trim().is_empty() {
        return Err(PhoneError::Empty);
    }
    let number = prefix_number(raw, dialing_code);
    let parsed = parse_number(&number)?;
    let is_valid = phonenumber::is_valid(&parsed);
    debug!("Validated {} (valid: {})", number, is_valid);
    Ok(PhoneValidation { number, is_valid })
}

/// Same as [`validate_phone_number`] but takes a country display name
pub fn validate_for_country(raw: &str, country_name: &str) -> Result<PhoneValidation> {
    let code = country::dialing_code(country_name)
        .ok_or_else(|| PhoneError::UnknownCountry(country_name.to_string()))?;
    validate_phone_number(raw, code)
}

pub fn describe_number(number: &str, directory: &NumberDirectory) -> Result<NumberDetails> {
    let parsed = parse_number(number)?;
    let digits = e164_digits(&parsed);

    let region_code = parsed.country().id().map(|id| format!("{:?}", id));
    let table_entry = region_code.as_deref().and_then(country::by_region);

    let country = match (table_entry, region_code.as_deref()) {
        (Some(entry), _) => entry.description.to_string(),
        (None, Some(code)) => country_name(code),
        (None, None) => UNKNOWN.to_string(),
    };

    let region = directory
        .regions
        .longest_match(&digits)
        .map(str::to_string)
        .unwrap_or_else(|| country.clone());

    let carrier = directory
        .carriers
        .longest_match(&digits)
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string());

    let time_zones = match directory.time_zones.longest_match(&digits) {
        Some(zones) => zones
            .split('&')
            .map(str::trim)
            .filter(|z| !z.is_empty())
            .map(str::to_string)
            .collect(),
        // Without prefix data only a single-zone country has a known zone
        None => match table_entry {
            Some(entry) if entry.time_zones.len() == 1 => vec![entry.time_zones[0].to_string()],
            _ => vec![],
        },
    };

    Ok(NumberDetails {
        country,
        region,
        carrier,
        time_zones,
        number_type: number_type_of(&parsed),
        is_valid: phonenumber::is_valid(&parsed),
        formatted_number: parsed.format().mode(Mode::International).to_string(),
    })
}

/// English ISO 3166 short name for a two-letter region code.
fn country_name(region_code: &str) -> String {
    isocountry::CountryCode::for_alpha2(region_code)
        .map(|code| code.name().to_string())
        .unwrap_or_else(|_| UNKNOWN.to_string())
}

fn e164_digits(number: &PhoneNumber) -> String {
    number
        .format()
        .mode(Mode::E164)
        .to_string()
        .trim_start_matches('+')
        .to_string()
}

fn number_type_of(number: &PhoneNumber) -> NumberType {
    match number.number_type(&phonenumber::metadata::DATABASE) {
        Type::FixedLine => NumberType::FixedLine,
        Type::Mobile => NumberType::Mobile,
        Type::FixedLineOrMobile => NumberType::FixedLineOrMobile,
        Type::TollFree => NumberType::TollFree,
        Type::PremiumRate => NumberType::PremiumRate,
        Type::SharedCost => NumberType::SharedCost,
        Type::Voip => NumberType::Voip,
        Type::PersonalNumber => NumberType::PersonalNumber,
        Type::Pager => NumberType::Pager,
        Type::Uan => NumberType::Uan,
        Type::Emergency => NumberType::Emergency,
        Type::Voicemail => NumberType::Voicemail,
        _ => NumberType::Unknown,
    }
}

/// Longest-prefix table in the libphonenumber `digits|name` text format
#[derive(Debug, Clone, Default)]
pub struct PrefixTable {
    entries: HashMap<String, String>,
    longest: usize,
}

impl PrefixTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse prefix data; blank lines and `#` comments are skipped
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = Self::new();
        for (idx, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (prefix, name) = line.split_once('|').ok_or_else(|| PhoneError::PrefixData {
                line: idx + 1,
                reason: "expected '<digits>|<name>'".to_string(),
            })?;
            let prefix = prefix.trim();
            if prefix.is_empty() || !prefix.chars().all(|c| c.is_ascii_digit()) {
                return Err(PhoneError::PrefixData {
                    line: idx + 1,
                    reason: format!("'{}' is not a digit prefix", prefix),
                });
            }
            table.insert(prefix, name.trim());
        }
        Ok(table)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let table = Self::parse(&content)?;
        debug!("Loaded {} prefixes from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn insert(&mut self, prefix: &str, name: &str) {
        if name.is_empty() {
            return;
        }
        self.longest = self.longest.max(prefix.len());
        self.entries.insert(prefix.to_string(), name.to_string());
    }

    pub fn longest_match(&self, digits: &str) -> Option<&str> {
        let max = self.longest.min(digits.len());
        (1..=max)
            .rev()
            .filter_map(|len| digits.get(..len))
            .find_map(|prefix| self.entries.get(prefix).map(String::as_str))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Offline carrier, region and time zone data keyed by number prefix.
///
/// An empty directory still answers every question: regions fall back to
/// the country description, time zones to the country table, carriers to
/// "Unknown".
#[derive(Debug, Clone, Default)]
pub struct NumberDirectory {
    pub carriers: PrefixTable,
    pub regions: PrefixTable,
    pub time_zones: PrefixTable,
}

impl NumberDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_carriers(mut self, carriers: PrefixTable) -> Self {
        self.carriers = carriers;
        self
    }

    pub fn with_regions(mut self, regions: PrefixTable) -> Self {
        self.regions = regions;
        self
    }

    pub fn with_time_zones(mut self, time_zones: PrefixTable) -> Self {
        self.time_zones = time_zones;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_name_from_region_code() {
        assert_eq!(country_name("LU"), "Luxembourg");
        assert_eq!(country_name("IS"), "Iceland");
        assert_eq!(country_name("ZZ"), UNKNOWN);
    }

    #[test]
    fn test_prefix_number() {
        assert_eq!(prefix_number("9876543210", "91"), "+919876543210");
        assert_eq!(prefix_number(" +919876543210 ", "1"), "+919876543210");
        assert_eq!(prefix_number("2015550123", "+1"), "+12015550123");
    }

    #[test]
    fn test_validate_rejects_empty_input() {
        assert!(matches!(
            validate_phone_number("   ", "91"),
            Err(PhoneError::Empty)
        ));
    }

    #[test]
    fn test_parse_error_keeps_reason_out_of_data() {
        let err = validate_phone_number("+", "91").unwrap_err();
        match err {
            PhoneError::Parse { input, reason } => {
                assert_eq!(input, "+");
                assert!(!reason.is_empty());
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_validate_for_unknown_country() {
        assert!(matches!(
            validate_for_country("9876543210", "Atlantis"),
            Err(PhoneError::UnknownCountry(_))
        ));
    }

    #[test]
    fn test_prefix_table_longest_match() {
        let table = PrefixTable::parse(
            "# carrier data\n\n91|India Generic\n9198|Airtel\n919876|Vodafone\n",
        )
        .unwrap();
        assert_eq!(table.len(), 3);
        assert_eq!(table.longest_match("919876543210"), Some("Vodafone"));
        assert_eq!(table.longest_match("919812345678"), Some("Airtel"));
        assert_eq!(table.longest_match("911112345678"), Some("India Generic"));
        assert_eq!(table.longest_match("441234"), None);
    }

    #[test]
    fn test_prefix_table_rejects_bad_lines() {
        let err = PrefixTable::parse("91|ok\nbogus line\n").unwrap_err();
        assert!(matches!(err, PhoneError::PrefixData { line: 2, .. }));

        let err = PrefixTable::parse("9a|nope\n").unwrap_err();
        assert!(matches!(err, PhoneError::PrefixData { line: 1, .. }));
    }

    #[test]
    fn test_query_region_skips_country_repeats() {
        let details = NumberDetails {
            country: "India".to_string(),
            region: "India".to_string(),
            carrier: UNKNOWN.to_string(),
            time_zones: vec![],
            number_type: NumberType::Mobile,
            is_valid: true,
            formatted_number: "+91 98765 43210".to_string(),
        };
        assert_eq!(details.query_region(), None);
        assert_eq!(details.timezone(), UNKNOWN);

        let details = NumberDetails {
            region: "Tamil Nadu".to_string(),
            time_zones: vec!["Asia/Calcutta".to_string()],
            ..details
        };
        assert_eq!(details.query_region(), Some("Tamil Nadu"));
        assert_eq!(details.timezone(), "Asia/Calcutta");
    }
}
