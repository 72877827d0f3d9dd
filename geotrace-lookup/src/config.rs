use crate::error::{LookupError, Result};
use reqwest::Client;
use std::time::Duration;
use url::Url;

pub const DEFAULT_GEOCODER_URL: &str = "https://nominatim.openstreetmap.org";
pub const DEFAULT_IP_API_URL: &str = "https://ipapi.co";
pub const DEFAULT_USER_AGENT: &str = concat!(
    "GeoTrace/",
    env!("CARGO_PKG_VERSION"),
    " (https://github.com/trapdoorsec/geotrace)"
);
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Endpoints and client settings shared by every lookup
#[derive(Debug, Clone)]
pub struct LookupConfig {
    pub geocoder_url: String,
    pub ip_api_url: String,
    pub user_agent: String,
    pub timeout: Duration,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            geocoder_url: DEFAULT_GEOCODER_URL.to_string(),
            ip_api_url: DEFAULT_IP_API_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl LookupConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_geocoder_url(mut self, url: impl Into<String>) -> Self {
        self.geocoder_url = url.into();
        self
    }

    pub fn with_ip_api_url(mut self, url: impl Into<String>) -> Self {
        self.ip_api_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// One client per invocation; no retries are layered on top of it
pub fn build_client(config: &LookupConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .connect_timeout(config.timeout / 2)
        .build()?;
    Ok(client)
}

pub(crate) fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw.trim()).map_err(|e| LookupError::InvalidUrl(format!("{}: {}", raw, e)))?;
    if url.cannot_be_a_base() {
        return Err(LookupError::InvalidUrl(format!("{} cannot be a base URL", raw)));
    }
    Ok(url)
}

/// Append path segments to a base URL, keeping any path the base already has
pub(crate) fn endpoint(base: &Url, segments: &[&str]) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut path = url
            .path_segments_mut()
            .map_err(|_| LookupError::InvalidUrl(base.to_string()))?;
        path.pop_if_empty();
        path.extend(segments);
    }
    Ok(url)
}

/// Coordinates arrive as JSON numbers from some services and strings from others
pub(crate) fn json_f64(value: Option<&serde_json::Value>) -> Option<f64> {
    match value? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
