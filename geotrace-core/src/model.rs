// Lookup records shared by the enrichers, formatters and the map builder

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder for a field the data source had no value for
pub const UNKNOWN: &str = "Unknown";

/// Placeholder used when a whole lookup failed and a record is still rendered
pub const ERROR: &str = "Error";

/// A resolved latitude/longitude pair.
///
/// Records carry `Option<Coordinates>` so a latitude can never exist without
/// its longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Build from two optional halves, yielding `None` unless both exist
    pub fn from_parts(latitude: Option<f64>, longitude: Option<f64>) -> Option<Self> {
        match (latitude, longitude) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => {
                Some(Self::new(lat, lon))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// Usage class of a phone number, with the integer codes reports have always used
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NumberType {
    FixedLine,
    Mobile,
    FixedLineOrMobile,
    TollFree,
    PremiumRate,
    SharedCost,
    Voip,
    PersonalNumber,
    Pager,
    Uan,
    Unknown,
    Emergency,
    Voicemail,
}

impl NumberType {
    pub const ALL: [NumberType; 13] = [
        NumberType::FixedLine,
        NumberType::Mobile,
        NumberType::FixedLineOrMobile,
        NumberType::TollFree,
        NumberType::PremiumRate,
        NumberType::SharedCost,
        NumberType::Voip,
        NumberType::PersonalNumber,
        NumberType::Pager,
        NumberType::Uan,
        NumberType::Unknown,
        NumberType::Emergency,
        NumberType::Voicemail,
    ];

    pub fn code(self) -> u8 {
        match self {
            NumberType::FixedLine => 0,
            NumberType::Mobile => 1,
            NumberType::FixedLineOrMobile => 2,
            NumberType::TollFree => 3,
            NumberType::PremiumRate => 4,
            NumberType::SharedCost => 5,
            NumberType::Voip => 6,
            NumberType::PersonalNumber => 7,
            NumberType::Pager => 8,
            NumberType::Uan => 9,
            NumberType::Unknown => 10,
            NumberType::Emergency => 27,
            NumberType::Voicemail => 28,
        }
    }

    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.code() == code)
    }

    pub fn label(self) -> &'static str {
        match self {
            NumberType::FixedLine => "FIXED_LINE",
            NumberType::Mobile => "MOBILE",
            NumberType::FixedLineOrMobile => "FIXED_LINE_OR_MOBILE",
            NumberType::TollFree => "TOLL_FREE",
            NumberType::PremiumRate => "PREMIUM_RATE",
            NumberType::SharedCost => "SHARED_COST",
            NumberType::Voip => "VOIP",
            NumberType::PersonalNumber => "PERSONAL_NUMBER",
            NumberType::Pager => "PAGER",
            NumberType::Uan => "UAN",
            NumberType::Unknown => "UNKNOWN",
            NumberType::Emergency => "EMERGENCY",
            NumberType::Voicemail => "VOICEMAIL",
        }
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Structured place resolved by the geocoder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub state: String,
    pub district: String,
    pub city: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl Location {
    /// The record used when the geocoder could not resolve the place:
    /// the caller's own country/region, nothing finer, no coordinates.
    pub fn fallback(country: &str, region: Option<&str>) -> Self {
        Self {
            country: or_unknown(country),
            state: region.map(or_unknown).unwrap_or_else(|| UNKNOWN.to_string()),
            district: UNKNOWN.to_string(),
            city: UNKNOWN.to_string(),
            coordinates: None,
        }
    }
}

/// Everything derived about one phone number
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneInfo {
    pub country: String,
    pub state: String,
    pub district: String,
    pub city: String,
    pub carrier: String,
    pub timezone: String,
    pub number_type: NumberType,
    pub is_valid: bool,
    pub formatted_number: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
}

impl PhoneInfo {
    /// Displayable record for a lookup that failed outright
    pub fn failed() -> Self {
        Self {
            country: ERROR.to_string(),
            state: ERROR.to_string(),
            district: ERROR.to_string(),
            city: ERROR.to_string(),
            carrier: ERROR.to_string(),
            timezone: ERROR.to_string(),
            number_type: NumberType::Unknown,
            is_valid: false,
            formatted_number: ERROR.to_string(),
            coordinates: None,
        }
    }
}

/// Everything derived about one IP address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IpInfo {
    pub ip: String,
    pub city: String,
    pub region: String,
    pub country: String,
    pub postal: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    pub timezone: String,
    pub org: String,
    pub asn: String,
    pub isp: String,
}

impl IpInfo {
    /// Displayable record for a lookup that failed outright
    pub fn failed(ip: &str) -> Self {
        Self {
            ip: ip.to_string(),
            city: ERROR.to_string(),
            region: ERROR.to_string(),
            country: ERROR.to_string(),
            postal: ERROR.to_string(),
            coordinates: None,
            timezone: ERROR.to_string(),
            org: ERROR.to_string(),
            asn: ERROR.to_string(),
            isp: ERROR.to_string(),
        }
    }
}

/// First whitespace-delimited token of the organisation name
pub fn isp_from_org(org: Option<&str>) -> String {
    org.and_then(|o| o.split_whitespace().next())
        .map(str::to_string)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

/// Trimmed value, or "Unknown" when nothing is left
pub fn or_unknown(value: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        UNKNOWN.to_string()
    } else {
        value.to_string()
    }
}
