use geotrace_core::PhoneError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LookupError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid IP address: {0}")]
    InvalidAddress(String),

    #[error("Rate limited by {0}")]
    RateLimited(String),

    #[error("{service} answered with HTTP {status}")]
    Status { service: String, status: u16 },

    #[error("{service} refused the lookup: {reason}")]
    Provider { service: String, reason: String },

    #[error("No geocoding match for '{0}'")]
    NoMatch(String),

    #[error("Geocoding match for '{0}' has no address details")]
    MissingAddress(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error(transparent)]
    Phone(#[from] PhoneError),
}

pub type Result<T> = std::result::Result<T, LookupError>;
