use thiserror::Error;

#[derive(Error, Debug)]
pub enum PhoneError {
    #[error("No phone number given")]
    Empty,

    #[error("Unknown country: {0}")]
    UnknownCountry(String),

    #[error("Could not parse '{input}': {reason}")]
    Parse { input: String, reason: String },

    #[error("Invalid prefix data on line {line}: {reason}")]
    PrefixData { line: usize, reason: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF error: {0}")]
    PdfError(#[from] lopdf::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T, E = PhoneError> = std::result::Result<T, E>;
