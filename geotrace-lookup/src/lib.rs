pub mod config;
pub mod error;
pub mod geocode;
pub mod ip;
pub mod phone;

pub use config::{build_client, LookupConfig};
pub use error::LookupError;
pub use geocode::Geocoder;
pub use ip::IpLocator;
pub use phone::lookup_phone;
