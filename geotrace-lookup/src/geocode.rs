// Forward geocoding against a Nominatim-compatible search API

use crate::config::{endpoint, json_f64, parse_base_url, LookupConfig};
use crate::error::{LookupError, Result};
use geotrace_core::model::{or_unknown, Coordinates, Location, UNKNOWN};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, info, warn};
use url::Url;

const SERVICE: &str = "geocoder";

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: Option<serde_json::Value>,
    lon: Option<serde_json::Value>,
    address: Option<Address>,
}

#[derive(Debug, Default, Deserialize)]
struct Address {
    country: Option<String>,
    state: Option<String>,
    county: Option<String>,
    district: Option<String>,
    city: Option<String>,
    town: Option<String>,
    village: Option<String>,
}

pub struct Geocoder {
    client: Client,
    base_url: Url,
}

impl Geocoder {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn from_config(client: Client, config: &LookupConfig) -> Result<Self> {
        Self::new(client, &config.geocoder_url)
    }

    /// "region, country", or just the country when the region adds nothing
    pub fn query_for(country: &str, region: Option<&str>) -> String {
        match region.map(str::trim) {
            Some(region) if !region.is_empty() && region != UNKNOWN => {
                format!("{}, {}", region, country)
            }
            _ => country.to_string(),
        }
    }

    /// Resolve a place description with a single search request
    pub async fn geocode(&self, country: &str, region: Option<&str>) -> Result<Location> {
        let query = Self::query_for(country, region);
        let url = endpoint(&self.base_url, &["search"])?;
        debug!("Geocoding '{}' via {}", query, url);

        let response = self
            .client
            .get(url)
            .query(&[
                ("q", query.as_str()),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", "1"),
            ])
            .send()
            .await?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LookupError::RateLimited(SERVICE.to_string()));
        }
        if !status.is_success() {
            return Err(LookupError::Status {
                service: SERVICE.to_string(),
                status: status.as_u16(),
            });
        }

        let hits: Vec<SearchHit> = response.json().await?;
        let hit = hits
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::NoMatch(query.clone()))?;
        let address = hit
            .address
            .ok_or_else(|| LookupError::MissingAddress(query.clone()))?;

        let location = Location {
            country: first_of(&[&address.country]).unwrap_or_else(|| or_unknown(country)),
            state: first_of(&[&address.state])
                .or_else(|| region.map(or_unknown))
                .unwrap_or_else(|| UNKNOWN.to_string()),
            district: first_of(&[&address.county, &address.district])
                .unwrap_or_else(|| UNKNOWN.to_string()),
            city: first_of(&[&address.city, &address.town, &address.village])
                .unwrap_or_else(|| UNKNOWN.to_string()),
            coordinates: Coordinates::from_parts(
                json_f64(hit.lat.as_ref()),
                json_f64(hit.lon.as_ref()),
            ),
        };

        info!("Geocoded '{}' to {}, {}", query, location.city, location.country);
        Ok(location)
    }

    /// Like [`Geocoder::geocode`], but any failure yields the fallback record
    pub async fn locate(&self, country: &str, region: Option<&str>) -> Location {
        match self.geocode(country, region).await {
            Ok(location) => location,
            Err(e) => {
                warn!("Geocoding failed, using fallback location: {}", e);
                Location::fallback(country, region)
            }
        }
    }
}

/// First present, non-blank candidate in priority order
fn first_of(candidates: &[&Option<String>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .map(str::trim)
        .find(|c| !c.is_empty())
        .map(str::to_string)
}
