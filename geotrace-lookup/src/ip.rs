// IP geolocation against an ipapi.co-compatible JSON API

use crate::config::{endpoint, json_f64, parse_base_url, LookupConfig};
use crate::error::{LookupError, Result};
use geotrace_core::model::{isp_from_org, or_unknown, Coordinates, IpInfo, UNKNOWN};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::net::IpAddr;
use tracing::{debug, info};
use url::Url;

const SERVICE: &str = "IP geolocation service";

#[derive(Debug, Default, Deserialize)]
struct IpApiResponse {
    ip: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country_name: Option<String>,
    postal: Option<String>,
    latitude: Option<serde_json::Value>,
    longitude: Option<serde_json::Value>,
    timezone: Option<String>,
    org: Option<String>,
    asn: Option<serde_json::Value>,
    #[serde(default)]
    error: bool,
    reason: Option<String>,
}

impl IpApiResponse {
    fn into_info(self) -> IpInfo {
        let text = |value: Option<String>| {
            value
                .map(|v| or_unknown(&v))
                .unwrap_or_else(|| UNKNOWN.to_string())
        };
        let asn = match self.asn {
            Some(serde_json::Value::String(s)) => or_unknown(&s),
            Some(serde_json::Value::Number(n)) => n.to_string(),
            _ => UNKNOWN.to_string(),
        };

        IpInfo {
            isp: isp_from_org(self.org.as_deref()),
            ip: text(self.ip),
            city: text(self.city),
            region: text(self.region),
            country: text(self.country_name),
            postal: text(self.postal),
            coordinates: Coordinates::from_parts(
                json_f64(self.latitude.as_ref()),
                json_f64(self.longitude.as_ref()),
            ),
            timezone: text(self.timezone),
            org: text(self.org),
            asn,
        }
    }
}

pub struct IpLocator {
    client: Client,
    base_url: Url,
}

impl IpLocator {
    pub fn new(client: Client, base_url: &str) -> Result<Self> {
        Ok(Self {
            client,
            base_url: parse_base_url(base_url)?,
        })
    }

    pub fn from_config(client: Client, config: &LookupConfig) -> Result<Self> {
        Self::new(client, &config.ip_api_url)
    }

    /// Look up one address with a single GET to `<base>/<ip>/json/`
    pub async fn lookup(&self, ip: &str) -> Result<IpInfo> {
        let ip = ip.trim();
        let address: IpAddr = ip
            .parse()
            .map_err(|_| LookupError::InvalidAddress(ip.to_string()))?;
        let address = address.to_string();

        let url = endpoint(&self.base_url, &[address.as_str(), "json", ""])?;
        debug!("Looking up {} via {}", address, url);

        let response = self.client.get(url).send().await?;
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

        let body = response.text().await?;
        let data: IpApiResponse =
            serde_json::from_str(&body).map_err(|e| LookupError::ParseError(e.to_string()))?;

        if data.error {
            let reason = data
                .reason
                .clone()
                .unwrap_or_else(|| "unspecified error".to_string());
            if reason.to_lowercase().contains("ratelimit") {
                return Err(LookupError::RateLimited(SERVICE.to_string()));
            }
            return Err(LookupError::Provider {
                service: SERVICE.to_string(),
                reason,
            });
        }

        let info = data.into_info();
        info!("Resolved {} to {}, {}", info.ip, info.city, info.country);
        Ok(info)
    }
}
