use crate::error::Result;
use crate::geocode::Geocoder;
use geotrace_core::model::{Location, PhoneInfo, UNKNOWN};
use geotrace_core::phone::{describe_number, NumberDirectory};
use tracing::{debug, info};

/// Offline number details merged with a geocoded place.
///
/// Only an unparseable number is an error. A failed geocode degrades to the
/// country/region the number itself carries.
pub async fn lookup_phone(
    number: &str,
    directory: &NumberDirectory,
    geocoder: &Geocoder,
) -> Result<PhoneInfo> {
    let details = describe_number(number, directory)?;
    debug!(
        "{} belongs to {} ({}), carrier {}",
        details.formatted_number, details.country, details.region, details.carrier
    );

    let location = if details.country == UNKNOWN {
        Location::fallback(&details.country, details.query_region())
    } else {
        geocoder
            .locate(&details.country, details.query_region())
            .await
    };

    let info = PhoneInfo {
        timezone: details.timezone(),
        country: location.country,
        state: location.state,
        district: location.district,
        city: location.city,
        carrier: details.carrier,
        number_type: details.number_type,
        is_valid: details.is_valid,
        formatted_number: details.formatted_number,
        coordinates: location.coordinates,
    };
    info!("Phone lookup complete for {}", info.formatted_number);
    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{build_client, LookupConfig};
    use crate::error::LookupError;
    use geotrace_core::model::Coordinates;
    use geotrace_core::phone::{validate_phone_number, PrefixTable};
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn geocoder_for(server: &MockServer) -> Geocoder {
        let client = build_client(&LookupConfig::new()).unwrap();
        Geocoder::new(client, &server.uri()).unwrap()
    }

    async fn mount_india(server: &MockServer) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "India"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "lat": "22.3511148",
                "lon": "78.6677428",
                "address": {
                    "country": "India",
                    "state": "Madhya Pradesh",
                    "county": "Sagar",
                    "village": "Khajuri"
                }
            }])))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_lookup_prefixed_indian_mobile() {
        let mock_server = MockServer::start().await;
        mount_india(&mock_server).await;

        let validation = validate_phone_number("9876543210", "91").unwrap();
        assert_eq!(validation.number, "+919876543210");

        let info = lookup_phone(
            &validation.number,
            &NumberDirectory::new(),
            &geocoder_for(&mock_server),
        )
        .await
        .unwrap();

        assert_eq!(info.country, "India");
        assert_eq!(info.state, "Madhya Pradesh");
        assert_eq!(info.district, "Sagar");
        assert_eq!(info.city, "Khajuri");
        assert_eq!(info.carrier, UNKNOWN);
        assert_eq!(info.timezone, "Asia/Calcutta");
        assert_eq!(info.formatted_number.replace(' ', ""), "+919876543210");
        assert_eq!(
            info.coordinates,
            Some(Coordinates::new(22.3511148, 78.6677428))
        );
    }

    #[tokio::test]
    async fn test_lookup_uses_directory_region_and_carrier() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Tamil Nadu, India"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "lat": "11.0",
                "lon": "78.0",
                "address": { "country": "India", "state": "Tamil Nadu" }
            }])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let directory = NumberDirectory::new()
            .with_carriers(PrefixTable::parse("9198|Example Mobile\n").unwrap())
            .with_regions(PrefixTable::parse("91987|Tamil Nadu\n").unwrap());

        let info = lookup_phone("+919876543210", &directory, &geocoder_for(&mock_server))
            .await
            .unwrap();

        assert_eq!(info.carrier, "Example Mobile");
        assert_eq!(info.state, "Tamil Nadu");
        assert_eq!(info.district, UNKNOWN);
        assert_eq!(info.city, UNKNOWN);
    }

    #[tokio::test]
    async fn test_lookup_geocodes_country_outside_selector() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Luxembourg"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
                "lat": "49.8158683",
                "lon": "6.1296751",
                "address": { "country": "Lëtzebuerg", "state": "Canton Luxembourg" }
            }])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let info = lookup_phone(
            "+35226123456",
            &NumberDirectory::new(),
            &geocoder_for(&mock_server),
        )
        .await
        .unwrap();

        assert_eq!(info.state, "Canton Luxembourg");
        assert_eq!(info.timezone, UNKNOWN);
        assert!(info.coordinates.is_some());
    }

    #[tokio::test]
    async fn test_lookup_is_idempotent() {
        let mock_server = MockServer::start().await;
        mount_india(&mock_server).await;
        let geocoder = geocoder_for(&mock_server);
        let directory = NumberDirectory::new();

        let first = lookup_phone("+919876543210", &directory, &geocoder)
            .await
            .unwrap();
        let second = lookup_phone("+919876543210", &directory, &geocoder)
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_geocoder_failure_keeps_offline_details() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let info = lookup_phone(
            "+919876543210",
            &NumberDirectory::new(),
            &geocoder_for(&mock_server),
        )
        .await
        .unwrap();

        assert_eq!(info.country, "India");
        assert_eq!(info.state, UNKNOWN);
        assert_eq!(info.district, UNKNOWN);
        assert_eq!(info.city, UNKNOWN);
        assert!(info.coordinates.is_none());
        assert_eq!(info.timezone, "Asia/Calcutta");
    }

    #[tokio::test]
    async fn test_unparseable_number_is_an_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = lookup_phone("hello", &NumberDirectory::new(), &geocoder_for(&mock_server))
            .await
            .unwrap_err();
        assert!(matches!(err, LookupError::Phone(_)));
    }
}
