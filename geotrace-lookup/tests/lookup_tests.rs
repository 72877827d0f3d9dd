use geotrace_core::map::{build_map, APPROXIMATE_RADIUS_METERS};
use geotrace_core::model::Coordinates;
use geotrace_core::report::ip_text_report;
use geotrace_lookup::{build_client, Geocoder, IpLocator, LookupConfig, LookupError};
use serde_json::json;
use std::time::Duration;
use wiremock::{
    matchers::{header, method, path},
    Mock, MockServer, ResponseTemplate,
};

#[tokio::test]
async fn test_ip_lookup_produces_map_and_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/8.8.8.8/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "8.8.8.8",
            "city": "Mountain View",
            "region": "California",
            "country_name": "United States",
            "postal": "94043",
            "latitude": 37.42301,
            "longitude": -122.083352,
            "timezone": "America/Los_Angeles",
            "org": "GOOGLE LLC",
            "asn": "AS15169"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = LookupConfig::new().with_ip_api_url(mock_server.uri());
    let locator = IpLocator::from_config(build_client(&config).unwrap(), &config).unwrap();
    let info = locator.lookup(" 8.8.8.8 ").await.unwrap();

    assert_eq!(info.country, "United States");
    let map = build_map(&info).expect("located address maps");
    assert_eq!(map.center, Coordinates::new(37.42301, -122.083352));
    assert_eq!(map.markers.len(), 1);
    assert_eq!(map.circles.len(), 1);
    assert_eq!(map.circles[0].radius_meters, APPROXIMATE_RADIUS_METERS);

    let report = ip_text_report(&info, "2024-05-01 12:30:00");
    assert!(report.contains("Country: United States"));
    assert!(report.contains("ISP: GOOGLE"));
}

#[tokio::test]
async fn test_ipv6_addresses_are_accepted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/2001:4860:4860::8888/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "2001:4860:4860::8888",
            "country_name": "United States"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = LookupConfig::new().with_ip_api_url(mock_server.uri());
    let locator = IpLocator::from_config(build_client(&config).unwrap(), &config).unwrap();
    let info = locator.lookup("2001:4860:4860::8888").await.unwrap();

    assert_eq!(info.country, "United States");
    assert!(info.coordinates.is_none());
    assert!(build_map(&info).is_none());
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(header("user-agent", "geotrace-tests/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "lat": "51.5073219",
            "lon": "-0.1276474",
            "address": { "country": "United Kingdom", "city": "London" }
        }])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = LookupConfig::new()
        .with_geocoder_url(mock_server.uri())
        .with_user_agent("geotrace-tests/1.0");
    let geocoder = Geocoder::from_config(build_client(&config).unwrap(), &config).unwrap();
    let location = geocoder.geocode("United Kingdom", None).await.unwrap();

    assert_eq!(location.city, "London");
    assert_eq!(location.state, "Unknown");
}

#[tokio::test]
async fn test_ip_timeout_is_an_http_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.1.1.1/json/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "ip": "1.1.1.1" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let config = LookupConfig::new()
        .with_ip_api_url(mock_server.uri())
        .with_timeout(Duration::from_millis(300));
    let locator = IpLocator::from_config(build_client(&config).unwrap(), &config).unwrap();
    let err = locator.lookup("1.1.1.1").await.unwrap_err();

    assert!(matches!(err, LookupError::HttpError(e) if e.is_timeout()));
}
