use geotrace_core::model::{Coordinates, IpInfo, NumberType, PhoneInfo, UNKNOWN};
use geotrace_core::pdf::{ip_pdf_report, phone_pdf_report};
use geotrace_core::report::{
    ip_json_report, ip_text_report, phone_json_report, phone_text_report, render_ip_report,
    render_phone_report, report_file_name, save_report, ReportFormat, ReportKind,
};
use tempfile::tempdir;

const TIMESTAMP: &str = "2024-05-01 12:30:00";

fn phone_info() -> PhoneInfo {
    PhoneInfo {
        country: "India".to_string(),
        state: "Tamil Nadu".to_string(),
        district: "Chennai District".to_string(),
        city: "Chennai".to_string(),
        carrier: "Example Mobile".to_string(),
        timezone: "Asia/Calcutta".to_string(),
        number_type: NumberType::Mobile,
        is_valid: true,
        formatted_number: "+91 98765 43210".to_string(),
        coordinates: Some(Coordinates::new(13.0836939, 80.270186)),
    }
}

fn ip_info() -> IpInfo {
    IpInfo {
        ip: "8.8.8.8".to_string(),
        city: "Mountain View".to_string(),
        region: "California".to_string(),
        country: "United States".to_string(),
        postal: "94043".to_string(),
        coordinates: Some(Coordinates::new(37.42301, -122.083352)),
        timezone: "America/Los_Angeles".to_string(),
        org: "GOOGLE LLC".to_string(),
        asn: "AS15169".to_string(),
        isp: "GOOGLE".to_string(),
    }
}

fn phone_lines(info: &PhoneInfo) -> Vec<String> {
    vec![
        format!("Formatted Number: {}", info.formatted_number),
        "Validation Status: Valid".to_string(),
        "Number Type: MOBILE".to_string(),
        format!("Country: {}", info.country),
        format!("State: {}", info.state),
        format!("District: {}", info.district),
        format!("City: {}", info.city),
        format!("Timezone: {}", info.timezone),
        format!("Carrier: {}", info.carrier),
    ]
}

fn ip_lines(info: &IpInfo) -> Vec<String> {
    vec![
        format!("IP Address: {}", info.ip),
        format!("ISP: {}", info.isp),
        format!("Organization: {}", info.org),
        format!("ASN: {}", info.asn),
        format!("Country: {}", info.country),
        format!("Region: {}", info.region),
        format!("City: {}", info.city),
        format!("Postal Code: {}", info.postal),
        format!("Timezone: {}", info.timezone),
    ]
}

fn contains_bytes(haystack: &[u8], needle: &str) -> bool {
    haystack
        .windows(needle.len())
        .any(|window| window == needle.as_bytes())
}

#[test]
fn test_report_format_from_str() {
    assert_eq!(ReportFormat::from_str("TEXT"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("txt"), Some(ReportFormat::Text));
    assert_eq!(ReportFormat::from_str("Json"), Some(ReportFormat::Json));
    assert_eq!(ReportFormat::from_str("pdf"), Some(ReportFormat::Pdf));
    assert_eq!(ReportFormat::from_str("csv"), None);
}

#[test]
fn test_report_file_names() {
    assert_eq!(
        report_file_name(ReportKind::Phone, "+919876543210", TIMESTAMP, ReportFormat::Pdf),
        "phone_report_+919876543210_2024-05-01_12:30:00.pdf"
    );
    assert_eq!(
        report_file_name(ReportKind::Ip, "8.8.8.8", TIMESTAMP, ReportFormat::Text),
        "ip_report_8.8.8.8_2024-05-01_12:30:00.txt"
    );
}

#[test]
fn test_phone_text_report_lists_every_field() {
    let info = phone_info();
    let report = phone_text_report(&info, TIMESTAMP);

    assert!(report.starts_with("PHONE NUMBER ANALYSIS REPORT\n"));
    assert!(report.contains(&format!("Generated on: {}", TIMESTAMP)));
    for title in [
        "1. Number Details",
        "2. Location Information",
        "3. Service Provider",
        "4. Additional Information",
    ] {
        assert!(report.contains(title), "missing section {title}");
    }
    for line in phone_lines(&info) {
        assert!(report.contains(&line), "missing line {line}");
    }
    assert!(report.contains("Coordinates: 13.0837, 80.2702"));
}

#[test]
fn test_ip_text_report_lists_every_field() {
    let info = ip_info();
    let report = ip_text_report(&info, TIMESTAMP);

    assert!(report.starts_with("IP ADDRESS ANALYSIS REPORT\n"));
    assert!(report.contains("3. Additional Information"));
    for line in ip_lines(&info) {
        assert!(report.contains(&line), "missing line {line}");
    }
}

#[test]
fn test_text_report_without_coordinates() {
    let mut info = ip_info();
    info.coordinates = None;
    info.postal = UNKNOWN.to_string();
    let report = ip_text_report(&info, TIMESTAMP);
    assert!(!report.contains("Coordinates:"));
    assert!(report.contains("Postal Code: Unknown"));
}

#[test]
fn test_json_reports_carry_metadata_and_record() {
    let value: serde_json::Value =
        serde_json::from_str(&phone_json_report(&phone_info(), TIMESTAMP).unwrap()).unwrap();
    assert_eq!(value["report"]["metadata"]["generator"], "GeoTrace");
    assert_eq!(value["report"]["metadata"]["generated_at"], TIMESTAMP);
    assert_eq!(value["report"]["result"]["carrier"], "Example Mobile");
    assert_eq!(value["report"]["result"]["number_type"], "MOBILE");

    let value: serde_json::Value =
        serde_json::from_str(&ip_json_report(&ip_info(), TIMESTAMP).unwrap()).unwrap();
    assert_eq!(value["report"]["metadata"]["kind"], "ip");
    assert_eq!(value["report"]["result"]["asn"], "AS15169");
    assert_eq!(value["report"]["result"]["coordinates"]["latitude"], 37.42301);
}

#[test]
fn test_phone_pdf_report_lists_every_field() {
    let info = phone_info();
    let bytes = phone_pdf_report(&info, TIMESTAMP).unwrap();

    assert!(bytes.starts_with(b"%PDF-"));
    assert!(contains_bytes(&bytes, "Phone Number Analysis Report"));
    assert!(contains_bytes(&bytes, &format!("Generated on: {}", TIMESTAMP)));
    for line in phone_lines(&info) {
        assert!(contains_bytes(&bytes, &line), "missing line {line}");
    }
    assert!(contains_bytes(&bytes, "Coordinates: 13.0837, 80.2702"));
    assert!(contains_bytes(&bytes, "GeoTrace | Lookup Report"));
}

#[test]
fn test_pdf_disclaimer_starts_a_new_page() {
    let bytes = ip_pdf_report(&ip_info(), TIMESTAMP).unwrap();
    for line in ip_lines(&ip_info()) {
        assert!(contains_bytes(&bytes, &line), "missing line {line}");
    }

    let document = lopdf::Document::load_mem(&bytes).unwrap();
    let pages = document.get_pages();
    assert_eq!(pages.len(), 2);

    let last_page = *pages.keys().max().unwrap();
    let content = document.get_page_content(pages[&last_page]).unwrap();
    assert!(contains_bytes(&content, "3. Additional Information"));
    assert!(contains_bytes(&content, "informational purposes only"));

    let first_page = document.get_page_content(pages[&1]).unwrap();
    assert!(!contains_bytes(&first_page, "informational purposes only"));
}

#[test]
fn test_render_and_save_each_format() {
    let dir = tempdir().unwrap();
    for format in [ReportFormat::Text, ReportFormat::Json, ReportFormat::Pdf] {
        let content = render_phone_report(&phone_info(), TIMESTAMP, format).unwrap();
        let path = dir.path().join(format!("report.{}", format.extension()));
        save_report(&content, &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), content);

        let content = render_ip_report(&ip_info(), TIMESTAMP, format).unwrap();
        assert!(!content.is_empty());
    }
}
