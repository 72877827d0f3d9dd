// Report generation for phone and IP lookups

use crate::error::ReportError;
use crate::model::{IpInfo, PhoneInfo};
use crate::pdf;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const TOOL_NAME: &str = "GeoTrace";

const PHONE_NOTES: &[&str] = &[
    "Location data is approximate and based on number allocation",
    "Carrier information may vary based on number portability",
];

const IP_NOTES: &[&str] = &[
    "Location data is approximate and based on IP geolocation",
    "Some information may be limited due to privacy settings or VPN usage",
];

pub(crate) const MAP_NOTE: &str = "Maps show estimated location with a 50km radius for privacy";
pub(crate) const DISCLAIMER: &str = "Note: This report is for informational purposes only.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
    Pdf,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            "pdf" => Some(ReportFormat::Pdf),
            _ => None,
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ReportFormat::Text => "txt",
            ReportFormat::Json => "json",
            ReportFormat::Pdf => "pdf",
        }
    }
}

/// Which lookup a report describes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Phone,
    Ip,
}

impl ReportKind {
    fn prefix(&self) -> &'static str {
        match self {
            ReportKind::Phone => "phone",
            ReportKind::Ip => "ip",
        }
    }
}

/// Local time in the format every report prints
pub fn timestamp_now() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Download name, e.g. `phone_report_+919876543210_2024-01-01_10:00:00.pdf`
pub fn report_file_name(kind: ReportKind, key: &str, timestamp: &str, format: ReportFormat) -> String {
    format!(
        "{}_report_{}_{}.{}",
        kind.prefix(),
        key,
        timestamp.replace(' ', "_"),
        format.extension()
    )
}

/// Numbered section lines shared by the text and PDF renderings
pub(crate) struct Section {
    pub title: String,
    pub lines: Vec<String>,
}

pub(crate) fn phone_sections(info: &PhoneInfo) -> Vec<Section> {
    let mut location = vec![
        format!("Country: {}", info.country),
        format!("State: {}", info.state),
        format!("District: {}", info.district),
        format!("City: {}", info.city),
        format!("Timezone: {}", info.timezone),
    ];
    if let Some(coordinates) = info.coordinates {
        location.push(format!("Coordinates: {}", coordinates));
    }

    vec![
        Section {
            title: "1. Number Details".to_string(),
            lines: vec![
                format!("Formatted Number: {}", info.formatted_number),
                format!("Validation Status: {}", validity(info.is_valid)),
                format!("Number Type: {}", info.number_type.label()),
            ],
        },
        Section {
            title: "2. Location Information".to_string(),
            lines: location,
        },
        Section {
            title: "3. Service Provider".to_string(),
            lines: vec![format!("Carrier: {}", info.carrier)],
        },
    ]
}

pub(crate) fn ip_sections(info: &IpInfo) -> Vec<Section> {
    let mut location = vec![
        format!("Country: {}", info.country),
        format!("Region: {}", info.region),
        format!("City: {}", info.city),
        format!("Postal Code: {}", info.postal),
        format!("Timezone: {}", info.timezone),
    ];
    if let Some(coordinates) = info.coordinates {
        location.push(format!("Coordinates: {}", coordinates));
    }

    vec![
        Section {
            title: "1. IP Information".to_string(),
            lines: vec![
                format!("IP Address: {}", info.ip),
                format!("ISP: {}", info.isp),
                format!("Organization: {}", info.org),
                format!("ASN: {}", info.asn),
            ],
        },
        Section {
            title: "2. Location Information".to_string(),
            lines: location,
        },
    ]
}

pub(crate) fn phone_notes() -> Vec<String> {
    notes_for(PHONE_NOTES)
}

pub(crate) fn ip_notes() -> Vec<String> {
    notes_for(IP_NOTES)
}

fn notes_for(notes: &[&str]) -> Vec<String> {
    let mut all = vec![format!("This analysis was performed using the {} tool", TOOL_NAME)];
    all.extend(notes.iter().map(|n| n.to_string()));
    all
}

fn validity(is_valid: bool) -> &'static str {
    if is_valid { "Valid" } else { "Invalid" }
}

fn render_text(title: &str, timestamp: &str, sections: &[Section], notes: &[String]) -> String {
    let mut report = String::new();

    report.push_str(&format!("{}\n", title));
    report.push_str(&format!("Generated on: {}\n\n", timestamp));

    for section in sections {
        report.push_str(&format!("{}\n", section.title));
        report.push_str(&format!("{}\n", "-".repeat(section.title.len() + 2)));
        for line in &section.lines {
            report.push_str(&format!("{}\n", line));
        }
        report.push('\n');
    }

    let closing = format!("{}. Additional Information", sections.len() + 1);
    report.push_str(&format!("{}\n", closing));
    report.push_str(&format!("{}\n", "-".repeat(closing.len() + 2)));
    for note in notes {
        report.push_str(&format!("- {}\n", note));
    }
    report.push_str(&format!("\n{}\n", DISCLAIMER));

    report
}

pub fn phone_text_report(info: &PhoneInfo, timestamp: &str) -> String {
    render_text(
        "PHONE NUMBER ANALYSIS REPORT",
        timestamp,
        &phone_sections(info),
        &phone_notes(),
    )
}

pub fn ip_text_report(info: &IpInfo, timestamp: &str) -> String {
    render_text(
        "IP ADDRESS ANALYSIS REPORT",
        timestamp,
        &ip_sections(info),
        &ip_notes(),
    )
}

fn json_report<T: Serialize>(kind: &str, record: &T, timestamp: &str) -> Result<String, serde_json::Error> {
    let json_report = serde_json::json!({
        "report": {
            "metadata": {
                "generator": TOOL_NAME,
                "version": env!("CARGO_PKG_VERSION"),
                "generated_at": timestamp,
                "kind": kind,
                "disclaimer": DISCLAIMER
            },
            "result": record
        }
    });

    serde_json::to_string_pretty(&json_report)
}

pub fn phone_json_report(info: &PhoneInfo, timestamp: &str) -> Result<String, serde_json::Error> {
    json_report("phone", info, timestamp)
}

pub fn ip_json_report(info: &IpInfo, timestamp: &str) -> Result<String, serde_json::Error> {
    json_report("ip", info, timestamp)
}

pub fn render_phone_report(
    info: &PhoneInfo,
    timestamp: &str,
    format: ReportFormat,
) -> Result<Vec<u8>, ReportError> {
    match format {
        ReportFormat::Text => Ok(phone_text_report(info, timestamp).into_bytes()),
        ReportFormat::Json => Ok(phone_json_report(info, timestamp)?.into_bytes()),
        ReportFormat::Pdf => pdf::phone_pdf_report(info, timestamp),
    }
}

pub fn render_ip_report(
    info: &IpInfo,
    timestamp: &str,
    format: ReportFormat,
) -> Result<Vec<u8>, ReportError> {
    match format {
        ReportFormat::Text => Ok(ip_text_report(info, timestamp).into_bytes()),
        ReportFormat::Json => Ok(ip_json_report(info, timestamp)?.into_bytes()),
        ReportFormat::Pdf => pdf::ip_pdf_report(info, timestamp),
    }
}

pub fn save_report(content: &[u8], path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content)?;
    Ok(())
}
