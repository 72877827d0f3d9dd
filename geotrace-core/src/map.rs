// Location map: one marker plus an "approximate area" circle, rendered as Leaflet HTML

use crate::model::{Coordinates, IpInfo, PhoneInfo};
use serde::Serialize;

pub const DEFAULT_ZOOM: u8 = 8;
pub const APPROXIMATE_RADIUS_METERS: f64 = 50_000.0;
const POPUP_MAX_WIDTH: u32 = 300;
const MARKER_COLOR: &str = "red";

/// Anything that can be placed on a location map
pub trait Mappable {
    fn coordinates(&self) -> Option<Coordinates>;
    /// Bold heading of the marker popup
    fn popup_title(&self) -> &'static str;
    /// Label/value rows shown under the heading, coordinates excluded
    fn popup_fields(&self) -> Vec<(&'static str, String)>;
}

impl Mappable for PhoneInfo {
    fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    fn popup_title(&self) -> &'static str {
        "Location Details:"
    }

    fn popup_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("Country", self.country.clone()),
            ("State", self.state.clone()),
            ("District", self.district.clone()),
            ("City", self.city.clone()),
        ]
    }
}

impl Mappable for IpInfo {
    fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    fn popup_title(&self) -> &'static str {
        "IP Location Details:"
    }

    fn popup_fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("IP", self.ip.clone()),
            ("Country", self.country.clone()),
            ("Region", self.region.clone()),
            ("City", self.city.clone()),
            ("ISP", self.isp.clone()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub position: Coordinates,
    /// Popup body, already HTML
    pub popup: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Circle {
    pub center: Coordinates,
    pub radius_meters: f64,
    pub color: String,
    pub fill: bool,
    pub popup: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocationMap {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<Marker>,
    pub circles: Vec<Circle>,
}

/// Build the map for a record; `None` when the record has no coordinates
pub fn build_map<T: Mappable + ?Sized>(subject: &T) -> Option<LocationMap> {
    let center = subject.coordinates()?;

    let mut popup = format!("<b>{}</b><br>", escape_html(subject.popup_title()));
    for (label, value) in subject.popup_fields() {
        popup.push_str(&format!("{}: {}<br>", label, escape_html(&value)));
    }
    popup.push_str(&format!("Coordinates: {}", center));

    Some(LocationMap {
        center,
        zoom: DEFAULT_ZOOM,
        markers: vec![Marker {
            position: center,
            popup,
            color: MARKER_COLOR.to_string(),
        }],
        circles: vec![Circle {
            center,
            radius_meters: APPROXIMATE_RADIUS_METERS,
            color: MARKER_COLOR.to_string(),
            fill: true,
            popup: "Approximate Area".to_string(),
        }],
    })
}

impl LocationMap {
    /// Standalone HTML document embedding a Leaflet map
    pub fn to_html(&self) -> String {
        let mut layers = String::new();
        for marker in &self.markers {
            layers.push_str(&format!(
                "      L.marker([{lat}, {lon}], {{icon: L.divIcon({{className: 'geotrace-pin', html: '<div style=\"background:{color};width:14px;height:14px;border-radius:50%;border:2px solid white\"></div>'}})}})\n        .addTo(map)\n        .bindPopup({popup}, {{maxWidth: {width}}});\n",
                lat = marker.position.latitude,
                lon = marker.position.longitude,
                color = marker.color,
                popup = js_string(&marker.popup),
                width = POPUP_MAX_WIDTH,
            ));
        }
        for circle in &self.circles {
            layers.push_str(&format!(
                "      L.circle([{lat}, {lon}], {{radius: {radius}, color: '{color}', fill: {fill}}})\n        .addTo(map)\n        .bindPopup({popup});\n",
                lat = circle.center.latitude,
                lon = circle.center.longitude,
                radius = circle.radius_meters,
                color = circle.color,
                fill = circle.fill,
                popup = js_string(&circle.popup),
            ));
        }

        format!(
            r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>GeoTrace location map</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css" />
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>html, body, #map {{ height: 100%; margin: 0; }}</style>
  </head>
  <body>
    <div id="map"></div>
    <script>
      var map = L.map('map').setView([{lat}, {lon}], {zoom});
      L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
        maxZoom: 19,
        attribution: '&copy; OpenStreetMap contributors'
      }}).addTo(map);
{layers}    </script>
  </body>
</html>
"#,
            lat = self.center.latitude,
            lon = self.center.longitude,
            zoom = self.zoom,
            layers = layers,
        )
    }
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Quote a string as a JavaScript literal; serde_json output is valid JS
fn js_string(value: &str) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("AT&T <b>"), "AT&amp;T &lt;b&gt;");
        assert_eq!(escape_html("O'Neil"), "O&#39;Neil");
    }

    #[test]
    fn test_js_string_cannot_close_script() {
        let quoted = js_string("</script><b>\"x\"</b>");
        assert!(!quoted.contains("</script>"));
        assert!(quoted.starts_with('"') && quoted.ends_with('"'));
    }
}
