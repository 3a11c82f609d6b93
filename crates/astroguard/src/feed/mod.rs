//! Near-Earth object feed: records served by the backend's `/asteroids`
//! endpoint, the static fallback list, and the list-entry text shown for each.

use serde::{Deserialize, Deserializer, Serialize};

/// Errors raised while reading the asteroid feed.
#[derive(thiserror::Error, Debug)]
pub enum FeedError {
    #[error("Feed parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One close-approach record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NeoRecord {
    pub id: String,
    pub name: String,
    pub hazardous: bool,
    #[serde(deserialize_with = "loose_f64")]
    pub absolute_magnitude: f64,
    #[serde(deserialize_with = "loose_f64")]
    pub estimated_diameter_km: f64,
    #[serde(deserialize_with = "loose_f64")]
    pub distance_km: f64,
    #[serde(deserialize_with = "loose_f64")]
    pub velocity_km_s: f64,
    pub approach_date: String,
}

/// Accept `12.5` as well as `"12.5"`; upstream feeds send both.
fn loose_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum NumOrString {
        Num(f64),
        Str(String),
    }

    match NumOrString::deserialize(deserializer)? {
        NumOrString::Num(v) => Ok(v),
        NumOrString::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

/// Parse the JSON array returned by the backend.
pub fn parse_feed(json: &str) -> Result<Vec<NeoRecord>, FeedError> {
    Ok(serde_json::from_str(json)?)
}

fn record(
    id: &str,
    name: &str,
    hazardous: bool,
    absolute_magnitude: f64,
    estimated_diameter_km: f64,
    distance_km: f64,
    velocity_km_s: f64,
) -> NeoRecord {
    NeoRecord {
        id: id.to_string(),
        name: name.to_string(),
        hazardous,
        absolute_magnitude,
        estimated_diameter_km,
        distance_km,
        velocity_km_s,
        approach_date: "2026-01-19".to_string(),
    }
}

/// Sample data shown when the backend cannot be reached.
pub fn fallback_records() -> Vec<NeoRecord> {
    vec![
        record("54339214", "(2023 BG)", false, 23.29, 0.1306, 58_897_674.0, 22.51),
        record("54337572", "(2022 YT6)", false, 26.15, 0.0350, 63_686_680.0, 21.00),
        record("54476945", "(2024 RO43)", true, 24.76, 0.0664, 37_226_343.0, 6.75),
        record("54520800", "(2025 DB7)", false, 27.28, 0.0208, 14_315_379.0, 2.61),
    ]
}

/// Where the displayed list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedSource {
    Live,
    Cached,
}

impl FeedSource {
    /// Hint text shown above the list.
    pub fn hint(self) -> &'static str {
        match self {
            FeedSource::Live => "Live Data from NASA API",
            FeedSource::Cached => "Displaying Cached Data (Backend Offline)",
        }
    }
}

/// Display text for one row of the asteroid list.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub name: String,
    /// "Dia: … km • Vel: … km/s"
    pub size_line: String,
    /// "Dist: …M km"
    pub distance_line: String,
    /// Hazardous rows get an orange left border.
    pub hazardous: bool,
}

impl From<&NeoRecord> for ListEntry {
    fn from(r: &NeoRecord) -> Self {
        Self {
            name: r.name.clone(),
            size_line: format!(
                "Dia: {:.4} km \u{2022} Vel: {:.1} km/s",
                r.estimated_diameter_km, r.velocity_km_s
            ),
            // Whole kilometres, shown in millions.
            distance_line: format!("Dist: {:.2}M km", r.distance_km.trunc() / 1_000_000.0),
            hazardous: r.hazardous,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers_and_numeric_strings() {
        let json = r#"[
            { "id": "1", "name": "(2020 AB)", "hazardous": true,
              "absolute_magnitude": 22.1, "estimated_diameter_km": "0.25",
              "distance_km": "1234567.8", "velocity_km_s": 12,
              "approach_date": "2026-02-01" }
        ]"#;
        let records = parse_feed(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].estimated_diameter_km, 0.25);
        assert_eq!(records[0].distance_km, 1234567.8);
        assert_eq!(records[0].velocity_km_s, 12.0);
        assert!(records[0].hazardous);
    }

    #[test]
    fn rejects_malformed_feed() {
        assert!(parse_feed(r#"{ "not": "a list" }"#).is_err());
        assert!(parse_feed(r#"[{ "id": "1", "name": "x", "hazardous": false,
            "absolute_magnitude": "abc", "estimated_diameter_km": 1,
            "distance_km": 1, "velocity_km_s": 1, "approach_date": "" }]"#)
            .is_err());
    }

    #[test]
    fn fallback_has_one_hazard() {
        let records = fallback_records();
        assert_eq!(records.len(), 4);
        assert_eq!(records.iter().filter(|r| r.hazardous).count(), 1);
        assert_eq!(records[2].name, "(2024 RO43)");
    }

    #[test]
    fn fallback_round_trips_through_json() {
        let json = serde_json::to_string(&fallback_records()).unwrap();
        assert_eq!(parse_feed(&json).unwrap(), fallback_records());
    }

    #[test]
    fn list_entry_formatting() {
        let entry = ListEntry::from(&fallback_records()[0]);
        assert_eq!(entry.name, "(2023 BG)");
        assert_eq!(entry.size_line, "Dia: 0.1306 km \u{2022} Vel: 22.5 km/s");
        assert_eq!(entry.distance_line, "Dist: 58.90M km");
        assert!(!entry.hazardous);
    }

    #[test]
    fn hint_text() {
        assert_eq!(FeedSource::Live.hint(), "Live Data from NASA API");
        assert!(FeedSource::Cached.hint().contains("Backend Offline"));
    }
}
