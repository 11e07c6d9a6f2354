use serde::{Deserialize, Serialize};

/// a submarine cable as described by the submarinecablemap.com cable API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CableRecord {
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// length as published, e.g. "1,234 km"
    #[serde(default)]
    pub length: Option<String>,
    #[serde(default)]
    pub is_planned: bool,
}

impl CableRecord {
    /// cable length in kilometers, if published.
    pub fn length_km(&self) -> Option<i64> {
        self.length.as_deref().and_then(parse_length_km)
    }
}

/// parses a "{number} {unit}" length with thousands separators. lengths with a
/// unit other than km are reported and their number is used as-is.
pub fn parse_length_km(length: &str) -> Option<i64> {
    let mut parts = length.trim().splitn(2, ' ');
    let number = parts.next()?.replace(',', "");
    let unit = parts.next().unwrap_or_default().trim();
    if unit != "km" {
        log::warn!("cable length '{length}' has unexpected unit '{unit}'");
    }
    match number.parse::<i64>() {
        Ok(km) => Some(km),
        Err(_) => {
            log::warn!("cable length '{length}' is not a number");
            None
        }
    }
}
