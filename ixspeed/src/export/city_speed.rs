use crate::speed::SpeedYear;
use ixspeed_geo::Region;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// exported capacity history of a city.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CitySpeed {
    pub id: String,
    pub city: String,
    pub country: String,
    pub region: Region,
    pub lat: f64,
    pub long: f64,
    /// total capacity across all years
    pub speed: i64,
    #[serde(rename = "speedYears")]
    pub speed_years: BTreeMap<i32, SpeedYear>,
}

impl CitySpeed {
    /// lower-case "{country}-{city}" with spaces replaced by dashes.
    pub fn create_id(country: &str, city: &str) -> String {
        format!("{country}-{city}").to_lowercase().replace(' ', "-")
    }
}
