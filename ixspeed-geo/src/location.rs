use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// a known city with its coordinates, as found in the reference dataset.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub lat: f64,
    pub long: f64,
    pub population: i64,
}

impl Location {
    pub fn new(city: &str, country: &str, lat: f64, long: f64, population: i64) -> Self {
        Self {
            city: String::from(city),
            country: String::from(country),
            lat,
            long,
            population,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, {} ({}, {}) population={}",
            self.city, self.country, self.lat, self.long, self.population
        )
    }
}

/// lookup key into a [`crate::LocationIndex`]. a key without a country
/// is the city-only wildcard entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CityCountryKey {
    pub city: String,
    pub country: Option<String>,
}

impl CityCountryKey {
    /// builds a key for this pair. an empty country string yields the
    /// city-only key.
    pub fn new(city: &str, country: &str) -> Self {
        let country = if country.is_empty() {
            None
        } else {
            Some(String::from(country))
        };
        Self {
            city: String::from(city),
            country,
        }
    }

    pub fn city_only(city: &str) -> Self {
        Self {
            city: String::from(city),
            country: None,
        }
    }

    pub fn country_or_empty(&self) -> &str {
        self.country.as_deref().unwrap_or_default()
    }
}

impl Display for CityCountryKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.country {
            Some(country) => write!(f, "{}, {}", self.city, country),
            None => write!(f, "{}", self.city),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CityCountryKey;

    #[test]
    fn empty_country_is_city_only() {
        assert_eq!(
            CityCountryKey::new("Paris", ""),
            CityCountryKey::city_only("Paris")
        );
        assert_ne!(
            CityCountryKey::new("Paris", "FR"),
            CityCountryKey::city_only("Paris")
        );
    }
}
