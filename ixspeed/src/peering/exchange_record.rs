use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// an internet exchange as listed by PeeringDB (`ix` objects). the city field is
/// free text and may name several cities.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExchangeRecord {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl ExchangeRecord {
    pub fn new(id: i64, city: &str, country: &str) -> Self {
        Self {
            id,
            name: String::new(),
            city: String::from(city),
            country: String::from(country),
        }
    }
}

impl Display for ExchangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ix={} '{}' ({}, {})", self.id, self.name, self.city, self.country)
    }
}
