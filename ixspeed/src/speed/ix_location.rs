use ixspeed_geo::{CityCountryKey, Location};
use serde::{Deserialize, Serialize};

/// one city an exchange is located in. capacity is aggregated by `key`, the
/// city token and country exactly as the exchange record spells them, while
/// `location` holds the coordinates that spelling resolved to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IxLocation {
    pub key: CityCountryKey,
    pub location: Location,
}

impl IxLocation {
    pub fn new(city: &str, country: &str, location: Location) -> Self {
        Self {
            key: CityCountryKey::new(city, country),
            location,
        }
    }

    pub fn city(&self) -> &str {
        &self.key.city
    }

    pub fn country(&self) -> &str {
        self.key.country_or_empty()
    }
}
