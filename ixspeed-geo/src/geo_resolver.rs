use crate::{CityCorrections, Location, LocationIndex};

/// resolves city names to locations, applying manual corrections and then
/// falling back from a (city, country) match to a city-only match.
#[derive(Debug)]
pub struct GeoResolver {
    index: LocationIndex,
    corrections: CityCorrections,
}

impl GeoResolver {
    pub fn new(index: LocationIndex, corrections: CityCorrections) -> Self {
        Self { index, corrections }
    }

    /// finds the location for a city.
    ///
    /// # Arguments
    ///
    /// * `city` - city name exactly as found in the source record
    /// * `country` - country of the source record, may be empty
    ///
    /// # Result
    ///
    /// the (city, country) entry if one exists, otherwise the city-only entry,
    /// otherwise None.
    pub fn resolve(&self, city: &str, country: &str) -> Option<&Location> {
        let city = self.corrections.correct(city);
        self.index
            .lookup(city, country)
            .or_else(|| self.index.lookup(city, ""))
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    pub fn corrections(&self) -> &CityCorrections {
        &self.corrections
    }
}
