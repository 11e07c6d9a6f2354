use crate::{CityCountryKey, GeoError, Location};
use std::collections::{hash_map::Entry, HashMap};

/// one raw row of the city coordinate reference dataset. numeric fields are kept
/// as text so that parsing rules are applied when the index is built.
#[derive(Clone, Debug, Default)]
pub struct ReferenceRow {
    /// position of the row in the source, used for error reporting.
    pub row: usize,
    /// alternative spellings of the city name that share these coordinates.
    pub names: Vec<String>,
    pub country: String,
    pub lat: String,
    pub long: String,
    pub population: String,
}

/// in-memory table of known cities. every spelling of a city is stored under a
/// (city, country) key and a city-only key, each holding the most populous
/// candidate seen for that key.
#[derive(Debug, Default)]
pub struct LocationIndex {
    locations: HashMap<CityCountryKey, Location>,
}

impl LocationIndex {
    /// builds the index from reference rows.
    ///
    /// # Arguments
    ///
    /// * `rows` - reference dataset rows, in file order
    ///
    /// # Result
    ///
    /// the index, or an error if any row has a latitude or longitude that is not a number.
    /// a population that fails to parse is treated as zero.
    pub fn build<I>(rows: I) -> Result<LocationIndex, GeoError>
    where
        I: IntoIterator<Item = ReferenceRow>,
    {
        let mut index = LocationIndex::default();
        for row in rows {
            let lat = parse_coordinate(&row, "latitude", &row.lat)?;
            let long = parse_coordinate(&row, "longitude", &row.long)?;
            let population = row.population.trim().parse::<i64>().unwrap_or(0).max(0);

            for name in row.names.iter().filter(|n| !n.is_empty()) {
                let location = Location::new(name, &row.country, lat, long, population);
                index.insert(CityCountryKey::new(name, &row.country), location.clone());
                index.insert(CityCountryKey::city_only(name), location);
            }
        }
        log::debug!("built location index with {} keys", index.len());
        Ok(index)
    }

    /// exact match on (city, country). an empty country addresses the city-only entry.
    pub fn lookup(&self, city: &str, country: &str) -> Option<&Location> {
        self.get(&CityCountryKey::new(city, country))
    }

    pub fn get(&self, key: &CityCountryKey) -> Option<&Location> {
        self.locations.get(key)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// strictly greater population replaces the stored entry, so ties keep the first seen.
    fn insert(&mut self, key: CityCountryKey, location: Location) {
        match self.locations.entry(key) {
            Entry::Vacant(entry) => {
                entry.insert(location);
            }
            Entry::Occupied(mut entry) => {
                if entry.get().population < location.population {
                    entry.insert(location);
                }
            }
        }
    }
}

fn parse_coordinate(row: &ReferenceRow, field: &'static str, value: &str) -> Result<f64, GeoError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| GeoError::InvalidCoordinate {
            row: row.row,
            field,
            value: String::from(value),
        })
}
