use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// city spellings found in exchange records mapped to the spelling used by the
/// reference dataset.
pub const DEFAULT_CITY_CORRECTIONS: &[(&str, &str)] = &[
    ("Bangalore", "Bengaluru"),
    ("Bombay", "Mumbai"),
    ("Bruxelles", "Brussels"),
    ("Calcutta", "Kolkata"),
    ("Frankfurt am Main", "Frankfurt"),
    ("Geneve", "Geneva"),
    ("Genève", "Geneva"),
    ("Ho Chi Minh", "Ho Chi Minh City"),
    ("Hong Kong SAR", "Hong Kong"),
    ("Kiev", "Kyiv"),
    ("Koln", "Cologne"),
    ("Köln", "Cologne"),
    ("Lisboa", "Lisbon"),
    ("Madras", "Chennai"),
    ("Milano", "Milan"),
    ("Moskva", "Moscow"),
    ("Munchen", "Munich"),
    ("München", "Munich"),
    ("New York City", "New York"),
    ("NYC", "New York"),
    ("Peking", "Beijing"),
    ("Roma", "Rome"),
    ("Saigon", "Ho Chi Minh City"),
    ("Sankt Petersburg", "Saint Petersburg"),
    ("St Petersburg", "Saint Petersburg"),
    ("St. Petersburg", "Saint Petersburg"),
    ("Warszawa", "Warsaw"),
    ("Washington D.C.", "Washington"),
    ("Washington DC", "Washington"),
    ("Wien", "Vienna"),
    ("Zuerich", "Zurich"),
    ("Zürich", "Zurich"),
];

/// manual city name corrections applied before looking up a city.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityCorrections(HashMap<String, String>);

impl Default for CityCorrections {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_CITY_CORRECTIONS)
    }
}

impl CityCorrections {
    /// a table with no corrections.
    pub fn empty() -> Self {
        Self(HashMap::new())
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let table = pairs
            .iter()
            .map(|(raw, canonical)| (String::from(*raw), String::from(*canonical)))
            .collect();
        Self(table)
    }

    /// adds the entries of `other` to this table, replacing existing corrections
    /// for the same raw city name.
    pub fn merge(mut self, other: CityCorrections) -> Self {
        self.0.extend(other.0);
        self
    }

    /// the corrected spelling of `city`, or `city` itself if no correction is known.
    pub fn correct<'a>(&'a self, city: &'a str) -> &'a str {
        self.0.get(city).map(String::as_str).unwrap_or(city)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
