use crate::{speed::DEFAULT_DELIMITERS, IxSpeedError};
use ixspeed_geo::{CityCorrections, ReferenceColumns};
use serde::{Deserialize, Serialize};

/// defines the inputs, outputs and behaviors of an ixspeed run. any field
/// missing from a configuration file takes its default value.
#[derive(Clone, Serialize, Deserialize, Debug)]
#[serde(default)]
pub struct IxSpeedConfiguration {
    /// directory where PeeringDB datasets are cached
    pub peering_data_directory: String,
    /// city coordinates CSV (simplemaps worldcities layout by default)
    pub reference_file: String,
    pub reference_columns: ReferenceColumns,
    /// JSON file written by the city-speeds operation
    pub output_file: String,
    pub peeringdb_url: String,
    pub cable_data_directory: String,
    pub cable_api_url: String,
    pub request_timeout_seconds: u64,
    /// if false, only the corrections in `city_corrections` are applied
    pub use_default_corrections: bool,
    /// corrections added to (or replacing) the built-in city name corrections
    pub city_corrections: CityCorrections,
    /// delimiters used to split multi-city exchange locations, in priority order
    pub delimiters: Vec<String>,
    pub parallelize: bool,
    pub overwrite: bool,
}

impl Default for IxSpeedConfiguration {
    fn default() -> Self {
        Self {
            peering_data_directory: String::from("peeringdata"),
            reference_file: String::from("data/worldcities.csv"),
            reference_columns: ReferenceColumns::default(),
            output_file: String::from("data/city-speeds.json"),
            peeringdb_url: String::from("https://www.peeringdb.com/api"),
            cable_data_directory: String::from("data/submarinecables"),
            cable_api_url: String::from("https://www.submarinecablemap.com/api/v3"),
            request_timeout_seconds: 300,
            use_default_corrections: true,
            city_corrections: CityCorrections::empty(),
            delimiters: DEFAULT_DELIMITERS.iter().map(|d| String::from(*d)).collect(),
            parallelize: false,
            overwrite: false,
        }
    }
}

impl IxSpeedConfiguration {
    /// the correction table used to build a [`ixspeed_geo::GeoResolver`].
    pub fn get_city_corrections(&self) -> CityCorrections {
        if self.use_default_corrections {
            CityCorrections::default().merge(self.city_corrections.clone())
        } else {
            self.city_corrections.clone()
        }
    }
}

impl TryFrom<&String> for IxSpeedConfiguration {
    type Error = IxSpeedError;

    fn try_from(f: &String) -> Result<Self, Self::Error> {
        let conf: IxSpeedConfiguration = if f.ends_with(".toml") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                IxSpeedError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            toml::from_str(&s).map_err(|e| {
                IxSpeedError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else if f.ends_with(".json") {
            let s = std::fs::read_to_string(f).map_err(|e| {
                IxSpeedError::ConfigurationError(format!("failure reading {f}: {e}"))
            })?;
            serde_json::from_str(&s).map_err(|e| {
                IxSpeedError::ConfigurationError(format!("failure decoding {f}: {e}"))
            })?
        } else {
            return Err(IxSpeedError::ConfigurationError(format!(
                "unsupported file type: {f}"
            )));
        };
        if conf.delimiters.iter().any(|d| d.is_empty()) {
            return Err(IxSpeedError::ConfigurationError(format!(
                "{f}: delimiters must not be empty strings"
            )));
        }
        Ok(conf)
    }
}
