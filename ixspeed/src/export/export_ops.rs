use super::CitySpeed;
use crate::{speed::SpeedTable, util::fs, IxSpeedError};
use ixspeed_geo::Region;
use itertools::Itertools;
use std::path::Path;

/// builds one [`CitySpeed`] per aggregated location, ordered by id. spellings
/// that differ only in case or spacing share an id and are reported.
pub fn city_speeds(table: &SpeedTable) -> Vec<CitySpeed> {
    let results = table
        .iter()
        .filter_map(|(key, speeds)| {
            let city = key.city.trim();
            if city.is_empty() {
                return None;
            }
            let country = key.country_or_empty();
            let speed_years = speeds.cumulative();
            let speed = speed_years.last().map(|y| y.total).unwrap_or_default();
            Some(CitySpeed {
                id: CitySpeed::create_id(country, city),
                city: String::from(city),
                country: String::from(country),
                region: Region::from_country_code(country),
                lat: speeds.location.lat,
                long: speeds.location.long,
                speed,
                speed_years: speed_years.into_iter().map(|y| (y.year, y)).collect(),
            })
        })
        .sorted_by(|a, b| a.id.cmp(&b.id))
        .collect_vec();
    for id in results.iter().map(|r| r.id.as_str()).duplicates() {
        log::warn!("multiple locations share the exported id '{id}'");
    }
    results
}

/// writes the results as a pretty-printed JSON array.
pub fn write_city_speeds(
    results: &[CitySpeed],
    filepath: &Path,
    overwrite: bool,
) -> Result<(), IxSpeedError> {
    if filepath.exists() && !overwrite {
        return Err(IxSpeedError::OutputExists(
            filepath.to_string_lossy().to_string(),
        ));
    }
    let content = serde_json::to_vec_pretty(results)?;
    fs::write_file(filepath, &content)?;
    log::info!(
        "wrote {} city speeds to {}",
        results.len(),
        filepath.to_string_lossy()
    );
    Ok(())
}
