//! reads the city coordinate reference dataset (simplemaps `worldcities.csv` layout
//! by default) into [`ReferenceRow`]s.
use crate::{GeoError, LocationIndex, ReferenceRow};
use kdam::tqdm;
use serde::{Deserialize, Serialize};
use std::{io::Read, path::Path};

/// column positions of the fields used from the reference dataset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceColumns {
    pub city: usize,
    pub city_ascii: usize,
    /// a third spelling, in worldcities.csv the admin area name.
    pub alternate_name: usize,
    pub lat: usize,
    pub long: usize,
    pub country: usize,
    pub population: usize,
}

impl Default for ReferenceColumns {
    fn default() -> Self {
        Self {
            city: 0,
            city_ascii: 1,
            lat: 2,
            long: 3,
            country: 5,
            alternate_name: 7,
            population: 9,
        }
    }
}

impl ReferenceColumns {
    fn max_column(&self) -> usize {
        [
            self.city,
            self.city_ascii,
            self.alternate_name,
            self.lat,
            self.long,
            self.country,
            self.population,
        ]
        .into_iter()
        .max()
        .unwrap_or_default()
    }
}

/// reads the reference CSV file and builds a [`LocationIndex`] from it.
pub fn read_location_index(
    filepath: &Path,
    columns: &ReferenceColumns,
) -> Result<LocationIndex, GeoError> {
    let rows = read_reference_csv(filepath, columns)?;
    log::info!(
        "read {} reference rows from {}",
        rows.len(),
        filepath.to_string_lossy()
    );
    LocationIndex::build(rows)
}

/// reads all rows from a reference CSV file. the header row is skipped.
pub fn read_reference_csv(
    filepath: &Path,
    columns: &ReferenceColumns,
) -> Result<Vec<ReferenceRow>, GeoError> {
    let filename = filepath.to_string_lossy().to_string();
    let file = std::fs::File::open(filepath).map_err(|e| {
        GeoError::ReferenceReadError(filename.clone(), csv::Error::from(e))
    })?;
    read_reference_rows(file, &filename, columns)
}

/// reads reference rows from any reader containing CSV with a header row.
pub fn read_reference_rows<R: Read>(
    source: R,
    source_name: &str,
    columns: &ReferenceColumns,
) -> Result<Vec<ReferenceRow>, GeoError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(source);
    let required = columns.max_column();
    let mut rows = vec![];
    for (idx, record) in tqdm!(reader.into_records(), desc = format!("reading {source_name}"))
        .enumerate()
    {
        let record = record
            .map_err(|e| GeoError::ReferenceReadError(String::from(source_name), e))?;
        // header occupies line 1
        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 2);
        if record.len() <= required {
            return Err(GeoError::MissingColumn {
                row,
                found: record.len(),
                required,
            });
        }
        let field = |col: usize| String::from(record.get(col).unwrap_or_default());
        rows.push(ReferenceRow {
            row,
            names: vec![
                field(columns.city),
                field(columns.city_ascii),
                field(columns.alternate_name),
            ],
            country: field(columns.country),
            lat: field(columns.lat),
            long: field(columns.long),
            population: field(columns.population),
        });
    }
    if rows.is_empty() {
        return Err(GeoError::EmptyReference);
    }
    Ok(rows)
}
