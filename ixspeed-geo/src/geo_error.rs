use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeoError {
    #[error("failure reading reference file {0}: {1}")]
    ReferenceReadError(String, csv::Error),
    #[error("reference row {row} has {found} columns but column {required} is required")]
    MissingColumn {
        row: usize,
        found: usize,
        required: usize,
    },
    #[error("reference row {row} has invalid {field} '{value}'")]
    InvalidCoordinate {
        row: usize,
        field: &'static str,
        value: String,
    },
    #[error("reference dataset contains no cities")]
    EmptyReference,
    #[error("{0}")]
    InternalError(String),
}
