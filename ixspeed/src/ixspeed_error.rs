use ixspeed_geo::GeoError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum IxSpeedError {
    #[error("failure reading run configuration: {0}")]
    ConfigurationError(String),
    #[error("failure loading city reference data: {source}")]
    GeoError {
        #[from]
        source: GeoError,
    },
    #[error("failure reading {0}: {1}")]
    ReadError(String, std::io::Error),
    #[error("failure writing {0}: {1}")]
    WriteError(String, std::io::Error),
    #[error("failure decoding {0}: {1}")]
    DecodeError(String, serde_json::Error),
    #[error("failure encoding JSON: {source}")]
    SerdeJsonError {
        #[from]
        source: serde_json::Error,
    },
    #[error("failure downloading {0}: {1}")]
    DownloadError(String, reqwest::Error),
    #[error("file {0} already exists and overwrite is not enabled")]
    OutputExists(String),
    #[error("{0}")]
    InternalError(String),
}
