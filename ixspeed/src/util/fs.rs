use crate::IxSpeedError;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::{path::Path, time::Duration};

pub fn build_client(timeout_seconds: u64) -> Result<Client, IxSpeedError> {
    Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| IxSpeedError::InternalError(format!("failure building http client: {e}")))
}

/// returns the content found at `url`. if `filepath` already exists, its contents
/// are returned instead of downloading, otherwise the download is written to `filepath`.
pub fn fetch_cached(client: &Client, url: &str, filepath: &Path) -> Result<Vec<u8>, IxSpeedError> {
    let filename = filepath.to_string_lossy();
    if filepath.is_file() {
        log::info!("[{filename}]: file cached, skip download");
        return read_file(filepath);
    }
    log::info!("[{filename}]: downloading from {url}");
    let content = download(client, url)?;
    write_file(filepath, &content)?;
    log::info!("[{filename}]: finished");
    Ok(content)
}

pub fn download(client: &Client, url: &str) -> Result<Vec<u8>, IxSpeedError> {
    let response = client
        .get(url)
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| IxSpeedError::DownloadError(String::from(url), e))?;
    let bytes = response
        .bytes()
        .map_err(|e| IxSpeedError::DownloadError(String::from(url), e))?;
    Ok(bytes.to_vec())
}

pub fn read_file(filepath: &Path) -> Result<Vec<u8>, IxSpeedError> {
    std::fs::read(filepath)
        .map_err(|e| IxSpeedError::ReadError(filepath.to_string_lossy().to_string(), e))
}

/// writes `content` to `filepath`, creating missing parent directories.
pub fn write_file(filepath: &Path, content: &[u8]) -> Result<(), IxSpeedError> {
    let filename = filepath.to_string_lossy().to_string();
    if let Some(parent) = filepath.parent() {
        if !parent.as_os_str().is_empty() && !parent.is_dir() {
            std::fs::create_dir_all(parent)
                .map_err(|e| IxSpeedError::WriteError(filename.clone(), e))?;
        }
    }
    std::fs::write(filepath, content).map_err(|e| IxSpeedError::WriteError(filename, e))
}

pub fn read_json<T: DeserializeOwned>(filepath: &Path) -> Result<T, IxSpeedError> {
    let content = read_file(filepath)?;
    serde_json::from_slice(&content)
        .map_err(|e| IxSpeedError::DecodeError(filepath.to_string_lossy().to_string(), e))
}
