//! reading and caching of the PeeringDB datasets. see
//! [https://www.peeringdb.com/apidocs/] for the object definitions.
use super::{ExchangeRecord, LinkRecord, NetworkIxLanRow};
use crate::{util::fs, IxSpeedError};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PeeringDataset {
    /// `ix` objects
    Exchanges,
    /// `netixlan` objects
    Links,
}

impl PeeringDataset {
    pub const ALL: [PeeringDataset; 2] = [PeeringDataset::Exchanges, PeeringDataset::Links];

    pub fn filename(&self) -> &'static str {
        match self {
            PeeringDataset::Exchanges => "ix.json",
            PeeringDataset::Links => "network-ix-lans.json",
        }
    }

    pub fn endpoint(&self) -> &'static str {
        match self {
            PeeringDataset::Exchanges => "ix",
            PeeringDataset::Links => "netixlan",
        }
    }
}

/// response body of a PeeringDB list request.
#[derive(Deserialize)]
struct PeeringDbResponse {
    data: serde_json::Value,
}

/// downloads every [`PeeringDataset`] into `directory`. datasets already present
/// in the directory are not downloaded again.
pub fn download_peering_data(
    client: &Client,
    base_url: &str,
    directory: &Path,
) -> Result<(), IxSpeedError> {
    for dataset in PeeringDataset::ALL {
        let filepath = directory.join(dataset.filename());
        let filename = filepath.to_string_lossy();
        if filepath.is_file() {
            log::info!("[{filename}]: file cached, skip download");
            continue;
        }
        let url = format!("{}/{}", base_url.trim_end_matches('/'), dataset.endpoint());
        log::info!("[{filename}]: loading from {url}");
        let content = fs::download(client, &url)?;
        let data = unwrap_response(&content, &url)?;
        fs::write_file(&filepath, &data)?;
        log::info!("[{filename}]: finished");
    }
    Ok(())
}

/// extracts the `data` array of a PeeringDB response as pretty-printed JSON.
fn unwrap_response(content: &[u8], url: &str) -> Result<Vec<u8>, IxSpeedError> {
    let response: PeeringDbResponse = serde_json::from_slice(content)
        .map_err(|e| IxSpeedError::DecodeError(String::from(url), e))?;
    if !response.data.is_array() {
        return Err(IxSpeedError::InternalError(format!(
            "response from {url} has no 'data' array"
        )));
    }
    let pretty = serde_json::to_vec_pretty(&response.data)?;
    Ok(pretty)
}

pub fn read_exchanges(directory: &Path) -> Result<Vec<ExchangeRecord>, IxSpeedError> {
    let filepath = directory.join(PeeringDataset::Exchanges.filename());
    fs::read_json(&filepath)
}

pub fn read_links(directory: &Path) -> Result<Vec<LinkRecord>, IxSpeedError> {
    let filepath = directory.join(PeeringDataset::Links.filename());
    let rows: Vec<NetworkIxLanRow> = fs::read_json(&filepath)?;
    Ok(rows.into_iter().map(LinkRecord::from).collect())
}
