//! caching and summarizing of the submarine cable datasets published by
//! [https://www.submarinecablemap.com].
use super::{AllCableStats, CableRecord};
use crate::{util::fs, IxSpeedError};
use geojson::FeatureCollection;
use itertools::Itertools;
use kdam::tqdm;
use reqwest::blocking::Client;
use std::path::Path;

/// (collection, feature index file) pairs downloaded for the cable map.
const COLLECTIONS: [(&str, &str); 2] = [
    ("cable", "cable-geo.json"),
    ("landing-point", "landing-point-geo.json"),
];

/// downloads the cable and landing point feature collections along with the
/// detail document of every feature in them. files already in `directory` are
/// reused.
pub fn download_cables(
    client: &Client,
    api_url: &str,
    directory: &Path,
) -> Result<(), IxSpeedError> {
    let api_url = api_url.trim_end_matches('/');
    for (collection, index_file) in COLLECTIONS {
        let collection_dir = directory.join(collection);
        let url = format!("{api_url}/{collection}/{index_file}");
        let content = fs::fetch_cached(client, &url, &collection_dir.join(index_file))?;
        let ids = feature_ids(&content, &url)?;
        for id in tqdm!(ids.iter(), desc = format!("{collection} documents")) {
            let url = format!("{api_url}/{collection}/{id}.json");
            let _ = fs::fetch_cached(client, &url, &collection_dir.join(format!("{id}.json")))?;
        }
        eprintln!();
        log::info!("cached {} {collection} documents", ids.len());
    }
    Ok(())
}

/// reads every cable listed in the cached cable feature collection.
pub fn read_cables(directory: &Path) -> Result<Vec<CableRecord>, IxSpeedError> {
    let (collection, index_file) = COLLECTIONS[0];
    let collection_dir = directory.join(collection);
    let index_path = collection_dir.join(index_file);
    let content = fs::read_file(&index_path)?;
    let ids = feature_ids(&content, &index_path.to_string_lossy())?;
    ids.iter()
        .map(|id| fs::read_json(&collection_dir.join(format!("{id}.json"))))
        .collect()
}

/// computes statistics for the cached cables and writes them to `output_file`.
pub fn run_cable_stats(directory: &Path, output_file: &Path) -> Result<AllCableStats, IxSpeedError> {
    let cables = read_cables(directory)?;
    let stats = AllCableStats::new(&cables);
    let content = serde_json::to_vec(&stats)?;
    fs::write_file(output_file, &content)?;
    Ok(stats)
}

/// the distinct `id` properties of a GeoJSON feature collection, in order.
fn feature_ids(content: &[u8], source: &str) -> Result<Vec<String>, IxSpeedError> {
    let collection: FeatureCollection = serde_json::from_slice(content)
        .map_err(|e| IxSpeedError::DecodeError(String::from(source), e))?;
    let ids = collection
        .features
        .iter()
        .filter_map(|f| f.property("id").and_then(|id| id.as_str()))
        .unique()
        .map(String::from)
        .collect_vec();
    Ok(ids)
}
