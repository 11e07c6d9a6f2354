use super::{build_resolver, run_city_speeds};
use crate::{cable::cable_ops, config::IxSpeedConfiguration, peering, util::fs, IxSpeedError};
use clap::Subcommand;
use std::path::Path;

#[derive(Debug, Clone, Subcommand)]
pub enum IxSpeedOperation {
    /// download the PeeringDB exchange and link datasets into the peering data directory
    Download,
    /// compute cumulative link capacity per city and write it as JSON
    CitySpeeds {
        /// overrides the configured output file
        #[arg(long)]
        output_file: Option<String>,
        /// replace the output file if it exists
        #[arg(long)]
        overwrite: bool,
    },
    /// resolve a single city name to coordinates
    Lookup {
        #[arg(long)]
        city: String,
        /// country as found in PeeringDB, may be omitted
        #[arg(long)]
        country: Option<String>,
    },
    /// download submarine cable and landing point documents into the cable data directory
    DownloadCables,
    /// summarize the cached submarine cables
    CableStats {
        #[arg(long, default_value_t = String::from("data/stats.json"))]
        output_file: String,
    },
}

impl IxSpeedOperation {
    pub fn run(&self, conf: &IxSpeedConfiguration) -> Result<(), IxSpeedError> {
        match self {
            IxSpeedOperation::Download => {
                let client = fs::build_client(conf.request_timeout_seconds)?;
                peering::peering_source::download_peering_data(
                    &client,
                    &conf.peeringdb_url,
                    Path::new(&conf.peering_data_directory),
                )
            }
            IxSpeedOperation::CitySpeeds {
                output_file,
                overwrite,
            } => {
                let output_file = output_file.as_ref().unwrap_or(&conf.output_file);
                let conf = IxSpeedConfiguration {
                    overwrite: conf.overwrite || *overwrite,
                    ..conf.clone()
                };
                let results = run_city_speeds(&conf, Path::new(output_file))?;
                eprintln!("wrote {} cities to {output_file}", results.len());
                Ok(())
            }
            IxSpeedOperation::Lookup { city, country } => {
                let country = country.as_deref().unwrap_or_default();
                let resolver = build_resolver(conf)?;
                match resolver.resolve(city, country) {
                    Some(location) => println!("{location}"),
                    None => println!("no location found for city='{city}', country='{country}'"),
                }
                Ok(())
            }
            IxSpeedOperation::DownloadCables => {
                let client = fs::build_client(conf.request_timeout_seconds)?;
                cable_ops::download_cables(
                    &client,
                    &conf.cable_api_url,
                    Path::new(&conf.cable_data_directory),
                )
            }
            IxSpeedOperation::CableStats { output_file } => {
                let stats = cable_ops::run_cable_stats(
                    Path::new(&conf.cable_data_directory),
                    Path::new(output_file),
                )?;
                println!("{stats}");
                Ok(())
            }
        }
    }
}
