use super::IxSpeedOperation;
use crate::{config::IxSpeedConfiguration, IxSpeedError};
use clap::Parser;

/// command line tool for summarizing internet exchange capacity by city
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct IxSpeedApp {
    #[command(subcommand)]
    pub op: IxSpeedOperation,
    /// TOML or JSON file with ixspeed parameters, defaults are used if omitted
    #[arg(long, global = true)]
    pub configuration_file: Option<String>,
}

impl IxSpeedApp {
    pub fn run(&self) -> Result<(), IxSpeedError> {
        let conf = match &self.configuration_file {
            None => Ok(IxSpeedConfiguration::default()),
            Some(f) => {
                log::info!("reading ixspeed configuration from {f}");
                IxSpeedConfiguration::try_from(f)
            }
        }?;
        self.op.run(&conf)
    }
}
