mod ixspeed_config;

pub use ixspeed_config::IxSpeedConfiguration;
