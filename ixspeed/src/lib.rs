pub mod app;
pub mod cable;
pub mod config;
pub mod export;
mod ixspeed_error;
pub mod peering;
pub mod speed;
pub mod util;

pub use ixspeed_error::IxSpeedError;
