pub mod cable_ops;
mod cable_record;
mod cable_stats;

pub use cable_record::CableRecord;
pub use cable_stats::{AllCableStats, CableStats, EARTH_DIAMETER_KM};
