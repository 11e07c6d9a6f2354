mod exchange_record;
mod link_record;
pub mod peering_source;

pub use exchange_record::ExchangeRecord;
pub use link_record::{LinkRecord, NetworkIxLanRow, STATUS_OK};
pub use peering_source::PeeringDataset;
