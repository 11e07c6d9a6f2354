pub mod cumulative;
mod exchange_location_expander;
mod ix_location;
mod speed_table;
pub mod speed_ops;

pub use cumulative::SpeedYear;
pub use exchange_location_expander::{split_city_field, ExchangeLocationExpander, DEFAULT_DELIMITERS};
pub use ix_location::IxLocation;
pub use speed_ops::ExchangeLocations;
pub use speed_table::{LocationSpeeds, SpeedSeries, SpeedTable};
