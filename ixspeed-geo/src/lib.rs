pub mod city_corrections;
mod geo_error;
pub mod geo_resolver;
pub mod location;
pub mod location_index;
pub mod reference_reader;
pub mod region;

pub use city_corrections::CityCorrections;
pub use geo_error::GeoError;
pub use geo_resolver::GeoResolver;
pub use location::{CityCountryKey, Location};
pub use location_index::{LocationIndex, ReferenceRow};
pub use reference_reader::ReferenceColumns;
pub use region::Region;
