mod city_speeds;
mod ixspeed_app;
mod operation;

pub use city_speeds::{build_resolver, run_city_speeds};
pub use ixspeed_app::IxSpeedApp;
pub use operation::IxSpeedOperation;
