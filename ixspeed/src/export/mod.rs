mod city_speed;
pub mod export_ops;

pub use city_speed::CitySpeed;
