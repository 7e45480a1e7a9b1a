pub mod station;
pub mod temperature;

pub use station::StationStats;
pub use temperature::{format_tenths, parse_temperature};
