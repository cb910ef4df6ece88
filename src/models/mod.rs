pub mod span;
pub mod station;
pub mod temperature;

pub use span::ByteSpan;
pub use station::StationStats;
pub use temperature::ScaledTemperature;
