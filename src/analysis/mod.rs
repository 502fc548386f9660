//! Analysis of decoded reports
//!
//! - [`derived`] - Pressure altitude, density altitude, relative humidity, air density
//! - [`flight_category`] - VFR/MVFR/IFR/LIFR classification
//!
//! Both are pure functions of their inputs and independent of each other.

pub mod derived;
pub mod flight_category;

#[cfg(test)]
pub mod tests;

pub use derived::DerivedMetrics;
pub use flight_category::FlightCategory;
