//! Solire domain library
//!
//! Everything the dashboard shows lives here, independent of the TUI:
//!
//! - [`reading`] - timestamped sensor readings and the in-memory reading log
//! - [`telemetry`] - synthetic sample source standing in for the station hardware
//! - [`fuzzy`] - Mamdani fuzzy inference for crop recommendation

pub mod fuzzy;
pub mod reading;
pub mod telemetry;

pub use fuzzy::{recommend, Confidence, CropScore, FuzzyError, Recommendation, SoilInput};
pub use reading::{ColorReading, MoistureReading, PhReading, ReadingLog, TemperatureReading};
pub use telemetry::{Sample, SyntheticStation};
