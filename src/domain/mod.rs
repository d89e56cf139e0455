//! Domain types
//!
//! Value objects shared by the takeoff engine, the feature aggregator and the
//! HTTP layer.

pub mod building;
pub mod categorical;
pub mod features;
pub mod lenient;
pub mod quantities;

pub use building::{BuildingSpec, FoundationSpec, InputError};
pub use categorical::*;
pub use features::{CategoryConfidence, FeatureReport};
pub use quantities::{BuildingMetrics, Quantity, QuantityReport, Takeoff, Trade};
