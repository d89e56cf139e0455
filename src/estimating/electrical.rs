//! Electrical rough-in from conditioned area.

use crate::domain::{BuildingSpec, QuantityReport};

use super::geometry::total_living_area;

/// Panel upsizes above this total area.
const LARGE_PANEL_THRESHOLD_SQFT: f64 = 2000.0;

/// `max(minimum, total / sqft_per_unit)`, truncated.
fn at_least(minimum: u64, total_sqft: f64, sqft_per_unit: f64) -> u64 {
    minimum.max((total_sqft / sqft_per_unit) as u64)
}

pub fn electrical_for_area(total_sqft: f64) -> QuantityReport {
    let panel_amps = if total_sqft > LARGE_PANEL_THRESHOLD_SQFT {
        200
    } else {
        100
    };

    QuantityReport::new()
        .count("outlets", at_least(10, total_sqft, 60.0))
        .count("switches", at_least(5, total_sqft, 150.0))
        .count("light_fixtures", at_least(8, total_sqft, 100.0))
        // general-purpose 15A circuits
        .count("wire_14_2_lf", (total_sqft * 2.0) as u64)
        // 20A circuits
        .count("wire_12_2_lf", (total_sqft * 0.5) as u64)
        .count("breakers_15a", at_least(6, total_sqft, 500.0))
        .count("breakers_20a", at_least(4, total_sqft, 600.0))
        .count("panel_size_amps", panel_amps)
}

pub fn calculate(spec: &BuildingSpec) -> QuantityReport {
    electrical_for_area(total_living_area(spec.length, spec.width, spec.stories))
}
