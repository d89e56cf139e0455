//! Quantity takeoff engine
//!
//! Pure functions from a [`BuildingSpec`] to per-trade material quantities.
//! Callers validate the spec first; every formula here is total over
//! in-domain input.

pub mod drywall;
pub mod electrical;
pub mod exterior;
pub mod foundation;
pub mod framing;
pub mod geometry;
pub mod hvac;
pub mod insulation;
pub mod plumbing;
pub mod roofing;

use std::collections::BTreeMap;

use crate::domain::{BuildingMetrics, BuildingSpec, QuantityReport, Takeoff, Trade};

pub fn metrics(spec: &BuildingSpec) -> BuildingMetrics {
    BuildingMetrics {
        floor_area_sqft: geometry::floor_area(spec.length, spec.width),
        total_living_area_sqft: geometry::total_living_area(spec.length, spec.width, spec.stories),
        perimeter_ft: geometry::perimeter(spec.length, spec.width),
        exterior_wall_area_sqft: geometry::exterior_wall_area(
            spec.length,
            spec.width,
            spec.wall_height,
            spec.stories,
        ),
        roof_area_sqft: geometry::roof_area(spec.length, spec.width, spec.roof_style, spec.roof_pitch),
    }
}

pub fn estimate_trade(spec: &BuildingSpec, trade: Trade) -> QuantityReport {
    match trade {
        Trade::Foundation => foundation::calculate(spec),
        Trade::Framing => framing::calculate(spec),
        Trade::Insulation => insulation::calculate(spec),
        Trade::Drywall => drywall::calculate(spec),
        Trade::Electrical => electrical::calculate(spec),
        Trade::Plumbing => plumbing::calculate(spec),
        Trade::Hvac => hvac::calculate(spec),
        Trade::Exterior => exterior::calculate(spec),
        Trade::Roofing => roofing::calculate(spec),
    }
}

/// Full takeoff across every trade.
pub fn estimate(spec: &BuildingSpec) -> Takeoff {
    let trades: BTreeMap<Trade, QuantityReport> = Trade::ALL
        .iter()
        .map(|&trade| (trade, estimate_trade(spec, trade)))
        .collect();

    let metrics = metrics(spec);

    tracing::debug!(
        floor_area = metrics.floor_area_sqft,
        roof_area = metrics.roof_area_sqft,
        stories = spec.stories,
        "Computed takeoff"
    );

    Takeoff { metrics, trades }
}
