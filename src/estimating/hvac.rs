//! Heating and cooling load, equipment size and distribution.

use crate::domain::{BuildingSpec, QuantityReport};

use super::geometry::total_living_area;

const BTU_PER_TON: f64 = 12_000.0;

/// Standard condenser sizes in tons.
pub const TONNAGE_LADDER: [f64; 7] = [1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 5.0];

pub fn btu_per_sqft(climate_zone: u8) -> f64 {
    match climate_zone {
        1 | 2 => 25.0,
        3 => 22.0,
        4 => 20.0,
        5 => 35.0,
        6 => 40.0,
        7 => 45.0,
        8 => 50.0,
        _ => 30.0,
    }
}

/// Smallest standard size that covers the load; loads past the ladder get
/// the largest size.
pub fn system_tonnage(required_tons: f64) -> f64 {
    TONNAGE_LADDER
        .iter()
        .copied()
        .find(|size| required_tons <= *size)
        .unwrap_or(TONNAGE_LADDER[TONNAGE_LADDER.len() - 1])
}

pub fn hvac_for_area(total_sqft: f64, climate_zone: u8) -> QuantityReport {
    let btu_required = total_sqft * btu_per_sqft(climate_zone);
    let supply_registers = 6_u64.max((total_sqft / 200.0) as u64);

    QuantityReport::new()
        .count("btu_required", btu_required as u64)
        .amount("tonnage", system_tonnage(btu_required / BTU_PER_TON))
        .count("duct_lf", (total_sqft * 0.5) as u64)
        .count("supply_registers", supply_registers)
        .count("return_registers", 2_u64.max(supply_registers / 3))
}

pub fn calculate(spec: &BuildingSpec) -> QuantityReport {
    hvac_for_area(
        total_living_area(spec.length, spec.width, spec.stories),
        spec.climate_zone,
    )
}
