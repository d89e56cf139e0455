//! Exterior cladding.

use crate::domain::{BuildingSpec, ExteriorMaterial, QuantityReport};

use super::geometry::{exterior_wall_area, perimeter};

/// Average opening sizes deducted from the wall.
const SQFT_PER_WINDOW: f64 = 15.0;
const SQFT_PER_DOOR: f64 = 20.0;

const SQFT_PER_SQUARE: f64 = 100.0;
const SIDING_WASTE_FACTOR: f64 = 1.10;
const BRICKS_PER_SQFT: f64 = 7.0;
const BRICK_WASTE_FACTOR: f64 = 1.05;
const BRICKS_PER_MORTAR_BAG: f64 = 500.0;
const WALL_TIES_PER_SQFT: f64 = 1.5;

/// Exterior wall area less window and door openings, never below zero.
pub fn net_wall_area(spec: &BuildingSpec) -> f64 {
    let gross = exterior_wall_area(spec.length, spec.width, spec.wall_height, spec.stories);
    let openings = f64::from(spec.window_count) * SQFT_PER_WINDOW
        + f64::from(spec.door_count) * SQFT_PER_DOOR;
    (gross - openings).max(0.0)
}

pub fn calculate(spec: &BuildingSpec) -> QuantityReport {
    let net = net_wall_area(spec);
    let report = QuantityReport::new()
        .amount("net_wall_sqft", net)
        .spec("exterior_type", spec.exterior_type.label());

    match spec.exterior_type {
        ExteriorMaterial::VinylSiding | ExteriorMaterial::WoodSiding | ExteriorMaterial::FiberCement => {
            let stories = u64::from(spec.stories);
            report
                .count(
                    "siding_squares",
                    (net / SQFT_PER_SQUARE * SIDING_WASTE_FACTOR).ceil() as u64,
                )
                .amount(
                    "trim_lf",
                    perimeter(spec.length, spec.width) * f64::from(spec.stories) * 4.0,
                )
                .count("corners", 4 * stories)
        }
        ExteriorMaterial::Brick => {
            let bricks = (net * BRICKS_PER_SQFT * BRICK_WASTE_FACTOR) as u64;
            report
                .count("bricks", bricks)
                .count(
                    "mortar_bags",
                    (bricks as f64 / BRICKS_PER_MORTAR_BAG).ceil() as u64,
                )
                .count("wall_ties", (net * WALL_TIES_PER_SQFT) as u64)
        }
        ExteriorMaterial::Stone | ExteriorMaterial::Stucco | ExteriorMaterial::Eifs => {
            report.amount("coverage_sqft", net)
        }
        ExteriorMaterial::Metal | ExteriorMaterial::Other | ExteriorMaterial::Unknown => report,
    }
}
