//! Gypsum board, joint compound and tape.

use crate::domain::{BuildingSpec, QuantityReport};

use super::framing::INTERIOR_WALL_LF_PER_SQFT;
use super::geometry::{exterior_wall_area, floor_area};

const NET_WALL_FRACTION: f64 = 0.90;
const SHEET_SQFT: f64 = 32.0;
const WASTE_FACTOR: f64 = 1.10;
/// Sheets finished per 5-gallon bucket.
const SHEETS_PER_BUCKET: f64 = 30.0;
/// Sheets taped per 500 ft roll.
const SHEETS_PER_TAPE_ROLL: f64 = 20.0;

pub fn calculate(spec: &BuildingSpec) -> QuantityReport {
    let stories = f64::from(spec.stories);
    let floor = floor_area(spec.length, spec.width);

    let ceiling_sqft = floor * stories;
    let exterior_sqft = exterior_wall_area(spec.length, spec.width, spec.wall_height, spec.stories);
    // interior partitions are boarded on both sides
    let interior_sqft = floor * INTERIOR_WALL_LF_PER_SQFT * stories * spec.wall_height * 2.0;
    let wall_sqft = (exterior_sqft + interior_sqft) * NET_WALL_FRACTION;
    let total_sqft = ceiling_sqft + wall_sqft;

    let sheets = (total_sqft / SHEET_SQFT * WASTE_FACTOR).ceil() as u64;

    QuantityReport::new()
        .amount("ceiling_sqft", ceiling_sqft)
        .amount("wall_sqft", wall_sqft)
        .amount("total_sqft", total_sqft)
        .count("sheets_4x8", sheets)
        .count(
            "joint_compound_buckets",
            (sheets as f64 / SHEETS_PER_BUCKET).ceil() as u64,
        )
        .count("tape_rolls", (sheets as f64 / SHEETS_PER_TAPE_ROLL).ceil() as u64)
}
