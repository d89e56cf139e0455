//! Framing lumber and sheathing.

use crate::domain::{BuildingSpec, QuantityReport, RoofStyle};

use super::geometry::{exterior_wall_area, floor_area, perimeter, roof_area};

/// Interior partition length per square foot of floor.
pub const INTERIOR_WALL_LF_PER_SQFT: f64 = 0.8;

const STUD_WASTE_FACTOR: f64 = 1.10;
/// One bottom plate plus a doubled top plate.
const PLATES_PER_WALL: f64 = 3.0;
const HEADER_LF_PER_WALL_LF: f64 = 0.15;
const JOIST_SPACING_IN: f64 = 16.0;
/// Walls taller than this are framed with 2x6 studs.
const MAX_2X4_WALL_HEIGHT_FT: f64 = 9.0;

/// Roof pitch assumed for roof sheathing.
const SHEATHING_PITCH: f64 = 6.0;

/// 4x8 sheet with 10% lost to cuts.
const SHEET_COVERAGE_SQFT: f64 = 32.0 * 0.90;

/// Floor joist size chosen by span (building width).
pub fn floor_joist_size(width: f64) -> &'static str {
    if width <= 12.0 {
        "2x8"
    } else if width <= 16.0 {
        "2x10"
    } else {
        "2x12"
    }
}

/// Exterior plus estimated interior wall length over all stories.
pub fn wall_linear_feet(length: f64, width: f64, stories: u32) -> f64 {
    let interior = floor_area(length, width) * INTERIOR_WALL_LF_PER_SQFT;
    (perimeter(length, width) + interior) * f64::from(stories)
}

pub fn stud_count(wall_lf: f64, stud_spacing_in: f64) -> u64 {
    (wall_lf * 12.0 / stud_spacing_in * STUD_WASTE_FACTOR) as u64
}

pub fn sheets_for(area_sqft: f64) -> u64 {
    (area_sqft / SHEET_COVERAGE_SQFT).ceil() as u64
}

fn members_along(length: f64) -> u64 {
    (length * 12.0 / JOIST_SPACING_IN) as u64 + 1
}

pub fn calculate(spec: &BuildingSpec) -> QuantityReport {
    let wall_lf = wall_linear_feet(spec.length, spec.width, spec.stories);
    let studs = stud_count(wall_lf, spec.stud_spacing);
    let (studs_2x4, studs_2x6) = if spec.wall_height <= MAX_2X4_WALL_HEIGHT_FT {
        (studs, 0)
    } else {
        (0, studs)
    };

    let stories = u64::from(spec.stories);
    let per_floor_joists = members_along(spec.length);

    let wall_sheathing = exterior_wall_area(spec.length, spec.width, spec.wall_height, spec.stories);
    // ordered against a 6:12 gable whatever the actual roof
    let roof_sheathing = roof_area(spec.length, spec.width, RoofStyle::Gable, SHEATHING_PITCH);
    let floor_sheathing = floor_area(spec.length, spec.width) * f64::from(spec.stories);

    QuantityReport::new()
        .count("studs_2x4", studs_2x4)
        .count("studs_2x6", studs_2x6)
        .count("plates_2x4_lf", (wall_lf * PLATES_PER_WALL) as u64)
        .count("headers_2x12_lf", (wall_lf * HEADER_LF_PER_WALL_LF) as u64)
        .count("floor_joists", per_floor_joists * stories)
        .count(
            "rim_joist_lf",
            (perimeter(spec.length, spec.width) * f64::from(spec.stories)) as u64,
        )
        // both roof planes
        .count("rafters", members_along(spec.length) * 2)
        .count("wall_sheathing_sheets", sheets_for(wall_sheathing))
        .count("roof_sheathing_sheets", sheets_for(roof_sheathing))
        .count("floor_sheathing_sheets", sheets_for(floor_sheathing))
        .spec("floor_joist_size", floor_joist_size(spec.width))
}
