//! Foundation concrete.

use crate::domain::{BuildingSpec, FoundationKind, FoundationSpec, QuantityReport};

use super::geometry::{floor_area, perimeter};

const CUBIC_FEET_PER_YARD: f64 = 27.0;

const STEM_WALL_HEIGHT_FT: f64 = 2.0;
/// 8 inches
const STEM_WALL_THICKNESS_FT: f64 = 0.67;

const BASEMENT_WALL_HEIGHT_FT: f64 = 8.0;
/// 10 inches
const BASEMENT_WALL_THICKNESS_FT: f64 = 0.83;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FoundationConcrete {
    pub cubic_yards: f64,
    pub footer_lf: f64,
}

/// Concrete volume for the footers plus whatever the foundation type adds.
///
/// An unrecognized foundation type yields the footer volume alone.
pub fn foundation_concrete(length: f64, width: f64, foundation: &FoundationSpec) -> FoundationConcrete {
    let perimeter = perimeter(length, width);
    let footer_volume = perimeter * foundation.footer_width * foundation.footer_depth;

    let added_volume = match foundation.kind {
        FoundationKind::Slab => floor_area(length, width) * foundation.slab_thickness,
        FoundationKind::Crawl => perimeter * STEM_WALL_HEIGHT_FT * STEM_WALL_THICKNESS_FT,
        FoundationKind::Basement => {
            perimeter * BASEMENT_WALL_HEIGHT_FT * BASEMENT_WALL_THICKNESS_FT
                + floor_area(length, width) * foundation.slab_thickness
        }
        FoundationKind::Other | FoundationKind::Unknown => 0.0,
    };

    FoundationConcrete {
        cubic_yards: (footer_volume + added_volume) / CUBIC_FEET_PER_YARD,
        footer_lf: perimeter,
    }
}

pub fn calculate(spec: &BuildingSpec) -> QuantityReport {
    let concrete = foundation_concrete(spec.length, spec.width, &spec.foundation);

    QuantityReport::new()
        .amount("concrete_cubic_yards", concrete.cubic_yards)
        .count("concrete_order_yards", concrete.cubic_yards.ceil() as u64)
        .amount("footer_lf", concrete.footer_lf)
        .spec("foundation_type", spec.foundation.kind.label())
}
