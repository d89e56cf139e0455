//! Roof covering, underlayment and edge materials.

use crate::domain::{BuildingSpec, QuantityReport, RoofStyle};

use super::geometry::{perimeter, roof_area};

const SQFT_PER_SQUARE: f64 = 100.0;
const WASTE_FACTOR: f64 = 1.10;
const SQFT_PER_UNDERLAYMENT_ROLL: f64 = 400.0;
const NAIL_LBS_PER_SQUARE: u64 = 2;

/// Ridge and hip cap length in feet.
pub fn ridge_and_hip_lf(length: f64, width: f64, style: RoofStyle) -> (f64, f64) {
    match style {
        RoofStyle::Hip => (length * 0.5, std::f64::consts::SQRT_2 * width * 2.0),
        _ => (length, 0.0),
    }
}

pub fn calculate(spec: &BuildingSpec) -> QuantityReport {
    let area = roof_area(spec.length, spec.width, spec.roof_style, spec.roof_pitch);
    let squares = (area / SQFT_PER_SQUARE * WASTE_FACTOR).ceil() as u64;
    let (ridge_lf, hip_lf) = ridge_and_hip_lf(spec.length, spec.width, spec.roof_style);
    let edge_lf = perimeter(spec.length, spec.width) as u64;

    QuantityReport::new()
        .amount("roof_sqft", area)
        .count("shingle_squares", squares)
        .count(
            "underlayment_rolls",
            (area / SQFT_PER_UNDERLAYMENT_ROLL).ceil() as u64,
        )
        .count("ridge_cap_lf", ridge_lf as u64)
        .count("hip_cap_lf", hip_lf as u64)
        .count("drip_edge_lf", edge_lf)
        .count("starter_strip_lf", edge_lf)
        .count("nails_lbs", squares * NAIL_LBS_PER_SQUARE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gable_roof() {
        let report = calculate(&BuildingSpec::new(40.0, 30.0, 1, 4));
        // 1341.64 / 100 * 1.1 = 14.76
        assert_eq!(report.count_of("shingle_squares"), Some(15));
        assert_eq!(report.count_of("underlayment_rolls"), Some(4));
        assert_eq!(report.count_of("ridge_cap_lf"), Some(40));
        assert_eq!(report.count_of("hip_cap_lf"), Some(0));
        assert_eq!(report.count_of("drip_edge_lf"), Some(140));
        assert_eq!(report.count_of("starter_strip_lf"), Some(140));
        assert_eq!(report.count_of("nails_lbs"), Some(30));
    }

    #[test]
    fn hip_roof_ridge_and_hips() {
        let (ridge, hip) = ridge_and_hip_lf(40.0, 30.0, RoofStyle::Hip);
        assert_eq!(ridge, 20.0);
        assert!((hip - 84.85).abs() < 0.01);

        let mut spec = BuildingSpec::new(40.0, 30.0, 1, 4);
        spec.roof_style = RoofStyle::Hip;
        let report = calculate(&spec);
        assert_eq!(report.count_of("ridge_cap_lf"), Some(20));
        assert_eq!(report.count_of("hip_cap_lf"), Some(84));
    }

    #[test]
    fn other_styles_use_gable_ridge() {
        for style in [RoofStyle::Shed, RoofStyle::Flat, RoofStyle::Mansard, RoofStyle::Other] {
            assert_eq!(ridge_and_hip_lf(40.0, 30.0, style), (40.0, 0.0));
        }
    }
}
