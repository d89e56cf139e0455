//! Primitive geometry every trade formula builds on.

use crate::domain::RoofStyle;

pub fn floor_area(length: f64, width: f64) -> f64 {
    length * width
}

pub fn total_living_area(length: f64, width: f64, stories: u32) -> f64 {
    floor_area(length, width) * f64::from(stories)
}

pub fn perimeter(length: f64, width: f64) -> f64 {
    2.0 * (length + width)
}

pub fn exterior_wall_area(length: f64, width: f64, wall_height: f64, stories: u32) -> f64 {
    perimeter(length, width) * wall_height * f64::from(stories)
}

/// Flat roofs carry an allowance for drainage slope and edges.
const FLAT_ROOF_FACTOR: f64 = 1.10;

/// Slope length per unit of horizontal run for a rise-per-12" pitch.
pub fn pitch_multiplier(pitch: f64) -> f64 {
    (1.0 + (pitch / 12.0).powi(2)).sqrt()
}

/// Extra material over a plain gable for each roof style.
pub fn roof_style_factor(style: RoofStyle) -> f64 {
    match style {
        RoofStyle::Hip => 1.12,
        RoofStyle::Mansard | RoofStyle::Gambrel => 1.3,
        RoofStyle::Shed => 0.95,
        RoofStyle::Flat => FLAT_ROOF_FACTOR,
        RoofStyle::Gable | RoofStyle::Butterfly | RoofStyle::Other | RoofStyle::Unknown => 1.0,
    }
}

/// Roof surface area in square feet.
///
/// Flat roofs ignore the pitch entirely.
pub fn roof_area(length: f64, width: f64, style: RoofStyle, pitch: f64) -> f64 {
    let footprint = floor_area(length, width);
    match style {
        RoofStyle::Flat => footprint * FLAT_ROOF_FACTOR,
        _ => footprint * pitch_multiplier(pitch) * roof_style_factor(style),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn living_area_is_floor_area_times_stories() {
        for (l, w, s) in [(40.0, 30.0, 1), (25.5, 12.0, 2), (60.0, 44.0, 3)] {
            assert_eq!(total_living_area(l, w, s), floor_area(l, w) * f64::from(s));
        }
    }

    #[test]
    fn perimeter_and_wall_area() {
        assert_eq!(perimeter(40.0, 30.0), 140.0);
        assert_eq!(exterior_wall_area(40.0, 30.0, 9.0, 2), 2520.0);
    }

    #[test]
    fn flat_roof_ignores_pitch() {
        for pitch in [0.0, 4.0, 12.0] {
            let area = roof_area(40.0, 30.0, RoofStyle::Flat, pitch);
            assert!((area - 40.0 * 30.0 * 1.10).abs() < 1e-9);
        }
    }

    #[test]
    fn gable_six_twelve() {
        let area = roof_area(40.0, 30.0, RoofStyle::Gable, 6.0);
        assert!((area - 1341.64).abs() < 0.01, "got {area}");
    }

    #[test]
    fn style_factors_scale_gable_area() {
        let gable = roof_area(40.0, 30.0, RoofStyle::Gable, 6.0);
        let ratio = |style| roof_area(40.0, 30.0, style, 6.0) / gable;
        assert!((ratio(RoofStyle::Hip) - 1.12).abs() < 1e-9);
        assert!((ratio(RoofStyle::Mansard) - 1.3).abs() < 1e-9);
        assert!((ratio(RoofStyle::Gambrel) - 1.3).abs() < 1e-9);
        assert!((ratio(RoofStyle::Shed) - 0.95).abs() < 1e-9);
        assert!((ratio(RoofStyle::Butterfly) - 1.0).abs() < 1e-9);
        assert!((ratio(RoofStyle::Other) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn zero_pitch_gable_equals_footprint() {
        assert_eq!(roof_area(40.0, 30.0, RoofStyle::Gable, 0.0), 1200.0);
    }
}
