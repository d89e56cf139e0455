//! Insulation batts sized by IRC climate zone.

use crate::domain::{BuildingSpec, QuantityReport};

use super::geometry::{exterior_wall_area, floor_area};

/// Share of exterior wall left after windows and doors.
const NET_WALL_FRACTION: f64 = 0.85;
const CEILING_SQFT_PER_BAG: f64 = 40.0;
const WALL_SQFT_PER_BAG: f64 = 88.0;

/// Default ceiling R-value (IRC 2021).
pub fn default_ceiling_r_value(climate_zone: u8) -> f64 {
    match climate_zone {
        1 => 30.0,
        2 | 3 => 38.0,
        4..=8 => 49.0,
        _ => 38.0,
    }
}

/// Default wall R-value (IRC 2021).
pub fn default_wall_r_value(climate_zone: u8) -> f64 {
    match climate_zone {
        1 | 2 => 13.0,
        _ => 20.0,
    }
}

/// Zero or missing overrides fall back to the zone default.
fn r_value(explicit: Option<f64>, default: f64) -> f64 {
    explicit.filter(|r| *r > 0.0).unwrap_or(default)
}

pub fn calculate(spec: &BuildingSpec) -> QuantityReport {
    let ceiling_r = r_value(spec.ceiling_r_value, default_ceiling_r_value(spec.climate_zone));
    let wall_r = r_value(spec.wall_r_value, default_wall_r_value(spec.climate_zone));

    let ceiling_sqft = floor_area(spec.length, spec.width);
    let wall_sqft = exterior_wall_area(spec.length, spec.width, spec.wall_height, spec.stories)
        * NET_WALL_FRACTION;

    QuantityReport::new()
        .amount("ceiling_sqft", ceiling_sqft)
        .amount("ceiling_r_value", ceiling_r)
        .amount("wall_sqft", wall_sqft)
        .amount("wall_r_value", wall_r)
        .count("ceiling_batts", (ceiling_sqft / CEILING_SQFT_PER_BAG).ceil() as u64)
        .count("wall_batts", (wall_sqft / WALL_SQFT_PER_BAG).ceil() as u64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_defaults() {
        assert_eq!(default_ceiling_r_value(1), 30.0);
        assert_eq!(default_ceiling_r_value(3), 38.0);
        assert_eq!(default_ceiling_r_value(7), 49.0);
        assert_eq!(default_wall_r_value(2), 13.0);
        assert_eq!(default_wall_r_value(5), 20.0);
    }

    #[test]
    fn out_of_table_zone_uses_fallback() {
        assert_eq!(default_ceiling_r_value(0), 38.0);
        assert_eq!(default_wall_r_value(12), 20.0);
    }

    #[test]
    fn overrides_win_over_defaults() {
        let mut spec = BuildingSpec::new(40.0, 30.0, 1, 4);
        spec.ceiling_r_value = Some(60.0);
        spec.wall_r_value = Some(0.0);
        let report = calculate(&spec);
        assert_eq!(report.amount_of("ceiling_r_value"), Some(60.0));
        assert_eq!(report.amount_of("wall_r_value"), Some(20.0));
    }

    #[test]
    fn batt_counts() {
        let report = calculate(&BuildingSpec::new(40.0, 30.0, 1, 4));
        // 1200 / 40
        assert_eq!(report.count_of("ceiling_batts"), Some(30));
        // 1260 * 0.85 = 1071 / 88 = 12.2
        assert_eq!(report.count_of("wall_batts"), Some(13));
        let wall = report.amount_of("wall_sqft").unwrap();
        assert!((wall - 1071.0).abs() < 1e-9);
    }
}
