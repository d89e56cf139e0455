//! Plumbing fixtures and rough-ins.

use crate::domain::{BuildingSpec, QuantityReport};

const DRAIN_LF_PER_ROUGH_IN: u64 = 15;
const SUPPLY_LF_PER_ROUGH_IN: u64 = 20;

pub fn plumbing_for_fixtures(bathrooms: u32, kitchens: u32) -> QuantityReport {
    let bathrooms = u64::from(bathrooms);
    let kitchens = u64::from(kitchens);

    let toilets = bathrooms;
    let sinks = bathrooms + kitchens;
    let showers_tubs = bathrooms;
    let kitchen_sinks = kitchens;

    let drain_rough_ins = toilets + sinks + showers_tubs + kitchen_sinks;
    // hot and cold
    let water_rough_ins = drain_rough_ins * 2;

    QuantityReport::new()
        .count("toilets", toilets)
        .count("sinks", sinks)
        .count("showers_tubs", showers_tubs)
        .count("kitchen_sinks", kitchen_sinks)
        .count("drain_rough_ins", drain_rough_ins)
        .count("water_rough_ins", water_rough_ins)
        .count("drain_pipe_lf", drain_rough_ins * DRAIN_LF_PER_ROUGH_IN)
        .count("supply_pipe_lf", water_rough_ins * SUPPLY_LF_PER_ROUGH_IN)
        .count("water_heater", 1)
}

pub fn calculate(spec: &BuildingSpec) -> QuantityReport {
    plumbing_for_fixtures(spec.bathrooms, spec.kitchens)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_baths_one_kitchen() {
        let report = plumbing_for_fixtures(2, 1);
        assert_eq!(report.count_of("toilets"), Some(2));
        assert_eq!(report.count_of("sinks"), Some(3));
        assert_eq!(report.count_of("showers_tubs"), Some(2));
        assert_eq!(report.count_of("drain_rough_ins"), Some(8));
        assert_eq!(report.count_of("water_rough_ins"), Some(16));
        assert_eq!(report.count_of("drain_pipe_lf"), Some(120));
        assert_eq!(report.count_of("supply_pipe_lf"), Some(320));
        assert_eq!(report.count_of("water_heater"), Some(1));
    }

    #[test]
    fn zero_bathrooms_means_zero_toilets() {
        let report = plumbing_for_fixtures(0, 0);
        assert_eq!(report.count_of("toilets"), Some(0));
        assert_eq!(report.count_of("drain_pipe_lf"), Some(0));
        assert_eq!(report.count_of("water_heater"), Some(1));
    }
}
