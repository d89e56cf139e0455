//! Multi-photo feature aggregation
//!
//! Merges independent per-image [`FeatureReport`]s of the same building into
//! one best-estimate report. Failed reports are ignored; the merge only fails
//! when nothing usable remains.

pub mod policy;

use thiserror::Error;

use crate::domain::{CategoryConfidence, FeatureReport};
use policy::{Count, Flag, MergePolicy};

/// Joins notes from different photos.
pub const NOTES_DELIMITER: &str = " | ";

/// Confidence added per corroborating photo.
const MULTI_PHOTO_BOOST: f64 = 0.1;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    #[error("No images provided")]
    NoInputs,

    /// First input's error, verbatim.
    #[error("{0}")]
    AllFailed(String),
}

/// Merge reports, folding any failure into the returned report's `error`.
pub fn aggregate(reports: &[FeatureReport]) -> FeatureReport {
    try_aggregate(reports).unwrap_or_else(|e| FeatureReport::from_error(e.to_string()))
}

pub fn try_aggregate(reports: &[FeatureReport]) -> Result<FeatureReport, AggregationError> {
    let first = reports.first().ok_or(AggregationError::NoInputs)?;

    let valid: Vec<&FeatureReport> = reports.iter().filter(|r| r.is_valid()).collect();
    if valid.is_empty() {
        return Err(AggregationError::AllFailed(
            first.error.clone().unwrap_or_default(),
        ));
    }

    tracing::debug!(
        total = reports.len(),
        valid = valid.len(),
        "Aggregating feature reports"
    );

    let ranked = rank_by_confidence(&valid);
    let best = ranked[0];

    let mut merged = FeatureReport {
        building_type: take_best(&ranked, |r| r.building_type, |v| v.is_known()),
        roof_style: take_best(&ranked, |r| r.roof_style, |v| v.is_known()),
        roof_material: take_best(&ranked, |r| r.roof_material, |v| v.is_known()),
        exterior_material: take_best(&ranked, |r| r.exterior_material, |v| v.is_known()),
        condition: take_best(&ranked, |r| r.condition, |v| v.is_known()),
        architectural_style: take_best(&ranked, |r| r.architectural_style, |v| v.is_known()),
        estimated_window_size: take_best(
            &ranked,
            |r| r.estimated_window_size.clone(),
            |v| !v.is_empty(),
        ),
        estimated_door_size: take_best(
            &ranked,
            |r| r.estimated_door_size.clone(),
            |v| !v.is_empty(),
        ),
        garage_type: conditional(best, &valid, Flag::HasGarage, |r| r.garage_type),
        porch_type: conditional(best, &valid, Flag::HasPorch, |r| r.porch_type),
        deck_material: conditional(best, &valid, Flag::HasDeck, |r| r.deck_material),
        special_features: union(&valid),
        photo_quality: valid
            .iter()
            .map(|r| r.photo_quality)
            .reduce(|kept, next| if next.rank() > kept.rank() { next } else { kept })
            .unwrap_or_default(),
        category_confidence: mean_categories(&valid),
        overall_confidence: overall_confidence(&valid),
        notes: valid
            .iter()
            .map(|r| r.notes.as_str())
            .filter(|n| !n.is_empty())
            .collect::<Vec<_>>()
            .join(NOTES_DELIMITER),
        ..FeatureReport::default()
    };

    for flag in Flag::ALL {
        flag.set(&mut merged, valid.iter().any(|r| flag.get(r)));
    }
    for count in Count::ALL {
        count.set(&mut merged, merge_count(&valid, count));
    }

    Ok(merged)
}

/// Valid reports ordered by descending overall confidence; stable, so input
/// order breaks ties.
fn rank_by_confidence<'a>(valid: &[&'a FeatureReport]) -> Vec<&'a FeatureReport> {
    let mut ranked = valid.to_vec();
    ranked.sort_by(|a, b| b.overall_confidence.total_cmp(&a.overall_confidence));
    ranked
}

/// Best report's value, unless it is undetermined and a lower-ranked report
/// knows better.
fn take_best<T: Default>(
    ranked: &[&FeatureReport],
    get: impl Fn(&FeatureReport) -> T,
    is_known: impl Fn(&T) -> bool,
) -> T {
    ranked
        .iter()
        .map(|&r| get(r))
        .find(|v| is_known(v))
        .unwrap_or_default()
}

fn conditional<T: Default>(
    best: &FeatureReport,
    valid: &[&FeatureReport],
    flag: Flag,
    get: impl Fn(&FeatureReport) -> T,
) -> T {
    if flag.get(best) {
        return get(best);
    }
    valid
        .iter()
        .find(|r| flag.get(r))
        .map(|&r| get(r))
        .unwrap_or_default()
}

fn merge_count(valid: &[&FeatureReport], count: Count) -> u32 {
    let values = valid.iter().map(|r| count.get(r));
    match count.field().policy() {
        MergePolicy::Sum => values.fold(0u32, u32::saturating_add),
        _ => values.max().unwrap_or_default(),
    }
}

fn union(valid: &[&FeatureReport]) -> Vec<String> {
    let mut features: Vec<String> = Vec::new();
    for feature in valid.iter().flat_map(|r| r.special_features.iter()) {
        if !features.contains(feature) {
            features.push(feature.clone());
        }
    }
    features
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}

fn mean_categories(valid: &[&FeatureReport]) -> CategoryConfidence {
    let category = |get: fn(&CategoryConfidence) -> f64| {
        mean(valid.iter().map(|r| get(&r.category_confidence)))
    };
    CategoryConfidence {
        building: category(|c| c.building),
        roof: category(|c| c.roof),
        exterior: category(|c| c.exterior),
        openings: category(|c| c.openings),
        attachments: category(|c| c.attachments),
    }
}

/// Mean confidence boosted for corroborating photos, capped at 1.0.
fn overall_confidence(valid: &[&FeatureReport]) -> f64 {
    let average = mean(valid.iter().map(|r| r.overall_confidence));
    let corroborating = valid.len().saturating_sub(1) as f64;
    (average * (1.0 + MULTI_PHOTO_BOOST * corroborating)).min(1.0)
}
