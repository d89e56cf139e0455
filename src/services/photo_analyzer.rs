//! Multi-photo analysis: one extraction per photo, then a merge.

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use super::{FeatureExtractor, ImageInput};
use crate::aggregation;
use crate::domain::FeatureReport;

/// Result for one uploaded photo.
#[derive(Debug, Clone, Serialize)]
pub struct ImageAnalysis {
    pub file_name: String,
    pub report: FeatureReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct PhotoAnalysis {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub image_count: usize,
    pub successful_count: usize,
    /// Per-photo reports in upload order.
    pub images: Vec<ImageAnalysis>,
    pub merged: FeatureReport,
}

/// Run the extractor over every photo, at most `concurrency` at a time, and
/// merge the results.
///
/// Reports keep upload order regardless of completion order, so confidence
/// ties in the merge resolve the same way on every run.
pub async fn analyze_images(
    extractor: &dyn FeatureExtractor,
    images: &[ImageInput],
    concurrency: usize,
) -> PhotoAnalysis {
    // Futures are built up front; `buffered` still polls at most
    // `concurrency` of them at once.
    let pending: Vec<_> = images.iter().map(|image| extractor.extract(image)).collect();
    let reports: Vec<FeatureReport> = stream::iter(pending)
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let merged = aggregation::aggregate(&reports);
    let successful_count = reports.iter().filter(|r| r.is_valid()).count();

    info!(
        images = images.len(),
        successful = successful_count,
        merged_confidence = merged.overall_confidence,
        "Photo analysis complete"
    );

    let image_count = images.len();
    let images = images
        .iter()
        .zip(reports)
        .map(|(image, report)| ImageAnalysis {
            file_name: image.file_name.clone(),
            report,
        })
        .collect();

    PhotoAnalysis {
        analysis_id: Uuid::new_v4(),
        analyzed_at: Utc::now(),
        image_count,
        successful_count,
        images,
        merged,
    }
}
