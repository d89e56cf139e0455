//! Service layer modules for external integrations.
//!
//! Contains the vision service client that turns one photo into a
//! [`FeatureReport`], and the photo analyzer that fans many photos out to it
//! and merges the results.

pub mod photo_analyzer;
pub mod prompts;
pub mod vision_client;

use async_trait::async_trait;
use serde::Serialize;
use std::path::Path;

use crate::domain::FeatureReport;

pub use photo_analyzer::{analyze_images, ImageAnalysis, PhotoAnalysis};
pub use vision_client::{VisionClient, VisionError};

/// One uploaded photo.
#[derive(Debug, Clone)]
pub struct ImageInput {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

const SUPPORTED_MEDIA_TYPES: [&str; 4] = ["image/jpeg", "image/png", "image/gif", "image/webp"];

impl ImageInput {
    pub fn new(file_name: impl Into<String>, content_type: Option<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type,
            bytes,
        }
    }

    /// Supported media type from the declared content type, else the file
    /// extension.
    pub fn media_type(&self) -> Option<&'static str> {
        if let Some(declared) = self.content_type.as_deref() {
            let declared = declared.trim().to_ascii_lowercase();
            if let Some(found) = SUPPORTED_MEDIA_TYPES.iter().find(|t| **t == declared) {
                return Some(found);
            }
        }

        let ext = Path::new(&self.file_name)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())?;
        match ext.as_str() {
            "jpg" | "jpeg" => Some("image/jpeg"),
            "png" => Some("image/png"),
            "gif" => Some("image/gif"),
            "webp" => Some("image/webp"),
            _ => None,
        }
    }
}

/// Reachability of an external dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceStatus {
    Ok,
    Error,
    NotConfigured,
}

/// Anything that can turn a photo into a feature report.
///
/// Implementations never fail: every problem is reported through
/// [`FeatureReport::error`].
#[async_trait]
pub trait FeatureExtractor: Send + Sync {
    async fn extract(&self, image: &ImageInput) -> FeatureReport;

    async fn health_check(&self) -> ServiceStatus;
}
