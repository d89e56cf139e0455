//! Feature reports extracted from building photos.

use serde::{Deserialize, Serialize};

use super::categorical::{
    ArchitecturalStyle, BuildingType, Condition, DeckMaterial, ExteriorMaterial, GarageType,
    PhotoQuality, PorchType, RoofMaterial, RoofStyle,
};
use super::lenient;

/// Confidence per feature category, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfidence {
    /// Building type, stories, style and condition.
    #[serde(deserialize_with = "lenient::number")]
    pub building: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub roof: f64,
    #[serde(deserialize_with = "lenient::number")]
    pub exterior: f64,
    /// Windows and doors.
    #[serde(deserialize_with = "lenient::number")]
    pub openings: f64,
    /// Garage, porch, deck, dormers, chimney, gutters.
    #[serde(deserialize_with = "lenient::number")]
    pub attachments: f64,
}

impl CategoryConfidence {
    pub fn clamped(self) -> Self {
        Self {
            building: clamp_unit(self.building),
            roof: clamp_unit(self.roof),
            exterior: clamp_unit(self.exterior),
            openings: clamp_unit(self.openings),
            attachments: clamp_unit(self.attachments),
        }
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// One structured snapshot of a building's visible attributes.
///
/// When `error` is set every other field is a placeholder and consumers
/// must not read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureReport {
    pub building_type: BuildingType,
    pub roof_style: RoofStyle,
    pub roof_material: RoofMaterial,
    pub exterior_material: ExteriorMaterial,
    pub condition: Condition,
    pub architectural_style: ArchitecturalStyle,
    #[serde(deserialize_with = "lenient::text")]
    pub estimated_window_size: String,
    #[serde(deserialize_with = "lenient::text")]
    pub estimated_door_size: String,

    #[serde(deserialize_with = "lenient::count")]
    pub stories: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub window_count: u32,
    #[serde(deserialize_with = "lenient::count")]
    pub door_count: u32,

    #[serde(deserialize_with = "lenient::flag")]
    pub has_garage: bool,
    pub garage_type: GarageType,
    #[serde(deserialize_with = "lenient::count")]
    pub garage_doors: u32,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_porch: bool,
    pub porch_type: PorchType,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_deck: bool,
    pub deck_material: DeckMaterial,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_dormers: bool,
    #[serde(deserialize_with = "lenient::count")]
    pub dormer_count: u32,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_chimney: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_gutters: bool,
    #[serde(deserialize_with = "lenient::flag")]
    pub has_storm_door: bool,

    #[serde(deserialize_with = "lenient::or_default")]
    pub special_features: Vec<String>,
    pub photo_quality: PhotoQuality,
    #[serde(deserialize_with = "lenient::or_default")]
    pub category_confidence: CategoryConfidence,
    #[serde(alias = "confidence", deserialize_with = "lenient::number")]
    pub overall_confidence: f64,
    #[serde(deserialize_with = "lenient::text")]
    pub notes: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FeatureReport {
    /// A report that carries only an error.
    pub fn from_error(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::default()
        }
    }

    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }

    /// Clamp confidences into [0, 1] and trim free text.
    pub fn normalized(mut self) -> Self {
        self.overall_confidence = clamp_unit(self.overall_confidence);
        self.category_confidence = self.category_confidence.clamped();
        self.estimated_window_size = self.estimated_window_size.trim().to_string();
        self.estimated_door_size = self.estimated_door_size.trim().to_string();
        self.notes = self.notes.trim().to_string();
        self.special_features = self
            .special_features
            .into_iter()
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_error_leaves_everything_else_default() {
        let report = FeatureReport::from_error("boom");
        assert_eq!(report.error.as_deref(), Some("boom"));
        assert_eq!(
            FeatureReport {
                error: None,
                ..report
            },
            FeatureReport::default()
        );
    }

    #[test]
    fn accepts_confidence_alias_and_missing_fields() {
        let report: FeatureReport = serde_json::from_str(
            r#"{"roof_style": "Hip", "window_count": 6, "confidence": 0.8, "has_garage": true}"#,
        )
        .unwrap();
        assert_eq!(report.roof_style, RoofStyle::Hip);
        assert_eq!(report.window_count, 6);
        assert_eq!(report.overall_confidence, 0.8);
        assert!(report.has_garage);
        assert_eq!(report.garage_type, GarageType::None);
        assert!(report.is_valid());
    }

    #[test]
    fn null_categoricals_are_undetermined() {
        let report: FeatureReport = serde_json::from_str(
            r#"{"roof_style": null, "garage_type": null, "photo_quality": null, "category_confidence": {"roof": null, "exterior": 0.4}}"#,
        )
        .unwrap();
        assert_eq!(report.roof_style, RoofStyle::Unknown);
        assert_eq!(report.garage_type, GarageType::None);
        assert_eq!(report.category_confidence.roof, 0.0);
        assert_eq!(report.category_confidence.exterior, 0.4);
    }

    #[test]
    fn normalized_clamps_confidences() {
        let report = FeatureReport {
            overall_confidence: 1.7,
            category_confidence: CategoryConfidence {
                roof: -0.2,
                exterior: f64::NAN,
                ..CategoryConfidence::default()
            },
            special_features: vec![" bay window ".into(), "  ".into()],
            ..FeatureReport::default()
        }
        .normalized();
        assert_eq!(report.overall_confidence, 1.0);
        assert_eq!(report.category_confidence.roof, 0.0);
        assert_eq!(report.category_confidence.exterior, 0.0);
        assert_eq!(report.special_features, vec!["bay window".to_string()]);
    }
}
