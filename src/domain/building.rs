//! Building parameters consumed by the takeoff engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::categorical::{ExteriorMaterial, FoundationKind, RoofStyle};

/// Geometric and categorical description of the building to estimate.
///
/// Lengths are in feet, pitch is inches of rise per 12" run. Use
/// [`BuildingSpec::validate`] before handing a spec to the engine; the
/// engine itself assumes in-domain values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildingSpec {
    pub length: f64,
    pub width: f64,
    pub stories: u32,
    #[serde(default = "default_wall_height")]
    pub wall_height: f64,
    #[serde(default = "default_roof_style")]
    pub roof_style: RoofStyle,
    #[serde(default = "default_roof_pitch")]
    pub roof_pitch: f64,
    #[serde(default = "default_exterior_type")]
    pub exterior_type: ExteriorMaterial,
    pub climate_zone: u8,
    #[serde(default)]
    pub window_count: u32,
    #[serde(default)]
    pub door_count: u32,
    #[serde(default)]
    pub bathrooms: u32,
    #[serde(default = "default_kitchens")]
    pub kitchens: u32,
    #[serde(default)]
    pub foundation: FoundationSpec,
    /// Stud spacing in inches on center.
    #[serde(default = "default_stud_spacing")]
    pub stud_spacing: f64,
    #[serde(default)]
    pub ceiling_r_value: Option<f64>,
    #[serde(default)]
    pub wall_r_value: Option<f64>,
}

/// Foundation type and footer/slab dimensions (feet).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundationSpec {
    pub kind: FoundationKind,
    pub footer_width: f64,
    pub footer_depth: f64,
    pub slab_thickness: f64,
}

impl Default for FoundationSpec {
    fn default() -> Self {
        Self {
            kind: FoundationKind::Slab,
            footer_width: 2.0,
            footer_depth: 1.0,
            // 4 inches
            slab_thickness: 0.33,
        }
    }
}

fn default_wall_height() -> f64 {
    9.0
}

fn default_roof_style() -> RoofStyle {
    RoofStyle::Gable
}

fn default_roof_pitch() -> f64 {
    6.0
}

fn default_exterior_type() -> ExteriorMaterial {
    ExteriorMaterial::VinylSiding
}

fn default_kitchens() -> u32 {
    1
}

fn default_stud_spacing() -> f64 {
    16.0
}

/// Caller precondition violations. The engine never produces these.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number greater than zero (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must be a finite, non-negative number (got {value})")]
    Negative { field: &'static str, value: f64 },

    #[error("stories must be at least 1")]
    NoStories,

    #[error("climate_zone must be between 1 and 8 (got {0})")]
    ClimateZoneOutOfRange(u8),
}

fn require_positive(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(InputError::NonPositive { field, value })
    }
}

fn require_non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(InputError::Negative { field, value })
    }
}

impl BuildingSpec {
    /// Minimal spec with the documented defaults for everything optional.
    pub fn new(length: f64, width: f64, stories: u32, climate_zone: u8) -> Self {
        Self {
            length,
            width,
            stories,
            wall_height: default_wall_height(),
            roof_style: default_roof_style(),
            roof_pitch: default_roof_pitch(),
            exterior_type: default_exterior_type(),
            climate_zone,
            window_count: 0,
            door_count: 0,
            bathrooms: 0,
            kitchens: default_kitchens(),
            foundation: FoundationSpec::default(),
            stud_spacing: default_stud_spacing(),
            ceiling_r_value: None,
            wall_r_value: None,
        }
    }

    /// Reject geometry the engine is not defined for.
    pub fn validate(&self) -> Result<(), InputError> {
        require_positive("length", self.length)?;
        require_positive("width", self.width)?;
        require_positive("wall_height", self.wall_height)?;
        require_positive("stud_spacing", self.stud_spacing)?;
        if self.stories < 1 {
            return Err(InputError::NoStories);
        }
        require_non_negative("roof_pitch", self.roof_pitch)?;
        if !(1..=8).contains(&self.climate_zone) {
            return Err(InputError::ClimateZoneOutOfRange(self.climate_zone));
        }
        require_non_negative("foundation.footer_width", self.foundation.footer_width)?;
        require_non_negative("foundation.footer_depth", self.foundation.footer_depth)?;
        require_non_negative("foundation.slab_thickness", self.foundation.slab_thickness)?;
        if let Some(r) = self.ceiling_r_value {
            require_non_negative("ceiling_r_value", r)?;
        }
        if let Some(r) = self.wall_r_value {
            require_non_negative("wall_r_value", r)?;
        }
        Ok(())
    }
}
