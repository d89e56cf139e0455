//! Per-field merge policy table.
//!
//! Each [`Field`] of a [`FeatureReport`] maps to exactly one [`MergePolicy`].
//! The aggregator consults this table for flags and counts, and the table is
//! served as-is by `GET /features/merge-policies`.

use serde::Serialize;

use crate::domain::FeatureReport;

/// Presence flags; conditional fields hang off these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Flag {
    HasGarage,
    HasPorch,
    HasDeck,
    HasDormers,
    HasChimney,
    HasGutters,
    HasStormDoor,
}

impl Flag {
    pub const ALL: [Flag; 7] = [
        Flag::HasGarage,
        Flag::HasPorch,
        Flag::HasDeck,
        Flag::HasDormers,
        Flag::HasChimney,
        Flag::HasGutters,
        Flag::HasStormDoor,
    ];

    pub fn get(self, report: &FeatureReport) -> bool {
        match self {
            Flag::HasGarage => report.has_garage,
            Flag::HasPorch => report.has_porch,
            Flag::HasDeck => report.has_deck,
            Flag::HasDormers => report.has_dormers,
            Flag::HasChimney => report.has_chimney,
            Flag::HasGutters => report.has_gutters,
            Flag::HasStormDoor => report.has_storm_door,
        }
    }

    pub fn set(self, report: &mut FeatureReport, value: bool) {
        match self {
            Flag::HasGarage => report.has_garage = value,
            Flag::HasPorch => report.has_porch = value,
            Flag::HasDeck => report.has_deck = value,
            Flag::HasDormers => report.has_dormers = value,
            Flag::HasChimney => report.has_chimney = value,
            Flag::HasGutters => report.has_gutters = value,
            Flag::HasStormDoor => report.has_storm_door = value,
        }
    }
}

/// Integer counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Count {
    Stories,
    WindowCount,
    DoorCount,
    GarageDoors,
    DormerCount,
}

impl Count {
    pub const ALL: [Count; 5] = [
        Count::Stories,
        Count::WindowCount,
        Count::DoorCount,
        Count::GarageDoors,
        Count::DormerCount,
    ];

    pub fn get(self, report: &FeatureReport) -> u32 {
        match self {
            Count::Stories => report.stories,
            Count::WindowCount => report.window_count,
            Count::DoorCount => report.door_count,
            Count::GarageDoors => report.garage_doors,
            Count::DormerCount => report.dormer_count,
        }
    }

    pub fn set(self, report: &mut FeatureReport, value: u32) {
        match self {
            Count::Stories => report.stories = value,
            Count::WindowCount => report.window_count = value,
            Count::DoorCount => report.door_count = value,
            Count::GarageDoors => report.garage_doors = value,
            Count::DormerCount => report.dormer_count = value,
        }
    }

    pub fn field(self) -> Field {
        match self {
            Count::Stories => Field::Stories,
            Count::WindowCount => Field::WindowCount,
            Count::DoorCount => Field::DoorCount,
            Count::GarageDoors => Field::GarageDoors,
            Count::DormerCount => Field::DormerCount,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "policy", content = "on", rename_all = "snake_case")]
pub enum MergePolicy {
    /// Value from the highest-confidence report, skipping undetermined values.
    TakeBest,
    /// Logical OR.
    AnyPresent,
    /// Best report's value if it saw the feature, else the first report that did.
    ConditionalOn(Flag),
    /// Counts from different elevations add up.
    Sum,
    /// Single true value; take the largest seen.
    Max,
    /// Case-sensitive set union in first-seen order.
    Union,
    /// Arithmetic mean.
    Mean,
    /// Maximum by ordinal rank.
    OrdinalMax,
    /// Non-empty values joined in input order.
    Concatenate,
}

/// Every merged field of a feature report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    BuildingType,
    RoofStyle,
    RoofMaterial,
    ExteriorMaterial,
    Condition,
    ArchitecturalStyle,
    EstimatedWindowSize,
    EstimatedDoorSize,
    Stories,
    WindowCount,
    DoorCount,
    HasGarage,
    GarageType,
    GarageDoors,
    HasPorch,
    PorchType,
    HasDeck,
    DeckMaterial,
    HasDormers,
    DormerCount,
    HasChimney,
    HasGutters,
    HasStormDoor,
    SpecialFeatures,
    PhotoQuality,
    CategoryConfidence,
    OverallConfidence,
    Notes,
}

impl Field {
    pub const ALL: [Field; 28] = [
        Field::BuildingType,
        Field::RoofStyle,
        Field::RoofMaterial,
        Field::ExteriorMaterial,
        Field::Condition,
        Field::ArchitecturalStyle,
        Field::EstimatedWindowSize,
        Field::EstimatedDoorSize,
        Field::Stories,
        Field::WindowCount,
        Field::DoorCount,
        Field::HasGarage,
        Field::GarageType,
        Field::GarageDoors,
        Field::HasPorch,
        Field::PorchType,
        Field::HasDeck,
        Field::DeckMaterial,
        Field::HasDormers,
        Field::DormerCount,
        Field::HasChimney,
        Field::HasGutters,
        Field::HasStormDoor,
        Field::SpecialFeatures,
        Field::PhotoQuality,
        Field::CategoryConfidence,
        Field::OverallConfidence,
        Field::Notes,
    ];

    pub const fn policy(self) -> MergePolicy {
        use MergePolicy::*;
        match self {
            Field::BuildingType
            | Field::RoofStyle
            | Field::RoofMaterial
            | Field::ExteriorMaterial
            | Field::Condition
            | Field::ArchitecturalStyle
            | Field::EstimatedWindowSize
            | Field::EstimatedDoorSize => TakeBest,

            Field::HasGarage
            | Field::HasPorch
            | Field::HasDeck
            | Field::HasDormers
            | Field::HasChimney
            | Field::HasGutters
            | Field::HasStormDoor => AnyPresent,

            Field::GarageType => ConditionalOn(Flag::HasGarage),
            Field::PorchType => ConditionalOn(Flag::HasPorch),
            Field::DeckMaterial => ConditionalOn(Flag::HasDeck),

            // Assumes every photo shows a different elevation; overlap
            // between photos is not detected.
            Field::WindowCount | Field::DoorCount | Field::DormerCount => Sum,
            Field::Stories | Field::GarageDoors => Max,

            Field::SpecialFeatures => Union,
            Field::CategoryConfidence => Mean,
            // mean, then the multi-photo boost
            Field::OverallConfidence => Mean,
            Field::PhotoQuality => OrdinalMax,
            Field::Notes => Concatenate,
        }
    }
}

/// One row of the published policy table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PolicyEntry {
    pub field: Field,
    #[serde(flatten)]
    pub policy: MergePolicy,
}

pub fn policy_table() -> Vec<PolicyEntry> {
    Field::ALL
        .iter()
        .map(|&field| PolicyEntry {
            field,
            policy: field.policy(),
        })
        .collect()
}
