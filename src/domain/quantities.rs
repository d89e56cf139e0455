//! Takeoff output types.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

/// A single takeoff quantity: whole purchase units or a measured amount.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    Count(u64),
    Amount(f64),
}

impl Quantity {
    pub fn as_f64(&self) -> f64 {
        match *self {
            Quantity::Count(n) => n as f64,
            Quantity::Amount(v) => v,
        }
    }
}

/// Material/unit label → non-negative quantity for one trade.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuantityReport {
    pub quantities: BTreeMap<String, Quantity>,
    /// Non-numeric selections such as lumber sizes.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub specifications: BTreeMap<String, String>,
}

impl QuantityReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(mut self, label: &str, value: u64) -> Self {
        self.quantities.insert(label.to_string(), Quantity::Count(value));
        self
    }

    /// Negative inputs are recorded as zero.
    pub fn amount(mut self, label: &str, value: f64) -> Self {
        self.quantities
            .insert(label.to_string(), Quantity::Amount(value.max(0.0)));
        self
    }

    pub fn spec(mut self, label: &str, value: impl Into<String>) -> Self {
        self.specifications.insert(label.to_string(), value.into());
        self
    }

    pub fn get(&self, label: &str) -> Option<Quantity> {
        self.quantities.get(label).copied()
    }

    pub fn count_of(&self, label: &str) -> Option<u64> {
        match self.get(label)? {
            Quantity::Count(n) => Some(n),
            Quantity::Amount(_) => None,
        }
    }

    pub fn amount_of(&self, label: &str) -> Option<f64> {
        self.get(label).map(|q| q.as_f64())
    }
}

/// Trades covered by the takeoff, in presentation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Trade {
    Foundation,
    Framing,
    Insulation,
    Drywall,
    Electrical,
    Plumbing,
    Hvac,
    Exterior,
    Roofing,
}

impl Trade {
    pub const ALL: [Trade; 9] = [
        Trade::Foundation,
        Trade::Framing,
        Trade::Insulation,
        Trade::Drywall,
        Trade::Electrical,
        Trade::Plumbing,
        Trade::Hvac,
        Trade::Exterior,
        Trade::Roofing,
    ];
}

impl fmt::Display for Trade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trade::Foundation => write!(f, "foundation"),
            Trade::Framing => write!(f, "framing"),
            Trade::Insulation => write!(f, "insulation"),
            Trade::Drywall => write!(f, "drywall"),
            Trade::Electrical => write!(f, "electrical"),
            Trade::Plumbing => write!(f, "plumbing"),
            Trade::Hvac => write!(f, "hvac"),
            Trade::Exterior => write!(f, "exterior"),
            Trade::Roofing => write!(f, "roofing"),
        }
    }
}

/// Shared geometry every trade derives from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BuildingMetrics {
    pub floor_area_sqft: f64,
    pub total_living_area_sqft: f64,
    pub perimeter_ft: f64,
    pub exterior_wall_area_sqft: f64,
    pub roof_area_sqft: f64,
}

/// Complete takeoff for one building.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Takeoff {
    pub metrics: BuildingMetrics,
    pub trades: BTreeMap<Trade, QuantityReport>,
}

impl Takeoff {
    pub fn trade(&self, trade: Trade) -> Option<&QuantityReport> {
        self.trades.get(&trade)
    }
}
