//! Input records: the lot, the zoning ruleset, and the housing preset form.
//!
//! All three are plain values. A `Lot` clone is a full deep copy, so two
//! compared scenarios never alias each other's setbacks.

use serde::{Deserialize, Serialize};

// =============================================================================
// Lot
// =============================================================================

/// Which side of a corner lot faces the second street.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreetSide {
    Left,
    #[default]
    Right,
}

/// Required yards, in feet, measured in from each property line.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LotSetbacks {
    pub front: f64,
    pub rear: f64,
    pub side_left: f64,
    pub side_right: f64,
    /// Street-side yard; only consulted when the lot is a corner lot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street_side: Option<f64>,
}

impl LotSetbacks {
    /// Each named setback value, for validation and display.
    pub fn named_values(&self) -> Vec<(&'static str, f64)> {
        let mut values = vec![
            ("front", self.front),
            ("rear", self.rear),
            ("side_left", self.side_left),
            ("side_right", self.side_right),
        ];
        if let Some(street) = self.street_side {
            values.push(("street_side", street));
        }
        values
    }
}

/// A rectangular lot. The front property line sits at `z = 0`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Lot {
    pub width_ft: f64,
    pub depth_ft: f64,
    pub is_corner: bool,
    pub street_side: StreetSide,
    pub setbacks_ft: LotSetbacks,
}

impl Lot {
    #[inline]
    pub fn area_sq_ft(&self) -> f64 {
        self.width_ft * self.depth_ft
    }
}

/// Gross lot area in square feet.
pub fn lot_area_sq_ft(lot: &Lot) -> f64 {
    lot.area_sq_ft()
}

// =============================================================================
// Ruleset
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetSource {
    pub title: String,
    pub url: String,
    pub last_updated: String,
}

/// A zoning code version: massing caps, lot minimums, and parking rules.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ruleset {
    pub id: String,
    pub name: String,
    pub version_label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub sources: Vec<RulesetSource>,

    pub max_height_ft: f64,
    pub max_far: f64,
    /// Fraction of lot area, 0.0-1.0.
    pub max_lot_coverage_pct: f64,

    #[serde(default)]
    pub min_lot_width_ft: Option<f64>,
    #[serde(default)]
    pub min_lot_area_sq_ft: Option<f64>,

    #[serde(default)]
    pub parking_min_spaces_per_unit: Option<f64>,
    /// Area charged against lot coverage for every required stall, when the
    /// scenario opts into the debit.
    #[serde(default)]
    pub parking_coverage_debit_sq_ft_per_required_space: Option<f64>,
}

// =============================================================================
// Preset form
// =============================================================================

/// Massing archetype of a preset form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    BaselineSfh,
    StackedFlats,
    Townhouse,
    Courtyard,
    Adu,
    MixedUse,
}

impl PresetKind {
    pub fn label(self) -> &'static str {
        match self {
            PresetKind::BaselineSfh => "Single-family baseline",
            PresetKind::StackedFlats => "Stacked flats",
            PresetKind::Townhouse => "Townhouse",
            PresetKind::Courtyard => "Courtyard",
            PresetKind::Adu => "ADU",
            PresetKind::MixedUse => "Mixed use",
        }
    }
}

/// A housing massing template: a flat extrusion of one rectangular floor plate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PresetForm {
    pub id: String,
    pub name: String,
    pub description: String,
    pub kind: PresetKind,

    pub units: u32,
    pub stories: u32,
    pub floor_to_floor_ft: f64,

    pub footprint_width_ft: f64,
    pub footprint_depth_ft: f64,
}
