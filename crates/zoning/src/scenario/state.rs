//! Session state: one or two scenario configurations and how they are shown.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::config::{
    DEFAULT_COMPARE_RULESET_ID, DEFAULT_LOT_PRESET_ID, DEFAULT_PRESET_ID, DEFAULT_RULESET_ID,
};
use crate::error::ScenarioError;
use crate::types::{Lot, LotSetbacks, StreetSide};

// =============================================================================
// Scenario configuration
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParkingConfig {
    pub provided_spaces: u32,
    pub show_geometry: bool,
    pub apply_coverage_debit: bool,
}

/// Everything a user controls for one scenario. Rulesets and preset forms are
/// referenced by catalog id; the lot is carried by value so it can be edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioConfig {
    pub lot: Lot,
    pub ruleset_id: String,
    pub preset_id: String,
    pub parking: ParkingConfig,
}

impl ScenarioConfig {
    /// Reject lots with non-finite or negative dimensions or setbacks.
    /// Zero is allowed: a zero-width lot evaluates to an invalid envelope.
    pub fn validate(&self) -> Result<(), ScenarioError> {
        validate_lot(&self.lot)
    }
}

pub fn validate_lot(lot: &Lot) -> Result<(), ScenarioError> {
    let mut fields = vec![("width_ft", lot.width_ft), ("depth_ft", lot.depth_ft)];
    fields.extend(lot.setbacks_ft.named_values());
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(ScenarioError::NonFinite { field, value });
        }
        if value < 0.0 {
            return Err(ScenarioError::Negative { field, value });
        }
    }
    Ok(())
}

// =============================================================================
// Session state resource
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioMode {
    #[default]
    Single,
    Compare,
}

/// Which of the two scenarios an edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScenarioSlot {
    A,
    B,
}

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioState {
    pub mode: ScenarioMode,
    pub scenario_a: ScenarioConfig,
    pub scenario_b: ScenarioConfig,
}

impl Default for ScenarioState {
    fn default() -> Self {
        Self::initial(&Catalog::builtin())
    }
}

/// Lot used when the catalog has no lot presets at all.
fn fallback_lot() -> Lot {
    Lot {
        width_ft: 50.0,
        depth_ft: 150.0,
        is_corner: false,
        street_side: StreetSide::Right,
        setbacks_ft: LotSetbacks {
            front: 20.0,
            rear: 30.0,
            side_left: 5.0,
            side_right: 5.0,
            street_side: None,
        },
    }
}

impl ScenarioState {
    /// Fresh session: scenario A is the current sample code with parking
    /// shown, scenario B is the proposed code on an independent copy of the
    /// same lot.
    pub fn initial(catalog: &Catalog) -> Self {
        let lot = catalog
            .lot_preset(DEFAULT_LOT_PRESET_ID)
            .ok()
            .or_else(|| catalog.lot_presets().first())
            .map(|p| p.lot.clone())
            .unwrap_or_else(fallback_lot);

        Self {
            mode: ScenarioMode::Single,
            scenario_b: ScenarioConfig {
                lot: lot.clone(),
                ruleset_id: DEFAULT_COMPARE_RULESET_ID.to_string(),
                preset_id: DEFAULT_PRESET_ID.to_string(),
                parking: ParkingConfig {
                    provided_spaces: 0,
                    show_geometry: false,
                    apply_coverage_debit: false,
                },
            },
            scenario_a: ScenarioConfig {
                lot,
                ruleset_id: DEFAULT_RULESET_ID.to_string(),
                preset_id: DEFAULT_PRESET_ID.to_string(),
                parking: ParkingConfig {
                    provided_spaces: 2,
                    show_geometry: true,
                    apply_coverage_debit: false,
                },
            },
        }
    }

    pub fn scenario(&self, slot: ScenarioSlot) -> &ScenarioConfig {
        match slot {
            ScenarioSlot::A => &self.scenario_a,
            ScenarioSlot::B => &self.scenario_b,
        }
    }

    pub fn scenario_mut(&mut self, slot: ScenarioSlot) -> &mut ScenarioConfig {
        match slot {
            ScenarioSlot::A => &mut self.scenario_a,
            ScenarioSlot::B => &mut self.scenario_b,
        }
    }

    /// Replace unknown ruleset / preset ids with the defaults, so the stored
    /// state only ever names catalog entries. Returns whether anything changed.
    pub fn normalize(&mut self, catalog: &Catalog) -> bool {
        let a = normalize_config(&mut self.scenario_a, catalog, ScenarioSlot::A);
        let b = normalize_config(&mut self.scenario_b, catalog, ScenarioSlot::B);
        a || b
    }
}

fn normalize_config(config: &mut ScenarioConfig, catalog: &Catalog, slot: ScenarioSlot) -> bool {
    let mut changed = false;
    if catalog.ruleset(&config.ruleset_id).is_err() {
        warn!(
            "Scenario {:?}: unknown ruleset '{}', using '{}'",
            slot, config.ruleset_id, DEFAULT_RULESET_ID
        );
        config.ruleset_id = DEFAULT_RULESET_ID.to_string();
        changed = true;
    }
    if catalog.preset_form(&config.preset_id).is_err() {
        warn!(
            "Scenario {:?}: unknown preset form '{}', using '{}'",
            slot, config.preset_id, DEFAULT_PRESET_ID
        );
        config.preset_id = DEFAULT_PRESET_ID.to_string();
        changed = true;
    }
    changed
}
