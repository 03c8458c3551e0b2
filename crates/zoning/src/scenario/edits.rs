//! Edits a user (or an agent) can make to the session state.
//!
//! Partial edits carry `Option` fields; `None` leaves the current value.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ScenarioError;
use crate::types::Lot;

use super::state::{validate_lot, ScenarioMode, ScenarioSlot, ScenarioState};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SetbacksPatch {
    #[serde(default)]
    pub front: Option<f64>,
    #[serde(default)]
    pub rear: Option<f64>,
    #[serde(default)]
    pub side_left: Option<f64>,
    #[serde(default)]
    pub side_right: Option<f64>,
    #[serde(default)]
    pub street_side: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParkingPatch {
    #[serde(default)]
    pub provided_spaces: Option<u32>,
    #[serde(default)]
    pub show_geometry: Option<bool>,
    #[serde(default)]
    pub apply_coverage_debit: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "edit", rename_all = "snake_case")]
pub enum ScenarioChange {
    SetMode { mode: ScenarioMode },
    SetLot { lot: Lot },
    SelectLotPreset { id: String },
    SetLotSetbacks { setbacks: SetbacksPatch },
    SetRulesetId { id: String },
    SetPresetId { id: String },
    SetParking { parking: ParkingPatch },
    ReplaceState { state: ScenarioState },
}

/// A change aimed at one scenario. `SetMode` and `ReplaceState` affect the
/// whole session and ignore `slot`.
#[derive(Event, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioEdit {
    pub slot: ScenarioSlot,
    pub change: ScenarioChange,
}

impl ScenarioEdit {
    pub fn new(slot: ScenarioSlot, change: ScenarioChange) -> Self {
        Self { slot, change }
    }

    /// Apply to `state`. Rejected edits leave `state` untouched.
    pub fn apply(&self, state: &mut ScenarioState, catalog: &Catalog) -> Result<(), ScenarioError> {
        match &self.change {
            ScenarioChange::SetMode { mode } => {
                state.mode = *mode;
            }
            ScenarioChange::SetLot { lot } => {
                validate_lot(lot)?;
                state.scenario_mut(self.slot).lot = lot.clone();
            }
            ScenarioChange::SelectLotPreset { id } => {
                let preset = catalog.lot_preset(id)?;
                state.scenario_mut(self.slot).lot = preset.lot.clone();
            }
            ScenarioChange::SetLotSetbacks { setbacks } => {
                let mut lot = state.scenario(self.slot).lot.clone();
                let s = &mut lot.setbacks_ft;
                if let Some(v) = setbacks.front {
                    s.front = v;
                }
                if let Some(v) = setbacks.rear {
                    s.rear = v;
                }
                if let Some(v) = setbacks.side_left {
                    s.side_left = v;
                }
                if let Some(v) = setbacks.side_right {
                    s.side_right = v;
                }
                if let Some(v) = setbacks.street_side {
                    s.street_side = Some(v);
                }
                validate_lot(&lot)?;
                state.scenario_mut(self.slot).lot = lot;
            }
            ScenarioChange::SetRulesetId { id } => {
                catalog.ruleset(id)?;
                state.scenario_mut(self.slot).ruleset_id = id.clone();
            }
            ScenarioChange::SetPresetId { id } => {
                catalog.preset_form(id)?;
                state.scenario_mut(self.slot).preset_id = id.clone();
            }
            ScenarioChange::SetParking { parking } => {
                let p = &mut state.scenario_mut(self.slot).parking;
                if let Some(v) = parking.provided_spaces {
                    p.provided_spaces = v;
                }
                if let Some(v) = parking.show_geometry {
                    p.show_geometry = v;
                }
                if let Some(v) = parking.apply_coverage_debit {
                    p.apply_coverage_debit = v;
                }
            }
            ScenarioChange::ReplaceState { state: next } => {
                next.scenario_a.validate()?;
                next.scenario_b.validate()?;
                let mut next = next.clone();
                next.normalize(catalog);
                *state = next;
            }
        }
        Ok(())
    }
}

/// Result of the most recent edit, for callers that need to report it back.
#[derive(Resource, Debug, Clone, Default)]
pub struct LastEditOutcome(pub Option<Result<(), String>>);
