//! ECS systems: apply queued edits, then re-evaluate whatever changed.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::evaluate::{evaluate_scenario_with, Evaluation};
use crate::parking::ParkingGeometry;
use crate::types::{PresetForm, Ruleset};

use super::edits::{LastEditOutcome, ScenarioEdit};
use super::resolve::resolve;
use super::state::{ScenarioConfig, ScenarioSlot, ScenarioState};

// =============================================================================
// Resources
// =============================================================================

/// One evaluated scenario together with the records it was evaluated against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioResult {
    pub slot: ScenarioSlot,
    pub config: ScenarioConfig,
    pub ruleset: Ruleset,
    pub preset: PresetForm,
    /// Id of the lot preset this scenario's lot still matches, if any.
    pub lot_preset_id: Option<String>,
    pub evaluation: Evaluation,
}

/// Latest evaluation of both scenarios. `None` only before the first update
/// or when the catalog cannot resolve anything.
#[derive(Resource, Debug, Clone, Default)]
pub struct ScenarioEvaluations {
    pub a: Option<ScenarioResult>,
    pub b: Option<ScenarioResult>,
    /// Number of times the evaluations were recomputed.
    pub generation: u64,
}

impl ScenarioEvaluations {
    pub fn get(&self, slot: ScenarioSlot) -> Option<&ScenarioResult> {
        match slot {
            ScenarioSlot::A => self.a.as_ref(),
            ScenarioSlot::B => self.b.as_ref(),
        }
    }
}

// =============================================================================
// Pure helpers
// =============================================================================

/// Resolve and evaluate one scenario configuration.
pub fn evaluate_config(
    catalog: &Catalog,
    geometry: &ParkingGeometry,
    slot: ScenarioSlot,
    config: &ScenarioConfig,
) -> Option<ScenarioResult> {
    let resolved = match resolve(catalog, config) {
        Ok(r) => r,
        Err(e) => {
            error!("Scenario {:?} cannot be evaluated: {}", slot, e);
            return None;
        }
    };
    let evaluation = evaluate_scenario_with(&resolved.input(), geometry);
    Some(ScenarioResult {
        slot,
        config: config.clone(),
        ruleset: resolved.ruleset.clone(),
        preset: resolved.preset.clone(),
        lot_preset_id: catalog
            .matching_lot_preset(&config.lot)
            .map(|p| p.id.clone()),
        evaluation,
    })
}

// =============================================================================
// Systems
// =============================================================================

pub fn apply_scenario_edits(
    mut edits: EventReader<ScenarioEdit>,
    catalog: Res<Catalog>,
    mut state: ResMut<ScenarioState>,
    mut outcome: ResMut<LastEditOutcome>,
) {
    for edit in edits.read() {
        // Edits run on a copy so no-op and rejected edits leave the resource
        // unchanged and do not trigger re-evaluation.
        let mut next = state.clone();
        match edit.apply(&mut next, &catalog) {
            Ok(()) => {
                if *state != next {
                    *state = next;
                }
                outcome.0 = Some(Ok(()));
            }
            Err(e) => {
                warn!("Rejected {:?} edit for scenario {:?}: {}", edit.change, edit.slot, e);
                outcome.0 = Some(Err(e.to_string()));
            }
        }
    }
}

/// Recompute both evaluations. Scheduled only when the state, the catalog or
/// the parking geometry changed.
pub fn evaluate_scenarios(
    catalog: Res<Catalog>,
    geometry: Res<ParkingGeometry>,
    state: Res<ScenarioState>,
    mut evaluations: ResMut<ScenarioEvaluations>,
) {
    evaluations.a = evaluate_config(&catalog, &geometry, ScenarioSlot::A, &state.scenario_a);
    evaluations.b = evaluate_config(&catalog, &geometry, ScenarioSlot::B, &state.scenario_b);
    evaluations.generation += 1;

    for result in [&evaluations.a, &evaluations.b].into_iter().flatten() {
        debug!(
            "Scenario {:?} ({} / {}): {} violation(s), {}",
            result.slot,
            result.ruleset.id,
            result.preset.id,
            result.evaluation.violations.len(),
            result.evaluation.binding.label
        );
    }
}

pub fn scenario_inputs_changed(
    catalog: Res<Catalog>,
    geometry: Res<ParkingGeometry>,
    state: Res<ScenarioState>,
) -> bool {
    catalog.is_changed() || geometry.is_changed() || state.is_changed()
}
