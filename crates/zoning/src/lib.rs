//! Lot / ruleset / housing-form evaluation engine.
//!
//! Given a rectangular lot, a zoning ruleset and a housing preset form, the
//! engine derives the buildable envelope, places the preset's footprint,
//! computes massing metrics, checks them against the ruleset, optionally lays
//! out rear-yard surface parking, and names the binding constraint.
//!
//! [`evaluate::evaluate_scenario`] is the pure entry point. [`ZoningPlugin`]
//! wraps it in a headless Bevy session that keeps two scenarios (A and B)
//! evaluated as they are edited.

use bevy::prelude::*;

pub mod agent_protocol;
pub mod catalog;
pub mod config;
pub mod envelope;
pub mod error;
pub mod evaluate;
pub mod geometry;
pub mod metrics;
pub mod parking;
pub mod placement;
pub mod report;
pub mod scenario;
pub mod types;

#[cfg(test)]
mod integration_tests;
#[cfg(any(test, feature = "bench"))]
pub mod test_harness;

pub use catalog::{Catalog, LotPreset};
pub use error::{CatalogError, CatalogKind, ScenarioError};
pub use evaluate::{evaluate_scenario, evaluate_scenario_with, Evaluation, ScenarioInput};
pub use parking::ParkingGeometry;
pub use scenario::{ScenarioEdit, ScenarioEvaluations, ScenarioSlot, ScenarioState};
pub use types::{Lot, LotSetbacks, PresetForm, PresetKind, Ruleset, StreetSide};

use scenario::{apply_scenario_edits, evaluate_scenarios, scenario_inputs_changed, LastEditOutcome};

/// Keeps [`ScenarioEvaluations`] in step with [`ScenarioState`].
///
/// Resources inserted before the plugin is added (a custom [`Catalog`], a
/// restored [`ScenarioState`]) are kept.
pub struct ZoningPlugin;

impl Plugin for ZoningPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Catalog>()
            .init_resource::<ParkingGeometry>()
            .init_resource::<ScenarioState>()
            .init_resource::<ScenarioEvaluations>()
            .init_resource::<LastEditOutcome>()
            .add_event::<ScenarioEdit>()
            .add_systems(
                Update,
                (
                    apply_scenario_edits,
                    evaluate_scenarios.run_if(scenario_inputs_changed),
                )
                    .chain(),
            );
    }
}
