//! Session layer: the two scenarios a user is comparing, the edits that
//! change them, and the systems that keep their evaluations current.
//!
//! Scenario configurations name rulesets and preset forms by catalog id.
//! [`resolve`] turns ids into records (falling back to defaults for unknown
//! ids) before anything is evaluated.

mod edits;
mod resolve;
mod state;
mod systems;


pub use edits::{LastEditOutcome, ParkingPatch, ScenarioChange, ScenarioEdit, SetbacksPatch};
pub use resolve::{resolve, ResolvedScenario};
pub use state::{
    validate_lot, ParkingConfig, ScenarioConfig, ScenarioMode, ScenarioSlot, ScenarioState,
};
pub use systems::{
    apply_scenario_edits, evaluate_config, evaluate_scenarios, scenario_inputs_changed,
    ScenarioEvaluations, ScenarioResult,
};
