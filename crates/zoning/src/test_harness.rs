//! # TestSession: headless harness for the zoning plugin
//!
//! Wraps a `bevy::app::App` with `MinimalPlugins` + [`ZoningPlugin`] so tests
//! can queue edits, run an update, and inspect the resulting evaluations.

use bevy::app::App;
use bevy::prelude::*;

use crate::catalog::Catalog;
use crate::evaluate::ViolationCode;
use crate::parking::ParkingGeometry;
use crate::scenario::{
    LastEditOutcome, ScenarioChange, ScenarioEdit, ScenarioEvaluations, ScenarioResult,
    ScenarioSlot, ScenarioState,
};
use crate::ZoningPlugin;

pub struct TestSession {
    app: App,
}

impl Default for TestSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TestSession {
    // -----------------------------------------------------------------------
    // Constructors
    // -----------------------------------------------------------------------

    /// Built-in catalog, default session state, one update already run.
    pub fn new() -> Self {
        Self::build(None, None)
    }

    /// Same as [`TestSession::new`] but starting from `catalog`. The initial
    /// state is derived from that catalog.
    pub fn with_catalog(catalog: Catalog) -> Self {
        let state = ScenarioState::initial(&catalog);
        Self::build(Some(catalog), Some(state))
    }

    pub fn with_state(state: ScenarioState) -> Self {
        Self::build(None, Some(state))
    }

    fn build(catalog: Option<Catalog>, state: Option<ScenarioState>) -> Self {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        // Inserted before the plugin so `init_resource` keeps them.
        if let Some(catalog) = catalog {
            app.insert_resource(catalog);
        }
        if let Some(state) = state {
            app.insert_resource(state);
        }
        app.add_plugins(ZoningPlugin);
        app.update();
        Self { app }
    }

    // -----------------------------------------------------------------------
    // Driving
    // -----------------------------------------------------------------------

    /// Queue an edit; it is applied on the next [`TestSession::update`].
    pub fn edit(&mut self, slot: ScenarioSlot, change: ScenarioChange) -> &mut Self {
        self.app
            .world_mut()
            .send_event(ScenarioEdit::new(slot, change));
        self
    }

    /// Queue an edit and run one update.
    pub fn apply(&mut self, slot: ScenarioSlot, change: ScenarioChange) -> &mut Self {
        self.edit(slot, change);
        self.update();
        self
    }

    pub fn update(&mut self) {
        self.app.update();
    }

    pub fn set_parking_geometry(&mut self, geometry: ParkingGeometry) {
        *self.app.world_mut().resource_mut::<ParkingGeometry>() = geometry;
    }

    pub fn world_mut(&mut self) -> &mut World {
        self.app.world_mut()
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    pub fn state(&self) -> &ScenarioState {
        self.app.world().resource::<ScenarioState>()
    }

    pub fn evaluations(&self) -> &ScenarioEvaluations {
        self.app.world().resource::<ScenarioEvaluations>()
    }

    pub fn generation(&self) -> u64 {
        self.evaluations().generation
    }

    /// The evaluated scenario in `slot`. Panics if it was never evaluated.
    pub fn result(&self, slot: ScenarioSlot) -> &ScenarioResult {
        match self.evaluations().get(slot) {
            Some(r) => r,
            None => panic!("scenario {slot:?} has no evaluation"),
        }
    }

    pub fn last_outcome(&self) -> Option<&Result<(), String>> {
        self.app.world().resource::<LastEditOutcome>().0.as_ref()
    }

    // -----------------------------------------------------------------------
    // Assertions
    // -----------------------------------------------------------------------

    pub fn assert_compliant(&self, slot: ScenarioSlot) {
        let violations = &self.result(slot).evaluation.violations;
        assert!(
            violations.is_empty(),
            "Expected scenario {slot:?} to be compliant, got {violations:?}"
        );
    }

    pub fn assert_violation(&self, slot: ScenarioSlot, code: ViolationCode) {
        let codes = self.result(slot).evaluation.violation_codes();
        assert!(
            codes.contains(&code),
            "Expected {code} in scenario {slot:?}, got {codes:?}"
        );
    }

    pub fn assert_no_violation(&self, slot: ScenarioSlot, code: ViolationCode) {
        let codes = self.result(slot).evaluation.violation_codes();
        assert!(
            !codes.contains(&code),
            "Expected no {code} in scenario {slot:?}, got {codes:?}"
        );
    }

    pub fn assert_edit_rejected(&self) {
        assert!(
            matches!(self.last_outcome(), Some(Err(_))),
            "Expected the last edit to be rejected, got {:?}",
            self.last_outcome()
        );
    }
}
