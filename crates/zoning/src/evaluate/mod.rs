//! Scenario evaluation: the single entry point the rest of the system calls.
//!
//! Pipeline, always in this order:
//!
//! 1. envelope from lot + ruleset,
//! 2. footprint placement inside the envelope,
//! 3. massing metrics,
//! 4. massing / lot / parking-count checks,
//! 5. the opt-in parking geometry (only when geometry is shown and at least
//!    one space is provided) and its "does it fit" check,
//! 6. the binding constraint headline.
//!
//! Evaluation is a pure function of its inputs. It never fails: degenerate
//! lots, oversize presets and impossible parking all come back as violations.

pub mod binding;
pub mod violations;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

use crate::envelope::{compute_envelope, Envelope};
use crate::metrics::{compute_metrics, BuildingMetrics};
use crate::parking::{
    layout_surface_parking, ParkingGeometry, SurfaceParkingLayout, SurfaceParkingParams,
};
use crate::placement::{place_preset_in_envelope, BuildingPlacement};
use crate::types::{Lot, PresetForm, Ruleset};

pub use binding::{
    compute_binding, headline_violation, utilizations, BindingInfo, BindingKind, Constraint,
    Utilization,
};
pub use violations::{Violation, ViolationCode};

use violations::{check_massing_and_lot, check_parking_fit, CheckContext};

/// Resolved inputs for one evaluation. Records are borrowed; the evaluator
/// never clones or mutates them.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioInput<'a> {
    pub lot: &'a Lot,
    pub ruleset: &'a Ruleset,
    pub preset: &'a PresetForm,
    pub provided_parking_spaces: u32,
    pub show_parking_geometry: bool,
    pub apply_coverage_debit: bool,
}

impl ScenarioInput<'_> {
    /// Whether the parking packer runs for this input.
    #[inline]
    pub fn wants_parking_geometry(&self) -> bool {
        self.show_parking_geometry && self.provided_parking_spaces > 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Evaluation {
    pub envelope: Envelope,
    pub placement: BuildingPlacement,
    pub metrics: BuildingMetrics,
    pub parking_layout: SurfaceParkingLayout,
    pub violations: Vec<Violation>,
    pub binding: BindingInfo,
}

impl Evaluation {
    #[inline]
    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn has_violation(&self, code: ViolationCode) -> bool {
        self.violations.iter().any(|v| v.code == code)
    }

    pub fn violation_codes(&self) -> Vec<ViolationCode> {
        self.violations.iter().map(|v| v.code).collect()
    }
}

/// Evaluate with the default stall geometry.
pub fn evaluate_scenario(input: &ScenarioInput<'_>) -> Evaluation {
    evaluate_scenario_with(input, &ParkingGeometry::default())
}

/// Evaluate with explicit stall geometry.
pub fn evaluate_scenario_with(input: &ScenarioInput<'_>, geometry: &ParkingGeometry) -> Evaluation {
    let envelope = compute_envelope(input.lot, input.ruleset);
    let placement = place_preset_in_envelope(&envelope, input.preset);
    let metrics = compute_metrics(
        input.lot,
        input.ruleset,
        input.preset,
        input.apply_coverage_debit,
    );

    let mut violations = check_massing_and_lot(&CheckContext {
        lot: input.lot,
        ruleset: input.ruleset,
        envelope: &envelope,
        footprint: &placement.footprint,
        metrics: &metrics,
        provided_parking_spaces: input.provided_parking_spaces,
    });

    let parking_layout = if input.wants_parking_geometry() {
        let layout = layout_surface_parking(&SurfaceParkingParams {
            lot: input.lot,
            behind_building_z: placement.footprint.z1,
            spaces: input.provided_parking_spaces,
            geometry: *geometry,
        });
        violations.extend(check_parking_fit(&layout));
        layout
    } else {
        SurfaceParkingLayout::empty()
    };

    let binding = compute_binding(
        &envelope,
        &placement.footprint,
        &metrics,
        input.ruleset,
        &violations,
    );

    Evaluation {
        envelope,
        placement,
        metrics,
        parking_layout,
        violations,
        binding,
    }
}
