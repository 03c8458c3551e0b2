use crate::catalog::Catalog;
use crate::parking::ParkingGeometry;
use crate::types::{Lot, PresetForm, Ruleset};

use super::*;

struct Fixture {
    lot: Lot,
    ruleset: Ruleset,
    preset: PresetForm,
    provided: u32,
    show_geometry: bool,
    apply_debit: bool,
}

impl Fixture {
    fn new(preset_id: &str, provided: u32) -> Self {
        let catalog = Catalog::builtin();
        Self {
            lot: catalog.lot_preset("lot_50x150").unwrap().lot.clone(),
            ruleset: catalog.ruleset("sample_current").unwrap().clone(),
            preset: catalog.preset_form(preset_id).unwrap().clone(),
            provided,
            show_geometry: false,
            apply_debit: false,
        }
    }

    fn eval(&self) -> Evaluation {
        evaluate_scenario(&ScenarioInput {
            lot: &self.lot,
            ruleset: &self.ruleset,
            preset: &self.preset,
            provided_parking_spaces: self.provided,
            show_parking_geometry: self.show_geometry,
            apply_coverage_debit: self.apply_debit,
        })
    }
}

// -------------------------------------------------------------------------
// Reference scenarios
// -------------------------------------------------------------------------

#[test]
fn test_compliant_two_flat_is_width_bound() {
    let out = Fixture::new("two_flat", 2).eval();
    assert!(out.violations.is_empty(), "{:?}", out.violations);
    assert_eq!(out.binding.kind, BindingKind::Binding);
    assert!(out.binding.label.contains("Envelope width"));
    assert_eq!(out.binding.label, "Envelope width is tight (75% used).");
    assert!(out.parking_layout.fits);
    assert!(out.parking_layout.stalls.is_empty());
}

#[test]
fn test_six_flat_violates_far() {
    let out = Fixture::new("six_flat", 6).eval();
    assert_eq!(out.violation_codes(), vec![ViolationCode::Far]);
    assert_eq!(out.binding.kind, BindingKind::Violation);
    assert_eq!(out.binding.label, "FAR (1.14) exceeds max FAR (0.90).");
}

#[test]
fn test_half_percent_utilization_rounds_up() {
    let mut f = Fixture::new("two_flat", 2);
    f.preset.footprint_width_ft = 25.0;
    f.preset.footprint_depth_ft = 40.0;
    let out = f.eval();
    assert!(out.is_compliant(), "{:?}", out.violations);
    assert_eq!(out.binding.label, "Envelope width is tight (63% used).");
}

#[test]
fn test_far_message_rounds_half_up() {
    // 37.5 x 75 x 3 stories on 7,500 sf is exactly 1.125.
    let mut f = Fixture::new("six_flat", 6);
    f.preset.footprint_width_ft = 37.5;
    let out = f.eval();
    assert_eq!(out.metrics.far_used, 1.125);
    assert_eq!(out.violation_codes(), vec![ViolationCode::Far]);
    assert_eq!(out.binding.label, "FAR (1.13) exceeds max FAR (0.90).");
}

#[test]
fn test_two_flat_with_parking_geometry() {
    let mut f = Fixture::new("two_flat", 2);
    f.show_geometry = true;
    let out = f.eval();
    assert!(out.is_compliant());
    assert!(out.parking_layout.fits);
    assert_eq!(out.parking_layout.stalls.len(), 2);
    assert!(out.parking_layout.aisle.is_some());
}

// -------------------------------------------------------------------------
// Individual checks
// -------------------------------------------------------------------------

#[test]
fn test_setbacks_larger_than_lot_invalidate_envelope() {
    let mut f = Fixture::new("two_flat", 2);
    f.lot.setbacks_ft.front = 80.0;
    f.lot.setbacks_ft.rear = 80.0;
    let out = f.eval();
    assert!(out.has_violation(ViolationCode::EnvelopeInvalid));
    assert!(out.has_violation(ViolationCode::OutsideEnvelope));
    // Physical fit outranks the invalid envelope in the headline.
    assert_eq!(
        out.binding.label,
        "Building footprint exceeds the setback envelope."
    );
}

#[test]
fn test_height_violation_message() {
    let mut f = Fixture::new("two_flat", 2);
    f.preset.stories = 4;
    let out = f.eval();
    assert!(out.has_violation(ViolationCode::Height));
    let height = out
        .violations
        .iter()
        .find(|v| v.code == ViolationCode::Height)
        .unwrap();
    assert_eq!(
        height.message,
        "Building height (40.0 ft) exceeds max height (35.0 ft)."
    );
    assert_eq!(out.binding.label, height.message);
}

#[test]
fn test_height_at_limit_is_compliant() {
    let mut f = Fixture::new("baseline_sfh", 1);
    f.preset.floor_to_floor_ft = 17.5;
    let out = f.eval();
    assert!(!out.has_violation(ViolationCode::Height));
}

#[test]
fn test_coverage_debit_can_push_over_cap() {
    let mut f = Fixture::new("two_flat", 2);
    f.ruleset.parking_coverage_debit_sq_ft_per_required_space = Some(700.0);

    assert!(f.eval().is_compliant());

    f.apply_debit = true;
    let out = f.eval();
    assert_eq!(out.violation_codes(), vec![ViolationCode::Coverage]);
    assert_eq!(
        out.binding.label,
        "Lot coverage (40.7%) exceeds max coverage (40.0%)."
    );
}

#[test]
fn test_lot_minimums() {
    let mut f = Fixture::new("baseline_sfh", 1);
    f.lot.width_ft = 20.0;
    f.lot.depth_ft = 100.0;
    f.lot.setbacks_ft.side_left = 0.0;
    f.lot.setbacks_ft.side_right = 0.0;
    f.lot.setbacks_ft.rear = 20.0;
    f.preset.footprint_width_ft = 18.0;
    f.preset.footprint_depth_ft = 30.0;
    f.preset.stories = 1;
    let out = f.eval();
    assert_eq!(
        out.violation_codes(),
        vec![ViolationCode::MinLotWidth, ViolationCode::MinLotArea]
    );
    assert_eq!(
        out.binding.label,
        "Lot width (20.0 ft) is below the minimum (25.0 ft)."
    );
    assert_eq!(
        out.violations[1].message,
        "Lot area (2000 sf) is below the minimum (2500 sf)."
    );
}

#[test]
fn test_underprovided_parking() {
    let out = Fixture::new("two_flat", 1).eval();
    assert_eq!(
        out.violation_codes(),
        vec![ViolationCode::ParkingUnderprovided]
    );
    assert_eq!(
        out.binding.label,
        "Provided parking (1) is below required parking (2)."
    );
}

#[test]
fn test_parking_geometry_is_opt_in() {
    let mut f = Fixture::new("two_flat", 40);
    let hidden = f.eval();
    assert!(hidden.is_compliant());
    assert!(hidden.parking_layout.fits);

    f.show_geometry = true;
    let shown = f.eval();
    assert_eq!(
        shown.violation_codes(),
        vec![ViolationCode::ParkingDoesNotFit]
    );
    assert_eq!(
        shown.binding.label,
        "Only 10 spaces fit in the rear yard layout."
    );
    assert!(shown.parking_layout.stalls.is_empty());
}

#[test]
fn test_parking_does_not_fit_outranks_underprovided() {
    let mut f = Fixture::new("six_flat", 3);
    f.preset.footprint_width_ft = 30.0;
    f.preset.footprint_depth_ft = 90.0;
    f.preset.stories = 1;
    f.show_geometry = true;
    let out = f.eval();
    assert!(out.has_violation(ViolationCode::ParkingUnderprovided));
    assert!(out.has_violation(ViolationCode::ParkingDoesNotFit));
    assert_eq!(out.binding.label, crate::parking::REASON_DEPTH);
}

#[test]
fn test_zero_provided_with_geometry_shown_skips_packer() {
    let mut f = Fixture::new("two_flat", 0);
    f.ruleset.parking_min_spaces_per_unit = Some(0.0);
    f.show_geometry = true;
    let out = f.eval();
    assert!(out.is_compliant());
    assert!(out.parking_layout.aisle.is_none());
}

#[test]
fn test_zero_width_lot_is_total() {
    let mut f = Fixture::new("two_flat", 2);
    f.lot.width_ft = 0.0;
    f.show_geometry = true;
    let out = f.eval();
    assert_eq!(out.metrics.far_used, 0.0);
    assert_eq!(out.metrics.coverage_used, 0.0);
    assert_eq!(out.metrics.effective_coverage_used, 0.0);
    assert!(out.has_violation(ViolationCode::EnvelopeInvalid));
    assert!(out.has_violation(ViolationCode::MinLotWidth));
    assert!(out.has_violation(ViolationCode::ParkingDoesNotFit));
    assert_eq!(out.binding.kind, BindingKind::Violation);
}

#[test]
fn test_custom_parking_geometry_flows_through() {
    let mut f = Fixture::new("two_flat", 2);
    f.show_geometry = true;
    let wide = ParkingGeometry {
        stall_width_ft: 60.0,
        ..Default::default()
    };
    let out = evaluate_scenario_with(
        &ScenarioInput {
            lot: &f.lot,
            ruleset: &f.ruleset,
            preset: &f.preset,
            provided_parking_spaces: f.provided,
            show_parking_geometry: f.show_geometry,
            apply_coverage_debit: f.apply_debit,
        },
        &wide,
    );
    assert_eq!(
        out.violation_codes(),
        vec![ViolationCode::ParkingDoesNotFit]
    );
}

// -------------------------------------------------------------------------
// Properties
// -------------------------------------------------------------------------

#[test]
fn test_evaluation_is_idempotent() {
    let mut f = Fixture::new("four_flat", 3);
    f.show_geometry = true;
    f.apply_debit = true;
    assert_eq!(f.eval(), f.eval());
}

#[test]
fn test_binding_kind_matches_violation_presence() {
    let catalog = Catalog::builtin();
    for preset in catalog.preset_forms() {
        for provided in [0, 1, 2, 6, 12] {
            for show in [false, true] {
                let mut f = Fixture::new(&preset.id, provided);
                f.show_geometry = show;
                let out = f.eval();
                assert_eq!(
                    out.binding.kind == BindingKind::Violation,
                    !out.violations.is_empty(),
                    "{} / {provided} / {show}",
                    preset.id
                );
            }
        }
    }
}

#[test]
fn test_evaluation_serializes_with_wire_codes() {
    let out = Fixture::new("six_flat", 6).eval();
    let json = serde_json::to_value(&out).unwrap();
    assert_eq!(json["violations"][0]["code"], "FAR");
    assert_eq!(json["binding"]["kind"], "violation");
    assert!(json["binding"].get("detail").is_none());
    assert_eq!(json["placement"]["footprint"]["x0"], 6.0);
}
