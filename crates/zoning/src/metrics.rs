//! Scalar massing figures for a preset on a lot.
//!
//! The building is a flat extrusion of its footprint: every story has the
//! full floor plate, no stepbacks. Ratios against lot area are zero when the
//! lot has no area, so a degenerate lot still produces finite metrics.

use serde::{Deserialize, Serialize};

use crate::geometry::safe_div;
use crate::types::{Lot, PresetForm, Ruleset};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BuildingMetrics {
    pub footprint_area_sq_ft: f64,
    pub gfa_sq_ft: f64,
    pub height_ft: f64,
    pub far_used: f64,
    pub coverage_used: f64,

    pub required_parking_spaces: u32,
    pub parking_coverage_debit_sq_ft: f64,
    /// Coverage including the parking debit, the figure checked against the cap.
    pub effective_coverage_used: f64,
}

/// `ceil(units * spaces_per_unit)`; a missing or non-positive ratio requires
/// nothing.
pub fn required_parking_spaces(units: u32, spaces_per_unit: Option<f64>) -> u32 {
    let per_unit = spaces_per_unit.unwrap_or(0.0);
    if per_unit <= 0.0 || !per_unit.is_finite() {
        return 0;
    }
    (units as f64 * per_unit).ceil() as u32
}

/// Coverage debit charged per required stall, or 0 when the scenario does not
/// apply it or the ruleset does not define a positive debit.
pub fn coverage_debit_per_space(ruleset: &Ruleset, apply_coverage_debit: bool) -> f64 {
    match ruleset.parking_coverage_debit_sq_ft_per_required_space {
        Some(debit) if apply_coverage_debit && debit > 0.0 => debit,
        _ => 0.0,
    }
}

pub fn compute_metrics(
    lot: &Lot,
    ruleset: &Ruleset,
    preset: &PresetForm,
    apply_coverage_debit: bool,
) -> BuildingMetrics {
    let lot_area = lot.area_sq_ft();

    let footprint_area_sq_ft = preset.footprint_width_ft * preset.footprint_depth_ft;
    let gfa_sq_ft = footprint_area_sq_ft * preset.stories as f64;
    let height_ft = preset.stories as f64 * preset.floor_to_floor_ft;

    let required = required_parking_spaces(preset.units, ruleset.parking_min_spaces_per_unit);
    let debit = required as f64 * coverage_debit_per_space(ruleset, apply_coverage_debit);

    BuildingMetrics {
        footprint_area_sq_ft,
        gfa_sq_ft,
        height_ft,
        far_used: safe_div(gfa_sq_ft, lot_area),
        coverage_used: safe_div(footprint_area_sq_ft, lot_area),
        required_parking_spaces: required,
        parking_coverage_debit_sq_ft: debit,
        effective_coverage_used: safe_div(footprint_area_sq_ft + debit, lot_area),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn fixtures(preset_id: &str) -> (Lot, Ruleset, PresetForm) {
        let catalog = Catalog::builtin();
        (
            catalog.lot_preset("lot_50x150").unwrap().lot.clone(),
            catalog.ruleset("sample_current").unwrap().clone(),
            catalog.preset_form(preset_id).unwrap().clone(),
        )
    }

    #[test]
    fn test_two_flat_metrics() {
        let (lot, ruleset, preset) = fixtures("two_flat");
        let m = compute_metrics(&lot, &ruleset, &preset, false);
        assert_eq!(m.footprint_area_sq_ft, 1650.0);
        assert_eq!(m.gfa_sq_ft, 3300.0);
        assert_eq!(m.height_ft, 20.0);
        assert!((m.far_used - 0.44).abs() < 1e-12);
        assert!((m.coverage_used - 0.22).abs() < 1e-12);
        assert_eq!(m.required_parking_spaces, 2);
        assert_eq!(m.parking_coverage_debit_sq_ft, 0.0);
        assert_eq!(m.effective_coverage_used, m.coverage_used);
    }

    #[test]
    fn test_required_parking_rounds_up() {
        assert_eq!(required_parking_spaces(3, Some(0.5)), 2);
        assert_eq!(required_parking_spaces(4, Some(0.5)), 2);
        assert_eq!(required_parking_spaces(6, Some(1.0)), 6);
        assert_eq!(required_parking_spaces(1, Some(0.01)), 1);
    }

    #[test]
    fn test_required_parking_zero_when_unset() {
        assert_eq!(required_parking_spaces(6, None), 0);
        assert_eq!(required_parking_spaces(6, Some(0.0)), 0);
    }

    #[test]
    fn test_coverage_debit_only_when_applied_and_positive() {
        let (lot, mut ruleset, preset) = fixtures("two_flat");
        ruleset.parking_coverage_debit_sq_ft_per_required_space = Some(180.0);

        let without = compute_metrics(&lot, &ruleset, &preset, false);
        assert_eq!(without.parking_coverage_debit_sq_ft, 0.0);

        let with = compute_metrics(&lot, &ruleset, &preset, true);
        assert_eq!(with.parking_coverage_debit_sq_ft, 360.0);
        assert!((with.effective_coverage_used - (1650.0 + 360.0) / 7500.0).abs() < 1e-12);
        assert_eq!(with.coverage_used, without.coverage_used);

        ruleset.parking_coverage_debit_sq_ft_per_required_space = Some(-50.0);
        let negative = compute_metrics(&lot, &ruleset, &preset, true);
        assert_eq!(negative.parking_coverage_debit_sq_ft, 0.0);
    }

    #[test]
    fn test_zero_lot_area_ratios_are_zero() {
        let (mut lot, mut ruleset, preset) = fixtures("six_flat");
        lot.width_ft = 0.0;
        ruleset.parking_coverage_debit_sq_ft_per_required_space = Some(200.0);
        let m = compute_metrics(&lot, &ruleset, &preset, true);
        assert_eq!(m.far_used, 0.0);
        assert_eq!(m.coverage_used, 0.0);
        assert_eq!(m.effective_coverage_used, 0.0);
        assert!(m.gfa_sq_ft > 0.0);
    }
}
