use crate::catalog::Catalog;
use crate::envelope::compute_envelope;
use crate::geometry::Rect;
use crate::placement::place_preset_in_envelope;
use crate::types::Lot;

use super::*;

fn typical_lot() -> Lot {
    Catalog::builtin()
        .lot_preset("lot_50x150")
        .unwrap()
        .lot
        .clone()
}

fn layout(lot: &Lot, behind: f64, spaces: u32) -> SurfaceParkingLayout {
    layout_surface_parking(&SurfaceParkingParams::new(lot, behind, spaces))
}

// -------------------------------------------------------------------------
// Trivial and pre-check branches
// -------------------------------------------------------------------------

#[test]
fn test_zero_spaces_trivially_fits() {
    let out = layout(&typical_lot(), 75.0, 0);
    assert!(out.fits);
    assert!(out.stalls.is_empty());
    assert!(out.aisle.is_none());
    assert!(out.reason.is_none());
}

#[test]
fn test_narrow_lot_rejected_on_width() {
    let mut lot = typical_lot();
    lot.width_ft = 8.5;
    let out = layout(&lot, 75.0, 1);
    assert!(!out.fits);
    assert_eq!(out.reason.as_deref(), Some(REASON_WIDTH));
    assert!(out.stalls.is_empty());
}

#[test]
fn test_shallow_rear_yard_rejected_on_depth() {
    // 150 - (110 + 2) = 38 < 18 + 24
    let out = layout(&typical_lot(), 110.0, 1);
    assert!(!out.fits);
    assert_eq!(out.reason.as_deref(), Some(REASON_DEPTH));
    assert!(out.stalls.is_empty());
    assert!(out.aisle.is_none());
}

#[test]
fn test_over_capacity_reports_capacity() {
    // 5 stalls per row, two rows.
    let out = layout(&typical_lot(), 75.0, 11);
    assert!(!out.fits);
    assert_eq!(
        out.reason.as_deref(),
        Some("Only 10 spaces fit in the rear yard layout.")
    );
    assert!(out.stalls.is_empty());
}

#[test]
fn test_single_row_capacity() {
    // 150 - (100 + 2) = 48: one row (42) but not two (60).
    let out = layout(&typical_lot(), 100.0, 6);
    assert!(!out.fits);
    assert_eq!(
        out.reason.as_deref(),
        Some("Only 5 spaces fit in the rear yard layout.")
    );
}

#[test]
fn test_huge_request_on_huge_lot_is_capped() {
    let mut lot = typical_lot();
    lot.width_ft = 1e12;
    let out = layout(&lot, 75.0, u32::MAX);
    assert!(!out.fits);
    assert_eq!(
        out.reason.as_deref(),
        Some("Only 10000 spaces fit in the rear yard layout.")
    );
    assert!(out.stalls.is_empty());
}

#[test]
fn test_largest_layout_on_huge_lot_fits() {
    let mut lot = typical_lot();
    lot.width_ft = 1e12;
    let out = layout(&lot, 75.0, crate::config::MAX_SURFACE_STALLS);
    assert!(out.fits);
    assert_eq!(out.stalls.len(), crate::config::MAX_SURFACE_STALLS as usize);
}

// -------------------------------------------------------------------------
// Geometry
// -------------------------------------------------------------------------

#[test]
fn test_two_flat_rear_yard_fits_two_stalls() {
    let catalog = Catalog::builtin();
    let lot = typical_lot();
    let ruleset = catalog.ruleset("sample_current").unwrap();
    let preset = catalog.preset_form("two_flat").unwrap();
    let env = compute_envelope(&lot, ruleset);
    let placement = place_preset_in_envelope(&env, preset);
    assert_eq!(placement.footprint.z1, 75.0);

    let out = layout(&lot, placement.footprint.z1, 2);
    assert!(out.fits);
    assert_eq!(out.stalls.len(), 2);
    let aisle = out.aisle.expect("aisle present");

    // Block of two 9 ft stalls centered on a 50 ft lot.
    assert_eq!(out.stalls[0], Rect::new(16.0, 25.0, 132.0, 150.0));
    assert_eq!(out.stalls[1], Rect::new(25.0, 34.0, 132.0, 150.0));
    assert_eq!(aisle, Rect::new(16.0, 34.0, 108.0, 132.0));
}

#[test]
fn test_two_rows_fill_rear_row_first() {
    let out = layout(&typical_lot(), 75.0, 7);
    assert!(out.fits);
    assert_eq!(out.stalls.len(), 7);

    let rear: Vec<_> = out.stalls.iter().filter(|s| s.z1 == 150.0).collect();
    let front: Vec<_> = out.stalls.iter().filter(|s| s.z1 == 108.0).collect();
    assert_eq!(rear.len(), 5);
    assert_eq!(front.len(), 2);
    assert_eq!(front[0].z0, 90.0);

    // Left-to-right within a row.
    assert!(rear.windows(2).all(|w| w[0].x1 == w[1].x0));
    // Block width is the full row (5 stalls) and offset (50 - 45) / 2.
    assert_eq!(rear[0].x0, 2.5);
    assert_eq!(out.aisle.unwrap().width(), 45.0);
}

#[test]
fn test_single_row_aisle_in_front_of_row() {
    let out = layout(&typical_lot(), 100.0, 3);
    assert!(out.fits);
    assert_eq!(out.stalls.len(), 3);
    assert!(out.stalls.iter().all(|s| s.z0 == 132.0 && s.z1 == 150.0));
    let aisle = out.aisle.unwrap();
    assert_eq!(aisle.z0, 108.0);
    assert_eq!(aisle.z1, 132.0);
}

#[test]
fn test_stalls_stay_behind_building_and_clearance() {
    let lot = typical_lot();
    for behind in [40.0, 60.0, 75.0, 88.0, 100.0, 106.0] {
        for spaces in 1..=10 {
            let out = layout(&lot, behind, spaces);
            if !out.fits {
                continue;
            }
            for s in &out.stalls {
                assert!(s.z0 >= behind + 2.0, "stall {s:?} overlaps building at {behind}");
                assert!(s.z1 <= lot.depth_ft);
                assert!(s.x0 >= 0.0 && s.x1 <= lot.width_ft);
            }
        }
    }
}

#[test]
fn test_custom_geometry_changes_capacity() {
    let lot = typical_lot();
    let params = SurfaceParkingParams {
        geometry: ParkingGeometry {
            stall_width_ft: 10.0,
            ..Default::default()
        },
        ..SurfaceParkingParams::new(&lot, 75.0, 10)
    };
    let out = layout_surface_parking(&params);
    assert!(out.fits);
    assert_eq!(out.stalls.len(), 10);
    assert_eq!(out.stalls[0].x0, 0.0);
}

#[test]
fn test_non_positive_stall_width_never_divides_by_zero() {
    let lot = typical_lot();
    let params = SurfaceParkingParams {
        geometry: ParkingGeometry {
            stall_width_ft: 0.0,
            ..Default::default()
        },
        ..SurfaceParkingParams::new(&lot, 75.0, 1)
    };
    let out = layout_surface_parking(&params);
    assert!(!out.fits);
    assert_eq!(out.reason.as_deref(), Some(REASON_WIDTH));
}

#[test]
fn test_fewer_spaces_fit_whenever_more_do() {
    let lot = typical_lot();
    for behind in [30.0, 75.0, 95.0] {
        for big in 1..=12u32 {
            let larger = layout(&lot, behind, big);
            if !larger.fits {
                continue;
            }
            for small in 0..big {
                let smaller = layout(&lot, behind, small);
                assert!(smaller.fits, "{small} should fit when {big} does");
                assert_eq!(smaller.stalls.len(), small as usize);
            }
        }
    }
}
