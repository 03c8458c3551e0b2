//! Sample catalog data. Values are placeholders for scaffolding, not any
//! jurisdiction's actual code.

use crate::types::{Lot, LotSetbacks, PresetForm, PresetKind, Ruleset, StreetSide};

use super::LotPreset;

pub(super) fn lot_presets() -> Vec<LotPreset> {
    vec![
        LotPreset {
            id: "lot_50x150".into(),
            name: "Typical 50' x 150'".into(),
            lot: Lot {
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
            },
        },
        LotPreset {
            id: "lot_37_5x125".into(),
            name: "Typical 37.5' x 125'".into(),
            lot: Lot {
                width_ft: 37.5,
                depth_ft: 125.0,
                is_corner: false,
                street_side: StreetSide::Right,
                setbacks_ft: LotSetbacks {
                    front: 20.0,
                    rear: 25.0,
                    side_left: 3.0,
                    side_right: 3.0,
                    street_side: None,
                },
            },
        },
        LotPreset {
            id: "lot_corner_50x150".into(),
            name: "Corner 50' x 150'".into(),
            lot: Lot {
                width_ft: 50.0,
                depth_ft: 150.0,
                is_corner: true,
                street_side: StreetSide::Right,
                setbacks_ft: LotSetbacks {
                    front: 20.0,
                    rear: 30.0,
                    side_left: 5.0,
                    side_right: 5.0,
                    street_side: Some(15.0),
                },
            },
        },
    ]
}

/// Low-rise residential caps shared by both sample rulesets.
fn sample_low_rise(
    id: &str,
    version_label: &str,
    notes: &str,
    parking_min_spaces_per_unit: f64,
) -> Ruleset {
    Ruleset {
        id: id.into(),
        name: "Sample Low-Rise Residential".into(),
        version_label: version_label.into(),
        notes: Some(notes.into()),
        sources: Vec::new(),
        max_height_ft: 35.0,
        max_far: 0.9,
        max_lot_coverage_pct: 0.4,
        min_lot_width_ft: Some(25.0),
        min_lot_area_sq_ft: Some(2500.0),
        parking_min_spaces_per_unit: Some(parking_min_spaces_per_unit),
        parking_coverage_debit_sq_ft_per_required_space: Some(0.0),
    }
}

pub(super) fn rulesets() -> Vec<Ruleset> {
    vec![
        sample_low_rise(
            "sample_current",
            "Current (Sample)",
            "Placeholder ruleset for scaffolding. Replace with jurisdiction-specific data and sources.",
            1.0,
        ),
        sample_low_rise(
            "sample_proposed",
            "Proposed (Sample: No Parking Minimum)",
            "Demonstration ruleset: remove parking minimums but keep massing limits the same.",
            0.0,
        ),
    ]
}

#[allow(clippy::too_many_arguments)]
fn form(
    id: &str,
    name: &str,
    description: &str,
    kind: PresetKind,
    units: u32,
    stories: u32,
    footprint_width_ft: f64,
    footprint_depth_ft: f64,
) -> PresetForm {
    PresetForm {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        kind,
        units,
        stories,
        floor_to_floor_ft: 10.0,
        footprint_width_ft,
        footprint_depth_ft,
    }
}

pub(super) fn preset_forms() -> Vec<PresetForm> {
    vec![
        form(
            "baseline_sfh",
            "Max Single-Family (Baseline)",
            "A simple baseline mass within typical low-rise caps.",
            PresetKind::BaselineSfh,
            1,
            2,
            28.0,
            45.0,
        ),
        form(
            "two_flat",
            "Classic 2-flat",
            "Two units stacked over two stories.",
            PresetKind::StackedFlats,
            2,
            2,
            30.0,
            55.0,
        ),
        form(
            "triplex",
            "Missing middle triplex",
            "Three units over three stories.",
            PresetKind::StackedFlats,
            3,
            3,
            30.0,
            55.0,
        ),
        form(
            "four_flat",
            "4-flat",
            "Four units over three stories (larger floor plate).",
            PresetKind::StackedFlats,
            4,
            3,
            34.0,
            60.0,
        ),
        form(
            "six_flat",
            "3-story 6-flat (small apartment)",
            "Six units over three stories (simple massing).",
            PresetKind::StackedFlats,
            6,
            3,
            38.0,
            75.0,
        ),
        form(
            "townhouse_row",
            "Townhouse row",
            "Four attached townhomes (conceptual massing).",
            PresetKind::Townhouse,
            4,
            3,
            40.0,
            50.0,
        ),
    ]
}
