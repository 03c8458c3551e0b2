//! Rule checks. Each check is independent; all of them run on every
//! evaluation so the caller sees the complete list, not just the first hit.

use serde::{Deserialize, Serialize};

use crate::config::TOLERANCE;
use crate::envelope::Envelope;
use crate::geometry::{to_fixed, Rect};
use crate::metrics::BuildingMetrics;
use crate::parking::SurfaceParkingLayout;
use crate::types::{Lot, Ruleset};

// =============================================================================
// Violation codes
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    EnvelopeInvalid,
    OutsideEnvelope,
    Height,
    Far,
    Coverage,
    MinLotWidth,
    MinLotArea,
    ParkingUnderprovided,
    ParkingDoesNotFit,
}

impl ViolationCode {
    /// Order used to pick the headline violation: physical fit first, then
    /// the headline massing caps, then parking, then lot minimums.
    pub const BY_PRIORITY: [ViolationCode; 9] = [
        ViolationCode::OutsideEnvelope,
        ViolationCode::Height,
        ViolationCode::Far,
        ViolationCode::Coverage,
        ViolationCode::ParkingDoesNotFit,
        ViolationCode::ParkingUnderprovided,
        ViolationCode::MinLotWidth,
        ViolationCode::MinLotArea,
        ViolationCode::EnvelopeInvalid,
    ];

    /// Wire name, e.g. `"OUTSIDE_ENVELOPE"`.
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationCode::EnvelopeInvalid => "ENVELOPE_INVALID",
            ViolationCode::OutsideEnvelope => "OUTSIDE_ENVELOPE",
            ViolationCode::Height => "HEIGHT",
            ViolationCode::Far => "FAR",
            ViolationCode::Coverage => "COVERAGE",
            ViolationCode::MinLotWidth => "MIN_LOT_WIDTH",
            ViolationCode::MinLotArea => "MIN_LOT_AREA",
            ViolationCode::ParkingUnderprovided => "PARKING_UNDERPROVIDED",
            ViolationCode::ParkingDoesNotFit => "PARKING_DOES_NOT_FIT",
        }
    }
}

impl std::fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub code: ViolationCode,
    pub message: String,
}

impl Violation {
    pub fn new(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

// =============================================================================
// Checks
// =============================================================================

/// Everything the checks look at, borrowed from one evaluation pass.
pub struct CheckContext<'a> {
    pub lot: &'a Lot,
    pub ruleset: &'a Ruleset,
    pub envelope: &'a Envelope,
    pub footprint: &'a Rect,
    pub metrics: &'a BuildingMetrics,
    pub provided_parking_spaces: u32,
}

pub const FALLBACK_PARKING_MESSAGE: &str =
    "Provided parking does not fit in the rear yard layout.";

/// Massing, lot, and parking-count checks, in reporting order.
pub fn check_massing_and_lot(ctx: &CheckContext<'_>) -> Vec<Violation> {
    let mut violations = Vec::new();
    let CheckContext {
        lot,
        ruleset,
        envelope,
        footprint,
        metrics,
        provided_parking_spaces,
    } = ctx;

    if envelope.width_ft() <= 0.0 || envelope.depth_ft() <= 0.0 {
        violations.push(Violation::new(
            ViolationCode::EnvelopeInvalid,
            "Setbacks leave no buildable area (envelope is invalid).",
        ));
    }

    if !envelope.plan().contains_rect(footprint, TOLERANCE) {
        violations.push(Violation::new(
            ViolationCode::OutsideEnvelope,
            "Building footprint exceeds the setback envelope.",
        ));
    }

    if metrics.height_ft > ruleset.max_height_ft + TOLERANCE {
        violations.push(Violation::new(
            ViolationCode::Height,
            format!(
                "Building height ({} ft) exceeds max height ({} ft).",
                to_fixed(metrics.height_ft, 1),
                to_fixed(ruleset.max_height_ft, 1)
            ),
        ));
    }

    if metrics.far_used > ruleset.max_far + TOLERANCE {
        violations.push(Violation::new(
            ViolationCode::Far,
            format!(
                "FAR ({}) exceeds max FAR ({}).",
                to_fixed(metrics.far_used, 2),
                to_fixed(ruleset.max_far, 2)
            ),
        ));
    }

    if metrics.effective_coverage_used > ruleset.max_lot_coverage_pct + TOLERANCE {
        violations.push(Violation::new(
            ViolationCode::Coverage,
            format!(
                "Lot coverage ({}%) exceeds max coverage ({}%).",
                to_fixed(metrics.effective_coverage_used * 100.0, 1),
                to_fixed(ruleset.max_lot_coverage_pct * 100.0, 1)
            ),
        ));
    }

    if let Some(min_width) = ruleset.min_lot_width_ft {
        if lot.width_ft + TOLERANCE < min_width {
            violations.push(Violation::new(
                ViolationCode::MinLotWidth,
                format!(
                    "Lot width ({} ft) is below the minimum ({} ft).",
                    to_fixed(lot.width_ft, 1),
                    to_fixed(min_width, 1)
                ),
            ));
        }
    }

    if let Some(min_area) = ruleset.min_lot_area_sq_ft {
        let area = lot.area_sq_ft();
        if area + TOLERANCE < min_area {
            violations.push(Violation::new(
                ViolationCode::MinLotArea,
                format!(
                    "Lot area ({} sf) is below the minimum ({} sf).",
                    to_fixed(area, 0),
                    to_fixed(min_area, 0)
                ),
            ));
        }
    }

    if *provided_parking_spaces < metrics.required_parking_spaces {
        violations.push(Violation::new(
            ViolationCode::ParkingUnderprovided,
            format!(
                "Provided parking ({}) is below required parking ({}).",
                provided_parking_spaces, metrics.required_parking_spaces
            ),
        ));
    }

    violations
}

/// The opt-in "does the parking physically fit" check.
pub fn check_parking_fit(layout: &SurfaceParkingLayout) -> Option<Violation> {
    if layout.fits {
        return None;
    }
    let message = layout
        .reason
        .clone()
        .unwrap_or_else(|| FALLBACK_PARKING_MESSAGE.to_string());
    Some(Violation::new(ViolationCode::ParkingDoesNotFit, message))
}
