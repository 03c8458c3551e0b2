//! Buildable envelope: the lot rectangle eroded by its setbacks.
//!
//! The envelope is never clamped. When the setbacks add up to more than the
//! lot, `x1 < x0` or `z1 < z0` comes out, and the evaluator reports that as
//! `ENVELOPE_INVALID` instead of this function failing.

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::types::{Lot, Ruleset, StreetSide};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub x0: f64,
    pub x1: f64,
    pub z0: f64,
    pub z1: f64,
    pub max_height_ft: f64,
}

impl Envelope {
    #[inline]
    pub fn width_ft(&self) -> f64 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn depth_ft(&self) -> f64 {
        self.z1 - self.z0
    }

    /// Plan rectangle of the envelope (height dropped).
    pub fn plan(&self) -> Rect {
        Rect::new(self.x0, self.x1, self.z0, self.z1)
    }

    /// True when there is positive buildable width and depth.
    pub fn is_buildable(&self) -> bool {
        self.width_ft() > 0.0 && self.depth_ft() > 0.0
    }
}

/// Effective (left, right) side yards. A corner lot's street-facing side uses
/// the larger of its side and street-side setbacks, never the smaller.
pub fn effective_side_setbacks(lot: &Lot) -> (f64, f64) {
    let s = &lot.setbacks_ft;
    if !lot.is_corner {
        return (s.side_left, s.side_right);
    }
    let street = s.street_side.unwrap_or(0.0);
    match lot.street_side {
        StreetSide::Left => (s.side_left.max(street), s.side_right),
        StreetSide::Right => (s.side_left, s.side_right.max(street)),
    }
}

pub fn compute_envelope(lot: &Lot, ruleset: &Ruleset) -> Envelope {
    let (left, right) = effective_side_setbacks(lot);
    Envelope {
        x0: left,
        x1: lot.width_ft - right,
        z0: lot.setbacks_ft.front,
        z1: lot.depth_ft - lot.setbacks_ft.rear,
        max_height_ft: ruleset.max_height_ft,
    }
}
