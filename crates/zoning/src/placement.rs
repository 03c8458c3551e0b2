//! Footprint placement inside the envelope.
//!
//! One deterministic rule, no search. The footprint is centered laterally and
//! never clamped, so an oversize preset pokes out of both sides evenly and the
//! evaluator flags it. In depth it sits against the front setback line when it
//! fits, leaving the whole rear yard for parking; when it does not fit it is
//! centered so the overflow splits front and rear.

use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::geometry::Rect;
use crate::types::PresetForm;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BuildingPlacement {
    pub footprint: Rect,
}

pub fn place_preset_in_envelope(envelope: &Envelope, preset: &PresetForm) -> BuildingPlacement {
    let w = preset.footprint_width_ft;
    let d = preset.footprint_depth_ft;

    let x_center = (envelope.x0 + envelope.x1) / 2.0;
    let x0 = x_center - w / 2.0;
    let x1 = x_center + w / 2.0;

    let z0 = if d <= envelope.depth_ft() {
        envelope.z0
    } else {
        (envelope.z0 + envelope.z1) / 2.0 - d / 2.0
    };

    BuildingPlacement {
        footprint: Rect::new(x0, x1, z0, z0 + d),
    }
}
