//! The rear-yard stall packer.

use serde::{Deserialize, Serialize};

use crate::config::MAX_SURFACE_STALLS;
use crate::geometry::{safe_div, Rect};
use crate::types::Lot;

use super::geometry::ParkingGeometry;

pub const REASON_WIDTH: &str = "Not enough lot width for even one parking stall.";
pub const REASON_DEPTH: &str = "Not enough rear yard depth for parking + aisle.";
pub const REASON_CONSTRAINED_BY_BUILDING: &str =
    "Rear yard depth is constrained by building placement.";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceParkingLayout {
    pub fits: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub stalls: Vec<Rect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aisle: Option<Rect>,
}

impl SurfaceParkingLayout {
    /// Nothing requested: trivially fits with no geometry.
    pub fn empty() -> Self {
        Self {
            fits: true,
            ..Default::default()
        }
    }

    fn rejected(reason: impl Into<String>) -> Self {
        Self {
            fits: false,
            reason: Some(reason.into()),
            stalls: Vec::new(),
            aisle: None,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SurfaceParkingParams<'a> {
    pub lot: &'a Lot,
    /// Rear face of the building footprint (`footprint.z1`).
    pub behind_building_z: f64,
    pub spaces: u32,
    pub geometry: ParkingGeometry,
}

impl<'a> SurfaceParkingParams<'a> {
    /// Params with the default stall geometry.
    pub fn new(lot: &'a Lot, behind_building_z: f64, spaces: u32) -> Self {
        Self {
            lot,
            behind_building_z,
            spaces,
            geometry: ParkingGeometry::default(),
        }
    }
}

pub fn layout_surface_parking(p: &SurfaceParkingParams<'_>) -> SurfaceParkingLayout {
    let spaces = p.spaces;
    if spaces == 0 {
        return SurfaceParkingLayout::empty();
    }

    let g = &p.geometry;
    let x_min = 0.0;
    let available_width = p.lot.width_ft - x_min;

    let z_start = p.behind_building_z + g.clearance_ft;
    let z_end = p.lot.depth_ft;
    let available_depth = z_end - z_start;

    // Saturating cast: negative and NaN widths come out as zero stalls.
    let stalls_per_row = safe_div(available_width, g.stall_width_ft).floor() as u32;
    if stalls_per_row == 0 {
        return SurfaceParkingLayout::rejected(REASON_WIDTH);
    }

    let rows: u32 = if available_depth >= g.two_row_depth_ft() {
        2
    } else if available_depth >= g.one_row_depth_ft() {
        1
    } else {
        return SurfaceParkingLayout::rejected(REASON_DEPTH);
    };

    let capacity = rows.saturating_mul(stalls_per_row).min(MAX_SURFACE_STALLS);
    if spaces > capacity {
        return SurfaceParkingLayout::rejected(format!(
            "Only {capacity} spaces fit in the rear yard layout."
        ));
    }

    let used_per_row = stalls_per_row.min(spaces);
    let block_width = used_per_row as f64 * g.stall_width_ft;
    let x_offset = (available_width - block_width) / 2.0;
    let block_x0 = x_min + x_offset;

    // Anchored to the rear property line and built forward.
    let rear_z1 = z_end;
    let rear_z0 = rear_z1 - g.stall_depth_ft;
    let aisle_z1 = rear_z0;
    let aisle_z0 = aisle_z1 - g.aisle_depth_ft;
    let aisle = Rect::new(block_x0, block_x0 + block_width, aisle_z0, aisle_z1);
    let front_row = (rows == 2).then(|| (aisle_z0 - g.stall_depth_ft, aisle_z0));

    let front_row_too_close = front_row.is_some_and(|(z0, _)| z0 < z_start);
    if rear_z0 < z_start || front_row_too_close || aisle.z0 < z_start {
        return SurfaceParkingLayout::rejected(REASON_CONSTRAINED_BY_BUILDING);
    }

    let mut stalls = Vec::with_capacity(capacity.min(spaces) as usize);
    let mut remaining = spaces;
    let mut push_row = |z0: f64, z1: f64, count: u32| {
        for i in 0..count {
            let sx0 = block_x0 + i as f64 * g.stall_width_ft;
            stalls.push(Rect::new(sx0, sx0 + g.stall_width_ft, z0, z1));
        }
    };

    let rear_count = used_per_row.min(remaining);
    push_row(rear_z0, rear_z1, rear_count);
    remaining -= rear_count;

    if let Some((front_z0, front_z1)) = front_row {
        if remaining > 0 {
            let front_count = used_per_row.min(remaining);
            push_row(front_z0, front_z1, front_count);
            remaining -= front_count;
        }
    }

    SurfaceParkingLayout {
        fits: remaining == 0,
        reason: None,
        stalls,
        aisle: Some(aisle),
    }
}
