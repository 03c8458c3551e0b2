//! Stall and aisle dimensions used by the packer.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::{
    DEFAULT_AISLE_DEPTH_FT, DEFAULT_CLEARANCE_FT, DEFAULT_STALL_DEPTH_FT, DEFAULT_STALL_WIDTH_FT,
};

/// Tunable surface-lot dimensions, in feet.
///
/// Registered as a resource by `ZoningPlugin`. Defaults are 9x18 stalls with
/// a 24 ft two-way aisle.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParkingGeometry {
    pub stall_width_ft: f64,
    pub stall_depth_ft: f64,
    pub aisle_depth_ft: f64,
    /// Minimum gap between the building's rear face and the parking block.
    pub clearance_ft: f64,
}

impl Default for ParkingGeometry {
    fn default() -> Self {
        Self {
            stall_width_ft: DEFAULT_STALL_WIDTH_FT,
            stall_depth_ft: DEFAULT_STALL_DEPTH_FT,
            aisle_depth_ft: DEFAULT_AISLE_DEPTH_FT,
            clearance_ft: DEFAULT_CLEARANCE_FT,
        }
    }
}

impl ParkingGeometry {
    /// Depth needed for a single row plus its aisle.
    #[inline]
    pub fn one_row_depth_ft(&self) -> f64 {
        self.stall_depth_ft + self.aisle_depth_ft
    }

    /// Depth needed for two rows sharing one aisle.
    #[inline]
    pub fn two_row_depth_ft(&self) -> f64 {
        self.stall_depth_ft * 2.0 + self.aisle_depth_ft
    }
}
