//! Rear-yard surface parking layout.
//!
//! A deterministic two-row packer, not a general bin-packer. Stalls are laid
//! out as one centered block anchored to the rear property line and built
//! forward toward the building:
//!
//! - rear row against the rear lot line,
//! - a drive aisle directly in front of it,
//! - optionally a second (front) row directly in front of the aisle.
//!
//! Capacity is checked from the available rear-yard depth first; the anchored
//! geometry is then verified separately against the building's rear face plus
//! clearance.

pub mod geometry;
pub mod layout;

#[cfg(test)]
mod tests;

pub use geometry::ParkingGeometry;
pub use layout::{
    layout_surface_parking, SurfaceParkingLayout, SurfaceParkingParams,
    REASON_CONSTRAINED_BY_BUILDING, REASON_DEPTH, REASON_WIDTH,
};
