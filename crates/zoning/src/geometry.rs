//! Axis-aligned plan rectangles in lot-local feet.
//!
//! `x` runs laterally (left property line = 0), `z` runs back from the front
//! property line. Nothing here validates orientation: a rectangle whose far
//! edge sits before its near edge has a negative width or depth, and callers
//! decide what that means (usually "no area").

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x0: f64,
    pub x1: f64,
    pub z0: f64,
    pub z1: f64,
}

impl Rect {
    pub fn new(x0: f64, x1: f64, z0: f64, z1: f64) -> Self {
        Self { x0, x1, z0, z1 }
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn depth(&self) -> f64 {
        self.z1 - self.z0
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.depth()
    }

    /// Plan center as `(x, z)`.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        ((self.x0 + self.x1) / 2.0, (self.z0 + self.z1) / 2.0)
    }

    /// True when `other` lies inside `self`, allowing `tolerance` on each edge.
    pub fn contains_rect(&self, other: &Rect, tolerance: f64) -> bool {
        other.x0 >= self.x0 - tolerance
            && other.x1 <= self.x1 + tolerance
            && other.z0 >= self.z0 - tolerance
            && other.z1 <= self.z1 + tolerance
    }
}

/// Division that yields 0 instead of NaN/inf when the denominator is not
/// positive. Every ratio in the engine goes through here.
#[inline]
pub fn safe_div(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

/// Fixed-point label text with ties rounded away from zero, so `62.5` at 0
/// decimals reads "63" and `1.125` at 2 reads "1.13". Values that only look
/// like ties in decimal (1.005 is stored below the tie) keep their exact
/// rounding.
pub fn to_fixed(value: f64, decimals: usize) -> String {
    let formatted = format!("{value:.decimals$}");
    if !value.is_finite() {
        return formatted;
    }
    let scale = 10f64.powi(decimals as i32);
    let magnitude = value.abs();
    let scaled = magnitude * scale;
    // `{:.N}` breaks exact ties to even; only an exact product can be a tie.
    let exact = magnitude.mul_add(scale, -scaled) == 0.0;
    if exact && scaled.fract() == 0.5 {
        let rounded = scaled.ceil().copysign(value) / scale;
        return format!("{rounded:.decimals$}");
    }
    formatted
}
