// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-edge widths, used for borders.

use core::ops::Mul;

/// Distances from each edge of a rectangle.
///
/// Border builders read these as the stroke width of each edge: `x0` is the
/// left border, `y0` the top, `x1` the right and `y1` the bottom.
///
/// ```
/// use pathgeom::{Insets, Rect};
///
/// let outer = Rect::new(0.0, 0.0, 10.0, 10.0);
/// let inner = outer - Insets::uniform(2.0);
/// assert_eq!(inner, Rect::new(2.0, 2.0, 8.0, 8.0));
/// ```
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Insets {
    /// The left inset.
    pub x0: f64,
    /// The top inset.
    pub y0: f64,
    /// The right inset.
    pub x1: f64,
    /// The bottom inset.
    pub y1: f64,
}

impl Insets {
    /// Zero inset.
    pub const ZERO: Insets = Insets::uniform(0.);

    /// New insets from left, top, right and bottom values.
    #[inline(always)]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Insets {
        Insets { x0, y0, x1, y1 }
    }

    /// New uniform insets.
    #[inline(always)]
    pub const fn uniform(d: f64) -> Insets {
        Insets::new(d, d, d, d)
    }

    /// New insets, `x` on the left and right edges, `y` on the top and bottom.
    #[inline(always)]
    pub const fn uniform_xy(x: f64, y: f64) -> Insets {
        Insets::new(x, y, x, y)
    }

    /// The total horizontal inset.
    #[inline]
    pub fn x_value(self) -> f64 {
        self.x0 + self.x1
    }

    /// The total vertical inset.
    #[inline]
    pub fn y_value(self) -> f64 {
        self.y0 + self.y1
    }

    /// Whether every edge is exactly zero.
    #[inline]
    pub fn is_zero(self) -> bool {
        self.x0 == 0.0 && self.y0 == 0.0 && self.x1 == 0.0 && self.y1 == 0.0
    }

    /// Replace negative and non-finite values with zero.
    #[inline]
    #[must_use]
    pub fn clamp_non_negative(self) -> Insets {
        fn clamp(v: f64) -> f64 {
            if v.is_finite() && v > 0.0 {
                v
            } else {
                0.0
            }
        }
        Insets::new(clamp(self.x0), clamp(self.y0), clamp(self.x1), clamp(self.y1))
    }
}

impl Mul<f64> for Insets {
    type Output = Insets;

    #[inline]
    fn mul(self, rhs: f64) -> Insets {
        Insets::new(self.x0 * rhs, self.y0 * rhs, self.x1 * rhs, self.y1 * rhs)
    }
}

impl From<f64> for Insets {
    fn from(src: f64) -> Insets {
        Insets::uniform(src)
    }
}

impl From<(f64, f64, f64, f64)> for Insets {
    fn from(src: (f64, f64, f64, f64)) -> Insets {
        Insets::new(src.0, src.1, src.2, src.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_non_negative() {
        let b = Insets::new(-1.0, f64::NAN, 2.0, f64::INFINITY).clamp_non_negative();
        assert_eq!(b, Insets::new(0.0, 0.0, 2.0, 0.0));
    }

    #[test]
    fn totals() {
        let b = Insets::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(b.x_value(), 4.0);
        assert_eq!(b.y_value(), 6.0);
        assert!(!b.is_zero());
        assert!(Insets::ZERO.is_zero());
    }
}
