// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Radii for each corner of a rounded rectangle.

/// Radii for each corner of a rounded rectangle.
///
/// The argument order of [`RoundedRectRadii::new`] is clockwise starting
/// from the top-left corner.
#[derive(Clone, Copy, Default, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundedRectRadii {
    /// The radius of the top-left corner.
    pub top_left: f64,
    /// The radius of the top-right corner.
    pub top_right: f64,
    /// The radius of the bottom-right corner.
    pub bottom_right: f64,
    /// The radius of the bottom-left corner.
    pub bottom_left: f64,
}

impl RoundedRectRadii {
    /// Create radii from per-corner values.
    pub const fn new(top_left: f64, top_right: f64, bottom_right: f64, bottom_left: f64) -> Self {
        RoundedRectRadii {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        }
    }

    /// The same radius on all four corners.
    pub const fn from_single_radius(radius: f64) -> Self {
        Self::new(radius, radius, radius, radius)
    }

    /// Clamp every radius to `[0, max]`; non-finite radii become zero.
    #[must_use]
    pub fn clamp(self, max: f64) -> Self {
        let max = max.max(0.0);
        let c = |r: f64| if r.is_finite() { r.clamp(0.0, max) } else { 0.0 };
        Self::new(
            c(self.top_left),
            c(self.top_right),
            c(self.bottom_right),
            c(self.bottom_left),
        )
    }

    /// Whether every corner is square.
    pub fn is_zero(&self) -> bool {
        self.top_left == 0.0
            && self.top_right == 0.0
            && self.bottom_right == 0.0
            && self.bottom_left == 0.0
    }

    /// The radii in clockwise order starting at the top-left corner.
    pub fn as_array(&self) -> [f64; 4] {
        [
            self.top_left,
            self.top_right,
            self.bottom_right,
            self.bottom_left,
        ]
    }

    /// If all radii are equal, returns the value.
    pub fn as_single_radius(&self) -> Option<f64> {
        let epsilon = 1e-9;

        if (self.top_left - self.top_right).abs() < epsilon
            && (self.top_right - self.bottom_right).abs() < epsilon
            && (self.bottom_right - self.bottom_left).abs() < epsilon
        {
            Some(self.top_left)
        } else {
            None
        }
    }
}

impl From<f64> for RoundedRectRadii {
    fn from(radius: f64) -> Self {
        RoundedRectRadii::from_single_radius(radius)
    }
}

impl From<(f64, f64, f64, f64)> for RoundedRectRadii {
    fn from(radii: (f64, f64, f64, f64)) -> Self {
        RoundedRectRadii::new(radii.0, radii.1, radii.2, radii.3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_caps_and_floors() {
        let r = RoundedRectRadii::new(-2.0, 3.0, 20.0, f64::NAN).clamp(5.0);
        assert_eq!(r, RoundedRectRadii::new(0.0, 3.0, 5.0, 0.0));
        assert!(!r.is_zero());
        assert!(RoundedRectRadii::default().is_zero());
    }

    #[test]
    fn single_radius() {
        assert_eq!(RoundedRectRadii::from(4.0).as_single_radius(), Some(4.0));
        assert_eq!(
            RoundedRectRadii::new(1.0, 2.0, 1.0, 1.0).as_single_radius(),
            None
        );
    }
}
