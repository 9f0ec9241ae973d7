// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A 2D size.

use core::fmt;
use core::ops::{Mul, Sub};

use crate::Vec2;

/// A 2D size.
#[derive(Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    /// The width.
    pub width: f64,
    /// The height.
    pub height: f64,
}

impl Size {
    /// A size with zero width or height.
    pub const ZERO: Size = Size::new(0., 0.);

    /// Create a new `Size` with the provided `width` and `height`.
    #[inline(always)]
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// The smaller of the width and height.
    #[inline]
    pub fn min_side(self) -> f64 {
        self.width.min(self.height)
    }

    /// Whether this size has zero area.
    #[inline]
    pub fn is_zero_area(self) -> bool {
        self.width * self.height == 0.0
    }

    /// Convert this size into a [`Vec2`], with `width` mapped to `x` and `height`
    /// mapped to `y`.
    #[inline(always)]
    pub const fn to_vec2(self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

impl From<(f64, f64)> for Size {
    #[inline(always)]
    fn from(v: (f64, f64)) -> Size {
        Size::new(v.0, v.1)
    }
}

impl From<Size> for (f64, f64) {
    #[inline(always)]
    fn from(v: Size) -> (f64, f64) {
        (v.width, v.height)
    }
}

impl Mul<f64> for Size {
    type Output = Size;

    #[inline]
    fn mul(self, other: f64) -> Size {
        Size::new(self.width * other, self.height * other)
    }
}

impl Sub<Size> for Size {
    type Output = Size;

    #[inline]
    fn sub(self, other: Size) -> Size {
        Size::new(self.width - other.width, self.height - other.height)
    }
}

impl fmt::Debug for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}W×{:?}H", self.width, self.height)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "(")?;
        fmt::Display::fmt(&self.width, formatter)?;
        write!(formatter, "×")?;
        fmt::Display::fmt(&self.height, formatter)?;
        write!(formatter, ")")
    }
}

#[cfg(feature = "mint")]
impl From<Size> for mint::Vector2<f64> {
    #[inline(always)]
    fn from(s: Size) -> mint::Vector2<f64> {
        mint::Vector2 {
            x: s.width,
            y: s.height,
        }
    }
}

#[cfg(feature = "mint")]
impl From<mint::Vector2<f64>> for Size {
    #[inline(always)]
    fn from(v: mint::Vector2<f64>) -> Size {
        Size {
            width: v.x,
            height: v.y,
        }
    }
}
