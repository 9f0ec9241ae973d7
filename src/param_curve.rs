// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits for curves parametrized by a scalar, and the adaptive sample count.

use alloc::vec::Vec;

use crate::{Point, Vec2};

/// Fourth root of the area proxy at which the sample count saturates.
///
/// This is `5000^(1/4)`, so the formula reaches the cap exactly at the
/// threshold.
const AREA_ROOT_AT_CAP: f64 = 8.408964152537145;

/// The area proxy above which curves use the maximum sample count.
const AREA_THRESHOLD: f64 = 5000.0;

/// Maximum number of samples for a quarter-ellipse corner.
pub const MAX_CORNER_SAMPLES: usize = 30;

/// A curve parametrized by a scalar.
pub trait ParamCurve: Sized {
    /// Evaluate the curve at parameter `t`.
    ///
    /// Generally `t` is in the range [0..1].
    fn eval(&self, t: f64) -> Point;

    /// The start point.
    fn start(&self) -> Point {
        self.eval(0.0)
    }

    /// The end point.
    fn end(&self) -> Point {
        self.eval(1.0)
    }
}

/// A curve that can be flattened into an adaptive number of line samples.
pub trait ParamCurveSamples: ParamCurve {
    /// Upper bound returned by [`ParamCurveSamples::sample_count`].
    const MAX_SAMPLES: usize;

    /// Unsigned triangle-area proxy of the control polygon.
    fn area_proxy(&self) -> f64;

    /// Number of samples (endpoints included) needed to flatten this curve.
    ///
    /// The result is always at least 2 and never decreases as the control
    /// polygon grows or as `epsilon` grows.
    fn sample_count(&self, epsilon: f64) -> usize {
        samples_for_area(self.area_proxy(), epsilon, Self::MAX_SAMPLES)
    }

    /// `n` points evenly spaced in parameter space.
    ///
    /// The first and last points are exactly the curve's endpoints. Values of
    /// `n` below 2 are treated as 2.
    fn sample_curve_points(&self, n: usize) -> Vec<Point> {
        let n = n.max(2);
        let last = n - 1;
        let step = 1.0 / last as f64;
        let mut out = Vec::with_capacity(n);
        out.push(self.start());
        for i in 1..last {
            out.push(self.eval(i as f64 * step));
        }
        out.push(self.end());
        out
    }
}

/// The adaptive sample count for a given area proxy.
///
/// `epsilon` is a quality multiplier applied to the area before the
/// threshold test; `max` is the cap for the curve kind.
///
/// ```
/// use pathgeom::samples_for_area;
///
/// assert_eq!(samples_for_area(0.0, 1.0, 22), 2);
/// assert_eq!(samples_for_area(1.0e6, 1.0, 22), 22);
/// ```
pub fn samples_for_area(area: f64, epsilon: f64, max: usize) -> usize {
    let s2 = (area * epsilon).abs();
    if s2.is_nan() {
        return 2;
    }
    if s2 < AREA_THRESHOLD {
        let k = max as f64 / AREA_ROOT_AT_CAP;
        let n = (s2.sqrt().sqrt() * k).floor() as usize;
        n.clamp(2, max.max(2))
    } else {
        max.max(2)
    }
}

/// The adaptive sample count for a quarter-ellipse with the given radii.
pub fn samples_for_corner(radius: Vec2, epsilon: f64) -> usize {
    samples_for_area(radius.x * radius.y * 0.5, epsilon, MAX_CORNER_SAMPLES)
}
