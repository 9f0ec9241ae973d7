// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadratic Bézier segments.

use crate::{ParamCurve, ParamCurveSamples, Point};

/// A single quadratic Bézier segment.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadBez {
    /// The start point.
    pub p0: Point,
    /// The control point.
    pub p1: Point,
    /// The end point.
    pub p2: Point,
}

impl QuadBez {
    /// Create a new quadratic Bézier segment.
    #[inline]
    pub fn new<V: Into<Point>>(p0: V, p1: V, p2: V) -> QuadBez {
        QuadBez {
            p0: p0.into(),
            p1: p1.into(),
            p2: p2.into(),
        }
    }

    /// Is this quadratic Bezier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite()
    }
}

impl ParamCurve for QuadBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        let mt = 1.0 - t;
        (self.p0.to_vec2() * (mt * mt)
            + (self.p1.to_vec2() * (mt * 2.0) + self.p2.to_vec2() * t) * t)
            .to_point()
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p2
    }
}

impl ParamCurveSamples for QuadBez {
    const MAX_SAMPLES: usize = 22;

    fn area_proxy(&self) -> f64 {
        let a = self.p0.to_vec2();
        let b = self.p1.to_vec2();
        let c = self.p2.to_vec2();
        (a.cross(b) + b.cross(c) + c.cross(a)).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(p0: Point, p1: Point, epsilon: f64) {
        assert!((p1 - p0).hypot() < epsilon, "{p0:?} != {p1:?}");
    }

    #[test]
    fn quadbez_eval() {
        let q = QuadBez::new((0.0, 0.0), (0.0, 0.5), (1.0, 1.0));
        assert_near(q.eval(0.5), Point::new(0.25, 0.5), 1e-12);
    }

    #[test]
    fn samples_hit_endpoints() {
        let q = QuadBez::new((0.1, 0.3), (17.0, -4.2), (33.3, 9.9));
        for n in [0, 1, 2, 3, 7, 22] {
            let pts = q.sample_curve_points(n);
            assert_eq!(pts.len(), n.max(2));
            assert_eq!(pts[0], q.p0);
            assert_eq!(*pts.last().unwrap(), q.p2);
        }
    }

    #[test]
    fn collinear_flattens_to_line() {
        let q = QuadBez::new((0.0, 0.0), (5.0, 5.0), (10.0, 10.0));
        assert_eq!(q.area_proxy(), 0.0);
        assert_eq!(q.sample_count(1.0), 2);
    }

    #[test]
    fn large_curve_hits_cap() {
        let q = QuadBez::new((0.0, 0.0), (500.0, 1000.0), (1000.0, 0.0));
        assert_eq!(q.sample_count(1.0), QuadBez::MAX_SAMPLES);
    }
}
