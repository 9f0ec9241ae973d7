// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Cubic Bézier segments.

use crate::{ParamCurve, ParamCurveSamples, Point, Vec2};

/// A single cubic Bézier segment.
///
/// Construction precomputes the power-basis coefficients, so each
/// [`eval`](ParamCurve::eval) is three multiply-adds per coordinate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBez {
    /// The start point.
    pub p0: Point,
    /// The first control point.
    pub p1: Point,
    /// The second control point.
    pub p2: Point,
    /// The end point.
    pub p3: Point,
    poly: CubicPoly,
}

/// Power-basis form `((a·t + b)·t + c)·t + d` of a cubic Bézier.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicPoly {
    a: Vec2,
    b: Vec2,
    c: Vec2,
    d: Vec2,
}

impl CubicPoly {
    /// Coefficients of the cubic with the given control points.
    pub fn from_points(p0: Point, p1: Point, p2: Point, p3: Point) -> Self {
        let (p0, p1, p2, p3) = (p0.to_vec2(), p1.to_vec2(), p2.to_vec2(), p3.to_vec2());
        CubicPoly {
            a: p3 - p0 + 3.0 * (p1 - p2),
            b: 3.0 * (p0 + p2) - 6.0 * p1,
            c: 3.0 * (p1 - p0),
            d: p0,
        }
    }

    /// Horner evaluation at `t`.
    #[inline]
    pub fn eval(&self, t: f64) -> Point {
        (((self.a * t + self.b) * t + self.c) * t + self.d).to_point()
    }
}

impl CubicBez {
    /// Create a new cubic Bézier segment.
    #[inline]
    pub fn new<P: Into<Point>>(p0: P, p1: P, p2: P, p3: P) -> CubicBez {
        let (p0, p1, p2, p3) = (p0.into(), p1.into(), p2.into(), p3.into());
        CubicBez {
            p0,
            p1,
            p2,
            p3,
            poly: CubicPoly::from_points(p0, p1, p2, p3),
        }
    }

    /// The precomputed polynomial form.
    #[inline]
    pub fn poly(&self) -> &CubicPoly {
        &self.poly
    }

    /// Is this cubic Bezier curve finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.p0.is_finite() && self.p1.is_finite() && self.p2.is_finite() && self.p3.is_finite()
    }
}

impl ParamCurve for CubicBez {
    #[inline]
    fn eval(&self, t: f64) -> Point {
        self.poly.eval(t)
    }

    #[inline]
    fn start(&self) -> Point {
        self.p0
    }

    #[inline]
    fn end(&self) -> Point {
        self.p3
    }
}

impl ParamCurveSamples for CubicBez {
    const MAX_SAMPLES: usize = 30;

    fn area_proxy(&self) -> f64 {
        let a = self.p0.to_vec2();
        let b = self.p1.to_vec2();
        let c = self.p2.to_vec2();
        let d = self.p3.to_vec2();
        (a.cross(b) + b.cross(c) + c.cross(d) + d.cross(a)).abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bernstein(c: &CubicBez, t: f64) -> Point {
        let mt = 1.0 - t;
        let v = c.p0.to_vec2() * (mt * mt * mt)
            + c.p1.to_vec2() * (3.0 * mt * mt * t)
            + c.p2.to_vec2() * (3.0 * mt * t * t)
            + c.p3.to_vec2() * (t * t * t);
        v.to_point()
    }

    #[test]
    fn horner_matches_bernstein() {
        let c = CubicBez::new((0.0, 0.0), (1.0 / 3.0, 0.0), (2.0 / 3.0, 1.0 / 3.0), (1.0, 1.0));
        for i in 0..=16 {
            let t = f64::from(i) / 16.0;
            assert!((c.eval(t) - bernstein(&c, t)).hypot() < 1e-12, "t = {t}");
        }
    }

    #[test]
    fn samples_hit_endpoints() {
        let c = CubicBez::new((0.3, 0.1), (13.0, 40.0), (-20.0, 3.3), (100.7, 0.9));
        let n = c.sample_count(1.0);
        assert!(n >= 2);
        let pts = c.sample_curve_points(n);
        assert_eq!(pts.len(), n);
        assert_eq!(pts[0], c.p0);
        assert_eq!(pts[n - 1], c.p3);
    }

    #[test]
    fn degenerate_cubic_is_a_line() {
        let c = CubicBez::new((1.0, 1.0), (1.0, 1.0), (1.0, 1.0), (1.0, 1.0));
        assert_eq!(c.sample_count(1.0), 2);
    }

    #[test]
    fn large_cubic_hits_cap() {
        let c = CubicBez::new((0.0, 0.0), (0.0, 800.0), (800.0, 800.0), (800.0, 0.0));
        assert_eq!(c.sample_count(1.0), CubicBez::MAX_SAMPLES);
    }
}
