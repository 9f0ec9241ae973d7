// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Curve flattening: replacing Bézier verbs with line runs.

use alloc::vec::Vec;

use crate::{CubicBez, ParamCurveSamples, Path, PathEl, Point, QuadBez};

/// One flattened subpath.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Polyline {
    pub(crate) pts: Vec<Point>,
    pub(crate) closed: bool,
}

impl Path {
    /// A copy of this path with every curve replaced by line segments.
    ///
    /// Each curve becomes `n - 1` lines, where `n` is its adaptive sample
    /// count at `epsilon`; the last line ends exactly on the curve's end
    /// point. An already-normalized path is returned as a plain copy, so
    /// normalizing twice gives the same path as normalizing once.
    ///
    /// ```
    /// use pathgeom::{Path, Verb};
    ///
    /// let mut path = Path::new();
    /// path.move_to((0.0, 0.0));
    /// path.quad_to((50.0, 100.0), (100.0, 0.0));
    /// let flat = path.normalized(1.0);
    /// assert!(flat.is_normalized());
    /// assert!(flat.verbs().iter().all(|v| *v != Verb::Quad));
    /// assert_eq!(flat.last_point(), path.last_point());
    /// ```
    pub fn normalized(&self, epsilon: f64) -> Path {
        if self.is_normalized() {
            return self.clone();
        }
        let mut out = Path::with_capacity(self.points().len() * 8, self.verbs().len() * 8);
        let mut current: Option<Point> = None;
        for el in self.elements() {
            match el {
                PathEl::MoveTo(p) => {
                    out.move_to(p);
                    current = Some(p);
                }
                PathEl::LineTo(p) => {
                    out.line_to(p);
                    current = Some(p);
                }
                PathEl::QuadTo(p1, p2) => {
                    let q = QuadBez::new(current.unwrap_or(Point::ORIGIN), p1, p2);
                    for p in q.sample_curve_points(q.sample_count(epsilon)).into_iter().skip(1) {
                        out.line_to(p);
                    }
                    current = Some(p2);
                }
                PathEl::CurveTo(p1, p2, p3) => {
                    let c = CubicBez::new(current.unwrap_or(Point::ORIGIN), p1, p2, p3);
                    for p in c.sample_curve_points(c.sample_count(epsilon)).into_iter().skip(1) {
                        out.line_to(p);
                    }
                    current = Some(p3);
                }
                PathEl::ClosePath => {
                    out.close();
                    current = None;
                }
            }
        }
        out
    }

    /// The flattened outline as a list of edges.
    ///
    /// Closing edges are included for closed subpaths whose last point is not
    /// already the start point. Open subpaths are not implicitly closed.
    pub fn edge_lines(&self, epsilon: f64) -> Vec<(Point, Point)> {
        let flat = self.normalized(epsilon);
        let mut edges = Vec::with_capacity(flat.verbs().len());
        let mut start = Point::ORIGIN;
        let mut from = Point::ORIGIN;
        for el in flat.elements() {
            match el {
                PathEl::MoveTo(p) => {
                    start = p;
                    from = p;
                }
                PathEl::LineTo(p) => {
                    edges.push((from, p));
                    from = p;
                }
                PathEl::ClosePath => {
                    if from != start {
                        edges.push((from, start));
                    }
                    start = Point::ORIGIN;
                    from = Point::ORIGIN;
                }
                PathEl::QuadTo(..) | PathEl::CurveTo(..) => unreachable!("normalized path"),
            }
        }
        edges
    }

    /// Split the flattened path into subpaths.
    pub(crate) fn polylines(&self, epsilon: f64) -> Vec<Polyline> {
        let flat = self.normalized(epsilon);
        let mut out = Vec::new();
        let mut cur = Polyline::default();
        for el in flat.elements() {
            match el {
                PathEl::MoveTo(p) => {
                    if !cur.pts.is_empty() {
                        out.push(core::mem::take(&mut cur));
                    }
                    cur.pts.push(p);
                }
                PathEl::LineTo(p) => cur.pts.push(p),
                PathEl::ClosePath => {
                    if !cur.pts.is_empty() {
                        cur.closed = true;
                        out.push(core::mem::take(&mut cur));
                    }
                }
                PathEl::QuadTo(..) | PathEl::CurveTo(..) => unreachable!("normalized path"),
            }
        }
        if !cur.pts.is_empty() {
            out.push(cur);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::{Rect, Verb};

    fn random_path(rng: &mut StdRng) -> Path {
        let mut path = Path::new();
        let ops: Vec<u32> = (0..12).map(|_| rng.random_range(0..5)).collect();
        let mut pt = || Point::new(rng.random_range(-200.0..200.0), rng.random_range(-200.0..200.0));
        for op in ops {
            match op {
                0 => path.move_to(pt()),
                1 => path.line_to(pt()),
                2 => path.quad_to(pt(), pt()),
                3 => path.cubic_to(pt(), pt(), pt()),
                _ => path.close(),
            }
        }
        path
    }

    #[test]
    fn normalize_is_idempotent() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let path = random_path(&mut rng);
            let eps = rng.random_range(0.1..4.0);
            let once = path.normalized(eps);
            assert!(once.is_normalized());
            assert_eq!(once.normalized(eps), once);
        }
    }

    #[test]
    fn curve_becomes_count_minus_one_lines() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.cubic_to((0.0, 100.0), (100.0, 100.0), (100.0, 0.0));
        let n = CubicBez::new((0.0, 0.0), (0.0, 100.0), (100.0, 100.0), (100.0, 0.0))
            .sample_count(1.0);
        let flat = path.normalized(1.0);
        assert_eq!(flat.verbs().len(), n);
        assert_eq!(flat.verbs()[0], Verb::Move);
        assert_eq!(flat.last_point(), Some(Point::new(100.0, 0.0)));
    }

    #[test]
    fn degenerate_curve_is_one_line() {
        let mut path = Path::new();
        path.move_to((1.0, 1.0));
        path.quad_to((2.0, 2.0), (3.0, 3.0));
        let flat = path.normalized(1.0);
        assert_eq!(flat.verbs(), &[Verb::Move, Verb::Line]);
    }

    #[test]
    fn curve_without_anchor_starts_at_origin() {
        let mut path = Path::new();
        path.quad_to((5.0, 5.0), (10.0, 0.0));
        let flat = path.normalized(1.0);
        assert_eq!(flat.points()[0], Point::ORIGIN);
        assert_eq!(flat.last_point(), Some(Point::new(10.0, 0.0)));
    }

    #[test]
    fn edge_lines_close_subpaths() {
        let mut path = Path::make_rect(Rect::new(0.0, 0.0, 4.0, 2.0), false);
        path.close();
        path.move_to((10.0, 10.0));
        path.line_to((12.0, 10.0));
        path.line_to((12.0, 12.0));
        path.close();
        let edges = path.edge_lines(1.0);
        // The rectangle already ends on its start point; the triangle does not.
        assert_eq!(edges.len(), 4 + 3);
        assert_eq!(edges[6], (Point::new(12.0, 12.0), Point::new(10.0, 10.0)));
    }

    #[test]
    fn polylines_split_on_move_and_close() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((1.0, 0.0));
        path.move_to((5.0, 5.0));
        path.line_to((6.0, 5.0));
        path.line_to((6.0, 6.0));
        path.close();
        let polys = path.polylines(1.0);
        assert_eq!(polys.len(), 2);
        assert!(!polys[0].closed);
        assert!(polys[1].closed);
        assert_eq!(polys[1].pts.len(), 3);
    }
}
