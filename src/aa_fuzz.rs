// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Antialiased stroke triangles.
//!
//! Each segment of the flattened path becomes a quad of two triangles whose
//! vertices carry a fuzz value: −1 on the right edge of the stroke and 1 on
//! the left. A fragment shader fades coverage as `|fuzz|` approaches 1.

use core::f64::consts::PI;

use alloc::vec::Vec;

use arrayvec::ArrayVec;

use crate::stroke::{arc_points, dedupe, directions, Corner};
use crate::{Cap, Path, PathHash, Point, Stroke, Vec2, VertexData, VertexId, VertexLayout};

/// Below this `sin` of the half angle the bisector offset is replaced by the
/// incoming edge normal.
const MIN_SIN_HALF: f64 = 0.05;

/// Fuzz on the left and right edges.
const LEFT: f32 = 1.0;
const RIGHT: f32 = -1.0;

type Quad = ArrayVec<(Point, f32), 6>;

/// Build antialiased stroke triangles for `path`.
///
/// Interior vertices are offset along the bisector of the adjacent edge
/// normals by `half_width / sin(half_angle)`, with no join geometry. Open
/// subpaths get the caps of `style`; round caps are triangle fans with fuzz 0
/// at the center and 1 on the rim. Closed subpaths wrap the last segment
/// back to the first. Only the width and caps of `style` are used.
pub fn aa_fuzz_stroke(path: &Path, style: &Stroke, epsilon: f64) -> VertexData {
    let hw = style.width.abs() * 0.5;
    let mut hash = PathHash::new();
    hash.mix(path.hash_code());
    hash.mix_f64(style.width);
    hash.mix((cap_tag(style.start_cap) << 2) | cap_tag(style.end_cap));
    let mut out = VertexData::new(VertexLayout::AaFuzz).with_id(VertexId::from_hash(hash.value()));
    if !(hw.is_finite() && hw > 0.0) {
        return out;
    }
    for poly in path.polylines(epsilon) {
        let (pts, closed) = dedupe(&poly.pts, poly.closed);
        if pts.len() < 2 {
            continue;
        }
        let dirs = directions(&pts, closed);
        let n = pts.len();
        let mut anchors = pts.clone();
        let mut offsets: Vec<Vec2> = Vec::with_capacity(n);
        for i in 0..n {
            let offset = if !closed && i == 0 {
                anchors[0] = cap_anchor(pts[0], -dirs[0], hw, style.start_cap);
                dirs[0].turn_90() * hw
            } else if !closed && i == n - 1 {
                anchors[i] = cap_anchor(pts[i], dirs[i - 1], hw, style.end_cap);
                dirs[i - 1].turn_90() * hw
            } else {
                let d0 = dirs[(i + n - 1) % n];
                let corner = Corner::new(d0, dirs[i]);
                if corner.sin_half < MIN_SIN_HALF {
                    d0.turn_90() * hw
                } else {
                    corner.bisector * (hw / corner.sin_half)
                }
            };
            offsets.push(offset);
        }

        let segs = if closed { n } else { n - 1 };
        for i in 0..segs {
            let j = (i + 1) % n;
            let quad = segment_quad(anchors[i], offsets[i], anchors[j], offsets[j]);
            for (p, fuzz) in quad {
                out.push_fuzz(p, fuzz);
            }
        }
        if !closed {
            if style.start_cap == Cap::Round {
                round_cap(&mut out, pts[0], -dirs[0].turn_90() * hw, epsilon);
            }
            if style.end_cap == Cap::Round {
                round_cap(&mut out, pts[n - 1], dirs[n - 2].turn_90() * hw, epsilon);
            }
        }
    }
    out
}

impl Path {
    /// Antialiased stroke triangles with butt caps.
    ///
    /// See [`aa_fuzz_stroke`].
    pub fn aa_fuzz_stroke_triangles(&self, width: f64, epsilon: f64) -> VertexData {
        aa_fuzz_stroke(self, &Stroke::new(width), epsilon)
    }
}

fn segment_quad(p0: Point, o0: Vec2, p1: Point, o1: Vec2) -> Quad {
    let (l0, r0) = (p0 + o0, p0 - o0);
    let (l1, r1) = (p1 + o1, p1 - o1);
    let mut quad = Quad::new();
    quad.push((l0, LEFT));
    quad.push((r0, RIGHT));
    quad.push((l1, LEFT));
    quad.push((r0, RIGHT));
    quad.push((r1, RIGHT));
    quad.push((l1, LEFT));
    quad
}

/// A half-disc fan around `center`, sweeping clockwise from `from`.
fn round_cap(out: &mut VertexData, center: Point, from: Vec2, epsilon: f64) {
    let mut rim = Vec::new();
    rim.push(center + from);
    arc_points(&mut rim, center, from, -PI, epsilon);
    rim.push(center - from);
    for pair in rim.windows(2) {
        out.push_fuzz(center, 0.0);
        out.push_fuzz(pair[0], 1.0);
        out.push_fuzz(pair[1], 1.0);
    }
}

fn cap_anchor(p: Point, outward: Vec2, hw: f64, cap: Cap) -> Point {
    match cap {
        Cap::Square => p + outward * hw,
        Cap::Butt | Cap::Round => p,
    }
}

fn cap_tag(cap: Cap) -> u64 {
    match cap {
        Cap::Butt => 0,
        Cap::Square => 1,
        Cap::Round => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;

    fn near(a: Point, b: Point) -> bool {
        a.distance(b) < 1e-9
    }

    fn fuzz_vertices(v: &VertexData) -> Vec<(Point, f32)> {
        v.data()
            .chunks_exact(3)
            .map(|c| (Point::new(f64::from(c[0]), f64::from(c[1])), c[2]))
            .collect()
    }

    #[test]
    fn straight_segment() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        let v = path.aa_fuzz_stroke_triangles(2.0, 1.0);
        assert_eq!(v.layout(), VertexLayout::AaFuzz);
        assert_eq!(v.vertex_count(), 6);
        for (p, fuzz) in fuzz_vertices(&v) {
            assert_eq!(p.y.signum(), f64::from(fuzz), "{p:?}");
            assert_eq!(p.y.abs(), 1.0);
        }
    }

    #[test]
    fn interior_vertex_uses_bisector() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));
        let v = path.aa_fuzz_stroke_triangles(2.0, 1.0);
        assert_eq!(v.vertex_count(), 12);
        let verts = fuzz_vertices(&v);
        assert!(verts
            .iter()
            .any(|(p, f)| *f == LEFT && near(*p, Point::new(9.0, 1.0))));
        assert!(verts
            .iter()
            .any(|(p, f)| *f == RIGHT && near(*p, Point::new(11.0, -1.0))));
    }

    #[test]
    fn closed_ring_wraps() {
        let mut path = Path::make_rect(Rect::new(0.0, 0.0, 10.0, 10.0), false);
        path.close();
        let v = path.aa_fuzz_stroke_triangles(2.0, 1.0);
        assert_eq!(v.vertex_count(), 4 * 6);
        for p in v.positions() {
            let corner_dist = [(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]
                .iter()
                .map(|c| p.distance(Point::from(*c)))
                .fold(f64::MAX, f64::min);
            assert!((corner_dist - 2f64.sqrt()).abs() < 1e-6);
        }
    }

    #[test]
    fn caps() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        let square = aa_fuzz_stroke(&path, &Stroke::new(2.0).with_caps(Cap::Square), 1.0);
        let xs: Vec<f64> = square.positions().map(|p| p.x).collect();
        assert!(xs.contains(&-1.0) && xs.contains(&11.0));

        let round = aa_fuzz_stroke(&path, &Stroke::new(2.0).with_caps(Cap::Round), 1.0);
        assert!(round.triangle_count() > 2);
        let verts = fuzz_vertices(&round);
        let centers = verts.iter().filter(|(_, f)| *f == 0.0).count();
        assert_eq!(centers, round.triangle_count() - 2);
        for (p, f) in &verts[6..] {
            if *f == 1.0 {
                let c = if p.x > 5.0 { Point::new(10.0, 0.0) } else { Point::ORIGIN };
                assert!((p.distance(c) - 1.0).abs() < 1e-6);
            }
        }
        assert_ne!(round.id(), square.id());
    }

    #[test]
    fn degenerate_is_empty() {
        let mut path = Path::new();
        path.move_to((1.0, 1.0));
        path.line_to((1.0, 1.0));
        assert!(path.aa_fuzz_stroke_triangles(2.0, 1.0).is_empty());
        let mut line = Path::new();
        line.move_to((0.0, 0.0));
        line.line_to((1.0, 0.0));
        assert!(line.aa_fuzz_stroke_triangles(0.0, 1.0).is_empty());
        assert!(line.aa_fuzz_stroke_triangles(f64::NAN, 1.0).is_empty());
    }
}
