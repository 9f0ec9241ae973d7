// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Direct mesh builders for rectangles, rounded rectangles and their borders.
//!
//! These skip general tessellation: the triangles are laid out from the
//! shape's corners.

use core::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use alloc::vec::Vec;

use crate::{
    samples_for_corner, Insets, Path, Pathv, Point, Rect, RoundedRectRadii, Vec2, VertexData,
    VertexId, VertexLayout, DEFAULT_EPSILON,
};

/// A filled rectangle or rounded rectangle with its triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RectPath {
    /// The source rectangle.
    pub rect: Rect,
    /// Corner radii after clamping.
    pub radius: RoundedRectRadii,
    /// The outline and its fill triangles.
    pub pathv: Pathv,
}

impl RectPath {
    /// A rectangle as two triangles.
    ///
    /// The companion path is a closed move and three lines, clockwise on
    /// screen from the origin corner.
    ///
    /// ```
    /// use pathgeom::{Rect, RectPath};
    ///
    /// let rect = RectPath::make_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
    /// let vertex = rect.pathv.cached_vertex().unwrap();
    /// assert_eq!(vertex.triangle_count(), 2);
    /// ```
    pub fn make_rect(rect: Rect) -> RectPath {
        let r = rect.abs();
        let mut path = Path::new();
        let mut vertex = VertexData::with_capacity(VertexLayout::Fill, 6);
        if !r.is_zero_area() {
            let corners = [
                Point::new(r.x0, r.y0),
                Point::new(r.x1, r.y0),
                Point::new(r.x1, r.y1),
                Point::new(r.x0, r.y1),
            ];
            path.move_to(corners[0]);
            for &p in &corners[1..] {
                path.line_to(p);
            }
            path.close();
            for ix in [0, 1, 2, 2, 3, 0] {
                vertex.push_fill(corners[ix]);
            }
        }
        let vertex = vertex.with_id(VertexId::from_hash(path.hash_code()));
        RectPath {
            rect,
            radius: RoundedRectRadii::default(),
            pathv: Pathv::from_parts(path, vertex),
        }
    }

    /// A rounded rectangle as a triangle fan around its center.
    ///
    /// Radii are clamped to half the shorter side. Each rounded corner is
    /// sampled with [`samples_for_corner`] at [`DEFAULT_EPSILON`]; square
    /// corners are a single vertex. All-zero radii give exactly
    /// [`RectPath::make_rect`].
    pub fn make_rrect(rect: Rect, radii: RoundedRectRadii) -> RectPath {
        let r = rect.abs();
        let radius = radii.clamp(r.size().min_side() * 0.5);
        if radius.is_zero() || r.is_zero_area() {
            return RectPath::make_rect(rect);
        }
        let ring = rrect_ring(r, radius, DEFAULT_EPSILON);
        let mut path = Path::with_capacity(ring.len(), ring.len() + 1);
        path.move_to(ring[0]);
        for &p in &ring[1..] {
            path.line_to(p);
        }
        path.close();

        let center = r.center();
        let mut vertex = VertexData::with_capacity(VertexLayout::Fill, ring.len() * 3);
        for (i, &p) in ring.iter().enumerate() {
            let q = ring[(i + 1) % ring.len()];
            if p == q {
                continue;
            }
            vertex.push_fill(center);
            vertex.push_fill(p);
            vertex.push_fill(q);
        }
        let vertex = vertex.with_id(VertexId::from_hash(path.hash_code()));
        RectPath {
            rect,
            radius,
            pathv: Pathv::from_parts(path, vertex),
        }
    }
}

/// The clockwise ring of a rounded rectangle, starting at the top of the
/// left edge.
fn rrect_ring(r: Rect, radius: RoundedRectRadii, epsilon: f64) -> Vec<Point> {
    // Corner, unit step back along the incoming edge, unit step along the
    // outgoing edge.
    let corners = [
        (Point::new(r.x0, r.y0), Vec2::new(0., 1.), Vec2::new(1., 0.)),
        (Point::new(r.x1, r.y0), Vec2::new(-1., 0.), Vec2::new(0., 1.)),
        (Point::new(r.x1, r.y1), Vec2::new(0., -1.), Vec2::new(-1., 0.)),
        (Point::new(r.x0, r.y1), Vec2::new(1., 0.), Vec2::new(0., -1.)),
    ];
    let mut ring = Vec::new();
    for ((corner, u, v), rad) in corners.into_iter().zip(radius.as_array()) {
        if rad <= 0.0 {
            ring.push(corner);
            continue;
        }
        let n = samples_for_corner(Vec2::splat(rad), epsilon);
        let center = corner + (u + v) * rad;
        ring.push(corner + u * rad);
        for i in 1..n - 1 {
            let th = FRAC_PI_2 * i as f64 / (n - 1) as f64;
            let (s, c) = th.sin_cos();
            ring.push(center - v * (rad * c) - u * (rad * s));
        }
        ring.push(corner + v * rad);
    }
    ring
}

/// Which edge of a border a piece belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Edge {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

const EDGES: [Edge; 4] = [Edge::Top, Edge::Right, Edge::Bottom, Edge::Left];

impl Edge {
    /// Offsets of `p` along and across this edge, measured from the edge's
    /// starting outer corner, and the edge index.
    fn tag(self, outer: Rect, p: Point) -> [f32; 3] {
        let (along, across) = match self {
            Edge::Top => (p.x - outer.x0, p.y - outer.y0),
            Edge::Right => (p.y - outer.y0, outer.x1 - p.x),
            Edge::Bottom => (outer.x1 - p.x, outer.y1 - p.y),
            Edge::Left => (outer.y1 - p.y, p.x - outer.x0),
        };
        [along as f32, across as f32, self as u8 as f32]
    }
}

/// A border frame split into one piece per edge.
///
/// Each piece carries [`VertexLayout::Outline`] triangles. An edge with a
/// zero border holds only a hairline path along the outer edge and no
/// vertices.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RectOutlinePath {
    /// The outer rectangle.
    pub rect: Rect,
    /// Border widths after clamping and scaling.
    pub border: Insets,
    /// Outer corner radii after clamping.
    pub radius: RoundedRectRadii,
    /// The top edge.
    pub top: Pathv,
    /// The right edge.
    pub right: Pathv,
    /// The bottom edge.
    pub bottom: Pathv,
    /// The left edge.
    pub left: Pathv,
}

impl RectOutlinePath {
    /// The edge pieces in top, right, bottom, left order.
    pub fn edges(&self) -> [&Pathv; 4] {
        [&self.top, &self.right, &self.bottom, &self.left]
    }

    fn from_edges(rect: Rect, border: Insets, radius: RoundedRectRadii, edges: [Pathv; 4]) -> Self {
        let [top, right, bottom, left] = edges;
        RectOutlinePath {
            rect,
            border,
            radius,
            top,
            right,
            bottom,
            left,
        }
    }

    /// A square-cornered border of widths `border` inside `rect`.
    ///
    /// Each edge is a trapezoid from its two outer corners to its two inner
    /// corners.
    ///
    /// ```
    /// use pathgeom::{Insets, Rect, RectOutlinePath};
    ///
    /// let frame = RectOutlinePath::make_rect_outline(
    ///     Rect::new(0.0, 0.0, 100.0, 50.0),
    ///     Insets::new(0.0, 4.0, 4.0, 4.0),
    /// );
    /// assert_eq!(frame.top.cached_vertex().unwrap().vertex_count(), 6);
    /// assert!(frame.left.cached_vertex().unwrap().is_empty());
    /// ```
    pub fn make_rect_outline(rect: Rect, border: Insets) -> RectOutlinePath {
        let outer = rect.abs();
        let border = fit_border(outer, border);
        let inner = outer - border;
        let o = corners(outer);
        let i = corners(inner);
        let widths = [border.y0, border.x1, border.y1, border.x0];

        let edges = EDGES.map(|edge| {
            let j = edge as usize;
            let k = (j + 1) % 4;
            let mut path = Path::new();
            let mut vertex = VertexData::new(VertexLayout::Outline);
            if widths[j] > 0.0 {
                path.move_to(o[j]);
                path.line_to(o[k]);
                path.line_to(i[k]);
                path.line_to(i[j]);
                path.close();
                for p in [o[j], o[k], i[j], i[k], i[j], o[k]] {
                    vertex.push_outline(p, edge.tag(outer, p));
                }
            } else {
                path.move_to(project(edge, outer, i[j]));
                path.line_to(project(edge, outer, i[k]));
            }
            let vertex = vertex.with_id(VertexId::from_hash(path.hash_code()));
            Pathv::from_parts(path, vertex)
        });
        Self::from_edges(rect, border, RoundedRectRadii::default(), edges)
    }

    /// A rounded border of widths `border` inside `rect`.
    ///
    /// Radii are clamped to half the shorter side; inner radii are the outer
    /// radius minus the adjacent border, floored at zero. Each corner's
    /// sweep is split between its two edges in proportion to their border
    /// widths. All-zero radii give [`RectOutlinePath::make_rect_outline`].
    pub fn make_rrect_outline(
        rect: Rect,
        border: Insets,
        radii: RoundedRectRadii,
    ) -> RectOutlinePath {
        let outer = rect.abs();
        let radius = radii.clamp(outer.size().min_side() * 0.5);
        if radius.is_zero() {
            return RectOutlinePath::make_rect_outline(rect, border);
        }
        let border = fit_border(outer, border);
        let inner = outer - border;
        let o = corners(outer);
        let i = corners(inner);
        // Left, top, right, bottom, left, top: edge `j` reads `widths[j..j + 3]`.
        let widths = [border.x0, border.y0, border.x1, border.y1, border.x0, border.y0];
        let outer_r = radius.as_array().map(Vec2::splat);
        let inner_r = [
            (outer_r[0], border.x0, border.y0),
            (outer_r[1], border.x1, border.y0),
            (outer_r[2], border.x1, border.y1),
            (outer_r[3], border.x0, border.y1),
        ]
        .map(|(r, h, v)| Vec2::new((r.x - h).max(0.0), (r.y - v).max(0.0)));
        let centers = [
            Point::new(outer.x0 + outer_r[0].x, outer.y0 + outer_r[0].y),
            Point::new(outer.x1 - outer_r[1].x, outer.y0 + outer_r[1].y),
            Point::new(outer.x1 - outer_r[2].x, outer.y1 - outer_r[2].y),
            Point::new(outer.x0 + outer_r[3].x, outer.y1 - outer_r[3].y),
        ];

        let edges = EDGES.map(|edge| {
            let j = edge as usize;
            let k = (j + 1) % 4;
            let start = FRAC_PI_2 - FRAC_PI_2 * j as f64;
            let (before, width, after) = (widths[j], widths[j + 1], widths[j + 2]);
            let sweep0 = corner_share(width, before);
            let sweep1 = corner_share(width, after);

            let mut path = Path::new();
            if is_round(outer_r[j]) {
                edge_arc(&mut path, centers[j], outer_r[j], start + sweep0, -sweep0);
            } else {
                path.move_to(o[j]);
            }
            if is_round(outer_r[k]) {
                edge_arc(&mut path, centers[k], outer_r[k], start, -sweep1);
            } else {
                path.line_to(o[k]);
            }
            if width <= 0.0 {
                let vertex = VertexData::new(VertexLayout::Outline)
                    .with_id(VertexId::from_hash(path.hash_code()));
                return Pathv::from_parts(path, vertex);
            }
            if is_round(inner_r[k]) {
                edge_arc(&mut path, centers[k], inner_r[k], start - sweep1, sweep1);
            } else {
                path.line_to(i[k]);
            }
            if is_round(inner_r[j]) {
                edge_arc(&mut path, centers[j], inner_r[j], start, sweep0);
            } else {
                path.line_to(i[j]);
            }
            path.close();

            let path = path.normalized(DEFAULT_EPSILON);
            let fill = path.triangles(DEFAULT_EPSILON);
            let mut vertex = VertexData::with_capacity(VertexLayout::Outline, fill.vertex_count())
                .with_id(fill.id());
            for p in fill.positions() {
                vertex.push_outline(p, edge.tag(outer, p));
            }
            Pathv::from_parts(path, vertex)
        });
        Self::from_edges(rect, border, radius, edges)
    }
}

/// Clamp borders to non-negative values and scale opposite pairs down so
/// they fit inside `rect`.
fn fit_border(rect: Rect, border: Insets) -> Insets {
    let b = border.clamp_non_negative();
    let fit = |total: f64, size: f64| {
        if total > size {
            size / total
        } else {
            1.0
        }
    };
    let sx = fit(b.x_value(), rect.width());
    let sy = fit(b.y_value(), rect.height());
    Insets::new(b.x0 * sx, b.y0 * sy, b.x1 * sx, b.y1 * sy)
}

/// Corners clockwise from the top-left.
fn corners(r: Rect) -> [Point; 4] {
    [
        Point::new(r.x0, r.y0),
        Point::new(r.x1, r.y0),
        Point::new(r.x1, r.y1),
        Point::new(r.x0, r.y1),
    ]
}

/// Move `p` onto the outer line of `edge`.
fn project(edge: Edge, outer: Rect, p: Point) -> Point {
    match edge {
        Edge::Top => Point::new(p.x, outer.y0),
        Edge::Right => Point::new(outer.x1, p.y),
        Edge::Bottom => Point::new(p.x, outer.y1),
        Edge::Left => Point::new(outer.x0, p.y),
    }
}

/// The part of a corner's quarter turn that belongs to an edge of border
/// `width` meeting one of border `other`.
fn corner_share(width: f64, other: f64) -> f64 {
    let total = width + other;
    if total > 0.0 {
        width / total * FRAC_PI_2
    } else {
        FRAC_PI_4
    }
}

fn is_round(r: Vec2) -> bool {
    r.x > 0.0 && r.y > 0.0
}

/// An arc, or just its start point when the sweep is empty.
fn edge_arc(path: &mut Path, center: Point, radius: Vec2, start: f64, sweep: f64) {
    if sweep == 0.0 {
        let (s, c) = start.sin_cos();
        path.add_to(Point::new(center.x + radius.x * c, center.y - radius.y * s));
    } else {
        path.arc(center, radius, start, sweep, false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Verb;

    fn area(v: &VertexData) -> f64 {
        let pts: Vec<Point> = v.positions().collect();
        pts.chunks_exact(3)
            .map(|t| 0.5 * (t[1] - t[0]).cross(t[2] - t[0]).abs())
            .sum()
    }

    fn bbox(v: &VertexData) -> Rect {
        let mut pts = v.positions();
        let first = pts.next().unwrap();
        pts.fold(Rect::from_points(first, first), |r, p| r.union_pt(p))
    }

    #[test]
    fn rect_is_two_triangles() {
        let rect = RectPath::make_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        let v = rect.pathv.cached_vertex().unwrap();
        assert_eq!(v.vertex_count(), 6);
        assert_eq!(v.triangle_count(), 2);
        assert_eq!(bbox(v), Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(
            rect.pathv.path().verbs(),
            &[Verb::Move, Verb::Line, Verb::Line, Verb::Line, Verb::Close]
        );
        assert!((area(v) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn zero_radii_match_rect() {
        let r = Rect::new(1.0, 2.0, 11.0, 7.0);
        assert_eq!(
            RectPath::make_rrect(r, RoundedRectRadii::default()),
            RectPath::make_rect(r)
        );
    }

    #[test]
    fn rrect_area_and_bounds() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        let rrect = RectPath::make_rrect(r, RoundedRectRadii::from_single_radius(10.0));
        let v = rrect.pathv.cached_vertex().unwrap();
        assert_eq!(bbox(v), r);
        let exact = 5000.0 - (4.0 - core::f64::consts::PI) * 100.0;
        assert!(area(v) < exact + 1e-6);
        assert!(area(v) > exact - 5.0);
        assert_eq!(rrect.pathv.path().verbs().last(), Some(&Verb::Close));
    }

    #[test]
    fn rrect_clamps_and_mixes_corners() {
        let r = Rect::new(0.0, 0.0, 20.0, 10.0);
        let rrect = RectPath::make_rrect(r, RoundedRectRadii::new(50.0, 0.0, 0.0, 0.0));
        assert_eq!(rrect.radius.top_left, 5.0);
        let pts = rrect.pathv.path().points();
        assert!(pts.contains(&Point::new(20.0, 0.0)));
        assert!(pts.contains(&Point::new(0.0, 5.0)));
        assert!(pts.contains(&Point::new(5.0, 0.0)));
        assert!(!pts.contains(&Point::new(0.0, 0.0)));
    }

    #[test]
    fn rect_outline_frame() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        let frame = RectOutlinePath::make_rect_outline(outer, Insets::uniform(5.0));
        let total: f64 = frame
            .edges()
            .iter()
            .map(|e| area(e.cached_vertex().unwrap()))
            .sum();
        assert!((total - (5000.0 - 90.0 * 40.0)).abs() < 1e-6);

        let top = frame.top.cached_vertex().unwrap();
        assert_eq!(top.layout(), VertexLayout::Outline);
        assert_eq!(top.vertex(0), Some(&[0.0f32, 0.0, 0.0, 0.0, 0.0][..]));
        assert_eq!(top.vertex(1), Some(&[100.0f32, 0.0, 100.0, 0.0, 0.0][..]));
        assert_eq!(top.vertex(2), Some(&[5.0f32, 5.0, 5.0, 5.0, 0.0][..]));
        let right = frame.right.cached_vertex().unwrap();
        assert_eq!(right.vertex(0), Some(&[100.0f32, 0.0, 0.0, 0.0, 1.0][..]));
        let left = frame.left.cached_vertex().unwrap();
        assert_eq!(left.vertex(0), Some(&[0.0f32, 50.0, 0.0, 0.0, 3.0][..]));
    }

    #[test]
    fn zero_border_is_hairline() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        let frame = RectOutlinePath::make_rect_outline(outer, Insets::new(4.0, 0.0, 4.0, 4.0));
        assert!(frame.top.cached_vertex().unwrap().is_empty());
        assert_eq!(
            frame.top.path().points(),
            &[Point::new(4.0, 0.0), Point::new(96.0, 0.0)]
        );
        assert!(!frame.bottom.cached_vertex().unwrap().is_empty());
    }

    #[test]
    fn borders_are_clamped_and_scaled() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        let frame = RectOutlinePath::make_rect_outline(outer, Insets::new(80.0, -3.0, 80.0, f64::NAN));
        assert_eq!(frame.border, Insets::new(50.0, 0.0, 50.0, 0.0));
    }

    #[test]
    fn rrect_outline_area() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        let frame = RectOutlinePath::make_rrect_outline(
            outer,
            Insets::uniform(5.0),
            RoundedRectRadii::from_single_radius(10.0),
        );
        let total: f64 = frame
            .edges()
            .iter()
            .map(|e| area(e.cached_vertex().unwrap()))
            .sum();
        let pi = core::f64::consts::PI;
        let outer_area = 5000.0 - (4.0 - pi) * 100.0;
        let inner_area = 90.0 * 40.0 - (4.0 - pi) * 25.0;
        assert!((total - (outer_area - inner_area)).abs() < 3.0, "{total}");
        for (ix, edge) in frame.edges().iter().enumerate() {
            let v = edge.cached_vertex().unwrap();
            assert_eq!(v.layout(), VertexLayout::Outline);
            assert!(v.data().chunks_exact(5).all(|c| c[4] == ix as f32));
            assert!(edge.path().is_normalized());
        }
    }

    #[test]
    fn rrect_outline_zero_radii_is_rect_outline() {
        let outer = Rect::new(0.0, 0.0, 30.0, 20.0);
        let border = Insets::uniform(2.0);
        assert_eq!(
            RectOutlinePath::make_rrect_outline(outer, border, RoundedRectRadii::default()),
            RectOutlinePath::make_rect_outline(outer, border)
        );
    }
}
