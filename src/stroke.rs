// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke expansion into a closed outline path.

use core::borrow::Borrow;
use core::f64::consts::{FRAC_PI_2, PI};

use alloc::vec::Vec;

use smallvec::SmallVec;

use crate::{samples_for_corner, Path, Point, Vec2, DEFAULT_EPSILON};

/// Miter limit used when [`Stroke::miter_limit`] is zero.
pub const DEFAULT_MITER_LIMIT: f64 = 1024.0;

/// Vertices whose normals turn by less than this (radians) are treated as
/// straight and get a single offset point on each side.
pub(crate) const JOIN_ANGLE_EPSILON: f64 = 1e-3;

/// Squared distance under which consecutive points are merged.
const DEDUPE_DISTANCE_SQ: f64 = 1e-12;

/// Defines the connection between two segments of a stroke.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Join {
    /// A straight line connecting the segments.
    Bevel,
    /// The segments are extended to their natural intersection point.
    #[default]
    Miter,
    /// An arc between the segments.
    Round,
}

/// Defines the shape to be drawn at the ends of a stroke.
#[derive(Copy, Clone, Default, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cap {
    /// Flat cap.
    #[default]
    Butt,
    /// Square cap with dimensions equal to half the stroke width.
    Square,
    /// Rounded cap with radius equal to half the stroke width.
    Round,
}

/// Collection of values representing lengths in a dash pattern.
pub type Dashes = SmallVec<[f64; 4]>;

/// Describes the visual style of a stroke.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stroke {
    /// Width of the stroke.
    pub width: f64,
    /// Style for connecting segments of the stroke.
    pub join: Join,
    /// Limit for miter joins, as a ratio of miter length to stroke width.
    ///
    /// Zero selects [`DEFAULT_MITER_LIMIT`].
    pub miter_limit: f64,
    /// Style for capping the beginning of an open subpath.
    pub start_cap: Cap,
    /// Style for capping the end of an open subpath.
    pub end_cap: Cap,
    /// Dash stage lengths: positive values draw, negative values skip.
    pub dash_pattern: Dashes,
    /// Offset of the first dash.
    pub dash_offset: f64,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 1.0,
            join: Join::Miter,
            miter_limit: 0.0,
            start_cap: Cap::Butt,
            end_cap: Cap::Butt,
            dash_pattern: Dashes::new(),
            dash_offset: 0.0,
        }
    }
}

impl Stroke {
    /// Creates a new stroke with the specified width.
    pub fn new(width: f64) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    /// Builder method for setting the join style.
    #[must_use]
    pub fn with_join(mut self, join: Join) -> Self {
        self.join = join;
        self
    }

    /// Builder method for setting the limit for miter joins.
    #[must_use]
    pub fn with_miter_limit(mut self, limit: f64) -> Self {
        self.miter_limit = limit;
        self
    }

    /// Builder method for setting the cap style for the start of the stroke.
    #[must_use]
    pub fn with_start_cap(mut self, cap: Cap) -> Self {
        self.start_cap = cap;
        self
    }

    /// Builder method for setting the cap style for the end of the stroke.
    #[must_use]
    pub fn with_end_cap(mut self, cap: Cap) -> Self {
        self.end_cap = cap;
        self
    }

    /// Builder method for setting the cap style.
    #[must_use]
    pub fn with_caps(mut self, cap: Cap) -> Self {
        self.start_cap = cap;
        self.end_cap = cap;
        self
    }

    /// Builder method for setting the dashing parameters.
    #[must_use]
    pub fn with_dashes<P>(mut self, offset: f64, pattern: P) -> Self
    where
        P: IntoIterator,
        P::Item: Borrow<f64>,
    {
        self.dash_offset = offset;
        self.dash_pattern.clear();
        self.dash_pattern
            .extend(pattern.into_iter().map(|dash| *dash.borrow()));
        self
    }

    /// The miter limit with zero mapped to [`DEFAULT_MITER_LIMIT`].
    pub fn effective_miter_limit(&self) -> f64 {
        if self.miter_limit > 0.0 {
            self.miter_limit
        } else {
            DEFAULT_MITER_LIMIT
        }
    }
}

/// Points emitted on one side of a single vertex.
type JoinPoints = SmallVec<[Point; 4]>;

/// Offset geometry at an interior vertex.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Corner {
    /// Unit bisector of the two edge normals.
    pub(crate) bisector: Vec2,
    /// `bisector · n0`, the sine of half the interior angle.
    pub(crate) sin_half: f64,
    /// Angle between the two edge normals.
    pub(crate) turn: f64,
    /// `d0 × d1`; positive when the left side is on the inside.
    pub(crate) cross: f64,
}

impl Corner {
    pub(crate) fn new(d0: Vec2, d1: Vec2) -> Self {
        let n0 = d0.turn_90();
        let n1 = d1.turn_90();
        let sum = n0 + n1;
        let len = sum.hypot();
        let cross = d0.cross(d1);
        // A full reversal has no bisector; fall back to the incoming normal.
        // The sweep then goes around the tip on the side picked by `cross`,
        // whatever the sign of a zero cross product.
        let (bisector, turn) = if len < 1e-9 {
            (n0, if cross > 0.0 { PI } else { -PI })
        } else {
            (sum / len, cross.atan2(d0.dot(d1)))
        };
        let sin_half = bisector.dot(n0).clamp(0.0, 1.0);
        Corner {
            bisector,
            sin_half,
            turn,
            cross,
        }
    }

    pub(crate) fn is_straight(&self) -> bool {
        self.turn.abs() < JOIN_ANGLE_EPSILON
    }
}

/// Unit directions of every segment; closed polylines include the wrap edge.
pub(crate) fn directions(pts: &[Point], closed: bool) -> Vec<Vec2> {
    let n = pts.len();
    let segs = if closed { n } else { n - 1 };
    (0..segs)
        .map(|i| (pts[(i + 1) % n] - pts[i]).normalize())
        .collect()
}

/// Drop consecutive duplicates (and a closing duplicate of the first point).
///
/// Returns the cleaned points and whether the result is still a closed ring;
/// rings with fewer than three points are demoted to open polylines.
pub(crate) fn dedupe(pts: &[Point], closed: bool) -> (Vec<Point>, bool) {
    let mut out: Vec<Point> = Vec::with_capacity(pts.len());
    for &p in pts {
        if !p.is_finite() {
            continue;
        }
        match out.last() {
            Some(last) if last.distance_squared(p) <= DEDUPE_DISTANCE_SQ => {}
            _ => out.push(p),
        }
    }
    if closed && out.len() > 1 && out[0].distance_squared(out[out.len() - 1]) <= DEDUPE_DISTANCE_SQ
    {
        out.pop();
    }
    let closed = closed && out.len() >= 3;
    (out, closed)
}

/// Points of a circular arc around `center`, from `from` rotated by `sweep`.
///
/// Endpoints are excluded. The length of `from` is the radius, which sets the
/// sample density.
pub(crate) fn arc_points(out: &mut Vec<Point>, center: Point, from: Vec2, sweep: f64, epsilon: f64) {
    let radius = from.hypot();
    let quarter = samples_for_corner(Vec2::splat(radius), epsilon) as f64;
    let k = ((quarter * sweep.abs() / FRAC_PI_2).ceil() as usize).max(2);
    let step = sweep / k as f64;
    for i in 1..k {
        out.push(center + from.rotate(step * i as f64));
    }
}

/// Expand a stroke into a closed outline.
///
/// The path is normalized at `epsilon` first. Each subpath becomes one ring:
/// the left offset forwards, then the right offset backwards, joined by cap
/// geometry for open subpaths. Subpaths with fewer than two distinct points
/// produce nothing. A non-empty [`Stroke::dash_pattern`] dashes the path
/// before stroking.
///
/// ```
/// use pathgeom::{stroke, Path, Point, Rect, Stroke};
///
/// let mut line = Path::new();
/// line.move_to((0.0, 0.0));
/// line.line_to((10.0, 0.0));
/// let outline = stroke(&line, &Stroke::new(2.0), 1.0);
/// assert_eq!(outline.bounding_box(), Rect::new(0.0, -1.0, 10.0, 1.0));
/// ```
pub fn stroke(path: &Path, style: &Stroke, epsilon: f64) -> Path {
    let dashed;
    let path = if style.dash_pattern.is_empty() {
        path
    } else {
        dashed = path.dash_path(&style.dash_pattern, style.dash_offset);
        &dashed
    };
    let mut ctx = StrokeCtx {
        output: Path::new(),
        left: Vec::new(),
        right: Vec::new(),
        half_width: style.width.abs() * 0.5,
        miter_limit: style.effective_miter_limit(),
        epsilon,
    };
    if !(ctx.half_width.is_finite() && ctx.half_width > 0.0) {
        return ctx.output;
    }
    for poly in path.polylines(epsilon) {
        let (pts, closed) = dedupe(&poly.pts, poly.closed);
        if pts.len() < 2 {
            continue;
        }
        if closed {
            ctx.closed_ring(style, &pts);
        } else {
            ctx.open_ring(style, &pts);
        }
    }
    ctx.output
}

impl Path {
    /// Stroke this path with [`DEFAULT_EPSILON`].
    pub fn stroke_path(&self, style: &Stroke) -> Path {
        stroke(self, style, DEFAULT_EPSILON)
    }
}

/// Internal structure used for creating strokes.
struct StrokeCtx {
    output: Path,
    left: Vec<Point>,
    right: Vec<Point>,
    half_width: f64,
    miter_limit: f64,
    epsilon: f64,
}

impl StrokeCtx {
    fn open_ring(&mut self, style: &Stroke, pts: &[Point]) {
        let hw = self.half_width;
        let dirs = directions(pts, false);
        self.left.clear();
        self.right.clear();

        let d_start = dirs[0];
        let start = cap_anchor(pts[0], -d_start, hw, style.start_cap);
        self.left.push(start + d_start.turn_90() * hw);
        self.right.push(start - d_start.turn_90() * hw);
        for i in 1..pts.len() - 1 {
            self.do_join(style, pts[i], dirs[i - 1], dirs[i]);
        }
        let last = pts.len() - 1;
        let d_end = dirs[last - 1];
        let end = cap_anchor(pts[last], d_end, hw, style.end_cap);
        self.left.push(end + d_end.turn_90() * hw);
        self.right.push(end - d_end.turn_90() * hw);

        let out = &mut self.output;
        out.move_to(self.left[0]);
        for &p in &self.left[1..] {
            out.line_to(p);
        }
        if style.end_cap == Cap::Round {
            let mut arc = Vec::new();
            arc_points(&mut arc, pts[last], d_end.turn_90() * hw, -PI, self.epsilon);
            for p in arc {
                out.line_to(p);
            }
        }
        for &p in self.right.iter().rev() {
            out.line_to(p);
        }
        if style.start_cap == Cap::Round {
            let mut arc = Vec::new();
            arc_points(&mut arc, pts[0], -d_start.turn_90() * hw, -PI, self.epsilon);
            for p in arc {
                out.line_to(p);
            }
        }
        out.close();
    }

    fn closed_ring(&mut self, style: &Stroke, pts: &[Point]) {
        let n = pts.len();
        let dirs = directions(pts, true);
        self.left.clear();
        self.right.clear();
        for i in 0..n {
            self.do_join(style, pts[i], dirs[(i + n - 1) % n], dirs[i]);
        }

        let out = &mut self.output;
        out.move_to(self.left[0]);
        for &p in &self.left[1..] {
            out.line_to(p);
        }
        out.line_to(self.left[0]);
        out.line_to(self.right[0]);
        for &p in self.right[1..].iter().rev() {
            out.line_to(p);
        }
        out.line_to(self.right[0]);
        out.close();
    }

    /// Push the left and right offset points for the vertex `p`.
    fn do_join(&mut self, style: &Stroke, p: Point, d0: Vec2, d1: Vec2) {
        let hw = self.half_width;
        let corner = Corner::new(d0, d1);
        let n0 = d0.turn_90() * hw;
        let n1 = d1.turn_90() * hw;
        if corner.is_straight() {
            let b = corner.bisector * (hw / corner.sin_half.max(f64::EPSILON));
            self.left.push(p + b);
            self.right.push(p - b);
            return;
        }
        let within_limit = corner.sin_half > 0.0 && 1.0 / corner.sin_half <= self.miter_limit;
        let miter = corner.bisector * (hw / corner.sin_half.max(f64::EPSILON));

        // Right side is outside when the path turns left.
        let outer_sign = if corner.cross > 0.0 { -1.0 } else { 1.0 };
        let mut inner = JoinPoints::new();
        if within_limit {
            inner.push(p - miter * outer_sign);
        } else {
            inner.push(p - n0 * outer_sign);
            inner.push(p - n1 * outer_sign);
        }

        let mut outer = JoinPoints::new();
        match style.join {
            Join::Miter if within_limit => outer.push(p + miter * outer_sign),
            Join::Miter | Join::Bevel => {
                outer.push(p + n0 * outer_sign);
                outer.push(p + n1 * outer_sign);
            }
            Join::Round => {
                let from = n0 * outer_sign;
                let mut arc = Vec::new();
                arc_points(&mut arc, p, from, corner.turn, self.epsilon);
                outer.push(p + from);
                outer.extend(arc);
                outer.push(p + n1 * outer_sign);
            }
        }

        if outer_sign > 0.0 {
            self.left.extend(outer);
            self.right.extend(inner);
        } else {
            self.left.extend(inner);
            self.right.extend(outer);
        }
    }
}

/// The point the end offsets are taken from: pushed out along `outward` for
/// square caps.
fn cap_anchor(p: Point, outward: Vec2, hw: f64, cap: Cap) -> Point {
    match cap {
        Cap::Square => p + outward * hw,
        Cap::Butt | Cap::Round => p,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PathEl, Rect, Verb};

    fn open_line(a: (f64, f64), b: (f64, f64)) -> Path {
        let mut path = Path::new();
        path.move_to(a);
        path.line_to(b);
        path
    }

    #[test]
    fn butt_line_is_rectangle() {
        let out = stroke(&open_line((0.0, 0.0), (30.0, 0.0)), &Stroke::new(4.0), 1.0);
        assert_eq!(out.points().len(), 4);
        assert_eq!(out.verbs().last(), Some(&Verb::Close));
        assert_eq!(out.bounding_box(), Rect::new(0.0, -2.0, 30.0, 2.0));
    }

    #[test]
    fn square_cap_extends() {
        let style = Stroke::new(4.0).with_caps(Cap::Square);
        let out = stroke(&open_line((0.0, 0.0), (30.0, 0.0)), &style, 1.0);
        assert_eq!(out.bounding_box(), Rect::new(-2.0, -2.0, 32.0, 2.0));
    }

    #[test]
    fn round_cap_stays_on_circle() {
        let style = Stroke::new(10.0).with_caps(Cap::Round);
        let out = stroke(&open_line((0.0, 0.0), (30.0, 0.0)), &style, 1.0);
        assert!(out.points().len() > 4);
        for p in out.points() {
            if p.x > 30.0 {
                assert!((p.distance(Point::new(30.0, 0.0)) - 5.0).abs() < 1e-9);
            }
            if p.x < 0.0 {
                assert!((p.distance(Point::ORIGIN) - 5.0).abs() < 1e-9);
            }
        }
        let bbox = out.bounding_box();
        assert!((bbox.x1 - 35.0).abs() < 1e-2 && (bbox.x0 + 5.0).abs() < 1e-2);
    }

    #[test]
    fn closed_convex_gives_closed_outline() {
        let mut path = Path::make_rect(Rect::new(0.0, 0.0, 10.0, 10.0), false);
        path.close();
        let out = path.stroke_path(&Stroke::new(2.0));
        assert!(!out.is_empty());
        assert_eq!(out.verbs().first(), Some(&Verb::Move));
        assert_eq!(out.verbs().last(), Some(&Verb::Close));
        assert_eq!(out.verbs().iter().filter(|v| **v == Verb::Close).count(), 1);
        // Miter corners reach the expanded square.
        let bbox = out.bounding_box();
        assert!((bbox.x0 + 1.0).abs() < 1e-9 && (bbox.y1 - 11.0).abs() < 1e-9);
    }

    #[test]
    fn round_join_sweep() {
        // Interior angle of 90 degrees: the arc sweeps the other 90.
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));
        let style = Stroke::new(4.0).with_join(Join::Round);
        let out = stroke(&path, &style, 1.0);
        let vertex = Point::new(10.0, 0.0);
        let on_arc: Vec<Point> = out
            .points()
            .iter()
            .copied()
            .filter(|p| p.x > 10.0 + 1e-9 && p.y < -1e-9)
            .collect();
        assert!(!on_arc.is_empty());
        for p in &on_arc {
            assert!((p.distance(vertex) - 2.0).abs() < 1e-9);
        }
        // The full arc runs from (10, -2) to (12, 0).
        assert!(out.points().contains(&Point::new(10.0, -2.0)));
        assert!(out.points().contains(&Point::new(12.0, 0.0)));
    }

    #[test]
    fn reversal_round_join_wraps_tip() {
        let style = Stroke::new(2.0).with_join(Join::Round);
        let mut path = open_line((0.0, 0.0), (10.0, 0.0));
        path.line_to((0.0, 0.0));
        let out = stroke(&path, &style, 1.0);
        let bbox = out.bounding_box();
        assert!((bbox.x1 - 11.0).abs() < 1e-9, "{bbox:?}");
        for p in out.points().iter().filter(|p| p.x > 10.0) {
            assert!((p.distance(Point::new(10.0, 0.0)) - 1.0).abs() < 1e-9);
        }

        // A turn just short of a full reversal gives the same outline.
        let mut near = open_line((0.0, 0.0), (10.0, 0.0));
        near.line_to((0.0, 1e-9));
        let near_bbox = stroke(&near, &style, 1.0).bounding_box();
        assert!((near_bbox.x1 - bbox.x1).abs() < 1e-6, "{near_bbox:?}");
        assert!((near_bbox.y0 - bbox.y0).abs() < 1e-6);
    }

    #[test]
    fn miter_limit_clips_to_bevel() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((100.0, 0.0));
        path.line_to((0.0, 5.0));
        let sharp = stroke(&path, &Stroke::new(2.0).with_miter_limit(4.0), 1.0);
        let long = stroke(&path, &Stroke::new(2.0), 1.0);
        assert!(sharp.bounding_box().x1 < 102.0);
        assert!(long.bounding_box().x1 > 110.0);
    }

    #[test]
    fn straight_vertex_single_point() {
        let mut path = Path::new();
        path.move_to((0.0, 0.0));
        path.line_to((5.0, 0.0));
        path.line_to((10.0, 0.0));
        for join in [Join::Miter, Join::Round, Join::Bevel] {
            let out = stroke(&path, &Stroke::new(2.0).with_join(join), 1.0);
            assert_eq!(out.points().len(), 6, "{join:?}");
        }
    }

    #[test]
    fn degenerate_input_is_empty() {
        let mut path = Path::new();
        path.move_to((3.0, 3.0));
        path.line_to((3.0, 3.0));
        path.close();
        assert!(stroke(&path, &Stroke::new(2.0), 1.0).is_empty());
        assert!(stroke(&open_line((0.0, 0.0), (1.0, 0.0)), &Stroke::new(0.0), 1.0).is_empty());
    }

    #[test]
    fn two_point_closed_is_open() {
        let mut path = open_line((0.0, 0.0), (10.0, 0.0));
        path.close();
        let out = stroke(&path, &Stroke::new(2.0), 1.0);
        assert_eq!(out.bounding_box(), Rect::new(0.0, -1.0, 10.0, 1.0));
    }

    #[test]
    fn dashed_stroke_has_one_ring_per_dash() {
        let style = Stroke::new(1.0).with_dashes(0.0, [2.0, -2.0]);
        let out = stroke(&open_line((0.0, 0.0), (8.0, 0.0)), &style, 1.0);
        let rings = out
            .elements()
            .filter(|el| matches!(el, PathEl::ClosePath))
            .count();
        assert_eq!(rings, 2);
    }

    #[test]
    fn zero_miter_limit_means_default() {
        assert_eq!(Stroke::new(1.0).effective_miter_limit(), DEFAULT_MITER_LIMIT);
        assert_eq!(
            Stroke::new(1.0).with_miter_limit(3.0).effective_miter_limit(),
            3.0
        );
    }
}
