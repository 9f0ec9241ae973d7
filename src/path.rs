// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The path container: a point buffer, a verb buffer and a content hash.

use core::f64::consts::{FRAC_PI_2, PI, TAU};
use core::slice;

use alloc::vec::Vec;

use log::trace;

use crate::{Affine, PathHash, Point, Rect, RoundedRectRadii, Size, Vec2};

/// Control-point distance for a quarter circle of unit radius.
pub const MAGIC_CIRCLE: f64 = 0.551915024494;

/// A path command.
///
/// Each verb consumes a fixed number of points from the path's point buffer,
/// see [`Verb::num_points`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Verb {
    /// Start a new subpath.
    Move,
    /// A straight segment.
    Line,
    /// A quadratic Bézier segment.
    Quad,
    /// A cubic Bézier segment.
    Cubic,
    /// Close the current subpath.
    Close,
}

impl Verb {
    /// The number of points this verb consumes.
    #[inline]
    pub const fn num_points(self) -> usize {
        match self {
            Verb::Move | Verb::Line => 1,
            Verb::Quad => 2,
            Verb::Cubic => 3,
            Verb::Close => 0,
        }
    }

    #[inline]
    fn tag(self) -> u64 {
        match self {
            Verb::Move => 0,
            Verb::Line => 1,
            Verb::Quad => 2,
            Verb::Cubic => 3,
            Verb::Close => 4,
        }
    }
}

/// A path element, as yielded by [`Path::elements`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PathEl {
    /// Move directly to the point without drawing anything, starting a new
    /// subpath.
    MoveTo(Point),
    /// Draw a line from the current location to the point.
    LineTo(Point),
    /// Draw a quadratic Bézier using the current location and the two points.
    QuadTo(Point, Point),
    /// Draw a cubic Bézier using the current location and the three points.
    CurveTo(Point, Point, Point),
    /// Close off the path.
    ClosePath,
}

/// A vector path.
///
/// Points and verbs live in two flat buffers. Every append also feeds a
/// streaming hash, so paths built by the same command sequence compare and
/// hash equal; the hash keys the geometry caches.
///
/// `line_to`, `quad_to` and `cubic_to` need a current point. When the path is
/// empty, or the last verb is [`Verb::Close`], an implicit
/// `move_to(Point::ORIGIN)` is inserted first.
///
/// ```
/// use pathgeom::{Path, Point, Verb};
///
/// let mut path = Path::new();
/// path.line_to((10.0, 0.0));
/// assert_eq!(path.verbs(), &[Verb::Move, Verb::Line]);
/// assert_eq!(path.points()[0], Point::ORIGIN);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pts: Vec<Point>,
    verbs: Vec<Verb>,
    hash: PathHash,
    normalized: bool,
}

impl Default for Path {
    fn default() -> Self {
        Path {
            pts: Vec::new(),
            verbs: Vec::new(),
            hash: PathHash::new(),
            normalized: true,
        }
    }
}

impl Path {
    /// Create a new, empty path.
    pub fn new() -> Path {
        Path::default()
    }

    /// Create a new path with preallocated buffers.
    pub fn with_capacity(points: usize, verbs: usize) -> Path {
        Path {
            pts: Vec::with_capacity(points),
            verbs: Vec::with_capacity(verbs),
            ..Path::default()
        }
    }

    /// Create a path whose first command is `move_to(p)`.
    pub fn from_move<P: Into<Point>>(p: P) -> Path {
        let mut path = Path::new();
        path.move_to(p);
        path
    }

    fn push_verb(&mut self, verb: Verb, pts: &[Point]) {
        debug_assert_eq!(verb.num_points(), pts.len(), "point count mismatch");
        self.hash.mix(verb.tag());
        for &p in pts {
            self.hash.mix_point(p);
        }
        self.pts.extend_from_slice(pts);
        self.verbs.push(verb);
        if matches!(verb, Verb::Quad | Verb::Cubic) {
            self.normalized = false;
        }
    }

    fn has_open_subpath(&self) -> bool {
        matches!(self.verbs.last(), Some(v) if *v != Verb::Close)
    }

    fn ensure_anchor(&mut self) {
        if !self.has_open_subpath() {
            trace!("segment appended without a current point, starting at the origin");
            self.move_to(Point::ORIGIN);
        }
    }

    /// Line to `p` if a subpath is open, otherwise start one there.
    pub(crate) fn add_to(&mut self, p: Point) {
        if self.has_open_subpath() {
            self.line_to(p);
        } else {
            self.move_to(p);
        }
    }

    /// Start a new subpath at `p`.
    pub fn move_to<P: Into<Point>>(&mut self, p: P) {
        self.push_verb(Verb::Move, &[p.into()]);
    }

    /// Draw a line to `p`.
    pub fn line_to<P: Into<Point>>(&mut self, p: P) {
        self.ensure_anchor();
        self.push_verb(Verb::Line, &[p.into()]);
    }

    /// Draw a quadratic Bézier through control point `p1` to `p2`.
    pub fn quad_to<P: Into<Point>>(&mut self, p1: P, p2: P) {
        self.ensure_anchor();
        self.push_verb(Verb::Quad, &[p1.into(), p2.into()]);
    }

    /// Draw a cubic Bézier through control points `p1`, `p2` to `p3`.
    pub fn cubic_to<P: Into<Point>>(&mut self, p1: P, p2: P, p3: P) {
        self.ensure_anchor();
        self.push_verb(Verb::Cubic, &[p1.into(), p2.into(), p3.into()]);
    }

    /// Close the current subpath. No point is added.
    pub fn close(&mut self) {
        self.push_verb(Verb::Close, &[]);
    }

    /// Append one [`PathEl`].
    pub fn push(&mut self, el: PathEl) {
        match el {
            PathEl::MoveTo(p) => self.move_to(p),
            PathEl::LineTo(p) => self.line_to(p),
            PathEl::QuadTo(p1, p2) => self.quad_to(p1, p2),
            PathEl::CurveTo(p1, p2, p3) => self.cubic_to(p1, p2, p3),
            PathEl::ClosePath => self.close(),
        }
    }

    /// Append an ellipse inscribed in `rect` as four cubic quadrants.
    ///
    /// The contour starts and ends at the top-center of `rect`; it runs
    /// clockwise on screen unless `ccw` is set.
    pub fn oval_to(&mut self, rect: Rect, ccw: bool) {
        if rect.is_zero_area() {
            return;
        }
        let Rect { x0, y0, x1, y1 } = rect;
        let xm = 0.5 * (x0 + x1);
        let ym = 0.5 * (y0 + y1);
        let cx = rect.width() * 0.5 * MAGIC_CIRCLE;
        let cy = rect.height() * 0.5 * MAGIC_CIRCLE;
        self.add_to(Point::new(xm, y0));
        if ccw {
            self.cubic_to((xm - cx, y0), (x0, ym - cy), (x0, ym));
            self.cubic_to((x0, ym + cy), (xm - cx, y1), (xm, y1));
            self.cubic_to((xm + cx, y1), (x1, ym + cy), (x1, ym));
            self.cubic_to((x1, ym - cy), (xm + cx, y0), (xm, y0));
        } else {
            self.cubic_to((xm + cx, y0), (x1, ym - cy), (x1, ym));
            self.cubic_to((x1, ym + cy), (xm + cx, y1), (xm, y1));
            self.cubic_to((xm - cx, y1), (x0, ym + cy), (x0, ym));
            self.cubic_to((x0, ym - cy), (xm - cx, y0), (xm, y0));
        }
    }

    /// Append the outline of `rect` as four lines, starting and ending at its
    /// origin corner. The subpath is left open.
    pub fn rect_to(&mut self, rect: Rect, ccw: bool) {
        if rect.is_zero_area() {
            return;
        }
        let Rect { x0, y0, x1, y1 } = rect;
        self.add_to(Point::new(x0, y0));
        if ccw {
            self.line_to((x0, y1));
            self.line_to((x1, y1));
            self.line_to((x1, y0));
        } else {
            self.line_to((x1, y0));
            self.line_to((x1, y1));
            self.line_to((x0, y1));
        }
        self.line_to((x0, y0));
    }

    /// Append an elliptical arc as cubic pieces of at most 90° each.
    ///
    /// Angles are in radians and grow counter-clockwise on screen (y-down),
    /// so `start_angle = π/2` is the top of the ellipse. With `use_center`
    /// the arc is bracketed by lines from and back to `center`. A zero
    /// radius or zero sweep appends nothing, and sweeps beyond a full turn
    /// are clamped to one.
    pub fn arc(
        &mut self,
        center: Point,
        radii: Vec2,
        start_angle: f64,
        sweep_angle: f64,
        use_center: bool,
    ) {
        if radii.x == 0.0 && radii.y == 0.0 || sweep_angle == 0.0 || !sweep_angle.is_finite() {
            return;
        }
        // Anything past a full turn retraces the ellipse.
        let sweep_angle = sweep_angle.clamp(-TAU, TAU);
        let n = (sweep_angle.abs() / FRAC_PI_2).ceil();
        let sweep = sweep_angle / n;
        let magic = if sweep == FRAC_PI_2 {
            MAGIC_CIRCLE
        } else if sweep == -FRAC_PI_2 {
            -MAGIC_CIRCLE
        } else {
            (sweep / 4.0).tan() * (4.0 / 3.0)
        };
        let map = |x: f64, y: f64| Point::new(x * radii.x + center.x, y * radii.y + center.y);

        let mut angle = -start_angle;
        let (mut y0, mut x0) = angle.sin_cos();
        let start = map(x0, y0);
        if use_center {
            self.add_to(center);
            self.line_to(start);
        } else {
            self.add_to(start);
        }
        for _ in 0..n as usize {
            angle -= sweep;
            let (y3, x3) = angle.sin_cos();
            let x1 = x0 + magic * y0;
            let y1 = y0 - magic * x0;
            let x2 = x3 - magic * y3;
            let y2 = y3 + magic * x3;
            self.cubic_to(map(x1, y1), map(x2, y2), map(x3, y3));
            x0 = x3;
            y0 = y3;
        }
        if use_center {
            self.line_to(center);
        }
    }

    /// Append an arc of the ellipse inscribed in `rect`.
    ///
    /// See [`Path::arc`] for the angle convention.
    pub fn arc_to(&mut self, rect: Rect, start_angle: f64, sweep_angle: f64, use_center: bool) {
        let radii = rect.size().to_vec2() * 0.5;
        self.arc(rect.origin() + radii, radii, start_angle, sweep_angle, use_center);
    }

    /// An ellipse inscribed in `rect`.
    pub fn make_oval(rect: Rect, ccw: bool) -> Path {
        let mut path = Path::new();
        path.oval_to(rect, ccw);
        path
    }

    /// A circle.
    ///
    /// ```
    /// use pathgeom::{Path, Point, Rect};
    ///
    /// let circle = Path::make_circle(Point::new(10.0, 10.0), 5.0, false);
    /// assert_eq!(circle.bounding_box(), Rect::new(5.0, 5.0, 15.0, 15.0));
    /// ```
    pub fn make_circle(center: Point, radius: f64, ccw: bool) -> Path {
        let size = Size::new(radius * 2.0, radius * 2.0);
        Path::make_oval(Rect::from_center_size(center, size), ccw)
    }

    /// The four-line outline of `rect`.
    pub fn make_rect(rect: Rect, ccw: bool) -> Path {
        let mut path = Path::new();
        path.rect_to(rect, ccw);
        path
    }

    /// An arc of the ellipse inscribed in `rect`, optionally closed.
    pub fn make_arc(
        rect: Rect,
        start_angle: f64,
        sweep_angle: f64,
        use_center: bool,
        close: bool,
    ) -> Path {
        let mut path = Path::new();
        path.arc_to(rect, start_angle, sweep_angle, use_center);
        if close {
            path.close();
        }
        path
    }

    /// A closed, clockwise rounded rectangle.
    ///
    /// Radii are clamped to half the shorter side.
    pub fn make_rrect(rect: Rect, radii: RoundedRectRadii) -> Path {
        let mut path = Path::new();
        path.rrect_rings(rect, None, radii);
        path
    }

    /// The area between a rounded rectangle `outside` and a rectangle
    /// `inside` it, as two closed rings.
    ///
    /// The outer ring runs clockwise and the inner ring counter-clockwise;
    /// inner corner radii are the outer radii minus the adjacent border,
    /// floored at zero.
    pub fn make_rrect_outline(outside: Rect, inside: Rect, radii: RoundedRectRadii) -> Path {
        let mut path = Path::new();
        path.rrect_rings(outside, Some(inside), radii);
        path
    }

    fn rrect_rings(&mut self, outside: Rect, inside: Option<Rect>, radii: RoundedRectRadii) {
        if outside.is_zero_area() || inside.is_some_and(|r| r.is_zero_area()) {
            return;
        }
        let radii = radii.clamp(outside.size().min_side() * 0.5);

        let (o0, o1) = (outside.origin(), Point::new(outside.x1, outside.y1));
        let tl = Vec2::splat(radii.top_left);
        let tr = Vec2::splat(radii.top_right);
        let br = Vec2::splat(radii.bottom_right);
        let bl = Vec2::splat(radii.bottom_left);

        self.corner_arc(o0, tl, Vec2::ZERO, PI, -FRAC_PI_2);
        self.corner_arc(Point::new(o1.x, o0.y), tr, Vec2::new(-1., 0.), FRAC_PI_2, -FRAC_PI_2);
        self.corner_arc(o1, br, Vec2::new(-1., -1.), 0.0, -FRAC_PI_2);
        self.corner_arc(Point::new(o0.x, o1.y), bl, Vec2::new(0., -1.), -FRAC_PI_2, -FRAC_PI_2);
        self.close();

        let Some(inside) = inside else {
            return;
        };
        let top = inside.y0 - outside.y0;
        let right = outside.x1 - inside.x1;
        let bottom = outside.y1 - inside.y1;
        let left = inside.x0 - outside.x0;
        let shrink = |r: Vec2, h: f64, v: f64| Vec2::new((r.x - h).max(0.0), (r.y - v).max(0.0));
        let tl = shrink(tl, left, top);
        let tr = shrink(tr, right, top);
        let br = shrink(br, right, bottom);
        let bl = shrink(bl, left, bottom);
        let (i0, i1) = (inside.origin(), Point::new(inside.x1, inside.y1));

        self.corner_arc(i0, tl, Vec2::ZERO, FRAC_PI_2, FRAC_PI_2);
        self.corner_arc(Point::new(i0.x, i1.y), bl, Vec2::new(0., -1.), PI, FRAC_PI_2);
        self.corner_arc(i1, br, Vec2::new(-1., -1.), -FRAC_PI_2, FRAC_PI_2);
        self.corner_arc(Point::new(i1.x, i0.y), tr, Vec2::new(-1., 0.), 0.0, FRAC_PI_2);
        self.close();
    }

    /// A quarter-ellipse corner, or a plain vertex when either radius is zero.
    ///
    /// `dir` moves the ellipse's bounding box from `corner` towards the
    /// inside of the rectangle, in units of its size.
    fn corner_arc(&mut self, corner: Point, radius: Vec2, dir: Vec2, start: f64, sweep: f64) {
        if radius.x > 0.0 && radius.y > 0.0 {
            let s = radius * 2.0;
            let origin = corner + Vec2::new(s.x * dir.x, s.y * dir.y);
            self.arc_to(Rect::from_origin_size(origin, s.to_size()), start, sweep, false);
        } else {
            self.add_to(corner);
        }
    }

    /// Append all commands of `other`.
    pub fn concat(&mut self, other: &Path) {
        self.pts.reserve(other.pts.len());
        self.verbs.reserve(other.verbs.len());
        for el in other.elements() {
            self.push_raw(el);
        }
    }

    /// Push without inserting an implicit anchor; used to copy paths verbatim.
    fn push_raw(&mut self, el: PathEl) {
        match el {
            PathEl::MoveTo(p) => self.push_verb(Verb::Move, &[p]),
            PathEl::LineTo(p) => self.push_verb(Verb::Line, &[p]),
            PathEl::QuadTo(p1, p2) => self.push_verb(Verb::Quad, &[p1, p2]),
            PathEl::CurveTo(p1, p2, p3) => self.push_verb(Verb::Cubic, &[p1, p2, p3]),
            PathEl::ClosePath => self.push_verb(Verb::Close, &[]),
        }
    }

    /// Apply `affine` to every point in place.
    pub fn transform(&mut self, affine: Affine) {
        for p in &mut self.pts {
            *p = affine * *p;
        }
        self.rehash();
    }

    /// Scale every point in place.
    pub fn scale(&mut self, scale: Vec2) {
        for p in &mut self.pts {
            p.x *= scale.x;
            p.y *= scale.y;
        }
        self.rehash();
    }

    fn rehash(&mut self) {
        let mut hash = PathHash::new();
        let mut pts = self.pts.iter();
        for verb in &self.verbs {
            hash.mix(verb.tag());
            for p in pts.by_ref().take(verb.num_points()) {
                hash.mix_point(*p);
            }
        }
        self.hash = hash;
    }

    /// The bounding box of all points, control points included.
    ///
    /// This contains the curve, but can be larger than its tight bounds.
    /// An empty path has the empty rectangle at the origin.
    pub fn bounding_box(&self) -> Rect {
        self.bounding_box_with(Affine::IDENTITY)
    }

    /// The bounding box of all points after applying `affine`.
    pub fn bounding_box_with(&self, affine: Affine) -> Rect {
        let mut iter = self.pts.iter().map(|p| affine * *p);
        let Some(first) = iter.next() else {
            return Rect::ZERO;
        };
        iter.fold(Rect::from_points(first, first), |r, p| r.union_pt(p))
    }

    /// Release spare buffer capacity once the path is complete.
    pub fn shrink_to_fit(&mut self) {
        self.pts.shrink_to_fit();
        self.verbs.shrink_to_fit();
    }

    /// Iterate over the path as [`PathEl`]s.
    pub fn elements(&self) -> Elements<'_> {
        Elements {
            verbs: self.verbs.iter(),
            pts: &self.pts,
        }
    }

    /// The point buffer.
    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.pts
    }

    /// The verb buffer.
    #[inline]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// Whether the path has no commands.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.verbs.is_empty()
    }

    /// The last point, if any.
    #[inline]
    pub fn last_point(&self) -> Option<Point> {
        self.pts.last().copied()
    }

    /// The content hash.
    #[inline]
    pub fn hash_code(&self) -> u64 {
        self.hash.value()
    }

    /// Whether the path contains only move, line and close verbs.
    #[inline]
    pub fn is_normalized(&self) -> bool {
        self.normalized
    }
}

/// Iterator over the elements of a [`Path`].
#[derive(Clone, Debug)]
pub struct Elements<'a> {
    verbs: slice::Iter<'a, Verb>,
    pts: &'a [Point],
}

impl Iterator for Elements<'_> {
    type Item = PathEl;

    fn next(&mut self) -> Option<PathEl> {
        let verb = *self.verbs.next()?;
        let (head, rest) = self.pts.split_at(verb.num_points().min(self.pts.len()));
        self.pts = rest;
        Some(match (verb, head) {
            (Verb::Move, [p]) => PathEl::MoveTo(*p),
            (Verb::Line, [p]) => PathEl::LineTo(*p),
            (Verb::Quad, [p1, p2]) => PathEl::QuadTo(*p1, *p2),
            (Verb::Cubic, [p1, p2, p3]) => PathEl::CurveTo(*p1, *p2, *p3),
            _ => PathEl::ClosePath,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.verbs.size_hint()
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = PathEl;
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements()
    }
}

impl FromIterator<PathEl> for Path {
    fn from_iter<T: IntoIterator<Item = PathEl>>(iter: T) -> Self {
        let mut path = Path::new();
        path.extend(iter);
        path
    }
}

impl Extend<PathEl> for Path {
    fn extend<I: IntoIterator<Item = PathEl>>(&mut self, iter: I) {
        for el in iter {
            self.push(el);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_near(p0: Point, p1: Point) {
        assert!((p1 - p0).hypot() < 1e-9, "{p0:?} != {p1:?}");
    }

    #[test]
    fn implicit_origin() {
        let mut path = Path::new();
        path.quad_to((1.0, 1.0), (2.0, 0.0));
        path.close();
        path.line_to((5.0, 5.0));
        assert_eq!(
            path.verbs(),
            &[Verb::Move, Verb::Quad, Verb::Close, Verb::Move, Verb::Line]
        );
        assert_eq!(path.points()[0], Point::ORIGIN);
        assert_eq!(path.points()[3], Point::ORIGIN);
        assert!(!path.is_normalized());
    }

    #[test]
    fn hash_is_history_function() {
        let build = || {
            let mut p = Path::new();
            p.move_to((1.0, 2.0));
            p.cubic_to((3.0, 4.0), (5.0, 6.0), (7.0, 8.0));
            p.close();
            p
        };
        assert_eq!(build().hash_code(), build().hash_code());
        let mut other = build();
        other.line_to((0.0, 1.0));
        assert_ne!(other.hash_code(), build().hash_code());

        let mut a = Path::new();
        a.move_to((1.0, 2.0));
        a.line_to((3.0, 4.0));
        let mut b = Path::new();
        b.move_to((1.0, 2.0));
        b.move_to((3.0, 4.0));
        assert_ne!(a.hash_code(), b.hash_code(), "verbs take part in the hash");
    }

    #[test]
    fn concat_matches_sequential_build() {
        let mut a = Path::make_rect(Rect::new(0.0, 0.0, 1.0, 1.0), false);
        let b = Path::make_oval(Rect::new(2.0, 2.0, 4.0, 4.0), false);
        let mut c = a.clone();
        a.concat(&b);
        c.extend(b.elements());
        assert_eq!(a, c);
        assert!(!a.is_normalized());
    }

    #[test]
    fn transform_rehashes() {
        let mut moved = Path::make_rect(Rect::new(0.0, 0.0, 2.0, 2.0), false);
        moved.transform(Affine::translate((1.0, 1.0)));
        let direct = Path::make_rect(Rect::new(1.0, 1.0, 3.0, 3.0), false);
        assert_eq!(moved.hash_code(), direct.hash_code());

        let mut scaled = Path::make_rect(Rect::new(1.0, 1.0, 2.0, 2.0), false);
        scaled.scale(Vec2::new(2.0, 3.0));
        assert_eq!(scaled, Path::make_rect(Rect::new(2.0, 3.0, 4.0, 6.0), false));
    }

    #[test]
    fn rect_to_order() {
        let path = Path::make_rect(Rect::new(0.0, 0.0, 10.0, 5.0), false);
        assert_eq!(path.verbs().len(), 5);
        assert_eq!(
            path.points(),
            &[
                Point::new(0.0, 0.0),
                Point::new(10.0, 0.0),
                Point::new(10.0, 5.0),
                Point::new(0.0, 5.0),
                Point::new(0.0, 0.0),
            ]
        );
        let ccw = Path::make_rect(Rect::new(0.0, 0.0, 10.0, 5.0), true);
        assert_eq!(ccw.points()[1], Point::new(0.0, 5.0));
        assert!(Path::make_rect(Rect::new(1.0, 1.0, 1.0, 1.0), false).is_empty());
    }

    #[test]
    fn oval_starts_top_center() {
        let path = Path::make_oval(Rect::new(0.0, 0.0, 20.0, 10.0), false);
        assert_eq!(path.points()[0], Point::new(10.0, 0.0));
        assert_eq!(path.last_point(), Some(Point::new(10.0, 0.0)));
        // Clockwise on screen: the first quadrant ends at the right-center.
        assert_eq!(path.points()[3], Point::new(20.0, 5.0));
        assert_eq!(path.bounding_box(), Rect::new(0.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn quarter_arc() {
        let mut path = Path::new();
        path.arc(Point::new(0.0, 0.0), Vec2::new(10.0, 10.0), 0.0, FRAC_PI_2, false);
        assert_eq!(path.verbs(), &[Verb::Move, Verb::Cubic]);
        assert_near(path.points()[0], Point::new(10.0, 0.0));
        // Counter-clockwise on screen: a positive sweep from 0 goes up.
        assert_near(path.points()[1], Point::new(10.0, -10.0 * MAGIC_CIRCLE));
        assert_near(path.points()[3], Point::new(0.0, -10.0));
    }

    #[test]
    fn arc_splits_and_brackets_center() {
        let mut path = Path::new();
        path.arc(Point::new(5.0, 5.0), Vec2::new(2.0, 1.0), 0.0, -PI, true);
        let cubics = path.verbs().iter().filter(|v| **v == Verb::Cubic).count();
        assert_eq!(cubics, 2);
        assert_eq!(path.points()[0], Point::new(5.0, 5.0));
        assert_eq!(path.last_point(), Some(Point::new(5.0, 5.0)));

        let mut empty = Path::new();
        empty.arc(Point::ORIGIN, Vec2::new(1.0, 1.0), 0.0, 0.0, false);
        empty.arc(Point::ORIGIN, Vec2::ZERO, 0.0, 1.0, false);
        assert!(empty.is_empty());
    }

    #[test]
    fn huge_sweep_is_one_turn() {
        let mut path = Path::new();
        path.arc(Point::ORIGIN, Vec2::new(3.0, 3.0), 0.0, 1e15, false);
        let cubics = path.verbs().iter().filter(|v| **v == Verb::Cubic).count();
        assert_eq!(cubics, 4);
        assert_near(path.last_point().unwrap(), Point::new(3.0, 0.0));

        let mut back = Path::new();
        back.arc(Point::ORIGIN, Vec2::new(3.0, 3.0), 0.0, -1e15, false);
        assert_eq!(back.verbs().len(), 5);
    }

    #[test]
    fn rrect_outline_rings() {
        let outer = Rect::new(0.0, 0.0, 100.0, 50.0);
        let inner = Rect::new(5.0, 5.0, 95.0, 45.0);
        let path = Path::make_rrect_outline(outer, inner, RoundedRectRadii::from(10.0));
        let closes = path.verbs().iter().filter(|v| **v == Verb::Close).count();
        assert_eq!(closes, 2);
        let bbox = path.bounding_box();
        assert_near(bbox.origin(), outer.origin());
        assert_near(Point::new(bbox.x1, bbox.y1), Point::new(outer.x1, outer.y1));

        let square = Path::make_rrect(outer, RoundedRectRadii::default());
        assert!(square.is_normalized());
        assert_eq!(square.bounding_box(), outer);
    }

    #[test]
    fn elements_round_trip() {
        let path = Path::make_arc(Rect::new(0.0, 0.0, 8.0, 8.0), 0.5, 2.0, true, true);
        let rebuilt: Path = path.elements().collect();
        assert_eq!(rebuilt, path);
    }
}
