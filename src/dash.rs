// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Dashing: splitting a path into visible runs.

use log::warn;

use crate::{Path, Point, DEFAULT_EPSILON};

/// Upper bound on the stage changes one call may walk through.
const MAX_DASH_STEPS: f64 = (1 << 22) as f64;

/// Cursor into a cyclic dash pattern.
struct DashState<'a> {
    stages: &'a [f64],
    ix: usize,
    /// Length left in the current stage.
    remaining: f64,
    /// Whether the current stage draws.
    on: bool,
    /// Whether the current run has been started with a `move_to`.
    pen_down: bool,
}

impl<'a> DashState<'a> {
    /// Start the pattern `phase` units in; `phase` must be in `[0, total)`.
    fn new(stages: &'a [f64], mut phase: f64) -> Self {
        let mut ix = 0;
        while phase >= stages[ix].abs() {
            phase -= stages[ix].abs();
            ix = (ix + 1) % stages.len();
        }
        DashState {
            stages,
            ix,
            remaining: stages[ix].abs() - phase,
            on: stages[ix] > 0.0,
            pen_down: false,
        }
    }

    fn advance(&mut self) {
        self.ix = (self.ix + 1) % self.stages.len();
        self.remaining = self.stages[self.ix].abs();
        self.on = self.stages[self.ix] > 0.0;
        self.pen_down = false;
    }

    /// Walk one straight segment, emitting the visible parts.
    ///
    /// Every iteration either finishes the segment or finishes a stage, so a
    /// stage too short to move `t` still advances the pattern.
    fn segment(&mut self, out: &mut Path, a: Point, b: Point) {
        let len = a.distance(b);
        if !len.is_finite() {
            return;
        }
        let mut t = 0.0;
        while t < len {
            let left = len - t;
            let stage_ends = self.remaining <= left;
            let end = if stage_ends {
                (t + self.remaining).min(len)
            } else {
                len
            };
            if self.on && end > t {
                if !self.pen_down {
                    out.move_to(a.lerp(b, t / len));
                    self.pen_down = true;
                }
                out.line_to(a.lerp(b, end / len));
            }
            if stage_ends {
                self.advance();
            } else {
                self.remaining -= left;
            }
            t = end;
        }
    }
}

/// Split `path` into dashes.
///
/// `stages` lists stage lengths: positive stages draw and negative stages
/// skip. The pattern repeats for the whole path and starts `offset` units in
/// (wrapped into one period). The stage position carries across subpaths;
/// closed subpaths dash their closing edge too. Every dash is an open
/// subpath. An empty pattern, a zero or non-finite stage, or a pattern so
/// fine that the path would need more than about four million stages gives
/// an empty path.
///
/// ```
/// use pathgeom::{dash, Path, PathEl, Point};
///
/// let mut line = Path::new();
/// line.move_to((0.0, 0.0));
/// line.line_to((4.0, 0.0));
/// let dashed = dash(&line, &[1.0, -1.0], 0.0, 1.0);
/// let els: Vec<PathEl> = dashed.elements().collect();
/// assert_eq!(els[2], PathEl::MoveTo(Point::new(2.0, 0.0)));
/// ```
pub fn dash(path: &Path, stages: &[f64], offset: f64, epsilon: f64) -> Path {
    let mut out = Path::new();
    if stages.is_empty() || stages.iter().any(|s| *s == 0.0 || !s.is_finite()) {
        warn!("invalid dash pattern {stages:?}, dropping the path");
        return out;
    }
    let total: f64 = stages.iter().map(|s| s.abs()).sum();
    let phase = if offset.is_finite() {
        offset.rem_euclid(total)
    } else {
        0.0
    };
    // rem_euclid can round up to exactly `total`.
    let phase = if phase >= total { 0.0 } else { phase };
    let polys = path.polylines(epsilon);
    let length: f64 = polys
        .iter()
        .map(|poly| {
            let open: f64 = poly.pts.windows(2).map(|s| s[0].distance(s[1])).sum();
            match (poly.closed, poly.pts.first(), poly.pts.last()) {
                (true, Some(first), Some(last)) => open + last.distance(*first),
                _ => open,
            }
        })
        .sum();
    let steps = (length / total).ceil() * stages.len() as f64;
    if steps > MAX_DASH_STEPS {
        warn!("dash pattern {stages:?} is too fine for a path of length {length}, dropping the path");
        return out;
    }
    let mut state = DashState::new(stages, phase);

    for poly in polys {
        state.pen_down = false;
        for seg in poly.pts.windows(2) {
            state.segment(&mut out, seg[0], seg[1]);
        }
        if poly.closed && poly.pts.len() > 1 {
            state.segment(&mut out, poly.pts[poly.pts.len() - 1], poly.pts[0]);
        }
    }
    out
}

impl Path {
    /// Dash this path at [`DEFAULT_EPSILON`].
    ///
    /// See [`dash`].
    pub fn dash_path(&self, stages: &[f64], offset: f64) -> Path {
        dash(self, stages, offset, DEFAULT_EPSILON)
    }
}
