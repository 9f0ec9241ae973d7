// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fill tessellation through `lyon_tessellation`.

use alloc::vec::Vec;

use log::warn;
use lyon_tessellation::math::{point, Point as LyonPoint};
use lyon_tessellation::path::Path as LyonPath;
use lyon_tessellation::{BuffersBuilder, FillOptions, FillTessellator, FillVertex, VertexBuffers};

use crate::{Path, PathHash, Point, VertexData, VertexId, VertexLayout};

/// Errors from fill tessellation.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TessellateError {
    /// The polygon tessellator rejected the input.
    #[error("fill tessellation failed: {0}")]
    Tessellator(#[from] lyon_tessellation::TessellationError),
    /// A flattened contour has a NaN or infinite coordinate.
    #[error("path has non-finite coordinates")]
    NonFinite,
}

/// Tessellate the union of several paths into one triangle list.
///
/// Every path is flattened at `epsilon`. Each subpath is an implicitly
/// closed contour; contours with fewer than three points are skipped. The
/// non-zero winding rule applies across all contours, so a contour wound
/// against its enclosing one cuts a hole.
///
/// # Errors
///
/// Returns [`TessellateError`] if a coordinate is not finite or the
/// tessellator fails.
pub fn try_fill_triangles<'a>(
    paths: impl IntoIterator<Item = &'a Path>,
    epsilon: f64,
) -> Result<VertexData, TessellateError> {
    let mut builder = LyonPath::builder();
    let mut hash = PathHash::new();
    for path in paths {
        hash.mix(path.hash_code());
        for poly in path.polylines(epsilon) {
            if poly.pts.len() < 3 {
                continue;
            }
            if poly.pts.iter().any(|p| !p.is_finite()) {
                return Err(TessellateError::NonFinite);
            }
            let to_lyon = |p: &Point| {
                let [x, y] = p.to_f32();
                point(x, y)
            };
            builder.begin(to_lyon(&poly.pts[0]));
            for p in &poly.pts[1..] {
                builder.line_to(to_lyon(p));
            }
            builder.end(true);
        }
    }
    let lpath = builder.build();

    let mut buffers: VertexBuffers<LyonPoint, u32> = VertexBuffers::new();
    FillTessellator::new().tessellate(
        lpath.iter(),
        &FillOptions::non_zero(),
        &mut BuffersBuilder::new(&mut buffers, |v: FillVertex<'_>| v.position()),
    )?;

    let mut out = VertexData::with_capacity(VertexLayout::Fill, buffers.indices.len())
        .with_id(VertexId::from_hash(hash.value()));
    let mut flat: Vec<f32> = Vec::with_capacity(buffers.indices.len() * 2);
    for &ix in &buffers.indices {
        let v = buffers.vertices[ix as usize];
        flat.push(v.x);
        flat.push(v.y);
    }
    out.extend_raw(&flat);
    Ok(out)
}

impl Path {
    /// Fill triangles for this path under the non-zero winding rule.
    ///
    /// # Errors
    ///
    /// See [`try_fill_triangles`].
    pub fn try_triangles(&self, epsilon: f64) -> Result<VertexData, TessellateError> {
        try_fill_triangles([self], epsilon)
    }

    /// Fill triangles for this path; failures are logged and yield an empty
    /// buffer.
    ///
    /// ```
    /// use pathgeom::{Path, Rect};
    ///
    /// let square = Path::make_rect(Rect::new(0.0, 0.0, 10.0, 10.0), false);
    /// assert_eq!(square.triangles(1.0).triangle_count(), 2);
    /// ```
    pub fn triangles(&self, epsilon: f64) -> VertexData {
        self.try_triangles(epsilon).unwrap_or_else(|err| {
            warn!("dropping fill geometry: {err}");
            VertexData::new(VertexLayout::Fill).with_id(VertexId::from_hash(self.hash_code()))
        })
    }
}
