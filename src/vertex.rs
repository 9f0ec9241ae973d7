// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Triangle-list vertex buffers and their pairing with paths.

use core::mem::size_of;

use alloc::vec::Vec;

use crate::{Affine, Path, Point, DEFAULT_EPSILON};

/// The per-vertex component layout of a [`VertexData`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VertexLayout {
    /// `x, y`: plain fill triangles.
    Fill,
    /// `x, y, fuzz`: antialiased stroke triangles. `fuzz` runs from −1 on the
    /// right edge of the stroke to 1 on the left edge.
    AaFuzz,
    /// `x, y, length, width, direction`: border edge triangles. `length` and
    /// `width` are offsets from the outer corner along and across the edge;
    /// `direction` is 0, 1, 2 or 3 for the top, right, bottom and left edges.
    Outline,
}

impl VertexLayout {
    /// Number of `f32` components per vertex.
    #[inline]
    pub const fn components(self) -> usize {
        match self {
            VertexLayout::Fill => 2,
            VertexLayout::AaFuzz => 3,
            VertexLayout::Outline => 5,
        }
    }

    /// Size of one vertex in bytes.
    #[inline]
    pub const fn stride(self) -> usize {
        self.components() * size_of::<f32>()
    }
}

/// An opaque identity token for a vertex buffer, used by GPU-side caches.
///
/// Buffers generated from the same inputs get the same id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(u64);

impl VertexId {
    /// An id derived from an input hash.
    #[inline]
    pub const fn from_hash(hash: u64) -> Self {
        VertexId(hash)
    }

    /// The raw value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A flat `f32` triangle list.
///
/// Every three consecutive vertices form one triangle. The buffer can be
/// uploaded as-is through [`VertexData::as_bytes`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexData {
    layout: VertexLayout,
    data: Vec<f32>,
    id: VertexId,
}

impl VertexData {
    /// An empty buffer.
    pub fn new(layout: VertexLayout) -> Self {
        Self::with_capacity(layout, 0)
    }

    /// An empty buffer with room for `vertices` vertices.
    pub fn with_capacity(layout: VertexLayout, vertices: usize) -> Self {
        VertexData {
            layout,
            data: Vec::with_capacity(vertices * layout.components()),
            id: VertexId::default(),
        }
    }

    /// Builder method for setting the identity token.
    #[must_use]
    pub fn with_id(mut self, id: VertexId) -> Self {
        self.id = id;
        self
    }

    /// The component layout.
    #[inline]
    pub fn layout(&self) -> VertexLayout {
        self.layout
    }

    /// The identity token.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.data.len() / self.layout.components()
    }

    /// The number of whole triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.vertex_count() / 3
    }

    /// Whether the buffer has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The raw components.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// The raw components as bytes, for GPU upload.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Components of vertex `ix`.
    pub fn vertex(&self, ix: usize) -> Option<&[f32]> {
        let c = self.layout.components();
        self.data.get(ix * c..(ix + 1) * c)
    }

    /// Positions of every vertex.
    pub fn positions(&self) -> impl Iterator<Item = Point> + '_ {
        self.data
            .chunks_exact(self.layout.components())
            .map(|v| Point::new(f64::from(v[0]), f64::from(v[1])))
    }

    /// Append a [`VertexLayout::Fill`] vertex.
    pub fn push_fill(&mut self, p: Point) {
        debug_assert_eq!(self.layout, VertexLayout::Fill, "layout mismatch");
        self.data.extend_from_slice(&p.to_f32());
    }

    /// Append a [`VertexLayout::AaFuzz`] vertex.
    pub fn push_fuzz(&mut self, p: Point, fuzz: f32) {
        debug_assert_eq!(self.layout, VertexLayout::AaFuzz, "layout mismatch");
        let [x, y] = p.to_f32();
        self.data.extend_from_slice(&[x, y, fuzz]);
    }

    /// Append a [`VertexLayout::Outline`] vertex.
    pub fn push_outline(&mut self, p: Point, tag: [f32; 3]) {
        debug_assert_eq!(self.layout, VertexLayout::Outline, "layout mismatch");
        let [x, y] = p.to_f32();
        self.data.extend_from_slice(&[x, y, tag[0], tag[1], tag[2]]);
    }

    /// Append raw components; the length must be a multiple of the layout's
    /// component count.
    pub fn extend_raw(&mut self, components: &[f32]) {
        debug_assert_eq!(
            components.len() % self.layout.components(),
            0,
            "partial vertex"
        );
        self.data.extend_from_slice(components);
    }

    /// Approximate heap size in bytes.
    pub fn byte_size(&self) -> usize {
        self.data.len() * size_of::<f32>()
    }
}

/// A path paired with its lazily computed fill triangles.
///
/// Edits through [`Pathv::path_mut`] or [`Pathv::transform`] drop the
/// cached triangles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Pathv {
    path: Path,
    vertex: Option<VertexData>,
}

impl Pathv {
    /// Wrap a path; triangles are computed on first use.
    pub fn new(path: Path) -> Self {
        Pathv { path, vertex: None }
    }

    /// Wrap a path together with triangles already computed for it.
    pub fn from_parts(path: Path, vertex: VertexData) -> Self {
        Pathv {
            path,
            vertex: Some(vertex),
        }
    }

    /// The path.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Mutable access to the path; drops the cached triangles.
    pub fn path_mut(&mut self) -> &mut Path {
        self.vertex = None;
        &mut self.path
    }

    /// Transform the path in place; drops the cached triangles.
    pub fn transform(&mut self, affine: Affine) {
        self.path_mut().transform(affine);
    }

    /// The fill triangles, tessellating at `epsilon` if not yet cached.
    pub fn vertex(&mut self, epsilon: f64) -> &VertexData {
        let path = &self.path;
        self.vertex.get_or_insert_with(|| path.triangles(epsilon))
    }

    /// The fill triangles at [`DEFAULT_EPSILON`].
    pub fn vertex_default(&mut self) -> &VertexData {
        self.vertex(DEFAULT_EPSILON)
    }

    /// The cached triangles, if computed.
    #[inline]
    pub fn cached_vertex(&self) -> Option<&VertexData> {
        self.vertex.as_ref()
    }

    /// Split into path and cached triangles.
    pub fn into_parts(self) -> (Path, Option<VertexData>) {
        (self.path, self.vertex)
    }

    /// Approximate heap size in bytes.
    pub fn byte_size(&self) -> usize {
        self.path.points().len() * size_of::<Point>()
            + self.vertex.as_ref().map_or(0, VertexData::byte_size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Rect;

    #[test]
    fn layout_sizes() {
        assert_eq!(VertexLayout::Fill.stride(), 8);
        assert_eq!(VertexLayout::AaFuzz.stride(), 12);
        assert_eq!(VertexLayout::Outline.stride(), 20);
    }

    #[test]
    fn counts_and_bytes() {
        let mut v = VertexData::new(VertexLayout::AaFuzz);
        v.push_fuzz(Point::new(1.0, 2.0), -1.0);
        v.push_fuzz(Point::new(3.0, 4.0), 1.0);
        v.push_fuzz(Point::new(5.0, 6.0), 0.0);
        assert_eq!(v.vertex_count(), 3);
        assert_eq!(v.triangle_count(), 1);
        assert_eq!(v.as_bytes().len(), 9 * 4);
        assert_eq!(v.vertex(1), Some(&[3.0f32, 4.0, 1.0][..]));
        assert_eq!(v.vertex(3), None);
        let xs: Vec<f64> = v.positions().map(|p| p.x).collect();
        assert_eq!(xs, [1.0, 3.0, 5.0]);
    }

    #[test]
    fn pathv_invalidates() {
        let mut pv = Pathv::new(Path::make_rect(Rect::new(0.0, 0.0, 4.0, 4.0), false));
        assert!(pv.cached_vertex().is_none());
        assert_eq!(pv.vertex(1.0).triangle_count(), 2);
        assert!(pv.cached_vertex().is_some());
        pv.transform(Affine::translate((1.0, 0.0)));
        assert!(pv.cached_vertex().is_none());
        let bbox = pv
            .vertex_default()
            .positions()
            .fold(Rect::new(f64::MAX, f64::MAX, f64::MIN, f64::MIN), |r, p| r.union_pt(p));
        assert_eq!(bbox, Rect::new(1.0, 0.0, 5.0, 4.0));
    }
}
