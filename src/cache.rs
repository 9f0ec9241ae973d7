// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Memoization of derived geometry.

use alloc::collections::BTreeMap;
use core::mem::size_of;

use log::{debug, trace};

use crate::{
    aa_fuzz_stroke, stroke, Cap, Insets, Join, Path, PathHash, Point, Rect, RectOutlinePath,
    RectPath, RoundedRectRadii, Stroke, Verb, VertexData, DEFAULT_EPSILON,
};

#[derive(Clone, Debug, Default)]
struct Maps {
    normalized: BTreeMap<u64, Path>,
    stroke: BTreeMap<u64, Path>,
    triangles: BTreeMap<u64, VertexData>,
    aa_fuzz: BTreeMap<u64, VertexData>,
    rect: BTreeMap<u64, RectPath>,
    outline: BTreeMap<u64, RectOutlinePath>,
}

/// A cache of normalized paths, stroke outlines, triangle buffers and rect
/// meshes.
///
/// Entries are keyed by the source path's content hash, mixed with the
/// parameters that shape the result, and are computed at
/// [`DEFAULT_EPSILON`]. The cache tracks the approximate heap size of what it
/// holds; when an insertion would push it past `max_capacity`, every entry
/// is dropped first.
///
/// ```
/// use pathgeom::{Path, PathvCache, Point};
///
/// let mut cache = PathvCache::new(1 << 20);
/// let circle = Path::make_circle(Point::new(0.0, 0.0), 10.0, false);
/// let n = cache.get_path_triangles(&circle).triangle_count();
/// assert!(n > 0);
/// assert_eq!(cache.len(), 1);
/// assert_eq!(cache.get_path_triangles(&circle).triangle_count(), n);
/// assert_eq!(cache.len(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct PathvCache {
    maps: Maps,
    capacity: usize,
    max_capacity: usize,
}

impl Default for PathvCache {
    fn default() -> Self {
        PathvCache::new(PathvCache::DEFAULT_MAX_CAPACITY)
    }
}

impl PathvCache {
    /// Capacity used by [`PathvCache::default`], in bytes.
    pub const DEFAULT_MAX_CAPACITY: usize = 64 * 1024 * 1024;

    /// An empty cache holding up to about `max_capacity` bytes.
    pub fn new(max_capacity: usize) -> Self {
        PathvCache {
            maps: Maps::default(),
            capacity: 0,
            max_capacity,
        }
    }

    /// Approximate bytes currently held.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The configured limit in bytes.
    #[inline]
    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    /// The number of cached entries.
    pub fn len(&self) -> usize {
        let m = &self.maps;
        m.normalized.len()
            + m.stroke.len()
            + m.triangles.len()
            + m.aa_fuzz.len()
            + m.rect.len()
            + m.outline.len()
    }

    /// Whether nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.maps = Maps::default();
        self.capacity = 0;
    }

    fn memo<T>(
        &mut self,
        select: fn(&mut Maps) -> &mut BTreeMap<u64, T>,
        key: u64,
        make: impl FnOnce() -> T,
        size: fn(&T) -> usize,
    ) -> &T {
        if select(&mut self.maps).contains_key(&key) {
            return select(&mut self.maps).entry(key).or_insert_with(make);
        }
        trace!("pathv cache miss for {key:#018x}");
        let value = make();
        let bytes = size(&value);
        if self.capacity + bytes > self.max_capacity {
            debug!(
                "pathv cache full ({} + {bytes} > {} bytes), clearing",
                self.capacity, self.max_capacity
            );
            self.clear();
        }
        self.capacity += bytes;
        select(&mut self.maps).entry(key).or_insert(value)
    }

    /// `path` with curves flattened; a normalized path is returned as is.
    pub fn get_normalized_path<'a>(&'a mut self, path: &'a Path) -> &'a Path {
        if path.is_normalized() {
            return path;
        }
        self.memo(
            |m| &mut m.normalized,
            path.hash_code(),
            || path.normalized(DEFAULT_EPSILON),
            path_bytes,
        )
    }

    /// The stroke outline of `path` in `style`.
    pub fn get_stroke_path(&mut self, path: &Path, style: &Stroke) -> &Path {
        self.memo(
            |m| &mut m.stroke,
            stroke_key(path, style),
            || stroke(path, style, DEFAULT_EPSILON),
            path_bytes,
        )
    }

    /// Fill triangles for `path`.
    pub fn get_path_triangles(&mut self, path: &Path) -> &VertexData {
        self.memo(
            |m| &mut m.triangles,
            path.hash_code(),
            || path.triangles(DEFAULT_EPSILON),
            VertexData::byte_size,
        )
    }

    /// Antialiased stroke triangles for `path` with butt caps.
    pub fn get_aa_fuzz_stroke_triangles(&mut self, path: &Path, width: f64) -> &VertexData {
        let key = PathHash::new()
            .combine(path.hash_code())
            .combine(width.to_bits())
            .value();
        self.memo(
            |m| &mut m.aa_fuzz,
            key,
            || aa_fuzz_stroke(path, &Stroke::new(width), DEFAULT_EPSILON),
            VertexData::byte_size,
        )
    }

    /// The two-triangle mesh of `rect`.
    pub fn get_rect_path(&mut self, rect: Rect) -> &RectPath {
        self.memo(
            |m| &mut m.rect,
            rect_hash(rect).value(),
            || RectPath::make_rect(rect),
            |r| r.pathv.byte_size(),
        )
    }

    /// The fan mesh of a rounded rectangle.
    pub fn get_rrect_path(&mut self, rect: Rect, radii: RoundedRectRadii) -> &RectPath {
        let mut hash = rect_hash(rect);
        mix_all(&mut hash, radii.as_array());
        self.memo(
            |m| &mut m.rect,
            hash.value(),
            || RectPath::make_rrect(rect, radii),
            |r| r.pathv.byte_size(),
        )
    }

    /// A square-cornered border frame.
    pub fn get_rect_outline_path(&mut self, rect: Rect, border: Insets) -> &RectOutlinePath {
        let mut hash = rect_hash(rect);
        mix_all(&mut hash, insets_array(border));
        self.memo(
            |m| &mut m.outline,
            hash.value(),
            || RectOutlinePath::make_rect_outline(rect, border),
            outline_bytes,
        )
    }

    /// A rounded border frame.
    pub fn get_rrect_outline_path(
        &mut self,
        rect: Rect,
        border: Insets,
        radii: RoundedRectRadii,
    ) -> &RectOutlinePath {
        let mut hash = rect_hash(rect);
        mix_all(&mut hash, insets_array(border));
        mix_all(&mut hash, radii.as_array());
        self.memo(
            |m| &mut m.outline,
            hash.value(),
            || RectOutlinePath::make_rrect_outline(rect, border, radii),
            outline_bytes,
        )
    }
}

fn path_bytes(path: &Path) -> usize {
    path.points().len() * size_of::<Point>() + path.verbs().len() * size_of::<Verb>()
}

fn outline_bytes(outline: &RectOutlinePath) -> usize {
    outline.edges().iter().map(|e| e.byte_size()).sum()
}

fn stroke_key(path: &Path, style: &Stroke) -> u64 {
    let cap = |c: Cap| -> u64 {
        match c {
            Cap::Butt => 0,
            Cap::Square => 1,
            Cap::Round => 2,
        }
    };
    let join: u64 = match style.join {
        Join::Bevel => 0,
        Join::Miter => 1,
        Join::Round => 2,
    };
    let mut hash = PathHash::new();
    hash.mix(path.hash_code());
    hash.mix_f64(style.width);
    hash.mix_f64(style.effective_miter_limit());
    hash.mix((cap(style.start_cap) << 4) | (cap(style.end_cap) << 2) | join);
    hash.mix_f64(style.dash_offset);
    mix_all(&mut hash, style.dash_pattern.iter().copied());
    hash.value()
}

fn rect_hash(rect: Rect) -> PathHash {
    let mut hash = PathHash::new();
    mix_all(&mut hash, [rect.x0, rect.y0, rect.x1, rect.y1]);
    hash
}

fn insets_array(i: Insets) -> [f64; 4] {
    [i.x0, i.y0, i.x1, i.y1]
}

fn mix_all(hash: &mut PathHash, values: impl IntoIterator<Item = f64>) {
    for v in values {
        hash.mix_f64(v);
    }
}
