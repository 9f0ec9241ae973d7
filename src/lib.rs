// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vector path geometry for GPU rendering.
//!
//! Pathgeom stores paths as flat point and verb buffers with a running
//! content hash, and turns them into the pieces a 2D renderer draws:
//! flattened polylines, stroke outlines, dashed paths, fill triangles,
//! antialiased stroke triangles and direct meshes for rectangles, rounded
//! rectangles and their borders. A [`PathvCache`] memoizes the expensive
//! results by hash.
//!
//! All outputs are fresh values. Degenerate input gives empty output rather
//! than an error; the one fallible step, fill tessellation, reports
//! [`TessellateError`] through [`Path::try_triangles`].
//!
//! # Examples
//!
//! Stroking and filling a path:
//!
//! ```
//! use pathgeom::{Cap, Join, Path, Stroke};
//!
//! let mut path = Path::new();
//! path.move_to((10.0, 10.0));
//! path.quad_to((50.0, 90.0), (90.0, 10.0));
//!
//! let style = Stroke::new(4.0).with_join(Join::Round).with_caps(Cap::Round);
//! let outline = path.stroke_path(&style);
//! assert!(outline.is_normalized());
//!
//! let triangles = outline.triangles(1.0);
//! assert_eq!(triangles.vertex_count() % 3, 0);
//! assert!(!triangles.as_bytes().is_empty());
//! ```
//!
//! Border meshes:
//!
//! ```
//! use pathgeom::{Insets, Rect, RectOutlinePath, RoundedRectRadii};
//!
//! let frame = RectOutlinePath::make_rrect_outline(
//!     Rect::new(0.0, 0.0, 200.0, 100.0),
//!     Insets::uniform(2.0),
//!     RoundedRectRadii::from_single_radius(8.0),
//! );
//! for edge in frame.edges() {
//!     assert!(!edge.cached_vertex().unwrap().is_empty());
//! }
//! ```
//!
//! # Features
//!
//! - `serde`: `Serialize` and `Deserialize` for the value types.
//! - `mint`: conversions to and from [`mint`] types.
//!
//! [`mint`]: https://docs.rs/mint

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![allow(
    clippy::unreadable_literal,
    clippy::many_single_char_names,
    clippy::excessive_precision
)]
// The following lints are part of the Linebender standard set,
// but resolving them has been deferred for now.
#![allow(
    clippy::cast_possible_truncation,
    clippy::exhaustive_enums,
    clippy::match_same_arms,
    clippy::missing_assert_message,
    clippy::return_self_not_must_use,
    clippy::use_self,
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason
)]

extern crate alloc;

mod aa_fuzz;
mod affine;
mod cache;
mod cubicbez;
mod dash;
mod flatten;
mod hash;
mod insets;
mod param_curve;
mod path;
mod point;
mod quadbez;
mod rect;
mod rect_path;
mod rounded_rect_radii;
mod size;
mod stroke;
mod tessellate;
mod vec2;
mod vertex;

pub use crate::aa_fuzz::*;
pub use crate::affine::*;
pub use crate::cache::*;
pub use crate::cubicbez::*;
pub use crate::dash::*;
pub use crate::hash::*;
pub use crate::insets::*;
pub use crate::param_curve::*;
pub use crate::path::*;
pub use crate::point::*;
pub use crate::quadbez::*;
pub use crate::rect::*;
pub use crate::rect_path::*;
pub use crate::rounded_rect_radii::*;
pub use crate::size::*;
pub use crate::stroke::*;
pub use crate::tessellate::*;
pub use crate::vec2::*;
pub use crate::vertex::*;

/// Default flattening quality.
///
/// Sample counts grow with `sqrt(sqrt(area * epsilon))`, so larger values
/// give finer polylines.
pub const DEFAULT_EPSILON: f64 = 1.0;
