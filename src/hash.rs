// Copyright 2026 the Pathgeom Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Streaming identity hash for path contents.

use core::hash::Hasher;

use crate::Point;

/// A streaming djb2-style hash over path coordinates.
///
/// The hash is a pure function of the words fed to it: two paths built by
/// the same command sequence always hash equal. It is used as a cache key,
/// not for security.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathHash(u64);

impl PathHash {
    const SEED: u64 = 5381;

    /// A hash with no input.
    #[inline]
    pub const fn new() -> Self {
        PathHash(Self::SEED)
    }

    /// Mix one 64-bit word.
    #[inline]
    pub fn mix(&mut self, word: u64) {
        self.0 = (self.0 << 5).wrapping_add(self.0).wrapping_add(word);
    }

    /// Mix the bit patterns of a point's coordinates.
    #[inline]
    pub fn mix_point(&mut self, p: Point) {
        self.mix(p.x.to_bits());
        self.mix(p.y.to_bits());
    }

    /// Mix an `f64` by bit pattern.
    #[inline]
    pub fn mix_f64(&mut self, v: f64) {
        self.mix(v.to_bits());
    }

    /// The current value.
    #[inline]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Combine two finished hashes into one key.
    #[inline]
    #[must_use]
    pub fn combine(self, other: u64) -> Self {
        let mut h = self;
        h.mix(other);
        h
    }
}

impl Default for PathHash {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for PathHash {
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for b in bytes {
            self.mix(u64::from(*b));
        }
    }

    fn write_u64(&mut self, i: u64) {
        self.mix(i);
    }
}
