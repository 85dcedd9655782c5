// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial indexing implementations.

use alloc::boxed::Box;
use core::fmt::Debug;

use crate::types::Aabb;

/// Spatial backend abstraction.
///
/// Entries are `(owner, bounds)` pairs where `owner` is a small `Copy` handle
/// into data the backend does not own. Queries return candidate owners whose
/// bounds match; callers refine them with exact geometry.
pub trait Backend<P: Copy + PartialEq + Debug> {
    /// Drop all entries and re-root the structure over `bounds`.
    fn reset(&mut self, bounds: Aabb);

    /// Insert an entry.
    fn insert(&mut self, owner: P, bounds: Aabb);

    /// Remove the first entry whose owner equals `owner`. Returns `false` if absent.
    fn remove(&mut self, owner: P) -> bool;

    /// Drop all entries, keeping the current root bounds.
    fn clear(&mut self);

    /// Number of stored entries.
    fn len(&self) -> usize;

    /// True if no entries are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Levels of hierarchy in use. Flat backends report `1`.
    fn depth(&self) -> usize {
        1
    }

    /// Owners whose bounds contain the point.
    fn query_point<'a>(&'a self, x: f64, y: f64) -> Box<dyn Iterator<Item = P> + 'a>;

    /// Owners whose bounds intersect the region.
    fn query_region<'a>(&'a self, region: Aabb) -> Box<dyn Iterator<Item = P> + 'a>;
}
