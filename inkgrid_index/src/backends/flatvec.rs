// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets
//! and as a brute-force reference for the quadtree.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Aabb;

/// Flat vector backend with linear scans.
#[derive(Clone)]
pub struct FlatVec<P: Copy + PartialEq + Debug> {
    entries: Vec<(P, Aabb)>,
}

impl<P: Copy + PartialEq + Debug> FlatVec<P> {
    /// Create an empty backend.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Iterate all entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (P, Aabb)> + '_ {
        self.entries.iter().copied()
    }
}

impl<P: Copy + PartialEq + Debug> Default for FlatVec<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy + PartialEq + Debug> Debug for FlatVec<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("entries", &self.entries.len())
            .finish_non_exhaustive()
    }
}

impl<P: Copy + PartialEq + Debug> Backend<P> for FlatVec<P> {
    fn reset(&mut self, _bounds: Aabb) {
        self.entries.clear();
    }
    fn insert(&mut self, owner: P, bounds: Aabb) {
        self.entries.push((owner, bounds));
    }
    fn remove(&mut self, owner: P) -> bool {
        match self.entries.iter().position(|(o, _)| *o == owner) {
            Some(pos) => {
                self.entries.remove(pos);
                true
            }
            None => false,
        }
    }
    fn clear(&mut self) {
        self.entries.clear();
    }
    fn len(&self) -> usize {
        self.entries.len()
    }
    fn query_point<'a>(&'a self, x: f64, y: f64) -> Box<dyn Iterator<Item = P> + 'a> {
        Box::new(
            self.entries
                .iter()
                .filter(move |(_, a)| a.contains_point(x, y))
                .map(|(o, _)| *o),
        )
    }
    fn query_region<'a>(&'a self, region: Aabb) -> Box<dyn Iterator<Item = P> + 'a> {
        Box::new(
            self.entries
                .iter()
                .filter(move |(_, a)| a.intersects(&region))
                .map(|(o, _)| *o),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_takes_first_match_only() {
        let mut flat: FlatVec<u32> = FlatVec::new();
        flat.insert(1, Aabb::new(0.0, 0.0, 1.0, 1.0));
        flat.insert(1, Aabb::new(5.0, 5.0, 1.0, 1.0));
        assert!(flat.remove(1));
        assert_eq!(flat.len(), 1);
        assert_eq!(flat.query_point(5.5, 5.5).count(), 1);
        assert!(flat.remove(1));
        assert!(!flat.remove(1));
        assert!(flat.is_empty());
    }
}
