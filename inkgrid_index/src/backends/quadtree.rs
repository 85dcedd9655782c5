// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Region quadtree over AABB-bounded entries.
//!
//! Each node owns a list of entries and, once split, four equal child quadrants
//! in NW, NE, SW, SE order. An entry lives at the shallowest node where exactly
//! one child quadrant fully contains it; entries straddling a node's midlines
//! stay at that node as catch-alls.
//!
//! A leaf splits when it holds more than `max_objects` entries and sits above
//! `max_levels`. Nodes never merge back, even when removals empty them.
//!
//! Queries prune on node bounds but then descend into every child of a matching
//! node, not only the geometrically matching quadrant. Results are candidates:
//! callers still run exact shape containment.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Aabb;

/// Split thresholds for a [`QuadTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QuadTreeConfig {
    /// Entries a leaf may hold before it tries to split.
    pub max_objects: usize,
    /// Deepest level at which nodes may still split. The root is level `0`.
    pub max_levels: usize,
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            max_objects: 10,
            max_levels: 5,
        }
    }
}

/// Quadrant order used for child storage and traversal.
const NW: usize = 0;
const NE: usize = 1;
const SW: usize = 2;
const SE: usize = 3;

#[derive(Clone)]
struct Node<P> {
    bounds: Aabb,
    level: usize,
    entries: Vec<(P, Aabb)>,
    children: Option<Box<[Node<P>; 4]>>,
}

impl<P: Copy + PartialEq> Node<P> {
    fn new(bounds: Aabb, level: usize) -> Self {
        Self {
            bounds,
            level,
            entries: Vec::new(),
            children: None,
        }
    }

    /// The one quadrant `b` overlaps relative to this node's midpoint, if any.
    fn single_quadrant(&self, b: &Aabb) -> Option<usize> {
        let (mid_x, mid_y) = self.bounds.center();
        let top = b.y < mid_y;
        let bottom = b.bottom() > mid_y;
        let left = b.x < mid_x;
        let right = b.right() > mid_x;
        match (top, bottom, left, right) {
            (true, false, true, false) => Some(NW),
            (true, false, false, true) => Some(NE),
            (false, true, true, false) => Some(SW),
            (false, true, false, true) => Some(SE),
            _ => None,
        }
    }

    /// Child that fully contains `b`. `None` for leaves and straddling boxes.
    fn child_for(&self, b: &Aabb) -> Option<usize> {
        let children = self.children.as_ref()?;
        let idx = self.single_quadrant(b)?;
        children[idx].bounds.contains(b).then_some(idx)
    }

    fn child_mut(&mut self, idx: usize) -> Option<&mut Self> {
        self.children.as_mut().map(|c| &mut c[idx])
    }

    fn insert(&mut self, owner: P, bounds: Aabb, config: &QuadTreeConfig) {
        if let Some(idx) = self.child_for(&bounds)
            && let Some(child) = self.child_mut(idx)
        {
            child.insert(owner, bounds, config);
            return;
        }
        self.entries.push((owner, bounds));
        if self.children.is_none()
            && self.entries.len() > config.max_objects
            && self.level < config.max_levels
        {
            self.split(config);
        }
    }

    fn split(&mut self, config: &QuadTreeConfig) {
        let Aabb {
            x,
            y,
            width,
            height,
        } = self.bounds;
        let half_w = width * 0.5;
        let half_h = height * 0.5;
        let level = self.level + 1;
        self.children = Some(Box::new([
            Self::new(Aabb::new(x, y, half_w, half_h), level),
            Self::new(Aabb::new(x + half_w, y, half_w, half_h), level),
            Self::new(Aabb::new(x, y + half_h, half_w, half_h), level),
            Self::new(Aabb::new(x + half_w, y + half_h, half_w, half_h), level),
        ]));

        let entries = core::mem::take(&mut self.entries);
        for (owner, bounds) in entries {
            match self.child_for(&bounds) {
                Some(idx) => {
                    if let Some(child) = self.child_mut(idx) {
                        child.insert(owner, bounds, config);
                    }
                }
                None => self.entries.push((owner, bounds)),
            }
        }
    }

    fn remove(&mut self, owner: P) -> bool {
        if let Some(pos) = self.entries.iter().position(|(o, _)| *o == owner) {
            self.entries.remove(pos);
            return true;
        }
        match self.children.as_mut() {
            Some(children) => children.iter_mut().any(|c| c.remove(owner)),
            None => false,
        }
    }

    fn query_point(&self, x: f64, y: f64, out: &mut Vec<P>) {
        if !self.bounds.contains_point(x, y) {
            return;
        }
        out.extend(
            self.entries
                .iter()
                .filter(|(_, b)| b.contains_point(x, y))
                .map(|(o, _)| *o),
        );
        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.query_point(x, y, out);
            }
        }
    }

    fn query_region(&self, region: &Aabb, out: &mut Vec<P>) {
        if !self.bounds.intersects(region) {
            return;
        }
        out.extend(
            self.entries
                .iter()
                .filter(|(_, b)| b.intersects(region))
                .map(|(o, _)| *o),
        );
        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.query_region(region, out);
            }
        }
    }

    fn collect(&self, out: &mut Vec<(P, Aabb)>) {
        out.extend(self.entries.iter().copied());
        if let Some(children) = self.children.as_ref() {
            for child in children.iter() {
                child.collect(out);
            }
        }
    }

    fn level_of(&self, owner: P) -> Option<usize> {
        if self.entries.iter().any(|(o, _)| *o == owner) {
            return Some(self.level);
        }
        self.children
            .as_ref()
            .and_then(|children| children.iter().find_map(|c| c.level_of(owner)))
    }

    fn depth(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |children| children.iter().map(Self::depth).max().unwrap_or(0))
    }

    fn node_count(&self) -> usize {
        1 + self
            .children
            .as_ref()
            .map_or(0, |children| children.iter().map(Self::node_count).sum())
    }
}

/// A region quadtree keyed by `Copy` owner handles.
///
/// # Example
///
/// ```
/// use inkgrid_index::{Aabb, QuadTree, QuadTreeConfig};
///
/// let config = QuadTreeConfig { max_objects: 1, max_levels: 4 };
/// let mut tree = QuadTree::new(Aabb::new(-100.0, -100.0, 300.0, 300.0), config);
/// tree.insert(1_u32, Aabb::new(0.0, 0.0, 10.0, 10.0));
/// tree.insert(2_u32, Aabb::new(5.0, 5.0, 10.0, 10.0));
///
/// let mut hits = tree.query_point(7.0, 7.0);
/// hits.sort();
/// assert_eq!(hits, [1, 2]);
/// ```
#[derive(Clone)]
pub struct QuadTree<P> {
    root: Node<P>,
    config: QuadTreeConfig,
    len: usize,
}

impl<P: Copy + PartialEq + Debug> QuadTree<P> {
    /// Create an empty tree rooted at `bounds`.
    pub fn new(bounds: Aabb, config: QuadTreeConfig) -> Self {
        Self {
            root: Node::new(bounds, 0),
            config,
            len: 0,
        }
    }

    /// Root bounds.
    pub fn bounds(&self) -> Aabb {
        self.root.bounds
    }

    /// Split thresholds in use.
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// Insert an entry. Entries outside the root stay at the root.
    pub fn insert(&mut self, owner: P, bounds: Aabb) {
        self.root.insert(owner, bounds, &self.config);
        self.len += 1;
    }

    /// Remove the first entry (pre-order, NW→NE→SW→SE) owned by `owner`.
    ///
    /// Returns `false` if no such entry exists. Emptied nodes are kept.
    pub fn remove(&mut self, owner: P) -> bool {
        let removed = self.root.remove(owner);
        if removed {
            self.len -= 1;
        }
        removed
    }

    /// Drop every entry and every child node.
    pub fn clear(&mut self) {
        self.root = Node::new(self.root.bounds, 0);
        self.len = 0;
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if the tree stores no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Owners whose bounds contain the point.
    pub fn query_point(&self, x: f64, y: f64) -> Vec<P> {
        let mut out = Vec::new();
        self.root.query_point(x, y, &mut out);
        out
    }

    /// Owners whose bounds intersect `region`. May include catch-all entries
    /// that only touch the region's edge; callers re-filter.
    pub fn query_region(&self, region: Aabb) -> Vec<P> {
        let mut out = Vec::new();
        self.root.query_region(&region, &mut out);
        out
    }

    /// Every stored entry, depth-first in NW→NE→SW→SE order.
    pub fn iter(&self) -> impl Iterator<Item = (P, Aabb)> + '_ {
        let mut out = Vec::with_capacity(self.len);
        self.root.collect(&mut out);
        out.into_iter()
    }

    /// Level of the node holding `owner`, if stored.
    pub fn level_of(&self, owner: P) -> Option<usize> {
        self.root.level_of(owner)
    }

    /// Number of levels currently allocated (a lone root is `1`).
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of allocated nodes, including emptied ones.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }
}

impl<P: Copy + PartialEq + Debug> Default for QuadTree<P> {
    fn default() -> Self {
        Self::new(Aabb::ZERO, QuadTreeConfig::default())
    }
}

impl<P: Copy + PartialEq + Debug> Debug for QuadTree<P> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("QuadTree")
            .field("bounds", &self.root.bounds)
            .field("config", &self.config)
            .field("entries", &self.len)
            .field("nodes", &self.node_count())
            .field("depth", &self.depth())
            .finish_non_exhaustive()
    }
}

impl<P: Copy + PartialEq + Debug> Backend<P> for QuadTree<P> {
    fn reset(&mut self, bounds: Aabb) {
        self.root = Node::new(bounds, 0);
        self.len = 0;
    }
    fn insert(&mut self, owner: P, bounds: Aabb) {
        Self::insert(self, owner, bounds);
    }
    fn remove(&mut self, owner: P) -> bool {
        Self::remove(self, owner)
    }
    fn clear(&mut self) {
        Self::clear(self);
    }
    fn len(&self) -> usize {
        self.len
    }
    fn depth(&self) -> usize {
        Self::depth(self)
    }
    fn query_point<'a>(&'a self, x: f64, y: f64) -> Box<dyn Iterator<Item = P> + 'a> {
        Box::new(Self::query_point(self, x, y).into_iter())
    }
    fn query_region<'a>(&'a self, region: Aabb) -> Box<dyn Iterator<Item = P> + 'a> {
        Box::new(Self::query_region(self, region).into_iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::flatvec::FlatVec;
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn root() -> Aabb {
        Aabb::new(-100.0, -100.0, 300.0, 300.0)
    }

    fn tight() -> QuadTreeConfig {
        QuadTreeConfig {
            max_objects: 1,
            max_levels: 4,
        }
    }

    fn sorted(mut v: Vec<u32>) -> Vec<u32> {
        v.sort_unstable();
        v
    }

    fn random_boxes(rng: &mut StdRng, n: usize) -> Vec<Aabb> {
        (0..n)
            .map(|_| {
                Aabb::new(
                    rng.random_range(-90.0..180.0),
                    rng.random_range(-90.0..180.0),
                    rng.random_range(0.0..25.0),
                    rng.random_range(0.0..25.0),
                )
            })
            .collect()
    }

    #[test]
    fn three_rectangle_scenario() {
        let mut tree = QuadTree::new(root(), tight());
        tree.insert(0_u32, Aabb::new(0.0, 0.0, 10.0, 10.0));
        tree.insert(1, Aabb::new(5.0, 5.0, 10.0, 10.0));
        tree.insert(2, Aabb::new(20.0, 20.0, 5.0, 5.0));

        assert_eq!(sorted(tree.query_point(7.0, 7.0)), vec![0, 1]);
        assert_eq!(sorted(tree.query_point(22.0, 22.0)), vec![2]);
        assert_eq!(
            sorted(tree.query_region(Aabb::new(0.0, 0.0, 30.0, 30.0))),
            vec![0, 1, 2]
        );
        assert!(tree.query_point(-50.0, -50.0).is_empty());
    }

    #[test]
    fn split_moves_contained_entries_down_and_keeps_straddlers() {
        let mut tree = QuadTree::new(Aabb::new(0.0, 0.0, 100.0, 100.0), tight());
        tree.insert(1_u32, Aabb::new(10.0, 10.0, 5.0, 5.0));
        assert_eq!(tree.node_count(), 1, "a single entry does not split");

        tree.insert(2, Aabb::new(45.0, 45.0, 10.0, 10.0));
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.level_of(2), Some(0), "straddles both midlines");
        assert!(tree.level_of(1).is_some_and(|l| l >= 1));

        tree.insert(3, Aabb::new(70.0, 10.0, 5.0, 5.0));
        assert_eq!(tree.level_of(3), Some(1), "NE child is a leaf under capacity");
    }

    #[test]
    fn split_stops_at_max_levels() {
        let config = QuadTreeConfig {
            max_objects: 1,
            max_levels: 2,
        };
        let mut tree = QuadTree::new(Aabb::new(0.0, 0.0, 64.0, 64.0), config);
        for i in 0..8_u32 {
            tree.insert(i, Aabb::new(1.0, 1.0, 1.0, 1.0));
        }
        assert_eq!(tree.depth(), 3);
        assert_eq!(tree.len(), 8);
        assert_eq!(tree.query_point(1.5, 1.5).len(), 8);
    }

    #[test]
    fn out_of_root_entries_are_absorbed() {
        let mut tree = QuadTree::new(Aabb::new(0.0, 0.0, 100.0, 100.0), tight());
        tree.insert(1_u32, Aabb::new(10.0, 10.0, 5.0, 5.0));
        tree.insert(2, Aabb::new(150.0, 10.0, 5.0, 5.0));
        tree.insert(3, Aabb::new(60.0, 10.0, 5.0, 5.0));
        assert_eq!(tree.len(), 3);
        assert_eq!(tree.level_of(2), Some(0));
        assert!(tree.query_point(152.0, 12.0).is_empty(), "pruned by root bounds");
        assert!(tree.remove(2));
    }

    #[test]
    fn point_query_matches_brute_force() {
        let mut rng = StdRng::seed_from_u64(0x5EED_CAFE);
        let boxes = random_boxes(&mut rng, 400);
        let mut tree = QuadTree::new(root(), QuadTreeConfig::default());
        let mut flat = FlatVec::new();
        for (i, b) in boxes.iter().enumerate() {
            let id = u32::try_from(i).unwrap();
            tree.insert(id, *b);
            flat.insert(id, *b);
        }
        assert!(tree.depth() > 1);
        for _ in 0..500 {
            let x = rng.random_range(-100.0..200.0);
            let y = rng.random_range(-100.0..200.0);
            let expected = sorted(Backend::query_point(&flat, x, y).collect());
            assert_eq!(sorted(tree.query_point(x, y)), expected, "point ({x}, {y})");
        }
        // Exact cell corners hit the half-open edges.
        for b in boxes.iter().take(50) {
            let expected = sorted(Backend::query_point(&flat, b.x, b.y).collect());
            assert_eq!(sorted(tree.query_point(b.x, b.y)), expected);
        }
    }

    #[test]
    fn region_query_never_under_reports() {
        let mut rng = StdRng::seed_from_u64(42);
        let boxes = random_boxes(&mut rng, 300);
        let mut tree = QuadTree::new(root(), tight());
        for (i, b) in boxes.iter().enumerate() {
            tree.insert(u32::try_from(i).unwrap(), *b);
        }
        for _ in 0..200 {
            let region = Aabb::from_corners(
                rng.random_range(-100.0..200.0),
                rng.random_range(-100.0..200.0),
                rng.random_range(-100.0..200.0),
                rng.random_range(-100.0..200.0),
            );
            let got = tree.query_region(region);
            for (i, b) in boxes.iter().enumerate() {
                if b.intersects(&region) {
                    assert!(got.contains(&u32::try_from(i).unwrap()), "missed {b:?}");
                }
            }
        }
    }

    #[test]
    fn insert_then_remove_leaves_enumeration_unchanged() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut tree = QuadTree::new(root(), tight());
        for (i, b) in random_boxes(&mut rng, 60).into_iter().enumerate() {
            tree.insert(u32::try_from(i).unwrap(), b);
        }
        let mut before: Vec<_> = tree.iter().map(|(o, _)| o).collect();
        before.sort_unstable();

        tree.insert(1000, Aabb::new(12.0, 40.0, 3.0, 3.0));
        assert!(tree.remove(1000));

        let mut after: Vec<_> = tree.iter().map(|(o, _)| o).collect();
        after.sort_unstable();
        assert_eq!(before, after);
        assert!(!tree.remove(1000), "second remove is a no-op");
    }

    #[test]
    fn emptied_nodes_are_not_merged() {
        let mut tree = QuadTree::new(root(), tight());
        tree.insert(1_u32, Aabb::new(0.0, 0.0, 1.0, 1.0));
        tree.insert(2, Aabb::new(120.0, 120.0, 1.0, 1.0));
        let nodes = tree.node_count();
        assert!(nodes > 1);
        assert!(tree.remove(1));
        assert!(tree.remove(2));
        assert!(tree.is_empty());
        assert_eq!(tree.node_count(), nodes);

        tree.clear();
        assert_eq!(tree.node_count(), 1);
    }

    #[test]
    fn reset_reroots() {
        let mut tree: QuadTree<u32> = QuadTree::default();
        Backend::reset(&mut tree, Aabb::new(0.0, 0.0, 50.0, 50.0));
        tree.insert(9, Aabb::new(49.0, 49.0, 1.0, 1.0));
        assert_eq!(tree.bounds(), Aabb::new(0.0, 0.0, 50.0, 50.0));
        assert_eq!(tree.query_point(49.5, 49.5), vec![9]);
    }
}
