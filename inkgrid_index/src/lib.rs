// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inkgrid Index: character-grid AABBs and a self-splitting quadtree.
//!
//! Inkgrid Index is the spatial building block of the Inkgrid editor core.
//!
//! - [`Aabb`] is a value type in cell units with half-open point containment.
//! - [`QuadTree`] partitions AABB-bounded entries and answers point and region queries.
//! - [`FlatVec`] answers the same queries with linear scans.
//!
//! Both implement [`Backend`], so callers such as a scene coordinator can swap the
//! spatial strategy without API churn. Entries are keyed by a small `Copy` owner
//! handle; the index never owns the objects it describes.
//!
//! # Example
//!
//! ```rust
//! use inkgrid_index::{Aabb, Backend, FlatVec, QuadTree, QuadTreeConfig};
//!
//! let root = Aabb::new(-100.0, -100.0, 300.0, 300.0);
//! let mut tree = QuadTree::new(root, QuadTreeConfig { max_objects: 1, max_levels: 4 });
//! tree.insert(1_u32, Aabb::new(0.0, 0.0, 10.0, 10.0));
//! tree.insert(2_u32, Aabb::new(20.0, 20.0, 5.0, 5.0));
//!
//! assert_eq!(tree.query_point(22.0, 22.0), [2]);
//! assert_eq!(tree.query_region(Aabb::new(0.0, 0.0, 30.0, 30.0)).len(), 2);
//!
//! // The same queries through the brute-force backend.
//! let mut flat = FlatVec::new();
//! flat.insert(1_u32, Aabb::new(0.0, 0.0, 10.0, 10.0));
//! assert_eq!(flat.query_point(5.0, 5.0).collect::<Vec<_>>(), [1]);
//! ```
//!
//! ### Float semantics
//!
//! Coordinates are `f64`. [`Aabb::new`] replaces NaN and infinite origins with `0`
//! and clamps negative or non-finite extents to `0`, so malformed geometry becomes
//! a degenerate box rather than an error.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod types;

pub use backend::Backend;
pub use backends::flatvec::FlatVec;
pub use backends::quadtree::{QuadTree, QuadTreeConfig};
pub use types::Aabb;
