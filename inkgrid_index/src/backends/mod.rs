// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `quadtree`: region quadtree with midline catch-alls and split-on-overflow.
//! - `flatvec`: flat vector with linear scans (small, simple, exact reference).

pub mod flatvec;
pub mod quadtree;

pub use quadtree::{QuadTree, QuadTreeConfig};
