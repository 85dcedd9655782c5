// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inkgrid Scene: layered shapes on a character canvas with fast picking.
//!
//! Inkgrid Scene is the object model and hit-testing core of an ASCII vector-art editor.
//!
//! - [`Scene`] owns an ordered stack of [`Layer`]s and the objects on them.
//! - Objects are addressed by generational [`ObjectId`]s that go stale on removal.
//! - A [`SpatialIndex`] answers "what is under the cursor" and "what is inside
//!   this marquee" from a quadtree rebuilt lazily after edits.
//!
//! ## Picking model
//!
//! Paint order is layer index first, then position within the layer; the last
//! painted object is topmost. A point query gathers quadtree candidates whose
//! bounding boxes contain the point, keeps those whose exact geometry contains it,
//! and returns the topmost. Hidden or locked layers and objects never appear in
//! query results.
//!
//! Every edit marks the index dirty instead of patching it. The next query
//! rebuilds once, rooted over the canvas padded by [`IndexConfig::margin`] cells.
//!
//! ## Example
//!
//! ```rust
//! use inkgrid_scene::{CanvasSize, Scene};
//! use inkgrid_shapes::{Line, Rectangle};
//!
//! let mut scene = Scene::new(CanvasSize::new(80, 24));
//! let boxed = scene.add_object(0, Rectangle::new(0.0, 0.0, 10.0, 10.0)).unwrap();
//! let overlay = scene.add_layer("annotations");
//! let line = scene.add_object(overlay, Line::new(0.0, 5.0, 30.0, 5.0)).unwrap();
//!
//! // The line is on a higher layer, so it wins where both are hit.
//! assert_eq!(scene.find_object_at(4.0, 5.0), Some(line));
//! assert_eq!(scene.find_object_at(4.0, 1.0), Some(boxed));
//!
//! // Locking the overlay makes it transparent to picks.
//! scene.set_layer_locked(overlay, true).unwrap();
//! assert_eq!(scene.find_object_at(4.0, 5.0), Some(boxed));
//! assert_eq!(scene.spatial_index().rebuild_count(), 2);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events: `debug` for rebuilds and structural edits,
//! `trace` for invalidations and skipped stale entries. It never installs a subscriber.

mod arena;
mod error;
mod index;
mod layer;
mod scene;
mod types;

pub use arena::{Object, ObjectArena};
pub use error::SceneError;
pub use index::{IndexConfig, Placement, SpatialIndex, SpatialIndexGeneric};
pub use layer::{Layer, SceneSnapshot};
pub use scene::{Scene, SnapHit};
pub use types::{CanvasSize, LayerFlags, ObjectFlags, ObjectId};
