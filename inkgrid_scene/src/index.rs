// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The spatial-index coordinator: dirty tracking, lazy rebuild, topmost-hit resolution.

use core::fmt::Debug;

use inkgrid_index::{Aabb, Backend, QuadTree, QuadTreeConfig};
use inkgrid_shapes::Geometry;
use tracing::{debug, trace};

use crate::layer::SceneSnapshot;
use crate::types::{CanvasSize, ObjectId};

/// An index entry: the object plus where it sat in paint order at rebuild time.
///
/// Placements order by `(layer, order)`; the greatest one is drawn on top.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// Object the entry refers to.
    pub id: ObjectId,
    /// Layer index, bottom is `0`.
    pub layer: usize,
    /// Position within the layer, bottom is `0`.
    pub order: usize,
}

impl Placement {
    /// Paint-order key.
    pub fn z_key(&self) -> (usize, usize) {
        (self.layer, self.order)
    }
}

/// Half-size of the box searched around a pick point. Outline tolerances reach
/// up to [`LINE_TOLERANCE`](inkgrid_shapes::consts::LINE_TOLERANCE) past a
/// shape's bounds, so candidates within that distance must still come back
/// from the backend.
const PICK_REACH: f64 = 2.0;

/// Tuning for [`SpatialIndexGeneric`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IndexConfig {
    /// Node capacity and depth limit of the quadtree.
    pub tree: QuadTreeConfig,
    /// Cells added on every side of the canvas to form the root bounds, so
    /// shapes dragged slightly off-canvas stay partitioned.
    pub margin: f64,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            tree: QuadTreeConfig::default(),
            margin: 100.0,
        }
    }
}

/// Keeps a spatial backend in sync with a scene and answers pick queries.
///
/// Mutations only call [`invalidate`](Self::invalidate); the rebuild happens on
/// the next query, so a burst of edits costs one rebuild. Queries take the
/// current [`SceneSnapshot`] because the backend stores ids, not objects.
pub struct SpatialIndexGeneric<B: Backend<Placement>> {
    backend: B,
    config: IndexConfig,
    canvas: CanvasSize,
    dirty: bool,
    rebuilds: u64,
}

/// The coordinator over the quadtree backend.
pub type SpatialIndex = SpatialIndexGeneric<QuadTree<Placement>>;

impl<B: Backend<Placement> + Debug> Debug for SpatialIndexGeneric<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("canvas", &self.canvas)
            .field("dirty", &self.dirty)
            .field("rebuilds", &self.rebuilds)
            .field("entries", &self.backend.len())
            .field("backend", &self.backend)
            .finish_non_exhaustive()
    }
}

impl SpatialIndex {
    /// Coordinator over a quadtree configured by `config`.
    pub fn new(canvas: CanvasSize, config: IndexConfig) -> Self {
        let root = root_bounds(canvas, config.margin);
        Self::with_backend(QuadTree::new(root, config.tree), canvas, config)
    }
}

impl Default for SpatialIndex {
    fn default() -> Self {
        Self::new(CanvasSize::default(), IndexConfig::default())
    }
}

fn root_bounds(canvas: CanvasSize, margin: f64) -> Aabb {
    let margin = if margin.is_finite() { margin.max(0.0) } else { 0.0 };
    Aabb::new(
        -margin,
        -margin,
        f64::from(canvas.width) + margin * 2.0,
        f64::from(canvas.height) + margin * 2.0,
    )
}

impl<B: Backend<Placement>> SpatialIndexGeneric<B> {
    /// Coordinator over an arbitrary backend. It starts dirty.
    pub fn with_backend(backend: B, canvas: CanvasSize, config: IndexConfig) -> Self {
        Self {
            backend,
            config,
            canvas,
            dirty: true,
            rebuilds: 0,
        }
    }

    /// Mark the index stale. Idempotent; the next query rebuilds.
    pub fn invalidate(&mut self) {
        if !self.dirty {
            trace!("spatial index invalidated");
        }
        self.dirty = true;
    }

    /// Whether the next query will rebuild.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// How many rebuilds have run since construction.
    pub fn rebuild_count(&self) -> u64 {
        self.rebuilds
    }

    /// Current canvas size.
    pub fn canvas_size(&self) -> CanvasSize {
        self.canvas
    }

    /// Active configuration.
    pub fn config(&self) -> IndexConfig {
        self.config
    }

    /// Root bounds the next rebuild will use.
    pub fn root_bounds(&self) -> Aabb {
        root_bounds(self.canvas, self.config.margin)
    }

    /// Borrow the backend, for diagnostics.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Change the canvas size. The root is re-derived on the next rebuild.
    pub fn set_canvas_size(&mut self, canvas: CanvasSize) {
        self.canvas = canvas;
        self.invalidate();
    }

    /// Re-root the backend over the padded canvas and insert every
    /// hit-testable object, then clear the dirty flag.
    pub fn rebuild(&mut self, snapshot: &SceneSnapshot<'_>) {
        self.backend.reset(self.root_bounds());
        for (layer, order, id, object) in snapshot.hit_testable() {
            self.backend
                .insert(Placement { id, layer, order }, object.shape.bounds());
        }
        self.dirty = false;
        self.rebuilds += 1;
        debug!(
            entries = self.backend.len(),
            layers = snapshot.layers().len(),
            depth = self.backend.depth(),
            rebuild = self.rebuilds,
            "spatial index rebuilt"
        );
    }

    fn ensure_fresh(&mut self, snapshot: &SceneSnapshot<'_>) {
        if self.dirty {
            self.rebuild(snapshot);
        }
    }

    /// Topmost object whose exact geometry contains `(x, y)`.
    ///
    /// Candidates come from a small box around the point, so outline tolerance
    /// past a shape's bounds still picks it.
    ///
    /// Among hits, the greatest `(layer, order)` wins: a higher layer beats any
    /// object below it, and within a layer the later object wins.
    pub fn find_object_at(&mut self, snapshot: &SceneSnapshot<'_>, x: f64, y: f64) -> Option<ObjectId> {
        self.ensure_fresh(snapshot);
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        let reach = Aabb::new(
            x - PICK_REACH,
            y - PICK_REACH,
            PICK_REACH * 2.0,
            PICK_REACH * 2.0,
        );
        let mut best: Option<Placement> = None;
        for placement in self.backend.query_region(reach) {
            let Some(object) = snapshot.object(placement.id) else {
                trace!(id = ?placement.id, "skipping stale placement");
                continue;
            };
            if !object.shape.contains_point(x, y) {
                continue;
            }
            if best.is_none_or(|b| placement.z_key() > b.z_key()) {
                best = Some(placement);
            }
        }
        best.map(|p| p.id)
    }

    /// Every object whose bounds intersect the rectangle spanned by two corners,
    /// in paint order.
    ///
    /// Corners may be given in any order. Selection is by bounding box, not exact
    /// geometry.
    pub fn find_objects_in_region(
        &mut self,
        snapshot: &SceneSnapshot<'_>,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    ) -> Vec<ObjectId> {
        self.ensure_fresh(snapshot);
        let region = Aabb::from_corners(x1, y1, x2, y2);
        let mut hits: Vec<Placement> = self
            .backend
            .query_region(region)
            .filter(|placement| match snapshot.object(placement.id) {
                Some(object) => object.shape.bounds().intersects(&region),
                None => {
                    trace!(id = ?placement.id, "skipping stale placement");
                    false
                }
            })
            .collect();
        hits.sort_unstable_by_key(Placement::z_key);
        hits.into_iter().map(|p| p.id).collect()
    }
}
