// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The editable scene: layers, objects and their spatial index.

use inkgrid_shapes::{Geometry, Shape, SnapPoint};
use kurbo::Point;
use tracing::debug;

use crate::arena::{Object, ObjectArena};
use crate::error::SceneError;
use crate::index::{IndexConfig, SpatialIndex};
use crate::layer::{Layer, SceneSnapshot};
use crate::types::{CanvasSize, LayerFlags, ObjectFlags, ObjectId};

/// A connector anchor found by [`Scene::find_snap_point`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapHit {
    /// Object owning the anchor.
    pub id: ObjectId,
    /// The anchor itself.
    pub point: SnapPoint,
    /// Distance from the query point, in cells.
    pub distance: f64,
}

/// Layers of shapes on a character canvas, with pick queries.
///
/// Every structural edit marks the spatial index dirty; the next query
/// rebuilds it once. Layers are addressed by index, bottom is `0`.
#[derive(Debug)]
pub struct Scene {
    objects: ObjectArena,
    layers: Vec<Layer>,
    index: SpatialIndex,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new(CanvasSize::default())
    }
}

impl Scene {
    /// A scene with one empty layer.
    pub fn new(canvas: CanvasSize) -> Self {
        Self::with_config(canvas, IndexConfig::default())
    }

    /// A scene with one empty layer and a tuned index.
    pub fn with_config(canvas: CanvasSize, config: IndexConfig) -> Self {
        Self {
            objects: ObjectArena::new(),
            layers: vec![Layer::new("Layer 1")],
            index: SpatialIndex::new(canvas, config),
        }
    }

    // --- layers ---

    /// Push a new layer on top; returns its index.
    pub fn add_layer(&mut self, name: impl Into<String>) -> usize {
        let layer = Layer::new(name);
        debug!(name = %layer.name, index = self.layers.len(), "layer added");
        self.layers.push(layer);
        self.index.invalidate();
        self.layers.len() - 1
    }

    /// Remove a layer and every object on it. Layers above shift down by one.
    pub fn remove_layer(&mut self, layer: usize) -> Result<Layer, SceneError> {
        if layer >= self.layers.len() {
            return Err(SceneError::UnknownLayer(layer));
        }
        if self.layers.len() == 1 {
            return Err(SceneError::LastLayer);
        }
        let removed = self.layers.remove(layer);
        for id in &removed.objects {
            self.objects.remove(*id);
        }
        debug!(name = %removed.name, index = layer, objects = removed.objects.len(), "layer removed");
        self.index.invalidate();
        Ok(removed)
    }

    /// Show or hide a layer.
    pub fn set_layer_visible(&mut self, layer: usize, visible: bool) -> Result<(), SceneError> {
        self.layer_mut(layer)?.flags.set(LayerFlags::VISIBLE, visible);
        self.index.invalidate();
        Ok(())
    }

    /// Lock or unlock a layer.
    pub fn set_layer_locked(&mut self, layer: usize, locked: bool) -> Result<(), SceneError> {
        self.layer_mut(layer)?.flags.set(LayerFlags::LOCKED, locked);
        self.index.invalidate();
        Ok(())
    }

    /// Layers, bottom to top.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    // --- objects ---

    /// Add a shape on top of `layer`.
    pub fn add_object(&mut self, layer: usize, shape: impl Into<Shape>) -> Result<ObjectId, SceneError> {
        if layer >= self.layers.len() {
            return Err(SceneError::UnknownLayer(layer));
        }
        let shape = shape.into();
        let kind = shape.kind();
        let id = self.objects.insert(Object::new(shape));
        self.layers[layer].objects.push(id);
        debug!(?id, %kind, layer, "object added");
        self.index.invalidate();
        Ok(id)
    }

    /// Remove an object, returning its shape.
    pub fn remove_object(&mut self, id: ObjectId) -> Result<Shape, SceneError> {
        let object = self.objects.remove(id).ok_or(SceneError::StaleObject(id))?;
        for layer in &mut self.layers {
            layer.objects.retain(|o| *o != id);
        }
        debug!(?id, "object removed");
        self.index.invalidate();
        Ok(object.shape)
    }

    /// Translate an object by `(dx, dy)` cells.
    pub fn move_object(&mut self, id: ObjectId, dx: f64, dy: f64) -> Result<(), SceneError> {
        self.object_mut(id)?.shape.translate(dx, dy);
        self.index.invalidate();
        Ok(())
    }

    /// Swap in new geometry (a resize or edit), returning the old shape.
    pub fn replace_shape(&mut self, id: ObjectId, shape: impl Into<Shape>) -> Result<Shape, SceneError> {
        let old = core::mem::replace(&mut self.object_mut(id)?.shape, shape.into());
        self.index.invalidate();
        Ok(old)
    }

    /// Show or hide an object.
    pub fn set_object_visible(&mut self, id: ObjectId, visible: bool) -> Result<(), SceneError> {
        self.object_mut(id)?.flags.set(ObjectFlags::VISIBLE, visible);
        self.index.invalidate();
        Ok(())
    }

    /// Lock or unlock an object.
    pub fn set_object_locked(&mut self, id: ObjectId, locked: bool) -> Result<(), SceneError> {
        self.object_mut(id)?.flags.set(ObjectFlags::LOCKED, locked);
        self.index.invalidate();
        Ok(())
    }

    /// Move an object to the top of its layer.
    pub fn bring_to_front(&mut self, id: ObjectId) -> Result<(), SceneError> {
        let (layer, pos) = self.locate(id)?;
        let objects = &mut self.layers[layer].objects;
        objects.remove(pos);
        objects.push(id);
        self.index.invalidate();
        Ok(())
    }

    /// Move an object to the bottom of its layer.
    pub fn send_to_back(&mut self, id: ObjectId) -> Result<(), SceneError> {
        let (layer, pos) = self.locate(id)?;
        let objects = &mut self.layers[layer].objects;
        objects.remove(pos);
        objects.insert(0, id);
        self.index.invalidate();
        Ok(())
    }

    /// Change the canvas size; the index root follows on the next query.
    pub fn resize_canvas(&mut self, canvas: CanvasSize) {
        debug!(width = canvas.width, height = canvas.height, "canvas resized");
        self.index.set_canvas_size(canvas);
    }

    // --- reads ---

    /// Current canvas size.
    pub fn canvas_size(&self) -> CanvasSize {
        self.index.canvas_size()
    }

    /// Geometry of a live object.
    pub fn shape(&self, id: ObjectId) -> Option<&Shape> {
        self.objects.get(id).map(|o| &o.shape)
    }

    /// Flags of a live object.
    pub fn object_flags(&self, id: ObjectId) -> Option<ObjectFlags> {
        self.objects.get(id).map(|o| o.flags)
    }

    /// Index of the layer holding a live object.
    pub fn layer_of(&self, id: ObjectId) -> Option<usize> {
        self.locate(id).ok().map(|(layer, _)| layer)
    }

    /// Number of live objects.
    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// The coordinator, for inspecting dirty state and rebuild counts.
    pub fn spatial_index(&self) -> &SpatialIndex {
        &self.index
    }

    /// Read-only view of the layers and objects.
    pub fn snapshot(&self) -> SceneSnapshot<'_> {
        SceneSnapshot::new(&self.layers, &self.objects)
    }

    /// Topmost hit-testable object at `(x, y)`.
    pub fn find_object_at(&mut self, x: f64, y: f64) -> Option<ObjectId> {
        let snapshot = SceneSnapshot::new(&self.layers, &self.objects);
        self.index.find_object_at(&snapshot, x, y)
    }

    /// Hit-testable objects whose bounds intersect the rectangle spanned by
    /// `(x1, y1)` and `(x2, y2)`, in paint order.
    pub fn find_objects_in_region(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> Vec<ObjectId> {
        let snapshot = SceneSnapshot::new(&self.layers, &self.objects);
        self.index.find_objects_in_region(&snapshot, x1, y1, x2, y2)
    }

    /// Nearest snap point within `threshold` cells of `(x, y)` on any
    /// hit-testable object. Ties go to the topmost object.
    pub fn find_snap_point(&mut self, x: f64, y: f64, threshold: f64) -> Option<SnapHit> {
        let threshold = if threshold.is_finite() { threshold.max(0.0) } else { 0.0 };
        let candidates =
            self.find_objects_in_region(x - threshold, y - threshold, x + threshold, y + threshold);
        let mut best: Option<SnapHit> = None;
        // Candidates arrive in paint order; `<=` lets later (higher) objects win ties.
        for id in candidates {
            let Some(point) = self
                .objects
                .get(id)
                .and_then(|o| o.shape.nearest_snap_point(x, y))
            else {
                continue;
            };
            let distance = point.position.distance(Point::new(x, y));
            if distance <= threshold && best.is_none_or(|b| distance <= b.distance) {
                best = Some(SnapHit { id, point, distance });
            }
        }
        best
    }

    // --- internals ---

    fn layer_mut(&mut self, layer: usize) -> Result<&mut Layer, SceneError> {
        self.layers
            .get_mut(layer)
            .ok_or(SceneError::UnknownLayer(layer))
    }

    fn object_mut(&mut self, id: ObjectId) -> Result<&mut Object, SceneError> {
        self.objects.get_mut(id).ok_or(SceneError::StaleObject(id))
    }

    /// `(layer, position)` of a live object.
    fn locate(&self, id: ObjectId) -> Result<(usize, usize), SceneError> {
        if !self.objects.is_alive(id) {
            return Err(SceneError::StaleObject(id));
        }
        self.layers
            .iter()
            .enumerate()
            .find_map(|(li, layer)| layer.position(id).map(|pos| (li, pos)))
            .ok_or(SceneError::StaleObject(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use inkgrid_shapes::{Flowchart, FlowchartKind, Rectangle, SnapSide};

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rectangle {
        Rectangle::new(x, y, w, h)
    }

    #[test]
    fn mutations_coalesce_into_one_rebuild() {
        let mut scene = Scene::default();
        let a = scene.add_object(0, rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        let b = scene.add_object(0, rect(5.0, 5.0, 10.0, 10.0)).unwrap();
        scene.move_object(a, 1.0, 0.0).unwrap();
        scene.set_object_locked(b, false).unwrap();
        assert!(scene.spatial_index().is_dirty());

        assert_eq!(scene.find_object_at(7.0, 7.0), Some(b));
        assert_eq!(scene.find_object_at(2.0, 2.0), Some(a));
        assert_eq!(scene.spatial_index().rebuild_count(), 1);

        scene.move_object(b, 20.0, 0.0).unwrap();
        assert_eq!(scene.find_object_at(7.0, 7.0), Some(a));
        assert_eq!(scene.spatial_index().rebuild_count(), 2);
    }

    #[test]
    fn z_order_edits_change_the_pick() {
        let mut scene = Scene::default();
        let a = scene.add_object(0, rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        let b = scene.add_object(0, rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(scene.find_object_at(5.0, 5.0), Some(b));
        scene.bring_to_front(a).unwrap();
        assert_eq!(scene.find_object_at(5.0, 5.0), Some(a));
        scene.send_to_back(a).unwrap();
        assert_eq!(scene.find_object_at(5.0, 5.0), Some(b));
    }

    #[test]
    fn higher_layer_wins_and_layer_flags_gate_it() {
        let mut scene = Scene::default();
        let top_layer = scene.add_layer("top");
        let top = scene.add_object(top_layer, rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        let bottom = scene.add_object(0, rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert_eq!(scene.find_object_at(5.0, 5.0), Some(top));

        scene.set_layer_locked(top_layer, true).unwrap();
        assert_eq!(scene.find_object_at(5.0, 5.0), Some(bottom));
        scene.set_layer_locked(top_layer, false).unwrap();
        scene.set_layer_visible(top_layer, false).unwrap();
        assert_eq!(scene.find_object_at(5.0, 5.0), Some(bottom));
        scene.set_object_visible(bottom, false).unwrap();
        assert_eq!(scene.find_object_at(5.0, 5.0), None);
        assert!(scene.find_objects_in_region(0.0, 0.0, 20.0, 20.0).is_empty());
    }

    #[test]
    fn stale_ids_error_and_never_come_back() {
        let mut scene = Scene::default();
        let a = scene.add_object(0, rect(0.0, 0.0, 4.0, 4.0)).unwrap();
        assert!(matches!(scene.remove_object(a), Ok(Shape::Rectangle(_))));
        assert_eq!(scene.remove_object(a), Err(SceneError::StaleObject(a)));
        assert_eq!(scene.move_object(a, 1.0, 1.0), Err(SceneError::StaleObject(a)));
        assert_eq!(scene.layer_of(a), None);
        assert!(scene.shape(a).is_none());

        // The reused slot hands out a new id; the old one stays dead.
        let b = scene.add_object(0, rect(0.0, 0.0, 4.0, 4.0)).unwrap();
        assert_ne!(a, b);
        assert_eq!(scene.find_object_at(1.0, 1.0), Some(b));
        assert_eq!(scene.find_objects_in_region(0.0, 0.0, 9.0, 9.0), [b]);
    }

    #[test]
    fn layer_errors() {
        let mut scene = Scene::default();
        assert_eq!(scene.remove_layer(0).unwrap_err(), SceneError::LastLayer);
        assert_eq!(
            scene.add_object(3, rect(0.0, 0.0, 1.0, 1.0)),
            Err(SceneError::UnknownLayer(3))
        );
        assert_eq!(scene.set_layer_visible(9, true), Err(SceneError::UnknownLayer(9)));
        assert_eq!(scene.remove_layer(1).unwrap_err(), SceneError::UnknownLayer(1));
        assert_eq!(SceneError::LastLayer.to_string(), "cannot remove the last layer");
    }

    #[test]
    fn removing_a_layer_drops_its_objects_and_shifts_layers() {
        let mut scene = Scene::default();
        let mid = scene.add_layer("mid");
        let top = scene.add_layer("top");
        let doomed = scene.add_object(mid, rect(0.0, 0.0, 5.0, 5.0)).unwrap();
        let kept = scene.add_object(top, rect(0.0, 0.0, 5.0, 5.0)).unwrap();

        let removed = scene.remove_layer(mid).unwrap();
        assert_eq!(removed.name, "mid");
        assert!(scene.shape(doomed).is_none());
        assert_eq!(scene.layer_of(kept), Some(1));
        assert_eq!(scene.object_count(), 1);
        assert_eq!(scene.find_object_at(1.0, 1.0), Some(kept));
    }

    #[test]
    fn replace_shape_reindexes() {
        let mut scene = Scene::default();
        let id = scene.add_object(0, rect(0.0, 0.0, 3.0, 3.0)).unwrap();
        assert_eq!(scene.find_object_at(10.0, 10.0), None);
        let old = scene.replace_shape(id, rect(0.0, 0.0, 20.0, 20.0)).unwrap();
        assert_eq!(old, Shape::Rectangle(rect(0.0, 0.0, 3.0, 3.0)));
        assert_eq!(scene.find_object_at(10.0, 10.0), Some(id));
    }

    #[test]
    fn snap_points_follow_resize() {
        let mut scene = Scene::default();
        let node = Flowchart::new(FlowchartKind::Process, 10.0, 5.0, 10.0, 5.0);
        let id = scene.add_object(0, node.clone()).unwrap();

        let hit = scene.find_snap_point(20.0, 7.0, 2.0).unwrap();
        assert_eq!(hit.id, id);
        assert_eq!(hit.point.side, SnapSide::Right);
        assert_eq!(hit.point.position, Point::new(19.0, 7.0));

        let mut bigger = node;
        bigger.resize(20.0, 9.0);
        scene.replace_shape(id, bigger).unwrap();
        assert!(scene.find_snap_point(19.0, 7.0, 1.0).is_none(), "old anchor is gone");
        let hit = scene.find_snap_point(30.0, 9.0, 2.0).unwrap();
        assert_eq!(hit.point.position, Point::new(29.0, 9.0));
    }

    #[test]
    fn snap_ignores_plain_shapes_and_locked_nodes() {
        let mut scene = Scene::default();
        scene.add_object(0, rect(0.0, 0.0, 10.0, 10.0)).unwrap();
        assert!(scene.find_snap_point(5.0, 0.0, 3.0).is_none());

        let node = scene
            .add_object(0, Flowchart::new(FlowchartKind::Decision, 30.0, 0.0, 9.0, 5.0))
            .unwrap();
        assert!(scene.find_snap_point(34.0, 0.0, 1.0).is_some());
        scene.set_object_locked(node, true).unwrap();
        assert!(scene.find_snap_point(34.0, 0.0, 1.0).is_none());
    }

    #[test]
    fn resize_canvas_invalidates() {
        let mut scene = Scene::new(CanvasSize::new(10, 10));
        scene.find_object_at(0.0, 0.0);
        assert!(!scene.spatial_index().is_dirty());
        scene.resize_canvas(CanvasSize::new(300, 100));
        assert!(scene.spatial_index().is_dirty());
        assert_eq!(scene.canvas_size(), CanvasSize::new(300, 100));
    }
}
