// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layers and the read-only scene view handed to the spatial index.

use crate::arena::{Object, ObjectArena};
use crate::types::{LayerFlags, ObjectId};

/// An ordered stack of objects sharing visibility and lock state.
///
/// `objects` is in paint order: later entries draw over earlier ones.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layer {
    /// Display name.
    pub name: String,
    /// Visibility and lock state for the whole layer.
    pub flags: LayerFlags,
    /// Members, bottom to top.
    pub objects: Vec<ObjectId>,
}

impl Layer {
    /// An empty, visible, unlocked layer.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            flags: LayerFlags::default(),
            objects: Vec::new(),
        }
    }

    /// Position of `id` in paint order.
    pub fn position(&self, id: ObjectId) -> Option<usize> {
        self.objects.iter().position(|o| *o == id)
    }
}

/// Immutable view of everything the spatial index reads: layers bottom to top,
/// and the arena their ids resolve against.
#[derive(Copy, Clone, Debug)]
pub struct SceneSnapshot<'a> {
    layers: &'a [Layer],
    objects: &'a ObjectArena,
}

impl<'a> SceneSnapshot<'a> {
    /// Borrow a layer stack and its arena.
    pub fn new(layers: &'a [Layer], objects: &'a ObjectArena) -> Self {
        Self { layers, objects }
    }

    /// Layers, bottom to top.
    pub fn layers(&self) -> &'a [Layer] {
        self.layers
    }

    /// Resolve an id; `None` if it is stale.
    pub fn object(&self, id: ObjectId) -> Option<&'a Object> {
        self.objects.get(id)
    }

    /// Every hit-testable object as `(layer, order, id, object)`, bottom to top.
    ///
    /// Hidden or locked layers contribute nothing; hidden or locked objects and
    /// stale ids are skipped.
    pub fn hit_testable(self) -> impl Iterator<Item = (usize, usize, ObjectId, &'a Object)> + 'a {
        let objects = self.objects;
        self.layers
            .iter()
            .enumerate()
            .filter(|(_, layer)| layer.flags.is_hit_testable())
            .flat_map(move |(li, layer)| {
                layer.objects.iter().enumerate().filter_map(move |(order, id)| {
                    let object = objects.get(*id)?;
                    object
                        .flags
                        .is_hit_testable()
                        .then_some((li, order, *id, object))
                })
            })
    }
}
