// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational storage for scene objects.

use inkgrid_shapes::Shape;

use crate::types::{ObjectFlags, ObjectId};

/// A shape plus its per-object flags.
#[derive(Clone, Debug, PartialEq)]
pub struct Object {
    /// Geometry.
    pub shape: Shape,
    /// Visibility and lock state.
    pub flags: ObjectFlags,
}

impl Object {
    /// A visible, unlocked object.
    pub fn new(shape: Shape) -> Self {
        Self {
            shape,
            flags: ObjectFlags::default(),
        }
    }
}

#[derive(Clone, Debug)]
struct Slot {
    generation: u32,
    object: Object,
}

/// Slot arena handing out [`ObjectId`]s.
///
/// Freed slots are reused in LIFO order with a bumped generation, so ids of
/// removed objects stay stale forever.
#[derive(Clone, Default)]
pub struct ObjectArena {
    slots: Vec<Option<Slot>>, // slots
    generations: Vec<u32>,    // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for ObjectArena {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ObjectArena")
            .field("slots_total", &self.slots.len())
            .field("slots_alive", &self.len())
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl ObjectArena {
    /// Create an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `object`, returning its id.
    pub fn insert(&mut self, object: Object) -> ObjectId {
        let (idx, generation) = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Slot { generation, object });
            (idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Slot { generation, object }));
            self.generations.push(generation);
            (self.slots.len() - 1, generation)
        };
        #[allow(
            clippy::cast_possible_truncation,
            reason = "ObjectId uses 32-bit indices by design."
        )]
        let idx = idx as u32;
        ObjectId::new(idx, generation)
    }

    /// Remove and return the object, or `None` if `id` is stale.
    pub fn remove(&mut self, id: ObjectId) -> Option<Object> {
        if !self.is_alive(id) {
            return None;
        }
        let slot = self.slots.get_mut(id.idx())?.take()?;
        self.free_list.push(id.idx());
        Some(slot.object)
    }

    /// Returns true if `id` refers to a live object.
    pub fn is_alive(&self, id: ObjectId) -> bool {
        self.get(id).is_some()
    }

    /// Borrow a live object.
    pub fn get(&self, id: ObjectId) -> Option<&Object> {
        match self.slots.get(id.idx())? {
            Some(slot) if slot.generation == id.generation() => Some(&slot.object),
            _ => None,
        }
    }

    /// Mutably borrow a live object.
    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut Object> {
        match self.slots.get_mut(id.idx())? {
            Some(slot) if slot.generation == id.generation() => Some(&mut slot.object),
            _ => None,
        }
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free_list.len()
    }

    /// True if no objects are alive.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate live objects in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &Object)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| {
            let slot = slot.as_ref()?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ObjectId uses 32-bit indices by design."
            )]
            let id = ObjectId::new(i as u32, slot.generation);
            Some((id, &slot.object))
        })
    }
}
