// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the scene: object identifiers, flags, and canvas size.

use core::fmt;

/// Identifier for an object in a scene.
///
/// This is a small, copyable handle that stays stable across edits but becomes
/// invalid when the object is removed. It consists of a slot index and a
/// generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ObjectId` pointing at it is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ObjectId`.
///
/// Stale ids never alias a different live object because the generation must match.
/// The spatial index stores `ObjectId`s, never references, so a stale entry is
/// detected and skipped at query time.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
pub struct ObjectId(pub(crate) u32, pub(crate) u32);

impl ObjectId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }

    /// Slot generation; increases each time the slot is reused.
    pub const fn generation(self) -> u32 {
        self.1
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectId({}v{})", self.0, self.1)
    }
}

bitflags::bitflags! {
    /// Per-object flags controlling visibility and editing.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ObjectFlags: u8 {
        /// Object is drawn and hit-testable.
        const VISIBLE = 0b0000_0001;
        /// Object is frozen: drawn, but never picked or marquee-selected.
        const LOCKED  = 0b0000_0010;
    }
}

impl Default for ObjectFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

bitflags::bitflags! {
    /// Per-layer flags. They gate every object on the layer.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LayerFlags: u8 {
        /// Layer is drawn and its objects are hit-testable.
        const VISIBLE = 0b0000_0001;
        /// Layer is frozen: none of its objects can be picked.
        const LOCKED  = 0b0000_0010;
    }
}

impl Default for LayerFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

impl ObjectFlags {
    /// Visible and not locked.
    pub fn is_hit_testable(self) -> bool {
        self.contains(Self::VISIBLE) && !self.contains(Self::LOCKED)
    }
}

impl LayerFlags {
    /// Visible and not locked.
    pub fn is_hit_testable(self) -> bool {
        self.contains(Self::VISIBLE) && !self.contains(Self::LOCKED)
    }
}

/// Canvas size in character cells.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CanvasSize {
    /// Columns.
    pub width: u32,
    /// Rows.
    pub height: u32,
}

impl CanvasSize {
    /// Create a canvas size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for CanvasSize {
    /// A classic 80×24 terminal.
    fn default() -> Self {
        Self::new(80, 24)
    }
}
