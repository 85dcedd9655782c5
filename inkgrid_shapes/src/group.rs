// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Groups of shapes treated as one.

use inkgrid_index::Aabb;

use crate::distance::cell_box;
use crate::geometry::Geometry;
use crate::shape::Shape;

/// Shapes moved and selected as a unit.
///
/// Bounds and containment are derived from the children on every call;
/// nothing is cached.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Group {
    /// Members in paint order. Groups may nest.
    pub children: Vec<Shape>,
}

impl Group {
    /// Group the given shapes.
    pub fn new(children: Vec<Shape>) -> Self {
        Self { children }
    }
}

impl Geometry for Group {
    fn bounds(&self) -> Aabb {
        self.children
            .iter()
            .map(Geometry::bounds)
            .reduce(|a, b| a.union(&b))
            .unwrap_or_else(|| cell_box(0.0, 0.0, 1.0, 1.0))
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        self.children.iter().any(|c| c.contains_point(px, py))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        for child in &mut self.children {
            child.translate(dx, dy);
        }
    }
}
