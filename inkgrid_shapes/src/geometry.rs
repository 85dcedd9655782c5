// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The capability surface every shape kind provides.

use inkgrid_index::Aabb;
use kurbo::Point;

/// Side of a shape a [`SnapPoint`] sits on.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SnapSide {
    /// Middle of the top edge.
    Top,
    /// Middle of the right edge.
    Right,
    /// Middle of the bottom edge.
    Bottom,
    /// Middle of the left edge.
    Left,
}

/// A named, directional anchor on a shape's perimeter that connectors attach to.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SnapPoint {
    /// Which side of the shape the anchor belongs to.
    pub side: SnapSide,
    /// Anchor cell, in grid coordinates.
    pub position: Point,
}

/// Bounding box and hit-testing for one shape kind.
///
/// `bounds` feeds the spatial index, `contains_point` refines index candidates
/// into an exact pick. Both are recomputed from the current fields on every
/// call.
pub trait Geometry {
    /// Cell-inclusive bounding box. Always finite and at least one cell wide and tall.
    fn bounds(&self) -> Aabb;

    /// Whether a pointer at `(px, py)` selects this shape, including selection slack.
    fn contains_point(&self, px: f64, py: f64) -> bool;

    /// Shift the shape by whole or fractional cells.
    fn translate(&mut self, dx: f64, dy: f64);

    /// Connector anchors. Most kinds have none.
    fn snap_points(&self) -> Vec<SnapPoint> {
        Vec::new()
    }

    /// The snap point nearest to `(px, py)`, by linear scan.
    fn nearest_snap_point(&self, px: f64, py: f64) -> Option<SnapPoint> {
        let target = Point::new(px, py);
        self.snap_points().into_iter().min_by(|a, b| {
            a.position
                .distance_squared(target)
                .total_cmp(&b.position.distance_squared(target))
        })
    }
}
