// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flowchart nodes.
//!
//! Every node kind is laid out inside a box and exposes four directional
//! [`SnapPoint`]s at its edge midpoints. Snap points are derived from the
//! current box on each call, so they follow moves and resizes.

use core::fmt;

use inkgrid_index::Aabb;
use kurbo::Point;

use crate::consts::{DATA_SLANT, LINE_TOLERANCE};
use crate::distance::{cell_box, ring_hit};
use crate::geometry::{Geometry, SnapPoint, SnapSide};
use crate::polygon::diamond_ring;

/// Which flowchart symbol a [`Flowchart`] node draws.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FlowchartKind {
    /// Plain box.
    Process,
    /// Rhombus.
    Decision,
    /// Rounded start/end capsule.
    Terminator,
    /// Input/output parallelogram.
    Data,
    /// Box with a wavy bottom edge.
    Document,
}

impl fmt::Display for FlowchartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Process => "process",
            Self::Decision => "decision",
            Self::Terminator => "terminator",
            Self::Data => "data",
            Self::Document => "document",
        })
    }
}

/// A labelled flowchart node.
#[derive(Clone, Debug, PartialEq)]
pub struct Flowchart {
    /// Left column.
    pub x: f64,
    /// Top row.
    pub y: f64,
    /// Width in cells.
    pub width: f64,
    /// Height in cells.
    pub height: f64,
    /// Symbol drawn for this node.
    pub kind: FlowchartKind,
    /// Text centered inside the symbol.
    pub label: String,
}

impl Flowchart {
    /// Create a node of `kind` filling the given box.
    pub fn new(kind: FlowchartKind, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            kind,
            label: String::new(),
        }
    }

    /// Builder-style label setter.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Change the node's size, keeping its top-left corner.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Parallelogram for [`FlowchartKind::Data`]: top edge shifted right.
    fn data_ring(b: Aabb) -> [Point; 4] {
        let (right, bottom) = (b.right() - 1.0, b.bottom() - 1.0);
        let slant = DATA_SLANT.min((b.width - 1.0) * 0.5).max(0.0);
        [
            Point::new(b.x + slant, b.y),
            Point::new(right, b.y),
            Point::new(right - slant, bottom),
            Point::new(b.x, bottom),
        ]
    }
}

impl Geometry for Flowchart {
    fn bounds(&self) -> Aabb {
        cell_box(self.x, self.y, self.width, self.height)
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        let b = self.bounds();
        let p = Point::new(px, py);
        match self.kind {
            FlowchartKind::Decision => ring_hit(&diamond_ring(b), p, LINE_TOLERANCE),
            FlowchartKind::Data => ring_hit(&Self::data_ring(b), p, LINE_TOLERANCE),
            FlowchartKind::Process | FlowchartKind::Terminator | FlowchartKind::Document => {
                b.contains_point(px, py)
            }
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        let b = self.bounds();
        let mid_x = b.x + (b.width * 0.5).floor();
        let mid_y = b.y + (b.height * 0.5).floor();
        let (right, bottom) = (b.right() - 1.0, b.bottom() - 1.0);
        vec![
            SnapPoint {
                side: SnapSide::Top,
                position: Point::new(mid_x, b.y),
            },
            SnapPoint {
                side: SnapSide::Right,
                position: Point::new(right, mid_y),
            },
            SnapPoint {
                side: SnapSide::Bottom,
                position: Point::new(mid_x, bottom),
            },
            SnapPoint {
                side: SnapSide::Left,
                position: Point::new(b.x, mid_y),
            },
        ]
    }
}
