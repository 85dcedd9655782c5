// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangles, ellipses, lines, arrows and text.

use inkgrid_index::Aabb;
use kurbo::Point;

use crate::consts::{CELL_ASPECT, ELLIPSE_SLACK, LINE_TOLERANCE};
use crate::distance::{cell_box, distance_to_segment, points_bounds_or_origin};
use crate::geometry::Geometry;

/// Axis-aligned rectangle. Selecting anywhere inside it picks it.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    /// Left column.
    pub x: f64,
    /// Top row.
    pub y: f64,
    /// Width in cells.
    pub width: f64,
    /// Height in cells.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle from origin and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

impl Geometry for Rectangle {
    fn bounds(&self) -> Aabb {
        cell_box(self.x, self.y, self.width, self.height)
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        self.bounds().contains_point(px, py)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// Ellipse given by its center and logical radii.
///
/// Rendering corrects for cells being twice as tall as wide: both effective
/// radii derive from the larger logical radius, with the horizontal one doubled.
/// A shape with equal logical radii therefore looks like a circle on screen.
#[derive(Clone, Debug, PartialEq)]
pub struct Ellipse {
    /// Center column.
    pub cx: f64,
    /// Center row.
    pub cy: f64,
    /// Logical horizontal radius.
    pub radius_x: f64,
    /// Logical vertical radius.
    pub radius_y: f64,
}

impl Ellipse {
    /// Create an ellipse from center and radii.
    pub fn new(cx: f64, cy: f64, radius_x: f64, radius_y: f64) -> Self {
        Self {
            cx,
            cy,
            radius_x,
            radius_y,
        }
    }

    /// Circle with equal logical radii.
    pub fn circle(cx: f64, cy: f64, radius: f64) -> Self {
        Self::new(cx, cy, radius, radius)
    }

    /// Center cell the renderer draws around.
    pub fn rendered_center(&self) -> Point {
        let c = Point::new(self.cx, self.cy);
        if c.is_finite() {
            Point::new(c.x.round(), c.y.round())
        } else {
            Point::ORIGIN
        }
    }

    /// Aspect-corrected `(rx, ry)` in cells.
    pub fn effective_radii(&self) -> (f64, f64) {
        let r = self.radius_x.max(self.radius_y);
        if !r.is_finite() || r <= 0.0 {
            return (0.0, 0.0);
        }
        ((r * CELL_ASPECT).round(), r.round())
    }
}

impl Geometry for Ellipse {
    fn bounds(&self) -> Aabb {
        let c = self.rendered_center();
        let (rx, ry) = self.effective_radii();
        cell_box(c.x - rx, c.y - ry, rx * 2.0 + 1.0, ry * 2.0 + 1.0)
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        let c = self.rendered_center();
        let (rx, ry) = self.effective_radii();
        if rx <= 0.0 || ry <= 0.0 {
            return cell_box(c.x, c.y, 1.0, 1.0).contains_point(px, py);
        }
        // The slack never reaches past the rendered box.
        if !self.bounds().contains_point(px, py) {
            return false;
        }
        let dx = px - c.x;
        let dy = py - c.y;
        (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry) <= ELLIPSE_SLACK
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.cx += dx;
        self.cy += dy;
    }
}

/// Straight segment between two cells.
#[derive(Clone, Debug, PartialEq)]
pub struct Line {
    /// Start column.
    pub x1: f64,
    /// Start row.
    pub y1: f64,
    /// End column.
    pub x2: f64,
    /// End row.
    pub y2: f64,
}

impl Line {
    /// Create a segment from `(x1, y1)` to `(x2, y2)`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Start point.
    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    /// End point.
    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }
}

impl Geometry for Line {
    fn bounds(&self) -> Aabb {
        points_bounds_or_origin([self.start(), self.end()])
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        distance_to_segment(Point::new(px, py), self.start(), self.end()) <= LINE_TOLERANCE
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x1 += dx;
        self.y1 += dy;
        self.x2 += dx;
        self.y2 += dy;
    }
}

/// A line with an arrowhead at its end (or both ends).
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    /// Shaft geometry.
    pub line: Line,
    /// Draw a head at the start as well.
    pub double_headed: bool,
}

impl Arrow {
    /// Single-headed arrow pointing from `(x1, y1)` to `(x2, y2)`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            line: Line::new(x1, y1, x2, y2),
            double_headed: false,
        }
    }
}

impl Geometry for Arrow {
    fn bounds(&self) -> Aabb {
        self.line.bounds()
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        self.line.contains_point(px, py)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.line.translate(dx, dy);
    }
}

/// Multi-line text anchored at its top-left cell.
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    /// Left column.
    pub x: f64,
    /// Top row.
    pub y: f64,
    /// Content; `\n` starts a new row.
    pub content: String,
}

impl Text {
    /// Create a text block.
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
        }
    }

    /// `(columns, rows)` occupied by the content.
    pub fn extent(&self) -> (usize, usize) {
        let cols = self
            .content
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0);
        (cols, self.content.lines().count())
    }
}

impl Geometry for Text {
    fn bounds(&self) -> Aabb {
        let (cols, rows) = self.extent();
        #[allow(
            clippy::cast_precision_loss,
            reason = "Text extents are far below 2^52 cells."
        )]
        let (width, height) = (cols as f64, rows as f64);
        cell_box(self.x, self.y, width, height)
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        self.bounds().contains_point(px, py)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}
