// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Closed, vertex-ring shapes: triangles, diamonds, regular polygons and stars.
//!
//! All of them hit-test the same way: even-odd ray casting against the vertex
//! ring, falling back to an edge-distance test so an unfilled outline stays
//! selectable.

use core::f64::consts::{FRAC_PI_2, TAU};

use inkgrid_index::Aabb;
use kurbo::Point;

use crate::consts::{LINE_TOLERANCE, RING_VERTICES};
use crate::distance::{cell_box, points_bounds_or_origin, ring_hit};
use crate::geometry::Geometry;

/// Vertices on a circle, evenly spaced, the first pointing straight up.
fn radial_ring(center: Point, count: usize, radius_at: impl Fn(usize) -> f64) -> Vec<Point> {
    #[allow(
        clippy::cast_precision_loss,
        reason = "Vertex counts are tiny."
    )]
    let step = TAU / count as f64;
    (0..count)
        .map(|i| {
            #[allow(
                clippy::cast_precision_loss,
                reason = "Vertex counts are tiny."
            )]
            let angle = -FRAC_PI_2 + step * i as f64;
            let r = radius_at(i);
            Point::new(center.x + r * angle.cos(), center.y + r * angle.sin())
        })
        .collect()
}

fn finite_radius(r: f64) -> f64 {
    if r.is_finite() && r > 0.0 { r } else { 0.0 }
}

fn ring_count(n: u32) -> usize {
    n.clamp(*RING_VERTICES.start(), *RING_VERTICES.end()) as usize
}

/// Isosceles triangle inscribed in a box, apex at the top center.
#[derive(Clone, Debug, PartialEq)]
pub struct Triangle {
    /// Left column.
    pub x: f64,
    /// Top row.
    pub y: f64,
    /// Width in cells.
    pub width: f64,
    /// Height in cells.
    pub height: f64,
}

impl Triangle {
    /// Create a triangle filling the given box.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Apex, bottom-right, bottom-left.
    pub fn vertices(&self) -> [Point; 3] {
        let b = self.bounds();
        let (right, bottom) = (b.right() - 1.0, b.bottom() - 1.0);
        [
            Point::new(b.x + (b.width - 1.0) * 0.5, b.y),
            Point::new(right, bottom),
            Point::new(b.x, bottom),
        ]
    }
}

impl Geometry for Triangle {
    fn bounds(&self) -> Aabb {
        cell_box(self.x, self.y, self.width, self.height)
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        ring_hit(&self.vertices(), Point::new(px, py), LINE_TOLERANCE)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// Rhombus inscribed in a box, vertices at the edge midpoints.
#[derive(Clone, Debug, PartialEq)]
pub struct Diamond {
    /// Left column.
    pub x: f64,
    /// Top row.
    pub y: f64,
    /// Width in cells.
    pub width: f64,
    /// Height in cells.
    pub height: f64,
}

impl Diamond {
    /// Create a diamond filling the given box.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top, right, bottom, left.
    pub fn vertices(&self) -> [Point; 4] {
        diamond_ring(self.bounds())
    }
}

/// Top, right, bottom, left vertices of the rhombus inscribed in `b`.
pub(crate) fn diamond_ring(b: Aabb) -> [Point; 4] {
    let (right, bottom) = (b.right() - 1.0, b.bottom() - 1.0);
    let mid_x = b.x + (b.width - 1.0) * 0.5;
    let mid_y = b.y + (b.height - 1.0) * 0.5;
    [
        Point::new(mid_x, b.y),
        Point::new(right, mid_y),
        Point::new(mid_x, bottom),
        Point::new(b.x, mid_y),
    ]
}

impl Geometry for Diamond {
    fn bounds(&self) -> Aabb {
        cell_box(self.x, self.y, self.width, self.height)
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        ring_hit(&self.vertices(), Point::new(px, py), LINE_TOLERANCE)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

/// Regular polygon with `sides` vertices on a circle.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    /// Center column.
    pub cx: f64,
    /// Center row.
    pub cy: f64,
    /// Circumradius in cells.
    pub radius: f64,
    /// Vertex count, clamped to [`RING_VERTICES`](crate::consts::RING_VERTICES).
    pub sides: u32,
}

impl Polygon {
    /// Create a regular polygon.
    pub fn new(cx: f64, cy: f64, radius: f64, sides: u32) -> Self {
        Self {
            cx,
            cy,
            radius,
            sides,
        }
    }

    /// Vertex ring, first vertex pointing up, clockwise on screen.
    pub fn vertices(&self) -> Vec<Point> {
        let r = finite_radius(self.radius);
        radial_ring(
            Point::new(self.cx, self.cy),
            ring_count(self.sides),
            |_| r,
        )
    }
}

impl Geometry for Polygon {
    fn bounds(&self) -> Aabb {
        points_bounds_or_origin(self.vertices())
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        ring_hit(&self.vertices(), Point::new(px, py), LINE_TOLERANCE)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.cx += dx;
        self.cy += dy;
    }
}

/// Star with `points` spikes alternating between an outer and inner radius.
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    /// Center column.
    pub cx: f64,
    /// Center row.
    pub cy: f64,
    /// Radius of the spike tips.
    pub outer_radius: f64,
    /// Radius of the valleys between spikes.
    pub inner_radius: f64,
    /// Spike count, clamped to [`RING_VERTICES`](crate::consts::RING_VERTICES).
    pub points: u32,
}

impl Star {
    /// Create a star.
    pub fn new(cx: f64, cy: f64, outer_radius: f64, inner_radius: f64, points: u32) -> Self {
        Self {
            cx,
            cy,
            outer_radius,
            inner_radius,
            points,
        }
    }

    /// Vertex ring alternating tip, valley, ..., first tip pointing up.
    pub fn vertices(&self) -> Vec<Point> {
        let outer = finite_radius(self.outer_radius);
        let inner = finite_radius(self.inner_radius);
        radial_ring(
            Point::new(self.cx, self.cy),
            ring_count(self.points) * 2,
            |i| if i % 2 == 0 { outer } else { inner },
        )
    }
}

impl Geometry for Star {
    fn bounds(&self) -> Aabb {
        points_bounds_or_origin(self.vertices())
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        ring_hit(&self.vertices(), Point::new(px, py), LINE_TOLERANCE)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.cx += dx;
        self.cy += dy;
    }
}
