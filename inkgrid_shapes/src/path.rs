// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point-list shapes: freehand brush strokes, polylines and connectors.

use inkgrid_index::Aabb;
use kurbo::{Point, Vec2};

use crate::consts::{CONNECTOR_TOLERANCE, LINE_TOLERANCE};
use crate::distance::{distance_to_polyline, points_bounds_or_origin, ring_hit};
use crate::geometry::Geometry;

fn shift(points: &mut [Point], dx: f64, dy: f64) {
    let d = Vec2::new(dx, dy);
    for p in points {
        *p += d;
    }
}

/// Freehand brush stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct Freehand {
    /// Sampled pointer positions, in drawing order.
    pub points: Vec<Point>,
    /// Brush radius in cells; `0` paints single cells.
    pub brush_radius: f64,
}

impl Freehand {
    /// Create a stroke.
    pub fn new(points: Vec<Point>, brush_radius: f64) -> Self {
        Self {
            points,
            brush_radius,
        }
    }

    fn radius(&self) -> f64 {
        if self.brush_radius.is_finite() && self.brush_radius > 0.0 {
            self.brush_radius
        } else {
            0.0
        }
    }
}

impl Geometry for Freehand {
    fn bounds(&self) -> Aabb {
        points_bounds_or_origin(self.points.iter().copied()).inflate(self.radius())
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        let tolerance = LINE_TOLERANCE.max(self.radius());
        distance_to_polyline(Point::new(px, py), &self.points).is_some_and(|d| d <= tolerance)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        shift(&mut self.points, dx, dy);
    }
}

/// Polyline through explicit vertices, optionally closed into a polygon.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    /// Vertices in order.
    pub points: Vec<Point>,
    /// Whether the last vertex connects back to the first.
    pub closed: bool,
}

impl Polyline {
    /// Open polyline.
    pub fn open(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: false,
        }
    }

    /// Closed polygon.
    pub fn closed(points: Vec<Point>) -> Self {
        Self {
            points,
            closed: true,
        }
    }
}

impl Geometry for Polyline {
    fn bounds(&self) -> Aabb {
        points_bounds_or_origin(self.points.iter().copied())
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        let p = Point::new(px, py);
        if self.closed {
            ring_hit(&self.points, p, LINE_TOLERANCE)
        } else {
            distance_to_polyline(p, &self.points).is_some_and(|d| d <= LINE_TOLERANCE)
        }
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        shift(&mut self.points, dx, dy);
    }
}

/// Elbowed or straight connector between two anchors.
///
/// The endpoints are plain positions; which shape they are attached to is
/// scene-level bookkeeping.
#[derive(Clone, Debug, PartialEq)]
pub struct Connector {
    /// First anchor.
    pub start: Point,
    /// Last anchor.
    pub end: Point,
    /// Intermediate bends, in order from `start` to `end`.
    pub waypoints: Vec<Point>,
}

impl Connector {
    /// Straight connector.
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            waypoints: Vec::new(),
        }
    }

    /// Connector routed through `waypoints`.
    pub fn with_waypoints(start: Point, waypoints: Vec<Point>, end: Point) -> Self {
        Self {
            start,
            end,
            waypoints,
        }
    }

    /// Full route: start, waypoints, end.
    pub fn route(&self) -> Vec<Point> {
        let mut route = Vec::with_capacity(self.waypoints.len() + 2);
        route.push(self.start);
        route.extend_from_slice(&self.waypoints);
        route.push(self.end);
        route
    }
}

impl Geometry for Connector {
    fn bounds(&self) -> Aabb {
        points_bounds_or_origin(self.route())
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        distance_to_polyline(Point::new(px, py), &self.route())
            .is_some_and(|d| d <= CONNECTOR_TOLERANCE)
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        let d = Vec2::new(dx, dy);
        self.start += d;
        self.end += d;
        shift(&mut self.waypoints, dx, dy);
    }
}
