// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Distance and containment primitives shared by the shape kinds.

use inkgrid_index::Aabb;
use kurbo::Point;

use crate::consts::MIN_EXTENT;

/// Euclidean distance from `p` to the segment `a`–`b`.
///
/// Projects `p` onto the segment's supporting line and clamps the parameter to
/// `[0, 1]`. A zero-length segment degrades to the distance to `a`.
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.hypot2();
    if len2 <= f64::EPSILON {
        return (p - a).hypot();
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    (p - (a + ab * t)).hypot()
}

/// Smallest distance from `p` to the open polyline through `points`.
///
/// Returns `None` for an empty list. A single point is treated as a
/// zero-length segment.
pub fn distance_to_polyline(p: Point, points: &[Point]) -> Option<f64> {
    match points {
        [] => None,
        [only] => Some(p.distance(*only)),
        _ => points
            .windows(2)
            .map(|w| distance_to_segment(p, w[0], w[1]))
            .reduce(f64::min),
    }
}

/// Smallest distance from `p` to the closed ring through `ring`, including the
/// closing edge from the last vertex back to the first.
pub fn distance_to_ring(p: Point, ring: &[Point]) -> Option<f64> {
    let open = distance_to_polyline(p, ring)?;
    match (ring.first(), ring.last()) {
        (Some(first), Some(last)) if ring.len() > 2 => {
            Some(open.min(distance_to_segment(p, *last, *first)))
        }
        _ => Some(open),
    }
}

/// Even-odd ray casting test of `p` against a closed ring.
///
/// Rings with fewer than three vertices have no interior.
pub fn ring_contains(ring: &[Point], p: Point) -> bool {
    if ring.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = ring.len() - 1;
    for i in 0..ring.len() {
        let (a, b) = (ring[i], ring[j]);
        if (a.y > p.y) != (b.y > p.y) {
            let cross_x = (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x;
            if p.x < cross_x {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Ring containment with an outline fallback, so unfilled outlines stay selectable.
pub fn ring_hit(ring: &[Point], p: Point, tolerance: f64) -> bool {
    ring_contains(ring, p) || distance_to_ring(p, ring).is_some_and(|d| d <= tolerance)
}

/// Cell-inclusive box from an origin and size, never smaller than one cell.
pub fn cell_box(x: f64, y: f64, width: f64, height: f64) -> Aabb {
    let b = Aabb::new(x, y, width, height);
    Aabb::new(
        b.x,
        b.y,
        b.width.max(MIN_EXTENT),
        b.height.max(MIN_EXTENT),
    )
}

/// Cell-inclusive bounds covering every point: a point at column `c` occupies
/// `[floor(c), floor(c) + 1)`.
///
/// Returns `None` when `points` yields nothing. Non-finite coordinates are skipped.
pub fn points_bounds(points: impl IntoIterator<Item = Point>) -> Option<Aabb> {
    let mut acc: Option<(f64, f64, f64, f64)> = None;
    for p in points.into_iter().filter(|p| p.is_finite()) {
        let (x, y) = (p.x.floor(), p.y.floor());
        acc = Some(match acc {
            None => (x, y, x, y),
            Some((x0, y0, x1, y1)) => (x0.min(x), y0.min(y), x1.max(x), y1.max(y)),
        });
    }
    acc.map(|(x0, y0, x1, y1)| cell_box(x0, y0, x1 - x0 + 1.0, y1 - y0 + 1.0))
}

/// `points_bounds` falling back to the single cell at the origin.
pub fn points_bounds_or_origin(points: impl IntoIterator<Item = Point>) -> Aabb {
    points_bounds(points).unwrap_or_else(|| cell_box(0.0, 0.0, MIN_EXTENT, MIN_EXTENT))
}
