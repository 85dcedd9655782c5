// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

/// Axis-aligned bounding box on the character grid.
///
/// Coordinates are in cell units: `x` is a column, `y` is a row. The box covers
/// the half-open ranges `[x, right)` and `[y, bottom)`, so two boxes that share
/// an edge never both claim the cells along it.
///
/// Extents are never negative or NaN. [`Aabb::new`] degrades malformed input to
/// a degenerate (zero-extent) box instead of failing.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
pub struct Aabb {
    /// Left edge (column).
    pub x: f64,
    /// Top edge (row).
    pub y: f64,
    /// Horizontal extent in cells.
    pub width: f64,
    /// Vertical extent in cells.
    pub height: f64,
}

impl Aabb {
    /// The degenerate box at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Create a box from its origin and size.
    ///
    /// Non-finite origins collapse to `0`, non-finite or negative extents to `0`.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x: finite_or_zero(x),
            y: finite_or_zero(y),
            width: extent(width),
            height: extent(height),
        }
    }

    /// Create the canonical box spanned by two arbitrary corners.
    ///
    /// The corners may be given in any order, as produced by a drag in any direction.
    pub fn from_corners(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let (x1, y1) = (finite_or_zero(x1), finite_or_zero(y1));
        let (x2, y2) = (finite_or_zero(x2), finite_or_zero(y2));
        let (min_x, max_x) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let (min_y, max_y) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Exclusive right edge, `x + width`.
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Exclusive bottom edge, `y + height`.
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Geometric center.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// True when the box has no area.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Whether the point lies in `[x, right) × [y, bottom)`.
    #[inline]
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Whether the two boxes overlap.
    ///
    /// False only when one box lies strictly outside the other along either
    /// axis, treating right/bottom edges as exclusive.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        !(other.x >= self.right()
            || other.right() <= self.x
            || other.y >= self.bottom()
            || other.bottom() <= self.y)
    }

    /// Whether `other` lies entirely inside this box.
    ///
    /// Unlike [`contains_point`](Self::contains_point) the max side is inclusive:
    /// `other` may end exactly on this box's right/bottom edge.
    #[inline]
    pub fn contains(&self, other: &Self) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Smallest box covering both inputs.
    pub fn union(&self, other: &Self) -> Self {
        let min_x = self.x.min(other.x);
        let min_y = self.y.min(other.y);
        let max_x = self.right().max(other.right());
        let max_y = self.bottom().max(other.bottom());
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Grow the box by `pad` cells on every side. Negative padding shrinks it,
    /// clamping at zero extent.
    pub fn inflate(&self, pad: f64) -> Self {
        let pad = finite_or_zero(pad);
        Self::new(
            self.x - pad,
            self.y - pad,
            self.width + pad * 2.0,
            self.height + pad * 2.0,
        )
    }
}

#[inline]
fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[inline]
fn extent(v: f64) -> f64 {
    if v.is_finite() && v > 0.0 { v } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_point_is_half_open() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(a.contains_point(0.0, 0.0));
        assert!(a.contains_point(9.999, 9.999));
        assert!(!a.contains_point(10.0, 5.0), "right edge is exclusive");
        assert!(!a.contains_point(5.0, 10.0), "bottom edge is exclusive");

        // Adjacent boxes never both claim the shared edge.
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(b.contains_point(10.0, 5.0));
    }

    #[test]
    fn touching_boxes_do_not_intersect() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 5.0, 5.0);
        let c = Aabb::new(9.5, 9.5, 5.0, 5.0);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
        assert!(a.intersects(&c));
        assert!(c.intersects(&a));
    }

    #[test]
    fn contains_is_inclusive_on_max_side() {
        let outer = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(outer.contains(&Aabb::new(5.0, 5.0, 5.0, 5.0)));
        assert!(outer.contains(&outer));
        assert!(!outer.contains(&Aabb::new(5.0, 5.0, 5.5, 5.0)));
        assert!(!outer.contains(&Aabb::new(-0.5, 0.0, 1.0, 1.0)));
    }

    #[test]
    fn malformed_input_degrades() {
        let a = Aabb::new(f64::NAN, 3.0, -4.0, f64::INFINITY);
        assert_eq!(a, Aabb::new(0.0, 3.0, 0.0, 0.0));
        assert!(a.is_degenerate());
        assert!(!a.contains_point(0.0, 3.0));
    }

    #[test]
    fn from_corners_normalizes_drag_direction() {
        let a = Aabb::from_corners(12.0, 8.0, 2.0, 3.0);
        assert_eq!(a, Aabb::new(2.0, 3.0, 10.0, 5.0));
        assert_eq!(a, Aabb::from_corners(2.0, 3.0, 12.0, 8.0));
    }

    #[test]
    fn union_and_inflate() {
        let a = Aabb::new(0.0, 0.0, 2.0, 2.0);
        let b = Aabb::new(5.0, -1.0, 1.0, 1.0);
        assert_eq!(a.union(&b), Aabb::new(0.0, -1.0, 6.0, 3.0));
        assert_eq!(a.inflate(1.0), Aabb::new(-1.0, -1.0, 4.0, 4.0));
        assert_eq!(a.inflate(-5.0).width, 0.0);
    }
}
