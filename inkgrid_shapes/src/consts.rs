// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared numeric constants for shape geometry.

// ── Grid ────────────────────────────────────────────────────────

/// Width-to-height ratio of a character cell. Cells are twice as tall as wide,
/// so circular shapes are stretched by this factor along x.
pub const CELL_ASPECT: f64 = 2.0;

/// Smallest extent, in cells, of any shape's bounding box.
pub const MIN_EXTENT: f64 = 1.0;

/// Vertex-count range for regular polygons; stars use it for their spike count.
pub const RING_VERTICES: core::ops::RangeInclusive<u32> = 3..=256;

// ── Hit-testing ─────────────────────────────────────────────────

/// Normalized ellipse distance accepted as a hit. `1.0` is the rendered outline;
/// the extra 20% is selection slack.
pub const ELLIPSE_SLACK: f64 = 1.2;

/// Distance in cells within which a line, polygon edge or polyline is hit.
pub const LINE_TOLERANCE: f64 = 1.5;

/// Distance in cells within which a connector segment is hit.
pub const CONNECTOR_TOLERANCE: f64 = 1.0;

/// Horizontal slant, in cells, of a flowchart data (input/output) shape.
pub const DATA_SLANT: f64 = 2.0;
