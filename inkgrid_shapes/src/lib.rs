// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Inkgrid Shapes: bounding boxes and hit-testing for character-grid vector shapes.
//!
//! Every drawable kind is a plain struct implementing [`Geometry`]; [`Shape`] is the
//! closed enum over all of them that the scene stores. Coordinates are in cells,
//! `x` counting columns and `y` counting rows.
//!
//! - [`Geometry::bounds`] is cell-inclusive: a shape touching columns `a..=b` has
//!   `x = a` and `width = b - a + 1`. Boxes are always finite and at least one cell.
//! - [`Geometry::contains_point`] is the exact, tolerance-aware pick test. Outlines
//!   (lines, polygon edges, paths) accept points within [`consts::LINE_TOLERANCE`]
//!   cells, ellipses accept [`consts::ELLIPSE_SLACK`] times their normalized radius.
//! - Flowchart nodes expose [`SnapPoint`]s for connector attachment.
//!
//! # Example
//!
//! ```rust
//! use inkgrid_shapes::{Ellipse, Geometry, Line, Shape};
//!
//! // Circles are stretched 2:1 horizontally to look round on a terminal.
//! let circle = Ellipse::circle(20.0, 10.0, 3.0);
//! assert_eq!(circle.effective_radii(), (6.0, 3.0));
//! assert!(circle.contains_point(26.0, 10.0));
//!
//! let shape: Shape = Line::new(0.0, 0.0, 10.0, 0.0).into();
//! assert!(shape.contains_point(5.0, 1.0));
//! assert!(!shape.contains_point(5.0, 2.0));
//! ```

pub mod consts;
pub mod distance;
mod flowchart;
mod geometry;
mod group;
mod path;
mod polygon;
mod primitives;
mod shape;

pub use flowchart::{Flowchart, FlowchartKind};
pub use geometry::{Geometry, SnapPoint, SnapSide};
pub use group::Group;
pub use path::{Connector, Freehand, Polyline};
pub use polygon::{Diamond, Polygon, Star, Triangle};
pub use primitives::{Arrow, Ellipse, Line, Rectangle, Text};
pub use shape::{Shape, ShapeKind};
