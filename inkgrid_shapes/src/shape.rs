// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The closed set of drawable shapes.

use core::fmt;

use inkgrid_index::Aabb;

use crate::flowchart::{Flowchart, FlowchartKind};
use crate::geometry::{Geometry, SnapPoint};
use crate::group::Group;
use crate::path::{Connector, Freehand, Polyline};
use crate::polygon::{Diamond, Polygon, Star, Triangle};
use crate::primitives::{Arrow, Ellipse, Line, Rectangle, Text};

/// Tag naming what a [`Shape`] draws, flowchart symbols included.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// See [`Rectangle`].
    Rectangle,
    /// See [`Ellipse`].
    Ellipse,
    /// See [`Line`].
    Line,
    /// See [`Arrow`].
    Arrow,
    /// See [`Triangle`].
    Triangle,
    /// See [`Diamond`].
    Diamond,
    /// See [`Polygon`].
    Polygon,
    /// See [`Star`].
    Star,
    /// See [`Text`].
    Text,
    /// See [`Freehand`].
    Freehand,
    /// See [`Polyline`].
    Polyline,
    /// See [`Group`].
    Group,
    /// See [`Connector`].
    Connector,
    /// [`FlowchartKind::Process`].
    Process,
    /// [`FlowchartKind::Decision`].
    Decision,
    /// [`FlowchartKind::Terminator`].
    Terminator,
    /// [`FlowchartKind::Data`].
    Data,
    /// [`FlowchartKind::Document`].
    Document,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Rectangle => "rectangle",
            Self::Ellipse => "ellipse",
            Self::Line => "line",
            Self::Arrow => "arrow",
            Self::Triangle => "triangle",
            Self::Diamond => "diamond",
            Self::Polygon => "polygon",
            Self::Star => "star",
            Self::Text => "text",
            Self::Freehand => "freehand",
            Self::Polyline => "polyline",
            Self::Group => "group",
            Self::Connector => "connector",
            Self::Process => "process",
            Self::Decision => "decision",
            Self::Terminator => "terminator",
            Self::Data => "data",
            Self::Document => "document",
        })
    }
}

/// Any drawable object on the canvas.
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// Axis-aligned box.
    Rectangle(Rectangle),
    /// Aspect-corrected ellipse.
    Ellipse(Ellipse),
    /// Straight segment.
    Line(Line),
    /// Segment with arrowheads.
    Arrow(Arrow),
    /// Isosceles triangle.
    Triangle(Triangle),
    /// Rhombus.
    Diamond(Diamond),
    /// Regular polygon.
    Polygon(Polygon),
    /// Star.
    Star(Star),
    /// Text block.
    Text(Text),
    /// Brush stroke.
    Freehand(Freehand),
    /// Open or closed polyline.
    Polyline(Polyline),
    /// Nested shapes.
    Group(Group),
    /// Routed connector.
    Connector(Connector),
    /// Flowchart node of any symbol.
    Flowchart(Flowchart),
}

/// Expands `$body` once per variant with `$s` bound to the payload.
macro_rules! each_variant {
    ($shape:expr, $s:ident => $body:expr) => {
        match $shape {
            Shape::Rectangle($s) => $body,
            Shape::Ellipse($s) => $body,
            Shape::Line($s) => $body,
            Shape::Arrow($s) => $body,
            Shape::Triangle($s) => $body,
            Shape::Diamond($s) => $body,
            Shape::Polygon($s) => $body,
            Shape::Star($s) => $body,
            Shape::Text($s) => $body,
            Shape::Freehand($s) => $body,
            Shape::Polyline($s) => $body,
            Shape::Group($s) => $body,
            Shape::Connector($s) => $body,
            Shape::Flowchart($s) => $body,
        }
    };
}

impl Shape {
    /// What this shape draws.
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Ellipse(_) => ShapeKind::Ellipse,
            Self::Line(_) => ShapeKind::Line,
            Self::Arrow(_) => ShapeKind::Arrow,
            Self::Triangle(_) => ShapeKind::Triangle,
            Self::Diamond(_) => ShapeKind::Diamond,
            Self::Polygon(_) => ShapeKind::Polygon,
            Self::Star(_) => ShapeKind::Star,
            Self::Text(_) => ShapeKind::Text,
            Self::Freehand(_) => ShapeKind::Freehand,
            Self::Polyline(_) => ShapeKind::Polyline,
            Self::Group(_) => ShapeKind::Group,
            Self::Connector(_) => ShapeKind::Connector,
            Self::Flowchart(f) => match f.kind {
                FlowchartKind::Process => ShapeKind::Process,
                FlowchartKind::Decision => ShapeKind::Decision,
                FlowchartKind::Terminator => ShapeKind::Terminator,
                FlowchartKind::Data => ShapeKind::Data,
                FlowchartKind::Document => ShapeKind::Document,
            },
        }
    }

    /// The flowchart payload, if this is a flowchart node.
    pub fn as_flowchart(&self) -> Option<&Flowchart> {
        match self {
            Self::Flowchart(f) => Some(f),
            _ => None,
        }
    }
}

impl Geometry for Shape {
    fn bounds(&self) -> Aabb {
        each_variant!(self, s => s.bounds())
    }

    fn contains_point(&self, px: f64, py: f64) -> bool {
        each_variant!(self, s => s.contains_point(px, py))
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        each_variant!(self, s => s.translate(dx, dy));
    }

    fn snap_points(&self) -> Vec<SnapPoint> {
        each_variant!(self, s => s.snap_points())
    }
}

macro_rules! impl_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Shape {
                fn from(s: $variant) -> Self {
                    Self::$variant(s)
                }
            }
        )*
    };
}

impl_from!(
    Rectangle, Ellipse, Line, Arrow, Triangle, Diamond, Polygon, Star, Text, Freehand, Polyline,
    Group, Connector, Flowchart,
);
