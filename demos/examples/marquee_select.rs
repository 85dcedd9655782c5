// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee selection over a grid of boxes, dragged in different directions.
//!
//! Run:
//! - `cargo run -p inkgrid_demos --example marquee_select`

use inkgrid_scene::{CanvasSize, ObjectId, Scene};
use inkgrid_shapes::Rectangle;

const COLS: usize = 12;
const ROWS: usize = 6;

fn main() {
    tracing_subscriber::fmt::init();

    let mut scene = Scene::new(CanvasSize::new(120, 40));
    let mut ids: Vec<ObjectId> = Vec::with_capacity(COLS * ROWS);
    for row in 0..ROWS {
        for col in 0..COLS {
            let (x, y) = (col as f64 * 10.0, row as f64 * 6.0);
            ids.push(scene.add_object(0, Rectangle::new(x, y, 8.0, 4.0)).unwrap());
        }
    }

    // Corners in any order: left-to-right, right-to-left, and a zero-width drag.
    let drags = [
        ((5.0, 3.0), (25.0, 9.0)),
        ((25.0, 9.0), (5.0, 3.0)),
        ((45.0, 0.0), (45.0, 40.0)),
        ((300.0, 300.0), (310.0, 310.0)),
    ];
    for ((x1, y1), (x2, y2)) in drags {
        let picked: Vec<usize> = scene
            .find_objects_in_region(x1, y1, x2, y2)
            .into_iter()
            .filter_map(|id| ids.iter().position(|x| *x == id))
            .collect();
        println!("drag ({x1},{y1})->({x2},{y2}) selects cells {picked:?}");
    }
    println!("rebuilds: {}", scene.spatial_index().rebuild_count());
}
