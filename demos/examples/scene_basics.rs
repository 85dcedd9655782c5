// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Picking on a layered scene: topmost wins, locked layers are transparent.
//!
//! Run:
//! - `cargo run -p inkgrid_demos --example scene_basics`

use inkgrid_scene::{CanvasSize, Scene};
use inkgrid_shapes::{Ellipse, Flowchart, FlowchartKind, Line, Rectangle};
use tracing_subscriber::filter::LevelFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::DEBUG)
        .init();

    let mut scene = Scene::new(CanvasSize::new(80, 24));
    let frame = scene.add_object(0, Rectangle::new(2.0, 2.0, 30.0, 12.0)).unwrap();
    let sun = scene.add_object(0, Ellipse::circle(16.0, 8.0, 3.0)).unwrap();
    let notes = scene.add_layer("notes");
    let strike = scene.add_object(notes, Line::new(0.0, 8.0, 40.0, 8.0)).unwrap();
    let decide = scene
        .add_object(
            notes,
            Flowchart::new(FlowchartKind::Decision, 50.0, 4.0, 15.0, 7.0).with_label("ok?"),
        )
        .unwrap();
    println!("frame={frame:?} sun={sun:?} strike={strike:?} decide={decide:?}");

    let probes = [(16.0, 8.0), (16.0, 6.0), (4.0, 3.0), (51.0, 5.0), (57.0, 7.0)];
    for (x, y) in probes {
        println!("pick ({x},{y}) -> {:?}", scene.find_object_at(x, y));
    }

    scene.set_layer_locked(notes, true).unwrap();
    println!("-- notes locked --");
    for (x, y) in probes {
        println!("pick ({x},{y}) -> {:?}", scene.find_object_at(x, y));
    }

    scene.set_layer_locked(notes, false).unwrap();
    if let Some(hit) = scene.find_snap_point(66.0, 7.0, 3.0) {
        println!("snap near (66,7): {:?} at {:?} on {:?}", hit.point.side, hit.point.position, hit.id);
    }
    println!(
        "rebuilds: {}, dirty: {}",
        scene.spatial_index().rebuild_count(),
        scene.spatial_index().is_dirty()
    );
}
