// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use inkgrid_scene::{CanvasSize, Scene};
use inkgrid_shapes::{Ellipse, Flowchart, FlowchartKind, Line, Rectangle, Shape};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn random_shape(rng: &mut StdRng) -> Shape {
    let x = rng.random_range(0.0..190.0);
    let y = rng.random_range(0.0..55.0);
    match rng.random_range(0..4) {
        0 => Rectangle::new(x, y, rng.random_range(2.0..20.0), rng.random_range(2.0..8.0)).into(),
        1 => Ellipse::new(x, y, rng.random_range(1.0..6.0), rng.random_range(1.0..4.0)).into(),
        2 => Line::new(x, y, x + rng.random_range(-20.0..20.0), y + rng.random_range(-8.0..8.0))
            .into(),
        _ => Flowchart::new(FlowchartKind::Decision, x, y, 11.0, 5.0).into(),
    }
}

fn build_scene(objects: usize, layers: usize) -> Scene {
    let mut rng = StdRng::seed_from_u64(0xC1A5_7E55);
    let mut scene = Scene::new(CanvasSize::new(200, 60));
    let mut targets = vec![0];
    for i in 1..layers {
        targets.push(scene.add_layer(format!("layer {i}")));
    }
    for i in 0..objects {
        let layer = targets[i % targets.len()];
        scene
            .add_object(layer, random_shape(&mut rng))
            .expect("layer was just added");
    }
    scene
}

fn bench_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_rebuild");
    for &n in &[200_usize, 2_000] {
        // A fresh scene is dirty, so the first pick pays for the rebuild.
        group.bench_function(format!("first_pick_n{n}"), |b| {
            b.iter_batched(
                || build_scene(n, 4),
                |mut s| black_box(s.find_object_at(100.0, 30.0)),
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_warm_picks(c: &mut Criterion) {
    let mut group = c.benchmark_group("scene_pick_warm");
    let mut scene = build_scene(2_000, 4);
    black_box(scene.find_object_at(0.0, 0.0));
    assert!(!scene.spatial_index().is_dirty(), "warm-up pick rebuilds the index");
    let mut rng = StdRng::seed_from_u64(11);
    let probes: Vec<(f64, f64)> = (0..256)
        .map(|_| (rng.random_range(0.0..200.0), rng.random_range(0.0..60.0)))
        .collect();
    group.bench_function("find_object_at", |b| {
        b.iter(|| {
            let mut hits = 0_usize;
            for &(x, y) in &probes {
                hits += usize::from(scene.find_object_at(x, y).is_some());
            }
            black_box(hits)
        });
    });
    group.bench_function("find_objects_in_region", |b| {
        b.iter(|| black_box(scene.find_objects_in_region(50.0, 10.0, 120.0, 40.0).len()));
    });
    group.finish();
}

criterion_group!(benches, bench_rebuild, bench_warm_picks);
criterion_main!(benches);
