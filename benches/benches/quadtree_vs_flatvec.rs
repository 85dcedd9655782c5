// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use inkgrid_index::{Aabb, Backend, FlatVec, QuadTree, QuadTreeConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Canvas-sized root padded by 100 cells, as the scene uses it.
fn root() -> Aabb {
    Aabb::new(-100.0, -100.0, 400.0, 260.0)
}

fn gen_grid_boxes(cols: usize, rows: usize, cell: f64) -> Vec<Aabb> {
    let mut out = Vec::with_capacity(cols * rows);
    for y in 0..rows {
        for x in 0..cols {
            out.push(Aabb::new(x as f64 * cell, y as f64 * cell, cell, cell * 0.5));
        }
    }
    out
}

fn gen_random_boxes(count: usize, seed: u64) -> Vec<Aabb> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Aabb::new(
                rng.random_range(0.0..190.0),
                rng.random_range(0.0..55.0),
                rng.random_range(1.0..12.0),
                rng.random_range(1.0..6.0),
            )
        })
        .collect()
}

fn fill<B: Backend<u32>>(backend: &mut B, boxes: &[Aabb]) {
    for (i, b) in boxes.iter().copied().enumerate() {
        backend.insert(i as u32, b);
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[100_usize, 1_000, 5_000] {
        let boxes = gen_random_boxes(n, 0xCAFE_F00D);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("quadtree_n{n}"), |b| {
            b.iter_batched(
                || QuadTree::<u32>::new(root(), QuadTreeConfig::default()),
                |mut tree| {
                    fill(&mut tree, &boxes);
                    black_box(tree.depth());
                },
                BatchSize::SmallInput,
            );
        });
        group.bench_function(format!("flatvec_n{n}"), |b| {
            b.iter_batched(
                FlatVec::<u32>::new,
                |mut flat| {
                    fill(&mut flat, &boxes);
                    black_box(flat.len());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_point_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_point");
    for &n in &[100_usize, 1_000, 5_000] {
        let boxes = gen_random_boxes(n, 0xBADC_F00D);
        let mut tree = QuadTree::new(root(), QuadTreeConfig::default());
        let mut flat = FlatVec::new();
        fill(&mut tree, &boxes);
        fill(&mut flat, &boxes);

        let mut rng = StdRng::seed_from_u64(7);
        let probes: Vec<(f64, f64)> = (0..256)
            .map(|_| (rng.random_range(0.0..200.0), rng.random_range(0.0..60.0)))
            .collect();

        group.throughput(Throughput::Elements(probes.len() as u64));
        group.bench_function(format!("quadtree_n{n}"), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for &(x, y) in &probes {
                    total += tree.query_point(x, y).len();
                }
                black_box(total)
            });
        });
        group.bench_function(format!("flatvec_n{n}"), |b| {
            b.iter(|| {
                let mut total = 0_usize;
                for &(x, y) in &probes {
                    total += Backend::query_point(&flat, x, y).count();
                }
                black_box(total)
            });
        });
    }
    group.finish();
}

fn bench_region_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_region");
    let boxes = gen_grid_boxes(100, 60, 2.0);
    let mut tree = QuadTree::new(root(), QuadTreeConfig::default());
    let mut flat = FlatVec::new();
    fill(&mut tree, &boxes);
    fill(&mut flat, &boxes);
    let marquee = Aabb::from_corners(40.0, 10.0, 80.0, 30.0);

    group.bench_function("quadtree_marquee", |b| {
        b.iter(|| black_box(tree.query_region(marquee).len()));
    });
    group.bench_function("flatvec_marquee", |b| {
        b.iter(|| black_box(Backend::query_region(&flat, marquee).count()));
    });
    group.finish();
}

criterion_group!(benches, bench_build, bench_point_queries, bench_region_queries);
criterion_main!(benches);
