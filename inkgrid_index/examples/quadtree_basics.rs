// Copyright 2025 the Inkgrid Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Basic usage of Inkgrid Index: insert, split, query, remove.

use inkgrid_index::{Aabb, QuadTree, QuadTreeConfig};

fn main() {
    let config = QuadTreeConfig {
        max_objects: 1,
        max_levels: 4,
    };
    let mut tree = QuadTree::new(Aabb::new(-100.0, -100.0, 300.0, 300.0), config);
    tree.insert(1_u32, Aabb::new(0.0, 0.0, 10.0, 10.0));
    tree.insert(2, Aabb::new(5.0, 5.0, 10.0, 10.0));
    tree.insert(3, Aabb::new(20.0, 20.0, 5.0, 5.0));
    println!("{tree:?}");

    for (x, y) in [(7.0, 7.0), (22.0, 22.0), (50.0, 50.0)] {
        println!("hits at ({x},{y}): {:?}", tree.query_point(x, y));
    }
    let region = Aabb::new(0.0, 0.0, 30.0, 30.0);
    println!("region {region:?}: {:?}", tree.query_region(region));

    tree.remove(2);
    for (owner, bounds) in tree.iter() {
        println!("{owner} @ level {:?}: {bounds:?}", tree.level_of(owner));
    }
}
