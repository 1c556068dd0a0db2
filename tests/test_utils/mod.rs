#![allow(dead_code)]

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use point_rtree::{Point, Rectangle};

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn get_random_points(universe: Rectangle, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for i in 0..n {
        results.push(Point::new(
            i as i64,
            rng.gen_range(universe.x_min, universe.x_max + 1),
            rng.gen_range(universe.y_min, universe.y_max + 1),
        ));
    }

    results
}

pub fn get_random_rects(universe: Rectangle, n: usize, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        results.push(Rectangle::new(
            rng.gen_range(universe.x_min, universe.x_max + 1),
            rng.gen_range(universe.y_min, universe.y_max + 1),
            rng.gen_range(universe.x_min, universe.x_max + 1),
            rng.gen_range(universe.y_min, universe.y_max + 1),
        ));
    }

    results
}

/// Small boxes, so most queries prune most of the tree.
pub fn get_random_windows(universe: Rectangle, n: usize, max_side: i32, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        let x = rng.gen_range(universe.x_min, universe.x_max + 1);
        let y = rng.gen_range(universe.y_min, universe.y_max + 1);
        results.push(Rectangle::new(
            x,
            y,
            x + rng.gen_range(0, max_side + 1),
            y + rng.gen_range(0, max_side + 1),
        ));
    }

    results
}
