use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use point_rtree::{Point, Rectangle};

//// Utility functions

pub(crate) fn universe() -> Rectangle {
    Rectangle::new(0, 0, 1_000_000, 1_000_000)
}

pub(crate) fn get_random_points(rect: Rectangle, n: usize, seed: u64) -> Vec<Point> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for i in 0..n {
        results.push(Point::new(
            i as i64,
            rng.gen_range(rect.x_min, rect.x_max),
            rng.gen_range(rect.y_min, rect.y_max),
        ));
    }

    results
}

#[allow(dead_code)]
pub(crate) fn get_random_windows(rect: Rectangle, n: usize, side: i32, seed: u64) -> Vec<Rectangle> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut results = Vec::with_capacity(n);
    for _i in 0..n {
        let x = rng.gen_range(rect.x_min, rect.x_max - side);
        let y = rng.gen_range(rect.y_min, rect.y_max - side);
        results.push(Rectangle::new(x, y, x + side, y + side));
    }

    results
}
