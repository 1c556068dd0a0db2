use crate::{Point, PointIndex, Rectangle};

/// Brute-force baseline: every query checks every point.
#[derive(Clone, Debug, Default)]
pub struct LinearScan {
    points: Vec<Point>,
}

impl LinearScan {
    pub fn new(points: Vec<Point>) -> Self {
        LinearScan { points }
    }
}

impl PointIndex for LinearScan {
    fn len(&self) -> usize {
        self.points.len()
    }

    fn envelope(&self) -> Rectangle {
        Rectangle::of(&self.points)
    }

    fn insert(&mut self, point: Point) {
        self.points.push(point);
    }

    fn query(&self, rect: &Rectangle) -> usize {
        self.points.iter().filter(|p| rect.contains(*p)).count()
    }

    fn query_ids(&self, rect: &Rectangle) -> Vec<i64> {
        self.points
            .iter()
            .filter(|p| rect.contains(*p))
            .map(|p| p.id)
            .collect()
    }
}
