use crate::{Point, Rectangle};

/// A set of points answering closed-rectangle range queries.
pub trait PointIndex {
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn envelope(&self) -> Rectangle;
    fn insert(&mut self, point: Point);

    /// Number of points with x in [x_min, x_max] and y in [y_min, y_max].
    fn query(&self, rect: &Rectangle) -> usize;

    /// Ids of the points counted by `query`, in no particular order.
    fn query_ids(&self, rect: &Rectangle) -> Vec<i64>;
}
