use crate::{HasEnvelope, Rectangle};

/// An indexed point. The id is opaque to the tree and only reported back by
/// `query_ids`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub id: i64,
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(id: i64, x: i32, y: i32) -> Self {
        Point { id, x, y }
    }
}

impl From<(i64, i32, i32)> for Point {
    fn from((id, x, y): (i64, i32, i32)) -> Self {
        Point { id, x, y }
    }
}

impl HasEnvelope for Point {
    fn envelope(&self) -> Rectangle {
        Rectangle {
            x_min: self.x,
            y_min: self.y,
            x_max: self.x,
            y_max: self.y,
        }
    }
}
