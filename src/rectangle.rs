#[derive(Copy, Clone, Debug, Eq)]
pub struct Rectangle {
    pub x_min: i32,
    pub y_min: i32,
    pub x_max: i32,
    pub y_max: i32,
}

impl PartialEq for Rectangle {
    fn eq(&self, other: &Self) -> bool {
        if self.is_empty() {
            other.is_empty()
        } else {
            self.x_min == other.x_min
                && self.y_min == other.y_min
                && self.x_max == other.x_max
                && self.y_max == other.y_max
        }
    }
}

pub trait HasEnvelope {
    fn envelope(&self) -> Rectangle;
}

impl HasEnvelope for Rectangle {
    fn envelope(&self) -> Rectangle {
        *self
    }
}

impl<T: HasEnvelope> HasEnvelope for &T {
    fn envelope(&self) -> Rectangle {
        T::envelope(*self)
    }
}

impl Rectangle {
    /// Build a rectangle from two opposite corners, in any order.
    pub fn new(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Rectangle {
            x_min: x1.min(x2),
            y_min: y1.min(y2),
            x_max: x1.max(x2),
            y_max: y1.max(y2),
        }
    }

    /// The union identity: covers nothing, intersects nothing.
    pub fn new_empty() -> Self {
        Rectangle {
            x_min: i32::MAX,
            y_min: i32::MAX,
            x_max: i32::MIN,
            y_max: i32::MIN,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.y_min > self.y_max
    }

    pub fn of<T: HasEnvelope>(items: &[T]) -> Self {
        items.iter().fold(Rectangle::new_empty(), |mut s, r| {
            s.expand(r.envelope());
            s
        })
    }

    /// Half perimeter, width plus height.
    pub fn perimeter(&self) -> i64 {
        if self.is_empty() {
            return 0;
        }
        (i64::from(self.x_max) - i64::from(self.x_min))
            + (i64::from(self.y_max) - i64::from(self.y_min))
    }

    /// How much the perimeter grows if this rectangle is widened to cover `item`.
    pub fn perimeter_increase<T: HasEnvelope>(&self, item: T) -> i64 {
        self.merge(item).perimeter() - self.perimeter()
    }

    /// Overlap test on doubled coordinates: the distance between centers must
    /// not exceed the sum of half extents on either axis.
    pub fn intersects<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        if self.is_empty() || other.is_empty() {
            return false;
        }
        let (cx, w) = self.doubled_x();
        let (other_cx, other_w) = other.doubled_x();
        let (cy, h) = self.doubled_y();
        let (other_cy, other_h) = other.doubled_y();
        (cx - other_cx).abs() <= w + other_w && (cy - other_cy).abs() <= h + other_h
    }

    pub fn contains<T: HasEnvelope>(&self, item: T) -> bool {
        let other = item.envelope();
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x_min <= other.x_min
            && self.x_max >= other.x_max
            && self.y_min <= other.y_min
            && self.y_max >= other.y_max
    }

    pub fn merge<T: HasEnvelope>(&self, item: T) -> Self {
        let mut merged = *self;
        merged.expand(item);
        merged
    }

    pub fn expand<T: HasEnvelope>(&mut self, item: T) {
        let rect = item.envelope();
        if rect.is_empty() {
            return;
        }
        self.x_min = self.x_min.min(rect.x_min);
        self.y_min = self.y_min.min(rect.y_min);
        self.x_max = self.x_max.max(rect.x_max);
        self.y_max = self.y_max.max(rect.y_max);
    }

    // (2 * center, full extent) along x
    fn doubled_x(&self) -> (i64, i64) {
        let (lo, hi) = (i64::from(self.x_min), i64::from(self.x_max));
        (lo + hi, hi - lo)
    }

    fn doubled_y(&self) -> (i64, i64) {
        let (lo, hi) = (i64::from(self.y_min), i64::from(self.y_max));
        (lo + hi, hi - lo)
    }
}
