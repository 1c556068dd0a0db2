pub mod compare;
pub mod dataset;
mod linear_scan;
mod node;
mod point;
mod point_index;
mod rectangle;
mod rtree;
mod utils;

pub use compare::{Comparison, QueryOutcome};
pub use dataset::{DatasetError, DatasetResult};
pub use linear_scan::LinearScan;
pub use point::Point;
pub use point_index::PointIndex;
pub use rectangle::{HasEnvelope, Rectangle};
pub use rtree::{RTree, DEFAULT_DEGREE};
