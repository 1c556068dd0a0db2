//! Runs a batch of queries against both the R-tree and the linear scan, timing
//! each and recording any disagreement.

use std::convert::TryFrom;
use std::time::{Duration, Instant};

use log::{info, warn};

use crate::{LinearScan, Point, PointIndex, RTree, Rectangle};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct QueryOutcome {
    pub scan: usize,
    pub rtree: usize,
}

impl QueryOutcome {
    pub fn is_match(&self) -> bool {
        self.scan == self.rtree
    }
}

#[derive(Clone, Debug)]
pub struct Comparison {
    pub outcomes: Vec<QueryOutcome>,
    pub build_time: Duration,
    pub scan_time: Duration,
    pub rtree_time: Duration,
}

impl Comparison {
    pub fn run(points: &[Point], queries: &[Rectangle], degree: usize) -> Self {
        let start = Instant::now();
        let mut rtree = RTree::with_degree(degree);
        rtree.extend(points.iter().copied());
        let build_time = start.elapsed();
        info!(
            "Built R-tree of {} points in {:?} (height {}, {} nodes)",
            rtree.len(),
            build_time,
            rtree.height(),
            rtree.node_count()
        );

        let scan = LinearScan::new(points.to_vec());
        let (scan_counts, scan_time) = time_queries(&scan, queries);
        let (rtree_counts, rtree_time) = time_queries(&rtree, queries);

        let outcomes: Vec<QueryOutcome> = scan_counts
            .into_iter()
            .zip(rtree_counts)
            .map(|(scan, rtree)| QueryOutcome { scan, rtree })
            .collect();

        let comparison = Comparison {
            outcomes,
            build_time,
            scan_time,
            rtree_time,
        };
        for number in comparison.mismatches() {
            let outcome = comparison.outcomes[number - 1];
            warn!(
                "Query {} disagrees: scan found {}, R-tree found {}",
                number, outcome.scan, outcome.rtree
            );
        }
        info!(
            "{} queries: scan {:?}, R-tree {:?}",
            queries.len(),
            scan_time,
            rtree_time
        );
        comparison
    }

    /// 1-based numbers of the queries where the two methods disagree.
    pub fn mismatches(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .enumerate()
            .filter(|(_, o)| !o.is_match())
            .map(|(i, _)| i + 1)
            .collect()
    }

    /// How many times faster the R-tree answered the batch.
    pub fn speedup(&self) -> Option<f64> {
        if self.rtree_time.as_nanos() == 0 {
            None
        } else {
            Some(self.scan_time.as_secs_f64() / self.rtree_time.as_secs_f64())
        }
    }

    pub fn average_scan_time(&self) -> Duration {
        average(self.scan_time, self.outcomes.len())
    }

    pub fn average_rtree_time(&self) -> Duration {
        average(self.rtree_time, self.outcomes.len())
    }
}

fn average(total: Duration, count: usize) -> Duration {
    if count == 0 {
        return Duration::default();
    }
    match u32::try_from(count) {
        Ok(count) => total / count,
        Err(_) => Duration::from_secs_f64(total.as_secs_f64() / count as f64),
    }
}

fn time_queries(index: &impl PointIndex, queries: &[Rectangle]) -> (Vec<usize>, Duration) {
    let start = Instant::now();
    let counts = queries.iter().map(|q| index.query(q)).collect();
    (counts, start.elapsed())
}
