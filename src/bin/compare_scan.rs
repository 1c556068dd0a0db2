//! Builds an R-tree over a point file, answers every query in a query file
//! with both the tree and a linear scan, and writes a per-query report.
//!
//! Usage: `compare_scan [POINTS] [QUERIES] [REPORT]`, with `RTREE_DEGREE`
//! overriding the fan-out.

use std::env;
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::process;

use log::{info, warn};
use point_rtree::{dataset, Comparison, DEFAULT_DEGREE};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let points_path = args.next().unwrap_or_else(|| "dataset.txt".to_string());
    let queries_path = args.next().unwrap_or_else(|| "test_query.txt".to_string());
    let report_path = args.next().unwrap_or_else(|| "query_result.txt".to_string());
    let degree = match env::var("RTREE_DEGREE") {
        Ok(value) => value.parse()?,
        Err(_) => DEFAULT_DEGREE,
    };

    let points = dataset::load_points(&points_path)?;
    let queries = dataset::load_queries(&queries_path)?;
    info!(
        "Comparing {} queries over {} points with degree {}",
        queries.len(),
        points.len(),
        degree
    );

    let comparison = Comparison::run(&points, &queries, degree);

    println!("build R-tree: {:?}", comparison.build_time);
    println!(
        "total time for sequential queries: {:?}",
        comparison.scan_time
    );
    println!(
        "average time for sequential queries: {:?}",
        comparison.average_scan_time()
    );
    println!("total time for R-tree queries: {:?}", comparison.rtree_time);
    println!(
        "average time for R-tree queries: {:?}",
        comparison.average_rtree_time()
    );
    match comparison.speedup() {
        Some(speedup) => println!("R-tree is {:.2} times faster than sequential query", speedup),
        None => println!("R-tree queries took no measurable time"),
    }

    let report = BufWriter::new(File::create(&report_path)?);
    dataset::write_report(report, &comparison.outcomes)?;
    info!("Wrote report to {}", report_path);

    let mismatches = comparison.mismatches();
    if !mismatches.is_empty() {
        warn!("{} queries disagreed: {:?}", mismatches.len(), mismatches);
        process::exit(1);
    }
    Ok(())
}
