//! Loading point and query records from whitespace-delimited text, and
//! writing per-query result reports.
//!
//! Point lines are `id x y`; query lines are `x1 x2 y1 y2`. Blank lines are
//! skipped and line numbers in errors are 1-based.

use std::convert::TryInto;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;

use log::debug;
use thiserror::Error;

use crate::compare::QueryOutcome;
use crate::{Point, Rectangle};

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid integer {value:?}")]
    InvalidInteger {
        line: usize,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("line {line}: query bounds are inverted ({low} > {high})")]
    InvertedBounds { line: usize, low: i32, high: i32 },
}

pub type DatasetResult<T> = Result<T, DatasetError>;

pub fn parse_points(reader: impl BufRead) -> DatasetResult<Vec<Point>> {
    let mut points = Vec::new();
    for_each_record(reader, |line, fields| {
        let [id, x, y] = parse_fields::<3>(line, fields)?;
        points.push(Point {
            id: parse_int(line, id)?,
            x: parse_int(line, x)?,
            y: parse_int(line, y)?,
        });
        Ok(())
    })?;
    Ok(points)
}

pub fn parse_queries(reader: impl BufRead) -> DatasetResult<Vec<Rectangle>> {
    let mut queries = Vec::new();
    for_each_record(reader, |line, fields| {
        let [x1, x2, y1, y2] = parse_fields::<4>(line, fields)?;
        let (x_min, x_max): (i32, i32) = (parse_int(line, x1)?, parse_int(line, x2)?);
        let (y_min, y_max): (i32, i32) = (parse_int(line, y1)?, parse_int(line, y2)?);
        for &(low, high) in [(x_min, x_max), (y_min, y_max)].iter() {
            if low > high {
                return Err(DatasetError::InvertedBounds { line, low, high });
            }
        }
        queries.push(Rectangle {
            x_min,
            y_min,
            x_max,
            y_max,
        });
        Ok(())
    })?;
    Ok(queries)
}

pub fn load_points(path: impl AsRef<Path>) -> DatasetResult<Vec<Point>> {
    let path = path.as_ref();
    let points = parse_points(BufReader::new(File::open(path)?))?;
    debug!("Loaded {} points from {:?}", points.len(), path);
    Ok(points)
}

pub fn load_queries(path: impl AsRef<Path>) -> DatasetResult<Vec<Rectangle>> {
    let path = path.as_ref();
    let queries = parse_queries(BufReader::new(File::open(path)?))?;
    debug!("Loaded {} queries from {:?}", queries.len(), path);
    Ok(queries)
}

pub fn write_report(mut writer: impl Write, outcomes: &[QueryOutcome]) -> io::Result<()> {
    for (i, outcome) in outcomes.iter().enumerate() {
        writeln!(
            writer,
            "Query Number: {} Sequential Scan Result: {} R-Tree Result: {}",
            i + 1,
            outcome.scan,
            outcome.rtree
        )?;
    }
    writer.flush()
}

fn for_each_record<R, F>(reader: R, mut handle: F) -> DatasetResult<()>
where
    R: BufRead,
    F: FnMut(usize, Vec<&str>) -> DatasetResult<()>,
{
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }
        handle(idx + 1, fields)?;
    }
    Ok(())
}

fn parse_fields<const N: usize>(line: usize, fields: Vec<&str>) -> DatasetResult<[&str; N]> {
    let found = fields.len();
    fields.try_into().map_err(|_| DatasetError::FieldCount {
        line,
        expected: N,
        found,
    })
}

fn parse_int<T>(line: usize, value: &str) -> DatasetResult<T>
where
    T: FromStr<Err = ParseIntError>,
{
    value.parse().map_err(|source| DatasetError::InvalidInteger {
        line,
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points() {
        let text = "1 10 20\n2 -3 4\n\n  3   0 0  \n";
        let points = parse_points(text.as_bytes()).unwrap();
        assert_eq!(
            points,
            vec![
                Point::new(1, 10, 20),
                Point::new(2, -3, 4),
                Point::new(3, 0, 0)
            ]
        );
    }

    #[test]
    fn test_parse_queries_field_order() {
        // x1 x2 y1 y2
        let queries = parse_queries("0 10 5 6\n3 3 7 7\n".as_bytes()).unwrap();
        assert_eq!(
            queries,
            vec![Rectangle::new(0, 5, 10, 6), Rectangle::new(3, 7, 3, 7)]
        );
    }

    #[test]
    fn test_wrong_field_count() {
        let err = parse_points("1 2 3\n4 5\n".as_bytes()).unwrap_err();
        match err {
            DatasetError::FieldCount {
                line,
                expected,
                found,
            } => {
                assert_eq!((line, expected, found), (2, 3, 2));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_invalid_integer() {
        let err = parse_queries("\n0 1 x 3\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvalidInteger { line: 2, ref value, .. } if value == "x"
        ));
        assert_eq!(err.to_string(), "line 2: invalid integer \"x\"");
    }

    #[test]
    fn test_coordinate_out_of_range() {
        let err = parse_points("1 99999999999 0\n".as_bytes()).unwrap_err();
        assert!(matches!(err, DatasetError::InvalidInteger { line: 1, .. }));
    }

    #[test]
    fn test_inverted_bounds() {
        let err = parse_queries("5 1 0 0\n".as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            DatasetError::InvertedBounds {
                line: 1,
                low: 5,
                high: 1
            }
        ));
    }

    #[test]
    fn test_write_report() {
        let outcomes = vec![
            QueryOutcome { scan: 3, rtree: 3 },
            QueryOutcome { scan: 0, rtree: 0 },
        ];
        let mut buffer = Vec::new();
        write_report(&mut buffer, &outcomes).unwrap();
        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "Query Number: 1 Sequential Scan Result: 3 R-Tree Result: 3\n\
             Query Number: 2 Sequential Scan Result: 0 R-Tree Result: 0\n"
        );
    }
}
