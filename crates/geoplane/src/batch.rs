//! Batch orientations from an ordered list of (possibly incomplete) points.
//!
//! Rules
//! - A row with a missing coordinate (absent, blank, or `NaN`) is dropped.
//! - A present coordinate that is not a finite number fails the whole batch;
//!   nothing is computed in that case.
//! - Kept points are cut into consecutive, non-overlapping triples in input
//!   order. One or two trailing points are discarded.

use std::fmt;

use crate::cfg::POINTS_PER_PLANE;
use crate::geometry::Point3D;
use crate::orientation::{orientation_from_triple, PlaneOrientation};

/// One tabular row as raw text cells; `None` means the cell was absent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RawPoint<'a> {
    pub x: Option<&'a str>,
    pub y: Option<&'a str>,
    pub z: Option<&'a str>,
}

impl<'a> RawPoint<'a> {
    #[inline]
    pub fn new(x: Option<&'a str>, y: Option<&'a str>, z: Option<&'a str>) -> Self {
        Self { x, y, z }
    }
}

/// A present coordinate could not be read as a finite number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// 0-based index of the offending row in the input.
    pub row: usize,
    /// Column name: `x`, `y` or `z`.
    pub column: &'static str,
    pub value: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row {}: column `{}` is not a number: {:?}",
            self.row, self.column, self.value
        )
    }
}

impl std::error::Error for ParseError {}

/// Orientation of one triple together with the points it was computed from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TripleOrientation {
    pub points: [Point3D; 3],
    pub orientation: PlaneOrientation,
}

enum Cell {
    Missing,
    Value(f64),
}

fn parse_cell(row: usize, column: &'static str, raw: Option<&str>) -> Result<Cell, ParseError> {
    let Some(text) = raw.map(str::trim) else {
        return Ok(Cell::Missing);
    };
    if text.is_empty() {
        return Ok(Cell::Missing);
    }
    let err = || ParseError {
        row,
        column,
        value: text.to_string(),
    };
    let v: f64 = text.parse().map_err(|_| err())?;
    if v.is_nan() {
        Ok(Cell::Missing)
    } else if v.is_finite() {
        Ok(Cell::Value(v))
    } else {
        Err(err())
    }
}

/// Parse raw rows into points, dropping incomplete rows.
///
/// Every present cell is validated, including cells of rows that end up
/// dropped, so malformed input never passes silently.
pub fn parse_points(rows: &[RawPoint<'_>]) -> Result<Vec<Point3D>, ParseError> {
    let mut out = Vec::with_capacity(rows.len());
    for (i, r) in rows.iter().enumerate() {
        let x = parse_cell(i, "x", r.x)?;
        let y = parse_cell(i, "y", r.y)?;
        let z = parse_cell(i, "z", r.z)?;
        if let (Cell::Value(x), Cell::Value(y), Cell::Value(z)) = (x, y, z) {
            out.push(Point3D::new(x, y, z));
        }
    }
    Ok(out)
}

/// Consecutive non-overlapping triples; a 1–2 point remainder is dropped.
pub fn group_triples(points: &[Point3D]) -> Vec<[Point3D; 3]> {
    points
        .chunks_exact(POINTS_PER_PLANE)
        .map(|c| [c[0], c[1], c[2]])
        .collect()
}

/// Orientation per triple, in input order, with the source points.
pub fn compute_batch_triples(
    rows: &[RawPoint<'_>],
) -> Result<Vec<TripleOrientation>, ParseError> {
    let points = parse_points(rows)?;
    Ok(group_triples(&points)
        .into_iter()
        .map(|points| TripleOrientation {
            orientation: orientation_from_triple(&points[0], &points[1], &points[2]),
            points,
        })
        .collect())
}

/// Orientation per triple, in input order.
pub fn compute_batch(rows: &[RawPoint<'_>]) -> Result<Vec<PlaneOrientation>, ParseError> {
    Ok(compute_batch_triples(rows)?
        .into_iter()
        .map(|t| t.orientation)
        .collect())
}
