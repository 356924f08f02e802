use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ChartError, ChartResult};

/// A single value from the remote cube. `numeric` is NaN when the source
/// cell is non-numeric; measure positions always carry a number.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Cell {
    pub text: String,
    pub numeric: f64,
}

impl Cell {
    pub fn new(text: impl Into<String>, numeric: f64) -> Self {
        Self {
            text: text.into(),
            numeric,
        }
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        let numeric_eq = self.numeric == other.numeric
            || (self.numeric.is_nan() && other.numeric.is_nan());
        self.text == other.text && numeric_eq
    }
}

/// One normalized category row. Cell roles are positional in the wire
/// matrix: dimension, average, low, high, rolling average.
#[derive(Clone, Debug, PartialEq)]
pub struct RowTuple {
    pub dimension: Cell,
    pub avg: Cell,
    pub low: Cell,
    pub high: Cell,
    pub rolling: Cell,
}

impl RowTuple {
    pub const ARITY: usize = 5;

    /// Builds a row from a wire matrix row. Cells past the fifth are
    /// ignored; fewer than five is a malformed row.
    pub fn from_wire(cells: Vec<Cell>) -> ChartResult<Self> {
        let got = cells.len();
        let mut cells = cells.into_iter();
        match (
            cells.next(),
            cells.next(),
            cells.next(),
            cells.next(),
            cells.next(),
        ) {
            (Some(dimension), Some(avg), Some(low), Some(high), Some(rolling)) => Ok(Self {
                dimension,
                avg,
                low,
                high,
                rolling,
            }),
            _ => Err(ChartError::MalformedRow(format!(
                "expected {} cells, got {got}",
                Self::ARITY
            ))),
        }
    }

    /// Stable reconciliation key.
    pub fn key(&self) -> &str {
        &self.dimension.text
    }
}

/// Ordered collection of rows. Order is the category display order;
/// each `dimension.text` is unique within the set.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RowSet {
    rows: Vec<RowTuple>,
}

impl RowSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes a wire matrix. Malformed rows and rows with a duplicate
    /// category key are dropped, not surfaced.
    pub fn from_matrix(matrix: Vec<Vec<Cell>>) -> Self {
        let mut rows: Vec<RowTuple> = Vec::with_capacity(matrix.len());
        let mut seen = HashSet::new();
        for wire in matrix {
            match RowTuple::from_wire(wire) {
                Ok(row) => {
                    if seen.insert(row.dimension.text.clone()) {
                        rows.push(row);
                    } else {
                        warn!(key = %row.dimension.text, "dropping row with duplicate category key");
                    }
                }
                Err(err) => warn!(%err, "dropping malformed row"),
            }
        }
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowTuple> {
        self.rows.iter()
    }

    pub fn rows(&self) -> &[RowTuple] {
        &self.rows
    }

    /// Category labels in display order.
    pub fn labels(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.dimension.text.clone()).collect()
    }

    /// `(min of lows, max of highs)` over finite values, or None when no
    /// row carries a finite bound.
    pub fn value_extent(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for row in &self.rows {
            if row.low.numeric.is_finite() {
                min = min.min(row.low.numeric);
            }
            if row.high.numeric.is_finite() {
                max = max.max(row.high.numeric);
            }
        }
        (min <= max).then_some((min, max))
    }
}
