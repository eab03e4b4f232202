use std::fmt;
use std::str::FromStr;

use thiserror::Error;

// ---------------------------------------------------------------------------
// Column expressions – "2" selects a column, "3-2" subtracts two columns
// ---------------------------------------------------------------------------

/// Selector for the Y series of a waveform, parsed from a string like `"2"`
/// or `"3-2"`. Column indices count tokens of the full row, so column 0 is
/// the independent variable itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnExpr {
    /// Y is the raw value of one column.
    Select(usize),
    /// Y is the first column minus the second.
    Difference(usize, usize),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("'{0}' is not a column index")]
    BadIndex(String),
    #[error("expected COL or COL-COL, got '{0}'")]
    BadShape(String),
}

impl ColumnExpr {
    /// The column whose header entry names the Y axis: the selected column,
    /// or the minuend of a difference.
    pub fn primary(&self) -> usize {
        match self {
            ColumnExpr::Select(col) => *col,
            ColumnExpr::Difference(a, _) => *a,
        }
    }
}

impl FromStr for ColumnExpr {
    type Err = ExprError;

    /// Grammar: `INDEX` or `INDEX - INDEX`, whitespace around the operator
    /// allowed. Splitting on every `-` and keeping the non-empty pieces
    /// covers both shapes in one pass.
    ///
    /// No bounds checking happens here; an out-of-range index surfaces from
    /// the loader once a header or data row is actually indexed.
    fn from_str(s: &str) -> Result<Self, ExprError> {
        let parts: Vec<&str> = s
            .split('-')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        let index = |part: &str| {
            part.parse::<usize>()
                .map_err(|_| ExprError::BadIndex(part.to_string()))
        };

        match parts.as_slice() {
            [col] => Ok(ColumnExpr::Select(index(col)?)),
            [a, b] => Ok(ColumnExpr::Difference(index(a)?, index(b)?)),
            _ => Err(ExprError::BadShape(s.trim().to_string())),
        }
    }
}

impl fmt::Display for ColumnExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnExpr::Select(col) => write!(f, "{col}"),
            ColumnExpr::Difference(a, b) => write!(f, "{a}-{b}"),
        }
    }
}

/// Parse a comma-separated expression list (the `--expr` argument).
/// The first malformed element fails the whole list.
pub fn parse_expr_list(s: &str) -> Result<Vec<ColumnExpr>, ExprError> {
    s.split(',').map(|part| part.trim().parse()).collect()
}
