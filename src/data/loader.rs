use std::fs;
use std::path::Path;

use thiserror::Error;

use super::expr::ColumnExpr;
use super::model::Waveform;

// ---------------------------------------------------------------------------
// Waveform file loader
// ---------------------------------------------------------------------------

/// Failure while reading or parsing one waveform file.
///
/// Line numbers are 1-based file line numbers, counting the header rows.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading waveform file: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing header line {line}")]
    MissingHeader { line: usize },
    #[error("line {line}: expected at least {column} columns, found {found}")]
    MissingColumn {
        line: usize,
        column: usize,
        found: usize,
    },
    #[error("line {line}: '{token}' is not a number")]
    BadNumber { line: usize, token: String },
}

/// Load one waveform file.
///
/// Expected layout (whitespace-delimited; the simulator writes tabs):
///
/// ```text
/// Time  v(in)  v(out)  i(0)     <- signal names
/// s     V      V       A        <- units
/// 0.0   0.0    0.0     0.0      <- data rows, column 0 is the X axis
/// ...
/// ```
///
/// The expression picks the Y series: `Select(n)` reads column `n` of each
/// data row, `Difference(a, b)` reads column `a` minus column `b`. Axis
/// names and units come from the two header rows at column 0 and the
/// expression's primary column.
pub fn load_file(path: &Path, expr: &ColumnExpr) -> Result<Waveform, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_waveform(&text, expr)
}

/// Parse waveform text. One linear pass: two header rows, then data rows in
/// file order. The first malformed row aborts the whole parse.
pub fn parse_waveform(text: &str, expr: &ColumnExpr) -> Result<Waveform, LoadError> {
    let mut lines = text.lines().enumerate();

    let (x_name, y_name) = header_fields(lines.next(), 1, expr)?;
    let (x_unit, y_unit) = header_fields(lines.next(), 2, expr)?;

    let mut x = Vec::new();
    let mut y = Vec::new();

    for (idx, line) in lines {
        let lineno = idx + 1;
        let row: Vec<&str> = line.split_whitespace().collect();

        x.push(number_at(&row, 0, lineno)?);

        let mut value = number_at(&row, expr.primary(), lineno)?;
        if let ColumnExpr::Difference(_, b) = expr {
            value -= number_at(&row, *b, lineno)?;
        }
        y.push(value);
    }

    Ok(Waveform {
        x_name,
        x_unit,
        y_name,
        y_unit,
        x,
        y,
    })
}

/// Pull column 0 and the primary column out of a header row.
fn header_fields(
    line: Option<(usize, &str)>,
    lineno: usize,
    expr: &ColumnExpr,
) -> Result<(String, String), LoadError> {
    let (_, line) = line.ok_or(LoadError::MissingHeader { line: lineno })?;
    let row: Vec<&str> = line.split_whitespace().collect();

    let x = token_at(&row, 0, lineno)?;
    let y = token_at(&row, expr.primary(), lineno)?;
    Ok((x.to_string(), y.to_string()))
}

fn token_at<'a>(row: &[&'a str], col: usize, line: usize) -> Result<&'a str, LoadError> {
    row.get(col).copied().ok_or(LoadError::MissingColumn {
        line,
        column: col + 1,
        found: row.len(),
    })
}

fn number_at(row: &[&str], col: usize, line: usize) -> Result<f64, LoadError> {
    let token = token_at(row, col, line)?;
    token.parse().map_err(|_| LoadError::BadNumber {
        line,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const WAVE_DATA: &str = "Time\tv(in)\tv(out)\ti(0)\n\
                             s\tV\tV\tA\n\
                             0.0\t0.0\t0.0\t0.0\n\
                             1.0\t5.0\t1.5\t0.125\n\
                             2.0\t5.0\t3.25\t0.25\n";

    #[test]
    fn selects_one_column() {
        let wave = parse_waveform(WAVE_DATA, &ColumnExpr::Select(2)).unwrap();

        assert_eq!(wave.x_name, "Time");
        assert_eq!(wave.x_unit, "s");
        assert_eq!(wave.y_name, "v(out)");
        assert_eq!(wave.y_unit, "V");
        assert_eq!(wave.x, vec![0.0, 1.0, 2.0]);
        assert_eq!(wave.y, vec![0.0, 1.5, 3.25]);
    }

    #[test]
    fn difference_subtracts_second_column() {
        let wave = parse_waveform(WAVE_DATA, &ColumnExpr::Difference(1, 2)).unwrap();

        // Names still come from the primary column.
        assert_eq!(wave.y_name, "v(in)");
        assert_eq!(wave.y_unit, "V");
        assert_eq!(wave.y, vec![0.0, 3.5, 1.75]);
    }

    #[test]
    fn preserves_row_order_and_lengths() {
        let wave = parse_waveform(WAVE_DATA, &ColumnExpr::Select(3)).unwrap();

        assert_eq!(wave.len(), 3);
        assert_eq!(wave.x.len(), wave.y.len());
        assert_eq!(wave.points(), vec![[0.0, 0.0], [1.0, 0.125], [2.0, 0.25]]);
        assert_eq!(wave.last_point(), Some([2.0, 0.25]));
    }

    #[test]
    fn header_only_file_is_valid() {
        let wave = parse_waveform("t v1 v2\ns V V\n", &ColumnExpr::Select(2)).unwrap();

        assert_eq!(wave.x_name, "t");
        assert_eq!(wave.y_name, "v2");
        assert!(wave.is_empty());
        assert_eq!(wave.last_point(), None);
    }

    #[test]
    fn missing_header_lines_fail() {
        assert!(matches!(
            parse_waveform("", &ColumnExpr::Select(1)),
            Err(LoadError::MissingHeader { line: 1 })
        ));
        assert!(matches!(
            parse_waveform("t v1\n", &ColumnExpr::Select(1)),
            Err(LoadError::MissingHeader { line: 2 })
        ));
    }

    #[test]
    fn short_header_row_fails() {
        assert!(matches!(
            parse_waveform("t v1\ns V\n", &ColumnExpr::Select(2)),
            Err(LoadError::MissingColumn { line: 1, .. })
        ));
    }

    #[test]
    fn short_data_row_fails() {
        let data = "t v1 v2\ns V V\n0.0 1.0 2.0\n1.0 1.0\n";
        assert!(matches!(
            parse_waveform(data, &ColumnExpr::Select(2)),
            Err(LoadError::MissingColumn {
                line: 4,
                column: 3,
                found: 2,
            })
        ));
    }

    #[test]
    fn non_numeric_token_fails() {
        let data = "t v1\ns V\n0.0 oops\n";
        let err = parse_waveform(data, &ColumnExpr::Select(1)).unwrap_err();
        match err {
            LoadError::BadNumber { line, token } => {
                assert_eq!(line, 3);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn difference_checks_secondary_column() {
        let data = "t v1 v2\ns V V\n0.0 1.0\n";
        assert!(matches!(
            parse_waveform(data, &ColumnExpr::Difference(1, 2)),
            Err(LoadError::MissingColumn { line: 3, .. })
        ));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_file(
            Path::new("/nonexistent/waveplot/run.dat"),
            &ColumnExpr::Select(1),
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }
}
