//! Flat-text matrix codec.
//!
//! A matrix file holds `n` rows of `n` whitespace-separated signed decimal
//! integers. Readers only care about the token stream, so line breaks are
//! not checked; writers emit one row per line with every value followed by
//! a single space.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::{debug, warn};

use crate::error::{MatrixError, Result};
use crate::matrix::Matrix;

/// Parse an `n` x `n` matrix from a token stream.
///
/// Exactly `n * n` integers are consumed; anything after them is ignored.
/// Parsing stops at the first token that is not an `i32`. When the stream
/// runs out early the remaining cells stay zero and a warning is logged,
/// since the file format has no way to report a short matrix.
pub fn parse_matrix<R: BufRead>(reader: R, n: usize) -> Result<Matrix> {
    let mut m = Matrix::zeros(n)?;
    let total = m.len();
    let cells = m.as_mut_slice();
    let mut filled = 0usize;

    'lines: for line in reader.lines() {
        let line = line?;
        for token in line.split_whitespace() {
            if filled == total {
                break 'lines;
            }
            match token.parse::<i32>() {
                Ok(v) => {
                    cells[filled] = v;
                    filled += 1;
                }
                Err(_) => {
                    warn!(token, cell = filled, "non-integer token, stopping");
                    break 'lines;
                }
            }
        }
        if filled == total {
            break;
        }
    }

    if filled < total {
        warn!(
            expected = total,
            found = filled,
            "matrix input is short, trailing cells left as zero"
        );
    }
    Ok(m)
}

/// Write `m` in the flat-text format.
pub fn write_matrix_to<W: Write>(mut writer: W, m: &Matrix) -> Result<()> {
    for i in 0..m.dim() {
        for v in m.row(i) {
            write!(writer, "{} ", v)?;
        }
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Attach `path` to bare stream errors.
fn with_path(err: MatrixError, path: &Path) -> MatrixError {
    match err {
        MatrixError::Stream(source) => MatrixError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    }
}

/// Read an `n` x `n` matrix from the file at `path`.
///
/// # Errors
/// Returns `Open` if the file cannot be opened and `Io` if reading fails.
pub fn read_matrix(path: &Path, n: usize) -> Result<Matrix> {
    let file = File::open(path).map_err(|source| MatrixError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), n, "reading matrix");
    parse_matrix(BufReader::new(file), n).map_err(|e| with_path(e, path))
}

/// Create (or truncate) the file at `path` and write `m` into it.
///
/// # Errors
/// Returns `Create` if the file cannot be opened for writing and `Io` if
/// writing fails.
pub fn write_matrix(path: &Path, m: &Matrix) -> Result<()> {
    let file = File::create(path).map_err(|source| MatrixError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), n = m.dim(), "writing matrix");
    write_matrix_to(BufWriter::new(file), m).map_err(|e| with_path(e, path))
}
