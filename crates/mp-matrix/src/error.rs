use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatrixError {
    #[error("cannot open {} for reading", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot open {} for writing", .path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("IO error on {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),
    #[error("invalid matrix dimension: {0}")]
    InvalidDimension(usize),
    #[error("invalid thread count: {0}")]
    InvalidThreadCount(usize),
    #[error("dimension mismatch: expected {expected}x{expected}, got {got}x{got}")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("data length {len} does not match {dim}x{dim}")]
    LengthMismatch { dim: usize, len: usize },
    #[error("output slice for rows {rows} holds {got} elements, expected {expected}")]
    OutputMismatch {
        rows: String,
        expected: usize,
        got: usize,
    },
    #[error("rows {rows} out of bounds for dimension {dim}")]
    RowsOutOfBounds { rows: String, dim: usize },
}

pub type Result<T> = std::result::Result<T, MatrixError>;
