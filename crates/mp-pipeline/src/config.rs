use std::path::{Path, PathBuf};

use crate::error::{PipelineError, Result};

/// File locations for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatrixPaths {
    /// Input A.
    pub a: PathBuf,
    /// Input B.
    pub b: PathBuf,
    /// Input C.
    pub c: PathBuf,
    /// Output D = A + B.
    pub d: PathBuf,
    /// Output E = D * C.
    pub e: PathBuf,
}

impl MatrixPaths {
    /// The three source files, labelled, in read order.
    pub fn inputs(&self) -> [(&'static str, &Path); 3] {
        [("A", &self.a), ("B", &self.b), ("C", &self.c)]
    }
}

/// Parameters of one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Worker threads per compute stage (T).
    pub threads: usize,
    /// Matrix dimension (n).
    pub dim: usize,
    pub paths: MatrixPaths,
}

impl PipelineConfig {
    pub fn new(threads: usize, dim: usize, paths: MatrixPaths) -> Self {
        PipelineConfig {
            threads,
            dim,
            paths,
        }
    }

    /// Check that T >= 1 and n >= 1.
    pub fn validate(&self) -> Result<()> {
        if self.threads == 0 {
            return Err(PipelineError::InvalidConfig(
                "thread count must be at least 1".to_string(),
            ));
        }
        if self.dim == 0 {
            return Err(PipelineError::InvalidConfig(
                "matrix dimension must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
