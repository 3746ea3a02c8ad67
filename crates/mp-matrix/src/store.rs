use crate::error::Result;
use crate::matrix::Matrix;

/// The five `n` x `n` matrices of one pipeline run.
///
/// A, B and C are filled by file reads, D by the Sum stage and E by the
/// Multiply stage. All five are allocated up front and dropped together.
#[derive(Debug, Clone)]
pub struct MatrixStore {
    pub a: Matrix,
    pub b: Matrix,
    pub c: Matrix,
    pub d: Matrix,
    pub e: Matrix,
}

impl MatrixStore {
    /// Allocate five zero-filled matrices of dimension `dim`.
    pub fn new(dim: usize) -> Result<Self> {
        Ok(MatrixStore {
            a: Matrix::zeros(dim)?,
            b: Matrix::zeros(dim)?,
            c: Matrix::zeros(dim)?,
            d: Matrix::zeros(dim)?,
            e: Matrix::zeros(dim)?,
        })
    }

    /// Shared dimension of every matrix in the store.
    pub fn dim(&self) -> usize {
        self.a.dim()
    }
}
