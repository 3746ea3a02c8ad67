use std::fmt;

use crate::error::{MatrixError, Result};
use crate::partition::RowRange;

/// A square matrix of `i32` stored contiguously in row-major order.
///
/// Every matrix in a pipeline run shares the same dimension `n`, so the
/// dimension is stored once and all indexing is `i * n + j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    dim: usize,
    data: Vec<i32>,
}

impl Matrix {
    /// Create a zero-filled `dim` x `dim` matrix.
    ///
    /// # Errors
    /// Returns `InvalidDimension` if `dim == 0`.
    pub fn zeros(dim: usize) -> Result<Self> {
        if dim == 0 {
            return Err(MatrixError::InvalidDimension(dim));
        }
        Ok(Matrix {
            dim,
            data: vec![0; dim * dim],
        })
    }

    /// Wrap row-major data as a `dim` x `dim` matrix.
    ///
    /// # Errors
    /// Returns `InvalidDimension` if `dim == 0` and `LengthMismatch` if
    /// `data.len() != dim * dim`.
    pub fn from_vec(dim: usize, data: Vec<i32>) -> Result<Self> {
        if dim == 0 {
            return Err(MatrixError::InvalidDimension(dim));
        }
        if data.len() != dim * dim {
            return Err(MatrixError::LengthMismatch {
                dim,
                len: data.len(),
            });
        }
        Ok(Matrix { dim, data })
    }

    /// Create the `dim` x `dim` identity matrix.
    pub fn identity(dim: usize) -> Result<Self> {
        let mut m = Self::zeros(dim)?;
        for i in 0..dim {
            m.data[i * dim + i] = 1;
        }
        Ok(m)
    }

    /// Matrix dimension `n`.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Total number of elements (`n * n`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false: a matrix has at least one element.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Element at row `i`, column `j`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> i32 {
        assert!(i < self.dim, "row {} out of bounds for dim {}", i, self.dim);
        assert!(j < self.dim, "column {} out of bounds for dim {}", j, self.dim);
        self.data[i * self.dim + j]
    }

    /// Row `i` as a slice of `n` elements.
    pub fn row(&self, i: usize) -> &[i32] {
        let start = i * self.dim;
        &self.data[start..start + self.dim]
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [i32] {
        &mut self.data
    }

    /// Mutable view of the rows covered by `range`.
    pub fn rows_mut(&mut self, range: RowRange) -> &mut [i32] {
        &mut self.data[range.start * self.dim..range.end * self.dim]
    }

    /// Fail unless this matrix has dimension `dim`.
    pub fn ensure_dim(&self, dim: usize) -> Result<()> {
        if self.dim != dim {
            return Err(MatrixError::DimensionMismatch {
                expected: dim,
                got: self.dim,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.dim {
            for (j, v) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", v)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zeros() {
        let m = Matrix::zeros(3).unwrap();
        assert_eq!(m.dim(), 3);
        assert_eq!(m.len(), 9);
        assert!(m.as_slice().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_zero_dim_rejected() {
        assert!(matches!(
            Matrix::zeros(0),
            Err(MatrixError::InvalidDimension(0))
        ));
        assert!(Matrix::from_vec(0, vec![]).is_err());
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Matrix::from_vec(2, vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, MatrixError::LengthMismatch { dim: 2, len: 3 }));
    }

    #[test]
    fn test_identity() {
        let m = Matrix::identity(3).unwrap();
        assert_eq!(m.as_slice(), &[1, 0, 0, 0, 1, 0, 0, 0, 1]);
    }

    #[test]
    fn test_indexing() {
        let m = Matrix::from_vec(2, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(m.get(0, 1), 2);
        assert_eq!(m.get(1, 0), 3);
        assert_eq!(m.row(1), &[3, 4]);
    }

    #[test]
    #[should_panic(expected = "row 2 out of bounds")]
    fn test_get_row_out_of_bounds() {
        let m = Matrix::zeros(2).unwrap();
        m.get(2, 0);
    }

    #[test]
    #[should_panic(expected = "column 2 out of bounds")]
    fn test_get_column_out_of_bounds() {
        let m = Matrix::zeros(2).unwrap();
        m.get(0, 2);
    }

    #[test]
    fn test_rows_mut() {
        let mut m = Matrix::zeros(3).unwrap();
        m.rows_mut(RowRange::new(1, 3)).fill(7);
        assert_eq!(m.row(0), &[0, 0, 0]);
        assert_eq!(m.row(1), &[7, 7, 7]);
        assert_eq!(m.row(2), &[7, 7, 7]);
    }

    #[test]
    fn test_ensure_dim() {
        let m = Matrix::zeros(2).unwrap();
        assert!(m.ensure_dim(2).is_ok());
        assert!(matches!(
            m.ensure_dim(3),
            Err(MatrixError::DimensionMismatch { expected: 3, got: 2 })
        ));
    }

    #[test]
    fn test_display() {
        let m = Matrix::from_vec(2, vec![1, -2, 3, 4]).unwrap();
        assert_eq!(m.to_string(), "1 -2\n3 4\n");
    }
}
