pub mod matmul;

use crate::error::{MatrixError, Result};
use crate::kernels::RowKernels;
use crate::partition::RowRange;

/// Pure-Rust CPU kernels.
///
/// Straightforward loops over the assigned rows. Integer overflow wraps in
/// Sum and Multiply; Reduce accumulates in `i64` and wraps on overflow.
#[derive(Debug, Clone)]
pub struct CpuKernels;

impl CpuKernels {
    pub fn new() -> Self {
        CpuKernels
    }
}

impl Default for CpuKernels {
    fn default() -> Self {
        Self::new()
    }
}

fn check_input(m: &[i32], n: usize) -> Result<()> {
    if m.len() != n * n {
        return Err(MatrixError::LengthMismatch {
            dim: n,
            len: m.len(),
        });
    }
    Ok(())
}

fn check_rows(rows: RowRange, n: usize) -> Result<()> {
    if rows.start > rows.end || rows.end > n {
        return Err(MatrixError::RowsOutOfBounds {
            rows: rows.to_string(),
            dim: n,
        });
    }
    Ok(())
}

fn check_output(out: &[i32], rows: RowRange, n: usize) -> Result<()> {
    let expected = rows.len() * n;
    if out.len() != expected {
        return Err(MatrixError::OutputMismatch {
            rows: rows.to_string(),
            expected,
            got: out.len(),
        });
    }
    Ok(())
}

impl RowKernels for CpuKernels {
    fn name(&self) -> &str {
        "cpu"
    }

    fn sum_rows(
        &self,
        a: &[i32],
        b: &[i32],
        out: &mut [i32],
        rows: RowRange,
        n: usize,
    ) -> Result<()> {
        check_input(a, n)?;
        check_input(b, n)?;
        check_rows(rows, n)?;
        check_output(out, rows, n)?;

        let span = rows.elements(n);
        for ((dst, &x), &y) in out.iter_mut().zip(&a[span.clone()]).zip(&b[span]) {
            *dst = x.wrapping_add(y);
        }
        Ok(())
    }

    fn multiply_rows(
        &self,
        d: &[i32],
        c: &[i32],
        out: &mut [i32],
        rows: RowRange,
        n: usize,
    ) -> Result<()> {
        check_input(d, n)?;
        check_input(c, n)?;
        check_rows(rows, n)?;
        check_output(out, rows, n)?;

        matmul::matmul_rows(d, c, out, rows, n);
        Ok(())
    }

    fn reduce_rows(&self, e: &[i32], rows: RowRange, n: usize) -> Result<i64> {
        check_input(e, n)?;
        check_rows(rows, n)?;

        Ok(e[rows.elements(n)]
            .iter()
            .fold(0i64, |acc, &v| acc.wrapping_add(v as i64)))
    }
}
