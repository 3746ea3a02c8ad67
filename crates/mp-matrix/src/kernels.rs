use std::fmt::Debug;

use crate::error::Result;
use crate::partition::RowRange;

/// Row-range kernels for the three compute stages.
///
/// Every kernel works on one partition `rows` of an `n` x `n` problem.
/// Inputs are whole row-major matrices; `out` is only the slice of the
/// destination matrix covering `rows`, so concurrent workers can never
/// write the same element.
pub trait RowKernels: Send + Sync + Debug {
    /// Returns the name of this kernel set (e.g., "cpu").
    fn name(&self) -> &str;

    /// Element-wise sum over `rows`: `out[i][j] = a[i][j] + b[i][j]`.
    ///
    /// Overflow wraps.
    fn sum_rows(
        &self,
        a: &[i32],
        b: &[i32],
        out: &mut [i32],
        rows: RowRange,
        n: usize,
    ) -> Result<()>;

    /// Matrix product rows: `out[i][j] = sum_k d[i][k] * c[k][j]`.
    ///
    /// Reads `d` only within `rows` but reads all of `c`. Overflow wraps.
    fn multiply_rows(
        &self,
        d: &[i32],
        c: &[i32],
        out: &mut [i32],
        rows: RowRange,
        n: usize,
    ) -> Result<()>;

    /// Sum of every element of `e` within `rows`, as a 64-bit local total.
    fn reduce_rows(&self, e: &[i32], rows: RowRange, n: usize) -> Result<i64>;
}
