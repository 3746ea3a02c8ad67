// Row-block integer matmul used by CpuKernels::multiply_rows.

use crate::partition::RowRange;

/// Compute rows `rows` of `d * c` into `out`.
///
/// `out` holds exactly `rows.len() * n` elements. The `i-k-j` loop order
/// walks `c` and `out` row by row.
pub(crate) fn matmul_rows(d: &[i32], c: &[i32], out: &mut [i32], rows: RowRange, n: usize) {
    for (local, i) in rows.rows().enumerate() {
        let out_row = &mut out[local * n..(local + 1) * n];
        out_row.fill(0);
        let d_row = &d[i * n..(i + 1) * n];
        for (k, &d_ik) in d_row.iter().enumerate() {
            let c_row = &c[k * n..(k + 1) * n];
            for (acc, &c_kj) in out_row.iter_mut().zip(c_row) {
                *acc = acc.wrapping_add(d_ik.wrapping_mul(c_kj));
            }
        }
    }
}
