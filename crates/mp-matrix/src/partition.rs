use std::fmt;
use std::ops::Range;

use crate::error::{MatrixError, Result};

/// A half-open row range `[start, end)` owned by one worker for one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RowRange {
    pub start: usize,
    pub end: usize,
}

impl RowRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "row range {}..{} is reversed", start, end);
        RowRange { start, end }
    }

    /// Number of rows in the range.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn rows(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Flat element range of these rows in an `n`-column row-major buffer.
    pub fn elements(&self, n: usize) -> Range<usize> {
        self.start * n..self.end * n
    }
}

impl fmt::Display for RowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Split `[0, n)` into `threads` contiguous row ranges.
///
/// Each range holds `n / threads` rows, except the last which also absorbs
/// the `n % threads` remainder. When `threads > n` every range but the last
/// is empty. The same call is made for Sum, Multiply and Reduce, so worker
/// `i` sees the same rows in every stage.
///
/// # Errors
/// Returns `InvalidThreadCount` if `threads == 0`.
pub fn partitions(n: usize, threads: usize) -> Result<Vec<RowRange>> {
    if threads == 0 {
        return Err(MatrixError::InvalidThreadCount(threads));
    }

    let rows_per_thread = n / threads;
    let ranges = (0..threads)
        .map(|i| {
            let start = i * rows_per_thread;
            let end = if i == threads - 1 {
                n
            } else {
                (i + 1) * rows_per_thread
            };
            RowRange::new(start, end)
        })
        .collect();
    Ok(ranges)
}

/// Hand out one disjoint mutable row slice per partition, in partition order.
///
/// `parts` must be ascending and non-overlapping; gaps between them are
/// skipped. Slice `k` has `parts[k].len() * n` elements.
///
/// # Panics
/// Panics if the ranges overlap, are out of order, or run past `data`.
pub fn split_rows_mut<'a>(
    data: &'a mut [i32],
    n: usize,
    parts: &[RowRange],
) -> Vec<&'a mut [i32]> {
    let mut out = Vec::with_capacity(parts.len());
    let mut rest = data;
    let mut cursor = 0usize;

    for part in parts {
        assert!(
            part.start >= cursor,
            "partition {} overlaps or precedes row {}",
            part,
            cursor
        );
        let (_, tail) = std::mem::take(&mut rest).split_at_mut((part.start - cursor) * n);
        let (rows, tail) = tail.split_at_mut(part.len() * n);
        out.push(rows);
        rest = tail;
        cursor = part.end;
    }

    out
}
