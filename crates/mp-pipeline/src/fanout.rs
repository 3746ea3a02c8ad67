//! Fan-out/join over row partitions.
//!
//! Each call starts one scoped thread per partition and returns only after
//! all of them have been joined, which is the barrier between stages.
//! Threads never outlive the call.

use std::thread::{self, ScopedJoinHandle};

use mp_matrix::{split_rows_mut, RowRange};
use tracing::debug;

use crate::accumulator::ReductionAccumulator;
use crate::error::{PipelineError, Result};
use crate::stage::Stage;

/// Join a scoped thread, turning a panic into `WorkerPanicked`.
pub(crate) fn join<T>(stage: Stage, handle: ScopedJoinHandle<'_, T>) -> Result<T> {
    handle
        .join()
        .map_err(|_| PipelineError::WorkerPanicked { stage })
}

/// Run `work` once per partition, each with exclusive access to its rows
/// of `out`.
///
/// `work` receives the worker index, its row range, and the matching
/// `range.len() * n` slice of `out`. All workers are joined before the first
/// error (in worker order) is returned.
pub fn fan_out_rows<F>(
    stage: Stage,
    out: &mut [i32],
    n: usize,
    parts: &[RowRange],
    work: F,
) -> Result<()>
where
    F: Fn(usize, RowRange, &mut [i32]) -> mp_matrix::Result<()> + Sync,
{
    let slices = split_rows_mut(out, n, parts);
    let work = &work;

    let results: Vec<Result<()>> = thread::scope(|s| {
        let handles: Vec<_> = parts
            .iter()
            .copied()
            .zip(slices)
            .enumerate()
            .map(|(worker, (rows, slice))| {
                s.spawn(move || {
                    debug!(%stage, worker, %rows, "worker started");
                    work(worker, rows, slice)
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| join(stage, h).and_then(|r| r.map_err(PipelineError::from)))
            .collect()
    });

    results.into_iter().collect()
}

/// Run `work` once per partition and merge each local sum into `acc`.
///
/// Every worker merges exactly once, after finishing its rows. Returns after
/// all workers have been joined.
pub fn fan_out_reduce<F>(
    stage: Stage,
    parts: &[RowRange],
    acc: &ReductionAccumulator,
    work: F,
) -> Result<()>
where
    F: Fn(usize, RowRange) -> mp_matrix::Result<i64> + Sync,
{
    let work = &work;

    let results: Vec<Result<()>> = thread::scope(|s| {
        let handles: Vec<_> = parts
            .iter()
            .copied()
            .enumerate()
            .map(|(worker, rows)| {
                s.spawn(move || -> mp_matrix::Result<()> {
                    debug!(%stage, worker, %rows, "worker started");
                    let local = work(worker, rows)?;
                    acc.merge(local);
                    Ok(())
                })
            })
            .collect();

        handles
            .into_iter()
            .map(|h| join(stage, h).and_then(|r| r.map_err(PipelineError::from)))
            .collect()
    });

    results.into_iter().collect()
}
