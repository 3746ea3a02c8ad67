use std::fs::File;
use std::thread;
use std::time::{Duration, Instant};

use mp_matrix::{
    partitions, read_matrix, write_matrix, CpuKernels, Matrix, MatrixError, MatrixStore,
    RowKernels, RowRange,
};
use tracing::{debug, info};

use crate::accumulator::ReductionAccumulator;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::fanout::{fan_out_reduce, fan_out_rows, join};
use crate::stage::{PipelineReport, Stage, StageTimings};

/// Results of the three compute stages over in-memory inputs.
#[derive(Debug, Clone)]
pub struct ComputeOutcome {
    /// D = A + B.
    pub d: Matrix,
    /// E = D * C.
    pub e: Matrix,
    /// Sum of all elements of E.
    pub reduction: i64,
    pub timings: StageTimings,
}

/// Drives the five pipeline stages with `threads` workers per compute stage.
///
/// Row partitions are computed once per run and reused for Sum, Multiply and
/// Reduce, so worker `i` handles the same rows in every stage.
#[derive(Debug)]
pub struct Pipeline {
    threads: usize,
    kernels: Box<dyn RowKernels>,
}

impl Pipeline {
    /// Create a pipeline backed by the CPU kernels.
    pub fn new(threads: usize) -> Result<Self> {
        Self::with_kernels(threads, Box::new(CpuKernels::new()))
    }

    /// Create a pipeline backed by the given kernels.
    pub fn with_kernels(threads: usize, kernels: Box<dyn RowKernels>) -> Result<Self> {
        if threads == 0 {
            return Err(MatrixError::InvalidThreadCount(threads).into());
        }
        Ok(Pipeline { threads, kernels })
    }

    /// Run the full file-backed pipeline described by `config`.
    ///
    /// All three inputs are opened before any stage starts, so a missing
    /// source file aborts the run without creating D or E.
    pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
        config.validate()?;
        let pipeline = Pipeline::new(config.threads)?;
        pipeline.run_with(config)
    }

    /// Like [`run`](Self::run) but using this pipeline's kernels and thread
    /// count. `config.threads` is ignored.
    pub fn run_with(&self, config: &PipelineConfig) -> Result<PipelineReport> {
        config.validate()?;
        let n = config.dim;
        let paths = &config.paths;

        for (label, path) in paths.inputs() {
            File::open(path).map_err(|source| MatrixError::Open {
                path: path.to_path_buf(),
                source,
            })?;
            debug!(matrix = label, path = %path.display(), "input is readable");
        }

        let mut store = MatrixStore::new(n)?;
        let parts = partitions(n, self.threads)?;
        info!(
            n,
            threads = self.threads,
            kernels = self.kernels.name(),
            "pipeline starting"
        );

        // ReadAB
        let start = Instant::now();
        let (a, b) = thread::scope(|s| {
            let read_a = s.spawn(|| read_matrix(&paths.a, n));
            let read_b = s.spawn(|| read_matrix(&paths.b, n));
            let a = join(Stage::ReadAB, read_a);
            let b = join(Stage::ReadAB, read_b);
            (a, b)
        });
        store.a = a??;
        store.b = b??;
        stage_complete(Stage::ReadAB, start.elapsed());

        // Sum
        let sum = self.sum_stage(&store.a, &store.b, &mut store.d, &parts)?;

        // WriteD || ReadC
        let start = Instant::now();
        let (written_d, c) = thread::scope(|s| {
            let d = &store.d;
            let write_d = s.spawn(move || write_matrix(&paths.d, d));
            let read_c = s.spawn(|| read_matrix(&paths.c, n));
            let written_d = join(Stage::WriteDReadC, write_d);
            let c = join(Stage::WriteDReadC, read_c);
            (written_d, c)
        });
        written_d??;
        store.c = c??;
        stage_complete(Stage::WriteDReadC, start.elapsed());

        // Multiply
        let multiply = self.multiply_stage(&store.d, &store.c, &mut store.e, &parts)?;

        // WriteE || Reduce
        let start = Instant::now();
        let (written_e, reduction) = thread::scope(|s| {
            let e = &store.e;
            let write_e = s.spawn(move || write_matrix(&paths.e, e));
            let reduction = self.reduce_rows(e, &parts);
            let written_e = join(Stage::WriteEReduce, write_e);
            (written_e, reduction)
        });
        written_e??;
        let reduction = reduction?;
        let reduce = start.elapsed();
        info!(reduction, "reduction merged");
        stage_complete(Stage::WriteEReduce, reduce);

        Ok(PipelineReport {
            reduction,
            timings: StageTimings {
                sum,
                multiply,
                reduce,
            },
        })
    }

    /// Run Sum, Multiply and Reduce over in-memory matrices.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` unless `a`, `b` and `c` share one
    /// dimension.
    pub fn compute(&self, a: &Matrix, b: &Matrix, c: &Matrix) -> Result<ComputeOutcome> {
        let n = a.dim();
        b.ensure_dim(n)?;
        c.ensure_dim(n)?;

        let parts = partitions(n, self.threads)?;
        let mut d = Matrix::zeros(n)?;
        let mut e = Matrix::zeros(n)?;

        let sum = self.sum_stage(a, b, &mut d, &parts)?;
        let multiply = self.multiply_stage(&d, c, &mut e, &parts)?;

        let start = Instant::now();
        let reduction = self.reduce_rows(&e, &parts)?;
        let reduce = start.elapsed();
        info!(reduction, "reduction merged");
        stage_complete(Stage::WriteEReduce, reduce);

        Ok(ComputeOutcome {
            d,
            e,
            reduction,
            timings: StageTimings {
                sum,
                multiply,
                reduce,
            },
        })
    }

    fn sum_stage(
        &self,
        a: &Matrix,
        b: &Matrix,
        d: &mut Matrix,
        parts: &[RowRange],
    ) -> Result<Duration> {
        let n = d.dim();
        let (a, b) = (a.as_slice(), b.as_slice());
        let start = Instant::now();
        fan_out_rows(Stage::Sum, d.as_mut_slice(), n, parts, |_, rows, out| {
            self.kernels.sum_rows(a, b, out, rows, n)
        })?;
        let elapsed = start.elapsed();
        stage_complete(Stage::Sum, elapsed);
        Ok(elapsed)
    }

    fn multiply_stage(
        &self,
        d: &Matrix,
        c: &Matrix,
        e: &mut Matrix,
        parts: &[RowRange],
    ) -> Result<Duration> {
        let n = e.dim();
        let (d, c) = (d.as_slice(), c.as_slice());
        let start = Instant::now();
        fan_out_rows(Stage::Multiply, e.as_mut_slice(), n, parts, |_, rows, out| {
            self.kernels.multiply_rows(d, c, out, rows, n)
        })?;
        let elapsed = start.elapsed();
        stage_complete(Stage::Multiply, elapsed);
        Ok(elapsed)
    }

    /// Reduce `e` with a fresh accumulator scoped to this call.
    fn reduce_rows(&self, e: &Matrix, parts: &[RowRange]) -> Result<i64> {
        let n = e.dim();
        let data = e.as_slice();
        let acc = ReductionAccumulator::new();
        fan_out_reduce(Stage::WriteEReduce, parts, &acc, |_, rows| {
            self.kernels.reduce_rows(data, rows, n)
        })?;
        Ok(acc.into_inner())
    }
}

/// Log the end of `stage` and the transition to the one after it.
///
/// Only Sum, Multiply and WriteE|Reduce durations reach the report; the
/// I/O-only stages are logged here and nowhere else.
fn stage_complete(stage: Stage, elapsed: Duration) {
    match stage.next() {
        Some(next) => info!(%stage, ?elapsed, %next, "stage complete"),
        None => info!(%stage, ?elapsed, "pipeline complete"),
    }
}
