//! `mp-pipeline` - The staged `E = (A + B) * C` pipeline.
//!
//! Reads A, B and C from flat-text files, fans out one thread per row
//! partition for the Sum, Multiply and Reduce stages, and overlaps the file
//! reads and writes with whichever neighbouring stage they do not depend on.

pub mod accumulator;
pub mod config;
pub mod driver;
pub mod error;
pub mod fanout;
pub mod stage;

pub use accumulator::ReductionAccumulator;
pub use config::{MatrixPaths, PipelineConfig};
pub use driver::{ComputeOutcome, Pipeline};
pub use error::{PipelineError, Result};
pub use stage::{PipelineReport, Stage, StageTimings};

pub use mp_matrix::{CpuKernels, Matrix, RowKernels};
