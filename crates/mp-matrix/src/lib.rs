//! `mp-matrix` - Integer matrix storage and row-range kernels for matpipe.
//!
//! This crate provides:
//! - A square, row-major `Matrix` of `i32` and the `MatrixStore` holding the
//!   five matrices of one run
//! - The row `Partition`er shared by every compute stage
//! - A `RowKernels` trait for the Sum, Multiply and Reduce kernels
//! - A reference `CpuKernels` implementation
//! - The flat-text matrix codec

pub mod cpu;
pub mod error;
pub mod io;
pub mod kernels;
pub mod matrix;
pub mod partition;
pub mod store;

// Re-export primary types at the crate root for convenience.
pub use cpu::CpuKernels;
pub use error::{MatrixError, Result};
pub use io::{parse_matrix, read_matrix, write_matrix, write_matrix_to};
pub use kernels::RowKernels;
pub use matrix::Matrix;
pub use partition::{partitions, split_rows_mut, RowRange};
pub use store::MatrixStore;
