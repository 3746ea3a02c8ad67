use thiserror::Error;

use crate::stage::Stage;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Matrix(#[from] mp_matrix::MatrixError),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("a worker thread panicked during the {stage} stage")]
    WorkerPanicked { stage: Stage },
}

pub type Result<T> = std::result::Result<T, PipelineError>;
