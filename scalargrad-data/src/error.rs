use safetensors::tensor::Dtype;
use thiserror::Error;

/// Custom error type for the ScalarGrad data utilities.
#[derive(Error, Debug)]
pub enum ScalarDataError {
    #[error("Archive not found at {path}. Pack the dataset first with `scalargrad_data::archive::save`.")]
    ArchiveNotFound { path: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive format error: {0}")]
    Format(#[from] safetensors::SafeTensorError),

    #[error("Archive entry '{name}' has dtype {actual:?}, expected {expected:?}")]
    DtypeMismatch {
        name: String,
        expected: Dtype,
        actual: Dtype,
    },

    #[error("Archive entry '{name}' has shape {shape:?}, expected rank {expected_rank}")]
    ShapeMismatch {
        name: String,
        shape: Vec<usize>,
        expected_rank: usize,
    },

    #[error("Sample count mismatch: {inputs} input rows vs {targets} targets")]
    SampleCountMismatch { inputs: usize, targets: usize },

    #[error("sample_len must be non-zero")]
    ZeroSampleLen,

    #[error("Index {index} out of bounds for dataset of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}
