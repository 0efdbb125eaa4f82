//! Dataset utilities for ScalarGrad: in-memory datasets, samplers, a batching
//! `DataLoader`, and the packaged-archive loader supplying the four numeric
//! arrays (training data/labels, test data/labels).
//!
//! This crate is the thin I/O collaborator of the autograd core: it only
//! packages and serves bulk numeric arrays and never touches the graph types.

pub mod archive;
pub mod dataloader;
pub mod datasets;
pub mod error;
pub mod samplers;

pub use archive::ArchiveBundle;
pub use dataloader::DataLoader;
pub use datasets::{Dataset, VecDataset};
pub use error::ScalarDataError;
pub use samplers::{RandomSampler, Sampler, SequentialSampler};
