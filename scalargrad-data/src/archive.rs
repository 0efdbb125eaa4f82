//! Packaged-archive entry points for the four dataset arrays.
//!
//! The archive is a safetensors file with four named entries: `x_train` and
//! `x_test` are `[rows, sample_len]` f32 matrices, `y_train` and `y_test` are
//! `[rows]` u8 label vectors. [`load`] checks for the file first and returns a
//! dedicated error when it is missing; [`save`] repackages a bundle into the
//! same format.

use crate::datasets::VecDataset;
use crate::error::ScalarDataError;
use log::{debug, info};
use safetensors::tensor::{Dtype, SafeTensors, TensorView};
use std::path::Path;

pub const KEY_TRAIN_DATA: &str = "x_train";
pub const KEY_TRAIN_LABELS: &str = "y_train";
pub const KEY_TEST_DATA: &str = "x_test";
pub const KEY_TEST_LABELS: &str = "y_test";

/// The four numeric arrays of a packaged dataset.
///
/// Feature rows are stored flattened; `sample_len` is the number of f32
/// features per row.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveBundle {
    pub train_data: Vec<f32>,
    pub train_labels: Vec<u8>,
    pub test_data: Vec<f32>,
    pub test_labels: Vec<u8>,
    pub sample_len: usize,
}

impl ArchiveBundle {
    /// Creates a bundle, validating that both splits divide evenly into rows
    /// of `sample_len` features and that row counts match label counts.
    pub fn new(
        train_data: Vec<f32>,
        train_labels: Vec<u8>,
        test_data: Vec<f32>,
        test_labels: Vec<u8>,
        sample_len: usize,
    ) -> Result<Self, ScalarDataError> {
        if sample_len == 0 {
            return Err(ScalarDataError::ZeroSampleLen);
        }
        for (data, labels) in [(&train_data, &train_labels), (&test_data, &test_labels)] {
            if data.len() % sample_len != 0 || data.len() / sample_len != labels.len() {
                return Err(ScalarDataError::SampleCountMismatch {
                    inputs: data.len() / sample_len,
                    targets: labels.len(),
                });
            }
        }
        Ok(ArchiveBundle {
            train_data,
            train_labels,
            test_data,
            test_labels,
            sample_len,
        })
    }

    /// Number of training rows.
    pub fn train_samples(&self) -> usize {
        self.train_labels.len()
    }

    /// Number of test rows.
    pub fn test_samples(&self) -> usize {
        self.test_labels.len()
    }

    /// Iterates over training rows as feature slices.
    pub fn train_rows(&self) -> impl Iterator<Item = &[f32]> {
        self.train_data.chunks_exact(self.sample_len)
    }

    /// Iterates over test rows as feature slices.
    pub fn test_rows(&self) -> impl Iterator<Item = &[f32]> {
        self.test_data.chunks_exact(self.sample_len)
    }

    /// Packages the bundle into `(train, test)` datasets of
    /// `(features, label)` pairs ready for a `DataLoader`.
    pub fn into_datasets(
        self,
    ) -> Result<(VecDataset<Vec<f32>, u8>, VecDataset<Vec<f32>, u8>), ScalarDataError> {
        let train_inputs: Vec<Vec<f32>> = self.train_rows().map(<[f32]>::to_vec).collect();
        let test_inputs: Vec<Vec<f32>> = self.test_rows().map(<[f32]>::to_vec).collect();
        let train = VecDataset::new(train_inputs, self.train_labels)?;
        let test = VecDataset::new(test_inputs, self.test_labels)?;
        Ok((train, test))
    }
}

/// Returns true if a packaged archive already exists at `path`.
pub fn exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().is_file()
}

/// Loads the four arrays from a packaged archive.
///
/// Fails with [`ScalarDataError::ArchiveNotFound`] if the file does not exist,
/// and validates the dtype and rank of every entry before copying it out.
pub fn load(path: impl AsRef<Path>) -> Result<ArchiveBundle, ScalarDataError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(ScalarDataError::ArchiveNotFound {
            path: path.display().to_string(),
        });
    }
    debug!("loading dataset archive from {}", path.display());
    let buffer = std::fs::read(path)?;
    let tensors = SafeTensors::deserialize(&buffer)?;

    let (train_data, sample_len) = f32_matrix(&tensors, KEY_TRAIN_DATA)?;
    let train_labels = u8_vector(&tensors, KEY_TRAIN_LABELS)?;
    let (test_data, test_sample_len) = f32_matrix(&tensors, KEY_TEST_DATA)?;
    let test_labels = u8_vector(&tensors, KEY_TEST_LABELS)?;

    if sample_len != test_sample_len {
        return Err(ScalarDataError::ShapeMismatch {
            name: KEY_TEST_DATA.to_string(),
            shape: vec![test_labels.len(), test_sample_len],
            expected_rank: 2,
        });
    }

    let bundle = ArchiveBundle::new(train_data, train_labels, test_data, test_labels, sample_len)?;
    info!(
        "dataset archive loaded: {} train rows, {} test rows, {} features each",
        bundle.train_samples(),
        bundle.test_samples(),
        bundle.sample_len
    );
    Ok(bundle)
}

/// Serializes the bundle back into the archive format at `path`.
pub fn save(path: impl AsRef<Path>, bundle: &ArchiveBundle) -> Result<(), ScalarDataError> {
    let path = path.as_ref();
    let train_rows = bundle.train_samples();
    let test_rows = bundle.test_samples();

    let train_data_bytes = f32_bytes(&bundle.train_data);
    let test_data_bytes = f32_bytes(&bundle.test_data);

    let entries = vec![
        (
            KEY_TRAIN_DATA,
            TensorView::new(
                Dtype::F32,
                vec![train_rows, bundle.sample_len],
                &train_data_bytes,
            )?,
        ),
        (
            KEY_TRAIN_LABELS,
            TensorView::new(Dtype::U8, vec![train_rows], &bundle.train_labels)?,
        ),
        (
            KEY_TEST_DATA,
            TensorView::new(
                Dtype::F32,
                vec![test_rows, bundle.sample_len],
                &test_data_bytes,
            )?,
        ),
        (
            KEY_TEST_LABELS,
            TensorView::new(Dtype::U8, vec![test_rows], &bundle.test_labels)?,
        ),
    ];

    let serialized = safetensors::serialize(entries, &None)?;
    std::fs::write(path, serialized)?;
    info!(
        "dataset archive saved to {} ({} train rows, {} test rows)",
        path.display(),
        train_rows,
        test_rows
    );
    Ok(())
}

fn f32_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_le_bytes()).collect()
}

fn f32_matrix(tensors: &SafeTensors, name: &str) -> Result<(Vec<f32>, usize), ScalarDataError> {
    let view = tensors.tensor(name)?;
    if view.dtype() != Dtype::F32 {
        return Err(ScalarDataError::DtypeMismatch {
            name: name.to_string(),
            expected: Dtype::F32,
            actual: view.dtype(),
        });
    }
    let shape = view.shape();
    if shape.len() != 2 {
        return Err(ScalarDataError::ShapeMismatch {
            name: name.to_string(),
            shape: shape.to_vec(),
            expected_rank: 2,
        });
    }
    let values = view
        .data()
        .chunks_exact(4)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect();
    Ok((values, shape[1]))
}

fn u8_vector(tensors: &SafeTensors, name: &str) -> Result<Vec<u8>, ScalarDataError> {
    let view = tensors.tensor(name)?;
    if view.dtype() != Dtype::U8 {
        return Err(ScalarDataError::DtypeMismatch {
            name: name.to_string(),
            expected: Dtype::U8,
            actual: view.dtype(),
        });
    }
    let shape = view.shape();
    if shape.len() != 1 {
        return Err(ScalarDataError::ShapeMismatch {
            name: name.to_string(),
            shape: shape.to_vec(),
            expected_rank: 1,
        });
    }
    Ok(view.data().to_vec())
}

// --- Tests ---
