use crate::error::ScalarDataError;

pub mod vec_dataset;

pub use vec_dataset::VecDataset;

/// Trait representing a dataset.
///
/// A dataset provides access to individual data samples (e.g. input features
/// and the corresponding target label) via an index.
pub trait Dataset {
    /// The type of a single item returned by the dataset.
    type Item;

    /// Returns the data sample at the given index.
    fn get(&self, index: usize) -> Result<Self::Item, ScalarDataError>;

    /// Returns the total number of samples in the dataset.
    fn len(&self) -> usize;

    /// Returns true if the dataset contains no samples.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
