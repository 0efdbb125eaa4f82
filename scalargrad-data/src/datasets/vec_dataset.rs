use crate::datasets::Dataset;
use crate::error::ScalarDataError;

/// A simple in-memory dataset backed by paired input and target vectors.
///
/// The i-th element of `inputs` corresponds to the i-th element of `targets`.
#[derive(Debug, Clone)]
pub struct VecDataset<I, T>
where
    I: Clone,
    T: Clone,
{
    inputs: Vec<I>,
    targets: Vec<T>,
}

impl<I, T> VecDataset<I, T>
where
    I: Clone,
    T: Clone,
{
    /// Creates a new `VecDataset` from input and target vectors.
    ///
    /// Fails with [`ScalarDataError::SampleCountMismatch`] if the two vectors
    /// have different lengths.
    pub fn new(inputs: Vec<I>, targets: Vec<T>) -> Result<Self, ScalarDataError> {
        if inputs.len() != targets.len() {
            return Err(ScalarDataError::SampleCountMismatch {
                inputs: inputs.len(),
                targets: targets.len(),
            });
        }
        Ok(VecDataset { inputs, targets })
    }
}

impl<I, T> Dataset for VecDataset<I, T>
where
    I: Clone,
    T: Clone,
{
    /// A tuple of cloned input and target.
    type Item = (I, T);

    fn get(&self, index: usize) -> Result<Self::Item, ScalarDataError> {
        if index >= self.len() {
            return Err(ScalarDataError::IndexOutOfBounds {
                index,
                len: self.len(),
            });
        }
        Ok((self.inputs[index].clone(), self.targets[index].clone()))
    }

    fn len(&self) -> usize {
        // inputs and targets have the same length, enforced in new()
        self.inputs.len()
    }
}

// --- Tests ---
