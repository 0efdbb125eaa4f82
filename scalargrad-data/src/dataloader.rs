//! Batching iterator over a dataset driven by a sampler.

use crate::datasets::Dataset;
use crate::error::ScalarDataError;
use crate::samplers::Sampler;
use log::debug;

/// Optional collation function assembling raw samples into a batch.
///
/// By default batches are plain `Vec`s of dataset items; a collate function
/// can replace that with any aggregation (stacking features, packaging into
/// graph leaves, ...).
pub type CollateFn<D> =
    Box<dyn Fn(Vec<<D as Dataset>::Item>) -> Result<Vec<<D as Dataset>::Item>, ScalarDataError>>;

/// Generic `DataLoader` for batching and sampling.
///
/// Iterating yields `Result` batches; an error from the dataset or the
/// collate function surfaces through the corresponding batch.
pub struct DataLoader<D: Dataset, S: Sampler> {
    /// The source dataset.
    pub dataset: D,
    /// Number of samples per batch.
    pub batch_size: usize,
    /// The sampler used to generate indices.
    pub sampler: S,
    /// If true, a trailing incomplete batch is dropped.
    pub drop_last: bool,
    /// Optional collation function.
    pub collate_fn: Option<CollateFn<D>>,
    indices_iter: Box<dyn Iterator<Item = usize>>,
}

impl<D: Dataset, S: Sampler> DataLoader<D, S> {
    /// Creates a new `DataLoader`.
    pub fn new(
        dataset: D,
        batch_size: usize,
        sampler: S,
        drop_last: bool,
        collate_fn: Option<CollateFn<D>>,
    ) -> Self {
        let indices_iter = sampler.iter(dataset.len());
        debug!(
            "dataloader over {} samples, batch_size {}, drop_last {}",
            dataset.len(),
            batch_size,
            drop_last
        );
        Self {
            dataset,
            batch_size,
            sampler,
            drop_last,
            collate_fn,
            indices_iter,
        }
    }
}

impl<D: Dataset, S: Sampler> Iterator for DataLoader<D, S> {
    type Item = Result<Vec<<D as Dataset>::Item>, ScalarDataError>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for _ in 0..self.batch_size {
            if let Some(idx) = self.indices_iter.next() {
                match self.dataset.get(idx) {
                    Ok(item) => batch.push(item),
                    Err(e) => return Some(Err(e)),
                }
            } else {
                break;
            }
        }
        if batch.is_empty() || (self.drop_last && batch.len() < self.batch_size) {
            return None;
        }
        if let Some(ref collate_fn) = self.collate_fn {
            Some(collate_fn(batch))
        } else {
            Some(Ok(batch))
        }
    }
}

// --- Tests ---

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasets::VecDataset;
    use crate::samplers::{RandomSampler, SequentialSampler};

    fn dataset() -> VecDataset<i32, u8> {
        VecDataset::new(vec![10, 20, 30, 40, 50], vec![0, 1, 0, 1, 0]).expect("creation failed")
    }

    #[test]
    fn test_sequential_batches() {
        let loader = DataLoader::new(dataset(), 2, SequentialSampler::new(), false, None);
        let batches: Vec<Vec<(i32, u8)>> =
            loader.map(|batch| batch.expect("batch failed")).collect();
        assert_eq!(
            batches,
            vec![
                vec![(10, 0), (20, 1)],
                vec![(30, 0), (40, 1)],
                vec![(50, 0)],
            ]
        );
    }

    #[test]
    fn test_drop_last() {
        let loader = DataLoader::new(dataset(), 2, SequentialSampler::new(), true, None);
        let batches: Vec<Vec<(i32, u8)>> =
            loader.map(|batch| batch.expect("batch failed")).collect();
        assert_eq!(batches.len(), 2);
        assert!(batches.iter().all(|b| b.len() == 2));
    }

    #[test]
    fn test_random_sampler_covers_every_sample() {
        let loader = DataLoader::new(dataset(), 2, RandomSampler::with_seed(7), false, None);
        let mut seen: Vec<i32> = loader
            .flat_map(|batch| batch.expect("batch failed"))
            .map(|(input, _)| input)
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![10, 20, 30, 40, 50]);
    }

    #[test]
    fn test_collate_fn_applies() {
        let collate: CollateFn<VecDataset<i32, u8>> = Box::new(|mut batch| {
            batch.reverse();
            Ok(batch)
        });
        let mut loader = DataLoader::new(
            dataset(),
            2,
            SequentialSampler::new(),
            false,
            Some(collate),
        );
        let first = loader.next().expect("no batch").expect("batch failed");
        assert_eq!(first, vec![(20, 1), (10, 0)]);
    }

    #[test]
    fn test_empty_dataset_yields_no_batches() {
        let empty: VecDataset<i32, u8> = VecDataset::new(vec![], vec![]).expect("creation failed");
        let mut loader = DataLoader::new(empty, 3, SequentialSampler::new(), false, None);
        assert!(loader.next().is_none());
    }
}
