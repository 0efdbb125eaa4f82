pub mod random_sampler;
pub mod sequential_sampler;

pub use random_sampler::RandomSampler;
pub use sequential_sampler::SequentialSampler;

/// Trait for index-generation strategies driving a `DataLoader`.
pub trait Sampler {
    /// Returns an iterator over dataset indices in `0..len`.
    fn iter(&self, len: usize) -> Box<dyn Iterator<Item = usize>>;
}
