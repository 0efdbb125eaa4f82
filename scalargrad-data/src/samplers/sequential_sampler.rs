use crate::samplers::Sampler;

/// Yields dataset indices in order, `0..len`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SequentialSampler;

impl SequentialSampler {
    pub fn new() -> Self {
        SequentialSampler
    }
}

impl Sampler for SequentialSampler {
    fn iter(&self, len: usize) -> Box<dyn Iterator<Item = usize>> {
        Box::new(0..len)
    }
}

// --- Tests ---
