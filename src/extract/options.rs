use crate::traits::TraitKind;

/// Extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Traits to extract, in output order
    pub traits: Vec<TraitKind>,
    /// Fan batches out over the rayon thread pool
    pub parallel: bool,
    /// Batches at or below this size run sequentially
    pub min_parallel_batch: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            traits: TraitKind::ALL.to_vec(),
            parallel: true,
            min_parallel_batch: 64,
        }
    }
}

impl ExtractOptions {
    /// Options for only the given traits.
    pub fn with_traits(traits: impl IntoIterator<Item = TraitKind>) -> Self {
        Self {
            traits: traits.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Should a batch of `len` records run in parallel?
    pub fn use_parallel(&self, len: usize) -> bool {
        self.parallel && len > self.min_parallel_batch
    }
}
