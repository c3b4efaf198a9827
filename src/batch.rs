//! Fixed-size batching of input entries.
//!
//! The analyzer is invoked once per batch, so batching bounds both the size
//! of a single child-process round trip and the amount of output that has to
//! be reassembled at once. Batching is a pure partition: no filtering, no
//! reordering.

use crate::types::Entry;

/// Partitions an entry list into fixed-size batches.
#[derive(Debug, Clone)]
pub struct Batcher {
    chunk_size: usize,
}

impl Default for Batcher {
    fn default() -> Self {
        Self::new(500)
    }
}

impl Batcher {
    /// Create a batcher producing batches of at most `chunk_size` entries.
    ///
    /// # Panics
    /// Panics if `chunk_size` is zero.
    pub fn new(chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be at least 1");
        Self { chunk_size }
    }

    /// Lazily yield batches in input order.
    ///
    /// Every batch except possibly the last has exactly `chunk_size`
    /// entries; concatenating all batches reproduces `entries` exactly.
    pub fn batches<'a>(&self, entries: &'a [Entry]) -> impl Iterator<Item = &'a [Entry]> {
        entries.chunks(self.chunk_size)
    }

    /// Number of batches a list of `count` entries would produce.
    pub fn num_batches(&self, count: usize) -> usize {
        count.div_ceil(self.chunk_size)
    }
}
