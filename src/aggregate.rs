//! Cross-batch aggregation of (surface, level) pairs.
//!
//! The whole run shares one [`LevelMap`]. When the same surface is attested
//! at several levels (common once segmentation starts producing shared
//! sub-words), the map keeps the *highest* level number. Higher numbers are
//! easier tiers in this dataset, so a word is tagged with the easiest tier
//! at which a learner could plausibly first meet it. This is a deliberate
//! policy, not an accident of insertion order.

use rustc_hash::FxHashMap;

/// Deduplicated surface → level mapping, built additively across batches.
#[derive(Debug, Clone, Default)]
pub struct LevelMap {
    words: FxHashMap<String, u8>,
}

impl LevelMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one (surface, level) observation.
    ///
    /// Blank surfaces are skipped. For any surface the stored value only
    /// ever increases: it equals the maximum level observed so far.
    pub fn observe(&mut self, surface: &str, level: u8) {
        if surface.is_empty() {
            return;
        }
        let slot = self.words.entry(surface.to_string()).or_insert(0);
        *slot = (*slot).max(level);
    }

    /// Record a whole batch's worth of pairs.
    pub fn observe_all<'a>(&mut self, pairs: impl IntoIterator<Item = &'a (String, u8)>) {
        for (surface, level) in pairs {
            self.observe(surface, *level);
        }
    }

    /// Level currently recorded for a surface.
    pub fn level_of(&self, surface: &str) -> Option<u8> {
        self.words.get(surface).copied()
    }

    /// Number of unique surfaces seen so far.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over (surface, level) entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.words.iter().map(|(w, &l)| (w.as_str(), l))
    }
}
