//! Core data types shared across the pipeline.

use serde::Deserialize;

/// One input record: a word and its JLPT level.
///
/// Levels are ordinal difficulty tiers where a *higher* number means an
/// *easier* tier (N5 = 5 is the beginner level, N1 = 1 the hardest).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub word: String,
    pub level: u8,
}

impl Entry {
    pub fn new(word: impl Into<String>, level: u8) -> Self {
        Self {
            word: word.into(),
            level,
        }
    }
}

/// One row of the final output: same shape as [`Entry`], but produced by the
/// aggregator and ordered by the reporter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputRow {
    pub word: String,
    pub level: u8,
}

/// A single token as emitted by `kagome -json`.
///
/// Only `surface` and the first element of `pos` matter to the filter; the
/// remaining fields are accepted so that any well-formed kagome record
/// deserializes, and defaulted so that partially-populated records do too.
#[derive(Debug, Clone, Deserialize)]
pub struct KagomeToken {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub start: u32,
    #[serde(default)]
    pub end: u32,
    #[serde(default)]
    pub surface: String,
    #[serde(default)]
    pub class: String,
    #[serde(default)]
    pub pos: Vec<String>,
    #[serde(default)]
    pub base_form: String,
    #[serde(default)]
    pub reading: String,
    #[serde(default)]
    pub pronunciation: String,
    #[serde(default)]
    pub features: Vec<String>,
}

impl KagomeToken {
    /// The part-of-speech category: the first element of the `pos` path.
    pub fn pos_category(&self) -> Option<&str> {
        self.pos.first().map(String::as_str)
    }
}

/// Configuration for a pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Number of entries sent to kagome per invocation.
    pub chunk_size: usize,
    /// Program name or path of the kagome binary.
    pub kagome_path: String,
    /// Arguments passed to kagome. Must request JSON output.
    pub kagome_args: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            chunk_size: 500,
            kagome_path: "kagome".to_string(),
            kagome_args: vec!["-json".to_string()],
        }
    }
}

impl PipelineConfig {
    /// Set the batch size. Panics if `chunk_size` is zero, which would make
    /// the partition step loop forever.
    pub fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        assert!(chunk_size > 0, "chunk_size must be at least 1");
        self.chunk_size = chunk_size;
        self
    }

    /// Point at a specific kagome binary.
    pub fn with_kagome_path(mut self, path: impl Into<String>) -> Self {
        self.kagome_path = path.into();
        self
    }

    /// Select a kagome tokenization mode (`normal`, `search`, `extended`).
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.kagome_args.push("-mode".to_string());
        self.kagome_args.push(mode.into());
        self
    }
}
