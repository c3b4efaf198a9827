//! jlpt-vocab — deduplicated, level-tagged vocabulary list builder.
//!
//! Takes a raw `word,level` dataset, segments the words morphologically by
//! driving the external [kagome](https://github.com/ikawaha/kagome)
//! tokenizer in batches, and reconciles the output into a flat word → level
//! mapping. The pipeline is built to degrade, never to drop: whatever the
//! analyzer does — crash, truncate, emit garbage — every input word still
//! reaches the output, untokenized in the worst case.
//!
//! Stages, in run order:
//! 1. [`batch`] — partition entries into fixed-size batches
//! 2. [`tokenizer::invoker`] — one kagome round trip per batch
//! 3. [`tokenizer::reassembler`] — split the concatenated JSON stream back
//!    into one document per word
//! 4. [`tokenizer::filter`] — extract level-tagged surface forms
//! 5. [`aggregate`] — fold pairs into one map under the max-level policy
//! 6. [`report`] — sort rows and count words per level

pub mod aggregate;
pub mod batch;
pub mod error;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod tokenizer;
pub mod types;

pub use aggregate::LevelMap;
pub use batch::Batcher;
pub use error::{Result, VocabError};
pub use pipeline::Pipeline;
pub use tokenizer::{Analyzer, KagomeAnalyzer, TokenFilter};
pub use types::{Entry, KagomeToken, OutputRow, PipelineConfig};
