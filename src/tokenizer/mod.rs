//! Batch tokenization round trip.
//!
//! Composes the invoker, reassembler, and filter into the per-batch
//! operation: send one word per line to the analyzer, split its output back
//! into per-word documents, and extract level-tagged surface forms. Every
//! failure mode degrades to the untokenized input — an analyzer that
//! crashes, truncates, or emits garbage never loses an entry.

pub mod filter;
pub mod invoker;
pub mod reassembler;

pub use filter::TokenFilter;
pub use invoker::{Analyzer, AnalyzerOutput, KagomeAnalyzer};
pub use reassembler::split_documents;

use crate::types::{Entry, KagomeToken};

/// The batch text sent to the analyzer: one word per line, in batch order.
fn batch_input(batch: &[Entry]) -> String {
    batch
        .iter()
        .map(|e| e.word.as_str())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every entry of the batch, passed through untokenized.
fn passthrough(batch: &[Entry]) -> Vec<(String, u8)> {
    batch.iter().map(|e| (e.word.clone(), e.level)).collect()
}

/// Tokenize one batch, returning (surface, level) pairs.
///
/// Fallback policy — infallible by design, every analyzer misbehavior
/// degrades to passthrough for the entries it affects:
/// - analyzer cannot be run at all (spawn failure): the whole batch passes
///   through unchanged, with a diagnostic;
/// - analyzer exits nonzero or prints nothing: same whole-batch fallback;
/// - fewer documents than entries: the uncovered tail passes through;
/// - one document fails to parse: only that entry passes through;
/// - extra documents beyond the batch length are ignored.
///
/// The result always has at least one pair per input entry, so a bad batch
/// never aborts the run and never affects the batches after it.
pub fn tokenize_batch(
    analyzer: &impl Analyzer,
    filter: &TokenFilter,
    batch: &[Entry],
) -> Vec<(String, u8)> {
    if batch.is_empty() {
        return Vec::new();
    }

    let output = match analyzer.analyze(&batch_input(batch)) {
        Ok(output) => output,
        Err(e) => {
            tracing::warn!(
                error = %e,
                batch_len = batch.len(),
                "analyzer could not be run; passing batch through untokenized"
            );
            return passthrough(batch);
        }
    };

    if !output.success {
        tracing::warn!(
            stderr = %output.stderr.trim(),
            batch_len = batch.len(),
            "analyzer exited with failure; passing batch through untokenized"
        );
        return passthrough(batch);
    }

    if output.stdout.trim().is_empty() {
        tracing::warn!(
            batch_len = batch.len(),
            "analyzer produced no output; passing batch through untokenized"
        );
        return passthrough(batch);
    }

    let documents = split_documents(output.stdout.trim());
    let mut pairs = Vec::with_capacity(batch.len());

    for (i, entry) in batch.iter().enumerate() {
        match documents.get(i) {
            Some(raw) => match serde_json::from_str::<Vec<KagomeToken>>(raw) {
                Ok(tokens) => pairs.extend(filter.surfaces(&tokens, entry)),
                // Malformed document: this entry alone falls back.
                Err(_) => pairs.push((entry.word.clone(), entry.level)),
            },
            // Analyzer truncated partway: the rest of the batch falls back.
            None => pairs.push((entry.word.clone(), entry.level)),
        }
    }

    pairs
}
