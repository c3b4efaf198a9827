//! Pipeline runner — drives the batch tokenization flow end to end.
//!
//! Strictly sequential: each batch completes its full round trip (invoke →
//! reassemble → filter → aggregate) before the next batch starts, so the
//! one [`LevelMap`] is only ever touched from this single flow and the
//! analyzer process for a batch is reaped before the next is spawned.

use crate::aggregate::LevelMap;
use crate::batch::Batcher;
use crate::tokenizer::{self, Analyzer, KagomeAnalyzer, TokenFilter};
use crate::types::{Entry, PipelineConfig};

/// The batch tokenization pipeline.
///
/// Generic over the analyzer so tests can script its behavior; production
/// callers use [`Pipeline::kagome`].
#[derive(Debug)]
pub struct Pipeline<A: Analyzer> {
    analyzer: A,
    batcher: Batcher,
    filter: TokenFilter,
}

impl Pipeline<KagomeAnalyzer> {
    /// Build the production pipeline from a config.
    pub fn kagome(config: &PipelineConfig) -> Self {
        Self::new(
            KagomeAnalyzer::from_config(config),
            Batcher::new(config.chunk_size),
            TokenFilter::new(),
        )
    }
}

impl<A: Analyzer> Pipeline<A> {
    pub fn new(analyzer: A, batcher: Batcher, filter: TokenFilter) -> Self {
        Self {
            analyzer,
            batcher,
            filter,
        }
    }

    /// Process every entry and return the populated map.
    ///
    /// One analyzer invocation per batch, no retries, and no abort path: a
    /// batch whose invocation fails in any way passes through untokenized
    /// and does not affect the batches after it.
    pub fn run(&self, entries: &[Entry]) -> LevelMap {
        let total_batches = self.batcher.num_batches(entries.len());
        tracing::info!(rows = entries.len(), batches = total_batches, "starting run");

        let mut map = LevelMap::new();
        let mut processed = 0usize;

        for (i, batch) in self.batcher.batches(entries).enumerate() {
            tracing::info!(
                batch = i + 1,
                total = total_batches,
                len = batch.len(),
                "tokenizing batch"
            );

            let pairs = tokenizer::tokenize_batch(&self.analyzer, &self.filter, batch);
            map.observe_all(&pairs);

            processed += batch.len();
            tracing::info!(
                processed,
                unique_words = map.len(),
                "batch complete"
            );
        }

        tracing::info!(unique_words = map.len(), "run complete");
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Result, VocabError};
    use crate::tokenizer::AnalyzerOutput;
    use std::cell::RefCell;

    /// Analyzer that replies per invocation from a script and records every
    /// input it receives.
    struct ScriptedAnalyzer {
        replies: RefCell<Vec<AnalyzerOutput>>,
        inputs: RefCell<Vec<String>>,
    }

    impl ScriptedAnalyzer {
        fn new(replies: Vec<AnalyzerOutput>) -> Self {
            Self {
                replies: RefCell::new(replies),
                inputs: RefCell::new(Vec::new()),
            }
        }

        fn ok(stdout: &str) -> AnalyzerOutput {
            AnalyzerOutput {
                stdout: stdout.to_string(),
                stderr: String::new(),
                success: true,
            }
        }

        fn failing() -> AnalyzerOutput {
            AnalyzerOutput {
                stdout: String::new(),
                stderr: "analyzer blew up".to_string(),
                success: false,
            }
        }
    }

    impl Analyzer for ScriptedAnalyzer {
        fn analyze(&self, input: &str) -> Result<AnalyzerOutput> {
            self.inputs.borrow_mut().push(input.to_string());
            self.replies
                .borrow_mut()
                .pop()
                .ok_or_else(|| VocabError::Analyzer("script exhausted".to_string()))
        }
    }

    fn entries() -> Vec<Entry> {
        vec![
            Entry::new("食べる", 3),
            Entry::new("本", 1),
            Entry::new("本", 5),
            Entry::new("犬", 2),
        ]
    }

    #[test]
    fn test_run_aggregates_across_batches() {
        // chunk_size 2 → two batches; 本 appears at level 1 in the first
        // and level 5 in the second, so the easier tier must win.
        let replies = vec![
            // Replies pop from the back: second batch first in this vec.
            ScriptedAnalyzer::ok(concat!(
                "[{\"surface\":\"本\",\"pos\":[\"名詞\"]}]\n",
                "[{\"surface\":\"犬\",\"pos\":[\"名詞\"]}]",
            )),
            ScriptedAnalyzer::ok(concat!(
                "[{\"surface\":\"食べ\",\"pos\":[\"動詞\"]},{\"surface\":\"る\",\"pos\":[\"助動詞\"]}]\n",
                "[{\"surface\":\"本\",\"pos\":[\"名詞\"]}]",
            )),
        ];
        let analyzer = ScriptedAnalyzer::new(replies);
        let pipeline = Pipeline::new(analyzer, Batcher::new(2), TokenFilter::new());

        let map = pipeline.run(&entries());

        assert_eq!(map.level_of("食べ"), Some(3));
        assert_eq!(map.level_of("る"), Some(3));
        assert_eq!(map.level_of("本"), Some(5));
        assert_eq!(map.level_of("犬"), Some(2));
        assert_eq!(map.len(), 4);
    }

    #[test]
    fn test_failed_batch_does_not_poison_later_batches() {
        let replies = vec![
            ScriptedAnalyzer::ok(concat!(
                "[{\"surface\":\"本\",\"pos\":[\"名詞\"]}]\n",
                "[{\"surface\":\"犬\",\"pos\":[\"名詞\"]}]",
            )),
            ScriptedAnalyzer::failing(),
        ];
        let analyzer = ScriptedAnalyzer::new(replies);
        let pipeline = Pipeline::new(analyzer, Batcher::new(2), TokenFilter::new());

        let map = pipeline.run(&entries());

        // First batch passed through untokenized, second tokenized normally.
        assert_eq!(map.level_of("食べる"), Some(3));
        assert_eq!(map.level_of("本"), Some(5));
        assert_eq!(map.level_of("犬"), Some(2));
    }

    #[test]
    fn test_batches_are_sent_one_word_per_line() {
        let replies = vec![ScriptedAnalyzer::failing(), ScriptedAnalyzer::failing()];
        let analyzer = ScriptedAnalyzer::new(replies);
        let pipeline = Pipeline::new(analyzer, Batcher::new(2), TokenFilter::new());

        let _ = pipeline.run(&entries());

        let inputs = pipeline.analyzer.inputs.borrow();
        assert_eq!(inputs.as_slice(), ["食べる\n本", "本\n犬"]);
    }

    #[test]
    fn test_empty_input_is_a_noop() {
        let analyzer = ScriptedAnalyzer::new(vec![]);
        let pipeline = Pipeline::new(analyzer, Batcher::new(2), TokenFilter::new());

        let map = pipeline.run(&[]);
        assert!(map.is_empty());
        assert!(pipeline.analyzer.inputs.borrow().is_empty());
    }

    #[test]
    fn test_end_to_end_with_real_child_process() {
        // Stand-in analyzer: drains stdin, then prints kagome-shaped JSON
        // with one array split across lines to exercise the reassembler.
        let script = concat!(
            "cat >/dev/null; ",
            r#"printf '[{"surface":"食べ","pos":["動詞"]},\n"#,
            r#"{"surface":"る","pos":["助動詞"]}]\n"#,
            r#"[{"surface":"。","pos":["記号"]}]\n'"#,
        );
        let analyzer = KagomeAnalyzer::new("sh", vec!["-c".to_string(), script.to_string()]);
        let pipeline = Pipeline::new(analyzer, Batcher::new(500), TokenFilter::new());

        let map = pipeline.run(&[Entry::new("食べる", 3), Entry::new("。", 2)]);

        assert_eq!(map.level_of("食べ"), Some(3));
        assert_eq!(map.level_of("る"), Some(3));
        // Punctuation-only document falls back to the original word.
        assert_eq!(map.level_of("。"), Some(2));
    }

    #[test]
    fn test_unrunnable_analyzer_still_emits_every_entry() {
        // An exhausted script models a binary that cannot be run at all.
        // The run continues and every word reaches the map untokenized.
        let analyzer = ScriptedAnalyzer::new(vec![]);
        let pipeline = Pipeline::new(analyzer, Batcher::new(2), TokenFilter::new());

        let map = pipeline.run(&entries());

        assert_eq!(map.level_of("食べる"), Some(3));
        assert_eq!(map.level_of("本"), Some(5));
        assert_eq!(map.level_of("犬"), Some(2));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_missing_binary_still_emits_every_entry() {
        // Same guarantee through the production analyzer path.
        let analyzer = KagomeAnalyzer::new("definitely-not-a-real-binary-xyz", vec![]);
        let pipeline = Pipeline::new(analyzer, Batcher::new(2), TokenFilter::new());

        let map = pipeline.run(&entries());

        assert_eq!(map.level_of("食べる"), Some(3));
        assert_eq!(map.level_of("本"), Some(5));
        assert_eq!(map.level_of("犬"), Some(2));
    }
}
