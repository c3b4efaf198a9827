//! External analyzer invocation.
//!
//! [`KagomeAnalyzer`] runs the kagome binary once per batch: spawn with
//! piped stdio, write the batch text to stdin, then block until the child
//! exits with both output streams fully drained. The [`Analyzer`] trait is
//! the seam that lets the pipeline run against a scripted analyzer in tests
//! (and is where a timeout-capable implementation would slot in later).

use std::io::Write;
use std::process::{Command, Stdio};

use crate::error::{Result, VocabError};
use crate::types::PipelineConfig;

/// Captured result of one analyzer invocation.
///
/// Both streams are decoded permissively: byte sequences that are not valid
/// UTF-8 are dropped rather than aborting the run, since analyzer output
/// correctness is not guaranteed.
#[derive(Debug, Clone)]
pub struct AnalyzerOutput {
    pub stdout: String,
    pub stderr: String,
    /// Whether the process exited with a zero status *and* read its whole
    /// input. False means the caller should fall back for this batch.
    pub success: bool,
}

/// A morphological analyzer invoked once per batch.
pub trait Analyzer {
    /// Run the analyzer over `input` (one word per line) and capture its
    /// output. Returns an error only if the process could not be run at
    /// all; a nonzero exit is reported through [`AnalyzerOutput::success`]
    /// and handled by the caller as a per-batch fallback.
    fn analyze(&self, input: &str) -> Result<AnalyzerOutput>;
}

/// Decode a byte stream, dropping undecodable sequences.
///
/// Analyzer output correctness is not guaranteed; bytes that are not valid
/// UTF-8 are discarded outright rather than kept as U+FFFD, which would
/// otherwise survive the JSON parse and leak into output surfaces.
fn decode_ignoring_invalid(bytes: &[u8]) -> String {
    match String::from_utf8_lossy(bytes) {
        std::borrow::Cow::Borrowed(s) => s.to_string(),
        std::borrow::Cow::Owned(s) => s.replace('\u{FFFD}', ""),
    }
}

/// Production analyzer: the kagome binary in JSON mode.
#[derive(Debug, Clone)]
pub struct KagomeAnalyzer {
    program: String,
    args: Vec<String>,
}

impl Default for KagomeAnalyzer {
    fn default() -> Self {
        Self::from_config(&PipelineConfig::default())
    }
}

impl KagomeAnalyzer {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    pub fn from_config(config: &PipelineConfig) -> Self {
        Self::new(config.kagome_path.clone(), config.kagome_args.clone())
    }
}

impl Analyzer for KagomeAnalyzer {
    fn analyze(&self, input: &str) -> Result<AnalyzerOutput> {
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| VocabError::Analyzer(format!("failed to spawn {}: {e}", self.program)))?;

        let mut write_error = None;
        if let Some(mut stdin) = child.stdin.take() {
            // The child may exit after a partial read (broken pipe). The
            // child saw incomplete input, so the invocation is a failure,
            // but it must still be reaped and its streams drained.
            if let Err(e) = stdin.write_all(input.as_bytes()) {
                write_error = Some(format!("failed to write to {}: {e}", self.program));
            }
            // Dropping stdin closes the pipe so the child sees EOF.
        }

        let output = child
            .wait_with_output()
            .map_err(|e| VocabError::Analyzer(format!("{} did not finish: {e}", self.program)))?;

        let mut stderr = decode_ignoring_invalid(&output.stderr);
        if let Some(e) = write_error.as_ref() {
            if !stderr.is_empty() {
                stderr.push('\n');
            }
            stderr.push_str(e);
        }

        Ok(AnalyzerOutput {
            stdout: decode_ignoring_invalid(&output.stdout),
            stderr,
            success: output.status.success() && write_error.is_none(),
        })
    }
}
