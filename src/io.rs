//! Reading the raw word/level file and writing the final list.
//!
//! Both files are two-column CSV with a `word,level` header. File-level
//! problems are fatal: unlike analyzer misbehavior, a file we cannot read
//! or a row we cannot interpret means the run has nothing sound to work on.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{Result, VocabError};
use crate::types::{Entry, OutputRow};

/// Load all entries from a `word,level` CSV file.
///
/// Blank lines are skipped, as is a `word,...` header on the first line —
/// only there, so a data row whose word happens to start with `word,` is
/// still loaded. A row with no comma or a level that does not parse is an
/// [`VocabError::InvalidRow`] naming the offending line.
pub fn load_entries(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let reader = BufReader::new(File::open(path)?);
    let mut entries = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || (idx == 0 && trimmed.starts_with("word,")) {
            continue;
        }

        let line_no = idx + 1;
        let (word, level) = trimmed.split_once(',').ok_or_else(|| VocabError::InvalidRow {
            line: line_no,
            message: "expected two comma-separated columns".to_string(),
        })?;

        let level: u8 = level.trim().parse().map_err(|_| VocabError::InvalidRow {
            line: line_no,
            message: format!("level '{}' is not a number", level.trim()),
        })?;

        entries.push(Entry::new(word.trim(), level));
    }

    Ok(entries)
}

/// Write rows to `path` as `word,level` CSV, overwriting any existing file.
pub fn write_rows(path: impl AsRef<Path>, rows: &[OutputRow]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);

    writeln!(writer, "word,level")?;
    for row in rows {
        writeln!(writer, "{},{}", row.word, row.level)?;
    }
    writer.flush()?;

    Ok(())
}
