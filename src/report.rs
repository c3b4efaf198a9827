//! Ordering and summary statistics for the final vocabulary list.

use std::collections::BTreeMap;

use crate::aggregate::LevelMap;
use crate::types::OutputRow;

/// Export a [`LevelMap`] as rows sorted by level descending, then word
/// ascending. Level 5 (easiest) comes first; within a level, lexicographic
/// order makes the output deterministic.
pub fn sorted_rows(map: &LevelMap) -> Vec<OutputRow> {
    let mut rows: Vec<OutputRow> = map
        .iter()
        .map(|(word, level)| OutputRow {
            word: word.to_string(),
            level,
        })
        .collect();

    rows.sort_by(|a, b| b.level.cmp(&a.level).then_with(|| a.word.cmp(&b.word)));
    rows
}

/// Count rows per level, keyed ascending for stable iteration.
pub fn level_counts(rows: &[OutputRow]) -> BTreeMap<u8, usize> {
    let mut counts = BTreeMap::new();
    for row in rows {
        *counts.entry(row.level).or_insert(0) += 1;
    }
    counts
}
