//! Token filtering and surface extraction.
//!
//! Turns one parsed document into (surface, level) pairs, excluding the
//! kagome symbol/punctuation class and the `/` separator literal. Every
//! input entry is guaranteed at least one output pair: when nothing usable
//! survives, the original unsegmented word is emitted instead.

use crate::types::{Entry, KagomeToken};

/// Kagome's part-of-speech category for symbols and punctuation.
pub const SYMBOL_CATEGORY: &str = "記号";

/// Filters tokens down to usable surface forms.
#[derive(Debug, Clone)]
pub struct TokenFilter {
    /// Part-of-speech category to drop entirely.
    excluded_category: String,
    /// Literal surface to drop regardless of category.
    excluded_surface: String,
}

impl Default for TokenFilter {
    fn default() -> Self {
        Self {
            excluded_category: SYMBOL_CATEGORY.to_string(),
            excluded_surface: "/".to_string(),
        }
    }
}

impl TokenFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the excluded part-of-speech category.
    pub fn with_excluded_category(mut self, category: impl Into<String>) -> Self {
        self.excluded_category = category.into();
        self
    }

    /// Whether a single token survives filtering.
    fn keeps(&self, token: &KagomeToken) -> bool {
        !token.surface.is_empty()
            && token.surface != self.excluded_surface
            && token.pos_category() != Some(self.excluded_category.as_str())
    }

    /// Extract (surface, level) pairs for one document.
    ///
    /// Segmentation may expand one word into several pairs, each inheriting
    /// the source entry's level. If no token survives, the entry's original
    /// word is emitted unchanged as a single fallback pair.
    pub fn surfaces(&self, tokens: &[KagomeToken], entry: &Entry) -> Vec<(String, u8)> {
        let kept: Vec<(String, u8)> = tokens
            .iter()
            .filter(|t| self.keeps(t))
            .map(|t| (t.surface.clone(), entry.level))
            .collect();

        if kept.is_empty() {
            vec![(entry.word.clone(), entry.level)]
        } else {
            kept
        }
    }
}
