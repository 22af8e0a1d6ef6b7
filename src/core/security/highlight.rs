//! Keyword highlighting
//!
//! Wraps whole-word keyword occurrences in a marker for display.

use regex::{Regex, RegexBuilder};
use tracing::warn;

/// Default opening marker
pub const DEFAULT_MARK_OPEN: &str = "<mark>";
/// Default closing marker
pub const DEFAULT_MARK_CLOSE: &str = "</mark>";

/// Marks case-insensitive whole-word keyword occurrences.
///
/// Marker syntax is not escaped. Running the highlighter over its own output
/// wraps already-marked keywords a second time.
#[derive(Debug, Clone)]
pub struct KeywordHighlighter {
    open: String,
    close: String,
}

impl Default for KeywordHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordHighlighter {
    /// Create a highlighter using `<mark>` tags
    pub fn new() -> Self {
        Self::with_markers(DEFAULT_MARK_OPEN, DEFAULT_MARK_CLOSE)
    }

    /// Create a highlighter with custom markers
    pub fn with_markers(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
        }
    }

    /// Highlight every keyword in `text`
    pub fn highlight<S: AsRef<str>>(&self, text: &str, keywords: &[S]) -> String {
        if keywords.is_empty() {
            return text.to_string();
        }

        let mut highlighted = text.to_string();
        for keyword in keywords {
            let Some(pattern) = word_pattern(keyword.as_ref()) else {
                continue;
            };
            highlighted = pattern
                .replace_all(&highlighted, |caps: &regex::Captures| {
                    format!("{}{}{}", self.open, &caps[0], self.close)
                })
                .into_owned();
        }
        highlighted
    }
}

/// Case-insensitive literal phrase bounded by word boundaries
fn word_pattern(keyword: &str) -> Option<Regex> {
    if keyword.trim().is_empty() {
        return None;
    }
    let source = format!(r"\b{}\b", regex::escape(keyword));
    match RegexBuilder::new(&source).case_insensitive(true).build() {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            warn!("Skipping keyword '{}' for highlighting: {}", keyword, e);
            None
        }
    }
}

/// Highlight with the default markers
pub fn highlight_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> String {
    KeywordHighlighter::new().highlight(text, keywords)
}
