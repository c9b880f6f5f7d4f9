//! Semantic line breaking
//!
//! Reformats free-form text into line-wrapped output that breaks at
//! phrase boundaries (commas, conjunctions, parentheses) instead of at an
//! arbitrary column. Each sentence is split into indivisible pieces at
//! delimiter matches, then a memoized search places line breaks between
//! pieces so that every line sits as close to the target width as possible.
//!
//! ```
//! use sembreak_core::SemanticBreaker;
//!
//! let breaker = SemanticBreaker::new();
//! let lines = breaker.reflow("Hello world.");
//! assert_eq!(lines, vec!["Hello world."]);
//! ```

#![warn(missing_docs)]

pub mod breaker;
pub mod config;
pub mod error;
pub mod piece;
pub mod segmenter;

// Re-export key types
pub use breaker::{break_into_lines, optimal_breaks};
pub use config::{BreakConfig, BreakConfigBuilder, DEFAULT_MAX_WIDTH};
pub use error::{CoreError, Result};
pub use piece::{Piece, PieceSequence};
pub use segmenter::{RuleSegmenter, SentenceSegmenter};

/// Main entry point for semantic line breaking.
///
/// Ties the three stages together: the segmenter turns raw text into
/// sentences, the tokenizer turns each sentence into pieces, and the
/// breaker turns pieces into lines. Sentences are independent; no state is
/// carried between them.
pub struct SemanticBreaker {
    config: BreakConfig,
    segmenter: Box<dyn SentenceSegmenter>,
}

impl SemanticBreaker {
    /// Create a breaker with the default configuration (width 80) and the
    /// built-in rule-based segmenter.
    pub fn new() -> Self {
        Self::with_config(BreakConfig::default())
    }

    /// Create a breaker with a custom configuration.
    pub fn with_config(config: BreakConfig) -> Self {
        Self {
            config,
            segmenter: Box::new(RuleSegmenter::new()),
        }
    }

    /// Replace the sentence segmenter.
    pub fn with_segmenter(mut self, segmenter: Box<dyn SentenceSegmenter>) -> Self {
        self.segmenter = segmenter;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &BreakConfig {
        &self.config
    }

    /// Reflow raw text into semantically wrapped lines.
    ///
    /// Lines come back in sentence order, and within each sentence in
    /// left-to-right segment order. Empty or whitespace-only text yields
    /// no lines.
    pub fn reflow(&self, text: &str) -> Vec<String> {
        let mut lines = Vec::new();
        for sentence in self.segmenter.segment(text) {
            lines.extend(self.reflow_sentence(sentence));
        }
        lines
    }

    /// Reflow a single sentence.
    ///
    /// The sentence's whitespace is normalized (runs of whitespace collapse
    /// to single spaces) before piece extraction, so text that was already
    /// hard-wrapped reflows cleanly.
    pub fn reflow_sentence(&self, sentence: &str) -> Vec<String> {
        let normalized = normalize_whitespace(sentence);
        let pieces = PieceSequence::tokenize(&normalized);
        break_into_lines(&pieces, self.config.max_width())
    }
}

impl Default for SemanticBreaker {
    fn default() -> Self {
        Self::new()
    }
}

/// Collapse every whitespace run to a single space and trim the ends.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Reflow text with the given maximum width (convenience function).
pub fn break_text(text: &str, max_width: usize) -> Result<Vec<String>> {
    let config = BreakConfig::with_max_width(max_width)?;
    Ok(SemanticBreaker::with_config(config).reflow(text))
}
