//! Piece extraction: splitting a sentence at candidate break positions
//!
//! A sentence is cut into indivisible "pieces" wherever a delimiter rule
//! matches. Pieces are the atomic unit the breaker arranges into lines; a
//! line boundary may only fall between two pieces, never inside one.

use regex::Regex;
use std::sync::OnceLock;

/// Marker inserted at candidate break positions before splitting.
///
/// U+001F (unit separator) cannot appear in well-formed text input, so the
/// substitution pass never collides with sentence content.
const BREAK_MARKER: char = '\u{1F}';

/// Which side of a delimiter match the break marker lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakSide {
    /// Marker inserted immediately before the match.
    Before,
    /// Marker inserted immediately after the match.
    After,
}

/// A single delimiter rule: a pattern and the side the break falls on.
#[derive(Debug)]
struct DelimiterRule {
    pattern: Regex,
    side: BreakSide,
}

/// The fixed delimiter rule table.
///
/// Break-before: a space immediately preceding an opening parenthesis.
/// Break-after: comma, semicolon, colon, the whole words "and"/"or", and a
/// closing parenthesis, each followed by a space. Every rule consumes the
/// adjacent space, so boundaries only ever fall on original whitespace and
/// rejoining the pieces with single spaces reproduces the sentence; a
/// delimiter glued to the next character ("1,000", "3:30") is sentence
/// content, not a break position.
fn delimiter_rules() -> &'static [DelimiterRule] {
    static RULES: OnceLock<Vec<DelimiterRule>> = OnceLock::new();
    RULES.get_or_init(|| {
        let table: &[(&str, BreakSide)] = &[
            (r" \(", BreakSide::Before),
            (r"[,;:] ", BreakSide::After),
            (r"\band ", BreakSide::After),
            (r"\bor ", BreakSide::After),
            (r"\) ", BreakSide::After),
        ];
        table
            .iter()
            .map(|(pattern, side)| DelimiterRule {
                pattern: Regex::new(pattern).expect("delimiter pattern is valid"),
                side: *side,
            })
            .collect()
    })
}

/// An indivisible text span with a precomputed display width.
///
/// Pieces are produced once per sentence and never mutated. The width is the
/// character count of the trimmed text, cached because the breaker consults
/// it repeatedly during the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    text: String,
    width: usize,
}

impl Piece {
    /// Create a piece from a raw fragment, trimming boundary whitespace.
    ///
    /// Returns `None` when the fragment is empty after trimming; callers
    /// filter such fragments out rather than carrying zero-width pieces
    /// into the cost model.
    pub fn new(fragment: &str) -> Option<Self> {
        let trimmed = fragment.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
            width: trimmed.chars().count(),
        })
    }

    /// The piece text, stripped of boundary whitespace.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Display width in characters.
    pub fn width(&self) -> usize {
        self.width
    }
}

/// An ordered sequence of pieces for one sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceSequence {
    pieces: Vec<Piece>,
}

impl PieceSequence {
    /// Split a sentence into pieces at every delimiter match.
    ///
    /// Each rule's matches receive a break marker on the rule's side; the
    /// marked sentence is then split on the markers and each fragment is
    /// trimmed. A sentence with no delimiter matches yields one piece.
    pub fn tokenize(sentence: &str) -> Self {
        let mut marked = sentence.to_string();
        for rule in delimiter_rules() {
            let replacement = match rule.side {
                BreakSide::Before => format!("{BREAK_MARKER}${{0}}"),
                BreakSide::After => format!("${{0}}{BREAK_MARKER}"),
            };
            marked = rule
                .pattern
                .replace_all(&marked, replacement.as_str())
                .into_owned();
        }

        let pieces = marked
            .split(BREAK_MARKER)
            .filter_map(Piece::new)
            .collect();
        Self { pieces }
    }

    /// Number of pieces.
    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    /// True when the sequence holds no pieces.
    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Iterate over the pieces in order.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.pieces.iter()
    }

    /// Display widths of all pieces, in order.
    pub fn widths(&self) -> Vec<usize> {
        self.pieces.iter().map(Piece::width).collect()
    }

    /// Rendered width of the whole sequence as a single line: piece widths
    /// plus one separating space between adjacent pieces.
    pub fn rendered_width(&self) -> usize {
        if self.pieces.is_empty() {
            return 0;
        }
        let sum: usize = self.pieces.iter().map(Piece::width).sum();
        sum + self.pieces.len() - 1
    }

    /// Join the pieces in `[start, end)` with single spaces.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds, the same contract as slice
    /// indexing.
    pub fn render(&self, start: usize, end: usize) -> String {
        let texts: Vec<&str> = self.pieces[start..end].iter().map(Piece::text).collect();
        texts.join(" ")
    }
}

impl From<Vec<Piece>> for PieceSequence {
    fn from(pieces: Vec<Piece>) -> Self {
        Self { pieces }
    }
}
