//! Sentence segmentation collaborator
//!
//! The breaker works one sentence at a time; something upstream has to turn
//! raw text into sentences. That seam is the [`SentenceSegmenter`] trait,
//! with [`RuleSegmenter`] as the built-in rule-based implementation. Callers
//! with a better segmenter (a language model, an NLP toolkit binding) plug
//! it in through the trait.

/// Splits raw text into an ordered sequence of sentences.
///
/// Sentences borrow from the input text; implementations must not allocate
/// new sentence strings.
pub trait SentenceSegmenter {
    /// Segment `text` into sentences, in order. Whitespace-only input
    /// yields no sentences.
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str>;
}

/// Terminal punctuation recognized by the rule segmenter.
fn is_terminator(ch: char) -> bool {
    matches!(ch, '.' | '!' | '?')
}

/// Closing quotes that may trail a terminator and still belong to the
/// sentence being closed.
fn is_trailing_quote(ch: char) -> bool {
    matches!(ch, '"' | '\'' | '\u{201D}' | '\u{2019}')
}

/// Abbreviations whose trailing dot does not end a sentence. Compared
/// case-insensitively against the token preceding the dot.
const ABBREVIATIONS: &[&str] = &[
    "dr", "e.g", "etc", "fig", "i.e", "jr", "mr", "mrs", "ms", "prof", "sr", "st", "vs",
];

/// Rule-based sentence segmenter.
///
/// A sentence ends at `.`, `!` or `?` (plus any trailing closing quotes)
/// followed by whitespace or end of text, unless the dot closes a known
/// abbreviation or a name initial. An initial is a single uppercase letter
/// other than "I" or "A" whose dot is followed by another capitalized
/// token; the pronoun "I" and option labels like "Choose A." end their
/// sentences normally.
///
/// Known limitation: a parenthetical that swallows the terminator, as in
/// `(See note 3.)`, is not recognized as a sentence end, so such a sentence
/// is merged with its successor.
#[derive(Debug, Clone, Default)]
pub struct RuleSegmenter;

impl RuleSegmenter {
    /// Create a segmenter with the built-in abbreviation list.
    pub fn new() -> Self {
        Self
    }

    /// True when the dot between `prefix` and `rest` closes an abbreviation
    /// or a name initial ("J. Smith").
    fn dot_closes_abbreviation(prefix: &str, rest: &str) -> bool {
        let token = prefix
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or("")
            .trim_start_matches(|c: char| !c.is_alphanumeric());
        if token.is_empty() {
            return false;
        }
        let mut chars = token.chars();
        if let (Some(first), None) = (chars.next(), chars.next()) {
            // "I" and "A" are words in their own right; anything else reads
            // as an initial only when another name part follows.
            if first.is_uppercase() && !matches!(first, 'I' | 'A') {
                let next = rest.chars().find(|c| !c.is_whitespace());
                if next.is_some_and(char::is_uppercase) {
                    return true;
                }
            }
        }
        let lowered = token.to_lowercase();
        ABBREVIATIONS.contains(&lowered.as_str())
    }
}

impl SentenceSegmenter for RuleSegmenter {
    fn segment<'t>(&self, text: &'t str) -> Vec<&'t str> {
        let mut sentences = Vec::new();
        let mut start = 0;
        let mut iter = text.char_indices().peekable();

        while let Some((pos, ch)) = iter.next() {
            if !is_terminator(ch) {
                continue;
            }

            let mut end = pos + ch.len_utf8();
            while let Some(&(quote_pos, quote)) = iter.peek() {
                if is_trailing_quote(quote) {
                    end = quote_pos + quote.len_utf8();
                    iter.next();
                } else {
                    break;
                }
            }

            let followed_by_space = text[end..]
                .chars()
                .next()
                .map_or(true, char::is_whitespace);
            if !followed_by_space {
                continue;
            }
            if ch == '.' && Self::dot_closes_abbreviation(&text[..pos], &text[end..]) {
                continue;
            }

            let sentence = text[start..end].trim();
            if !sentence.is_empty() {
                sentences.push(sentence);
            }
            start = end;
        }

        let tail = text[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail);
        }
        sentences
    }
}
