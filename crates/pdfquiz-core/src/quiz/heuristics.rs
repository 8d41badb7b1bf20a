//! Text heuristics behind the fallback quiz: topic, keywords and summary.
//!
//! All of these are crude on purpose. They never fail and always have a
//! defined answer for empty input.

use tracing::trace;

/// Topic used when no line of the text qualifies.
pub const DEFAULT_TOPIC: &str = "Extracted content";

/// Lines inspected when looking for a topic.
const TOPIC_SCAN_LINES: usize = 10;
/// Topic candidates must be longer than this (in characters, trimmed).
const TOPIC_MIN_CHARS: usize = 5;
/// Topic candidates must be shorter than this (in characters, trimmed).
const TOPIC_MAX_CHARS: usize = 100;
/// Chosen topics are cut to this many characters.
const TOPIC_TRUNCATE_CHARS: usize = 60;

/// Tokens inspected when collecting keywords.
const KEYWORD_SCAN_TOKENS: usize = 50;
/// Keywords must be longer than this (in characters).
const KEYWORD_MIN_CHARS: usize = 3;

/// Sentences kept in the summary.
const SUMMARY_SENTENCES: usize = 3;
/// Sentences must be longer than this (in characters, trimmed).
const SUMMARY_MIN_CHARS: usize = 10;
/// Characters of raw text used when no sentence qualifies.
const SUMMARY_FALLBACK_CHARS: usize = 150;

/// Guess a topic from the first lines of `text`.
///
/// Picks the first of the first ten lines whose trimmed length is strictly
/// between 5 and 100 characters, that is not made only of digits and that is not
/// a `---` page marker.
pub fn extract_topic(text: &str) -> String {
    text.split('\n')
        .take(TOPIC_SCAN_LINES)
        .map(str::trim)
        .find(|line| is_topic_candidate(line))
        .map(|line| line.chars().take(TOPIC_TRUNCATE_CHARS).collect())
        .unwrap_or_else(|| DEFAULT_TOPIC.to_string())
}

fn is_topic_candidate(line: &str) -> bool {
    let len = line.chars().count();
    len > TOPIC_MIN_CHARS
        && len < TOPIC_MAX_CHARS
        && !line.chars().all(is_digit)
        && !line.starts_with("---")
}

/// Decimal and superscript-style digits in any script.
///
/// The Number Forms block (vulgar fractions, Roman numerals) is numeric in
/// Unicode but not a digit, so a line of those still reads as a topic.
fn is_digit(c: char) -> bool {
    c.is_numeric() && !matches!(c, '\u{00BC}'..='\u{00BE}' | '\u{2150}'..='\u{218B}')
}

/// Collect keywords from the first 50 whitespace-separated tokens.
///
/// A keyword is longer than three characters and purely alphabetic, so any
/// token carrying punctuation or digits is dropped rather than cleaned.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let keywords: Vec<String> = text
        .split_whitespace()
        .take(KEYWORD_SCAN_TOKENS)
        .filter(|token| is_keyword(token))
        .map(str::to_string)
        .collect();

    trace!("Extracted {} keywords", keywords.len());
    keywords
}

fn is_keyword(token: &str) -> bool {
    token.chars().count() > KEYWORD_MIN_CHARS && token.chars().all(char::is_alphabetic)
}

/// Build a short summary from the leading sentences of `text`.
///
/// The first three `.`-separated pieces longer than ten characters are kept,
/// each followed by `". "`. When none qualify the first 150 characters are
/// used, with newlines flattened, followed by `...`.
pub fn summarize(text: &str) -> String {
    let summary: String = text
        .split('.')
        .map(str::trim)
        .filter(|sentence| sentence.chars().count() > SUMMARY_MIN_CHARS)
        .take(SUMMARY_SENTENCES)
        .map(|sentence| format!("{}. ", sentence))
        .collect();

    if !summary.is_empty() {
        return summary;
    }

    let head: String = text
        .chars()
        .take(SUMMARY_FALLBACK_CHARS)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    format!("{}...", head.trim())
}
