//! Deterministic, template-based quiz used when remote generation is
//! unavailable.

use std::fmt;

use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use tracing::debug;

use super::heuristics::{extract_keywords, extract_topic, summarize};
use super::types::{QuestionType, QuestionTypeSet};

/// Timestamp format used in the footer.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RULE: &str = "========================";
const MAX_FOOTER_KEYWORDS: usize = 10;

/// Request-scoped inputs supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesisContext {
    /// When the quiz was requested; rendered verbatim in the footer.
    pub generated_at: Option<NaiveDateTime>,
}

impl SynthesisContext {
    /// Context stamped with the given time.
    pub fn at(generated_at: NaiveDateTime) -> Self {
        Self {
            generated_at: Some(generated_at),
        }
    }

    /// Context stamped with the current local time.
    pub fn now() -> Self {
        Self::at(Local::now().naive_local())
    }
}

/// One numbered question section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionSection {
    /// 1-based position in the quiz.
    pub number: usize,
    /// Question category.
    pub question_type: QuestionType,
    /// Rendered section text.
    pub body: String,
}

/// A fully synthesized fallback quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackQuiz {
    pub topic: String,
    pub summary: String,
    pub keywords: Vec<String>,
    pub sections: Vec<QuestionSection>,
    pub word_count: usize,
    pub char_count: usize,
    pub generated_at: Option<NaiveDateTime>,
}

impl FallbackQuiz {
    /// Derive topic, summary and keywords from `text` and render one section
    /// per requested type.
    pub fn build(text: &str, types: &QuestionTypeSet, ctx: &SynthesisContext) -> Self {
        let topic = extract_topic(text);
        let summary = summarize(text);
        let keywords = extract_keywords(text);

        let sections: Vec<QuestionSection> = types
            .iter()
            .enumerate()
            .map(|(i, question_type)| QuestionSection {
                number: i + 1,
                question_type,
                body: render_section(question_type, i + 1, &keywords),
            })
            .collect();

        debug!(
            "Synthesized fallback quiz: topic={:?}, {} keywords, {} sections",
            topic,
            keywords.len(),
            sections.len()
        );

        Self {
            topic,
            summary,
            keywords,
            sections,
            word_count: text.split_whitespace().count(),
            char_count: text.chars().count(),
            generated_at: ctx.generated_at,
        }
    }

    /// Render the quiz as a plain-text block.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FallbackQuiz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "Topic: {}", self.topic)?;
        writeln!(f, "Summary: {}", self.summary)?;
        writeln!(f)?;
        writeln!(f, "Generated questions:")?;
        writeln!(f, "{}", RULE)?;

        for section in &self.sections {
            f.write_str(&section.body)?;
        }

        let keywords: Vec<&str> = self
            .keywords
            .iter()
            .take(MAX_FOOTER_KEYWORDS)
            .map(String::as_str)
            .collect();
        let generated_at = self
            .generated_at
            .map(|t| t.format(TIMESTAMP_FORMAT).to_string())
            .unwrap_or_else(|| "unspecified".to_string());

        writeln!(f)?;
        writeln!(f, "{}", RULE)?;
        writeln!(f, "Additional information:")?;
        writeln!(f, "- Word count: {}", self.word_count)?;
        writeln!(f, "- Character count: {}", self.char_count)?;
        writeln!(f, "- Extracted keywords: {}", keywords.join(", "))?;
        writeln!(f, "- Generated at: {}", generated_at)
    }
}

/// Synthesize the fallback quiz for `text` and render it.
///
/// Never fails and never returns an empty string.
pub fn synthesize(text: &str, types: &QuestionTypeSet, ctx: &SynthesisContext) -> String {
    FallbackQuiz::build(text, types, ctx).render()
}

fn keyword_or<'a>(keywords: &'a [String], index: usize, placeholder: &'a str) -> &'a str {
    keywords.get(index).map(String::as_str).unwrap_or(placeholder)
}

fn joined_or(keywords: &[String], count: usize, placeholder: &str) -> String {
    if keywords.len() >= count {
        keywords[..count].join(", ")
    } else {
        placeholder.to_string()
    }
}

fn render_section(question_type: QuestionType, number: usize, keywords: &[String]) -> String {
    match question_type {
        QuestionType::MultipleChoice => render_multiple_choice(number, keywords),
        QuestionType::TrueFalse => render_true_false(number),
        QuestionType::Matching => render_matching(number, keywords),
        QuestionType::Crossword => render_crossword(number, keywords),
    }
}

fn render_multiple_choice(number: usize, keywords: &[String]) -> String {
    format!(
        "\n{number}. Type: {label}\n   \
         Question: What is the main topic covered in the text?\n   \
         Options:\n   \
         a) {a}\n   \
         b) {b}\n   \
         c) {c}\n   \
         d) All of the above\n   \
         Answer: the correct answer: d (all of the above)\n\n",
        label = QuestionType::MultipleChoice.label(),
        a = keyword_or(keywords, 0, "First option"),
        b = keyword_or(keywords, 1, "Second option"),
        c = keyword_or(keywords, 2, "Third option"),
    )
}

fn render_true_false(number: usize) -> String {
    format!(
        "\n{number}. Type: {label}\n   \
         Statement: The text contains detailed and useful information about the topic\n   \
         Answer: true\n   \
         Justification: The text provides comprehensive and detailed information\n\n",
        label = QuestionType::TrueFalse.label(),
    )
}

fn render_matching(number: usize, keywords: &[String]) -> String {
    format!(
        "\n{number}. Type: {label}\n   \
         Match each term with its definition:\n   \
         Terms: {terms}\n   \
         Definitions: [a detailed definition of each term based on the context]\n\n",
        label = QuestionType::Matching.label(),
        terms = joined_or(keywords, 3, "First term, Second term, Third term"),
    )
}

/// Crossword clue: the keyword and its letter count, or a placeholder with
/// the template's nominal length.
fn clue(keywords: &[String], index: usize, placeholder: &str, nominal_len: usize) -> String {
    match keywords.get(index) {
        Some(word) => format!("{} ({} letters)", word, word.chars().count()),
        None => format!("{} ({} letters)", placeholder, nominal_len),
    }
}

fn render_crossword(number: usize, keywords: &[String]) -> String {
    format!(
        "\n{number}. Type: {label}\n   \
         Crossword grid: [7x7 grid]\n   \
         Words used: {words}\n\n   \
         Clues:\n   \
         Across:\n   \
         - 1. {across1}\n   \
         - 3. {across3}\n\n   \
         Down:\n   \
         - 2. {down2}\n   \
         - 4. {down4}\n\n",
        label = QuestionType::Crossword.label(),
        words = joined_or(keywords, 5, "Keywords from the text"),
        across1 = clue(keywords, 0, "Term from the text", 4),
        across3 = clue(keywords, 1, "Important concept", 6),
        down2 = clue(keywords, 2, "Key word", 5),
        down4 = clue(keywords, 3, "Subtopic", 7),
    )
}
