//! Question-type tags and request sets.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuizError;

/// Supported question categories.
///
/// Variant order is the order sections are rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    /// Four options, one of them "all of the above".
    MultipleChoice,
    /// A statement to judge as true or false.
    TrueFalse,
    /// Terms to pair with definitions.
    Matching,
    /// Crossword grid with across/down clues.
    Crossword,
}

impl QuestionType {
    /// All types in rendering order.
    pub const ALL: [QuestionType; 4] = [
        QuestionType::MultipleChoice,
        QuestionType::TrueFalse,
        QuestionType::Matching,
        QuestionType::Crossword,
    ];

    /// Kebab-case tag used on the command line and in config files.
    pub fn tag(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple-choice",
            QuestionType::TrueFalse => "true-false",
            QuestionType::Matching => "matching",
            QuestionType::Crossword => "crossword",
        }
    }

    /// Human-readable name.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionType::MultipleChoice => "multiple choice",
            QuestionType::TrueFalse => "true or false",
            QuestionType::Matching => "matching",
            QuestionType::Crossword => "crossword",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for QuestionType {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        QuestionType::ALL
            .into_iter()
            .find(|t| t.tag() == normalized)
            .ok_or_else(|| QuizError::UnknownQuestionType(s.to_string()))
    }
}

/// Requested question types, iterated in rendering order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionTypeSet(BTreeSet<QuestionType>);

impl QuestionTypeSet {
    /// An empty request.
    pub fn empty() -> Self {
        Self(BTreeSet::new())
    }

    /// Every supported type.
    pub fn all() -> Self {
        QuestionType::ALL.into_iter().collect()
    }

    /// Add a type; duplicates are ignored.
    pub fn insert(&mut self, question_type: QuestionType) {
        self.0.insert(question_type);
    }

    /// Whether `question_type` was requested.
    pub fn contains(&self, question_type: QuestionType) -> bool {
        self.0.contains(&question_type)
    }

    /// Number of requested types.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// No type was requested.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Requested types in rendering order.
    pub fn iter(&self) -> impl Iterator<Item = QuestionType> + '_ {
        self.0.iter().copied()
    }

    /// Parse a list of tags, rejecting anything outside the supported set.
    pub fn parse_tags<I, S>(tags: I) -> Result<Self, QuizError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        tags.into_iter().map(|tag| tag.as_ref().parse()).collect()
    }
}

/// Multiple choice and true/false, the usual starting selection.
impl Default for QuestionTypeSet {
    fn default() -> Self {
        [QuestionType::MultipleChoice, QuestionType::TrueFalse]
            .into_iter()
            .collect()
    }
}

impl FromIterator<QuestionType> for QuestionTypeSet {
    fn from_iter<T: IntoIterator<Item = QuestionType>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for QuestionTypeSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.iter().map(|t| t.label()).collect();
        f.write_str(&labels.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_tags() {
        assert_eq!("multiple-choice".parse::<QuestionType>(), Ok(QuestionType::MultipleChoice));
        assert_eq!("True_False".parse::<QuestionType>(), Ok(QuestionType::TrueFalse));
        assert_eq!(" crossword ".parse::<QuestionType>(), Ok(QuestionType::Crossword));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let err = "essay".parse::<QuestionType>().unwrap_err();
        assert_eq!(err, QuizError::UnknownQuestionType("essay".to_string()));

        assert!(QuestionTypeSet::parse_tags(["matching", "essay"]).is_err());
    }

    #[test]
    fn test_set_iterates_in_priority_order() {
        let set = QuestionTypeSet::parse_tags(["crossword", "true-false", "matching", "multiple-choice"]).unwrap();
        let order: Vec<QuestionType> = set.iter().collect();
        assert_eq!(order, QuestionType::ALL.to_vec());
    }

    #[test]
    fn test_set_ignores_duplicates() {
        let set = QuestionTypeSet::parse_tags(["matching", "matching"]).unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(QuestionType::Matching));
    }

    #[test]
    fn test_default_selection() {
        let set = QuestionTypeSet::default();
        assert!(set.contains(QuestionType::MultipleChoice));
        assert!(set.contains(QuestionType::TrueFalse));
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "multiple choice, true or false");
    }

    #[test]
    fn test_serde_uses_tags() {
        let set = QuestionTypeSet::parse_tags(["true-false", "crossword"]).unwrap();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"["true-false","crossword"]"#);

        let back: QuestionTypeSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
