//! Data types shared by the analysis stages.

use serde::{Deserialize, Serialize};

/// A trimmed sentence and its position in the source document.
///
/// `index` is the sentence's position across the whole document, so a
/// selection of sentences can always be restored to reading order.
/// `paragraph` is the position of the enclosing paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentence<'a> {
    pub index: usize,
    pub paragraph: usize,
    pub text: &'a str,
}

/// A candidate term and how often it occurs in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub term: String,
    pub count: usize,
}

/// A single multiple-choice question.
///
/// The field names on the wire are the ones remote models are asked to
/// emit (`correctAnswer`), so the same type parses remote replies and
/// serializes locally generated quizzes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    pub options: [String; 4],
    #[serde(rename = "correctAnswer", alias = "correctAnswerIndex")]
    pub correct_answer_index: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

impl QuizQuestion {
    /// The option marked as correct.
    ///
    /// Returns `None` only for questions parsed from untrusted input whose
    /// index is out of range.
    pub fn correct_option(&self) -> Option<&str> {
        self.options
            .get(self.correct_answer_index)
            .map(String::as_str)
    }
}
