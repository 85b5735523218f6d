//! Note assistant: remote AI first, offline engine as the fallback.
//!
//! Every request follows the same policy:
//!
//! 1. Blank notes short-circuit to a neutral answer without any work.
//! 2. With no backend configured, the offline engine answers.
//! 3. Otherwise the backend is asked. A transport error, or a reply that
//!    does not parse into the expected shape, is logged and the offline
//!    engine answers instead.
//!
//! No remote failure is ever returned to the caller. [`Assisted::origin`]
//! records which path produced the value.

use anyhow::{bail, Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

use notefi_core::{QuizQuestion, RngShuffle};

use crate::backend::AiBackend;

/// Answer returned by [`NoteAssistant::summarize_note`] for blank notes.
pub const EMPTY_NOTE_MESSAGE: &str =
    "Please add some content to your note before generating a summary.";

/// Remote keyword lists are cut to this length.
pub const MAX_REMOTE_KEYWORDS: usize = 15;

/// Remote quizzes are cut to this length.
pub const MAX_REMOTE_QUESTIONS: usize = 5;

const SUMMARY_SYSTEM: &str = "You are an educational assistant that creates detailed, \
    well-structured summaries of study notes. Include all key concepts, their relationships, \
    and important details. Make the summary thorough enough to be useful for review purposes.";

const KEYWORDS_SYSTEM: &str = "You are an educational assistant that identifies key terms and \
    concepts from study notes. Return only a valid JSON array of strings.";

const QUIZ_SYSTEM: &str = "You are an educational assistant that creates effective \
    multiple-choice quiz questions to test understanding of study material. Make sure the \
    questions test comprehension, not just memorization. Include plausible distractors for \
    incorrect options. Return only a valid JSON array.";

/// Which path produced an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Origin {
    Remote,
    Fallback,
}

/// A value together with the path that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assisted<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Assisted<T> {
    fn remote(value: T) -> Self {
        Self {
            value,
            origin: Origin::Remote,
        }
    }

    fn fallback(value: T) -> Self {
        Self {
            value,
            origin: Origin::Fallback,
        }
    }
}

pub struct NoteAssistant {
    backend: Option<Box<dyn AiBackend>>,
    seed: Option<u64>,
}

impl NoteAssistant {
    /// Assistant that never leaves the process.
    pub fn offline() -> Self {
        Self {
            backend: None,
            seed: None,
        }
    }

    pub fn new(backend: Option<Box<dyn AiBackend>>) -> Self {
        Self {
            backend,
            seed: None,
        }
    }

    /// Seed the offline quiz shuffle so option order is reproducible.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn is_remote(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn summarize_note(&self, content: &str) -> Assisted<String> {
        if content.trim().is_empty() {
            return Assisted::fallback(EMPTY_NOTE_MESSAGE.to_string());
        }

        let prompt = format!(
            "Summarize the following study notes in a comprehensive way that captures all the \
             main points, key concepts, and important details:\n\n{}",
            content
        );
        match self.ask(SUMMARY_SYSTEM, &prompt, |text| Ok(text.to_string())).await {
            Some(summary) => Assisted::remote(summary),
            None => Assisted::fallback(notefi_core::summarize(content)),
        }
    }

    pub async fn extract_keywords(&self, content: &str) -> Assisted<Vec<String>> {
        if content.trim().is_empty() {
            return Assisted::fallback(Vec::new());
        }

        let prompt = format!(
            "Extract the most important keywords and concepts from these study notes. Return \
             ONLY a JSON array of strings with no explanation:\n\n{}",
            content
        );
        match self.ask(KEYWORDS_SYSTEM, &prompt, parse_keywords).await {
            Some(keywords) => Assisted::remote(keywords),
            None => Assisted::fallback(notefi_core::extract_keywords(content)),
        }
    }

    pub async fn generate_quiz(&self, content: &str) -> Assisted<Vec<QuizQuestion>> {
        if content.trim().is_empty() {
            return Assisted::fallback(Vec::new());
        }

        let prompt = format!(
            "Generate 5 multiple-choice quiz questions based on these study notes. Each question \
             should have 4 options (A, B, C, D) with only one correct answer. Return ONLY a JSON \
             array of objects with this structure:\n\
             {{\n  \"question\": \"The question text\",\n  \"options\": [\"Option A\", \"Option B\", \
             \"Option C\", \"Option D\"],\n  \"correctAnswer\": 0,\n  \"explanation\": \"Brief \
             explanation of why this is correct\"\n}}\n\nStudy notes:\n{}",
            content
        );
        match self.ask(QUIZ_SYSTEM, &prompt, parse_quiz).await {
            Some(quiz) => Assisted::remote(quiz),
            None => Assisted::fallback(self.fallback_quiz(content)),
        }
    }

    fn fallback_quiz(&self, content: &str) -> Vec<QuizQuestion> {
        match self.seed {
            Some(seed) => notefi_core::generate_quiz_with(
                content,
                &mut RngShuffle::new(StdRng::seed_from_u64(seed)),
            ),
            None => notefi_core::generate_quiz(content),
        }
    }

    /// Ask the backend and parse its reply. `None` means "use the fallback".
    async fn ask<T>(
        &self,
        system: &str,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T>,
    ) -> Option<T> {
        let backend = self.backend.as_ref()?;

        let reply = match backend.complete(system, prompt).await {
            Ok(reply) => reply,
            Err(e) => {
                tracing::warn!(backend = backend.name(), error = %e, "remote request failed; using offline engine");
                return None;
            }
        };

        match parse(&reply) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(backend = backend.name(), error = %e, "malformed remote reply; using offline engine");
                None
            }
        }
    }
}

/// Strip a surrounding Markdown code fence, if any.
fn strip_code_fence(reply: &str) -> &str {
    let trimmed = reply.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.trim_start_matches(|c: char| c.is_ascii_alphanumeric());
    rest.strip_suffix("```").unwrap_or(rest).trim()
}

fn parse_keywords(reply: &str) -> Result<Vec<String>> {
    let mut keywords: Vec<String> = serde_json::from_str(strip_code_fence(reply))
        .context("expected a JSON array of strings")?;
    keywords.truncate(MAX_REMOTE_KEYWORDS);
    Ok(keywords)
}

fn parse_quiz(reply: &str) -> Result<Vec<QuizQuestion>> {
    let mut quiz: Vec<QuizQuestion> = serde_json::from_str(strip_code_fence(reply))
        .context("expected a JSON array of quiz questions")?;
    if let Some(bad) = quiz.iter().find(|q| q.correct_option().is_none()) {
        bail!(
            "correctAnswer {} out of range for question {:?}",
            bad.correct_answer_index,
            bad.question
        );
    }
    quiz.truncate(MAX_REMOTE_QUESTIONS);
    Ok(quiz)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fence() {
        assert_eq!(strip_code_fence("[1]"), "[1]");
        assert_eq!(strip_code_fence("```json\n[\"a\"]\n```"), "[\"a\"]");
        assert_eq!(strip_code_fence("  ```\n[]\n```  "), "[]");
    }

    #[test]
    fn test_parse_keywords_truncates() {
        let reply = serde_json::to_string(&(0..20).map(|i| format!("k{i}")).collect::<Vec<_>>())
            .unwrap();
        let keywords = parse_keywords(&reply).unwrap();
        assert_eq!(keywords.len(), MAX_REMOTE_KEYWORDS);
        assert_eq!(keywords[0], "k0");
    }

    #[test]
    fn test_parse_keywords_rejects_objects() {
        assert!(parse_keywords(r#"{"keywords": ["a"]}"#).is_err());
        assert!(parse_keywords("Sure! Here are the keywords: a, b").is_err());
    }

    #[test]
    fn test_parse_quiz_rejects_out_of_range_index() {
        let reply = r#"[{"question":"Q","options":["a","b","c","d"],"correctAnswer":4}]"#;
        assert!(parse_quiz(reply).is_err());
    }

    #[test]
    fn test_parse_quiz_truncates() {
        let one = r#"{"question":"Q","options":["a","b","c","d"],"correctAnswer":1}"#;
        let reply = format!("[{}]", vec![one; 7].join(","));
        let quiz = parse_quiz(&reply).unwrap();
        assert_eq!(quiz.len(), MAX_REMOTE_QUESTIONS);
        assert_eq!(quiz[0].correct_option(), Some("b"));
    }
}
