//! Multiple-choice quiz synthesis.
//!
//! Questions are built in three passes:
//!
//! 1. **Anchored questions**: up to five sentences spread evenly across the
//!    document each become a question about the first keyword they contain.
//!    The sentence itself is the correct option; other sentences, with one
//!    keyword swapped for the anchor's keyword, are the distractors.
//! 2. **Definition question**: if fewer than three questions exist, one more
//!    asks which statement best describes the top keyword.
//! 3. **Backfill**: generic topic questions until there are three.
//!
//! The list is capped at [`MAX_QUESTIONS`]. Anchors without any keyword are
//! skipped rather than replaced by a generic question.

use crate::keywords::extract_keywords;
use crate::models::{QuizQuestion, Sentence};
use crate::shuffle::{shuffle, RngShuffle, ShuffleSource};
use crate::text::{char_len, contains_lowercase, replace_ignore_ascii_case, split_sentences};

/// Upper bound on questions per quiz.
pub const MAX_QUESTIONS: usize = 5;

/// The backfill pass tops the quiz up to this many questions.
pub const MIN_QUESTIONS: usize = 3;

/// Anchors shorter than this (in characters) are skipped.
const MIN_ANCHOR_CHARS: usize = 20;

/// Only sentences longer than this can become distractors.
const MIN_DISTRACTOR_CHARS: usize = 15;

const DISTRACTOR_COUNT: usize = 3;

pub const NOT_MENTIONED_OPTION: &str = "This information is not mentioned in the notes";
const ANCHORED_EXPLANATION: &str = "This information is directly stated in the notes.";
const GENERIC_QUESTION: &str = "What is one of the main topics covered in these notes?";
const GENERIC_EXPLANATION: &str =
    "This appears to be one of the key topics based on frequency of mention.";
const GENERIC_TOPIC_FALLBACK: &str = "Main topic";

/// Generate a quiz using thread-local entropy for option order.
pub fn generate_quiz(content: &str) -> Vec<QuizQuestion> {
    generate_quiz_with(content, &mut RngShuffle::thread_local())
}

/// Generate a quiz, drawing option order from `source`.
///
/// Returns an empty list for blank content and between
/// [`MIN_QUESTIONS`] and [`MAX_QUESTIONS`] questions otherwise.
///
/// ```rust
/// use notefi_core::{generate_quiz_with, SequenceShuffle};
///
/// let quiz = generate_quiz_with(
///     "Photosynthesis converts light into energy. Plants capture light.",
///     &mut SequenceShuffle::identity(),
/// );
/// assert_eq!(quiz.len(), 3);
/// assert_eq!(quiz[0].correct_answer_index, 0);
/// ```
pub fn generate_quiz_with(content: &str, source: &mut dyn ShuffleSource) -> Vec<QuizQuestion> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let sentences = split_sentences(content);
    let keywords = extract_keywords(content);
    let mut quiz = anchored_questions(&sentences, &keywords, source);

    if keywords.len() >= 2 && quiz.len() < MIN_QUESTIONS {
        if let Some(question) = definition_question(&sentences, &keywords[0], source) {
            quiz.push(question);
        }
    }

    while quiz.len() < MIN_QUESTIONS {
        quiz.push(generic_question(keywords.first().map(String::as_str)));
    }

    quiz.truncate(MAX_QUESTIONS);
    quiz
}

fn anchored_questions(
    sentences: &[Sentence<'_>],
    keywords: &[String],
    source: &mut dyn ShuffleSource,
) -> Vec<QuizQuestion> {
    let total = sentences.len();
    let anchors = MAX_QUESTIONS.min(total / 2);
    let mut quiz = Vec::new();

    for i in 0..anchors {
        let anchor = sentences[i * total / anchors].text;
        if char_len(anchor) < MIN_ANCHOR_CHARS {
            continue;
        }

        let lowered = anchor.to_lowercase();
        let Some(keyword) = keywords.iter().find(|k| contains_lowercase(&lowered, k)) else {
            continue;
        };
        let swap_keyword = if keywords.len() > 1 {
            keywords.iter().find(|k| *k != keyword)
        } else {
            None
        };

        let mut distractors = sentences
            .iter()
            .filter(|s| s.text != anchor && char_len(s.text) > MIN_DISTRACTOR_CHARS)
            .take(DISTRACTOR_COUNT)
            .map(|other| match swap_keyword {
                Some(swap) => replace_ignore_ascii_case(other.text, swap, keyword),
                None => other.text.to_string(),
            });
        let options = [
            anchor.to_string(),
            next_or_not_mentioned(&mut distractors),
            next_or_not_mentioned(&mut distractors),
            next_or_not_mentioned(&mut distractors),
        ];

        quiz.push(shuffled_question(
            format!("According to the notes, what is mentioned about \"{keyword}\"?"),
            options,
            anchor,
            ANCHORED_EXPLANATION.to_string(),
            source,
        ));
    }

    quiz
}

fn definition_question(
    sentences: &[Sentence<'_>],
    keyword: &str,
    source: &mut dyn ShuffleSource,
) -> Option<QuizQuestion> {
    let needle = keyword.to_lowercase();
    let sentence = sentences
        .iter()
        .find(|s| contains_lowercase(&s.text.to_lowercase(), &needle))?
        .text;

    let options = [
        sentence.to_string(),
        format!("{keyword} is not discussed in these notes"),
        format!("{keyword} is briefly mentioned without detail"),
        format!("{keyword} is the main topic of the entire document"),
    ];

    Some(shuffled_question(
        format!("Which of the following best describes \"{keyword}\" based on the notes?"),
        options,
        sentence,
        format!("This is the information provided about {keyword} in the notes."),
        source,
    ))
}

fn next_or_not_mentioned(distractors: &mut impl Iterator<Item = String>) -> String {
    distractors
        .next()
        .unwrap_or_else(|| NOT_MENTIONED_OPTION.to_string())
}

fn generic_question(top_keyword: Option<&str>) -> QuizQuestion {
    QuizQuestion {
        question: GENERIC_QUESTION.to_string(),
        options: [
            top_keyword.unwrap_or(GENERIC_TOPIC_FALLBACK).to_string(),
            "This topic is not covered".to_string(),
            "All topics are equally important".to_string(),
            "The notes don't have a clear focus".to_string(),
        ],
        correct_answer_index: 0,
        explanation: Some(GENERIC_EXPLANATION.to_string()),
    }
}

/// Shuffle four options and record where `correct` ended up.
fn shuffled_question(
    question: String,
    mut options: [String; 4],
    correct: &str,
    explanation: String,
    source: &mut dyn ShuffleSource,
) -> QuizQuestion {
    shuffle(&mut options, source);
    let correct_answer_index = options.iter().position(|o| o == correct).unwrap_or(0);

    QuizQuestion {
        question,
        options,
        correct_answer_index,
        explanation: Some(explanation),
    }
}
