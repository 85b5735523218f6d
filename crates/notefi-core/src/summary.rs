//! Extractive summarizer.
//!
//! Builds a summary from sentences of the source, never new text, and
//! always emits the chosen sentences in their original order.
//!
//! # Selection
//!
//! 1. Short content (under [`MIN_SUMMARY_CHARS`]) is returned unchanged.
//! 2. Content with at most [`SHORT_DOCUMENT_SENTENCES`] sentences is rejoined
//!    in full.
//! 3. Otherwise the first sentence and every paragraph's topic sentence are
//!    kept, the remaining sentences are scored against the document
//!    keywords, the best [`SCORED_SENTENCES`] are added, and the last
//!    sentence closes the summary.

use std::collections::{BTreeSet, HashSet};

use crate::keywords::extract_keywords;
use crate::models::Sentence;
use crate::text::{char_len, contains_lowercase, split_sentences};

/// Content shorter than this (in characters) is already a summary.
pub const MIN_SUMMARY_CHARS: usize = 200;

/// Documents with this many sentences or fewer are rejoined without scoring.
pub const SHORT_DOCUMENT_SENTENCES: usize = 5;

/// How many scored sentences are added on top of the fixed picks.
pub const SCORED_SENTENCES: usize = 7;

const LENGTH_SCORE_DIVISOR: f64 = 20.0;
const LENGTH_SCORE_CAP: f64 = 3.0;
const KEYWORD_HIT_SCORE: f64 = 2.0;

/// Produce an extractive summary of `content`.
///
/// ```rust
/// use notefi_core::summarize;
///
/// assert_eq!(summarize("A. B. C."), "A. B. C.");
/// ```
pub fn summarize(content: &str) -> String {
    if char_len(content) < MIN_SUMMARY_CHARS {
        return content.to_string();
    }

    let sentences = split_sentences(content);
    if sentences.is_empty() {
        return content.to_string();
    }
    if sentences.len() <= SHORT_DOCUMENT_SENTENCES {
        return join_sentences(sentences.iter().map(|s| s.text));
    }

    let mut selection = Selection::default();
    selection.include(&sentences[0]);

    let mut last_paragraph = None;
    for sentence in &sentences {
        if last_paragraph != Some(sentence.paragraph) {
            last_paragraph = Some(sentence.paragraph);
            selection.include(sentence);
        }
    }

    let keywords = extract_keywords(content);
    let mut scored: Vec<(&Sentence<'_>, f64)> = Vec::new();
    let mut seen = HashSet::new();
    for sentence in &sentences {
        if selection.contains_text(sentence.text) || !seen.insert(sentence.text) {
            continue;
        }
        scored.push((sentence, score_sentence(sentence.text, &keywords)));
    }

    // Stable sort: equal scores stay in document order.
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));
    for (sentence, _) in scored.into_iter().take(SCORED_SENTENCES) {
        selection.include(sentence);
    }

    if let Some(last) = sentences.last() {
        selection.include(last);
    }

    join_sentences(selection.indices.iter().map(|&i| sentences[i].text))
}

/// `min(chars / 20, 3) + 2 × (keywords contained in the sentence)`.
fn score_sentence(sentence: &str, keywords: &[String]) -> f64 {
    let length_score = (char_len(sentence) as f64 / LENGTH_SCORE_DIVISOR).min(LENGTH_SCORE_CAP);
    let lowered = sentence.to_lowercase();
    let hits = keywords
        .iter()
        .filter(|k| contains_lowercase(&lowered, &k.to_lowercase()))
        .count();
    length_score + KEYWORD_HIT_SCORE * hits as f64
}

fn join_sentences<'a>(sentences: impl Iterator<Item = &'a str>) -> String {
    let mut out = sentences.collect::<Vec<_>>().join(". ");
    out.push('.');
    out
}

/// Chosen sentences, de-duplicated by text, iterated in document order.
#[derive(Default)]
struct Selection<'a> {
    indices: BTreeSet<usize>,
    texts: HashSet<&'a str>,
}

impl<'a> Selection<'a> {
    fn include(&mut self, sentence: &Sentence<'a>) {
        if self.texts.insert(sentence.text) {
            self.indices.insert(sentence.index);
        }
    }

    fn contains_text(&self, text: &str) -> bool {
        self.texts.contains(text)
    }
}
