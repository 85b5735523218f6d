//! Frequency-ranked keyword extraction.
//!
//! # Algorithm
//!
//! 1. Lowercase the content.
//! 2. Split into tokens on runs of non-word characters (anything other than
//!    an ASCII letter, digit, or `_`).
//! 3. Drop tokens shorter than [`MIN_KEYWORD_CHARS`] and stopwords.
//! 4. Count occurrences, remembering first-occurrence order.
//! 5. Stable-sort by count, descending, so equal counts keep first-occurrence
//!    order.
//! 6. Keep the top [`MAX_KEYWORDS`].

use std::collections::HashMap;

use crate::models::Keyword;
use crate::stopwords::is_stopword;

/// Maximum number of keywords returned.
pub const MAX_KEYWORDS: usize = 10;

/// Tokens shorter than this are never keywords.
pub const MIN_KEYWORD_CHARS: usize = 4;

/// Rank candidate terms by frequency, returning at most [`MAX_KEYWORDS`].
pub fn rank_keywords(content: &str) -> Vec<Keyword> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let lowered = content.to_lowercase();
    let mut ranked: Vec<Keyword> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for token in lowered.split(|c: char| !is_word_char(c)) {
        if token.len() < MIN_KEYWORD_CHARS || is_stopword(token) {
            continue;
        }
        match positions.get(token) {
            Some(&pos) => ranked[pos].count += 1,
            None => {
                positions.insert(token, ranked.len());
                ranked.push(Keyword {
                    term: token.to_string(),
                    count: 1,
                });
            }
        }
    }

    // `sort_by` is stable: ties stay in first-occurrence order.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(MAX_KEYWORDS);
    ranked
}

/// The terms of [`rank_keywords`], most frequent first.
pub fn extract_keywords(content: &str) -> Vec<String> {
    rank_keywords(content).into_iter().map(|k| k.term).collect()
}

fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
