//! English function words excluded from keyword counting.
//!
//! The list is fixed at compile time and materialized into a set on first
//! use. Entries are lowercase; callers lowercase tokens before lookup.

use std::collections::HashSet;
use std::sync::LazyLock;

/// The raw stopword list.
pub const STOPWORDS: &[&str] = &[
    "about", "above", "across", "after", "again", "against", "all", "almost", "along", "also",
    "although", "always", "among", "and", "another", "any", "anyone", "anything", "are",
    "around", "because", "been", "before", "being", "below", "between", "both", "but", "can",
    "cannot", "could", "did", "does", "doing", "done", "down", "during", "each", "either",
    "else", "enough", "even", "ever", "every", "few", "for", "from", "further", "had", "has",
    "have", "having", "her", "here", "hers", "herself", "him", "himself", "his", "how",
    "however", "into", "its", "itself", "just", "less", "like", "many", "may", "might", "more",
    "most", "much", "must", "myself", "neither", "never", "nor", "not", "now", "off", "often",
    "once", "only", "onto", "other", "others", "otherwise", "our", "ours", "ourselves", "out",
    "over", "own", "perhaps", "quite", "rather", "same", "several", "shall", "she", "should",
    "since", "some", "something", "still", "such", "than", "that", "the", "their", "theirs",
    "them", "themselves", "then", "there", "therefore", "these", "they", "this", "those",
    "though", "through", "thus", "together", "too", "toward", "towards", "under", "unless",
    "until", "upon", "very", "was", "were", "what", "whatever", "when", "whenever", "where",
    "whether", "which", "while", "who", "whom", "whose", "why", "will", "with", "within",
    "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

static STOPWORD_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| STOPWORDS.iter().copied().collect());

/// Returns `true` if `word` (already lowercase) is a stopword.
pub fn is_stopword(word: &str) -> bool {
    STOPWORD_SET.contains(word)
}
