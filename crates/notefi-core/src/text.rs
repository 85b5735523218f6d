//! Paragraph and sentence splitting.
//!
//! Paragraphs are separated by blank lines (a line that is empty or holds
//! only whitespace). Sentences end at any run of `.`, `!` or `?` and never
//! cross a paragraph boundary. Both are trimmed and empty pieces dropped.

use crate::models::Sentence;

/// Split `content` into trimmed, non-empty paragraphs.
///
/// ```rust
/// use notefi_core::text::split_paragraphs;
///
/// let paras = split_paragraphs("First line\nstill first.\n  \nSecond.");
/// assert_eq!(paras, vec!["First line\nstill first.", "Second."]);
/// ```
pub fn split_paragraphs(content: &str) -> Vec<&str> {
    let mut paragraphs = Vec::new();
    let mut start: Option<usize> = None;
    let mut end = 0;
    let mut offset = 0;

    for line in content.split_inclusive('\n') {
        let line_start = offset;
        offset += line.len();

        if line.trim().is_empty() {
            if let Some(s) = start.take() {
                paragraphs.push(content[s..end].trim());
            }
        } else {
            start.get_or_insert(line_start);
            end = offset;
        }
    }

    if let Some(s) = start {
        paragraphs.push(content[s..end].trim());
    }

    paragraphs
}

/// Split `content` into sentences numbered in document order.
///
/// A paragraph without terminal punctuation is a single sentence, so text
/// with no `.`, `!` or `?` and no blank lines comes back whole (trimmed).
pub fn split_sentences(content: &str) -> Vec<Sentence<'_>> {
    let mut sentences = Vec::new();
    for (paragraph, text) in split_paragraphs(content).into_iter().enumerate() {
        for piece in text.split(is_terminal) {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            sentences.push(Sentence {
                index: sentences.len(),
                paragraph,
                text: piece,
            });
        }
    }
    sentences
}

fn is_terminal(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

/// Length in Unicode scalar values.
pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// Case-insensitive substring test. `needle` is expected in lowercase.
pub(crate) fn contains_lowercase(haystack_lower: &str, needle: &str) -> bool {
    !needle.is_empty() && haystack_lower.contains(needle)
}

/// Replace every ASCII-case-insensitive occurrence of `needle` with
/// `replacement`. Returns the input unchanged when there is no match.
pub(crate) fn replace_ignore_ascii_case(haystack: &str, needle: &str, replacement: &str) -> String {
    let hay = haystack.as_bytes();
    let pat = needle.as_bytes();
    if pat.is_empty() || pat.len() > hay.len() {
        return haystack.to_string();
    }

    let mut out = String::with_capacity(haystack.len());
    let mut last = 0;
    let mut i = 0;
    while i + pat.len() <= hay.len() {
        if hay[i..i + pat.len()].eq_ignore_ascii_case(pat) {
            out.push_str(&haystack[last..i]);
            out.push_str(replacement);
            i += pat.len();
            last = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&haystack[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<'a>(sentences: &[Sentence<'a>]) -> Vec<&'a str> {
        sentences.iter().map(|s| s.text).collect()
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let text = "Alpha one.\nAlpha two.\n\nBeta.\n \t \nGamma.";
        assert_eq!(
            split_paragraphs(text),
            vec!["Alpha one.\nAlpha two.", "Beta.", "Gamma."]
        );
    }

    #[test]
    fn test_paragraphs_ignore_leading_and_trailing_blank_lines() {
        let text = "\n\n  Only paragraph.  \n\n\n";
        assert_eq!(split_paragraphs(text), vec!["Only paragraph."]);
    }

    #[test]
    fn test_paragraphs_handle_crlf() {
        let text = "One.\r\n\r\nTwo.";
        assert_eq!(split_paragraphs(text), vec!["One.", "Two."]);
    }

    #[test]
    fn test_empty_content() {
        assert!(split_paragraphs("").is_empty());
        assert!(split_sentences("   \n\n ").is_empty());
    }

    #[test]
    fn test_sentences_split_on_terminal_runs() {
        let sentences = split_sentences("Wait... what?! Yes. ");
        assert_eq!(texts(&sentences), vec!["Wait", "what", "Yes"]);
    }

    #[test]
    fn test_sentences_without_punctuation() {
        let sentences = split_sentences("  no punctuation at all  ");
        assert_eq!(texts(&sentences), vec!["no punctuation at all"]);
    }

    #[test]
    fn test_sentences_do_not_cross_paragraphs() {
        let sentences = split_sentences("Heading without stop\n\nBody sentence. Another one.");
        assert_eq!(
            texts(&sentences),
            vec!["Heading without stop", "Body sentence", "Another one"]
        );
        assert_eq!(sentences[0].paragraph, 0);
        assert_eq!(sentences[1].paragraph, 1);
        assert_eq!(sentences[2].paragraph, 1);
    }

    #[test]
    fn test_sentence_indices_are_contiguous() {
        let sentences = split_sentences("A. B.\n\nC! D?");
        for (i, s) in sentences.iter().enumerate() {
            assert_eq!(s.index, i);
        }
    }

    #[test]
    fn test_replace_ignore_ascii_case() {
        assert_eq!(
            replace_ignore_ascii_case("Light and LIGHT and lightning", "light", "energy"),
            "energy and energy and energyning"
        );
        assert_eq!(replace_ignore_ascii_case("no match", "light", "x"), "no match");
        assert_eq!(replace_ignore_ascii_case("ab", "", "x"), "ab");
    }

    #[test]
    fn test_replace_keeps_multibyte_text() {
        assert_eq!(
            replace_ignore_ascii_case("café LIGHT naïve", "light", "dark"),
            "café dark naïve"
        );
    }

    #[test]
    fn test_char_len_counts_scalars() {
        assert_eq!(char_len("naïve"), 5);
    }
}
