//! # Notefi Core
//!
//! Offline text analysis for study notes: extractive summaries, keyword
//! ranking, and multiple-choice quiz generation.
//!
//! This crate performs no I/O and holds no mutable global state. Every
//! entry point is a pure function of its input text, except for the option
//! shuffle in quiz generation, which draws from an injectable
//! [`shuffle::ShuffleSource`].
//!
//! ## Pipeline
//!
//! ```text
//! content ──▶ text (paragraphs, sentences) ──▶ keywords ──┬──▶ summary
//!                                                         └──▶ quiz
//! ```
//!
//! ## Example
//!
//! ```rust
//! use notefi_core::{extract_keywords, generate_quiz, summarize};
//!
//! let notes = "Mitochondria produce energy. Energy is stored as ATP.";
//! assert_eq!(summarize(notes), notes);
//! assert_eq!(extract_keywords(notes)[0], "energy");
//! assert_eq!(generate_quiz(notes).len(), 3);
//! ```

pub mod keywords;
pub mod models;
pub mod quiz;
pub mod shuffle;
pub mod stopwords;
pub mod summary;
pub mod text;

pub use keywords::{extract_keywords, rank_keywords};
pub use models::{Keyword, QuizQuestion, Sentence};
pub use quiz::{generate_quiz, generate_quiz_with};
pub use shuffle::{RngShuffle, SequenceShuffle, ShuffleSource};
pub use summary::summarize;
