//! # Notefi
//!
//! A study-note assistant that produces summaries, keyword lists, and
//! multiple-choice quizzes. A remote model is used when one is configured
//! and reachable; otherwise the offline engine in [`notefi_core`] answers.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌────────────────┐   ┌──────────────────┐
//! │ Notes (file, │──▶│ NoteAssistant  │──▶│ Remote AI backend │
//! │ dir, stdin)  │   │ fallback policy│   └────────┬─────────┘
//! └──────────────┘   └───────┬────────┘            │ error / bad reply
//!                            ▼                     ▼
//!                     ┌───────────────────────────────┐
//!                     │ notefi-core (offline engine)  │
//!                     └───────────────────────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! notefi summarize lecture.md
//! notefi keywords lecture.md --json
//! notefi quiz lecture.md --seed 7
//! notefi report --root ./notes
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing and validation |
//! | [`backend`] | Remote AI backend trait and OpenAI implementation |
//! | [`assistant`] | Remote-first requests with offline fallback |
//! | [`notes`] | Loading notes from disk |
//! | [`report`] | Study report across a notes directory |

pub mod assistant;
pub mod backend;
pub mod config;
pub mod notes;
pub mod report;

pub use notefi_core::QuizQuestion;
