//! # Notefi CLI (`notefi`)
//!
//! Summaries, keywords, and quizzes for study notes from the command line.
//!
//! ## Usage
//!
//! ```bash
//! notefi --config ./config/notefi.toml <command>
//! ```
//!
//! ## Commands
//!
//! | Command | Description |
//! |---------|-------------|
//! | `notefi summarize <file>` | Summarize a note (`-` reads stdin) |
//! | `notefi keywords <file>` | List the note's key terms |
//! | `notefi quiz <file>` | Generate multiple-choice questions |
//! | `notefi report` | Summaries, keywords, and quizzes for every note under a directory |
//!
//! Global flags: `--offline` skips the remote backend, `--json` prints
//! machine-readable output. Logs go to stderr and honor `RUST_LOG`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use notefi::assistant::{Assisted, NoteAssistant};
use notefi::backend::create_backend;
use notefi::config::{self, Config};
use notefi::notes::read_note_input;
use notefi::report::{build_report, StudyReport};
use notefi::QuizQuestion;

/// Notefi: summaries, keywords, and quizzes for study notes.
///
/// Uses a remote model when `[ai]` is configured and a valid API key is
/// present; otherwise everything is computed locally.
#[derive(Parser)]
#[command(name = "notefi", version)]
struct Cli {
    /// Path to configuration file (TOML). Optional; defaults apply if absent.
    #[arg(long, global = true, default_value = "./config/notefi.toml")]
    config: PathBuf,

    /// Never contact the remote backend.
    #[arg(long, global = true)]
    offline: bool,

    /// Print JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize a note.
    Summarize {
        /// Note file, or `-` for stdin.
        path: PathBuf,
    },

    /// Extract the note's keywords, most important first.
    Keywords {
        /// Note file, or `-` for stdin.
        path: PathBuf,
    },

    /// Generate a multiple-choice quiz from a note.
    Quiz {
        /// Note file, or `-` for stdin.
        path: PathBuf,

        /// Seed for option order in offline quizzes.
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Build a study report for every note under the notes root.
    Report {
        /// Override `[notes].root` from the config.
        #[arg(long)]
        root: Option<PathBuf>,

        /// Seed for option order in offline quizzes.
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let mut cfg = load_or_default(&cli.config)?;

    let backend = if cli.offline {
        None
    } else {
        create_backend(&cfg.ai)?
    };
    let assistant = NoteAssistant::new(backend);
    tracing::debug!(remote = assistant.is_remote(), "assistant ready");

    match cli.command {
        Commands::Summarize { path } => {
            let content = read_note_input(&path)?;
            let summary = assistant.summarize_note(&content).await;
            print_result(cli.json, &summary, |s| println!("{}", s))?;
        }
        Commands::Keywords { path } => {
            let content = read_note_input(&path)?;
            let keywords = assistant.extract_keywords(&content).await;
            print_result(cli.json, &keywords, |kws| {
                if kws.is_empty() {
                    println!("No keywords found.");
                }
                for (i, k) in kws.iter().enumerate() {
                    println!("{:>2}. {}", i + 1, k);
                }
            })?;
        }
        Commands::Quiz { path, seed } => {
            let content = read_note_input(&path)?;
            let assistant = assistant.with_seed(seed);
            let quiz = assistant.generate_quiz(&content).await;
            print_result(cli.json, &quiz, |q| print_quiz(q))?;
        }
        Commands::Report { root, seed } => {
            if let Some(root) = root {
                cfg.notes.root = root;
            }
            let assistant = assistant.with_seed(seed);
            let report = build_report(&assistant, &cfg.notes).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
    }

    Ok(())
}

fn load_or_default(path: &Path) -> Result<Config> {
    if path.exists() {
        config::load_config(path)
    } else {
        tracing::debug!(path = %path.display(), "config file not found; using defaults");
        Ok(Config::minimal())
    }
}

fn print_result<T: serde::Serialize>(
    json: bool,
    result: &Assisted<T>,
    human: impl FnOnce(&T),
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        human(&result.value);
    }
    Ok(())
}

const OPTION_LABELS: [char; 4] = ['A', 'B', 'C', 'D'];

fn print_quiz(quiz: &[QuizQuestion]) {
    if quiz.is_empty() {
        println!("No questions could be generated.");
        return;
    }
    for (i, q) in quiz.iter().enumerate() {
        println!("Q{}. {}", i + 1, q.question);
        for (label, option) in OPTION_LABELS.iter().zip(&q.options) {
            println!("   {}) {}", label, option);
        }
        if let Some(label) = OPTION_LABELS.get(q.correct_answer_index) {
            println!("   Answer: {}", label);
        }
        if let Some(explanation) = &q.explanation {
            println!("   {}", explanation);
        }
        println!();
    }
}

fn print_report(report: &StudyReport) {
    if report.notes.is_empty() {
        println!("No notes found.");
        return;
    }
    for entry in &report.notes {
        println!("## {}", entry.note.id);
        println!("{}", entry.summary);
        println!("Keywords: {}", entry.keywords.join(", "));
        println!("Questions: {}", entry.quiz.len());
        println!();
    }
}
