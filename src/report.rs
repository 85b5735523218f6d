//! Study report over a directory of notes.

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use notefi_core::QuizQuestion;

use crate::assistant::{NoteAssistant, Origin};
use crate::config::NotesConfig;
use crate::notes::{scan_notes, Note};

#[derive(Debug, Serialize)]
pub struct StudyReport {
    pub generated_at: DateTime<Utc>,
    pub notes: Vec<NoteReport>,
}

#[derive(Debug, Serialize)]
pub struct NoteReport {
    #[serde(flatten)]
    pub note: Note,
    pub summary: String,
    pub keywords: Vec<String>,
    pub quiz: Vec<QuizQuestion>,
    /// `remote` only if all three answers came from the remote backend.
    pub origin: Origin,
}

pub async fn build_report(assistant: &NoteAssistant, config: &NotesConfig) -> Result<StudyReport> {
    let mut notes = Vec::new();
    for note in scan_notes(config)? {
        notes.push(report_note(assistant, note).await);
    }
    Ok(StudyReport {
        generated_at: Utc::now(),
        notes,
    })
}

pub async fn report_note(assistant: &NoteAssistant, note: Note) -> NoteReport {
    tracing::debug!(note = %note.id, "building report entry");
    let summary = assistant.summarize_note(&note.body).await;
    let keywords = assistant.extract_keywords(&note.body).await;
    let quiz = assistant.generate_quiz(&note.body).await;

    let origin = if [summary.origin, keywords.origin, quiz.origin]
        .iter()
        .all(|o| *o == Origin::Remote)
    {
        Origin::Remote
    } else {
        Origin::Fallback
    };

    NoteReport {
        note,
        summary: summary.value,
        keywords: keywords.value,
        quiz: quiz.value,
        origin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_offline_report() {
        let tmp = TempDir::new().unwrap();
        fs::write(
            tmp.path().join("physics.md"),
            "Gravity pulls masses together. Orbits follow from gravity and velocity.",
        )
        .unwrap();
        fs::write(tmp.path().join("empty.txt"), "   ").unwrap();

        let config = NotesConfig {
            root: tmp.path().to_path_buf(),
            ..NotesConfig::default()
        };
        let report = build_report(&NoteAssistant::offline().with_seed(Some(1)), &config)
            .await
            .unwrap();

        assert_eq!(report.notes.len(), 2);
        let empty = &report.notes[0];
        assert_eq!(empty.note.id, "empty.txt");
        assert!(empty.quiz.is_empty());
        assert!(empty.keywords.is_empty());

        let physics = &report.notes[1];
        assert_eq!(physics.keywords[0], "gravity");
        assert_eq!(physics.quiz.len(), 3);
        assert_eq!(physics.origin, Origin::Fallback);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["notes"][1]["id"], "physics.md");
        assert!(json["notes"][1].get("body").is_none());
    }
}
