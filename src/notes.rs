//! Note files on disk.
//!
//! Walks the configured notes directory, applies include/exclude globs,
//! and loads each matching file as a [`Note`]. Results are sorted by their
//! path relative to the root so reports are stable between runs.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::Serialize;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::NotesConfig;

/// A single study note loaded from disk.
#[derive(Debug, Clone, Serialize)]
pub struct Note {
    /// Path relative to the notes root, with `/` separators.
    pub id: String,
    /// File name without extension.
    pub title: String,
    pub path: PathBuf,
    pub updated_at: DateTime<Utc>,
    #[serde(skip)]
    pub body: String,
}

pub fn scan_notes(config: &NotesConfig) -> Result<Vec<Note>> {
    let root = &config.root;
    if !root.is_dir() {
        bail!("Notes root does not exist: {}", root.display());
    }

    let include_set = build_globset(&config.include_globs)?;

    let mut default_excludes = vec![
        "**/.git/**".to_string(),
        "**/target/**".to_string(),
        "**/node_modules/**".to_string(),
    ];
    default_excludes.extend(config.exclude_globs.iter().cloned());
    let exclude_set = build_globset(&default_excludes)?;

    let mut notes = Vec::new();

    for entry in WalkDir::new(root).follow_links(config.follow_symlinks) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(root).unwrap_or(path);
        let rel_str = relative.to_string_lossy().replace('\\', "/");

        if exclude_set.is_match(&rel_str) || !include_set.is_match(&rel_str) {
            continue;
        }

        match load_note(path, rel_str) {
            Ok(note) => notes.push(note),
            Err(e) => tracing::warn!(path = %path.display(), error = %e, "skipping unreadable note"),
        }
    }

    notes.sort_by(|a, b| a.id.cmp(&b.id));
    tracing::debug!(count = notes.len(), root = %root.display(), "scanned notes");
    Ok(notes)
}

/// Read note content from a file, or from stdin when `path` is `-`.
pub fn read_note_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read note from stdin");
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read note: {}", path.display()))
}

fn load_note(path: &Path, id: String) -> Result<Note> {
    let body = std::fs::read_to_string(path)?;
    let modified = std::fs::metadata(path)?
        .modified()
        .unwrap_or(std::time::SystemTime::UNIX_EPOCH);

    let title = path
        .file_stem()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    Ok(Note {
        id,
        title,
        path: path.to_path_buf(),
        updated_at: DateTime::<Utc>::from(modified),
        body,
    })
}

fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(Glob::new(pattern).with_context(|| format!("Invalid glob: {}", pattern))?);
    }
    Ok(builder.build()?)
}
