use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use tempfile::TempDir;

const PHOTOSYNTHESIS: &str = "Photosynthesis converts light into energy. \
    Plants use chlorophyll to capture light. This process occurs in the chloroplast. \
    Energy is stored as ATP. Oxygen is released as a byproduct. \
    This process is essential for life on Earth.";

fn notefi_binary() -> PathBuf {
    let mut path = std::env::current_exe().unwrap();
    path.pop(); // remove test binary name
    path.pop(); // remove deps/
    path.push("notefi");
    path
}

fn setup_test_env() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path().to_path_buf();

    let config_dir = root.join("config");
    fs::create_dir_all(&config_dir).unwrap();

    let notes_dir = root.join("notes");
    fs::create_dir_all(notes_dir.join("science")).unwrap();
    fs::write(notes_dir.join("science/photosynthesis.md"), PHOTOSYNTHESIS).unwrap();
    fs::write(
        notes_dir.join("history.txt"),
        "The printing press spread knowledge across Europe. Printing lowered the cost of books.",
    )
    .unwrap();
    fs::write(notes_dir.join("diagram.svg"), "<svg/>").unwrap();

    // The provider is disabled, so nothing leaves the process.
    let config_content = format!(
        r#"[ai]
provider = "disabled"

[notes]
root = "{}/notes"
include_globs = ["**/*.md", "**/*.txt"]
"#,
        root.display()
    );

    let config_path = config_dir.join("notefi.toml");
    fs::write(&config_path, config_content).unwrap();

    (tmp, config_path)
}

fn run_notefi(config_path: &Path, args: &[&str]) -> (String, String, bool) {
    let binary = notefi_binary();
    let output = Command::new(&binary)
        .arg("--config")
        .arg(config_path.to_str().unwrap())
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run notefi binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

fn note_path(config_path: &Path, rel: &str) -> String {
    config_path
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("notes")
        .join(rel)
        .to_string_lossy()
        .to_string()
}

#[test]
fn test_summarize_short_note_unchanged() {
    let (_tmp, config_path) = setup_test_env();
    let note = note_path(&config_path, "history.txt");

    let (stdout, stderr, success) = run_notefi(&config_path, &["summarize", &note]);
    assert!(success, "summarize failed: {}", stderr);
    assert_eq!(
        stdout.trim_end(),
        "The printing press spread knowledge across Europe. Printing lowered the cost of books."
    );
}

#[test]
fn test_keywords_json() {
    let (_tmp, config_path) = setup_test_env();
    let note = note_path(&config_path, "science/photosynthesis.md");

    let (stdout, stderr, success) = run_notefi(&config_path, &["keywords", &note, "--json"]);
    assert!(success, "keywords failed: {}", stderr);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["origin"], "fallback");
    let keywords: Vec<&str> = json["value"]
        .as_array()
        .unwrap()
        .iter()
        .map(|k| k.as_str().unwrap())
        .collect();
    assert_eq!(keywords.len(), 10);
    assert_eq!(&keywords[..3], &["light", "energy", "process"]);
    assert!(keywords.contains(&"chlorophyll"));
}

#[test]
fn test_keywords_human_output() {
    let (_tmp, config_path) = setup_test_env();
    let note = note_path(&config_path, "science/photosynthesis.md");

    let (stdout, _, success) = run_notefi(&config_path, &["keywords", &note]);
    assert!(success);
    assert!(stdout.starts_with(" 1. light\n"));
}

#[test]
fn test_quiz_json_seeded_is_reproducible() {
    let (_tmp, config_path) = setup_test_env();
    let note = note_path(&config_path, "science/photosynthesis.md");

    let args = ["quiz", note.as_str(), "--seed", "42", "--json"];
    let (first, stderr, success) = run_notefi(&config_path, &args);
    assert!(success, "quiz failed: {}", stderr);
    let (second, _, _) = run_notefi(&config_path, &args);
    assert_eq!(first, second);

    let json: serde_json::Value = serde_json::from_str(&first).unwrap();
    let quiz = json["value"].as_array().unwrap();
    assert!((3..=5).contains(&quiz.len()));
    for q in quiz {
        let options = q["options"].as_array().unwrap();
        assert_eq!(options.len(), 4);
        let idx = q["correctAnswer"].as_u64().unwrap() as usize;
        assert!(idx < 4);
    }
}

#[test]
fn test_quiz_human_output() {
    let (_tmp, config_path) = setup_test_env();
    let note = note_path(&config_path, "science/photosynthesis.md");

    let (stdout, _, success) = run_notefi(&config_path, &["quiz", &note, "--seed", "1"]);
    assert!(success);
    assert!(stdout.contains("Q1. According to the notes, what is mentioned about \"light\"?"));
    assert!(stdout.contains("   A) "));
    assert!(stdout.contains("   Answer: "));
}

#[test]
fn test_summarize_reads_stdin() {
    let (_tmp, config_path) = setup_test_env();

    let mut child = Command::new(notefi_binary())
        .arg("--config")
        .arg(&config_path)
        .args(["summarize", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"   \n")
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        "Please add some content to your note before generating a summary."
    );
}

#[test]
fn test_report_json() {
    let (_tmp, config_path) = setup_test_env();

    let (stdout, stderr, success) = run_notefi(&config_path, &["report", "--json", "--seed", "3"]);
    assert!(success, "report failed: {}", stderr);

    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let notes = json["notes"].as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["id"], "history.txt");
    assert_eq!(notes[1]["id"], "science/photosynthesis.md");
    assert_eq!(notes[1]["title"], "photosynthesis");
    assert_eq!(notes[1]["origin"], "fallback");
    assert!(json["generated_at"].is_string());
}

#[test]
fn test_report_root_override() {
    let (tmp, config_path) = setup_test_env();
    let other = tmp.path().join("other");
    fs::create_dir_all(&other).unwrap();

    let (stdout, _, success) = run_notefi(
        &config_path,
        &["report", "--root", other.to_str().unwrap()],
    );
    assert!(success);
    assert!(stdout.contains("No notes found."));
}

#[test]
fn test_missing_config_uses_defaults() {
    let tmp = TempDir::new().unwrap();
    let note = tmp.path().join("note.md");
    fs::write(&note, "Tiny note.").unwrap();

    let (stdout, stderr, success) = run_notefi(
        &tmp.path().join("absent.toml"),
        &["summarize", note.to_str().unwrap()],
    );
    assert!(success, "summarize failed: {}", stderr);
    assert_eq!(stdout.trim_end(), "Tiny note.");
}

#[test]
fn test_invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config_path = tmp.path().join("bad.toml");
    fs::write(&config_path, "[ai]\nprovider = \"nope\"\n").unwrap();
    let note = tmp.path().join("note.md");
    fs::write(&note, "Tiny note.").unwrap();

    let (_, stderr, success) = run_notefi(&config_path, &["summarize", note.to_str().unwrap()]);
    assert!(!success);
    assert!(stderr.contains("Unknown ai provider"));
}

#[test]
fn test_missing_note_fails() {
    let (_tmp, config_path) = setup_test_env();
    let (_, stderr, success) = run_notefi(&config_path, &["summarize", "/no/such/note.md"]);
    assert!(!success);
    assert!(stderr.contains("Failed to read note"));
}
