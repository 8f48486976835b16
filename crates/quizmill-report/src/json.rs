//! Canonical JSON export of a quiz.
//!
//! Pretty-printed with 2-space indentation; key order is fixed by the struct
//! field order (`title`, `questions`; `id`, `text`, `options`, `correct`).

use std::path::Path;

use anyhow::{Context, Result};

use quizmill_core::model::Quiz;

/// Serialize a quiz to its canonical JSON string.
pub fn render_quiz_json(quiz: &Quiz) -> Result<String> {
    serde_json::to_string_pretty(quiz).context("failed to serialize quiz")
}

/// Serialize and write a quiz JSON file.
pub fn write_quiz_json(quiz: &Quiz, path: &Path) -> Result<()> {
    let json = render_quiz_json(quiz)?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, json)
        .with_context(|| format!("failed to write quiz JSON to {}", path.display()))?;
    Ok(())
}
