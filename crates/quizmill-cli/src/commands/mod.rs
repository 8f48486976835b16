pub mod convert;
pub mod score;
pub mod validate;

use std::path::Path;

use anyhow::{Context, Result};
use quizmill_core::model::Quiz;

/// Read a quiz file and parse it in whichever format it is in.
pub fn load_quiz(path: &Path) -> Result<Quiz> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let quiz = quizmill_core::dispatch::parse_any(filename, &text, &mut rand::thread_rng())
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Ok(quiz)
}
