//! The `quizmill convert` command.

use std::path::PathBuf;

use anyhow::{anyhow, Result};

use quizmill_core::transform::{apply_mode, Mode};
use quizmill_report::json::{render_quiz_json, write_quiz_json};

pub fn execute(input: PathBuf, mode: Option<String>, output: Option<PathBuf>) -> Result<()> {
    let mut quiz = super::load_quiz(&input)?;

    if let Some(mode) = mode {
        let mode: Mode = mode.parse().map_err(|e: String| anyhow!(e))?;
        quiz = apply_mode(quiz, mode, &mut rand::thread_rng());
    }

    match output {
        Some(path) => {
            write_quiz_json(&quiz, &path)?;
            println!(
                "Wrote {} ({} questions)",
                path.display(),
                quiz.questions.len()
            );
        }
        None => println!("{}", render_quiz_json(&quiz)?),
    }

    Ok(())
}
