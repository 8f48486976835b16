//! The `quizmill score` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use quizmill_core::model::AnswerState;
use quizmill_core::score::score;
use quizmill_report::csv::write_csv_report;
use quizmill_report::json::write_quiz_json;

pub fn execute(
    quiz_path: PathBuf,
    answers_path: PathBuf,
    report: Option<PathBuf>,
    json: Option<PathBuf>,
) -> Result<()> {
    let quiz = super::load_quiz(&quiz_path)?;

    let answers_text = std::fs::read_to_string(&answers_path)
        .with_context(|| format!("failed to read {}", answers_path.display()))?;
    let answers: AnswerState = serde_json::from_str(&answers_text)
        .with_context(|| format!("failed to parse answers from {}", answers_path.display()))?;

    let result = score(&quiz, &answers);

    let mut table = Table::new();
    table.set_header(vec!["#", "Question", "Your answer", "Correct answer", "Correct?"]);
    for (idx, outcome) in result.details.iter().enumerate() {
        let your_answer = if outcome.picked.is_empty() {
            "no answer".to_string()
        } else {
            outcome.picked_texts().join(" | ")
        };
        table.add_row(vec![
            (idx + 1).to_string(),
            outcome.question.text.clone(),
            your_answer,
            outcome.correct_texts().join(" | "),
            if outcome.is_correct { "Yes" } else { "No" }.to_string(),
        ]);
    }

    println!("{}", quiz.title);
    println!("{table}");
    println!(
        "Correct: {}/{} ({}%)",
        result.correct_count,
        result.total,
        result.percent()
    );
    println!(
        "Incorrect: {}/{} ({}%)",
        result.incorrect_count(),
        result.total,
        result.incorrect_percent()
    );

    if let Some(path) = report {
        write_csv_report(&result, &path)?;
        println!("Wrote {}", path.display());
    }
    if let Some(path) = json {
        write_quiz_json(&quiz, &path)?;
        println!("Wrote {}", path.display());
    }

    Ok(())
}
