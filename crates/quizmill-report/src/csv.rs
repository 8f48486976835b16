//! CSV score report.
//!
//! One row per question with the user's answer, the correct answer, and a
//! verdict, followed by a blank row and a totals row. Fields are quoted only
//! when they contain a comma, a double quote, or a newline; embedded
//! newlines are collapsed to a single space before the quoting decision.

use std::path::Path;

use anyhow::{Context, Result};

use quizmill_core::model::ScoreResult;

const HEADER: [&str; 5] = ["#", "Question", "Your answer", "Correct answer", "Correct?"];
const NO_ANSWER: &str = "no answer";
const TOTAL_LABEL: &str = "Total";

/// Render a [`ScoreResult`] as the CSV report string.
pub fn render_csv_report(result: &ScoreResult) -> String {
    let mut rows: Vec<Vec<String>> = Vec::with_capacity(result.details.len() + 3);
    rows.push(HEADER.iter().map(|h| h.to_string()).collect());

    for (idx, outcome) in result.details.iter().enumerate() {
        let your_answer = if outcome.picked.is_empty() {
            NO_ANSWER.to_string()
        } else {
            outcome.picked_texts().join(" | ")
        };
        let correct_answer = outcome.correct_texts().join(" | ");
        rows.push(vec![
            (idx + 1).to_string(),
            collapse_newlines(&outcome.question.text),
            collapse_newlines(&your_answer),
            collapse_newlines(&correct_answer),
            if outcome.is_correct { "Yes" } else { "No" }.to_string(),
        ]);
    }

    rows.push(Vec::new());
    rows.push(vec![
        TOTAL_LABEL.to_string(),
        format!("{}/{}", result.correct_count, result.total),
    ]);

    rows.iter()
        .map(|row| {
            row.iter()
                .map(|cell| quote_field(cell))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render and write the CSV report to a file.
pub fn write_csv_report(result: &ScoreResult, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, render_csv_report(result))
        .with_context(|| format!("failed to write CSV report to {}", path.display()))?;
    Ok(())
}

/// Wrap a field in quotes iff it contains a comma, quote, or newline,
/// doubling internal quotes.
fn quote_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn collapse_newlines(s: &str) -> String {
    s.replace("\r\n", " ").replace('\n', " ")
}
