//! CSV quiz parsing.
//!
//! The expected shape is a header row with `question`, `options`, `correct`
//! columns (any order, case-insensitive, extra columns ignored). The
//! `options` cell is `;`-separated; the `correct` cell is `;`-separated
//! 1-based option numbers.

use crate::error::FormatError;
use crate::model::{Question, Quiz};

/// Title given to quizzes loaded from CSV.
const CSV_QUIZ_TITLE: &str = "CSV quiz";

/// Split one CSV line into raw fields.
///
/// Honors quoted fields and `""` escapes inside quotes. Never fails:
/// malformed quoting degrades into different field boundaries. The final
/// field is always emitted, even when empty.
pub fn split_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

/// Parse CSV text into a [`Quiz`].
///
/// Individual malformed rows and out-of-range `correct` tokens are dropped
/// silently; the parse only fails when the input is empty, the header is
/// incomplete, or no row survives.
pub fn parse_csv(text: &str) -> Result<Quiz, FormatError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.is_empty()).collect();
    if lines.is_empty() {
        return Err(FormatError::EmptyCsv);
    }

    let header: Vec<String> = split_line(lines[0])
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();
    let column = |name: &str| header.iter().position(|h| h == name);
    let (q_col, o_col, c_col) = match (column("question"), column("options"), column("correct")) {
        (Some(q), Some(o), Some(c)) => (q, o, c),
        _ => return Err(FormatError::MissingCsvColumns),
    };

    let mut questions = Vec::new();
    for (line_no, line) in lines.iter().enumerate().skip(1) {
        let fields = split_line(line);
        if fields.iter().all(|f| f.trim().is_empty()) {
            continue;
        }
        let cell = |idx: usize| fields.get(idx).map(String::as_str).unwrap_or("");

        let text = cell(q_col);
        let options: Vec<String> = cell(o_col)
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from)
            .collect();
        let correct: Vec<usize> = cell(c_col)
            .split(';')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .filter_map(|s| s.parse::<usize>().ok())
            .filter_map(|n| n.checked_sub(1))
            .filter(|&idx| idx < options.len())
            .collect();

        if text.is_empty() || options.is_empty() || correct.is_empty() {
            tracing::warn!(line = line_no + 1, "skipping unusable CSV row");
            continue;
        }
        questions.push(Question::new(line_no as u32, text, options, correct));
    }

    if questions.is_empty() {
        return Err(FormatError::NoQuestions { format: "CSV" });
    }
    Ok(Quiz {
        title: CSV_QUIZ_TITLE.to_string(),
        questions,
    })
}
