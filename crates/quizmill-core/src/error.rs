//! The quiz format error type.
//!
//! Every hard parse failure in this crate is a [`FormatError`]. Callers at
//! the boundary render it as a user-facing message; nothing here is fatal to
//! the process. Recoverable problems (a malformed CSV row, an unresolved
//! Markdown answer fragment) are dropped at the smallest granularity instead
//! of surfacing here.

use thiserror::Error;

/// A quiz definition could not be turned into a usable `Quiz`.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The CSV input had no lines at all.
    #[error("empty CSV input")]
    EmptyCsv,

    /// The CSV header is missing one of the mandatory columns.
    #[error("CSV must contain the columns: question, options, correct")]
    MissingCsvColumns,

    /// Parsing succeeded structurally but produced zero usable questions.
    #[error("no usable questions found in {format} input")]
    NoQuestions {
        /// The format that was attempted ("CSV", "Markdown", "JSON", ...).
        format: &'static str,
    },

    /// The JSON value is not a quiz object with a `questions` array.
    #[error("not a quiz: expected an object with a \"questions\" array")]
    NotAQuiz,

    /// A specific question in a JSON quiz is malformed.
    #[error("question {position} has invalid data")]
    InvalidJsonQuestion {
        /// 1-based position of the offending question.
        position: usize,
    },

    /// The input was not syntactically valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        assert_eq!(
            FormatError::InvalidJsonQuestion { position: 3 }.to_string(),
            "question 3 has invalid data"
        );
        assert_eq!(
            FormatError::NoQuestions { format: "CSV" }.to_string(),
            "no usable questions found in CSV input"
        );
    }
}
