//! JSON quiz normalization.
//!
//! Accepts an already-parsed JSON value and coerces it into a [`Quiz`].
//! Unlike the CSV parser, this is strict: the first malformed question fails
//! the whole normalization, naming its 1-based position.

use serde_json::Value;

use crate::error::FormatError;
use crate::model::{Question, Quiz};

/// Title used when a JSON quiz has no usable `title` field.
const DEFAULT_TITLE: &str = "Test";

/// Parse JSON text and normalize it into a [`Quiz`].
///
/// Syntax errors surface as [`FormatError::Json`].
pub fn parse_json(text: &str) -> Result<Quiz, FormatError> {
    let value: Value = serde_json::from_str(text)?;
    normalize_json(&value)
}

/// Validate and coerce an arbitrary JSON value into a [`Quiz`].
pub fn normalize_json(value: &Value) -> Result<Quiz, FormatError> {
    let raw_questions = value
        .get("questions")
        .and_then(Value::as_array)
        .ok_or(FormatError::NotAQuiz)?;

    let title = match value.get("title").and_then(Value::as_str) {
        Some(t) if !t.trim().is_empty() => t.trim().to_string(),
        _ => DEFAULT_TITLE.to_string(),
    };

    let mut questions = Vec::with_capacity(raw_questions.len());
    for (idx, raw) in raw_questions.iter().enumerate() {
        let position = idx + 1;
        questions.push(
            normalize_question(raw, position)
                .ok_or(FormatError::InvalidJsonQuestion { position })?,
        );
    }

    if questions.is_empty() {
        return Err(FormatError::NoQuestions { format: "JSON" });
    }
    Ok(Quiz { title, questions })
}

fn normalize_question(raw: &Value, position: usize) -> Option<Question> {
    let text = raw.get("text").and_then(scalar_to_string)?;
    if text.is_empty() {
        return None;
    }

    let options: Vec<String> = raw
        .get("options")
        .and_then(Value::as_array)?
        .iter()
        .map(scalar_to_string)
        .collect::<Option<_>>()?;
    if options.is_empty() {
        return None;
    }

    // Every correct entry must coerce to an in-range index; duplicates are
    // collapsed by `Question::new`.
    let correct: Vec<usize> = raw
        .get("correct")
        .and_then(Value::as_array)?
        .iter()
        .map(scalar_to_index)
        .collect::<Option<_>>()?;
    if correct.is_empty() || correct.iter().any(|&i| i >= options.len()) {
        return None;
    }

    let id = raw
        .get("id")
        .and_then(Value::as_u64)
        .map(|id| id as u32)
        .unwrap_or(position as u32);

    Some(Question::new(id, text, options, correct))
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn scalar_to_index(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().map(|n| n as usize),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
