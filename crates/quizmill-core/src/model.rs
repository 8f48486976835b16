//! Core data model types for quizmill.
//!
//! These are the fundamental types the entire quizmill system uses to
//! represent quizzes, collected answers, and scoring outcomes.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// A titled, ordered collection of questions.
///
/// Every successful parse yields a non-empty `questions` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    /// Human-readable quiz title.
    pub title: String,
    /// The questions, in presentation order.
    pub questions: Vec<Question>,
}

/// A single quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Stable display identifier. Not necessarily contiguous until a
    /// transform renumbers the quiz.
    pub id: u32,
    /// The prompt shown to the user.
    pub text: String,
    /// Answer options, in presentation order. Never empty.
    pub options: Vec<String>,
    /// Indices into `options` that count as correct. Sorted, deduplicated,
    /// all in range, never empty.
    pub correct: Vec<usize>,
}

impl Question {
    /// Build a question, normalizing `correct` to sorted unique indices.
    pub fn new(id: u32, text: impl Into<String>, options: Vec<String>, correct: Vec<usize>) -> Self {
        let set: BTreeSet<usize> = correct.into_iter().collect();
        Self {
            id,
            text: text.into(),
            options,
            correct: set.into_iter().collect(),
        }
    }

    /// True when more than one option must be selected.
    pub fn is_multiple_choice(&self) -> bool {
        self.correct.len() > 1
    }
}

/// Per-session record of which options the user selected, keyed by question
/// *position* in the current quiz (0-based), not by the stable question id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerState {
    selections: BTreeMap<usize, BTreeSet<usize>>,
}

impl AnswerState {
    /// An empty answer state, as created at quiz start.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the selection set for a question position.
    pub fn set_selection(&mut self, position: usize, selected: BTreeSet<usize>) {
        self.selections.insert(position, selected);
    }

    /// Toggle a single option at a question position.
    pub fn toggle(&mut self, position: usize, option: usize) {
        let set = self.selections.entry(position).or_default();
        if !set.insert(option) {
            set.remove(&option);
        }
    }

    /// The selection set for a question position; empty if nothing was picked.
    pub fn selected(&self, position: usize) -> BTreeSet<usize> {
        self.selections.get(&position).cloned().unwrap_or_default()
    }

    /// Number of question positions with at least one recorded selection.
    pub fn answered_count(&self) -> usize {
        self.selections.values().filter(|s| !s.is_empty()).count()
    }
}

/// The outcome of scoring one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuestionOutcome {
    /// The question that was scored.
    pub question: Question,
    /// The option indices the user picked, in ascending order.
    pub picked: Vec<usize>,
    /// Whether the picked set exactly equals the correct set.
    pub is_correct: bool,
}

impl QuestionOutcome {
    /// Texts of the picked options, in picked order. Out-of-range indices
    /// are skipped.
    pub fn picked_texts(&self) -> Vec<&str> {
        self.picked
            .iter()
            .filter_map(|&i| self.question.options.get(i))
            .map(String::as_str)
            .collect()
    }

    /// Texts of the correct options, in option order.
    pub fn correct_texts(&self) -> Vec<&str> {
        self.question
            .correct
            .iter()
            .filter_map(|&i| self.question.options.get(i))
            .map(String::as_str)
            .collect()
    }
}

/// Aggregate scoring result for a whole quiz.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreResult {
    /// Number of questions answered exactly right.
    pub correct_count: usize,
    /// Total number of questions in the quiz.
    pub total: usize,
    /// Per-question outcomes, in quiz order.
    pub details: Vec<QuestionOutcome>,
}

impl ScoreResult {
    /// Correct answers as a rounded whole percentage.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.correct_count as f64 / self.total as f64) * 100.0).round() as u32
    }

    /// Number of questions not answered exactly right.
    pub fn incorrect_count(&self) -> usize {
        self.total - self.correct_count
    }

    /// Incorrect answers as a rounded whole percentage.
    pub fn incorrect_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        ((self.incorrect_count() as f64 / self.total as f64) * 100.0).round() as u32
    }
}
