//! The scoring engine.

use std::collections::BTreeSet;

use crate::model::{AnswerState, Quiz, QuestionOutcome, ScoreResult};

/// Score collected answers against a quiz.
///
/// A question counts as correct only when the picked set exactly equals the
/// correct set. Pure function of its inputs; cheap enough to recompute for a
/// live "so far" display.
pub fn score(quiz: &Quiz, answers: &AnswerState) -> ScoreResult {
    let mut correct_count = 0;
    let mut details = Vec::with_capacity(quiz.questions.len());

    for (position, question) in quiz.questions.iter().enumerate() {
        let right: BTreeSet<usize> = question.correct.iter().copied().collect();
        let picked = answers.selected(position);
        let is_correct = right == picked;
        if is_correct {
            correct_count += 1;
        }
        details.push(QuestionOutcome {
            question: question.clone(),
            picked: picked.into_iter().collect(),
            is_correct,
        });
    }

    ScoreResult {
        correct_count,
        total: quiz.questions.len(),
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Question;

    fn quiz() -> Quiz {
        Quiz {
            title: "T".into(),
            questions: vec![Question::new(
                1,
                "Multi",
                vec!["a".into(), "b".into(), "c".into()],
                vec![0, 2],
            )],
        }
    }

    fn answers_with(selected: &[usize]) -> AnswerState {
        let mut answers = AnswerState::new();
        answers.set_selection(0, selected.iter().copied().collect());
        answers
    }

    #[test]
    fn exact_set_equality_required() {
        assert!(score(&quiz(), &answers_with(&[0, 2])).details[0].is_correct);
        assert!(!score(&quiz(), &answers_with(&[0])).details[0].is_correct);
        assert!(!score(&quiz(), &answers_with(&[0, 1, 2])).details[0].is_correct);
    }

    #[test]
    fn unanswered_question_is_incorrect() {
        let result = score(&quiz(), &AnswerState::new());
        assert_eq!(result.correct_count, 0);
        assert_eq!(result.total, 1);
        assert!(result.details[0].picked.is_empty());
    }

    #[test]
    fn scoring_is_idempotent() {
        let answers = answers_with(&[0, 2]);
        let quiz = quiz();
        let first = score(&quiz, &answers);
        let second = score(&quiz, &answers);
        assert_eq!(first, second);
    }

    #[test]
    fn counts_across_multiple_questions() {
        let quiz = Quiz {
            title: "T".into(),
            questions: vec![
                Question::new(1, "A", vec!["x".into(), "y".into()], vec![0]),
                Question::new(2, "B", vec!["x".into(), "y".into()], vec![1]),
            ],
        };
        let mut answers = AnswerState::new();
        answers.set_selection(0, [0].into_iter().collect());
        answers.set_selection(1, [0].into_iter().collect());
        let result = score(&quiz, &answers);
        assert_eq!(result.correct_count, 1);
        assert_eq!(result.percent(), 50);
    }
}
