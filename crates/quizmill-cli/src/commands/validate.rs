//! The `quizmill validate` command.

use std::path::PathBuf;

use anyhow::Result;

pub fn execute(input: PathBuf) -> Result<()> {
    let quiz = super::load_quiz(&input)?;

    println!("Quiz: {} ({} questions)", quiz.title, quiz.questions.len());

    let multiple = quiz
        .questions
        .iter()
        .filter(|q| q.is_multiple_choice())
        .count();
    if multiple > 0 {
        println!("{multiple} question(s) require multiple answers");
    }

    println!("Quiz is valid.");
    Ok(())
}
