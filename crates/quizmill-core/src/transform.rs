//! Post-load quiz shaping.
//!
//! A loaded quiz is run through exactly one session mode before answers are
//! collected: a random subset or the full marathon. Both renumber ids so the
//! presented quiz is always 1..k.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::model::Quiz;

/// Maximum number of questions kept by [`Mode::Random40`].
pub const RANDOM_SAMPLE_SIZE: usize = 40;

/// Session mode applied to a freshly loaded quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Uniform random sample of up to 40 questions.
    Random40,
    /// All questions, original order.
    Marathon,
}

impl Mode {
    fn title_label(self) -> &'static str {
        match self {
            Mode::Random40 => "40 random questions",
            Mode::Marathon => "Marathon",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Random40 => write!(f, "random40"),
            Mode::Marathon => write!(f, "marathon"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "random40" => Ok(Mode::Random40),
            "marathon" => Ok(Mode::Marathon),
            other => Err(format!("unknown mode: {other}")),
        }
    }
}

/// Apply a session mode: sample/keep questions, renumber ids 1..k, and tag
/// the title with the mode label.
///
/// Re-applying a mode replaces the previous label rather than stacking, so
/// the transform is idempotent on the title's base segment.
pub fn apply_mode<R: Rng>(quiz: Quiz, mode: Mode, rng: &mut R) -> Quiz {
    let mut questions = quiz.questions;
    if mode == Mode::Random40 {
        questions.shuffle(rng);
        questions.truncate(RANDOM_SAMPLE_SIZE);
    }
    for (idx, question) in questions.iter_mut().enumerate() {
        question.id = idx as u32 + 1;
    }
    Quiz {
        title: format!("{} — {}", base_title(&quiz.title), mode.title_label()),
        questions,
    }
}

/// Strip a previously applied " — <label>" suffix.
fn base_title(title: &str) -> &str {
    for (i, c) in title.char_indices() {
        if c == '—' && title[..i].ends_with(char::is_whitespace) {
            return title[..i].trim_end();
        }
    }
    title
}
