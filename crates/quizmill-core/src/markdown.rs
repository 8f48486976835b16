//! Markdown quiz parsing.
//!
//! Handles a constrained dialect: `**N. question**` headers, `* option`
//! bullets, and `**Answer:** text` lines. Stated answers are resolved to
//! option indices by exact match first, then substring containment in either
//! direction. Questions with no option list at all get three synthesized
//! distractors shuffled in alongside the correct text.
//!
//! This parser never fails; malformed input degrades to a quiz with fewer
//! (possibly zero) questions, which callers must treat as failure.

use lazy_static::lazy_static;
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;

use crate::model::{Question, Quiz};

/// Fixed title for Markdown-sourced quizzes.
const MARKDOWN_TITLE: &str = "DevOps fundamentals quiz";
/// Stand-in correct text when a question has neither options nor answers.
const PLACEHOLDER_ANSWER: &str = "Correct answer";
/// Wrong-option texts synthesized for questions without an option list.
const DISTRACTOR_POOL: [&str; 3] = ["Wrong option", "Other definition", "Does not fit"];
/// Generic filler used when a pool entry collides with the correct text.
const FILLER_OPTION: &str = "Answer option";

lazy_static! {
    static ref HEADER_RE: Regex = Regex::new(r"^\*\*(\d+)\.\s*(.+?)\*\*\s*$").unwrap();
    static ref OPTION_RE: Regex = Regex::new(r"^\*\s+(.*)$").unwrap();
    static ref ANSWER_RE: Regex = Regex::new(r"^\*\*Answer:\*\*\s*(.*)$").unwrap();
    static ref ANSWER_SPLIT_RE: Regex = Regex::new(r"(?i)\s*(?:,|;|\s+and\s+)\s*").unwrap();
}

/// One in-progress question while scanning lines.
struct Accumulator {
    text: String,
    options: Vec<String>,
    answer_texts: Vec<String>,
}

/// Parse Markdown text into a [`Quiz`].
///
/// The RNG drives distractor shuffling for questions without explicit
/// options; pass a seeded RNG for deterministic tests.
pub fn parse_markdown<R: Rng>(text: &str, rng: &mut R) -> Quiz {
    let mut questions = Vec::new();
    let mut current: Option<Accumulator> = None;

    for line in text.lines() {
        if let Some(caps) = HEADER_RE.captures(line) {
            if let Some(acc) = current.take() {
                flush(acc, &mut questions, rng);
            }
            current = Some(Accumulator {
                text: caps[2].to_string(),
                options: Vec::new(),
                answer_texts: Vec::new(),
            });
            continue;
        }
        let Some(acc) = current.as_mut() else {
            continue;
        };
        if let Some(caps) = OPTION_RE.captures(line) {
            let opt = caps[1].trim();
            // Lines starting with an em-dash are annotations, not options.
            if !opt.is_empty() && !opt.starts_with('—') {
                acc.options.push(opt.to_string());
            }
            continue;
        }
        if let Some(caps) = ANSWER_RE.captures(line) {
            let cleaned: String = caps[1]
                .trim()
                .chars()
                .filter(|c| !matches!(c, '`' | '(' | ')'))
                .collect();
            acc.answer_texts.extend(
                ANSWER_SPLIT_RE
                    .split(&cleaned)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from),
            );
        }
        // Anything else is ignored.
    }
    if let Some(acc) = current.take() {
        flush(acc, &mut questions, rng);
    }

    Quiz {
        title: MARKDOWN_TITLE.to_string(),
        questions,
    }
}

/// Finalize one accumulator into a question, if it is fully formed.
fn flush<R: Rng>(acc: Accumulator, questions: &mut Vec<Question>, rng: &mut R) {
    let text = normalize_whitespace(&acc.text);
    let mut options: Vec<String> = acc
        .options
        .iter()
        .map(|o| normalize_whitespace(o))
        .filter(|o| !o.is_empty())
        .collect();
    let mut correct: Vec<usize> = Vec::new();

    if !options.is_empty() && !acc.answer_texts.is_empty() {
        let lowered: Vec<String> = options.iter().map(|o| o.to_lowercase()).collect();
        for answer in &acc.answer_texts {
            let a = normalize_whitespace(answer).to_lowercase();
            let idx = lowered
                .iter()
                .position(|o| *o == a)
                .or_else(|| lowered.iter().position(|o| o.contains(&a) || a.contains(o)));
            match idx {
                Some(i) if !correct.contains(&i) => correct.push(i),
                Some(_) => {}
                None => tracing::debug!(fragment = %answer, "unresolved answer fragment"),
            }
        }
    }

    if options.is_empty() {
        // No option list at all: build one around the first stated answer.
        let correct_text = acc
            .answer_texts
            .first()
            .map(|a| normalize_whitespace(a))
            .unwrap_or_else(|| PLACEHOLDER_ANSWER.to_string());
        options = vec![correct_text.clone()];
        options.extend(generate_distractors(&correct_text));
        options.shuffle(rng);
        correct = vec![options.iter().position(|o| *o == correct_text).unwrap_or(0)];
    } else if correct.is_empty() && !acc.answer_texts.is_empty() {
        // Options exist but nothing resolved: adopt the first stated answer.
        let correct_text = normalize_whitespace(&acc.answer_texts[0]);
        match options.iter().position(|o| *o == correct_text) {
            Some(idx) => correct = vec![idx],
            None => {
                options.push(correct_text);
                correct = vec![options.len() - 1];
            }
        }
    }

    if !text.is_empty() && !options.is_empty() && !correct.is_empty() {
        questions.push(Question::new(
            questions.len() as u32 + 1,
            text,
            options,
            correct,
        ));
    }
}

/// Exactly three wrong-option texts, none equal to the correct text.
fn generate_distractors(correct_text: &str) -> Vec<String> {
    let lowered = correct_text.to_lowercase();
    let mut distractors: Vec<String> = DISTRACTOR_POOL
        .iter()
        .filter(|d| d.to_lowercase() != lowered)
        .map(|d| d.to_string())
        .collect();
    while distractors.len() < 3 {
        distractors.push(FILLER_OPTION.to_string());
    }
    distractors.truncate(3);
    distractors
}

/// Collapse whitespace runs to single spaces and trim.
fn normalize_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(99)
    }

    #[test]
    fn parses_question_with_options_and_answer() {
        let md = "**1. What is CI?**\n* Continuous Integration\n* Nothing\n**Answer:** Continuous Integration";
        let quiz = parse_markdown(md, &mut rng());
        assert_eq!(quiz.title, "DevOps fundamentals quiz");
        assert_eq!(quiz.questions.len(), 1);
        let q = &quiz.questions[0];
        assert_eq!(q.options.len(), 2);
        assert_eq!(q.correct, vec![0]);
    }

    #[test]
    fn answer_matching_is_case_insensitive_then_substring() {
        let md = "**1. Pick**\n* Kubernetes cluster\n* Docker image\n**Answer:** kubernetes";
        let quiz = parse_markdown(md, &mut rng());
        assert_eq!(quiz.questions[0].correct, vec![0]);
    }

    #[test]
    fn multiple_answer_fragments_resolve_and_dedup() {
        let md = "**1. Which are VCS?**\n* Git\n* SVN\n* Excel\n**Answer:** Git, SVN and git";
        let quiz = parse_markdown(md, &mut rng());
        assert_eq!(quiz.questions[0].correct, vec![0, 1]);
    }

    #[test]
    fn question_without_options_synthesizes_distractors() {
        let md = "**1. What does IaC stand for?**\n**Answer:** Infrastructure as Code";
        let quiz = parse_markdown(md, &mut rng());
        let q = &quiz.questions[0];
        assert_eq!(q.options.len(), 4);
        assert_eq!(q.correct.len(), 1);
        assert_eq!(q.options[q.correct[0]], "Infrastructure as Code");
        for pool_text in DISTRACTOR_POOL {
            assert!(q.options.iter().any(|o| o == pool_text));
        }
    }

    #[test]
    fn distractor_pool_collision_falls_back_to_filler() {
        let distractors = generate_distractors("wrong OPTION");
        assert_eq!(distractors.len(), 3);
        assert!(!distractors.iter().any(|d| d.eq_ignore_ascii_case("wrong option")));
        assert!(distractors.contains(&FILLER_OPTION.to_string()));
    }

    #[test]
    fn unresolved_answer_is_appended_as_new_option() {
        let md = "**1. Capital of France?**\n* Berlin\n* Madrid\n**Answer:** Paris";
        let quiz = parse_markdown(md, &mut rng());
        let q = &quiz.questions[0];
        assert_eq!(q.options, vec!["Berlin", "Madrid", "Paris"]);
        assert_eq!(q.correct, vec![2]);
    }

    #[test]
    fn em_dash_bullets_are_annotations_not_options() {
        let md = "**1. Q?**\n* Real option\n* — just a note\n**Answer:** Real option";
        let quiz = parse_markdown(md, &mut rng());
        assert_eq!(quiz.questions[0].options, vec!["Real option"]);
    }

    #[test]
    fn backticks_and_parens_are_stripped_from_answers() {
        let md = "**1. Which command?**\n* git status\n* git log\n**Answer:** `git status` (porcelain)";
        let quiz = parse_markdown(md, &mut rng());
        assert_eq!(quiz.questions[0].correct, vec![0]);
    }

    #[test]
    fn question_without_text_or_answer_is_dropped() {
        // Header with answers but never another header: fine. Header with
        // options and no answer line: dropped.
        let md = "**1. Lonely?**\n* Option A\n* Option B\nStray prose is ignored";
        let quiz = parse_markdown(md, &mut rng());
        assert!(quiz.questions.is_empty());
    }

    #[test]
    fn ids_are_sequential_from_one() {
        let md = "**3. A?**\n**Answer:** one\n**9. B?**\n**Answer:** two";
        let quiz = parse_markdown(md, &mut rng());
        let ids: Vec<u32> = quiz.questions.iter().map(|q| q.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn garbage_input_yields_zero_questions() {
        let quiz = parse_markdown("nothing here\n* stray bullet\n", &mut rng());
        assert!(quiz.questions.is_empty());
    }

    #[test]
    fn whitespace_is_normalized() {
        let md = "**1. What   is\tCD?**\n* Continuous    Delivery\n**Answer:** Continuous Delivery";
        let quiz = parse_markdown(md, &mut rng());
        let q = &quiz.questions[0];
        assert_eq!(q.text, "What is CD?");
        assert_eq!(q.options[0], "Continuous Delivery");
        assert_eq!(q.correct, vec![0]);
    }
}
