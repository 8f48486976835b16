//! Format dispatch.
//!
//! Picks a parser from the filename extension, with content sniffing when
//! the extension is absent or unrecognized.

use rand::Rng;

use crate::error::FormatError;
use crate::model::Quiz;
use crate::{csv, json, markdown};

/// Parse quiz text in whichever format it is in.
///
/// `.md`, `.csv`, and `.json` extensions (case-insensitive) select their
/// parser directly. Anything else is sniffed: JSON first, then Markdown if
/// it yields at least one question, then CSV as the last resort.
pub fn parse_any<R: Rng>(filename: &str, text: &str, rng: &mut R) -> Result<Quiz, FormatError> {
    let lower = filename.to_lowercase();
    if lower.ends_with(".md") {
        let quiz = markdown::parse_markdown(text, rng);
        if quiz.questions.is_empty() {
            return Err(FormatError::NoQuestions { format: "Markdown" });
        }
        return Ok(quiz);
    }
    if lower.ends_with(".csv") {
        return csv::parse_csv(text);
    }
    if lower.ends_with(".json") {
        return json::parse_json(text);
    }

    // Unknown extension: sniff the content.
    match json::parse_json(text) {
        Ok(quiz) => Ok(quiz),
        Err(json_err) => {
            tracing::debug!(%json_err, "content is not a JSON quiz, trying Markdown");
            let quiz = markdown::parse_markdown(text, rng);
            if !quiz.questions.is_empty() {
                return Ok(quiz);
            }
            tracing::debug!("content is not a Markdown quiz, trying CSV");
            csv::parse_csv(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const CSV_TEXT: &str = "question,options,correct\nSky color?,Blue;Red,1";
    const MD_TEXT: &str = "**1. What is CI?**\n* Continuous Integration\n* Nothing\n**Answer:** Continuous Integration";
    const JSON_TEXT: &str =
        r#"{"title":"T","questions":[{"text":"Q","options":["a","b"],"correct":[1]}]}"#;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn extension_selects_parser() {
        assert_eq!(parse_any("quiz.CSV", CSV_TEXT, &mut rng()).unwrap().title, "CSV quiz");
        assert_eq!(
            parse_any("quiz.md", MD_TEXT, &mut rng()).unwrap().title,
            "DevOps fundamentals quiz"
        );
        assert_eq!(parse_any("quiz.json", JSON_TEXT, &mut rng()).unwrap().title, "T");
    }

    #[test]
    fn json_syntax_error_propagates_for_json_extension() {
        assert!(matches!(
            parse_any("quiz.json", "{ nope", &mut rng()),
            Err(FormatError::Json(_))
        ));
    }

    #[test]
    fn empty_markdown_result_is_an_error() {
        assert!(matches!(
            parse_any("quiz.md", "no questions here", &mut rng()),
            Err(FormatError::NoQuestions { format: "Markdown" })
        ));
    }

    #[test]
    fn sniffing_tries_json_then_markdown_then_csv() {
        assert_eq!(parse_any("quiz", JSON_TEXT, &mut rng()).unwrap().title, "T");
        assert_eq!(
            parse_any("quiz.txt", MD_TEXT, &mut rng()).unwrap().questions.len(),
            1
        );
        assert_eq!(
            parse_any("download", CSV_TEXT, &mut rng()).unwrap().questions.len(),
            1
        );
    }

    #[test]
    fn sniffing_failure_surfaces_csv_error() {
        let err = parse_any("garbage", "just some text", &mut rng()).unwrap_err();
        assert!(matches!(err, FormatError::MissingCsvColumns));
    }
}
