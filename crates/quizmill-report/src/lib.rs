//! quizmill-report — score-report rendering.
//!
//! Produces the CSV report and the canonical JSON export of a quiz. The
//! strings are the artifact; the `write_*` helpers just put them on disk.

pub mod csv;
pub mod json;
