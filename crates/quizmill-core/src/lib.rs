//! quizmill-core — Quiz format normalization and scoring.
//!
//! This crate turns loosely-structured quiz text (JSON, CSV, or a constrained
//! Markdown dialect) into a validated [`model::Quiz`], applies session modes,
//! and scores collected answers.

pub mod csv;
pub mod dispatch;
pub mod error;
pub mod json;
pub mod markdown;
pub mod model;
pub mod score;
pub mod transform;
