//! Analyze response type.
//!
//! The request side has no schema type: the body is any JSON value and its
//! `text` field is coerced by [`sentiment_core::text_field`].

/// Body of `POST /analyze`.
pub type AnalyzeResponse = sentiment_core::Analysis;
