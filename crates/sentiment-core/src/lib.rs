//! Text analysis data model and heuristics for the sentiment service.
//!
//! This crate is independent of HTTP: [`analysis`] holds the response types
//! and the intensity rule, [`text`] turns an arbitrary JSON `text` field into
//! the string that gets analyzed.

pub mod analysis;
pub mod text;

// Re-export commonly used types
pub use analysis::{analyze, Analysis, Emotion, Intensity, Sentiment};
pub use text::{coerce_text, text_field};
