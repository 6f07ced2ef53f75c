//! HTTP handler modules.
//!
//! Handlers are stateless: each request is parsed, analyzed and answered
//! without touching shared data.

pub mod analyze;
pub mod health;
