//! HTTP/JSON server for the sentiment service.
//!
//! Exposes `GET /health` and `POST /analyze` over axum. The analysis itself
//! lives in `sentiment-core`; this crate contains configuration, body
//! parsing, error mapping, route definitions and the server lifecycle.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod server;
