//! Analyze handler and JSON body parsing.

use axum::body::Bytes;
use axum::http::{header, HeaderMap};
use axum::Json;
use serde_json::{Map, Value};

use sentiment_core::text_field;

use crate::error::ApiError;
use crate::schema::analyze::AnalyzeResponse;

/// Scores the `text` field of the request body.
///
/// `POST /analyze`
pub async fn analyze(headers: HeaderMap, body: Bytes) -> Result<Json<AnalyzeResponse>, ApiError> {
    let payload = parse_json_body(&headers, &body)?;
    let text = text_field(&payload);
    let analysis = sentiment_core::analyze(&text);

    tracing::debug!(
        text_len = text.len(),
        intensity = %analysis.intensity,
        "analyzed text"
    );

    Ok(Json(analysis))
}

/// Parses the body as JSON when it is declared as JSON.
///
/// Empty bodies and bodies without a JSON content type read as `{}`. A body
/// declared as JSON that fails to parse is a [`ApiError::BadRequest`].
fn parse_json_body(headers: &HeaderMap, body: &[u8]) -> Result<Value, ApiError> {
    if body.is_empty() || !is_json_content_type(headers) {
        return Ok(Value::Object(Map::new()));
    }

    serde_json::from_slice(body)
        .map_err(|err| ApiError::BadRequest(format!("malformed JSON body: {}", err)))
}

/// Matches `application/json` and structured `+json` media types.
fn is_json_content_type(headers: &HeaderMap) -> bool {
    let Some(content_type) = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.contains('/') && mime.ends_with("+json"))
}
