//! Turns one raw HTTP response into the uniform result shape.
//!
//! The normalizer is a pure function over `(status, content type, body read
//! result)`; it touches no I/O and holds no state, so equivalent inputs
//! always produce identical results.

use crate::classify;
use portale_types::{ApiResult, ResponseBody};
use serde_json::{Map, Value};

/// Upper bound on messages lifted from plain-text bodies, so an entire HTML
/// error page never lands in the UI.
const MAX_TEXT_MESSAGE_LEN: usize = 500;

/// Normalize one response.
///
/// `body` is the outcome of reading the response body as text; a read
/// failure is carried through as [`ResponseBody::Unreadable`].
pub(crate) fn normalize(
    status: u16,
    content_type: Option<&str>,
    body: Result<String, String>,
) -> ApiResult {
    let raw = decide_body(content_type, body);

    // Transport success plus no explicit server-side failure flag. A JSON
    // object that omits the flag does not block success.
    let transport_ok = (200..300).contains(&status);
    let flagged_failure = matches!(
        raw.as_json(),
        Some(Value::Object(map)) if map.get("success") == Some(&Value::Bool(false))
    );
    let ok = transport_ok && !flagged_failure;

    let data = match &raw {
        ResponseBody::Json(Value::Object(map)) => Some(
            map.get("data")
                .cloned()
                .unwrap_or_else(|| Value::Object(map.clone())),
        ),
        _ => None,
    };

    let mut message = extract_message(&raw);
    if !ok && message.is_none() {
        message = Some(classify::default_message(status).to_string());
    }

    ApiResult {
        ok,
        status,
        data,
        raw,
        message,
    }
}

/// Decide the body shape exactly once, from the content type and one parse
/// attempt.
fn decide_body(content_type: Option<&str>, body: Result<String, String>) -> ResponseBody {
    let text = match body {
        Ok(text) => text,
        Err(err) => return ResponseBody::Unreadable(err),
    };
    if is_json_content_type(content_type) {
        match serde_json::from_str(&text) {
            Ok(value) => ResponseBody::Json(value),
            Err(err) => ResponseBody::Unreadable(err.to_string()),
        }
    } else if text.is_empty() {
        ResponseBody::Empty
    } else {
        ResponseBody::Text(text)
    }
}

fn is_json_content_type(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| {
        let ct = ct.to_ascii_lowercase();
        ct.contains("application/json") || ct.contains("+json")
    })
}

/// Extract a human-readable message from the body, in priority order:
/// field-keyed validation errors, then a top-level message string, then a
/// string body (truncated).
fn extract_message(raw: &ResponseBody) -> Option<String> {
    match raw {
        ResponseBody::Json(Value::Object(map)) => {
            if let Some(Value::Object(errors)) = map.get("errors") {
                let flat = flatten_errors(errors);
                if !flat.is_empty() {
                    return Some(flat);
                }
            }
            match map.get("message") {
                Some(Value::String(m)) if !m.is_empty() => Some(m.clone()),
                _ => None,
            }
        }
        ResponseBody::Json(Value::String(s)) if !s.is_empty() => Some(truncate(s)),
        ResponseBody::Text(s) => Some(truncate(s)),
        _ => None,
    }
}

/// Flatten `{field: [messages]}` (or `{field: message}`) into
/// `"field: message"` lines joined by newlines.
fn flatten_errors(errors: &Map<String, Value>) -> String {
    let mut lines = Vec::new();
    for (field, value) in errors {
        match value {
            Value::String(msg) => lines.push(format!("{field}: {msg}")),
            Value::Array(items) => {
                for item in items {
                    if let Value::String(msg) = item {
                        lines.push(format!("{field}: {msg}"));
                    }
                }
            }
            _ => {}
        }
    }
    lines.join("\n")
}

fn truncate(s: &str) -> String {
    s.chars().take(MAX_TEXT_MESSAGE_LEN).collect()
}
