//! The uniform result every request resolves to.

use serde::de::DeserializeOwned;
use serde_json::Value;

/// The response body after one normalization pass.
///
/// The normalizer decides this shape exactly once, based on the response's
/// `Content-Type` and a single parse attempt; downstream code matches on the
/// closed set instead of re-probing fields at every call site.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseBody {
    /// Body carried a JSON media type and parsed successfully.
    Json(Value),
    /// Body was read as plain text (HTML error pages, non-JSON replies).
    Text(String),
    /// Body could not be read or parsed; carries the error description.
    Unreadable(String),
    /// No response body was obtained (e.g. transport never reached the server).
    Empty,
}

impl ResponseBody {
    /// The parsed JSON value, if this body is JSON.
    #[must_use]
    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }
}

/// Uniform outcome of one request, success or failure.
///
/// Invariants:
/// - `ok == true` implies `status` is in the success range and the server
///   did not set an explicit `success: false` flag in the body.
/// - `ok == false` implies `message` is `Some` and non-empty.
/// - `status == 0` denotes a transport-level failure that never produced an
///   HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResult {
    pub ok: bool,
    pub status: u16,
    /// Unwrapped payload: the nested `data` field when the body is an
    /// envelope that carries one, else the whole JSON object. Non-object
    /// bodies never populate this.
    pub data: Option<Value>,
    /// The full normalized body, for callers that need more than `data`.
    pub raw: ResponseBody,
    /// Human-readable explanation; always present when `ok` is false.
    pub message: Option<String>,
}

impl ApiResult {
    /// Deserialize the unwrapped payload into a concrete type.
    ///
    /// Returns `None` when there is no payload or it does not match `T`.
    #[must_use]
    pub fn data_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.data
            .as_ref()
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }
}
