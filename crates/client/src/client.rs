//! The request executor and the public client facade.

use crate::{classify, normalize::normalize};
use portale_config::AppConfig;
use portale_session::SessionStore;
use portale_types::{ApiResult, ResponseBody, SessionUser};
use reqwest::{
    Method,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue},
};
use serde_json::Value;
use std::sync::Arc;

/// Options for one request.
///
/// Defaults: `GET`, no body, no extra headers, authenticated.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub method: Method,
    /// JSON body; `None` sends no request body at all.
    pub body: Option<Value>,
    /// Caller-supplied headers, merged last so they win on collision.
    pub headers: Vec<(String, String)>,
    /// Attach the stored session credential, when one exists.
    pub with_auth: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    /// Options for the given method, authenticated, with no body.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: Vec::new(),
            with_auth: true,
        }
    }

    /// Set the JSON request body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add a caller header; it silently overrides any default on collision.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Send the request without the session credential, even if one exists.
    #[must_use]
    pub fn unauthenticated(mut self) -> Self {
        self.with_auth = false;
        self
    }
}

/// The one facade every screen's data access goes through.
///
/// Issues exactly one HTTP request per call and resolves every outcome into
/// an [`ApiResult`]; no method here returns an error or panics. There is no
/// retry, caching, or request timeout: a call runs to transport completion
/// or transport failure.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Creates a client against `base_url` using the given session store.
    pub fn new(base_url: impl Into<String>, session: Arc<SessionStore>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    /// Creates a client with the base URL resolved from configuration.
    pub fn from_config(config: &AppConfig, session: Arc<SessionStore>) -> Self {
        Self::new(config.resolved_base_url(), session)
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The session store this client reads its credential from.
    #[must_use]
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Whether a stored session token exists.
    pub async fn is_authenticated(&self) -> bool {
        self.session.is_authenticated().await
    }

    /// The persisted profile snapshot, if any.
    pub async fn current_user(&self) -> Option<SessionUser> {
        self.session.user().await
    }

    /// Issue one request.
    ///
    /// The target is `base_url + path` by plain concatenation: the path must
    /// carry its own leading `/`, and doubled separators are not cleaned up.
    /// `Accept: application/json` is always sent; `Content-Type` only when a
    /// body is present; `Authorization` when `with_auth` is set and a
    /// session token is stored (a missing token sends the request
    /// unauthenticated and lets the server reject it). Caller headers are
    /// merged last and win on collision.
    pub async fn request(&self, path: &str, opts: RequestOptions) -> ApiResult {
        let url = format!("{}{}", self.base_url, path);

        let mut builder = self.http.request(opts.method.clone(), &url);
        if let Some(body) = &opts.body {
            // Sets `Content-Type: application/json` alongside the payload.
            builder = builder.json(body);
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if opts.with_auth
            && let Some(token) = self.session.token().await
            && let Ok(value) = HeaderValue::from_str(&token)
        {
            headers.insert(AUTHORIZATION, value);
        }
        for (name, value) in &opts.headers {
            match (
                HeaderName::from_bytes(name.as_bytes()),
                HeaderValue::from_str(value),
            ) {
                (Ok(name), Ok(value)) => {
                    headers.insert(name, value);
                }
                _ => tracing::debug!(header = name, "skipping invalid caller header"),
            }
        }
        builder = builder.headers(headers);

        tracing::debug!(method = %opts.method, url = %url, "dispatching request");

        match builder.send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                let content_type = response
                    .headers()
                    .get(reqwest::header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_owned);
                let body = response.text().await.map_err(|e| e.to_string());
                normalize(status, content_type.as_deref(), body)
            }
            Err(err) => self.transport_failure(&err),
        }
    }

    /// `GET {path}`, authenticated.
    pub async fn get(&self, path: &str) -> ApiResult {
        self.request(path, RequestOptions::default()).await
    }

    /// `POST {path}` with an optional JSON body.
    pub async fn post(&self, path: &str, body: Option<Value>) -> ApiResult {
        let mut opts = RequestOptions::new(Method::POST);
        opts.body = body;
        self.request(path, opts).await
    }

    /// `PUT {path}` with an optional JSON body.
    pub async fn put(&self, path: &str, body: Option<Value>) -> ApiResult {
        let mut opts = RequestOptions::new(Method::PUT);
        opts.body = body;
        self.request(path, opts).await
    }

    /// `DELETE {path}`, authenticated.
    pub async fn delete(&self, path: &str) -> ApiResult {
        self.request(path, RequestOptions::new(Method::DELETE)).await
    }

    /// A failure that never produced an HTTP response: status `0`, the error
    /// description kept in `raw` for diagnostics.
    fn transport_failure(&self, err: &reqwest::Error) -> ApiResult {
        tracing::debug!(error = %err, "transport failure");
        ApiResult {
            ok: false,
            status: 0,
            data: None,
            raw: ResponseBody::Unreadable(err.to_string()),
            message: Some(classify::transport_message(err, &self.base_url)),
        }
    }
}
