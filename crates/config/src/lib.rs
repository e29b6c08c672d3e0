//! Configuration loading for the portale access layer.
//!
//! Uses figment for YAML-based configuration with sensible defaults. The
//! only setting the access layer consumes is the backend base URL, resolved
//! once at client construction.

pub mod schema;

pub use schema::{ApiSection, AppConfig, BASE_URL_ENV, DEFAULT_BASE_URL, ExtraSection};
