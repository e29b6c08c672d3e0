//! Session persistence for the portale access layer.
//!
//! The [`SessionStore`] is the single source of truth for "is there a
//! logged-in session, and what is it". It owns the persisted copy of the
//! current [`portale_types::AuthSession`]; callers only ever hold transient
//! read-only snapshots.

pub mod store;
pub mod telemetry;

pub use store::{SessionStore, TOKEN_KEY, USER_KEY};
pub use telemetry::{SessionTelemetry, TracingTelemetry};
