//! Core types and traits for the portale workspace.
//!
//! This crate defines the shared abstractions used across the network access
//! layer: the unified error type, the session data model, the normalized
//! request result, and the key-value storage trait that session persistence
//! is built on.

pub mod error;
pub mod result;
pub mod session;
pub mod traits;

pub use error::PortaleError;
pub use result::{ApiResult, ResponseBody};
pub use session::{AuthSession, SessionCredential, SessionUser, UserRole};
pub use traits::KvStore;
