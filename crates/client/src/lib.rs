//! HTTP request execution for the portale access layer.
//!
//! [`ApiClient`] is the single facade every caller goes through: verb-shaped
//! methods that issue one HTTP request each, inject the stored session
//! credential when asked to, and resolve every outcome — success envelopes,
//! validation-error envelopes, HTML error pages, transport failures — into
//! the uniform [`portale_types::ApiResult`]. Nothing in this crate returns
//! `Err` across the public boundary.

pub mod classify;
pub mod client;
mod normalize;

pub use classify::default_message;
pub use client::{ApiClient, RequestOptions};
