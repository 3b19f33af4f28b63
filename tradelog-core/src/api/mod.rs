//! Authenticated HTTP API client for the remote journal store.
//!
//! The client translates logical resource operations into bearer-token HTTP
//! requests and hands back raw responses (or decoded wire rows via
//! `types`). It never builds domain objects itself; `source::ApiSource`
//! does that mapping. A 401 comes back as `ApiError::Unauthorized`; what
//! that means (re-login prompt, status-bar error) is the caller's call.

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use session::Session;
