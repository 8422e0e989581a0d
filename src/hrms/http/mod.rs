//! HTTP plumbing for the HRMS backend.
//!
//! This module handles request construction, bearer-token injection and
//! response status handling. Endpoint groups in `crate::hrms::api` only
//! build URLs and pick a verb.

mod auth;
mod client;
mod url;

pub use auth::BearerAuth;
pub use client::ApiClient;
pub use url::Endpoint;

// Re-export common types used in our public API
pub use reqwest::{Method, Response, StatusCode, Url};
