//! Report API client for SalesDesk
//!
//! This module provides the HTTP-based client for the remote report API.
//! It attaches bearer credentials, encodes query parameters, decodes typed
//! responses and normalizes every failure into [`ApiError`].
//!
//! # Architecture
//!
//! - [`ReportClient`]: typed operations, one per report
//! - [`ApiClient`]: authenticated GET plus JSON decoding
//! - [`HttpClient`](crate::http::HttpClient): transport, one attempt per call
//! - No retries and no caching; a failed call is reported, not repeated

pub mod auth;
pub mod client;
pub mod errors;
pub mod query;
pub mod reports;
pub mod routes;

pub use auth::Credentials;
pub use client::{ApiClient, ApiClientBuilder, ApiClientConfig};
pub use errors::{ApiError, ApiErrorCategory, EnsureSuccess};
pub use query::encode_query;
pub use reports::ReportClient;
