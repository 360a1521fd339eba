//! # SalesDesk Infrastructure
//!
//! I/O side of the SalesDesk report client.
//!
//! This crate contains:
//! - HTTP transport built on reqwest
//! - The report API client and its error normalization
//! - Configuration loading (environment and JSON/TOML files)
//! - Logging setup
//!
//! ## Architecture
//! - Depends on `salesdesk-domain` for payload and config types
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod http;
pub mod observability;

// Re-export commonly used items
pub use api::{
    ApiClient, ApiClientConfig, ApiError, ApiErrorCategory, Credentials, EnsureSuccess,
    ReportClient,
};
pub use http::{HttpClient, HttpClientBuilder};
pub use observability::init_tracing;
