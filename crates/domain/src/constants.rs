//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Configuration defaults
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;
pub const DEFAULT_LOG_LEVEL: &str = "info";

// Error bodies longer than this are cut before being embedded in messages
pub const MAX_ERROR_BODY_CHARS: usize = 512;
