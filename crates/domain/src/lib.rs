//! # SalesDesk Domain
//!
//! Report payloads and configuration types for SalesDesk.
//!
//! This crate contains:
//! - Typed response shapes for the sales, manager and team reports
//! - Query parameter types, one per report
//! - Configuration structures
//! - Domain error types and Result definitions
//!
//! ## Architecture
//! - No dependencies on other SalesDesk crates
//! - No I/O; everything here is plain data

pub mod config;
pub mod constants;
pub mod errors;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
