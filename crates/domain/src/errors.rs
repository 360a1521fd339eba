//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SalesDesk
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SalesDeskError {
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for SalesDesk operations
pub type Result<T> = std::result::Result<T, SalesDeskError>;
