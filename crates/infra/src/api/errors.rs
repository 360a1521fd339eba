//! API-specific error types
//!
//! Every failure a report request can hit ends up as an [`ApiError`]. The
//! constructors here are the single place where transport errors and
//! non-2xx responses are turned into something a caller can show a user.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::StatusCode;
use salesdesk_domain::constants::MAX_ERROR_BODY_CHARS;
use salesdesk_domain::ApiEnvelope;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Categories of API errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorCategory {
    /// Authentication errors (401, 403)
    Authentication,
    /// Rate limiting errors (429)
    RateLimit,
    /// Server errors (5xx)
    Server,
    /// Client errors (4xx except auth) and rejected input
    Client,
    /// Network/connection errors and timeouts
    Network,
    /// Response body did not match the expected shape
    Decode,
    /// 2xx response carrying `success: false`
    Rejected,
    /// Configuration errors
    Config,
}

/// API operation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    #[error("Invalid response: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Request rejected: {0}")]
    Rejected(String),
}

/// Error body shape the report API uses for failures
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    errors: Option<BTreeMap<String, Value>>,
}

impl ApiError {
    /// Get the error category for this error
    pub fn category(&self) -> ApiErrorCategory {
        match self {
            Self::Auth(_) => ApiErrorCategory::Authentication,
            Self::RateLimit(_) => ApiErrorCategory::RateLimit,
            Self::Server(_) => ApiErrorCategory::Server,
            Self::Client(_) | Self::InvalidInput(_) => ApiErrorCategory::Client,
            Self::Network(_) | Self::Timeout(_) => ApiErrorCategory::Network,
            Self::Decode(_) => ApiErrorCategory::Decode,
            Self::Rejected(_) => ApiErrorCategory::Rejected,
            Self::Config(_) => ApiErrorCategory::Config,
        }
    }

    /// Message suitable for showing to a user, without the category prefix.
    pub fn message(&self) -> String {
        match self {
            Self::Auth(message)
            | Self::RateLimit(message)
            | Self::Server(message)
            | Self::Client(message)
            | Self::Network(message)
            | Self::Decode(message)
            | Self::InvalidInput(message)
            | Self::Config(message)
            | Self::Rejected(message) => message.clone(),
            Self::Timeout(_) => self.to_string(),
        }
    }

    /// Normalize a failure raised by the transport.
    ///
    /// `timeout` is the configured request timeout, reported back when the
    /// failure was a timeout.
    pub fn from_transport(err: &reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            return Self::Timeout(timeout);
        }

        if err.is_connect() {
            return Self::Network(format!("connection failed: {err}"));
        }

        if err.is_builder() {
            return Self::Config(format!("invalid request: {err}"));
        }

        if err.is_decode() || err.is_body() {
            return Self::Decode(format!("failed to read response body: {err}"));
        }

        if let Some(status) = err.status() {
            let url = err.url().map(ToString::to_string).unwrap_or_default();
            return Self::from_status(status, &url, "");
        }

        Self::Network(err.to_string())
    }

    /// Normalize a non-2xx response.
    ///
    /// A structured API error body supplies the message; otherwise the
    /// message names the URL and status and includes the raw body, truncated.
    pub fn from_status(status: StatusCode, url: &str, body: &str) -> Self {
        let message = structured_message(body).unwrap_or_else(|| {
            let body = body.trim();
            if body.is_empty() {
                format!("{} returned status {}", url, status)
            } else {
                format!("{} returned status {}: {}", url, status, truncate(body))
            }
        });

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            Self::Auth(message)
        } else if status == StatusCode::TOO_MANY_REQUESTS {
            Self::RateLimit(message)
        } else if status.is_server_error() {
            Self::Server(message)
        } else if status.is_client_error() {
            Self::Client(message)
        } else {
            Self::Network(message)
        }
    }

    /// Normalize a 2xx body that could not be decoded into the expected type.
    pub fn from_decode(err: &serde_json::Error, url: &str) -> Self {
        Self::Decode(format!("{} sent an unexpected body: {}", url, err))
    }
}

fn structured_message(body: &str) -> Option<String> {
    let parsed: ErrorBody = serde_json::from_str(body).ok()?;
    let message = parsed
        .message
        .or(parsed.error)
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty())?;

    let details: Vec<String> = parsed
        .errors
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(field, value)| first_error(&value).map(|e| format!("{field}: {e}")))
        .collect();

    if details.is_empty() {
        Some(message)
    } else {
        Some(format!("{} ({})", message, details.join("; ")))
    }
}

/// Validation errors arrive either as `"field": "msg"` or `"field": ["msg", ...]`.
fn first_error(value: &Value) -> Option<String> {
    match value {
        Value::String(message) => Some(message.clone()),
        Value::Array(items) => items.iter().find_map(|item| item.as_str().map(str::to_string)),
        _ => None,
    }
}

fn truncate(body: &str) -> String {
    if body.chars().count() <= MAX_ERROR_BODY_CHARS {
        body.to_string()
    } else {
        let mut cut: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
        cut.push_str("...");
        cut
    }
}

/// Opt-in check for envelopes that came back with `success: false`.
///
/// The report client hands such envelopes back untouched; callers that want
/// them treated as errors call this.
pub trait EnsureSuccess: Sized {
    fn ensure_success(self) -> Result<Self, ApiError>;
}

impl<T> EnsureSuccess for ApiEnvelope<T> {
    fn ensure_success(self) -> Result<Self, ApiError> {
        if self.success {
            Ok(self)
        } else {
            Err(ApiError::Rejected(self.message))
        }
    }
}

#[cfg(test)]
mod tests {
    use salesdesk_domain::ListPayload;

    use super::*;

    const URL: &str = "http://api.test/sales/EMP-1/invoice";

    #[test]
    fn test_error_categories() {
        assert_eq!(
            ApiError::Auth("test".to_string()).category(),
            ApiErrorCategory::Authentication
        );
        assert_eq!(
            ApiError::RateLimit("test".to_string()).category(),
            ApiErrorCategory::RateLimit
        );
        assert_eq!(ApiError::Server("test".to_string()).category(), ApiErrorCategory::Server);
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(1)).category(),
            ApiErrorCategory::Network
        );
        assert_eq!(
            ApiError::InvalidInput("test".to_string()).category(),
            ApiErrorCategory::Client
        );
        assert_eq!(ApiError::Decode("test".to_string()).category(), ApiErrorCategory::Decode);
    }

    #[test]
    fn status_mapping_follows_status_class() {
        assert!(matches!(
            ApiError::from_status(StatusCode::UNAUTHORIZED, URL, ""),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::FORBIDDEN, URL, ""),
            ApiError::Auth(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, URL, ""),
            ApiError::RateLimit(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::BAD_GATEWAY, URL, ""),
            ApiError::Server(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::NOT_FOUND, URL, ""),
            ApiError::Client(_)
        ));
        assert!(matches!(
            ApiError::from_status(StatusCode::MULTIPLE_CHOICES, URL, ""),
            ApiError::Network(_)
        ));
    }

    #[test]
    fn structured_body_supplies_the_message() {
        let body = r#"{ "success": false, "message": "Invoice not found" }"#;
        let err = ApiError::from_status(StatusCode::NOT_FOUND, URL, body);

        assert_eq!(err, ApiError::Client("Invoice not found".to_string()));
        assert_eq!(err.message(), "Invoice not found");
    }

    #[test]
    fn validation_errors_are_appended() {
        let body = r#"{
            "message": "The given data was invalid.",
            "errors": { "year": ["The year must be an integer."] }
        }"#;
        let err = ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, URL, body);

        assert_eq!(
            err.message(),
            "The given data was invalid. (year: The year must be an integer.)"
        );
    }

    #[test]
    fn unstructured_body_falls_back_to_status_message() {
        let err =
            ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, URL, "<html>boom</html>");

        assert_eq!(
            err.message(),
            format!("{} returned status 500 Internal Server Error: <html>boom</html>", URL)
        );
    }

    #[test]
    fn empty_body_names_url_and_status() {
        let err = ApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, URL, "  ");
        assert_eq!(err.message(), format!("{} returned status 503 Service Unavailable", URL));
    }

    #[test]
    fn blank_structured_message_is_ignored() {
        let err = ApiError::from_status(StatusCode::BAD_REQUEST, URL, r#"{ "message": "" }"#);
        assert!(err.message().contains("returned status 400"));
    }

    #[test]
    fn long_bodies_are_truncated() {
        let body = "x".repeat(MAX_ERROR_BODY_CHARS * 2);
        let err = ApiError::from_status(StatusCode::BAD_GATEWAY, URL, &body);

        assert!(err.message().ends_with("..."));
        assert!(err.message().len() < body.len());
    }

    #[test]
    fn ensure_success_rejects_logical_failures() {
        let envelope: ApiEnvelope<ListPayload<String>> = ApiEnvelope {
            success: false,
            message: "Employee has no invoices".to_string(),
            data: None,
        };

        let err = envelope.ensure_success().unwrap_err();
        assert_eq!(err, ApiError::Rejected("Employee has no invoices".to_string()));
        assert_eq!(err.category(), ApiErrorCategory::Rejected);
    }

    #[test]
    fn ensure_success_passes_successful_envelopes_through() {
        let envelope = ApiEnvelope {
            success: true,
            message: "ok".to_string(),
            data: Some(ListPayload::<String>::default()),
        };

        assert_eq!(envelope.clone().ensure_success(), Ok(envelope));
    }
}
