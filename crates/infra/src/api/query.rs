//! Query string encoding for report parameters

use serde::Serialize;

use super::errors::ApiError;

/// Encode a parameter struct as a URL query string (without the leading `?`).
///
/// `None` fields marked `skip_serializing_if` are omitted; numbers are
/// written bare, so `{ year: 2024 }` becomes `year=2024`.
pub fn encode_query<Q>(params: &Q) -> Result<String, ApiError>
where
    Q: Serialize + ?Sized,
{
    serde_html_form::to_string(params)
        .map_err(|e| ApiError::InvalidInput(format!("failed to encode query parameters: {e}")))
}
