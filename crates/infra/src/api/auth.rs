//! Bearer credentials for report requests
//!
//! The session store that issues tokens lives outside this crate. Callers
//! hand a [`Credentials`] to every report operation.

use std::fmt;

use reqwest::header::{HeaderValue, InvalidHeaderValue};

/// Bearer token attached to a single request
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    /// Wrap a bearer token.
    ///
    /// An empty token is accepted and sent as `Bearer `; rejecting it is the
    /// session store's job.
    pub fn bearer(token: impl Into<String>) -> Self {
        Self { token: token.into() }
    }

    /// Value for the `Authorization` header.
    pub fn bearer_header(&self) -> Result<HeaderValue, InvalidHeaderValue> {
        let mut value = HeaderValue::from_str(&format!("Bearer {}", self.token))?;
        value.set_sensitive(true);
        Ok(value)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials").field("token", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_bearer_plus_token() {
        let credentials = Credentials::bearer("abc.def.ghi");
        let header = credentials.bearer_header().unwrap();

        assert_eq!(header.to_str().unwrap(), "Bearer abc.def.ghi");
        assert!(header.is_sensitive());
    }

    #[test]
    fn empty_token_still_produces_bearer_prefix() {
        let header = Credentials::bearer("").bearer_header().unwrap();
        assert_eq!(header.as_bytes(), b"Bearer ");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        assert!(Credentials::bearer("abc\ndef").bearer_header().is_err());
    }

    #[test]
    fn debug_output_hides_token() {
        let rendered = format!("{:?}", Credentials::bearer("super-secret"));
        assert!(!rendered.contains("super-secret"));
    }
}
