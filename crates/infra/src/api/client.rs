//! API client for the report endpoints
//!
//! Issues authenticated GET requests and decodes the body into the caller's
//! type. One request per call; every failure is normalized into
//! [`ApiError`].

use std::time::Duration;

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Method;
use salesdesk_domain::constants::{DEFAULT_API_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
use salesdesk_domain::ApiConfig;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, instrument, warn};

use super::auth::Credentials;
use super::errors::ApiError;
use super::query::encode_query;
use crate::http::HttpClient;

/// Configuration for API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClientConfig {
    /// Base URL for API (e.g., "https://erp.example.com/api")
    pub base_url: String,
    /// Timeout for API requests
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for ApiClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: None,
        }
    }
}

impl From<&ApiConfig> for ApiClientConfig {
    fn from(config: &ApiConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            timeout: Duration::from_secs(config.timeout_seconds),
            user_agent: config.user_agent.clone(),
        }
    }
}

/// Authenticated JSON GET client
pub struct ApiClient {
    http_client: HttpClient,
    config: ApiClientConfig,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Errors
    ///
    /// Returns error if the base URL is empty or the HttpClient cannot be
    /// created
    pub fn new(config: ApiClientConfig) -> Result<Self, ApiError> {
        let mut builder = HttpClient::builder().timeout(config.timeout);
        if let Some(agent) = &config.user_agent {
            builder = builder.user_agent(agent.clone());
        }

        let http_client = builder
            .build()
            .map_err(|e| ApiError::Config(format!("Failed to build HttpClient: {}", e)))?;

        Self::with_http_client(config, http_client)
    }

    /// Create a client over an already configured transport
    pub fn with_http_client(
        config: ApiClientConfig,
        http_client: HttpClient,
    ) -> Result<Self, ApiError> {
        if config.base_url.trim().is_empty() {
            return Err(ApiError::Config("API base URL is empty".to_string()));
        }

        Ok(Self { http_client, config })
    }

    /// Create a builder for fluent configuration
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    pub fn config(&self) -> &ApiClientConfig {
        &self.config
    }

    /// Execute a GET request without a query string
    ///
    /// # Errors
    ///
    /// Returns error if the request fails, the API answers with a non-2xx
    /// status, or the body does not decode into `T`
    #[instrument(skip(self, credentials), fields(path = %path))]
    pub async fn get<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        path: &str,
    ) -> Result<T, ApiError> {
        self.execute_get(credentials, path, None).await
    }

    /// Execute a GET request with `query` encoded as the query string
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::get`], plus a failure to encode `query`
    #[instrument(skip(self, credentials, query), fields(path = %path))]
    pub async fn get_with_query<T, Q>(
        &self,
        credentials: &Credentials,
        path: &str,
        query: &Q,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let query = encode_query(query).map_err(|e| Self::normalized(path, e))?;
        self.execute_get(credentials, path, Some(query)).await
    }

    async fn execute_get<T: DeserializeOwned>(
        &self,
        credentials: &Credentials,
        path: &str,
        query: Option<String>,
    ) -> Result<T, ApiError> {
        let mut url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(&query);
        }

        debug!(url = %url, "GET request");

        let authorization = credentials.bearer_header().map_err(|e| {
            Self::normalized(
                path,
                ApiError::InvalidInput(format!("bearer token is not a valid header value: {}", e)),
            )
        })?;

        let request = self
            .http_client
            .request(Method::GET, &url)
            .header(AUTHORIZATION, authorization)
            .header(ACCEPT, "application/json");

        let timeout = self.http_client.timeout();
        let response = self
            .http_client
            .send(request)
            .await
            .map_err(|e| Self::normalized(path, ApiError::from_transport(&e, timeout)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|e| {
                debug!(path = %path, %status, error = %e, "failed to read error body");
                String::new()
            });
            return Err(Self::normalized(path, ApiError::from_status(status, &url, &body)));
        }

        let body = response
            .text()
            .await
            .map_err(|e| Self::normalized(path, ApiError::from_transport(&e, timeout)))?;

        let result = serde_json::from_str(&body)
            .map_err(|e| Self::normalized(path, ApiError::from_decode(&e, &url)))?;

        debug!(path = %path, %status, "GET request successful");
        Ok(result)
    }

    fn normalized(path: &str, err: ApiError) -> ApiError {
        warn!(path = %path, category = ?err.category(), error = %err, "report request failed");
        err
    }
}

/// Builder for API client
#[derive(Default)]
pub struct ApiClientBuilder {
    config: Option<ApiClientConfig>,
    http_client: Option<HttpClient>,
}

impl ApiClientBuilder {
    /// Set the API configuration
    pub fn config(mut self, config: ApiClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Set the base URL, keeping the rest of the configuration
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        let mut config = self.config.take().unwrap_or_default();
        config.base_url = base_url.into();
        self.config = Some(config);
        self
    }

    /// Use an existing transport instead of building one from the config
    pub fn http_client(mut self, http_client: HttpClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Build the API client
    ///
    /// # Errors
    ///
    /// Returns error if client creation fails
    pub fn build(self) -> Result<ApiClient, ApiError> {
        let config = self.config.unwrap_or_default();

        match self.http_client {
            Some(http_client) => ApiClient::with_http_client(config, http_client),
            None => ApiClient::new(config),
        }
    }
}
