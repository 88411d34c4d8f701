//! Validator annotation client
//!
//! This module provides the async HTTP client for the Validator annotation
//! service. Each call sends a single authenticated POST with no retries and
//! maps the response status onto an [`AnnotationError`] variant.

use crate::core::annotator::{AnnotationError, Annotator};
use crate::core::config::{Config, ConfigError, resolve_api_key};
use crate::core::constants::{env, path, query, service};
use crate::models::annotation::{AnnotateResponse, AnnotationRequest, DocId};
use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use std::error::Error as StdError;
use tracing::{debug, info, warn};

/// Validator async client
pub struct ValidatorClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl ValidatorClient {
    /// Create a client for the public Validator service
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key; `VALIDATOR_API_KEY` is used when `None` or empty
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingApiKey` if neither source yields a key.
    pub fn new(api_key: Option<String>) -> Result<Self, ConfigError> {
        Self::with_lookup(api_key, |name| std::env::var(name).ok())
    }

    /// Same as [`ValidatorClient::new`] over an arbitrary variable lookup
    pub fn with_lookup<F>(api_key: Option<String>, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = resolve_api_key(api_key, env::API_KEY, lookup)?;
        Self::with_base_url(api_key, service::DEFAULT_BASE_URL)
    }

    /// Create a client from loaded configuration
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let api_key = config.resolve_api_key()?;
        Self::with_base_url(api_key, &config.base_url)
    }

    /// Create a client with an explicit key and service host
    ///
    /// # Arguments
    ///
    /// * `api_key` - API key sent as a bearer token
    /// * `base_url` - Service host, e.g. `https://validator.minions.farm`
    pub fn with_base_url(api_key: impl Into<String>, base_url: &str) -> Result<Self, ConfigError> {
        let api_key = resolve_api_key(Some(api_key.into()), env::API_KEY, |_| None)?;
        let base_url = validate_base_url(base_url)?;

        let client = Client::builder()
            .build()
            .map_err(|e| ConfigError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            api_key,
            base_url,
        })
    }

    /// Service host this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the viewer URL for a created annotation
    fn viewer_url(&self, doc_id: &DocId) -> Result<String, AnnotationError> {
        let endpoint = format!("{}{}", self.base_url, path::ANNOTATIONS);
        Url::parse_with_params(&endpoint, &[(query::DOC_ID, doc_id.to_string())])
            .map(String::from)
            .map_err(|e| malformed(e.to_string()))
    }
}

#[async_trait]
impl Annotator for ValidatorClient {
    async fn annotate(&self, request: &AnnotationRequest) -> Result<String, AnnotationError> {
        let request_id = uuid::Uuid::new_v4().to_string();
        let url = format!("{}{}", self.base_url, path::ANNOTATE);

        debug!(
            request_id = %request_id,
            checklist_items = request.checklist.len(),
            "Sending annotation request to {}",
            url
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                warn!(request_id = %request_id, "Annotation request failed: {}", e);
                transport(&e)
            })?;

        let status = response.status();

        match status {
            StatusCode::OK => {
                let body = response.bytes().await.map_err(|e| transport(&e))?;
                let parsed: AnnotateResponse = serde_json::from_slice(&body).map_err(|e| {
                    warn!(request_id = %request_id, "Malformed annotation response: {}", e);
                    malformed(format!("Failed to parse response: {}", e))
                })?;

                let viewer_url = self.viewer_url(&parsed.doc_id)?;
                info!(
                    request_id = %request_id,
                    doc_id = %parsed.doc_id,
                    "Annotation created"
                );
                Ok(viewer_url)
            }
            StatusCode::FORBIDDEN => {
                warn!(request_id = %request_id, "Annotation rejected: permission denied");
                Err(AnnotationError::Permission {
                    service: service::NAME.to_string(),
                })
            }
            _ => {
                let body = response.text().await.map_err(|e| {
                    warn!(request_id = %request_id, "Failed to read error body: {}", e);
                    transport(&e)
                })?;
                warn!(
                    request_id = %request_id,
                    status = status.as_u16(),
                    "Annotation service returned an error"
                );
                Err(AnnotationError::Service {
                    service: service::NAME.to_string(),
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }

    fn service_name(&self) -> &str {
        service::NAME
    }
}

fn transport(error: &reqwest::Error) -> AnnotationError {
    AnnotationError::Transport {
        service: service::NAME.to_string(),
        detail: error_chain(error),
    }
}

fn malformed(detail: String) -> AnnotationError {
    AnnotationError::MalformedResponse {
        service: service::NAME.to_string(),
        detail,
    }
}

/// Check that a base URL is an absolute http(s) URL and strip trailing slashes
fn validate_base_url(base_url: &str) -> Result<String, ConfigError> {
    let trimmed = base_url.trim().trim_end_matches('/');
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let parsed = Url::parse(trimmed).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(invalid(format!("unsupported scheme '{}'", other))),
    }
}

/// Render an error together with its source chain
///
/// reqwest keeps the useful part (e.g. "Connection refused") in the sources.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
