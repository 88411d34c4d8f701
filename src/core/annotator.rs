//! Annotation service abstraction
//!
//! Defines the common trait for annotation backends and the error type every
//! backend reports. Each error variant carries the service name so its
//! `Display` output is a complete, human-readable message.

use crate::models::annotation::AnnotationRequest;
use async_trait::async_trait;
use thiserror::Error;

/// Error types for annotation calls
#[derive(Debug, Error)]
pub enum AnnotationError {
    #[error("{service} permission error")]
    Permission { service: String },

    #[error("{service} error {body}")]
    Service {
        service: String,
        status: u16,
        body: String,
    },

    #[error("{service} exception: {detail}")]
    Transport { service: String, detail: String },

    #[error("{service} exception: {detail}")]
    MalformedResponse { service: String, detail: String },
}

impl AnnotationError {
    /// HTTP status returned by the service, when one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            AnnotationError::Permission { .. } => Some(403),
            AnnotationError::Service { status, .. } => Some(*status),
            AnnotationError::Transport { .. } | AnnotationError::MalformedResponse { .. } => None,
        }
    }
}

/// Trait for annotation services
#[async_trait]
pub trait Annotator: Send + Sync {
    /// Create an annotation and return the URL of its viewer page
    async fn annotate(&self, request: &AnnotationRequest) -> Result<String, AnnotationError>;

    /// Create an annotation and render the outcome as a single string
    ///
    /// Returns the viewer URL on success, otherwise the error message.
    async fn run(&self, input_text: &str, generated_text: &str, checklist: &[String]) -> String {
        let request = AnnotationRequest::new(input_text, generated_text)
            .with_checklist(checklist.iter().cloned());

        match self.annotate(&request).await {
            Ok(url) => url,
            Err(e) => e.to_string(),
        }
    }

    /// Get the service name
    fn service_name(&self) -> &str;
}
