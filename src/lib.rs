//! Validator annotation client
//!
//! Sends an input text, the text a language model generated for it, and an
//! optional checklist to the Validator service, which returns the URL of a
//! page visualizing the output.
//!
//! ```no_run
//! use validator_client::{Annotator, AnnotationRequest, ValidatorClient};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ValidatorClient::new(None)?;
//! let request = AnnotationRequest::new(
//!     "An apple is red. A banana is yellow. What color is an apple?",
//!     "An apple is red",
//! );
//! let url = client.annotate(&request).await?;
//! println!("{}", url);
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod models;

pub use crate::core::annotator::{AnnotationError, Annotator};
pub use crate::core::client::ValidatorClient;
pub use crate::core::config::{Config, ConfigError};
pub use crate::models::annotation::{AnnotationRequest, DocId};
