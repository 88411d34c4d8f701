//! Annotation API data models
//!
//! Request and response structures for the Validator annotation endpoint.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Annotation request body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationRequest {
    /// Text given to the language model
    pub input_text: String,
    /// Text the model produced in response
    pub generated_text: String,
    /// Post-hoc criteria the output should meet, in order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checklist: Vec<String>,
}

impl AnnotationRequest {
    pub fn new(input_text: impl Into<String>, generated_text: impl Into<String>) -> Self {
        Self {
            input_text: input_text.into(),
            generated_text: generated_text.into(),
            checklist: Vec::new(),
        }
    }

    pub fn with_checklist<I, S>(mut self, checklist: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.checklist = checklist.into_iter().map(Into::into).collect();
        self
    }
}

/// Opaque document identifier; the service may send a string or a number
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum DocId {
    Text(String),
    Number(serde_json::Number),
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocId::Text(id) => f.write_str(id),
            DocId::Number(id) => write!(f, "{}", id),
        }
    }
}

/// Successful annotation response
#[derive(Debug, Clone, Deserialize)]
pub struct AnnotateResponse {
    pub doc_id: DocId,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_checklist_is_omitted() {
        let request = AnnotationRequest::new("What color is an apple?", "Red");
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({"input_text": "What color is an apple?", "generated_text": "Red"})
        );
    }

    #[test]
    fn test_checklist_keeps_order() {
        let request = AnnotationRequest::new("in", "out").with_checklist(["b first", "a second"]);
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["checklist"], json!(["b first", "a second"]));
    }

    #[test]
    fn test_doc_id_string_or_number() {
        let text: AnnotateResponse = serde_json::from_str(r#"{"doc_id": "abc123"}"#).unwrap();
        assert_eq!(text.doc_id.to_string(), "abc123");

        let number: AnnotateResponse =
            serde_json::from_str(r#"{"doc_id": 42, "status": "created"}"#).unwrap();
        assert_eq!(number.doc_id.to_string(), "42");
    }

    #[test]
    fn test_doc_id_rejects_other_shapes() {
        assert!(serde_json::from_str::<AnnotateResponse>(r#"{"doc_id": null}"#).is_err());
        assert!(serde_json::from_str::<AnnotateResponse>(r#"{"id": "abc"}"#).is_err());
    }
}
