//! Request and result shapes for the provider summary flow.
//!
//! `SummarizeResult` doubles as the declared output schema sent to the model,
//! and `from_backend_text` is the validation step applied to every response.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// The backend answered, but not with the declared output shape.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid summary response: {reason}")]
pub struct ValidationError {
    /// What was wrong with the payload
    pub reason: String,
    /// The payload as received (after fence stripping)
    pub payload: String,
}

impl ValidationError {
    fn new(reason: impl Into<String>, payload: &str) -> Self {
        Self {
            reason: reason.into(),
            payload: payload.to_string(),
        }
    }
}

/// Free-text details of a healthcare provider to be summarized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SummarizeRequest {
    /// The details of the healthcare provider to summarize.
    pub provider_details: String,
}

impl SummarizeRequest {
    pub fn new(provider_details: impl Into<String>) -> Self {
        Self {
            provider_details: provider_details.into(),
        }
    }

    /// True for empty or whitespace-only details
    pub fn is_blank(&self) -> bool {
        self.provider_details.trim().is_empty()
    }
}

/// Structured summary output from the LLM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SummarizeResult {
    /// A concise summary of the healthcare provider.
    pub summary: String,
}

impl SummarizeResult {
    /// Validate raw backend output against the declared `{ summary: string }` shape.
    ///
    /// Markdown code fences around the JSON are tolerated. A missing or
    /// non-string `summary`, or one that is blank, is rejected.
    /// The returned summary is trimmed of surrounding whitespace.
    pub fn from_backend_text(text: &str) -> Result<Self, ValidationError> {
        let cleaned = strip_markdown_json(text);

        let value: Value = serde_json::from_str(&cleaned)
            .map_err(|e| ValidationError::new(format!("not valid JSON ({})", e), &cleaned))?;

        let object = value
            .as_object()
            .ok_or_else(|| ValidationError::new("expected a JSON object", &cleaned))?;

        let summary = match object.get("summary") {
            Some(Value::String(s)) => s.trim(),
            Some(other) => {
                return Err(ValidationError::new(
                    format!("`summary` must be a string, got {}", json_type_name(other)),
                    &cleaned,
                ))
            }
            None => return Err(ValidationError::new("missing `summary` field", &cleaned)),
        };

        if summary.is_empty() {
            return Err(ValidationError::new("`summary` is empty", &cleaned));
        }

        Ok(Self {
            summary: summary.to_string(),
        })
    }

    /// The output schema as pretty-printed JSON, for embedding in prompts
    pub fn schema_json() -> String {
        let schema = schemars::schema_for!(SummarizeResult);
        serde_json::to_string_pretty(&schema).unwrap_or_else(|_| r#"{"summary": "string"}"#.into())
    }
}

/// Strip markdown code block wrappers from JSON response
fn strip_markdown_json(text: &str) -> String {
    let trimmed = text.trim();

    if let Some(rest) = trimmed.strip_prefix("```") {
        let without_prefix = rest.strip_prefix("json").unwrap_or(rest);
        if let Some(end_idx) = without_prefix.rfind("```") {
            return without_prefix[..end_idx].trim().to_string();
        }
    }

    trimmed.to_string()
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_json() {
        let result = SummarizeResult::from_backend_text(r#"{"summary": "Pediatrician, 10 years."}"#)
            .unwrap();
        assert_eq!(result.summary, "Pediatrician, 10 years.");
    }

    #[test]
    fn accepts_fenced_json() {
        let text = "```json\n{\"summary\": \"Cardiologist.\"}\n```";
        let result = SummarizeResult::from_backend_text(text).unwrap();
        assert_eq!(result.summary, "Cardiologist.");

        let bare_fence = "```\n{\"summary\": \"Surgeon.\"}\n```";
        assert_eq!(
            SummarizeResult::from_backend_text(bare_fence).unwrap().summary,
            "Surgeon."
        );
    }

    #[test]
    fn summary_is_trimmed() {
        let result = SummarizeResult::from_backend_text("{\"summary\": \"  Pediatrician.\\n\"}").unwrap();
        assert_eq!(result.summary, "Pediatrician.");
    }

    #[test]
    fn rejects_missing_summary_field() {
        let err = SummarizeResult::from_backend_text(r#"{"unexpectedField": "x"}"#).unwrap_err();
        assert!(err.reason.contains("missing `summary`"));
        assert_eq!(err.payload, r#"{"unexpectedField": "x"}"#);
    }

    #[test]
    fn rejects_non_string_summary() {
        let err = SummarizeResult::from_backend_text(r#"{"summary": 42}"#).unwrap_err();
        assert!(err.reason.contains("a number"));

        let err = SummarizeResult::from_backend_text(r#"{"summary": null}"#).unwrap_err();
        assert!(err.reason.contains("null"));
    }

    #[test]
    fn rejects_blank_summary() {
        let err = SummarizeResult::from_backend_text(r#"{"summary": "   "}"#).unwrap_err();
        assert!(err.reason.contains("empty"));
    }

    #[test]
    fn rejects_non_object_and_plain_text() {
        assert!(SummarizeResult::from_backend_text(r#"["summary"]"#).is_err());
        assert!(SummarizeResult::from_backend_text("Dr. Doe is a pediatrician.").is_err());
    }

    #[test]
    fn blank_requests_are_detected() {
        assert!(SummarizeRequest::new("").is_blank());
        assert!(SummarizeRequest::new(" \n\t ").is_blank());
        assert!(!SummarizeRequest::new("Dr. Jane Doe").is_blank());
    }

    #[test]
    fn request_uses_camel_case_on_the_wire() {
        let json = serde_json::to_string(&SummarizeRequest::new("x")).unwrap();
        assert_eq!(json, r#"{"providerDetails":"x"}"#);
    }

    #[test]
    fn schema_names_summary_property() {
        let schema = SummarizeResult::schema_json();
        assert!(schema.contains("\"summary\""));
        assert!(schema.contains("string"));
    }
}
