//! The provider summary prompt template.

use crate::summary::{SummarizeRequest, SummarizeResult};

/// Name the prompt is registered under in logs
pub const PROMPT_NAME: &str = "summarizeProviderDetailsPrompt";

/// Fixed instruction preceding the provider details
pub const INSTRUCTION: &str = "Summarize the following details of a healthcare provider:";

/// Render the full prompt for one request: instruction, details, and the
/// declared output shape.
pub fn render(request: &SummarizeRequest) -> String {
    format!(
        r#"{}

Details: {}

You MUST respond with valid JSON matching this exact schema:
{}

Do not include any markdown formatting, code blocks, or explanations. Only output the raw JSON object."#,
        INSTRUCTION,
        request.provider_details,
        SummarizeResult::schema_json()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_instruction_and_interpolates_details() {
        let prompt = render(&SummarizeRequest::new("Dr. Priya Sharma, General Physician"));
        assert!(prompt.starts_with(INSTRUCTION));
        assert!(prompt.contains("\n\nDetails: Dr. Priya Sharma, General Physician\n"));
    }

    #[test]
    fn details_are_sent_verbatim() {
        let details = "  {{braces}} and \"quotes\"\nsecond line  ";
        let prompt = render(&SummarizeRequest::new(details));
        assert!(prompt.contains(details));
    }

    #[test]
    fn declares_output_schema() {
        let prompt = render(&SummarizeRequest::new("x"));
        assert!(prompt.contains("\"summary\""));
        assert!(prompt.contains("Only output the raw JSON object."));
    }
}
