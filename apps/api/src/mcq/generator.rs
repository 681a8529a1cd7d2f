//! MCQ generation — prompt assembly, the single Gemini call, and
//! classification of the outcome into the typed result the handler returns.

use async_trait::async_trait;
use tracing::{error, warn};

use crate::errors::AppError;
use crate::llm_client::{GeminiClient, GenerateContentResponse, LlmError};
use crate::mcq::prompts::build_mcq_prompt;

/// Failure message when the call succeeds but no candidate text is usable.
pub const NO_CONTENT_ERROR: &str =
    "Error: No content generated or unexpected response structure from Gemini.";

/// The generation seam consumed by the handler.
/// Production implementation: [`GeminiClient`]. Tests substitute canned models.
#[async_trait]
pub trait McqGenerator: Send + Sync {
    /// Produces the raw MCQ text for a topic, or a typed failure.
    async fn generate(&self, topic: &str, content: &str, pyqs: &str)
        -> Result<String, AppError>;
}

#[async_trait]
impl McqGenerator for GeminiClient {
    /// Builds the prompt and makes exactly one generation call.
    async fn generate(
        &self,
        topic: &str,
        content: &str,
        pyqs: &str,
    ) -> Result<String, AppError> {
        let prompt = build_mcq_prompt(topic, content, pyqs);
        classify_generation(self.generate_content(&prompt).await)
    }
}

/// Maps the call outcome to a typed result:
/// - usable candidate text is returned verbatim
/// - a blocked prompt fails, with the filter feedback in the message
/// - an empty response fails with the fixed fallback message
/// - a failed call fails with "Error generating MCQs: <detail>"
pub fn classify_generation(
    result: Result<GenerateContentResponse, LlmError>,
) -> Result<String, AppError> {
    match result {
        Ok(response) => {
            if let Some(text) = response.text() {
                return Ok(text);
            }
            if let Some(reason) = response.block_reason() {
                warn!("Gemini blocked the prompt: {reason}");
                return Err(AppError::Generation(format!(
                    "Error generating MCQs: Content Filtered by API. Prompt Feedback: {reason}"
                )));
            }
            Err(AppError::Generation(NO_CONTENT_ERROR.to_string()))
        }
        Err(e) => {
            error!("Gemini call failed: {e}");
            Err(AppError::Generation(format!("Error generating MCQs: {e}")))
        }
    }
}

/// Success text containing "Error:" is still reported as a failed generation.
/// This conflates legitimate model output containing that phrase with real
/// failures; kept for output compatibility. Real upstream failures no longer
/// pass through here — they already surfaced as [`AppError::Generation`].
pub fn is_generation_error(text: &str) -> bool {
    text.contains("Error:")
}
