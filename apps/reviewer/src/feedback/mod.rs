//! Feedback Generator — asks the LLM for a critique of one resume.
//!
//! The trait is the seam the batch orchestrator depends on; `LlmFeedbackGenerator`
//! is the only production backend.

use async_trait::async_trait;

use crate::llm_client::{LlmClient, LlmError};

pub mod prompts;

use prompts::{FEEDBACK_PROMPT_TEMPLATE, FEEDBACK_SYSTEM};

/// Resume text beyond this many characters is never sent to the model.
pub const MAX_RESUME_CHARS: usize = 8000;

#[async_trait]
pub trait FeedbackGenerator: Send + Sync {
    /// Returns the model's free-text feedback, untouched.
    async fn generate(&self, resume_text: &str) -> Result<String, LlmError>;
}

pub struct LlmFeedbackGenerator {
    llm: LlmClient,
}

impl LlmFeedbackGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl FeedbackGenerator for LlmFeedbackGenerator {
    async fn generate(&self, resume_text: &str) -> Result<String, LlmError> {
        let prompt = build_feedback_prompt(resume_text);
        self.llm.generate_text(&prompt, FEEDBACK_SYSTEM).await
    }
}

/// The fixed instructions followed by at most `MAX_RESUME_CHARS` of resume text.
pub fn build_feedback_prompt(resume_text: &str) -> String {
    FEEDBACK_PROMPT_TEMPLATE.replace("{resume_text}", truncate_resume_text(resume_text))
}

/// Cuts on a character boundary; shorter input is returned unchanged.
pub fn truncate_resume_text(text: &str) -> &str {
    match text.char_indices().nth(MAX_RESUME_CHARS) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
