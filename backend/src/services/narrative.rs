//! Narrative generation via the chat-completion provider

use crate::error::AppResult;
use crate::external::openai::{ChatCompletion, OpenAiClient};

/// Wraps the chat-completion client behind the fixed report prompt
#[derive(Clone)]
pub struct NarrativeGenerator {
    client: OpenAiClient,
}

impl NarrativeGenerator {
    /// Create a new NarrativeGenerator around a configured client
    pub fn new(client: OpenAiClient) -> Self {
        Self { client }
    }

    /// Ask the model for a detailed report and clothing recommendations
    /// based on the formatted weather paragraph
    pub async fn generate(&self, weather_report: &str) -> AppResult<ChatCompletion> {
        let prompt = build_prompt(weather_report);
        self.client.complete(&prompt).await
    }
}

/// Fill the fixed prompt template with the formatted report
fn build_prompt(weather_report: &str) -> String {
    format!(
        "Provide a detailed report of the weather with the information. \
         After that, recommend clothes to wear:\n{}",
        weather_report
    )
}
