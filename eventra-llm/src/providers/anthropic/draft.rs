//! Anthropic draft provider implementation

use super::types::{ContentBlock, Message, MessageRequest, MessageResponse};
use crate::prompt::{instruction_prompt, parse_draft_json, user_prompt};
use crate::providers::{invalid_response, ProviderClient};
use crate::DraftProvider;
use async_trait::async_trait;
use eventra_core::{EventDraft, EventraResult, GenerationRequest};

const PROVIDER_NAME: &str = "anthropic";

/// Event-draft provider backed by the Anthropic messages API.
pub struct AnthropicDraftProvider {
    client: ProviderClient,
    model: String,
}

impl AnthropicDraftProvider {
    /// Create a new Anthropic draft provider.
    ///
    /// # Arguments
    /// * `api_key` - Anthropic API key
    /// * `model` - Model name (e.g., "claude-3-5-haiku-20241022")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = ProviderClient::new(
            "anthropic",
            "https://api.anthropic.com/v1",
            vec![
                ("x-api-key", api_key.into()),
                ("anthropic-version", "2023-06-01".to_string()),
            ],
            50,
        );
        Self {
            client,
            model: model.into(),
        }
    }

    /// Create a provider with the default model.
    pub fn with_default_model(api_key: impl Into<String>) -> Self {
        Self::new(api_key, "claude-3-5-haiku-20241022")
    }

    /// Concatenate text content blocks.
    fn extract_text(content: Vec<ContentBlock>) -> String {
        content
            .into_iter()
            .map(|block| match block {
                ContentBlock::Text { text } => text,
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[async_trait]
impl DraftProvider for AnthropicDraftProvider {
    async fn generate_draft(&self, request: &GenerationRequest) -> EventraResult<EventDraft> {
        let body = MessageRequest {
            model: self.model.clone(),
            system: Some(instruction_prompt().to_string()),
            messages: vec![Message {
                role: "user".to_string(),
                content: user_prompt(request),
            }],
            max_tokens: 1024,
            temperature: Some(0.7),
        };

        let response: MessageResponse = self.client.post("messages", body).await?;
        let text = Self::extract_text(response.content);

        if text.trim().is_empty() {
            return Err(invalid_response(
                PROVIDER_NAME,
                "Response contained no text content",
            ));
        }

        parse_draft_json(PROVIDER_NAME, &text)
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

impl std::fmt::Debug for AnthropicDraftProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnthropicDraftProvider")
            .field("model", &self.model)
            .finish()
    }
}
