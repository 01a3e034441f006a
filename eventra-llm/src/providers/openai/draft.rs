//! OpenAI draft provider implementation

use super::types::{ChatRequest, ChatResponse, Message, ResponseFormat};
use crate::prompt::{instruction_prompt, parse_draft_json, user_prompt};
use crate::providers::{invalid_response, ProviderClient};
use crate::DraftProvider;
use async_trait::async_trait;
use eventra_core::{EventDraft, EventraResult, GenerationRequest};

const PROVIDER_NAME: &str = "openai";

/// Event-draft provider backed by OpenAI chat completions.
pub struct OpenAIDraftProvider {
    client: ProviderClient,
    model: String,
}

impl OpenAIDraftProvider {
    /// Create a new OpenAI draft provider.
    ///
    /// # Arguments
    /// * `api_key` - OpenAI API key
    /// * `model` - Model name (e.g., "gpt-4o-mini")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let api_key = api_key.into();
        let client = ProviderClient::new(
            "openai",
            "https://api.openai.com/v1",
            vec![("authorization", format!("Bearer {}", api_key))],
            60,
        );
        Self {
            client,
            model: model.into(),
        }
    }

    /// Create a provider with the default model.
    pub fn with_default_model(api_key: impl Into<String>) -> Self {
        Self::new(api_key, "gpt-4o-mini")
    }
}

#[async_trait]
impl DraftProvider for OpenAIDraftProvider {
    async fn generate_draft(&self, request: &GenerationRequest) -> EventraResult<EventDraft> {
        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                Message {
                    role: "system".to_string(),
                    content: instruction_prompt().to_string(),
                },
                Message {
                    role: "user".to_string(),
                    content: user_prompt(request),
                },
            ],
            max_tokens: Some(1024),
            temperature: Some(0.7),
            response_format: Some(ResponseFormat::json_object()),
        };

        let response: ChatResponse = self.client.post("chat/completions", body).await?;

        let content = response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| invalid_response(PROVIDER_NAME, "Response contained no choices"))?;

        parse_draft_json(PROVIDER_NAME, &content)
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}

impl std::fmt::Debug for OpenAIDraftProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIDraftProvider")
            .field("model", &self.model)
            .finish()
    }
}
