//! LLM provider implementations
//!
//! Concrete implementations of the DraftProvider trait for the hosted
//! LLM services Eventra can be configured with.

use eventra_core::{EventraError, ProviderError};

pub mod anthropic;
mod client;
pub mod openai;

pub use anthropic::AnthropicDraftProvider;
pub use client::ProviderClient;
pub use openai::OpenAIDraftProvider;

// Error construction helpers shared by the provider clients.

pub(crate) fn request_failed(
    provider: &str,
    status: i32,
    message: impl Into<String>,
) -> EventraError {
    EventraError::Provider(ProviderError::RequestFailed {
        provider: provider.to_string(),
        status,
        message: message.into(),
    })
}

pub(crate) fn invalid_response(provider: &str, reason: impl Into<String>) -> EventraError {
    EventraError::Provider(ProviderError::InvalidResponse {
        provider: provider.to_string(),
        reason: reason.into(),
    })
}

pub(crate) fn rate_limited(provider: &str, retry_after_ms: i64) -> EventraError {
    EventraError::Provider(ProviderError::RateLimited {
        provider: provider.to_string(),
        retry_after_ms,
    })
}
