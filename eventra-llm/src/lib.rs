//! EVENTRA LLM - Draft Generation Layer
//!
//! Provider-agnostic trait for turning a free-text event description into
//! a structured event draft, concrete provider implementations (OpenAI,
//! Anthropic), the deterministic fallback synthesizer, and the sequential
//! coordinator that chains them.

use async_trait::async_trait;
use eventra_core::{EventDraft, EventraResult, GenerationRequest, ProviderError};
use std::sync::atomic::{AtomicUsize, Ordering};

pub mod config;
pub mod coordinator;
pub mod fallback;
pub mod prompt;
pub mod providers;

pub use config::GeneratorConfig;
pub use coordinator::GenerationCoordinator;
pub use fallback::synthesize_draft;
pub use providers::{AnthropicDraftProvider, OpenAIDraftProvider};

// ============================================================================
// DRAFT PROVIDER TRAIT
// ============================================================================

/// Trait for event-draft providers.
/// Implementations must be thread-safe (Send + Sync).
///
/// A provider makes a single attempt per call: any transport failure,
/// non-success status, or malformed response is returned as an error and
/// the coordinator decides what to try next. Providers never retry.
#[async_trait]
pub trait DraftProvider: Send + Sync {
    /// Generate a structured event draft from the request.
    ///
    /// # Returns
    /// * `Ok(EventDraft)` - A shape-validated draft
    /// * `Err(EventraError::Provider)` - If the attempt fails for any reason
    async fn generate_draft(&self, request: &GenerationRequest) -> EventraResult<EventDraft>;

    /// Short identifier for logging (e.g. "openai", "anthropic").
    fn name(&self) -> &'static str;
}

// ============================================================================
// MOCK PROVIDER FOR TESTING
// ============================================================================

/// Mock draft provider for testing.
///
/// Configured to either always succeed with a fixed draft or always fail
/// with a fixed reason, and counts how many times it was called so tests
/// can assert that short-circuiting works.
#[derive(Debug)]
pub struct MockDraftProvider {
    name: &'static str,
    draft: Option<EventDraft>,
    failure: Option<String>,
    calls: AtomicUsize,
}

impl MockDraftProvider {
    /// Create a mock that always returns the given draft.
    pub fn succeeding(name: &'static str, draft: EventDraft) -> Self {
        Self {
            name,
            draft: Some(draft),
            failure: None,
            calls: AtomicUsize::new(0),
        }
    }

    /// Create a mock that always fails with the given reason.
    pub fn failing(name: &'static str, reason: impl Into<String>) -> Self {
        Self {
            name,
            draft: None,
            failure: Some(reason.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of times `generate_draft` has been invoked.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DraftProvider for MockDraftProvider {
    async fn generate_draft(&self, _request: &GenerationRequest) -> EventraResult<EventDraft> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        match (&self.draft, &self.failure) {
            (Some(draft), _) => Ok(draft.clone()),
            (None, Some(reason)) => Err(ProviderError::RequestFailed {
                provider: self.name.to_string(),
                status: 500,
                message: reason.clone(),
            }
            .into()),
            (None, None) => Err(ProviderError::NotConfigured.into()),
        }
    }

    fn name(&self) -> &'static str {
        self.name
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
