//! Generation Coordinator
//!
//! Sequential decision logic selecting among providers and fallback:
//! try the primary provider, on failure try the secondary, and when both
//! are unavailable or failed, synthesize a placeholder draft. The
//! coordinator always produces exactly one draft and never surfaces a
//! provider error to the caller.

use crate::config::GeneratorConfig;
use crate::fallback::synthesize_draft;
use crate::providers::{AnthropicDraftProvider, OpenAIDraftProvider};
use crate::DraftProvider;
use chrono::Utc;
use eventra_core::{DraftEnvelope, DraftSource, GenerationRequest};
use std::sync::Arc;

/// Coordinates the primary -> secondary -> fallback chain.
///
/// Provider order is fixed: the primary is always tried before the
/// secondary when both are configured. There is no load balancing,
/// no per-request reordering, and no retries within a provider.
pub struct GenerationCoordinator {
    primary: Option<Arc<dyn DraftProvider>>,
    secondary: Option<Arc<dyn DraftProvider>>,
}

impl GenerationCoordinator {
    /// Create a coordinator with explicit provider slots.
    pub fn new(
        primary: Option<Arc<dyn DraftProvider>>,
        secondary: Option<Arc<dyn DraftProvider>>,
    ) -> Self {
        Self { primary, secondary }
    }

    /// Wire providers from configuration: OpenAI as primary, Anthropic as
    /// secondary, each only when its credential is present.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        let primary: Option<Arc<dyn DraftProvider>> =
            config.openai_api_key.as_ref().map(|key| {
                Arc::new(OpenAIDraftProvider::new(key.clone(), config.openai_model.clone()))
                    as Arc<dyn DraftProvider>
            });

        let secondary: Option<Arc<dyn DraftProvider>> =
            config.anthropic_api_key.as_ref().map(|key| {
                Arc::new(AnthropicDraftProvider::new(
                    key.clone(),
                    config.anthropic_model.clone(),
                )) as Arc<dyn DraftProvider>
            });

        Self { primary, secondary }
    }

    /// Whether any provider slot is filled.
    pub fn has_providers(&self) -> bool {
        self.primary.is_some() || self.secondary.is_some()
    }

    /// Produce a draft for the request. Always returns a value.
    ///
    /// The envelope's `error` field is set only when at least one
    /// configured provider actually failed; fallback caused purely by
    /// missing credentials leaves it unset.
    pub async fn generate(&self, request: &GenerationRequest) -> DraftEnvelope {
        let mut last_failure: Option<String> = None;

        let attempts = [
            (self.primary.as_ref(), DraftSource::Primary),
            (self.secondary.as_ref(), DraftSource::Secondary),
        ];

        for (slot, source) in attempts {
            let Some(provider) = slot else {
                continue;
            };

            match provider.generate_draft(request).await {
                Ok(event) => {
                    tracing::info!(
                        provider = provider.name(),
                        category = %request.category,
                        "Draft generated"
                    );
                    return DraftEnvelope {
                        event,
                        source,
                        error: None,
                    };
                }
                Err(err) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %err,
                        "Provider attempt failed, falling through"
                    );
                    last_failure = Some(err.to_string());
                }
            }
        }

        if last_failure.is_none() {
            tracing::info!(
                category = %request.category,
                "No provider configured, using fallback synthesis"
            );
        }

        let event = synthesize_draft(request, Utc::now().date_naive());
        DraftEnvelope {
            event,
            source: DraftSource::Fallback,
            error: last_failure.map(|reason| format!("AI generation unavailable: {}", reason)),
        }
    }
}

impl std::fmt::Debug for GenerationCoordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationCoordinator")
            .field("primary", &self.primary.as_ref().map(|p| p.name()))
            .field("secondary", &self.secondary.as_ref().map(|p| p.name()))
            .finish()
    }
}

// ============================================================================
// UNIT TESTS
// ============================================================================
