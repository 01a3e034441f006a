//! Generator Configuration
//!
//! Provider credentials and model selection are loaded from environment
//! variables. Presence or absence of each API key determines which
//! provider slots the coordinator fills; everything else has defaults.

/// Configuration for the draft-generation providers.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// OpenAI API key. Absent means the primary provider is not configured.
    pub openai_api_key: Option<String>,
    /// OpenAI model used for draft generation.
    pub openai_model: String,
    /// Anthropic API key. Absent means the secondary provider is not configured.
    pub anthropic_api_key: Option<String>,
    /// Anthropic model used for draft generation.
    pub anthropic_model: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_model: "gpt-4o-mini".to_string(),
            anthropic_api_key: None,
            anthropic_model: "claude-3-5-haiku-20241022".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create GeneratorConfig from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTRA_OPENAI_API_KEY`: OpenAI credential (optional)
    /// - `EVENTRA_OPENAI_MODEL`: model override (default: gpt-4o-mini)
    /// - `EVENTRA_ANTHROPIC_API_KEY`: Anthropic credential (optional)
    /// - `EVENTRA_ANTHROPIC_MODEL`: model override (default: claude-3-5-haiku-20241022)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            openai_api_key: read_non_empty("EVENTRA_OPENAI_API_KEY"),
            openai_model: read_non_empty("EVENTRA_OPENAI_MODEL")
                .unwrap_or(defaults.openai_model),
            anthropic_api_key: read_non_empty("EVENTRA_ANTHROPIC_API_KEY"),
            anthropic_model: read_non_empty("EVENTRA_ANTHROPIC_MODEL")
                .unwrap_or(defaults.anthropic_model),
        }
    }

    /// Whether at least one provider credential is present.
    pub fn has_any_provider(&self) -> bool {
        self.openai_api_key.is_some() || self.anthropic_api_key.is_some()
    }
}

fn read_non_empty(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
