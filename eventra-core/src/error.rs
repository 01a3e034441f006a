//! Error types for Eventra operations

use thiserror::Error;

/// LLM provider errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProviderError {
    #[error("No draft provider configured")]
    NotConfigured,

    #[error("Request to {provider} failed with status {status}: {message}")]
    RequestFailed {
        provider: String,
        status: i32,
        message: String,
    },

    #[error("Rate limited by {provider}, retry after {retry_after_ms}ms")]
    RateLimited {
        provider: String,
        retry_after_ms: i64,
    },

    #[error("Invalid response from {provider}: {reason}")]
    InvalidResponse { provider: String, reason: String },
}

/// Validation errors for request and draft shapes.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    #[error("Invalid value for {field}: {reason}")]
    InvalidValue { field: String, reason: String },
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Missing required configuration field: {field}")]
    MissingRequired { field: String },

    #[error("Invalid value for {field}: {value} - {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Master error type for all Eventra errors.
#[derive(Debug, Clone, Error)]
pub enum EventraError {
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for Eventra operations.
pub type EventraResult<T> = Result<T, EventraError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_error_display_request_failed() {
        let err = ProviderError::RequestFailed {
            provider: "openai".to_string(),
            status: 503,
            message: "upstream unavailable".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("openai"));
        assert!(msg.contains("503"));
        assert!(msg.contains("upstream unavailable"));
    }

    #[test]
    fn test_provider_error_display_rate_limited() {
        let err = ProviderError::RateLimited {
            provider: "anthropic".to_string(),
            retry_after_ms: 1500,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Rate limited"));
        assert!(msg.contains("anthropic"));
        assert!(msg.contains("1500"));
    }

    #[test]
    fn test_provider_error_display_invalid_response() {
        let err = ProviderError::InvalidResponse {
            provider: "openai".to_string(),
            reason: "body was not JSON".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Invalid response"));
        assert!(msg.contains("body was not JSON"));
    }

    #[test]
    fn test_validation_error_display_missing_field() {
        let err = ValidationError::RequiredFieldMissing {
            field: "category".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Required field missing"));
        assert!(msg.contains("category"));
    }

    #[test]
    fn test_config_error_display_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "port".to_string(),
            value: "not-a-port".to_string(),
            reason: "must be numeric".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("port"));
        assert!(msg.contains("not-a-port"));
        assert!(msg.contains("must be numeric"));
    }

    #[test]
    fn test_eventra_error_from_variants() {
        let provider = EventraError::from(ProviderError::NotConfigured);
        assert!(matches!(provider, EventraError::Provider(_)));

        let validation = EventraError::from(ValidationError::RequiredFieldMissing {
            field: "details".to_string(),
        });
        assert!(matches!(validation, EventraError::Validation(_)));

        let config = EventraError::from(ConfigError::MissingRequired {
            field: "api_key".to_string(),
        });
        assert!(matches!(config, EventraError::Config(_)));
    }
}
