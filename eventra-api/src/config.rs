//! API Configuration Module
//!
//! CORS settings for the HTTP boundary, loaded from environment
//! variables with permissive defaults: the generation endpoint is meant
//! to be callable from any origin unless origins are pinned explicitly.

// ============================================================================
// API CONFIGURATION
// ============================================================================

/// API configuration for CORS behavior.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Allowed CORS origins (comma-separated in env var).
    /// Empty means allow all origins.
    pub cors_origins: Vec<String>,

    /// Max age for CORS preflight cache in seconds.
    pub cors_max_age_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            cors_origins: Vec::new(), // Empty = allow all
            cors_max_age_secs: 86400, // 24 hours
        }
    }
}

impl ApiConfig {
    /// Create ApiConfig from environment variables.
    ///
    /// Environment variables:
    /// - `EVENTRA_CORS_ORIGINS`: Comma-separated allowed origins (empty = allow all)
    /// - `EVENTRA_CORS_MAX_AGE_SECS`: Preflight cache duration (default: 86400)
    pub fn from_env() -> Self {
        let cors_origins = std::env::var("EVENTRA_CORS_ORIGINS")
            .ok()
            .map(|s| {
                s.split(',')
                    .map(|o| o.trim().to_string())
                    .filter(|o| !o.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let cors_max_age_secs = std::env::var("EVENTRA_CORS_MAX_AGE_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(86400);

        Self {
            cors_origins,
            cors_max_age_secs,
        }
    }

    /// Whether all origins are allowed (no origins pinned).
    pub fn allows_any_origin(&self) -> bool {
        self.cors_origins.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_permissive() {
        let config = ApiConfig::default();
        assert!(config.cors_origins.is_empty());
        assert!(config.allows_any_origin());
        assert_eq!(config.cors_max_age_secs, 86400);
    }

    #[test]
    fn test_pinned_origins_disable_any() {
        let mut config = ApiConfig::default();
        config.cors_origins = vec!["https://eventra.app".to_string()];
        assert!(!config.allows_any_origin());
    }
}
