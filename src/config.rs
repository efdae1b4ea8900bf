//! Configuration types.

use std::time::Duration;

/// Default production API base, overridable via `INTERVIEW_READY_API_BASE`.
pub const DEFAULT_API_BASE: &str = "https://web-production-ffcf6.up.railway.app";

/// Readiness API client configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the readiness service (no trailing slash).
    pub base_url: String,
    /// Per-request timeout applied by the HTTP client.
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_BASE.to_string(),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl ApiConfig {
    /// Build from the environment, falling back to production defaults.
    ///
    /// - `INTERVIEW_READY_API_BASE` — service base URL
    /// - `INTERVIEW_READY_TIMEOUT_SECS` — per-request timeout
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(base) = std::env::var("INTERVIEW_READY_API_BASE") {
            let trimmed = base.trim().trim_end_matches('/');
            if !trimmed.is_empty() {
                config.base_url = trimmed.to_string();
            }
        }
        if let Ok(secs) = std::env::var("INTERVIEW_READY_TIMEOUT_SECS") {
            if let Ok(secs) = secs.parse::<u64>() {
                config.request_timeout = Duration::from_secs(secs);
            }
        }
        config
    }

    /// Base the config on an explicit URL (used by tests against a stub
    /// server).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base: String = base_url.into();
        Self {
            base_url: base.trim_end_matches('/').to_string(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_production() {
        let config = ApiConfig::default();
        assert_eq!(config.base_url, DEFAULT_API_BASE);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let config = ApiConfig::with_base_url("http://127.0.0.1:9999/");
        assert_eq!(config.base_url, "http://127.0.0.1:9999");
    }
}
