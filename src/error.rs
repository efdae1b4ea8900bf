//! Error types for the interview-ready client.

/// Top-level error type for the crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(String),
}

/// Remote-call failures, one variant per bucket of the error taxonomy.
///
/// Every variant except [`ApiError::Rejected`] is retryable by re-submitting
/// the triggering form; none are fatal to the session.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP 429.
    #[error("rate limited")]
    RateLimited,

    /// HTTP 504 (gateway timeout).
    #[error("request timed out")]
    Timeout,

    /// Any other 5xx.
    #[error("server error (status {status})")]
    Server { status: u16 },

    /// The service rejected the request with a structured `detail` or
    /// `message` body (e.g. server-side validation).
    #[error("request rejected: {0}")]
    Rejected(String),

    /// No response at all (connect/DNS/transport failure).
    #[error("network failure: {0}")]
    Network(String),

    /// A 2xx response whose body could not be decoded.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ApiError {
    /// The user-facing banner message for this failure.
    ///
    /// These strings are part of the UI contract and must not drift.
    pub fn user_message(&self) -> String {
        match self {
            Self::RateLimited => "Too many requests. Please wait a moment.".to_string(),
            Self::Timeout => "Request timed out. Please try again.".to_string(),
            Self::Server { .. } => "Something went wrong. Please try again.".to_string(),
            Self::Rejected(detail) => detail.clone(),
            Self::Network(_) => {
                "Network error. Please check your connection and try again.".to_string()
            }
            Self::InvalidResponse(_) => "Request failed.".to_string(),
        }
    }

    /// Whether re-submitting the triggering form may succeed without the
    /// user changing their input.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Invalid wizard transitions and guard violations.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Cannot {action} while in step {step}")]
    WrongStep { action: &'static str, step: String },

    #[error("Cannot navigate back from {from} to {to}")]
    InvalidBack { from: String, to: String },

    #[error("Question index {index} out of range (plan has {total} questions)")]
    QuestionOutOfRange { index: usize, total: usize },

    #[error("Cannot submit: {answered} of {total} questions answered")]
    Unanswered { answered: usize, total: usize },
}

/// Result type alias for the crate.
pub type Result<T> = std::result::Result<T, Error>;
