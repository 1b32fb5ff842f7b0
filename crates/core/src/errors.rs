use thiserror::Error;

/// Unified error type for the entire tipstar-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Projection / Business Logic ─────────────────────────────────
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    ValidationError(String),

    #[error("Unknown investment plan: {0}")]
    PlanNotFound(String),

    #[error("Insufficient funds: need {required} but wallet holds {available}")]
    InsufficientFunds { required: f64, available: f64 },

    #[error("No active investment")]
    NoActiveInvestment,

    #[error("Investment not found: {0}")]
    InvestmentNotFound(String),

    // ── Session / Auth ──────────────────────────────────────────────
    #[error("Not authenticated — no user session")]
    NotAuthenticated,

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({endpoint}): {message}")]
    Api {
        endpoint: String,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs to prevent
        // token leakage. reqwest errors often contain full URLs.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}
