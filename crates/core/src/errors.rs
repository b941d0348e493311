use thiserror::Error;

/// Unified error type for the entire market-dashboard-core library.
/// Every fallible public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Input validation ────────────────────────────────────────────
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid holding {symbol}: {reason}")]
    InvalidHolding { symbol: String, reason: String },

    #[error("Validation failed: {0}")]
    ValidationError(String),

    // ── Lookups ─────────────────────────────────────────────────────
    #[error("No current price for {symbol}")]
    MissingPrice { symbol: String },

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    // ── Randomness ──────────────────────────────────────────────────
    #[error("Entropy source unavailable: {0}")]
    Entropy(String),

    // ── Serialization ───────────────────────────────────────────────
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
