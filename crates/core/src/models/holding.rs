use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// A portfolio position: how many shares of `symbol` are held and at what
/// average cost. Immutable input to aggregation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Ticker symbol, uppercased
    pub symbol: String,

    /// Number of shares held (must be positive)
    pub shares: u32,

    /// Average cost per share (must be positive and finite)
    pub avg_cost: f64,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, shares: u32, avg_cost: f64) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            shares,
            avg_cost,
        }
    }

    /// Reject holdings that would produce a zero or non-finite cost basis.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.shares == 0 {
            return Err(CoreError::InvalidHolding {
                symbol: self.symbol.clone(),
                reason: "shares must be positive".into(),
            });
        }
        if !self.avg_cost.is_finite() || self.avg_cost <= 0.0 {
            return Err(CoreError::InvalidHolding {
                symbol: self.symbol.clone(),
                reason: format!("average cost must be positive, got {}", self.avg_cost),
            });
        }
        Ok(())
    }

    /// Total paid for the position: `shares × avg_cost`.
    #[must_use]
    pub fn cost_basis(&self) -> f64 {
        f64::from(self.shares) * self.avg_cost
    }
}
