use serde::Serialize;

use super::bar::DailyBar;
use crate::errors::CoreError;

/// A tradable instrument with its generated price history.
///
/// `current_price`, `change` and `change_percent` are derived from the
/// history on every read, so `current_price() == history().last().price`
/// always holds. The constructor rejects an empty history.
///
/// **Equality** is based on `symbol` only.
#[derive(Debug, Clone, Serialize)]
pub struct Instrument {
    /// Ticker symbol, uppercased (e.g., "AAPL", "NVDA")
    pub symbol: String,

    /// Human-readable name (e.g., "Apple Inc.")
    pub name: String,

    /// Sector label (e.g., "Technology")
    pub sector: String,

    /// Market capitalisation label (e.g., "2.94T")
    pub market_cap: String,

    /// Price / earnings ratio
    pub pe_ratio: f64,

    /// Average daily volume label (e.g., "58.4M")
    pub volume_label: String,

    history: Vec<DailyBar>,
}

impl PartialEq for Instrument {
    fn eq(&self, other: &Self) -> bool {
        self.symbol == other.symbol
    }
}

impl Eq for Instrument {}

impl Instrument {
    pub fn new(
        symbol: impl Into<String>,
        name: impl Into<String>,
        sector: impl Into<String>,
        history: Vec<DailyBar>,
    ) -> Result<Self, CoreError> {
        let symbol = symbol.into().to_uppercase();
        if history.is_empty() {
            return Err(CoreError::ValidationError(format!(
                "instrument {symbol} needs at least one bar of history"
            )));
        }
        Ok(Self {
            symbol,
            name: name.into(),
            sector: sector.into(),
            market_cap: String::new(),
            pe_ratio: 0.0,
            volume_label: String::new(),
            history,
        })
    }

    /// Attach the fundamentals shown in the stock header.
    #[must_use]
    pub fn with_fundamentals(
        mut self,
        market_cap: impl Into<String>,
        pe_ratio: f64,
        volume_label: impl Into<String>,
    ) -> Self {
        self.market_cap = market_cap.into();
        self.pe_ratio = pe_ratio;
        self.volume_label = volume_label.into();
        self
    }

    /// Daily bars, oldest first. Never empty.
    #[must_use]
    pub fn history(&self) -> &[DailyBar] {
        &self.history
    }

    #[must_use]
    pub fn latest_bar(&self) -> &DailyBar {
        // non-empty by construction
        &self.history[self.history.len() - 1]
    }

    #[must_use]
    pub fn current_price(&self) -> f64 {
        self.latest_bar().price
    }

    /// The price of the bar before the latest one, if there is one.
    #[must_use]
    pub fn prior_close(&self) -> Option<f64> {
        self.history
            .len()
            .checked_sub(2)
            .map(|idx| self.history[idx].price)
    }

    /// Absolute change against the prior close (0 with a single bar).
    #[must_use]
    pub fn change(&self) -> f64 {
        self.prior_close()
            .map(|prev| self.current_price() - prev)
            .unwrap_or(0.0)
    }

    /// Percentage change against the prior close (0 with a single bar).
    #[must_use]
    pub fn change_percent(&self) -> f64 {
        match self.prior_close() {
            Some(prev) if prev > 0.0 => (self.current_price() - prev) / prev * 100.0,
            _ => 0.0,
        }
    }

    #[must_use]
    pub fn is_up(&self) -> bool {
        self.change_percent() >= 0.0
    }
}
