use serde::{Deserialize, Serialize};

/// Result of valuing a list of holdings against current prices.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioValuation {
    /// One entry per holding, in the same order as the input holdings
    pub positions: Vec<PositionValuation>,

    /// Sums across all positions
    pub totals: PortfolioTotals,
}

/// Valuation of a single holding at its current price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionValuation {
    pub symbol: String,

    pub shares: u32,

    /// Average cost per share
    pub avg_cost: f64,

    /// Latest price of the instrument
    pub current_price: f64,

    /// shares × current_price
    pub market_value: f64,

    /// shares × avg_cost
    pub cost_basis: f64,

    /// market_value − cost_basis
    pub pnl: f64,

    /// pnl / cost_basis × 100
    pub pnl_percent: f64,

    /// This position's market value / total market value × 100
    pub allocation_percent: f64,
}

/// Portfolio-level sums.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioTotals {
    pub market_value: f64,

    pub cost_basis: f64,

    pub pnl: f64,

    /// total pnl / total cost basis × 100, or 0 when the cost basis is 0
    pub pnl_percent: f64,
}

impl PortfolioValuation {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    #[must_use]
    pub fn position(&self, symbol: &str) -> Option<&PositionValuation> {
        let symbol = symbol.to_uppercase();
        self.positions.iter().find(|p| p.symbol == symbol)
    }
}
