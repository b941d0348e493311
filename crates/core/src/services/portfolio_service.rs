use log::debug;

use crate::errors::CoreError;
use crate::models::analytics::{PortfolioTotals, PortfolioValuation, PositionValuation};
use crate::models::holding::Holding;
use crate::providers::traits::PriceLookup;

/// Values holdings against current prices and computes P&L.
///
/// Pure business logic: no I/O, no caching. Valuations are recomputed
/// from the inputs on every call, so they can never go stale.
#[derive(Debug, Clone, Default)]
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Value every holding, in input order, and sum the totals.
    ///
    /// Fails with `MissingPrice` when a holding's symbol is not in `prices`
    /// and with `InvalidHolding` for zero shares or a non-positive average
    /// cost. A zero total cost basis yields a total `pnl_percent` of 0.
    pub fn aggregate<P: PriceLookup + ?Sized>(
        &self,
        holdings: &[Holding],
        prices: &P,
    ) -> Result<PortfolioValuation, CoreError> {
        let mut positions = Vec::with_capacity(holdings.len());
        let mut totals = PortfolioTotals::default();

        // 1. Value each position and accumulate totals in input order
        for holding in holdings {
            let position = self.value_position(holding, prices)?;
            totals.market_value += position.market_value;
            totals.cost_basis += position.cost_basis;
            totals.pnl += position.pnl;
            positions.push(position);
        }

        // 2. Portfolio-level percentages
        totals.pnl_percent = percent_of(totals.pnl, totals.cost_basis);
        for position in &mut positions {
            position.allocation_percent = percent_of(position.market_value, totals.market_value);
        }

        debug!(
            "Aggregated {} positions: value {:.2}, cost {:.2}",
            positions.len(),
            totals.market_value,
            totals.cost_basis
        );

        Ok(PortfolioValuation { positions, totals })
    }

    /// Value a single holding. `allocation_percent` is left at 0 since it
    /// depends on the whole portfolio.
    pub fn value_position<P: PriceLookup + ?Sized>(
        &self,
        holding: &Holding,
        prices: &P,
    ) -> Result<PositionValuation, CoreError> {
        holding.validate()?;

        let current_price = prices
            .price_of(&holding.symbol)
            .ok_or_else(|| CoreError::MissingPrice {
                symbol: holding.symbol.clone(),
            })?;
        if !current_price.is_finite() || current_price <= 0.0 {
            return Err(CoreError::InvalidParameter(format!(
                "price for {} must be positive, got {current_price}",
                holding.symbol
            )));
        }

        let market_value = f64::from(holding.shares) * current_price;
        let cost_basis = holding.cost_basis();
        let pnl = market_value - cost_basis;

        Ok(PositionValuation {
            symbol: holding.symbol.clone(),
            shares: holding.shares,
            avg_cost: holding.avg_cost,
            current_price,
            market_value,
            cost_basis,
            pnl,
            pnl_percent: percent_of(pnl, cost_basis),
            allocation_percent: 0.0,
        })
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 {
        (part / whole) * 100.0
    } else {
        0.0
    }
}
