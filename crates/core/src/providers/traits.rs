use std::collections::{BTreeMap, HashMap};

/// Source of uniform draws for the history generator.
///
/// Abstracted so that production code draws from a real RNG while tests
/// replay a fixed sequence and assert exact bars.
pub trait RandomSource {
    /// Next uniform value in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

/// Anything that can answer "what is the current price of `symbol`?".
///
/// Implemented for plain maps (symbol → price) and for
/// [`MarketCatalog`](crate::models::catalog::MarketCatalog), so the
/// aggregator does not care where prices come from.
pub trait PriceLookup {
    /// Current price for an uppercased symbol, or `None` if unknown.
    fn price_of(&self, symbol: &str) -> Option<f64>;
}

impl PriceLookup for HashMap<String, f64> {
    fn price_of(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}

impl PriceLookup for BTreeMap<String, f64> {
    fn price_of(&self, symbol: &str) -> Option<f64> {
        self.get(symbol).copied()
    }
}

impl<T: PriceLookup + ?Sized> PriceLookup for &T {
    fn price_of(&self, symbol: &str) -> Option<f64> {
        (**self).price_of(symbol)
    }
}
