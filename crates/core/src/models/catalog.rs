use std::collections::HashMap;

use serde::Serialize;

use super::instrument::Instrument;
use crate::errors::CoreError;
use crate::providers::traits::PriceLookup;

/// The set of instruments the dashboard knows about, in display order.
///
/// Symbols are unique; lookups are case-insensitive.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MarketCatalog {
    instruments: Vec<Instrument>,
}

impl MarketCatalog {
    /// Build a catalog, rejecting duplicate symbols.
    pub fn new(instruments: Vec<Instrument>) -> Result<Self, CoreError> {
        for (idx, instrument) in instruments.iter().enumerate() {
            if instruments[..idx].iter().any(|i| i.symbol == instrument.symbol) {
                return Err(CoreError::ValidationError(format!(
                    "duplicate instrument symbol: {}",
                    instrument.symbol
                )));
            }
        }
        Ok(Self { instruments })
    }

    /// All instruments in catalog order (also the ticker-tape order).
    #[must_use]
    pub fn instruments(&self) -> &[Instrument] {
        &self.instruments
    }

    #[must_use]
    pub fn instrument(&self, symbol: &str) -> Option<&Instrument> {
        let symbol = symbol.to_uppercase();
        self.instruments.iter().find(|i| i.symbol == symbol)
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.instrument(symbol).is_some()
    }

    #[must_use]
    pub fn symbols(&self) -> Vec<&str> {
        self.instruments.iter().map(|i| i.symbol.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }

    /// Snapshot of symbol → current price for every instrument.
    #[must_use]
    pub fn price_lookup(&self) -> HashMap<String, f64> {
        self.instruments
            .iter()
            .map(|i| (i.symbol.clone(), i.current_price()))
            .collect()
    }
}

impl PriceLookup for MarketCatalog {
    fn price_of(&self, symbol: &str) -> Option<f64> {
        self.instrument(symbol).map(Instrument::current_price)
    }
}
