use log::debug;

use crate::errors::CoreError;
use crate::models::catalog::MarketCatalog;
use crate::models::dashboard::DashboardState;
use crate::models::settings::DEFAULT_SELECTION;

/// Selection and watchlist transitions over an explicit [`DashboardState`].
///
/// Every symbol is checked against the catalog before the state changes;
/// on error the state is left untouched.
#[derive(Debug, Clone)]
pub struct WatchlistService {
    /// Selection used when the selected symbol is removed and nothing else is watched
    fallback_selection: String,
}

impl WatchlistService {
    pub fn new(fallback_selection: impl Into<String>) -> Self {
        Self {
            fallback_selection: fallback_selection.into().to_uppercase(),
        }
    }

    /// Make `symbol` the selected instrument. It does not need to be watched.
    pub fn select(
        &self,
        state: &mut DashboardState,
        catalog: &MarketCatalog,
        symbol: &str,
    ) -> Result<(), CoreError> {
        let symbol = known_symbol(catalog, symbol)?;
        debug!("Selected {symbol}");
        state.selected = symbol;
        Ok(())
    }

    /// Append `symbol` to the watchlist.
    pub fn add(
        &self,
        state: &mut DashboardState,
        catalog: &MarketCatalog,
        symbol: &str,
    ) -> Result<(), CoreError> {
        let symbol = known_symbol(catalog, symbol)?;
        if state.is_watched(&symbol) {
            return Err(CoreError::ValidationError(format!(
                "{symbol} is already on the watchlist"
            )));
        }
        debug!("Watching {symbol}");
        state.watchlist.push(symbol);
        Ok(())
    }

    /// Drop `symbol` from the watchlist.
    ///
    /// If it was selected, the selection moves to the first other symbol
    /// of the watchlist, or to the fallback when nothing else is watched.
    pub fn remove(&self, state: &mut DashboardState, symbol: &str) -> Result<(), CoreError> {
        let symbol = symbol.to_uppercase();
        let idx = state
            .watchlist
            .iter()
            .position(|s| *s == symbol)
            .ok_or_else(|| {
                CoreError::ValidationError(format!("{symbol} is not on the watchlist"))
            })?;
        state.watchlist.remove(idx);

        if state.selected == symbol {
            state.selected = state
                .watchlist
                .first()
                .cloned()
                .unwrap_or_else(|| self.fallback_selection.clone());
        }
        debug!("Unwatched {symbol}, selected {}", state.selected);
        Ok(())
    }

    /// Catalog symbols not yet on the watchlist, in catalog order.
    #[must_use]
    pub fn available<'a>(&self, state: &DashboardState, catalog: &'a MarketCatalog) -> Vec<&'a str> {
        catalog
            .symbols()
            .into_iter()
            .filter(|s| !state.is_watched(s))
            .collect()
    }
}

impl Default for WatchlistService {
    fn default() -> Self {
        Self::new(DEFAULT_SELECTION)
    }
}

fn known_symbol(catalog: &MarketCatalog, symbol: &str) -> Result<String, CoreError> {
    catalog
        .instrument(symbol)
        .map(|i| i.symbol.clone())
        .ok_or_else(|| CoreError::UnknownSymbol(symbol.to_string()))
}
