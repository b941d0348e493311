use serde::{Deserialize, Serialize};

/// Interactive dashboard state: which instrument is selected and which
/// symbols are on the watchlist.
///
/// Owned by the caller and changed only through
/// [`WatchlistService`](crate::services::watchlist_service::WatchlistService).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Currently selected symbol
    pub selected: String,

    /// Watched symbols in display order, no duplicates
    pub watchlist: Vec<String>,
}

impl DashboardState {
    pub fn new(selected: impl Into<String>, watchlist: Vec<String>) -> Self {
        let mut deduped: Vec<String> = Vec::with_capacity(watchlist.len());
        for symbol in watchlist {
            let symbol = symbol.to_uppercase();
            if !deduped.contains(&symbol) {
                deduped.push(symbol);
            }
        }
        Self {
            selected: selected.into().to_uppercase(),
            watchlist: deduped,
        }
    }

    #[must_use]
    pub fn is_watched(&self, symbol: &str) -> bool {
        let symbol = symbol.to_uppercase();
        self.watchlist.iter().any(|s| *s == symbol)
    }
}
