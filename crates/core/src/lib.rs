pub mod errors;
pub mod models;
pub mod providers;
pub mod services;

use chrono::NaiveDate;
use log::debug;
use serde::Serialize;

use errors::CoreError;
use models::{
    analytics::PortfolioValuation,
    catalog::MarketCatalog,
    chart::{ChartRange, ChartSeries},
    dashboard::DashboardState,
    holding::Holding,
    instrument::Instrument,
    market::{MarketIndex, NewsItem},
    settings::DashboardSettings,
};
use providers::{random::EntropySource, traits::RandomSource};
use services::{
    chart_service::ChartService, history_service::HistoryService,
    market_service::MarketService, portfolio_service::PortfolioService,
    watchlist_service::WatchlistService,
};

pub use services::history_service::generate_history;

/// Main entry point for the market dashboard core library.
/// Holds the generated market, the portfolio and the interactive state,
/// plus the services that operate on them.
#[must_use]
pub struct MarketDashboard {
    settings: DashboardSettings,
    catalog: MarketCatalog,
    holdings: Vec<Holding>,
    indices: Vec<MarketIndex>,
    news: Vec<NewsItem>,
    state: DashboardState,
    portfolio_service: PortfolioService,
    chart_service: ChartService,
    watchlist_service: WatchlistService,
}

impl std::fmt::Debug for MarketDashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MarketDashboard")
            .field("instruments", &self.catalog.len())
            .field("holdings", &self.holdings.len())
            .field("state", &self.state)
            .finish()
    }
}

/// Serializable view of the dashboard for debugging/display.
#[derive(Serialize)]
struct DashboardSnapshot<'a> {
    state: &'a DashboardState,
    instruments: &'a [Instrument],
    holdings: &'a [Holding],
    indices: &'a [MarketIndex],
    news: &'a [NewsItem],
}

impl MarketDashboard {
    /// Build the built-in mock market with default settings, history ending today.
    pub fn create_mock() -> Result<Self, CoreError> {
        Self::from_settings(DashboardSettings::default())
    }

    /// Build the mock market from settings. Uses `settings.seed` when set,
    /// otherwise OS entropy.
    pub fn from_settings(settings: DashboardSettings) -> Result<Self, CoreError> {
        let today = chrono::Local::now().date_naive();
        let seed = settings.seed;
        match seed {
            Some(seed) => {
                let mut rng = EntropySource::seeded(seed);
                Self::from_settings_at(settings, today, &mut rng)
            }
            None => {
                let mut rng = EntropySource::from_entropy()?;
                Self::from_settings_at(settings, today, &mut rng)
            }
        }
    }

    /// Build the mock market with an explicit end date and random source.
    pub fn from_settings_at(
        settings: DashboardSettings,
        end_date: NaiveDate,
        rng: &mut dyn RandomSource,
    ) -> Result<Self, CoreError> {
        settings.generator.validate()?;
        let market_service = MarketService::new(HistoryService::with_config(settings.generator.clone()));
        let catalog = market_service.mock_catalog(end_date, rng)?;
        let holdings = market_service.mock_holdings();
        let mut dashboard = Self::with_parts(settings, catalog, holdings)?;
        dashboard.indices = market_service.mock_indices();
        dashboard.news = market_service.mock_news();
        Ok(dashboard)
    }

    /// Assemble a dashboard from an existing catalog and holdings.
    ///
    /// The initial selection and watchlist come from `settings` and must
    /// name catalog instruments.
    pub fn with_parts(
        settings: DashboardSettings,
        catalog: MarketCatalog,
        holdings: Vec<Holding>,
    ) -> Result<Self, CoreError> {
        let state = DashboardState::new(
            settings.default_selection.clone(),
            settings.default_watchlist.clone(),
        );
        for symbol in std::iter::once(&state.selected).chain(state.watchlist.iter()) {
            if !catalog.contains(symbol) {
                return Err(CoreError::UnknownSymbol(symbol.clone()));
            }
        }
        for holding in &holdings {
            holding.validate()?;
        }
        debug!(
            "Dashboard ready: {} instruments, {} holdings, {} watched",
            catalog.len(),
            holdings.len(),
            state.watchlist.len()
        );

        Ok(Self {
            watchlist_service: WatchlistService::new(settings.default_selection.clone()),
            settings,
            catalog,
            holdings,
            indices: Vec::new(),
            news: Vec::new(),
            state,
            portfolio_service: PortfolioService::new(),
            chart_service: ChartService::new(),
        })
    }

    // ── Market Data ─────────────────────────────────────────────────

    pub fn catalog(&self) -> &MarketCatalog {
        &self.catalog
    }

    /// All instruments in ticker-tape order.
    #[must_use]
    pub fn ticker_tape(&self) -> &[Instrument] {
        self.catalog.instruments()
    }

    #[must_use]
    pub fn instrument(&self, symbol: &str) -> Option<&Instrument> {
        self.catalog.instrument(symbol)
    }

    #[must_use]
    pub fn indices(&self) -> &[MarketIndex] {
        &self.indices
    }

    #[must_use]
    pub fn news(&self) -> &[NewsItem] {
        &self.news
    }

    #[must_use]
    pub fn settings(&self) -> &DashboardSettings {
        &self.settings
    }

    // ── Selection & Watchlist ───────────────────────────────────────

    #[must_use]
    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// The selected instrument. Selection is always a catalog symbol.
    pub fn selected_instrument(&self) -> Result<&Instrument, CoreError> {
        self.catalog
            .instrument(&self.state.selected)
            .ok_or_else(|| CoreError::UnknownSymbol(self.state.selected.clone()))
    }

    pub fn select(&mut self, symbol: &str) -> Result<(), CoreError> {
        self.watchlist_service
            .select(&mut self.state, &self.catalog, symbol)
    }

    pub fn add_to_watchlist(&mut self, symbol: &str) -> Result<(), CoreError> {
        self.watchlist_service
            .add(&mut self.state, &self.catalog, symbol)
    }

    pub fn remove_from_watchlist(&mut self, symbol: &str) -> Result<(), CoreError> {
        self.watchlist_service.remove(&mut self.state, symbol)
    }

    /// Watched instruments in watchlist order.
    #[must_use]
    pub fn watchlist(&self) -> Vec<&Instrument> {
        self.state
            .watchlist
            .iter()
            .filter_map(|s| self.catalog.instrument(s))
            .collect()
    }

    /// Catalog symbols that can still be added to the watchlist.
    #[must_use]
    pub fn available_to_watch(&self) -> Vec<&str> {
        self.watchlist_service.available(&self.state, &self.catalog)
    }

    // ── Charts ──────────────────────────────────────────────────────

    /// Price chart of the selected instrument for a range tab.
    pub fn price_chart(&self, range: ChartRange) -> Result<ChartSeries, CoreError> {
        let instrument = self.selected_instrument()?;
        Ok(self.chart_service.price_series(instrument, range))
    }

    /// 14-day volume chart of the selected instrument.
    pub fn volume_chart(&self) -> Result<ChartSeries, CoreError> {
        let instrument = self.selected_instrument()?;
        Ok(self.chart_service.volume_series(instrument))
    }

    // ── Portfolio ───────────────────────────────────────────────────

    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Value the portfolio against the instruments' current prices.
    pub fn portfolio_valuation(&self) -> Result<PortfolioValuation, CoreError> {
        self.portfolio_service
            .aggregate(&self.holdings, &self.catalog)
    }

    // ── Export ──────────────────────────────────────────────────────

    /// Export the current portfolio valuation as a JSON string.
    pub fn export_valuation_to_json(&self) -> Result<String, CoreError> {
        let valuation = self.portfolio_valuation()?;
        serde_json::to_string_pretty(&valuation)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize valuation: {e}")))
    }

    /// Export the full dashboard as JSON (snapshot for debugging/display).
    pub fn to_json(&self) -> Result<String, CoreError> {
        let snapshot = DashboardSnapshot {
            state: &self.state,
            instruments: self.catalog.instruments(),
            holdings: &self.holdings,
            indices: &self.indices,
            news: &self.news,
        };
        serde_json::to_string_pretty(&snapshot)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize dashboard: {e}")))
    }
}
