use chrono::NaiveDate;
use log::debug;

use crate::errors::CoreError;
use crate::models::catalog::MarketCatalog;
use crate::models::holding::Holding;
use crate::models::instrument::Instrument;
use crate::models::market::{MarketIndex, NewsItem, Sentiment};
use crate::providers::traits::RandomSource;
use crate::services::history_service::HistoryService;

/// Static description of a built-in instrument: fundamentals plus the
/// (base price, volatility) pair its history is generated from.
struct MockListing {
    symbol: &'static str,
    name: &'static str,
    sector: &'static str,
    market_cap: &'static str,
    pe_ratio: f64,
    volume_label: &'static str,
    base_price: f64,
    volatility: f64,
}

const MOCK_LISTINGS: [MockListing; 8] = [
    MockListing { symbol: "AAPL", name: "Apple Inc.", sector: "Technology", market_cap: "2.94T", pe_ratio: 31.2, volume_label: "58.4M", base_price: 175.0, volatility: 3.0 },
    MockListing { symbol: "MSFT", name: "Microsoft Corp.", sector: "Technology", market_cap: "2.78T", pe_ratio: 36.8, volume_label: "22.1M", base_price: 360.0, volatility: 5.0 },
    MockListing { symbol: "TSLA", name: "Tesla Inc.", sector: "EV / Auto", market_cap: "791B", pe_ratio: 68.4, volume_label: "112.3M", base_price: 220.0, volatility: 8.0 },
    MockListing { symbol: "NVDA", name: "NVIDIA Corp.", sector: "Semiconductors", market_cap: "1.53T", pe_ratio: 65.1, volume_label: "44.8M", base_price: 570.0, volatility: 12.0 },
    MockListing { symbol: "AMZN", name: "Amazon.com Inc.", sector: "E-Commerce", market_cap: "1.85T", pe_ratio: 42.3, volume_label: "31.6M", base_price: 165.0, volatility: 4.0 },
    MockListing { symbol: "GOOGL", name: "Alphabet Inc.", sector: "Technology", market_cap: "1.78T", pe_ratio: 25.7, volume_label: "27.2M", base_price: 135.0, volatility: 3.0 },
    MockListing { symbol: "META", name: "Meta Platforms", sector: "Social Media", market_cap: "1.24T", pe_ratio: 23.4, volume_label: "18.9M", base_price: 460.0, volatility: 7.0 },
    MockListing { symbol: "JPM", name: "JPMorgan Chase", sector: "Finance", market_cap: "567B", pe_ratio: 11.8, volume_label: "9.7M", base_price: 190.0, volatility: 3.0 },
];

/// Builds the built-in mock market: instruments, indices, news and the
/// sample portfolio.
#[derive(Debug, Clone, Default)]
pub struct MarketService {
    history_service: HistoryService,
}

impl MarketService {
    pub fn new(history_service: HistoryService) -> Self {
        Self { history_service }
    }

    #[must_use]
    pub fn history_service(&self) -> &HistoryService {
        &self.history_service
    }

    /// Generate every built-in instrument's history ending at `end_date`,
    /// in catalog order, drawing from `rng`.
    pub fn mock_catalog(
        &self,
        end_date: NaiveDate,
        rng: &mut dyn RandomSource,
    ) -> Result<MarketCatalog, CoreError> {
        let mut instruments = Vec::with_capacity(MOCK_LISTINGS.len());
        for listing in &MOCK_LISTINGS {
            let history = self.history_service.generate_default(
                listing.base_price,
                listing.volatility,
                end_date,
                rng,
            )?;
            let instrument = Instrument::new(listing.symbol, listing.name, listing.sector, history)?
                .with_fundamentals(listing.market_cap, listing.pe_ratio, listing.volume_label);
            instruments.push(instrument);
        }
        debug!("Built mock catalog with {} instruments", instruments.len());
        MarketCatalog::new(instruments)
    }

    /// Headline indices shown in the sidebar.
    #[must_use]
    pub fn mock_indices(&self) -> Vec<MarketIndex> {
        vec![
            MarketIndex::new("S&P 500", "4,783.45", "+0.87%", true),
            MarketIndex::new("NASDAQ", "15,234.70", "+1.12%", true),
            MarketIndex::new("DOW", "37,592.30", "-0.23%", false),
            MarketIndex::new("VIX", "13.42", "-4.10%", false),
        ]
    }

    /// News feed, newest first.
    #[must_use]
    pub fn mock_news(&self) -> Vec<NewsItem> {
        use Sentiment::{Bearish, Bullish};
        vec![
            NewsItem::new(1, "Fed signals potential rate cuts amid cooling inflation data", "Reuters", "2h ago", "MACRO", Bullish),
            NewsItem::new(2, "NVIDIA surges on record data center revenue forecast", "Bloomberg", "3h ago", "NVDA", Bullish),
            NewsItem::new(3, "Apple faces EU scrutiny over App Store DMA compliance", "FT", "5h ago", "AAPL", Bearish),
            NewsItem::new(4, "Tesla Q4 deliveries beat estimates despite EV slowdown", "WSJ", "6h ago", "TSLA", Bullish),
            NewsItem::new(5, "JPMorgan warns of rising credit card delinquencies in 2025", "CNBC", "8h ago", "JPM", Bearish),
            NewsItem::new(6, "Meta AI assistant crosses 500M monthly active users", "TechCrunch", "9h ago", "META", Bullish),
        ]
    }

    /// Sample portfolio shown in the portfolio table.
    #[must_use]
    pub fn mock_holdings(&self) -> Vec<Holding> {
        vec![
            Holding::new("AAPL", 50, 155.20),
            Holding::new("NVDA", 20, 480.00),
            Holding::new("TSLA", 30, 210.50),
            Holding::new("MSFT", 15, 320.00),
            Holding::new("META", 10, 390.00),
        ]
    }
}
