pub mod chart_service;
pub mod history_service;
pub mod market_service;
pub mod portfolio_service;
pub mod watchlist_service;
