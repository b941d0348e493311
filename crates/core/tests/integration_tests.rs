// ═══════════════════════════════════════════════════════════════════
// Integration Tests: MarketDashboard facade end to end
// ═══════════════════════════════════════════════════════════════════

use chrono::NaiveDate;

use market_dashboard_core::errors::CoreError;
use market_dashboard_core::models::bar::DailyBar;
use market_dashboard_core::models::catalog::MarketCatalog;
use market_dashboard_core::models::chart::ChartRange;
use market_dashboard_core::models::holding::Holding;
use market_dashboard_core::models::instrument::Instrument;
use market_dashboard_core::models::settings::DashboardSettings;
use market_dashboard_core::providers::random::{EntropySource, SequenceSource};
use market_dashboard_core::MarketDashboard;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn seeded_dashboard() -> MarketDashboard {
    let mut rng = EntropySource::seeded(2024);
    MarketDashboard::from_settings_at(DashboardSettings::default(), d(2025, 5, 15), &mut rng)
        .unwrap()
}

fn flat_dashboard() -> MarketDashboard {
    let mut rng = SequenceSource::new(vec![0.47]).unwrap();
    MarketDashboard::from_settings_at(DashboardSettings::default(), d(2025, 5, 15), &mut rng)
        .unwrap()
}

// ═══════════════════════════════════════════════════════════════════
// Construction
// ═══════════════════════════════════════════════════════════════════

#[test]
fn mock_dashboard_initial_state() {
    let dash = seeded_dashboard();
    assert_eq!(dash.ticker_tape().len(), 8);
    assert_eq!(dash.state().selected, "AAPL");
    assert_eq!(dash.selected_instrument().unwrap().name, "Apple Inc.");

    let watched: Vec<&str> = dash.watchlist().iter().map(|i| i.symbol.as_str()).collect();
    assert_eq!(watched, vec!["AAPL", "NVDA", "TSLA", "MSFT", "GOOGL", "AMZN", "JPM"]);
    assert_eq!(dash.available_to_watch(), vec!["META"]);

    assert_eq!(dash.indices().len(), 4);
    assert_eq!(dash.news().len(), 6);
    assert_eq!(dash.holdings().len(), 5);
    assert_eq!(dash.settings().generator.days, 30);
}

#[test]
fn create_mock_uses_today() {
    let dash = MarketDashboard::create_mock().unwrap();
    assert_eq!(dash.catalog().len(), 8);
    for inst in dash.ticker_tape() {
        assert_eq!(inst.history().len(), 31);
        assert!(inst.history().iter().all(|b| b.price >= 1.0));
    }
}

#[test]
fn seeded_settings_are_reproducible() {
    let settings = DashboardSettings {
        seed: Some(77),
        ..DashboardSettings::default()
    };
    let a = MarketDashboard::from_settings(settings.clone()).unwrap();
    let b = MarketDashboard::from_settings(settings).unwrap();
    for (x, y) in a.ticker_tape().iter().zip(b.ticker_tape()) {
        let xs: Vec<f64> = x.history().iter().map(|bar| bar.price).collect();
        let ys: Vec<f64> = y.history().iter().map(|bar| bar.price).collect();
        assert_eq!(xs, ys);
    }
}

#[test]
fn settings_from_json_drive_construction() {
    let settings = DashboardSettings::from_json(
        r#"{"generator": {"days": 13}, "default_selection": "nvda", "default_watchlist": ["nvda", "meta"]}"#,
    )
    .unwrap();
    let mut rng = EntropySource::seeded(1);
    let dash = MarketDashboard::from_settings_at(settings, d(2025, 5, 15), &mut rng).unwrap();
    assert_eq!(dash.state().selected, "NVDA");
    assert_eq!(dash.state().watchlist, vec!["NVDA", "META"]);
    assert_eq!(dash.instrument("META").unwrap().history().len(), 14);
}

#[test]
fn with_parts_rejects_unknown_watchlist_symbol() {
    let bars = vec![DailyBar::new(d(2025, 1, 1), 10.0, 1_000_000)];
    let catalog =
        MarketCatalog::new(vec![Instrument::new("AAPL", "Apple Inc.", "Technology", bars).unwrap()])
            .unwrap();
    let err = MarketDashboard::with_parts(DashboardSettings::default(), catalog, Vec::new())
        .unwrap_err();
    assert!(matches!(err, CoreError::UnknownSymbol(s) if s == "NVDA"));
}

#[test]
fn with_parts_rejects_invalid_holding() {
    let bars = vec![DailyBar::new(d(2025, 1, 1), 10.0, 1_000_000)];
    let catalog =
        MarketCatalog::new(vec![Instrument::new("AAPL", "Apple Inc.", "Technology", bars).unwrap()])
            .unwrap();
    let settings = DashboardSettings {
        default_watchlist: vec!["AAPL".into()],
        ..DashboardSettings::default()
    };
    let err = MarketDashboard::with_parts(settings, catalog, vec![Holding::new("AAPL", 1, -3.0)])
        .unwrap_err();
    assert!(matches!(err, CoreError::InvalidHolding { .. }));
}

// ═══════════════════════════════════════════════════════════════════
// Interaction
// ═══════════════════════════════════════════════════════════════════

#[test]
fn select_switches_charts() {
    let mut dash = seeded_dashboard();
    assert_eq!(dash.price_chart(ChartRange::OneWeek).unwrap().symbol, "AAPL");

    dash.select("nvda").unwrap();
    let chart = dash.price_chart(ChartRange::TwoWeeks).unwrap();
    assert_eq!(chart.symbol, "NVDA");
    assert_eq!(chart.len(), 14);
    assert_eq!(
        chart.bars.last().unwrap().price,
        dash.instrument("NVDA").unwrap().current_price()
    );

    let volume = dash.volume_chart().unwrap();
    assert_eq!(volume.symbol, "NVDA");
    assert_eq!(volume.len(), 14);

    assert!(matches!(dash.select("XYZ"), Err(CoreError::UnknownSymbol(_))));
    assert_eq!(dash.state().selected, "NVDA");
}

#[test]
fn one_month_chart_drops_oldest_bar() {
    let dash = seeded_dashboard();
    let chart = dash.price_chart(ChartRange::OneMonth).unwrap();
    let history = dash.selected_instrument().unwrap().history();
    assert_eq!(chart.len(), 30);
    assert_eq!(chart.bars[0], history[1]);
}

#[test]
fn watchlist_add_and_remove() {
    let mut dash = seeded_dashboard();
    dash.add_to_watchlist("META").unwrap();
    assert!(dash.available_to_watch().is_empty());
    assert!(matches!(
        dash.add_to_watchlist("meta"),
        Err(CoreError::ValidationError(_))
    ));

    dash.remove_from_watchlist("AAPL").unwrap();
    assert_eq!(dash.state().selected, "NVDA");
    assert_eq!(dash.available_to_watch(), vec!["AAPL"]);

    dash.remove_from_watchlist("JPM").unwrap();
    assert_eq!(dash.state().selected, "NVDA");
    assert_eq!(dash.watchlist().len(), 6);
}

#[test]
fn emptying_watchlist_falls_back_to_default_selection() {
    let mut dash = seeded_dashboard();
    dash.select("JPM").unwrap();
    let watched: Vec<String> = dash.state().watchlist.clone();
    for symbol in &watched {
        dash.remove_from_watchlist(symbol).unwrap();
    }
    assert!(dash.watchlist().is_empty());
    assert_eq!(dash.state().selected, "AAPL");
    assert!(dash.selected_instrument().is_ok());
}

// ═══════════════════════════════════════════════════════════════════
// Portfolio
// ═══════════════════════════════════════════════════════════════════

#[test]
fn valuation_uses_latest_prices() {
    let dash = seeded_dashboard();
    let valuation = dash.portfolio_valuation().unwrap();
    let order: Vec<&str> = valuation.positions.iter().map(|p| p.symbol.as_str()).collect();
    assert_eq!(order, vec!["AAPL", "NVDA", "TSLA", "MSFT", "META"]);

    for position in &valuation.positions {
        let inst = dash.instrument(&position.symbol).unwrap();
        assert_eq!(position.current_price, inst.current_price());
    }

    let sum: f64 = valuation.positions.iter().map(|p| p.market_value).sum();
    assert!(approx(valuation.totals.market_value, sum));
}

#[test]
fn flat_market_valuation() {
    let valuation = flat_dashboard().portfolio_valuation().unwrap();
    // AAPL 50×175, NVDA 20×570, TSLA 30×220, MSFT 15×360, META 10×460
    assert!(approx(valuation.totals.market_value, 36_750.0));
    assert!(approx(valuation.totals.cost_basis, 32_375.0));
    assert!(approx(valuation.totals.pnl, 4_375.0));
    assert!(approx(valuation.totals.pnl_percent, 4_375.0 / 32_375.0 * 100.0));

    let aapl = valuation.position("AAPL").unwrap();
    assert!(approx(aapl.market_value, 8_750.0));
    assert!(approx(aapl.cost_basis, 7_760.0));
    assert!(approx(aapl.pnl, 990.0));
}

// ═══════════════════════════════════════════════════════════════════
// Export
// ═══════════════════════════════════════════════════════════════════

#[test]
fn export_valuation_json() {
    let dash = flat_dashboard();
    let json = dash.export_valuation_to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["positions"].as_array().unwrap().len(), 5);
    assert_eq!(value["positions"][0]["symbol"], "AAPL");
    assert_eq!(value["totals"]["market_value"], 36_750.0);
}

#[test]
fn dashboard_snapshot_json() {
    let dash = seeded_dashboard();
    let value: serde_json::Value = serde_json::from_str(&dash.to_json().unwrap()).unwrap();
    assert_eq!(value["state"]["selected"], "AAPL");
    assert_eq!(value["instruments"].as_array().unwrap().len(), 8);
    assert_eq!(value["holdings"].as_array().unwrap().len(), 5);
    assert_eq!(value["news"][0]["tag"], "MACRO");
    assert_eq!(value["indices"][1]["name"], "NASDAQ");
}

#[test]
fn debug_is_compact() {
    let dash = seeded_dashboard();
    let out = format!("{dash:?}");
    assert!(out.contains("MarketDashboard"));
    assert!(out.contains("instruments: 8"));
}
