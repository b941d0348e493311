use crate::models::bar::DailyBar;
use crate::models::chart::{ChartRange, ChartSeries, VOLUME_CHART_BARS};
use crate::models::instrument::Instrument;

/// Generates chart-ready slices of an instrument's history.
///
/// The core picks the bars and the trend direction; the frontend only
/// renders. Both charts show trailing bars, oldest first.
#[derive(Debug, Clone, Default)]
pub struct ChartService;

impl ChartService {
    pub fn new() -> Self {
        Self
    }

    /// Price chart for one of the range tabs.
    /// Shorter histories are returned whole.
    #[must_use]
    pub fn price_series(&self, instrument: &Instrument, range: ChartRange) -> ChartSeries {
        let bars = trailing(instrument.history(), range.bars());
        build_series(instrument, range.label().to_string(), bars)
    }

    /// Volume chart: always the last 14 bars.
    #[must_use]
    pub fn volume_series(&self, instrument: &Instrument) -> ChartSeries {
        let bars = trailing(instrument.history(), VOLUME_CHART_BARS);
        build_series(instrument, format!("{VOLUME_CHART_BARS}D"), bars)
    }
}

fn trailing(history: &[DailyBar], count: usize) -> &[DailyBar] {
    &history[history.len().saturating_sub(count)..]
}

fn build_series(instrument: &Instrument, range_label: String, bars: &[DailyBar]) -> ChartSeries {
    // Flat or rising counts as up
    let is_up = match (bars.first(), bars.last()) {
        (Some(first), Some(last)) => last.price >= first.price,
        _ => true,
    };
    ChartSeries {
        symbol: instrument.symbol.clone(),
        range_label,
        bars: bars.to_vec(),
        is_up,
    }
}
