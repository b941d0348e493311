use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::bar::DailyBar;
use crate::errors::CoreError;

/// Number of trailing bars shown in the volume chart.
pub const VOLUME_CHART_BARS: usize = 14;

/// Time window selectable on the price chart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartRange {
    /// Last 7 bars
    OneWeek,
    /// Last 14 bars
    TwoWeeks,
    /// Last 30 bars
    #[default]
    OneMonth,
}

impl ChartRange {
    pub const ALL: [ChartRange; 3] = [ChartRange::OneWeek, ChartRange::TwoWeeks, ChartRange::OneMonth];

    /// How many trailing bars this range covers.
    #[must_use]
    pub fn bars(self) -> usize {
        match self {
            ChartRange::OneWeek => 7,
            ChartRange::TwoWeeks => 14,
            ChartRange::OneMonth => 30,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ChartRange::OneWeek => "1W",
            ChartRange::TwoWeeks => "2W",
            ChartRange::OneMonth => "1M",
        }
    }
}

impl std::fmt::Display for ChartRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartRange {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartRange::ALL
            .into_iter()
            .find(|r| r.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::ValidationError(format!("unknown chart range: {s}")))
    }
}

/// A chart-ready slice of an instrument's history.
///
/// The core picks the bars and the trend colour; the frontend just renders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSeries {
    /// Instrument symbol
    pub symbol: String,

    /// Range label ("1W", "2W", "1M", or "14D" for the volume chart)
    pub range_label: String,

    /// Trailing bars, oldest first
    pub bars: Vec<DailyBar>,

    /// Last price >= first price
    pub is_up: bool,
}

impl ChartSeries {
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Lowest and highest price in the series, for axis scaling.
    #[must_use]
    pub fn price_bounds(&self) -> Option<(f64, f64)> {
        let first = self.bars.first()?.price;
        Some(self.bars.iter().fold((first, first), |(lo, hi), b| {
            (lo.min(b.price), hi.max(b.price))
        }))
    }

    #[must_use]
    pub fn max_volume(&self) -> u64 {
        self.bars.iter().map(|b| b.volume).max().unwrap_or(0)
    }
}
