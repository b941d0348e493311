use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One day's price/volume sample.
///
/// Bars are produced oldest-first by the history generator and never
/// mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyBar {
    /// Calendar day this bar covers
    pub date: NaiveDate,

    /// Closing price, rounded to 2 decimal places, always >= the price floor
    pub price: f64,

    /// Traded volume in shares
    pub volume: u64,
}

impl DailyBar {
    pub fn new(date: NaiveDate, price: f64, volume: u64) -> Self {
        Self {
            date,
            price,
            volume,
        }
    }

    /// Short axis label, e.g. "Jan 5".
    #[must_use]
    pub fn label(&self) -> String {
        self.date.format("%b %-d").to_string()
    }
}
