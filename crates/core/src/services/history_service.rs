use chrono::{Days, NaiveDate};
use log::{debug, trace};

use crate::errors::CoreError;
use crate::models::bar::DailyBar;
use crate::models::settings::GeneratorConfig;
use crate::providers::random::EntropySource;
use crate::providers::traits::RandomSource;

/// Generates synthetic daily price history with a bounded random walk.
///
/// Pure computation. The caller owns the returned bars.
/// Each step moves the running price by `(U - drift_offset) × volatility`,
/// floored at `price_floor`; with the default offset of 0.47 the walk
/// drifts slightly upward.
#[derive(Debug, Clone, Default)]
pub struct HistoryService {
    config: GeneratorConfig,
}

impl HistoryService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate `days + 1` bars ending at `end_date`, oldest first.
    ///
    /// Per bar the price draw is taken before the volume draw.
    /// Rejects non-positive `base_price` and negative `volatility`.
    pub fn generate(
        &self,
        base_price: f64,
        volatility: f64,
        days: u32,
        end_date: NaiveDate,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<DailyBar>, CoreError> {
        validate_inputs(base_price, volatility)?;
        self.config.validate()?;
        debug!(
            "Generating {} bars from base {base_price} (volatility {volatility})",
            u64::from(days) + 1
        );

        let start_date = end_date
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or_else(|| {
                CoreError::InvalidParameter(format!(
                    "{days} trailing days before {end_date} is out of the calendar range"
                ))
            })?;

        let config = &self.config;
        let mut bars = Vec::with_capacity(days as usize + 1);
        let mut price = base_price;

        for date in start_date.iter_days().take(days as usize + 1) {
            let delta = (rng.next_unit() - config.drift_offset) * volatility;
            price = (price + delta).max(config.price_floor);

            let volume_draw = (rng.next_unit() * config.volume_span as f64).floor() as u64;
            let volume = config.min_volume + volume_draw.min(config.volume_span - 1);

            trace!("{date}: price {price:.4}, volume {volume}");
            bars.push(DailyBar::new(date, round_cents(price), volume));
        }

        Ok(bars)
    }

    /// Generate over the configured default window (`config.days`).
    pub fn generate_default(
        &self,
        base_price: f64,
        volatility: f64,
        end_date: NaiveDate,
        rng: &mut dyn RandomSource,
    ) -> Result<Vec<DailyBar>, CoreError> {
        self.generate(base_price, volatility, self.config.days, end_date, rng)
    }
}

/// Generate a history ending today using OS entropy and default settings.
pub fn generate_history(
    base_price: f64,
    volatility: f64,
    days: u32,
) -> Result<Vec<DailyBar>, CoreError> {
    let today = chrono::Local::now().date_naive();
    let mut rng = EntropySource::from_entropy()?;
    HistoryService::new().generate(base_price, volatility, days, today, &mut rng)
}

fn validate_inputs(base_price: f64, volatility: f64) -> Result<(), CoreError> {
    if !base_price.is_finite() || base_price <= 0.0 {
        return Err(CoreError::InvalidParameter(format!(
            "base price must be positive, got {base_price}"
        )));
    }
    if !volatility.is_finite() || volatility < 0.0 {
        return Err(CoreError::InvalidParameter(format!(
            "volatility must be non-negative, got {volatility}"
        )));
    }
    Ok(())
}

/// Half-away-from-zero rounding; may differ from decimal string rounding at binary midpoints.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

