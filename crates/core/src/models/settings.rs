use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// Default number of trailing days generated per instrument (31 bars).
pub const DEFAULT_HISTORY_DAYS: u32 = 30;

/// Symbol selected on start and when nothing else is left to select.
pub const DEFAULT_SELECTION: &str = "AAPL";

/// Smallest price the generator can emit once rounded to cents.
pub const MIN_PRICE_FLOOR: f64 = 0.01;

/// Tuning knobs for the synthetic history generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Trailing window length; the generator emits `days + 1` bars
    pub days: u32,

    /// Subtracted from each unit draw before scaling by volatility.
    /// Below 0.5 the walk drifts upward by `(0.5 - drift_offset) × volatility` per step.
    pub drift_offset: f64,

    /// Running price never drops below this
    pub price_floor: f64,

    /// Smallest volume a bar can carry
    pub min_volume: u64,

    /// Volumes are drawn from `[min_volume, min_volume + volume_span)`
    pub volume_span: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_HISTORY_DAYS,
            drift_offset: 0.47,
            price_floor: 1.0,
            min_volume: 1_000_000,
            volume_span: 10_000_000,
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.drift_offset.is_finite() {
            return Err(CoreError::InvalidParameter(
                "drift_offset must be finite".into(),
            ));
        }
        if !self.price_floor.is_finite() || self.price_floor < MIN_PRICE_FLOOR {
            return Err(CoreError::InvalidParameter(format!(
                "price_floor must be at least {MIN_PRICE_FLOOR}, got {}",
                self.price_floor
            )));
        }
        if self.volume_span == 0 {
            return Err(CoreError::InvalidParameter(
                "volume_span must be positive".into(),
            ));
        }
        if self.min_volume.checked_add(self.volume_span).is_none() {
            return Err(CoreError::InvalidParameter(format!(
                "min_volume {} + volume_span {} overflows",
                self.min_volume, self.volume_span
            )));
        }
        Ok(())
    }
}

/// Dashboard-level configuration. Every field falls back to its default
/// when missing from the JSON input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    pub generator: GeneratorConfig,

    /// Symbol selected on start and after the selection is removed
    pub default_selection: String,

    /// Initial watchlist, in display order
    pub default_watchlist: Vec<String>,

    /// Fixed seed for reproducible histories; `None` seeds from OS entropy
    pub seed: Option<u64>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            generator: GeneratorConfig::default(),
            default_selection: DEFAULT_SELECTION.to_string(),
            default_watchlist: ["AAPL", "NVDA", "TSLA", "MSFT", "GOOGL", "AMZN", "JPM"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            seed: None,
        }
    }
}

impl DashboardSettings {
    /// Parse settings from JSON, filling in defaults for missing fields.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let settings: DashboardSettings = serde_json::from_str(json)?;
        settings.generator.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize settings: {e}")))
    }
}
