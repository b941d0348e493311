use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::CoreError;

use super::traits::RandomSource;

/// Production random source: a `StdRng` seeded from OS entropy or a fixed seed.
#[derive(Debug, Clone)]
pub struct EntropySource {
    rng: StdRng,
}

impl EntropySource {
    /// Seed from the operating system's entropy pool.
    pub fn from_entropy() -> Result<Self, CoreError> {
        let mut seed = [0u8; 32];
        getrandom::getrandom(&mut seed)
            .map_err(|e| CoreError::Entropy(format!("Failed to seed generator: {e}")))?;
        Ok(Self {
            rng: StdRng::from_seed(seed),
        })
    }

    /// Deterministic source; the same seed always yields the same draws.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for EntropySource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceSource {
    /// Every value must lie in `[0, 1)` and the list must not be empty.
    pub fn new(values: Vec<f64>) -> Result<Self, CoreError> {
        if values.is_empty() {
            return Err(CoreError::InvalidParameter(
                "sequence source needs at least one value".into(),
            ));
        }
        if let Some(bad) = values.iter().find(|v| !(0.0..1.0).contains(*v)) {
            return Err(CoreError::InvalidParameter(format!(
                "sequence values must be in [0, 1), got {bad}"
            )));
        }
        Ok(Self { values, cursor: 0 })
    }

    /// Number of draws taken so far.
    #[must_use]
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceSource {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value
    }
}
