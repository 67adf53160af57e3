use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Forecast for days whose actual demand is already known.
///
/// The product charts a simulated forecast next to observed history; this
/// trait isolates that simulation so a real backtested model can replace it
/// without touching aggregation or trend code.
pub trait HistoricalForecast {
    /// Simulated forecast for an observed day with `actual > 0` demand.
    fn simulate(&mut self, actual: f64) -> f64;
}

/// Echoes the actual value perturbed by 10–20% in a random direction,
/// rounded and floored at zero.
///
/// A display heuristic, not a forecasting model: it exists so observed rows
/// chart a plausible forecast/error band.
#[derive(Debug, Clone)]
pub struct NoisyEcho {
    rng: StdRng,
}

impl NoisyEcho {
    /// Entropy-seeded generator.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Fixed-seed generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for NoisyEcho {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoricalForecast for NoisyEcho {
    fn simulate(&mut self, actual: f64) -> f64 {
        let magnitude = self.rng.gen_range(0.10..0.20);
        let sign = if self.rng.gen_bool(0.5) { 1.0 } else { -1.0 };
        (actual * (1.0 + sign * magnitude)).round().max(0.0)
    }
}

/// Forecast equals actual (zero error).
///
/// The deterministic baseline used by tests and backtests.
#[derive(Debug, Copy, Clone, Default)]
pub struct ExactEcho;

impl HistoricalForecast for ExactEcho {
    fn simulate(&mut self, actual: f64) -> f64 {
        actual
    }
}
