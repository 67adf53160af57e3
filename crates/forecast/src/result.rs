use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

use crate::point::ForecastPoint;
use crate::trend::Trend;

/// Result of a demand-forecast run.
///
/// This is *not* a domain event. It is an insight that can be persisted or
/// displayed by higher layers (infra/API) without mutating domain state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastReport {
    /// The full series (observed then projected), in date order.
    pub points: Vec<ForecastPoint>,

    /// Headline direction, classified at the first projected day.
    pub trend: Trend,

    /// Heuristic accuracy score in \[0, 100\].
    pub accuracy: f64,

    /// Mean observed demand per day across the observed window.
    pub avg_daily_demand: f64,

    /// Sum of projected forecasts across the horizon.
    pub projected_total: f64,

    /// Raw records skipped as malformed while parsing the snapshot.
    pub skipped_records: usize,

    /// Human-readable summary of the run.
    pub explanation: String,

    /// Free-form metadata (kind, tenant, window bounds, etc).
    pub metadata: JsonValue,
}

impl ForecastReport {
    /// Post-hoc period filter: points with `from <= date <= to`.
    ///
    /// Mirrors the period selector of the consuming dashboard; a plain
    /// date-range filter with no special semantics.
    pub fn points_between(&self, from: NaiveDate, to: NaiveDate) -> Vec<ForecastPoint> {
        self.points
            .iter()
            .filter(|p| p.date >= from && p.date <= to)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Error)]
pub enum AnalyticsError {
    #[error("invalid job input: {0}")]
    InvalidInput(String),

    #[error("internal error: {0}")]
    Internal(String),
}
