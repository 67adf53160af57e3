//! `stockcast-forecast`
//!
//! **Responsibility:** Demand-forecasting analytics boundary.
//!
//! This crate is intentionally **not** part of the domain model:
//! - It must not mutate domain state.
//! - It emits **insights** (forecast reports), not domain events.
//! - Inputs are immutable snapshots provided by callers (infra/workers).

pub mod accuracy;
pub mod demand_forecast;
pub mod forecaster;
pub mod job;
pub mod point;
pub mod result;
pub mod scheduler;
pub mod strategy;
pub mod trend;

mod stats;

pub use accuracy::estimate_accuracy;
pub use demand_forecast::DemandForecastJob;
pub use forecaster::{HISTORY_DAYS, HORIZON_DAYS, TRAILING_WINDOW_DAYS, forecast_series};
pub use job::AnalyticsJob;
pub use point::ForecastPoint;
pub use result::{AnalyticsError, ForecastReport};
pub use scheduler::{
    AnalyticsScheduler, LocalScheduler, MovementReader, MovementSnapshot, TenantScope,
};
pub use strategy::{ExactEcho, HistoricalForecast, NoisyEcho};
pub use trend::{TREND_THRESHOLD, Trend, classify_trend};
