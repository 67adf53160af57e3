use chrono::{Days, NaiveDate};

use stockcast_inventory::DailyDemand;

use crate::point::ForecastPoint;
use crate::stats::mean;
use crate::strategy::HistoricalForecast;
use crate::trend::classify_trend;

/// Observed days in the series window.
pub const HISTORY_DAYS: u64 = 30;

/// Projected days beyond the observed window.
pub const HORIZON_DAYS: u64 = 30;

/// Trailing window feeding the rolling mean.
pub const TRAILING_WINDOW_DAYS: u64 = 30;

/// Confidence reported for observed days (kept as-is from the product).
pub const OBSERVED_CONFIDENCE: f64 = 100.0;

/// Placeholder seasonality factor carried on every point.
pub const SEASONALITY_BASELINE: f64 = 1.0;

const PROJECTED_CONFIDENCE_BASE: f64 = 60.0;
const PROJECTED_CONFIDENCE_PER_DAY: f64 = 1.5;
const PROJECTED_CONFIDENCE_CAP: f64 = 95.0;
const NO_DATA_CONFIDENCE: f64 = 50.0;

/// Produce the demand series: `HISTORY_DAYS` observed points starting at
/// `window_start`, then `HORIZON_DAYS` projected points.
///
/// Projections use the trailing mean of however many of the preceding
/// `TRAILING_WINDOW_DAYS` days carry an entry. Short history is not padded
/// with zeros, which is what makes the confidence score data-density
/// sensitive.
pub fn forecast_series<S: HistoricalForecast>(
    demand: &DailyDemand,
    window_start: NaiveDate,
    strategy: &mut S,
) -> Vec<ForecastPoint> {
    let total_days = HISTORY_DAYS + HORIZON_DAYS;
    let mut points = Vec::with_capacity(total_days as usize);

    for i in 0..total_days {
        let date = window_start + Days::new(i);
        if i >= HISTORY_DAYS {
            points.push(project_day(demand, date));
        } else {
            points.push(observe_day(demand, date, strategy));
        }
    }

    points
}

fn project_day(demand: &DailyDemand, date: NaiveDate) -> ForecastPoint {
    let window = demand.trailing_window(date, TRAILING_WINDOW_DAYS);

    let (forecast, confidence) = if window.is_empty() {
        (0.0, NO_DATA_CONFIDENCE)
    } else {
        let projected = mean(&window).round().max(0.0);
        let confidence = (PROJECTED_CONFIDENCE_BASE
            + PROJECTED_CONFIDENCE_PER_DAY * window.len() as f64)
            .min(PROJECTED_CONFIDENCE_CAP);
        (projected, confidence)
    };

    ForecastPoint {
        date,
        actual: 0.0,
        forecast,
        confidence,
        trend: classify_trend(demand, date),
        seasonality: SEASONALITY_BASELINE,
        error: None,
    }
}

fn observe_day<S: HistoricalForecast>(
    demand: &DailyDemand,
    date: NaiveDate,
    strategy: &mut S,
) -> ForecastPoint {
    let actual = demand.demand_on(date);
    let forecast = if actual > 0.0 {
        strategy.simulate(actual)
    } else {
        actual
    };
    let error = (actual > 0.0).then(|| (actual - forecast).abs());

    ForecastPoint {
        date,
        actual,
        forecast,
        confidence: OBSERVED_CONFIDENCE,
        trend: classify_trend(demand, date),
        seasonality: SEASONALITY_BASELINE,
        error,
    }
}
