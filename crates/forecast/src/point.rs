use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::trend::Trend;

/// One day of the demand series (observed or projected).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,

    /// Observed demand; 0 for projected days.
    pub actual: f64,

    /// Rolling-mean projection for projected days; the historical-forecast
    /// strategy's output for observed days. Never negative; projections are
    /// whole-valued.
    pub forecast: f64,

    /// Data-density score in \[0, 95\] for projected days. Observed days
    /// always report 100 (kept as-is from the product; not a statistical
    /// confidence interval).
    pub confidence: f64,

    /// Direction of demand at this date.
    pub trend: Trend,

    /// Placeholder seasonality factor (constant, unused by the model).
    pub seasonality: f64,

    /// `|actual - forecast|`; present only for observed days with nonzero
    /// demand.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<f64>,
}
