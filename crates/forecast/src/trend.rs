use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use stockcast_inventory::DailyDemand;

use crate::stats::mean;

/// Classification threshold: ±10% change between window means.
///
/// Fixed constant; consumers depend on the exact boundary.
pub const TREND_THRESHOLD: f64 = 0.10;

/// Days in each comparison window.
const WINDOW_DAYS: u64 = 30;

/// Demand direction over two adjacent trailing windows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub fn as_str(&self) -> &'static str {
        match self {
            Trend::Up => "up",
            Trend::Down => "down",
            Trend::Stable => "stable",
        }
    }
}

impl core::fmt::Display for Trend {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify demand direction at `date`.
///
/// Compares `recent` (the 30 days immediately before `date`) against
/// `previous` (the 30 days before that). Both windows exclude absent days.
/// Either window empty → `Stable`. A zero `previous` mean also classifies
/// `Stable`: a zero baseline carries no directional information.
pub fn classify_trend(demand: &DailyDemand, date: NaiveDate) -> Trend {
    let recent = demand.trailing_window(date, WINDOW_DAYS);

    let previous_end = match date.checked_sub_days(Days::new(WINDOW_DAYS)) {
        Some(day) => day,
        None => return Trend::Stable,
    };
    let previous = demand.trailing_window(previous_end, WINDOW_DAYS);

    if recent.is_empty() || previous.is_empty() {
        return Trend::Stable;
    }

    let recent_mean = mean(&recent);
    let previous_mean = mean(&previous);
    if previous_mean == 0.0 {
        return Trend::Stable;
    }

    let change = (recent_mean - previous_mean) / previous_mean;
    if change > TREND_THRESHOLD {
        Trend::Up
    } else if change < -TREND_THRESHOLD {
        Trend::Down
    } else {
        Trend::Stable
    }
}
