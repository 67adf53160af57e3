use std::collections::BTreeMap;

use chrono::{Days, NaiveDate};

use crate::movement::Movement;

/// Daily demand series: calendar day → summed `|quantity|` of that day's
/// demand-subset movements.
///
/// Built fresh per computation, never cached. Absent days mean "no observed
/// demand"; windowing deliberately distinguishes that from a zero bucket.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DailyDemand {
    buckets: BTreeMap<NaiveDate, f64>,
}

impl DailyDemand {
    /// Aggregate movements into daily buckets.
    ///
    /// Movements outside the demand subset are ignored entirely (they do not
    /// zero out or subtract).
    pub fn from_movements(movements: &[Movement]) -> Self {
        let mut buckets: BTreeMap<NaiveDate, f64> = BTreeMap::new();

        for movement in movements {
            if movement.movement_type.is_demand() {
                *buckets.entry(movement.occurred_on()).or_insert(0.0) +=
                    movement.quantity.abs();
            }
        }

        Self { buckets }
    }

    pub fn get(&self, day: NaiveDate) -> Option<f64> {
        self.buckets.get(&day).copied()
    }

    /// Demand on `day`, treating absent days as zero.
    pub fn demand_on(&self, day: NaiveDate) -> f64 {
        self.get(day).unwrap_or(0.0)
    }

    /// Values of the `days` calendar days strictly before `end` that have an
    /// entry. Absent days are excluded, not zero-filled.
    pub fn trailing_window(&self, end: NaiveDate, days: u64) -> Vec<f64> {
        (1..=days)
            .filter_map(|back| end.checked_sub_days(Days::new(back)))
            .filter_map(|day| self.get(day))
            .collect()
    }

    /// Total demand across all days.
    pub fn total(&self) -> f64 {
        self.buckets.values().sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterate buckets in date order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.buckets.iter().map(|(day, value)| (*day, *value))
    }
}
