use stockcast_inventory::Movement;

use crate::point::ForecastPoint;
use crate::stats::mean;

/// Error scale (units of demand) at which accuracy bottoms out at zero.
const FULL_ERROR_SCALE: f64 = 50.0;

/// Estimate forecast accuracy in \[0, 100\] from historical error samples.
///
/// When the observed window has no nonzero-demand days there are no error
/// samples; instead of reporting 0% to a tenant with no history yet, fall
/// back to grading raw demand volume. Both tiers are presentation
/// heuristics, not statistical accuracy metrics.
pub fn estimate_accuracy(points: &[ForecastPoint], movements: &[Movement]) -> f64 {
    let errors: Vec<f64> = points.iter().filter_map(|p| p.error).collect();

    if !errors.is_empty() {
        let avg_error = mean(&errors);
        return (100.0 - (avg_error / FULL_ERROR_SCALE) * 100.0)
            .max(0.0)
            .round();
    }

    let volume: f64 = movements
        .iter()
        .filter(|m| m.movement_type.is_demand())
        .map(|m| m.quantity.abs())
        .sum();

    if volume > 50.0 {
        85.0
    } else if volume > 20.0 {
        75.0
    } else if volume > 0.0 {
        65.0
    } else {
        0.0
    }
}
