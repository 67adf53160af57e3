use chrono::{Days, NaiveDate};
use serde_json::json;
use tracing::info;

use stockcast_core::TenantId;
use stockcast_inventory::{DailyDemand, parse_movements};

use crate::accuracy::estimate_accuracy;
use crate::forecaster::{HISTORY_DAYS, HORIZON_DAYS, forecast_series};
use crate::job::AnalyticsJob;
use crate::result::{AnalyticsError, ForecastReport};
use crate::scheduler::MovementSnapshot;
use crate::strategy::{HistoricalForecast, NoisyEcho};
use crate::trend::classify_trend;

/// Demand forecast job: raw movement records in, 60-day series out.
///
/// Pipeline:
/// - parse the snapshot's records (malformed ones are skipped, not fatal)
/// - aggregate daily demand
/// - rolling-mean projection over the horizon
/// - trend classification and accuracy estimation
#[derive(Debug, Clone)]
pub struct DemandForecastJob<S = NoisyEcho> {
    tenant_id: TenantId,
    input: MovementSnapshot,
    /// Last day of the observed window ("today" from the caller's view).
    as_of: NaiveDate,
    strategy: S,
}

impl DemandForecastJob<NoisyEcho> {
    pub fn new(tenant_id: TenantId, input: MovementSnapshot, as_of: NaiveDate) -> Self {
        Self {
            tenant_id,
            input,
            as_of,
            strategy: NoisyEcho::new(),
        }
    }
}

impl<S> DemandForecastJob<S> {
    /// Swap the historical-forecast strategy (a seeded generator for
    /// reproducible runs, or `ExactEcho` for backtests).
    pub fn with_strategy<T>(self, strategy: T) -> DemandForecastJob<T> {
        DemandForecastJob {
            tenant_id: self.tenant_id,
            input: self.input,
            as_of: self.as_of,
            strategy,
        }
    }

    pub fn as_of(&self) -> NaiveDate {
        self.as_of
    }

    /// First day of the observed window.
    pub fn window_start(&self) -> NaiveDate {
        self.as_of - Days::new(HISTORY_DAYS - 1)
    }
}

impl<S> AnalyticsJob for DemandForecastJob<S>
where
    S: HistoricalForecast + Clone + Send + Sync + 'static,
{
    type Input = MovementSnapshot;
    type Output = ForecastReport;

    fn tenant_id(&self) -> TenantId {
        self.tenant_id
    }

    fn input(&self) -> &Self::Input {
        &self.input
    }

    fn run(&self) -> Result<ForecastReport, AnalyticsError> {
        if self.input.tenant_id != self.tenant_id {
            return Err(AnalyticsError::InvalidInput(
                "tenant_id mismatch between job and snapshot".to_string(),
            ));
        }

        let batch = parse_movements(&self.input.records);
        let demand = DailyDemand::from_movements(&batch.movements);

        let window_start = self.window_start();
        let mut strategy = self.strategy.clone();
        let points = forecast_series(&demand, window_start, &mut strategy);

        let observed = &points[..HISTORY_DAYS as usize];
        let projected = &points[HISTORY_DAYS as usize..];

        let avg_daily_demand =
            observed.iter().map(|p| p.actual).sum::<f64>() / HISTORY_DAYS as f64;
        let projected_total: f64 = projected.iter().map(|p| p.forecast).sum();

        // Headline direction: the classification at the first projected day.
        let trend = classify_trend(&demand, self.as_of + Days::new(1));
        let accuracy = estimate_accuracy(&points, &batch.movements);

        let explanation = format!(
            "projected {projected_total:.0} units over the next {HORIZON_DAYS} days \
             (avg observed {avg_daily_demand:.1}/day, trend {trend}, accuracy {accuracy:.0}%)"
        );

        info!(
            tenant = %self.tenant_id,
            %trend,
            accuracy,
            skipped = batch.skipped,
            "demand forecast computed"
        );

        Ok(ForecastReport {
            points,
            trend,
            accuracy,
            avg_daily_demand,
            projected_total,
            skipped_records: batch.skipped,
            explanation,
            metadata: json!({
                "kind": "inventory.demand_forecast",
                "tenant_id": self.tenant_id.to_string(),
                "window_start": window_start.to_string(),
                "as_of": self.as_of.to_string(),
                "observed_days": HISTORY_DAYS,
                "projected_days": HORIZON_DAYS,
            }),
        })
    }
}
