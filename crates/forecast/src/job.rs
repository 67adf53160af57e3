use stockcast_core::TenantId;

use crate::result::AnalyticsError;

/// A tenant-scoped analytics inference unit.
///
/// Jobs consume immutable **snapshots** via their `Input` type and return a
/// typed `Output`. This crate stays storage-agnostic: inputs are provided by
/// callers (infra/workers).
pub trait AnalyticsJob: Send + Sync + 'static {
    type Input: Send + Sync + 'static;
    type Output;

    /// The tenant this job belongs to (tenant-safe execution model).
    fn tenant_id(&self) -> TenantId;

    /// The input snapshot the job will run on.
    fn input(&self) -> &Self::Input;

    /// Execute the computation and return the insight.
    ///
    /// Must not mutate domain state.
    fn run(&self) -> Result<Self::Output, AnalyticsError>;
}
