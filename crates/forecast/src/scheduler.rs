use serde::{Deserialize, Serialize};

use stockcast_core::TenantId;
use stockcast_inventory::RawMovement;

use crate::job::AnalyticsJob;
use crate::result::AnalyticsError;

/// Immutable snapshot of a tenant's raw movement records.
///
/// Records arrive in wire form (string dates, lenient quantities); jobs
/// validate them with skip-and-continue semantics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementSnapshot {
    pub tenant_id: TenantId,
    pub records: Vec<RawMovement>,
}

impl MovementSnapshot {
    pub fn new(tenant_id: TenantId, records: Vec<RawMovement>) -> Self {
        Self { tenant_id, records }
    }
}

/// Source of movement snapshots (e.g. the ERP backend's read model).
///
/// Keeps this crate transport-agnostic: callers decide where snapshots come
/// from and how fresh they are.
pub trait MovementReader: Send + Sync + 'static {
    fn read(&self, tenant_id: TenantId) -> Option<MovementSnapshot>;
}

/// Tenant scope for execution.
///
/// - `Any`: run jobs for any tenant (useful for shared workers).
/// - `Tenant`: only accept jobs for the specified tenant (safe initialization / single-tenant worker).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TenantScope {
    Any,
    Tenant(TenantId),
}

impl TenantScope {
    pub fn allows(&self, tenant_id: TenantId) -> bool {
        match self {
            TenantScope::Any => true,
            TenantScope::Tenant(t) => *t == tenant_id,
        }
    }
}

/// Scheduler/executor for analytics jobs.
///
/// This is intentionally minimal and storage/runtime agnostic.
pub trait AnalyticsScheduler: Send + Sync + 'static {
    fn scope(&self) -> TenantScope;

    fn run<J: AnalyticsJob>(&self, job: J) -> Result<J::Output, AnalyticsError> {
        if !self.scope().allows(job.tenant_id()) {
            return Err(AnalyticsError::InvalidInput(
                "tenant scope violation (job tenant not allowed by scheduler)".to_string(),
            ));
        }
        job.run()
    }
}

/// Simple synchronous scheduler that runs jobs immediately in-process.
#[derive(Debug, Copy, Clone)]
pub struct LocalScheduler {
    scope: TenantScope,
}

impl LocalScheduler {
    pub fn new(scope: TenantScope) -> Self {
        Self { scope }
    }

    pub fn for_tenant(tenant_id: TenantId) -> Self {
        Self::new(TenantScope::Tenant(tenant_id))
    }
}

impl AnalyticsScheduler for LocalScheduler {
    fn scope(&self) -> TenantScope {
        self.scope
    }
}
