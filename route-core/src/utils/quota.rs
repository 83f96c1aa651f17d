#[cfg(test)]
#[path = "../../tests/unit/utils/quota_test.rs"]
mod quota_test;

use crate::utils::Timer;
use std::sync::Arc;

/// Specifies a computational quota for a single optimization run.
/// The main purpose is to allow to stop algorithm in reaction to external events such
/// as caller's deadline, cancellation, etc.
pub trait Quota: Send + Sync {
    /// Returns true when computation should be stopped.
    fn is_reached(&self) -> bool;
}

/// A time quota.
pub struct TimeQuota {
    start: Timer,
    limit_in_secs: f64,
}

impl TimeQuota {
    /// Creates a new instance of `TimeQuota`. The clock starts immediately.
    pub fn new(limit_in_secs: f64) -> Self {
        Self { start: Timer::start(), limit_in_secs }
    }
}

impl Quota for TimeQuota {
    fn is_reached(&self) -> bool {
        self.start.elapsed_secs_as_float() > self.limit_in_secs
    }
}

struct CompositeTimeQuota {
    inner: Arc<dyn Quota>,
    time: TimeQuota,
}

impl Quota for CompositeTimeQuota {
    fn is_reached(&self) -> bool {
        self.time.is_reached() || self.inner.is_reached()
    }
}

/// Combines an optional time limit (in seconds) with an existing quota.
pub fn create_quota_with_time_limit(
    limit_in_secs: Option<f64>,
    quota: Option<Arc<dyn Quota>>,
) -> Option<Arc<dyn Quota>> {
    match (limit_in_secs, quota) {
        (Some(limit), None) => Some(Arc::new(TimeQuota::new(limit))),
        (None, Some(quota)) => Some(quota),
        (Some(limit), Some(inner)) => Some(Arc::new(CompositeTimeQuota { inner, time: TimeQuota::new(limit) })),
        (None, None) => None,
    }
}
