mod random;
pub use self::random::*;

use crate::utils::*;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

pub fn test_logger() -> InfoLogger {
    Arc::new(|_| ())
}

pub fn create_test_environment() -> Environment {
    create_test_environment_with_seed(42)
}

pub fn create_test_environment_with_seed(seed: u64) -> Environment {
    Environment::new(Arc::new(DefaultRandom::new_repeatable(seed)), None, test_logger())
}

pub fn create_test_environment_with_quota(quota: Arc<dyn Quota>) -> Environment {
    Environment { quota: Some(quota), ..create_test_environment() }
}

/// Collects log messages.
pub fn create_collecting_logger() -> (InfoLogger, Arc<std::sync::Mutex<Vec<String>>>) {
    let messages = Arc::new(std::sync::Mutex::new(Vec::new()));
    let logger: InfoLogger = {
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    };

    (logger, messages)
}

/// A quota which is reached after given amount of checks.
pub struct CountingQuota {
    limit: usize,
    checks: AtomicUsize,
}

impl CountingQuota {
    pub fn new(limit: usize) -> Self {
        Self { limit, checks: AtomicUsize::new(0) }
    }
}

impl Quota for CountingQuota {
    fn is_reached(&self) -> bool {
        self.checks.fetch_add(1, Ordering::Relaxed) >= self.limit
    }
}
