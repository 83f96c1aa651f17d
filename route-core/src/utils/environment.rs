use crate::utils::{DefaultRandom, Quota, Random};
use std::sync::Arc;

/// A logger type which is called with various information regarding optimization progress.
pub type InfoLogger = Arc<dyn Fn(&str) + Send + Sync>;

/// Keeps track of environment specific information which influences algorithm behavior.
#[derive(Clone)]
pub struct Environment {
    /// A wrapper on random generator.
    pub random: Arc<dyn Random>,

    /// A global execution quota.
    pub quota: Option<Arc<dyn Quota>>,

    /// An information logger.
    pub logger: InfoLogger,
}

impl Environment {
    /// Creates a new instance of `Environment`.
    pub fn new(random: Arc<dyn Random>, quota: Option<Arc<dyn Quota>>, logger: InfoLogger) -> Self {
        Self { random, quota, logger }
    }

    /// Creates a new instance of `Environment` with repeatable random generator.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { random: Arc::new(DefaultRandom::new_repeatable(seed)), ..Self::default() }
    }

    /// Returns true if quota is set and reached.
    pub fn is_quota_reached(&self) -> bool {
        self.quota.as_ref().is_some_and(|quota| quota.is_reached())
    }
}

impl Default for Environment {
    fn default() -> Self {
        Environment::new(Arc::new(DefaultRandom::default()), None, Arc::new(|msg| println!("{msg}")))
    }
}

/// Returns amount of CPUs.
pub fn get_cpus() -> usize {
    num_cpus::get()
}
