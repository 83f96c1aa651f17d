use std::time::{Duration, Instant};

/// Implements performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Starts a new timer.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns elapsed time in seconds.
    pub fn elapsed_secs_as_float(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }

    /// Returns elapsed time in milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        self.start.elapsed().as_millis()
    }

    /// Runs an action and returns its result together with the time it took.
    pub fn measure_duration<R, F: FnOnce() -> R>(action: F) -> (R, Duration) {
        let start = Timer::start();
        let result = action();

        (result, start.start.elapsed())
    }

    /// Runs an action and passes the time it took to the callback.
    pub fn measure_duration_with_callback<R, F, C>(action: F, callback: C) -> R
    where
        F: FnOnce() -> R,
        C: FnOnce(Duration),
    {
        let (result, duration) = Self::measure_duration(action);
        callback(duration);

        result
    }
}
