#[cfg(test)]
#[path = "../../tests/unit/utils/random_test.rs"]
mod random_test;

use rand::prelude::*;
use std::sync::Mutex;

/// Specifies underlying random generator type.
pub type RandomGen = SmallRng;

/// Provides the way to use randomized values in generic way.
pub trait Random: Send + Sync {
    /// Produces integral random value, uniformly distributed on the closed interval [min, max]
    fn uniform_int(&self, min: i32, max: i32) -> i32;

    /// Produces real random value, uniformly distributed on the closed interval [min, max)
    fn uniform_real(&self, min: f64, max: f64) -> f64;

    /// Tests probability value in (0., 1.) range.
    fn is_hit(&self, probability: f64) -> bool;

    /// Returns an independent RNG derived from the current state.
    fn get_rng(&self) -> RandomGen;

    /// Produces an index uniformly distributed on the half-open interval [0, size).
    fn uniform_index(&self, size: usize) -> usize {
        assert!(size > 0);
        self.uniform_int(0, size as i32 - 1) as usize
    }
}

/// A default random implementation.
pub struct DefaultRandom {
    rng: Mutex<SmallRng>,
}

impl DefaultRandom {
    /// Creates a new instance of `DefaultRandom` which produces the same sequence of values for
    /// the same seed.
    pub fn new_repeatable(seed: u64) -> Self {
        Self { rng: Mutex::new(SmallRng::seed_from_u64(seed)) }
    }

    fn with_rng<R>(&self, action: impl FnOnce(&mut SmallRng) -> R) -> R {
        // NOTE a poisoned lock still holds a usable rng state
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        action(&mut rng)
    }
}

impl Default for DefaultRandom {
    fn default() -> Self {
        Self { rng: Mutex::new(SmallRng::from_entropy()) }
    }
}

impl Random for DefaultRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        if min == max {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..=max))
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        if (min - max).abs() < f64::EPSILON {
            return min;
        }

        assert!(min < max);
        self.with_rng(|rng| rng.gen_range(min..max))
    }

    fn is_hit(&self, probability: f64) -> bool {
        self.with_rng(|rng| rng.gen_bool(probability.clamp(0., 1.)))
    }

    fn get_rng(&self) -> RandomGen {
        self.with_rng(|rng| SmallRng::seed_from_u64(rng.next_u64()))
    }
}
