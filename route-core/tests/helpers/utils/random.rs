use crate::utils::{Random, RandomGen};
use rand::SeedableRng;
use std::sync::Mutex;

struct FakeDistribution<T> {
    values: Vec<T>,
}

impl<T> FakeDistribution<T> {
    pub fn new(values: Vec<T>) -> Self {
        let mut values = values;
        values.reverse();
        Self { values }
    }

    pub fn next(&mut self) -> T {
        self.values.pop().expect("no more fake values")
    }
}

/// Returns predefined values in the given order.
pub struct FakeRandom {
    ints: Mutex<FakeDistribution<i32>>,
    reals: Mutex<FakeDistribution<f64>>,
}

impl FakeRandom {
    pub fn new(ints: Vec<i32>, reals: Vec<f64>) -> Self {
        Self { ints: Mutex::new(FakeDistribution::new(ints)), reals: Mutex::new(FakeDistribution::new(reals)) }
    }
}

impl Random for FakeRandom {
    fn uniform_int(&self, min: i32, max: i32) -> i32 {
        assert!(min <= max);
        self.ints.lock().unwrap().next()
    }

    fn uniform_real(&self, min: f64, max: f64) -> f64 {
        assert!(min < max);
        self.reals.lock().unwrap().next()
    }

    fn is_hit(&self, probability: f64) -> bool {
        self.uniform_real(0., 1.) < probability
    }

    fn get_rng(&self) -> RandomGen {
        RandomGen::seed_from_u64(0)
    }
}
