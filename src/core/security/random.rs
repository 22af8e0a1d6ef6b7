//! Random sources for the classifier
//!
//! Confidence jitter and the image placeholder policy draw from a
//! [`RandomSource`] so that callers can pin the values in tests.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource: Send + Sync + std::fmt::Debug {
    /// Next uniform sample in `[0, 1)`
    fn next_unit(&self) -> f64;
}

/// Thread-local RNG, the default source
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().r#gen::<f64>()
    }
}

/// Reproducible source seeded once
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_unit(&self) -> f64 {
        self.rng.lock().r#gen::<f64>()
    }
}

/// Replays a fixed sequence of samples, cycling when exhausted
#[derive(Debug)]
pub struct FixedRandom {
    values: Vec<f64>,
    cursor: Mutex<usize>,
}

impl FixedRandom {
    /// Values are clamped into `[0, 1)`; an empty sequence always yields 0.
    pub fn new(values: Vec<f64>) -> Self {
        let values = values
            .into_iter()
            .map(|v| v.clamp(0.0, 1.0 - f64::EPSILON))
            .collect();
        Self {
            values,
            cursor: Mutex::new(0),
        }
    }

    /// Source that always yields the same sample
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedRandom {
    fn next_unit(&self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let mut cursor = self.cursor.lock();
        let value = self.values[*cursor % self.values.len()];
        *cursor += 1;
        value
    }
}
