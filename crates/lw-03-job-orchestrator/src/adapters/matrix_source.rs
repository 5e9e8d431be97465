//! Matrix generators.

use crate::ports::MatrixSource;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared_types::Matrix;

/// Generates matrices from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMatrixSource;

impl MatrixSource for RandomMatrixSource {
    fn generate(&self, size: usize, upper: i64) -> Matrix {
        Matrix::random(size, upper, &mut rand::thread_rng())
    }
}

/// Generates a reproducible sequence of matrices from a fixed seed.
#[derive(Debug)]
pub struct SeededMatrixSource {
    rng: Mutex<StdRng>,
}

impl SeededMatrixSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl MatrixSource for SeededMatrixSource {
    fn generate(&self, size: usize, upper: i64) -> Matrix {
        Matrix::random(size, upper, &mut *self.rng.lock())
    }
}
