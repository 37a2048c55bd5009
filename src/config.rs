//! Configuration of the benchmark [`Harness`](crate::Harness).

/// The number of iterations each strategy is timed over by default.
pub const DEFAULT_ITERATIONS: u64 = 100_000_000;

/// The relative difference below which two durations count as equivalent.
pub const DEFAULT_TOLERANCE: f64 = 0.10;

/// Configuration for a [`Harness`](crate::Harness).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchConfig {
    /// How many times each identity check runs inside one timed loop.
    pub iterations: u64,
    /// The relative tolerance used by [`Claim::Equivalent`](crate::Claim::Equivalent).
    ///
    /// `0.10` means the two durations may differ by less than 10% of the larger one.
    pub tolerance: f64,
}

impl BenchConfig {
    /// Creates a new [`BenchConfig`] with the given iteration count and the default tolerance.
    pub fn new(iterations: u64) -> Self {
        BenchConfig {
            iterations,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig::new(DEFAULT_ITERATIONS)
    }
}
