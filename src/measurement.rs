//! Timing results.

use crate::claim::{Claim, ClaimViolation};
use crate::strategy::Strategy;
use hashbrown::HashMap;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

/// The timing of one strategy over one loop.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Measurement {
    /// The strategy that was timed.
    pub strategy: Strategy,
    /// How many checks the loop performed.
    pub iterations: u64,
    /// When the loop started.
    pub start: Instant,
    /// When the loop finished.
    pub end: Instant,
}

impl Measurement {
    /// Creates a new [`Measurement`].
    pub fn new(strategy: Strategy, iterations: u64, start: Instant, end: Instant) -> Self {
        Measurement {
            strategy,
            iterations,
            start,
            end,
        }
    }

    /// The wall-clock time the loop took.
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }

    /// The elapsed time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed().as_secs_f64() * 1_000.0
    }
}

impl Display for Measurement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = format!("{} duration:", self.strategy);
        write!(f, "{:<26} {:.2}ms", label, self.millis())
    }
}

/// The measurements taken in one run, at most one per [`Strategy`].
#[derive(Clone, Debug, Default)]
pub struct Report {
    measurements: HashMap<Strategy, Measurement>,
}

impl Report {
    /// Creates an empty [`Report`].
    pub fn new() -> Self {
        Report::default()
    }

    /// Adds a measurement, replacing any earlier one for the same strategy.
    pub fn insert(&mut self, measurement: Measurement) {
        self.measurements.insert(measurement.strategy, measurement);
    }

    /// Gets the measurement of `strategy`.
    pub fn get(&self, strategy: Strategy) -> Option<&Measurement> {
        self.measurements.get(&strategy)
    }

    /// Gets the elapsed time of `strategy`.
    pub fn duration(&self, strategy: Strategy) -> Option<Duration> {
        self.get(strategy).map(Measurement::elapsed)
    }

    /// The number of strategies measured.
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether nothing was measured.
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }

    /// The measurements in [`Strategy::ALL`] order.
    pub fn measurements(&self) -> impl Iterator<Item = &Measurement> {
        let order: &'static [Strategy] = &Strategy::ALL;
        order.iter().filter_map(move |s| self.measurements.get(s))
    }

    /// Checks `claims` in order, returning the first violation.
    pub fn verify(&self, claims: &[Claim]) -> Result<(), ClaimViolation> {
        claims.iter().try_for_each(|claim| claim.check(self))
    }

    /// Checks every claim, returning all of the violations.
    pub fn violations(&self, claims: &[Claim]) -> Vec<ClaimViolation> {
        claims
            .iter()
            .filter_map(|claim| claim.check(self).err())
            .collect()
    }
}

impl FromIterator<Measurement> for Report {
    fn from_iter<I: IntoIterator<Item = Measurement>>(iter: I) -> Self {
        let mut report = Report::new();
        for measurement in iter {
            report.insert(measurement);
        }
        report
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for measurement in self.measurements() {
            writeln!(f, "{}", measurement)?;
        }
        Ok(())
    }
}
