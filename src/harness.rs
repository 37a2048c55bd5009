//! The timing loop and the benchmark operations built on it.
//!
//! Timings are only meaningful when nothing else competes for the core, so the
//! benchmarks should run one at a time (`--test-threads=1`) on a release build.

use crate::claim::{Claim, ClaimViolation};
use crate::config::BenchConfig;
use crate::identity::{simple_name, Abstraction, TypeDescriptor};
use crate::measurement::{Measurement, Report};
use crate::strategy::{name_comparison, reflected_type, safe_cast, type_test, Strategy};
use log::{debug, error, info, trace};
use std::hint::black_box;
use std::time::Instant;

/// Times identity checks against a `dyn Abstraction`.
#[derive(Copy, Clone, Debug, Default)]
pub struct Harness {
    config: BenchConfig,
}

impl Harness {
    /// Creates a new [`Harness`].
    pub fn new(config: BenchConfig) -> Self {
        Harness { config }
    }

    /// The configuration of this harness.
    pub fn config(&self) -> &BenchConfig {
        &self.config
    }

    /// Times `strategy` checking whether `instance` is a `T`.
    pub fn measure<T: Abstraction>(
        &self,
        strategy: Strategy,
        instance: &dyn Abstraction,
    ) -> Measurement {
        // The targets are resolved once; only the check itself is timed.
        let measurement = match strategy {
            Strategy::NameComparison => {
                let name = simple_name::<T>();
                self.time(strategy, instance, |i| name_comparison(i, name))
            }
            Strategy::TypeTest => self.time(strategy, instance, type_test::<T>),
            Strategy::SafeCast => self.time(strategy, instance, safe_cast::<T>),
            Strategy::ReflectedType => {
                let descriptor = TypeDescriptor::of::<T>();
                self.time(strategy, instance, |i| reflected_type(i, &descriptor))
            }
        };
        info!("{}", measurement);
        measurement
    }

    /// The loop itself.
    #[inline(never)]
    fn time<F>(&self, strategy: Strategy, instance: &dyn Abstraction, mut check: F) -> Measurement
    where
        F: FnMut(&dyn Abstraction) -> bool,
    {
        let iterations = self.config.iterations;
        trace!("Timing {} over {} iterations.", strategy, iterations);

        let start = Instant::now();
        for _ in 0..iterations {
            black_box(check(black_box(instance)));
        }
        let end = Instant::now();

        Measurement::new(strategy, iterations, start, end)
    }

    /// Times every strategy, in [`Strategy::ALL`] order.
    pub fn run_all<T: Abstraction>(&self, instance: &dyn Abstraction) -> Report {
        Strategy::ALL
            .iter()
            .map(|&strategy| self.measure::<T>(strategy, instance))
            .collect()
    }

    /// Times the two strategies of `claim` and checks it.
    pub fn bench_claim<T: Abstraction>(
        &self,
        instance: &dyn Abstraction,
        claim: Claim,
    ) -> Result<Report, ClaimViolation> {
        let report: Report = claim
            .strategies()
            .iter()
            .map(|&strategy| self.measure::<T>(strategy, instance))
            .collect();

        match claim.check(&report) {
            Ok(()) => {
                debug!("Claim held: {}.", claim);
                Ok(report)
            }
            Err(violation) => {
                error!("{}", violation);
                Err(violation)
            }
        }
    }

    /// Checks that comparing cached names is slower than a type test.
    pub fn name_comparison_vs_type_test<T: Abstraction>(
        &self,
        instance: &dyn Abstraction,
    ) -> Result<Report, ClaimViolation> {
        self.bench_claim::<T>(instance, Claim::defaults(self.config.tolerance)[0])
    }

    /// Checks that comparing reflected type descriptors is slower than a type test.
    pub fn reflected_type_vs_type_test<T: Abstraction>(
        &self,
        instance: &dyn Abstraction,
    ) -> Result<Report, ClaimViolation> {
        self.bench_claim::<T>(instance, Claim::defaults(self.config.tolerance)[1])
    }

    /// Checks that a type test and a safe cast cost the same, within the configured tolerance.
    pub fn type_test_vs_safe_cast<T: Abstraction>(
        &self,
        instance: &dyn Abstraction,
    ) -> Result<Report, ClaimViolation> {
        self.bench_claim::<T>(instance, Claim::defaults(self.config.tolerance)[2])
    }

    /// Times all four strategies and checks the default claims.
    ///
    /// On a violation every measured duration is logged alongside it.
    pub fn run_scenario<T: Abstraction>(
        &self,
        instance: &dyn Abstraction,
    ) -> Result<Report, ClaimViolation> {
        let report = self.run_all::<T>(instance);

        if let Err(violation) = report.verify(&Claim::defaults(self.config.tolerance)) {
            error!("{}", violation);
            for measurement in report.measurements() {
                error!("{}", measurement);
            }
            return Err(violation);
        }
        Ok(report)
    }
}
