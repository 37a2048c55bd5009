//! Tests for the strategies and the harness with small iteration counts.
use crate::helper::init_logger;
use crate::helper::test_types::{GenericType, Impostor, OtherType};
use log::LevelFilter;
use std::time::{Duration, Instant};
use type_identity_bench::{
    Abstraction, BenchConfig, Claim, ClaimViolation, ConcreteType, Harness, Measurement, Report,
    Strategy, DEFAULT_ITERATIONS, DEFAULT_TOLERANCE,
};

mod helper;

/// All strategies recognise the concrete type.
#[test]
fn strategies_agree_on_match() {
    let instance: &dyn Abstraction = &ConcreteType::new();
    for strategy in Strategy::ALL {
        assert!(strategy.matches::<ConcreteType>(instance), "{}", strategy);
    }
}

/// All strategies reject other types.
#[test]
fn strategies_agree_on_mismatch() {
    let other: &dyn Abstraction = &OtherType::new();
    let generic: &dyn Abstraction = &GenericType::new(String::from("value"));
    for strategy in Strategy::ALL {
        assert!(!strategy.matches::<ConcreteType>(other), "{}", strategy);
        assert!(!strategy.matches::<ConcreteType>(generic), "{}", strategy);
        assert!(!strategy.matches::<OtherType>(&ConcreteType::new()), "{}", strategy);
    }
}

/// Name comparison only sees the cached name; the type-based strategies see the real type.
#[test]
fn name_comparison_trusts_cached_name() {
    let impostor: &dyn Abstraction = &Impostor::new();
    assert_eq!(impostor.type_name(), "ConcreteType");

    assert!(Strategy::NameComparison.matches::<ConcreteType>(impostor));
    assert!(!Strategy::TypeTest.matches::<ConcreteType>(impostor));
    assert!(!Strategy::SafeCast.matches::<ConcreteType>(impostor));
    assert!(!Strategy::ReflectedType.matches::<ConcreteType>(impostor));
}

#[test]
fn default_config() {
    let config = BenchConfig::default();
    assert_eq!(config.iterations, 100_000_000);
    assert_eq!(config.iterations, DEFAULT_ITERATIONS);
    assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
    assert_eq!(BenchConfig::new(5).with_tolerance(0.25).tolerance, 0.25);
    assert_eq!(Harness::default().config(), &config);
}

/// A full run has one measurement per strategy, each over the configured iterations.
#[test]
fn run_all_measures_every_strategy() {
    init_logger(LevelFilter::Debug);
    let harness = Harness::new(BenchConfig::new(10_000));
    let instance = ConcreteType::new();

    let report = harness.run_all::<ConcreteType>(&instance);

    assert_eq!(report.len(), 4);
    let strategies: Vec<_> = report.measurements().map(|m| m.strategy).collect();
    assert_eq!(strategies, Strategy::ALL.to_vec());
    for m in report.measurements() {
        assert_eq!(m.iterations, 10_000);
        assert_eq!(report.duration(m.strategy), Some(m.elapsed()));
    }
}

/// The pairwise benchmarks only measure the two strategies involved.
#[test]
fn pairwise_benchmarks_measure_their_pair() {
    init_logger(LevelFilter::Debug);
    // An infinite tolerance makes the equivalence claim always hold.
    let harness = Harness::new(BenchConfig::new(1_000).with_tolerance(f64::INFINITY));
    let instance = ConcreteType::new();

    let report = harness
        .type_test_vs_safe_cast::<ConcreteType>(&instance)
        .unwrap();
    assert_eq!(report.len(), 2);
    assert!(report.get(Strategy::TypeTest).is_some());
    assert!(report.get(Strategy::SafeCast).is_some());

    // Whatever the timing, the result carries the pair that was measured.
    for result in [
        harness.name_comparison_vs_type_test::<ConcreteType>(&instance),
        harness.reflected_type_vs_type_test::<ConcreteType>(&instance),
    ] {
        match result {
            Ok(report) => assert_eq!(report.len(), 2),
            Err(ClaimViolation::NotSlower { faster, .. }) => {
                assert_eq!(faster.0, Strategy::TypeTest)
            }
            Err(other) => panic!("unexpected violation: {}", other),
        }
    }
}

/// Claims are checked against the recorded durations, not re-measured.
#[test]
fn verify_reports_violations_in_order() {
    let start = Instant::now();
    let at = |strategy, ms| Measurement::new(strategy, 1, start, start + Duration::from_millis(ms));
    let report: Report = [
        at(Strategy::NameComparison, 10),
        at(Strategy::TypeTest, 20),
        at(Strategy::SafeCast, 40),
        at(Strategy::ReflectedType, 30),
    ]
    .into_iter()
    .collect();

    let claims = Claim::defaults(0.10);
    assert!(matches!(
        report.verify(&claims),
        Err(ClaimViolation::NotSlower {
            slower: (Strategy::NameComparison, _),
            ..
        })
    ));

    let violations = report.violations(&claims);
    assert_eq!(violations.len(), 2);
    assert!(matches!(violations[1], ClaimViolation::NotEquivalent { .. }));
    assert!(violations[1].to_string().contains("50.0%"), "{}", violations[1]);
}
