//! # type-identity-bench
//! Micro-benchmarks for checking the concrete type behind a trait object.
//!
//! Given a `&dyn Abstraction` that is really a [`ConcreteType`], the [`Harness`] times four
//! ways of asking "is this a `ConcreteType`?":
//!
//!  - [`Strategy::NameComparison`]: compare a cached type name string.
//!  - [`Strategy::TypeTest`]: `instance.is::<ConcreteType>()`.
//!  - [`Strategy::SafeCast`]: `instance.downcast_ref::<ConcreteType>().is_some()`.
//!  - [`Strategy::ReflectedType`]: compare runtime [`TypeDescriptor`]s.
//!
//! Each strategy runs [`BenchConfig::iterations`] times in a tight loop, the durations are
//! logged through the [`log`] facade, and [`Claim`]s about their relative cost are checked.
//!
//! ```
//! use type_identity_bench::{BenchConfig, ConcreteType, Harness, Strategy};
//!
//! let harness = Harness::new(BenchConfig::new(1_000));
//! let instance = ConcreteType::new();
//! let report = harness.run_all::<ConcreteType>(&instance);
//! assert!(report.duration(Strategy::TypeTest).is_some());
//! ```

extern crate self as type_identity_bench;

pub mod config;
pub mod strategy;

mod claim;
mod harness;
mod identity;
mod measurement;

pub use claim::{relative_difference, Claim, ClaimViolation};
pub use config::{BenchConfig, DEFAULT_ITERATIONS, DEFAULT_TOLERANCE};
pub use harness::Harness;
pub use identity::{simple_name, Abstraction, Base, ConcreteType, TypeDescriptor};
pub use measurement::{Measurement, Report};
pub use strategy::Strategy;
