//! Assertions about the relative cost of strategies.

use crate::measurement::Report;
use crate::strategy::Strategy;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;
use ClaimViolation::{Missing, NotEquivalent, NotSlower};

/// An expected relation between the durations of two strategies.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Claim {
    /// `slower` takes strictly longer than `faster`.
    SlowerThan { slower: Strategy, faster: Strategy },
    /// `a` and `b` differ by less than `tolerance`, relative to the larger of the two.
    Equivalent {
        a: Strategy,
        b: Strategy,
        tolerance: f64,
    },
}

impl Claim {
    /// The three claims every full run is checked against:
    ///
    ///  - name comparison is slower than the type test,
    ///  - reflected type equality is slower than the type test,
    ///  - the type test and the safe cast are equivalent within `tolerance`.
    pub fn defaults(tolerance: f64) -> [Claim; 3] {
        [
            Claim::SlowerThan {
                slower: Strategy::NameComparison,
                faster: Strategy::TypeTest,
            },
            Claim::SlowerThan {
                slower: Strategy::ReflectedType,
                faster: Strategy::TypeTest,
            },
            Claim::Equivalent {
                a: Strategy::TypeTest,
                b: Strategy::SafeCast,
                tolerance,
            },
        ]
    }

    /// The two strategies this claim relates.
    pub fn strategies(&self) -> [Strategy; 2] {
        match *self {
            Claim::SlowerThan { slower, faster } => [slower, faster],
            Claim::Equivalent { a, b, .. } => [a, b],
        }
    }

    /// Checks this claim against the durations in `report`.
    pub fn check(&self, report: &Report) -> Result<(), ClaimViolation> {
        let [first, second] = self.strategies();
        let first_duration = report.duration(first).ok_or(Missing(first))?;
        let second_duration = report.duration(second).ok_or(Missing(second))?;

        match *self {
            Claim::SlowerThan { slower, faster } => {
                if first_duration > second_duration {
                    return Ok(());
                }
                Err(NotSlower {
                    slower: (slower, first_duration),
                    faster: (faster, second_duration),
                })
            }
            Claim::Equivalent { a, b, tolerance } => {
                let difference = relative_difference(first_duration, second_duration);
                if difference < tolerance {
                    return Ok(());
                }
                Err(NotEquivalent {
                    a: (a, first_duration),
                    b: (b, second_duration),
                    difference,
                    tolerance,
                })
            }
        }
    }
}

impl Display for Claim {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Claim::SlowerThan { slower, faster } => write!(f, "{} is slower than {}", slower, faster),
            Claim::Equivalent { a, b, tolerance } => write!(
                f,
                "{} and {} are within {:.0}% of each other",
                a,
                b,
                tolerance * 100.0
            ),
        }
    }
}

/// `|a - b| / max(a, b)`, or `0.0` when both are zero.
pub fn relative_difference(a: Duration, b: Duration) -> f64 {
    // Whole nanoseconds keep millisecond-scale ratios exact.
    let (a, b) = (a.as_nanos() as f64, b.as_nanos() as f64);
    let max = a.max(b);
    if max == 0.0 {
        return 0.0;
    }
    (a - b).abs() / max
}

/// A [`Claim`] that did not hold.
///
/// Carries the measured durations so a reader can tell a real regression from noise.
#[derive(Clone, Debug, PartialEq)]
pub enum ClaimViolation {
    /// The strategy expected to be slower was not.
    NotSlower {
        slower: (Strategy, Duration),
        faster: (Strategy, Duration),
    },
    /// The two strategies differed by at least the tolerance.
    NotEquivalent {
        a: (Strategy, Duration),
        b: (Strategy, Duration),
        difference: f64,
        tolerance: f64,
    },
    /// The report had no measurement for this strategy.
    Missing(Strategy),
}

impl Display for ClaimViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NotSlower { slower, faster } => write!(
                f,
                "Expected {} ({:.2}ms) to be slower than {} ({:.2}ms).",
                slower.0,
                millis(slower.1),
                faster.0,
                millis(faster.1)
            ),
            NotEquivalent {
                a,
                b,
                difference,
                tolerance,
            } => write!(
                f,
                "Expected {} ({:.2}ms) and {} ({:.2}ms) to differ by less than {:.1}%, but they differ by {:.1}%.",
                a.0,
                millis(a.1),
                b.0,
                millis(b.1),
                tolerance * 100.0,
                difference * 100.0
            ),
            Missing(strategy) => write!(f, "No measurement for {}.", strategy),
        }
    }
}

impl Error for ClaimViolation {}

fn millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1_000.0
}
