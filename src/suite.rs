use std::fmt::{self, Display};
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::cases::{CASES, Case};
use crate::triangle::{Classify, TriangleKind};

/// Number of passes over [`CASES`] made by the timing loop by default.
pub const DEFAULT_ROUNDS: u32 = 3;

/// A reference case the classifier got wrong
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mismatch {
    /// The case that failed
    pub case: Case,
    /// What the classifier returned instead
    pub actual: TriangleKind,
}

/// Outcome of running every reference case once
#[derive(Debug, Clone, Default, PartialEq)]
#[must_use]
pub struct SuiteReport {
    /// Number of cases evaluated
    pub run: usize,
    /// Number of cases whose label differed from the expectation
    pub failures: usize,
    /// The failing cases, in table order
    pub mismatches: Vec<Mismatch>,
}

impl SuiteReport {
    /// Number of cases that matched
    #[inline]
    #[must_use]
    pub fn passed(&self) -> usize {
        self.run - self.failures
    }

    /// Returns true if no case failed
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.failures == 0
    }
}

impl Display for SuiteReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tests run: {}", self.run)?;
        write!(f, "Failures: {}", self.failures)
    }
}

/// Runs every reference case against `classifier` and tallies the results.
///
/// ```rust
/// use triangle::{Variant, run_suite};
///
/// let report = run_suite(&Variant::Reference);
/// assert!(report.is_success());
/// assert_eq!(report.to_string(), "Tests run: 21\nFailures: 0");
/// ```
pub fn run_suite<C: Classify + ?Sized>(classifier: &C) -> SuiteReport {
    let mut report = SuiteReport::default();
    for case in CASES {
        report.run += 1;
        let actual = classifier.classify_sides(case.sides);
        if actual != case.expected {
            tracing::debug!(
                sides = ?case.sides,
                expected = case.expected.as_str(),
                actual = actual.as_str(),
                "classification mismatch"
            );
            report.failures += 1;
            report.mismatches.push(Mismatch { case: *case, actual });
        }
    }
    report
}

/// Wall-clock measurement of repeated passes over the reference cases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct Timing {
    /// Passes made over [`CASES`]
    pub rounds: u32,
    /// Total classifier calls
    pub calls: usize,
    /// Total elapsed time
    pub elapsed: Duration,
}

impl Timing {
    /// Mean time per call, or zero if nothing was called
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn per_call(&self) -> Duration {
        match u32::try_from(self.calls) {
            Ok(0) => Duration::ZERO,
            Ok(calls) => self.elapsed / calls,
            Err(_) => Duration::from_secs_f64(self.elapsed.as_secs_f64() / self.calls as f64),
        }
    }
}

impl Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} calls in {:.3} ms ({:.3} us per call)",
            self.calls,
            self.elapsed.as_secs_f64() * 1e3,
            self.per_call().as_secs_f64() * 1e6
        )
    }
}

/// Classifies every reference case `rounds` times and measures how long it took.
///
/// Labels are discarded; only the elapsed time is of interest.
pub fn run_workload<C: Classify + ?Sized>(classifier: &C, rounds: u32) -> Timing {
    let start = Instant::now();
    for _ in 0..rounds {
        for case in CASES {
            let _ = black_box(classifier.classify_sides(black_box(case.sides)));
        }
    }
    let timing = Timing {
        rounds,
        calls: CASES.len() * rounds as usize,
        elapsed: start.elapsed(),
    };
    tracing::info!(
        rounds,
        calls = timing.calls,
        elapsed = ?timing.elapsed,
        "workload finished"
    );
    timing
}
