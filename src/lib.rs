//! #  Triangle - A Rust library for classifying triangles by their sides.
//!
//! ## Overview
//!
//! Given three side lengths in any order, the classifier sorts them and
//! returns one of four labels:
//!
//! - **Invalid**: the sides cannot form a non-degenerate triangle
//! - **Equilateral**: all three sides are equal
//! - **Isosceles**: exactly two sides are equal
//! - **Scalene**: all three sides differ
//!
//! Two algorithm variants are available. [`Variant::Reference`] is the
//! correct classifier. [`Variant::SwappedLabels`] is a seeded defect that
//! returns the Equilateral and Isosceles labels the wrong way round, for
//! measuring how well a test suite catches mutations. Either variant can be
//! wrapped in `Delayed` to add a fixed pause before every call.
//!
//! ## Quick Start
//!
//! ```rust
//! use triangle::{Classify, TriangleKind, Variant, classify_triangle};
//!
//! assert_eq!(classify_triangle(3.0, 4.0, 5.0), TriangleKind::Scalene);
//! assert_eq!(classify_triangle(1.0, 2.0, 3.0), TriangleKind::Invalid);
//!
//! // The seeded defect mislabels equilateral triangles
//! assert_eq!(
//!     Variant::SwappedLabels.classify(1.0, 1.0, 1.0),
//!     TriangleKind::Isosceles
//! );
//! ```
//!
//! ## Feature Flags
//!
//! - `std`: Enable standard library support (enabled by default). Required for
//!   `Delayed` and the `suite` harness. Disable for `no_std` environments.
//! - `cli`: Build the `triangle` binary (enabled by default).
//! - `serde`: Enable serialization/deserialization for `TriangleKind` and `Variant`
//! - `seeded-defect`: Make [`Variant::default`] return the seeded defect. The
//!   `triangle` binary then also pauses 1 ms per call unless `--delay-ms` is given.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Side-length classification: labels, variants and the classifier itself.
pub mod triangle;

/// The fixed table of reference cases.
pub mod cases;

/// Pause decorator for timing experiments.
#[cfg(feature = "std")]
pub mod delay;

/// Pass/fail harness and timing loop over the reference cases.
#[cfg(feature = "std")]
pub mod suite;

pub use cases::{CASES, Case, cases_of};
#[cfg(feature = "std")]
pub use delay::{DEFAULT_PAUSE, Delayed, seeded_defect};
#[cfg(feature = "std")]
pub use suite::{DEFAULT_ROUNDS, Mismatch, SuiteReport, Timing, run_suite, run_workload};
pub use triangle::{
    Classify, InvalidKindCode, ParseTriangleKindError, ParseVariantError, TriangleKind, Variant,
    classify_triangle, sort_sides,
};
