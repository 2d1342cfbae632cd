use std::ops::Deref;
use std::thread;
use std::time::Duration;

use crate::triangle::{Classify, TriangleKind, Variant};

/// Pause used by [`Delayed::with_default_pause`].
pub const DEFAULT_PAUSE: Duration = Duration::from_millis(1);

/// A classifier that sleeps before every call
///
/// The pause only inflates wall-clock time so that timing experiments measure
/// something nonzero. The returned label is always the inner classifier's.
///
/// ```rust
/// use std::time::Duration;
/// use triangle::{Classify, Delayed, TriangleKind, Variant};
///
/// let slow = Delayed::new(Variant::Reference, Duration::from_micros(10));
/// assert_eq!(slow.classify(3.0, 4.0, 5.0), TriangleKind::Scalene);
/// assert_eq!(slow.pause(), Duration::from_micros(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delayed<C> {
    inner: C,
    pause: Duration,
}

impl<C: Classify> Delayed<C> {
    /// Wraps `inner`, sleeping for `pause` before each classification.
    #[inline]
    pub const fn new(inner: C, pause: Duration) -> Self {
        Self { inner, pause }
    }

    /// Wraps `inner` with [`DEFAULT_PAUSE`].
    #[inline]
    pub const fn with_default_pause(inner: C) -> Self {
        Self::new(inner, DEFAULT_PAUSE)
    }

    /// Returns the configured pause
    #[inline]
    #[must_use]
    pub const fn pause(&self) -> Duration {
        self.pause
    }

    /// Returns a reference to the wrapped classifier
    #[inline]
    #[must_use]
    pub const fn inner(&self) -> &C {
        &self.inner
    }

    /// Unwraps, returning the inner classifier
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> C {
        self.inner
    }
}

impl<C: Classify> Classify for Delayed<C> {
    fn classify(&self, a: f64, b: f64, c: f64) -> TriangleKind {
        if !self.pause.is_zero() {
            tracing::trace!(pause = ?self.pause, "pausing before classification");
            thread::sleep(self.pause);
        }
        self.inner.classify(a, b, c)
    }
}

impl<C> Deref for Delayed<C> {
    type Target = C;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<C> AsRef<C> for Delayed<C> {
    #[inline]
    fn as_ref(&self) -> &C {
        &self.inner
    }
}

/// The seeded-defect classifier with its pause: labels for equal sides are
/// swapped and every call sleeps for [`DEFAULT_PAUSE`].
#[inline]
#[must_use]
pub fn seeded_defect() -> Delayed<Variant> {
    Variant::SwappedLabels.timed()
}
