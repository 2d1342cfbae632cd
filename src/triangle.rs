use core::error::Error;
use core::fmt::{self, Display};
use core::str::FromStr;

/// Anything that can label three side lengths.
///
/// Implemented by [`Variant`], by `Delayed` around another
/// classifier, and by any `Fn(f64, f64, f64) -> TriangleKind`.
pub trait Classify {
    /// Classifies the triangle with sides `a`, `b` and `c`, given in any order.
    fn classify(&self, a: f64, b: f64, c: f64) -> TriangleKind;

    /// Classifies a triangle given as an array of sides.
    #[inline]
    fn classify_sides(&self, sides: [f64; 3]) -> TriangleKind {
        let [a, b, c] = sides;
        self.classify(a, b, c)
    }
}

impl<F> Classify for F
where
    F: Fn(f64, f64, f64) -> TriangleKind,
{
    #[inline]
    fn classify(&self, a: f64, b: f64, c: f64) -> TriangleKind {
        self(a, b, c)
    }
}

/// The four labels a set of sides can receive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[must_use]
pub enum TriangleKind {
    /// The sides cannot form a non-degenerate triangle
    Invalid,
    /// All three sides are equal
    Equilateral,
    /// Exactly two sides are equal
    Isosceles,
    /// All three sides differ
    Scalene,
}

impl TriangleKind {
    /// Every label, in code order.
    pub const ALL: [TriangleKind; 4] = [
        TriangleKind::Invalid,
        TriangleKind::Equilateral,
        TriangleKind::Isosceles,
        TriangleKind::Scalene,
    ];

    /// Returns the stable numeric code: Invalid=0, Equilateral=1, Isosceles=2, Scalene=3
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            TriangleKind::Invalid => 0,
            TriangleKind::Equilateral => 1,
            TriangleKind::Isosceles => 2,
            TriangleKind::Scalene => 3,
        }
    }

    /// Returns the lowercase name used for parsing and serialization
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            TriangleKind::Invalid => "invalid",
            TriangleKind::Equilateral => "equilateral",
            TriangleKind::Isosceles => "isosceles",
            TriangleKind::Scalene => "scalene",
        }
    }

    /// Returns true if the sides do not form a triangle
    #[inline]
    #[must_use]
    pub const fn is_invalid(self) -> bool {
        matches!(self, TriangleKind::Invalid)
    }

    /// Returns true if all sides are equal
    #[inline]
    #[must_use]
    pub const fn is_equilateral(self) -> bool {
        matches!(self, TriangleKind::Equilateral)
    }

    /// Returns true if exactly two sides are equal
    #[inline]
    #[must_use]
    pub const fn is_isosceles(self) -> bool {
        matches!(self, TriangleKind::Isosceles)
    }

    /// Returns true if all sides differ
    #[inline]
    #[must_use]
    pub const fn is_scalene(self) -> bool {
        matches!(self, TriangleKind::Scalene)
    }
}

impl Default for TriangleKind {
    /// Returns `TriangleKind::Invalid`, the label of the all-zero input
    #[inline]
    fn default() -> Self {
        Self::Invalid
    }
}

impl From<TriangleKind> for u8 {
    #[inline]
    fn from(kind: TriangleKind) -> Self {
        kind.code()
    }
}

impl From<TriangleKind> for &'static str {
    #[inline]
    fn from(kind: TriangleKind) -> Self {
        kind.as_str()
    }
}

impl Display for TriangleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Invalid => write!(f, "Invalid (not a triangle)"),
            Self::Equilateral => write!(f, "Equilateral (all sides equal)"),
            Self::Isosceles => write!(f, "Isosceles (two sides equal)"),
            Self::Scalene => write!(f, "Scalene (no sides equal)"),
        }
    }
}

/// Error returned when converting an unknown code to [`TriangleKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidKindCode(pub u8);

impl Display for InvalidKindCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid triangle kind code: {} (expected 0, 1, 2, or 3)",
            self.0
        )
    }
}

impl Error for InvalidKindCode {}

impl TryFrom<u8> for TriangleKind {
    type Error = InvalidKindCode;

    #[inline]
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Invalid),
            1 => Ok(Self::Equilateral),
            2 => Ok(Self::Isosceles),
            3 => Ok(Self::Scalene),
            n => Err(InvalidKindCode(n)),
        }
    }
}

/// Error returned when parsing an unknown name into [`TriangleKind`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseTriangleKindError;

impl Display for ParseTriangleKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown triangle kind (expected invalid, equilateral, isosceles, or scalene)"
        )
    }
}

impl Error for ParseTriangleKindError {}

impl FromStr for TriangleKind {
    type Err = ParseTriangleKindError;

    /// Parses a label name, ignoring ASCII case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseTriangleKindError)
    }
}

/// Which classification algorithm to run
///
/// Both variants sort the sides and apply the same triangle-inequality check.
/// They differ only in the label given to equal sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[must_use]
pub enum Variant {
    /// The correct classifier
    Reference,
    /// Seeded defect: Equilateral and Isosceles are returned the wrong way round
    SwappedLabels,
}

impl Variant {
    /// Both variants.
    pub const ALL: [Variant; 2] = [Variant::Reference, Variant::SwappedLabels];

    /// Returns the name accepted by [`FromStr`]
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Variant::Reference => "reference",
            Variant::SwappedLabels => "swapped-labels",
        }
    }

    /// Returns true for the seeded defect
    #[inline]
    #[must_use]
    pub const fn is_seeded_defect(self) -> bool {
        matches!(self, Variant::SwappedLabels)
    }

    /// Wraps this variant with the default pause before every call.
    #[cfg(feature = "std")]
    #[inline]
    pub fn timed(self) -> crate::Delayed<Self> {
        crate::Delayed::with_default_pause(self)
    }

    /// Labels for (all sides equal, exactly two sides equal).
    const fn equal_side_labels(self) -> (TriangleKind, TriangleKind) {
        match self {
            Variant::Reference => (TriangleKind::Equilateral, TriangleKind::Isosceles),
            Variant::SwappedLabels => (TriangleKind::Isosceles, TriangleKind::Equilateral),
        }
    }
}

impl Default for Variant {
    /// Returns `Variant::Reference`, or `Variant::SwappedLabels` when built
    /// with the `seeded-defect` feature
    #[inline]
    fn default() -> Self {
        if cfg!(feature = "seeded-defect") {
            Self::SwappedLabels
        } else {
            Self::Reference
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown name into [`Variant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseVariantError;

impl Display for ParseVariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown variant (expected reference or swapped-labels)")
    }
}

impl Error for ParseVariantError {}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.as_str().eq_ignore_ascii_case(s))
            .ok_or(ParseVariantError)
    }
}

impl Classify for Variant {
    #[allow(clippy::float_cmp, clippy::neg_cmp_op_on_partial_ord)]
    fn classify(&self, a: f64, b: f64, c: f64) -> TriangleKind {
        let [a, b, c] = sort_sides(a, b, c);

        // Closed inequality: flat triangles are invalid. NaN sides fail it too.
        if !(a + b > c) {
            return TriangleKind::Invalid;
        }

        let (all_equal, two_equal) = self.equal_side_labels();
        if a == b && b == c {
            all_equal
        } else if a == b || b == c {
            two_equal
        } else {
            TriangleKind::Scalene
        }
    }
}

/// Sorts three sides into non-decreasing order with three compare-and-swaps.
///
/// ```rust
/// assert_eq!(triangle::sort_sides(5.0, 3.0, 4.0), [3.0, 4.0, 5.0]);
/// ```
#[inline]
#[must_use]
pub fn sort_sides(mut a: f64, mut b: f64, mut c: f64) -> [f64; 3] {
    if a > b {
        core::mem::swap(&mut a, &mut b);
    }
    if a > c {
        core::mem::swap(&mut a, &mut c);
    }
    if b > c {
        core::mem::swap(&mut b, &mut c);
    }
    [a, b, c]
}

/// Classifies a triangle with the reference algorithm.
///
/// ```rust
/// use triangle::{TriangleKind, classify_triangle};
///
/// assert_eq!(classify_triangle(2.0, 2.0, 3.0), TriangleKind::Isosceles);
/// assert_eq!(classify_triangle(1.0, 1.0, -1.0), TriangleKind::Invalid);
/// ```
#[inline]
pub fn classify_triangle(a: f64, b: f64, c: f64) -> TriangleKind {
    Variant::Reference.classify(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_sides_covers_every_ordering() {
        let orderings = [
            (1.0, 2.0, 3.0),
            (1.0, 3.0, 2.0),
            (2.0, 1.0, 3.0),
            (2.0, 3.0, 1.0),
            (3.0, 1.0, 2.0),
            (3.0, 2.0, 1.0),
        ];
        for (a, b, c) in orderings {
            assert_eq!(sort_sides(a, b, c), [1.0, 2.0, 3.0]);
        }
    }

    #[test]
    fn test_nan_sides_are_invalid_in_any_position() {
        for sides in [
            [f64::NAN, 1.0, 1.0],
            [1.0, f64::NAN, 1.0],
            [1.0, 1.0, f64::NAN],
        ] {
            assert_eq!(
                Variant::Reference.classify_sides(sides),
                TriangleKind::Invalid
            );
        }
    }

    #[test]
    fn test_equal_side_labels_are_swapped_only_for_seeded_defect() {
        let (all, two) = Variant::Reference.equal_side_labels();
        let (swapped_all, swapped_two) = Variant::SwappedLabels.equal_side_labels();
        assert_eq!((all, two), (swapped_two, swapped_all));
    }
}
