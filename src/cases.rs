use crate::triangle::TriangleKind;

/// A reference input and the label the correct classifier gives it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Case {
    /// Side lengths, in the order they are passed to the classifier
    pub sides: [f64; 3],
    /// Expected label
    pub expected: TriangleKind,
}

impl Case {
    /// Creates a case from three sides and the expected label.
    #[inline]
    pub const fn new(a: f64, b: f64, c: f64, expected: TriangleKind) -> Self {
        Self {
            sides: [a, b, c],
            expected,
        }
    }
}

const fn invalid(a: f64, b: f64, c: f64) -> Case {
    Case::new(a, b, c, TriangleKind::Invalid)
}

const fn equilateral(a: f64, b: f64, c: f64) -> Case {
    Case::new(a, b, c, TriangleKind::Equilateral)
}

const fn isosceles(a: f64, b: f64, c: f64) -> Case {
    Case::new(a, b, c, TriangleKind::Isosceles)
}

const fn scalene(a: f64, b: f64, c: f64) -> Case {
    Case::new(a, b, c, TriangleKind::Scalene)
}

/// The fixed reference table used by the harness, the timing loop and the benchmark.
pub const CASES: &[Case] = &[
    invalid(1.0, 2.0, 9.0),
    invalid(1.0, 9.0, 2.0),
    invalid(2.0, 1.0, 9.0),
    invalid(2.0, 9.0, 1.0),
    invalid(9.0, 1.0, 2.0),
    invalid(9.0, 2.0, 1.0),
    invalid(1.0, 1.0, -1.0),
    invalid(1.0, -1.0, 1.0),
    invalid(-1.0, 1.0, 1.0),
    equilateral(1.0, 1.0, 1.0),
    equilateral(100.0, 100.0, 100.0),
    equilateral(99.0, 99.0, 99.0),
    isosceles(100.0, 90.0, 90.0),
    isosceles(90.0, 100.0, 90.0),
    isosceles(90.0, 90.0, 100.0),
    isosceles(2.0, 2.0, 3.0),
    scalene(5.0, 4.0, 3.0),
    scalene(5.0, 3.0, 4.0),
    scalene(4.0, 5.0, 3.0),
    scalene(4.0, 3.0, 5.0),
    scalene(3.0, 5.0, 4.0),
];

/// Iterates the reference cases expecting `kind`.
pub fn cases_of(kind: TriangleKind) -> impl Iterator<Item = &'static Case> {
    CASES.iter().filter(move |case| case.expected == kind)
}
