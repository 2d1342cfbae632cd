//! End-to-end tests for the triangle library

use triangle::{
    Classify, InvalidKindCode, ParseTriangleKindError, TriangleKind, Variant, cases_of,
    classify_triangle,
};

fn assert_all(classifier: &impl Classify, kind: TriangleKind, expected: TriangleKind) {
    for case in cases_of(kind) {
        assert_eq!(
            classifier.classify_sides(case.sides),
            expected,
            "sides {:?}",
            case.sides
        );
    }
}

#[test]
fn test_invalid_triangles() {
    assert_all(&Variant::Reference, TriangleKind::Invalid, TriangleKind::Invalid);
    assert_eq!(cases_of(TriangleKind::Invalid).count(), 9);
}

#[test]
fn test_equilateral_triangles() {
    assert_all(
        &Variant::Reference,
        TriangleKind::Equilateral,
        TriangleKind::Equilateral,
    );
}

#[test]
fn test_isosceles_triangles() {
    assert_all(
        &Variant::Reference,
        TriangleKind::Isosceles,
        TriangleKind::Isosceles,
    );
}

#[test]
fn test_scalene_triangles() {
    assert_all(&Variant::Reference, TriangleKind::Scalene, TriangleKind::Scalene);
}

#[test]
fn test_flat_triangle_is_invalid() {
    assert_eq!(classify_triangle(1.0, 2.0, 3.0), TriangleKind::Invalid);
    assert_eq!(classify_triangle(3.0, 1.0, 2.0), TriangleKind::Invalid);
    assert_eq!(classify_triangle(0.0, 0.0, 0.0), TriangleKind::Invalid);
    // Just past the boundary
    assert_eq!(classify_triangle(1.0, 2.0, 2.999), TriangleKind::Scalene);
}

#[test]
fn test_infinite_sides_are_invalid() {
    assert_eq!(
        classify_triangle(f64::INFINITY, f64::INFINITY, f64::INFINITY),
        TriangleKind::Invalid
    );
    assert_eq!(
        classify_triangle(1.0, 1.0, f64::INFINITY),
        TriangleKind::Invalid
    );
}

#[test]
fn test_seeded_defect_swaps_equal_side_labels() {
    let buggy = Variant::SwappedLabels;

    assert_eq!(buggy.classify(1.0, 1.0, 1.0), TriangleKind::Isosceles);
    assert_eq!(buggy.classify(2.0, 2.0, 3.0), TriangleKind::Equilateral);
    assert_all(&buggy, TriangleKind::Invalid, TriangleKind::Invalid);
    assert_all(&buggy, TriangleKind::Scalene, TriangleKind::Scalene);
}

#[test]
fn test_kind_conversions() {
    // To/from u8
    assert_eq!(u8::from(TriangleKind::Scalene), 3);
    assert_eq!(TriangleKind::try_from(1u8), Ok(TriangleKind::Equilateral));
    assert_eq!(TriangleKind::try_from(4u8), Err(InvalidKindCode(4)));
    for kind in TriangleKind::ALL {
        assert_eq!(TriangleKind::try_from(kind.code()), Ok(kind));
    }

    // To/from string
    let s: &str = TriangleKind::Isosceles.into();
    assert_eq!(s, "isosceles");
    assert_eq!("scalene".parse::<TriangleKind>(), Ok(TriangleKind::Scalene));
    assert_eq!(
        "EQUILATERAL".parse::<TriangleKind>(),
        Ok(TriangleKind::Equilateral)
    );
    assert_eq!("square".parse::<TriangleKind>(), Err(ParseTriangleKindError));

    assert_eq!(TriangleKind::default(), TriangleKind::Invalid);
    assert!(TriangleKind::Invalid.is_invalid());
    assert!(!TriangleKind::Scalene.is_isosceles());
}

#[test]
fn test_variant_parsing_and_default() {
    assert_eq!("reference".parse::<Variant>(), Ok(Variant::Reference));
    assert_eq!(
        "Swapped-Labels".parse::<Variant>(),
        Ok(Variant::SwappedLabels)
    );
    assert!("fixed".parse::<Variant>().is_err());
    assert_eq!(Variant::SwappedLabels.to_string(), "swapped-labels");

    let expected = if cfg!(feature = "seeded-defect") {
        Variant::SwappedLabels
    } else {
        Variant::Reference
    };
    assert_eq!(Variant::default(), expected);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_roundtrip() {
    let json = serde_json::to_string(&TriangleKind::Isosceles).unwrap();
    assert_eq!(json, "\"isosceles\"");
    let parsed: TriangleKind = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, TriangleKind::Isosceles);

    let json = serde_json::to_string(&Variant::SwappedLabels).unwrap();
    assert_eq!(json, "\"swapped-labels\"");
    let parsed: Variant = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, Variant::SwappedLabels);
}
