//! Cross-module behavior of the transform pipeline: algebraic laws,
//! composition order, tuple kind preservation, and serialization.

use affine4::{Matrix4, MatrixError, Point2, Point3, Tuple, Vector2, Vector3};

const EPS: f32 = 1e-5;

/// An invertible matrix mixing all three operation kinds
fn sample_transform() -> Matrix4 {
    let mut m = Matrix4::new();
    m.translate(1.0, 2.0, 3.0)
        .rotate(30.0, 0.0, 0.0, 1.0)
        .scale(2.0, 3.0, 4.0);
    m
}

#[test]
fn identity_law() {
    let m = sample_transform();
    let id = Matrix4::identity();

    assert!((&m * &id).approx_eq(&m, EPS));
    assert!((&id * &m).approx_eq(&m, EPS));
}

#[test]
fn inverse_law_both_sides() {
    let m = sample_transform();
    let inv = m.inverse().unwrap();

    assert!((&m * &inv).is_identity());
    assert!((&inv * &m).is_identity());
}

#[test]
fn transpose_involution() {
    let m = sample_transform();
    assert_eq!(m.transpose().transpose().as_array(), m.as_array());
}

#[test]
fn pinned_single_operation_results() {
    assert_eq!(
        Matrix4::translation(1.0, 2.0, 3.0).transform(0.0, 0.0, 0.0),
        (1.0, 2.0, 3.0)
    );
    assert_eq!(
        Matrix4::scaling(2.0, 3.0, 4.0).transform(1.0, 1.0, 1.0),
        (2.0, 3.0, 4.0)
    );

    let (x, y, z) = Matrix4::rotation(90.0, 0.0, 0.0, 1.0).transform(1.0, 0.0, 0.0);
    assert!(x.abs() < EPS);
    assert!((y - 1.0).abs() < EPS);
    assert!(z.abs() < EPS);
}

#[test]
fn right_multiply_order() {
    // translate, then scale: the scale applies to the already-translated
    // point, so the origin lands at (2, 0, 0)
    let mut m = Matrix4::new();
    m.translate(1.0, 0.0, 0.0).scale(2.0, 2.0, 2.0);
    assert_eq!(m.transform(0.0, 0.0, 0.0), (2.0, 0.0, 0.0));

    // The operator form composes identically
    let composed = Matrix4::translation(1.0, 0.0, 0.0) * Matrix4::scaling(2.0, 2.0, 2.0);
    assert_eq!(composed.transform(0.0, 0.0, 0.0), (2.0, 0.0, 0.0));
}

#[test]
fn derived_views_do_not_mutate() {
    let m = sample_transform();
    let before = m.as_array();

    let _ = m.clone();
    let _ = m.inverse().unwrap();
    let _ = m.transpose();
    let _ = &m * &Matrix4::scaling(5.0, 5.0, 5.0);
    let _ = m.transform(1.0, 2.0, 3.0);

    assert_eq!(m.as_array(), before);
}

#[test]
fn mutators_chain_and_mutate() {
    let mut m = Matrix4::new();
    let before = m.as_array();

    m.translate(1.0, 0.0, 0.0)
        .rotate(45.0, 0.0, 0.0, 1.0)
        .scale(2.0, 2.0, 2.0);
    assert_ne!(m.as_array(), before);

    let mut n = sample_transform();
    let chained = n.invert().unwrap().translate(1.0, 1.0, 1.0);
    let expected = {
        let mut e = sample_transform().inverse().unwrap();
        e.translate(1.0, 1.0, 1.0);
        e
    };
    assert_eq!(chained.as_array(), expected.as_array());
}

#[test]
fn tuple_kinds_are_preserved() {
    let m = sample_transform();

    let kinds = [
        Tuple::Point2(Point2::new(1.0, 2.0)),
        Tuple::Vector2(Vector2::new(1.0, 2.0)),
        Tuple::Point3(Point3::new(1.0, 2.0, 3.0)),
        Tuple::Vector3(Vector3::new(1.0, 2.0, 3.0)),
    ];

    for value in kinds {
        let out = m.transform_tuple(&value);
        assert_eq!(
            std::mem::discriminant(&out),
            std::mem::discriminant(&value)
        );
        assert_eq!(out.component_count(), value.component_count());
    }
}

#[test]
fn tuple_transform_matches_raw_transform() {
    let m = sample_transform();

    let (x, y, z) = m.transform(1.0, 2.0, 3.0);
    assert_eq!(
        m.transform_tuple(&Tuple::Point3(Point3::new(1.0, 2.0, 3.0))),
        Tuple::Point3(Point3::new(x, y, z))
    );

    // 2D kinds are lifted to z = 0
    let (x, y, _) = m.transform(1.0, 2.0, 0.0);
    assert_eq!(
        m.transform_tuple(&Tuple::Point2(Point2::new(1.0, 2.0))),
        Tuple::Point2(Point2::new(x, y))
    );
}

#[test]
fn component_slices_are_arity_checked() {
    let m = Matrix4::translation(1.0, 0.0, 0.0);

    assert_eq!(m.transform_components(&[1.0, 1.0]).unwrap(), vec![2.0, 1.0]);
    assert_eq!(
        m.transform_components(&[1.0, 1.0, 1.0]).unwrap(),
        vec![2.0, 1.0, 1.0]
    );
    assert_eq!(
        m.transform_components(&[1.0, 1.0, 1.0, 1.0]).unwrap_err(),
        MatrixError::UnsupportedComponents(4)
    );
}

#[test]
fn singular_matrix_reports_error() {
    let flat = Matrix4::scaling(2.0, 0.0, 2.0);
    assert_eq!(flat.inverse().unwrap_err(), MatrixError::Singular);

    let mut m = flat.clone();
    let before = m.as_array();
    assert!(m.invert().is_err());
    assert_eq!(m.as_array(), before);
}

#[test]
fn serde_round_trip() {
    let m = sample_transform();
    let json = serde_json::to_string(&m).unwrap();
    let back: Matrix4 = serde_json::from_str(&json).unwrap();
    assert_eq!(back.as_array(), m.as_array());

    let t = Tuple::Vector3(Vector3::new(1.0, -2.5, 3.0));
    let json = serde_json::to_string(&t).unwrap();
    let back: Tuple = serde_json::from_str(&json).unwrap();
    assert_eq!(back, t);

    let p = Point2::new(0.5, -0.5);
    let json = serde_json::to_string(&p).unwrap();
    let back: Point2 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, p);
}
