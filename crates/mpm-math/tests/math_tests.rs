//! Integration tests for mpm-math.

use mpm_math::{Aabb, Mat3, Vec3};

// ─── Aabb Tests ───────────────────────────────────────────────

#[test]
fn unit_box_is_valid() {
    let b = Aabb::try_new(Vec3::ZERO, Vec3::ONE).unwrap();
    assert_eq!(b.extent(), Vec3::ONE);
    assert_eq!(b.center(), Vec3::splat(0.5));
    assert!((b.volume() - 1.0).abs() < 1e-12);
}

#[test]
fn flat_box_is_valid() {
    let b = Aabb::new(Vec3::ZERO, Vec3::new(1.0, 1.0, 0.0));
    assert!(b.is_valid());
    assert_eq!(b.volume(), 0.0);
}

#[test]
fn inverted_box_is_rejected() {
    let err = Aabb::try_new(Vec3::new(0.0, 2.0, 0.0), Vec3::ONE).unwrap_err();
    assert!(err.is_configuration());
    assert!(err.to_string().contains("ylo"));
}

#[test]
fn non_finite_box_is_rejected() {
    let b = Aabb::new(Vec3::new(f64::NAN, 0.0, 0.0), Vec3::ONE);
    assert!(!b.is_valid());
    let b = Aabb::new(Vec3::ZERO, Vec3::new(f64::INFINITY, 1.0, 1.0));
    assert!(!b.is_valid());
}

#[test]
fn contains_boundary() {
    let b = Aabb::new(Vec3::ZERO, Vec3::ONE);
    assert!(b.contains(Vec3::ZERO));
    assert!(b.contains(Vec3::ONE));
    assert!(b.contains(Vec3::splat(0.25)));
    assert!(!b.contains(Vec3::new(1.5, 0.5, 0.5)));
}

#[test]
fn aabb_is_serializable() {
    let b = Aabb::new(Vec3::new(-1.0, 0.0, 0.5), Vec3::new(1.0, 2.0, 3.0));
    let json = serde_json::to_string(&b).unwrap();
    let recovered: Aabb = serde_json::from_str(&json).unwrap();
    assert_eq!(b, recovered);
}

// ─── Tensor Value Semantics ───────────────────────────────────

#[test]
fn tensors_are_copied_not_aliased() {
    let a = Mat3::IDENTITY;
    let mut b = a;
    b.x_axis.x = 2.0;
    assert_eq!(a.x_axis.x, 1.0);
    assert_eq!(Mat3::IDENTITY.determinant(), 1.0);
}
