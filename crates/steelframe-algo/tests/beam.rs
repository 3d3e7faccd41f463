use approx::assert_relative_eq;
use nalgebra::{Point3, UnitQuaternion, Vector3};
use steelframe_algo::beam::{create_beam, create_rod, create_weld};
use steelframe_core::material::MaterialRole;
use steelframe_core::scene::PrimitiveKind;

#[test]
fn beam_is_centred_scaled_and_oriented() {
    let beam = create_beam(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.0, 3.0, 4.0),
        0.2,
        0.3,
        MaterialRole::Column,
        false,
    )
    .expect("non-degenerate");

    assert_eq!(PrimitiveKind::Beam, beam.kind);
    assert_eq!(MaterialRole::Column, beam.material);
    assert_relative_eq!(beam.transform.position, Point3::new(0.0, 1.5, 2.0), epsilon = 1e-12);
    assert_relative_eq!(beam.transform.scale, Vector3::new(0.2, 0.3, 5.0), epsilon = 1e-12);
    assert_relative_eq!(beam.transform.axis(), Vector3::new(0.0, 0.6, 0.8), epsilon = 1e-12);
}

#[test]
fn coincident_endpoints_are_skipped() {
    let p = Point3::new(1.0, 2.0, 3.0);
    assert!(create_beam(p, p, 0.1, 0.1, MaterialRole::Truss, true).is_none());
    assert!(create_rod(p, p, 0.01, MaterialRole::Rebar).is_none());
}

#[test]
fn ground_aligned_diagonal_keeps_level_side_face() {
    let start = Point3::new(0.0, 0.0, 0.0);
    let end = Point3::new(2.0, 1.5, 0.0);
    let tilted = create_beam(start, end, 0.1, 0.1, MaterialRole::Truss, false).expect("beam");
    let aligned = create_beam(start, end, 0.1, 0.1, MaterialRole::Truss, true).expect("beam");

    assert_relative_eq!(tilted.transform.axis(), aligned.transform.axis(), epsilon = 1e-12);
    let side = aligned.transform.rotation * Vector3::x();
    assert_relative_eq!(side.y, 0.0, epsilon = 1e-12);
    let up = aligned.transform.rotation * Vector3::y();
    assert!(up.y > 0.0);
}

#[test]
fn rods_and_welds_are_cylinders() {
    let rod = create_rod(
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(0.27, 0.0, 0.0),
        0.012,
        MaterialRole::Rebar,
    )
    .expect("rod");
    assert_eq!(PrimitiveKind::Cylinder, rod.kind);
    assert_relative_eq!(rod.transform.scale, Vector3::new(0.012, 0.012, 0.27), epsilon = 1e-12);
    assert_relative_eq!(rod.length().expect("length"), 0.27, epsilon = 1e-12);

    let weld = create_weld(Point3::new(1.0, 5.0, 0.0), 0.06, UnitQuaternion::identity());
    assert!(weld.is_named("weld"));
    assert_eq!(MaterialRole::Weld, weld.material);
    assert_eq!(PrimitiveKind::Cylinder, weld.kind);
}
