use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};
use steelframe_core::geom::{orientation_from_direction, Transform, EPSILON};
use steelframe_core::material::MaterialRole;
use steelframe_core::scene::{Primitive, PrimitiveKind};

/// Box member from `start` to `end` with a `width` x `height` cross-section.
///
/// Returns `None` for coincident endpoints.
pub fn create_beam(
    start: Point3<f64>,
    end: Point3<f64>,
    width: f64,
    height: f64,
    material: MaterialRole,
    align_to_ground: bool,
) -> Option<Primitive> {
    member(
        PrimitiveKind::Beam,
        start,
        end,
        Vector3::new(width, height, 0.0),
        material,
        align_to_ground,
    )
}

/// Round bar from `start` to `end`.
pub fn create_rod(
    start: Point3<f64>,
    end: Point3<f64>,
    diameter: f64,
    material: MaterialRole,
) -> Option<Primitive> {
    member(
        PrimitiveKind::Cylinder,
        start,
        end,
        Vector3::new(diameter, diameter, 0.0),
        material,
        false,
    )
}

/// Cosmetic weld marker: a short disc at a joint.
pub fn create_weld(position: Point3<f64>, size: f64, rotation: UnitQuaternion<f64>) -> Primitive {
    Primitive::new(
        PrimitiveKind::Cylinder,
        Transform::new(position, rotation, Vector3::new(size, size, size * 0.5)),
        MaterialRole::Weld,
    )
    .named("weld")
}

fn member(
    kind: PrimitiveKind,
    start: Point3<f64>,
    end: Point3<f64>,
    section: Vector3<f64>,
    material: MaterialRole,
    align_to_ground: bool,
) -> Option<Primitive> {
    let span = end - start;
    let length = span.norm();
    if length < EPSILON {
        tracing::trace!(?start, ?material, "skipping zero-length member");
        return None;
    }

    let dir = Unit::new_unchecked(span / length);
    let rotation = orientation_from_direction(&dir, align_to_ground);
    let scale = Vector3::new(section.x, section.y, length);
    Some(Primitive::new(
        kind,
        Transform::new(nalgebra::center(&start, &end), rotation, scale),
        material,
    ))
}
