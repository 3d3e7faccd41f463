use nalgebra::{Point3, Unit, UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Members shorter than this are treated as coincident endpoints.
pub const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub position: Point3<f64>,
    pub rotation: UnitQuaternion<f64>,
    pub scale: Vector3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            position: Point3::origin(),
            rotation: UnitQuaternion::identity(),
            scale: Vector3::repeat(1.0),
        }
    }

    pub fn from_translation(offset: Vector3<f64>) -> Self {
        Self {
            position: Point3::from(offset),
            ..Self::identity()
        }
    }

    pub fn new(position: Point3<f64>, rotation: UnitQuaternion<f64>, scale: Vector3<f64>) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    pub fn transform_point(&self, p: &Point3<f64>) -> Point3<f64> {
        self.position + self.rotation * self.scale.component_mul(&p.coords)
    }

    /// Composes `child` (expressed in this transform's local frame) into the parent frame.
    ///
    /// Exact for rigid parents, which is all the scene graph uses for groups.
    pub fn then(&self, child: &Transform) -> Transform {
        Transform {
            position: self.transform_point(&child.position),
            rotation: self.rotation * child.rotation,
            scale: self.scale.component_mul(&child.scale),
        }
    }

    /// Unit vector of the local +z axis in the parent frame.
    pub fn axis(&self) -> Vector3<f64> {
        self.rotation * Vector3::z()
    }
}

/// Rotation taking the +z reference axis onto `dir`.
pub fn rotation_to(dir: &Unit<Vector3<f64>>) -> UnitQuaternion<f64> {
    UnitQuaternion::rotation_between(&Vector3::z(), dir.as_ref())
        .unwrap_or_else(|| UnitQuaternion::from_axis_angle(&Vector3::x_axis(), PI))
}

/// Orientation of a member whose long axis points along `dir`.
///
/// With `align_to_ground` the member is additionally rolled about `dir` so its
/// local +y matches world up projected perpendicular to `dir`. Vertical members
/// have no such projection and keep the plain axis rotation.
pub fn orientation_from_direction(
    dir: &Unit<Vector3<f64>>,
    align_to_ground: bool,
) -> UnitQuaternion<f64> {
    let base = rotation_to(dir);
    if !align_to_ground {
        return base;
    }

    let up = Vector3::y();
    let target = up - dir.into_inner() * dir.dot(&up);
    if target.norm() < 1e-6 {
        return base;
    }

    let current = base * up;
    let angle = dir.dot(&current.cross(&target)).atan2(current.dot(&target));
    UnitQuaternion::from_axis_angle(dir, angle) * base
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BBox3 {
    pub min: Point3<f64>,
    pub max: Point3<f64>,
}

impl BBox3 {
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    pub fn include_point(&mut self, point: Point3<f64>) {
        self.min = self.min.inf(&point);
        self.max = self.max.sup(&point);
    }
}
