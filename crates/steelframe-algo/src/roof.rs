use crate::config::GeneratorConfig;
use crate::truss::ChordProfile;
use nalgebra::{Point2, Point3, UnitQuaternion, Vector3};
use std::f64::consts::PI;
use steelframe_core::geom::Transform;
use steelframe_core::material::MaterialRole;
use steelframe_core::params::FrameParams;
use steelframe_core::scene::{Extrusion, Group, Primitive, PrimitiveKind, ROOF_TAG};

/// Roof profile with the roof type already resolved against the fallback table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoofShape {
    Flat,
    Gable,
    Arched { arch_height: f64 },
}

impl RoofShape {
    pub fn name(&self) -> &'static str {
        match self {
            RoofShape::Flat => "roof-flat",
            RoofShape::Gable => "roof-gable",
            RoofShape::Arched { .. } => "roof-arched",
        }
    }
}

/// Start and positive depth of the extrusion across the building width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransverseSpan {
    pub start: f64,
    pub depth: f64,
}

impl TransverseSpan {
    /// Extent between two z positions given in either order.
    pub fn between(from: f64, to: f64) -> Self {
        Self {
            start: from.min(to),
            depth: (to - from).abs(),
        }
    }

    /// Full roof width including the side overhangs.
    pub fn for_frame(frame: &FrameParams) -> Self {
        Self::between(-frame.overhang_left, frame.width + frame.overhang_right)
    }
}

/// Builds the tagged roof group holding exactly one extruded solid.
///
/// `chord` is the truss top-chord profile; the flat roof follows it.
pub fn generate_roof(
    frame: &FrameParams,
    shape: RoofShape,
    chord: &ChordProfile,
    cfg: &GeneratorConfig,
) -> Group {
    let span = TransverseSpan::for_frame(frame);
    let (profile, origin) = match shape {
        RoofShape::Flat => (flat_profile(frame, chord, cfg), Vector3::zeros()),
        RoofShape::Gable => (gable_profile(frame, cfg), Vector3::zeros()),
        RoofShape::Arched { arch_height } => (
            arched_profile(frame, arch_height, cfg.arch_segments),
            Vector3::new(
                frame.length / 2.0,
                frame.height + (frame.truss_height_left + frame.truss_height_right) / 2.0,
                0.0,
            ),
        ),
    };

    let transform = Transform::new(
        Point3::new(origin.x, origin.y, span.start),
        UnitQuaternion::identity(),
        Vector3::repeat(1.0),
    );
    let solid = Primitive::new(
        PrimitiveKind::Extrusion(Extrusion {
            profile,
            depth: span.depth,
        }),
        transform,
        MaterialRole::Roof,
    )
    .named(shape.name());

    let mut group = Group::new("roof").tagged(ROOF_TAG);
    group.push(solid);
    tracing::debug!(shape = shape.name(), depth = span.depth, "generated roof");
    group
}

/// x range of the flat and gable roofs: overhang tips pulled in by the edge inset.
fn longitudinal_range(frame: &FrameParams, cfg: &GeneratorConfig) -> (f64, f64) {
    let total = frame.length + frame.overhang_front + frame.overhang_rear;
    let inset = cfg.roof_edge_inset.min(total / 4.0);
    (
        -frame.overhang_front + inset,
        frame.length + frame.overhang_rear - inset,
    )
}

/// Sloped panel resting on the purlin tops.
pub fn flat_profile(
    frame: &FrameParams,
    chord: &ChordProfile,
    cfg: &GeneratorConfig,
) -> Vec<Point2<f64>> {
    let (x0, x1) = longitudinal_range(frame, cfg);
    let base = |x: f64| frame.height + chord.height_at(x) + frame.purlin_height;
    let t = frame.roof_thickness;
    vec![
        Point2::new(x0, base(x0)),
        Point2::new(x1, base(x1)),
        Point2::new(x1, base(x1) + t),
        Point2::new(x0, base(x0) + t),
    ]
}

/// Eave, ridge, eave. The ridge sits at the longitudinal midpoint even when
/// the truss ends differ in height.
pub fn gable_profile(frame: &FrameParams, cfg: &GeneratorConfig) -> Vec<Point2<f64>> {
    let (x0, x1) = longitudinal_range(frame, cfg);
    let eave = frame.height;
    let ridge_x = frame.length / 2.0;
    let ridge = frame.truss_height_left.max(frame.truss_height_right) + frame.height;
    let t = frame.roof_thickness;
    vec![
        Point2::new(x0, eave),
        Point2::new(ridge_x, ridge),
        Point2::new(x1, eave),
        Point2::new(x1, eave + t),
        Point2::new(ridge_x, ridge + t),
        Point2::new(x0, eave + t),
    ]
}

/// Half-ellipse band centred on the origin, outer semi-axes (length/2, arch_height).
pub fn arched_profile(frame: &FrameParams, arch_height: f64, segments: usize) -> Vec<Point2<f64>> {
    let segments = segments.max(2);
    let t = frame.roof_thickness;
    let (a, b) = (frame.length / 2.0, arch_height);
    let (ai, bi) = ((a - t).max(0.0), (b - t).max(0.0));

    let outer = (0..=segments).map(|k| {
        let theta = PI * k as f64 / segments as f64;
        Point2::new(a * theta.cos(), b * theta.sin())
    });
    let inner = (0..=segments).rev().map(|k| {
        let theta = PI * k as f64 / segments as f64;
        Point2::new(ai * theta.cos(), bi * theta.sin())
    });
    outer.chain(inner).collect()
}
