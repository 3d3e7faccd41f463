use approx::assert_relative_eq;
use steelframe_algo::config::GeneratorConfig;
use steelframe_algo::roof::{generate_roof, RoofShape, TransverseSpan};
use steelframe_algo::truss::ChordProfile;
use steelframe_core::material::MaterialRole;
use steelframe_core::params::FrameParams;
use steelframe_core::scene::{Extrusion, Group, PrimitiveKind, ROOF_TAG};

fn frame() -> FrameParams {
    FrameParams {
        truss_height_left: 1.0,
        truss_height_right: 2.0,
        ..FrameParams::default()
    }
}

fn inclined(frame: &FrameParams) -> ChordProfile {
    ChordProfile::Inclined {
        span: frame.length,
        height_left: frame.truss_height_left,
        height_right: frame.truss_height_right,
    }
}

fn solid(group: &Group) -> (&Extrusion, nalgebra::Point3<f64>) {
    assert_eq!(Some(ROOF_TAG), group.tag.as_deref());
    assert_eq!(1, group.primitive_count());
    let roof = group.primitives().next().expect("roof solid");
    assert_eq!(MaterialRole::Roof, roof.material);
    match &roof.kind {
        PrimitiveKind::Extrusion(e) => (e, roof.transform.position),
        other => panic!("expected extrusion, got {other:?}"),
    }
}

#[test]
fn transverse_span_is_always_positive() {
    let forward = TransverseSpan::between(-0.3, 10.3);
    assert_relative_eq!(forward.start, -0.3);
    assert_relative_eq!(forward.depth, 10.6, epsilon = 1e-12);

    let reversed = TransverseSpan::between(10.3, -0.3);
    assert_relative_eq!(reversed.start, -0.3);
    assert_relative_eq!(reversed.depth, 10.6, epsilon = 1e-12);
    assert_eq!(forward, reversed);
}

#[test]
fn flat_roof_follows_truss_slope_on_purlins() {
    let frame = frame();
    let cfg = GeneratorConfig::default();
    let chord = inclined(&frame);
    let group = generate_roof(&frame, RoofShape::Flat, &chord, &cfg);
    let (extrusion, origin) = solid(&group);

    assert_eq!(4, extrusion.profile.len());
    let lead = extrusion.profile[0];
    assert_relative_eq!(lead.x, -frame.overhang_front + 0.2, epsilon = 1e-12);
    assert_relative_eq!(
        lead.y,
        frame.height + chord.height_at(lead.x) + frame.purlin_height,
        epsilon = 1e-12
    );
    let tail = extrusion.profile[1];
    assert_relative_eq!(tail.x, frame.length + frame.overhang_rear - 0.2, epsilon = 1e-12);
    assert!(tail.y > lead.y);
    assert_relative_eq!(extrusion.profile[3].y - lead.y, frame.roof_thickness, epsilon = 1e-12);

    assert_relative_eq!(origin.z, -frame.overhang_left);
    assert_relative_eq!(
        extrusion.depth,
        frame.width + frame.overhang_left + frame.overhang_right,
        epsilon = 1e-12
    );
}

#[test]
fn gable_ridge_is_centred_even_with_uneven_heights() {
    let frame = frame();
    let cfg = GeneratorConfig::default();
    let group = generate_roof(&frame, RoofShape::Gable, &inclined(&frame), &cfg);
    let (extrusion, _) = solid(&group);

    assert_eq!(6, extrusion.profile.len());
    let ridge = extrusion.profile[1];
    assert_relative_eq!(ridge.x, frame.length / 2.0);
    assert_relative_eq!(ridge.y, 2.0 + frame.height);
    assert_relative_eq!(extrusion.profile[0].y, frame.height);
    assert_relative_eq!(extrusion.profile[2].y, frame.height);
}

#[test]
fn arched_roof_is_a_sampled_half_ellipse() {
    let frame = frame();
    let cfg = GeneratorConfig::default();
    let chord = ChordProfile::Arched {
        span: frame.length,
        height_left: frame.truss_height_left,
        arch_height: 2.5,
    };
    let group = generate_roof(&frame, RoofShape::Arched { arch_height: 2.5 }, &chord, &cfg);
    let (extrusion, origin) = solid(&group);

    assert_eq!(2 * (cfg.arch_segments + 1), extrusion.profile.len());
    assert_relative_eq!(origin.x, frame.length / 2.0);
    assert_relative_eq!(origin.y, frame.height + 1.5);
    assert_relative_eq!(origin.z, -frame.overhang_left);

    let top = extrusion
        .profile
        .iter()
        .map(|p| p.y)
        .fold(f64::NEG_INFINITY, f64::max);
    assert_relative_eq!(top, 2.5, epsilon = 1e-12);
    assert_relative_eq!(extrusion.profile[0].x, frame.length / 2.0);
    assert_relative_eq!(extrusion.profile[cfg.arch_segments].x, -frame.length / 2.0, epsilon = 1e-12);
}
