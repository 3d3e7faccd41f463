use approx::assert_relative_eq;
use nalgebra::{Point3, Vector3};
use steelframe_algo::config::GeneratorConfig;
use steelframe_algo::truss::{generate_truss, num_bays, ChordProfile, TrussLayout, TrussShape, TrussSpec};
use steelframe_core::scene::Group;

fn spec(shape: TrussShape, front: f64, rear: f64) -> TrussSpec {
    TrussSpec {
        span: 14.0,
        height_left: 1.0,
        height_right: 2.0,
        min_bay_length: 5.0,
        section: 0.1,
        row_offset: 2.5,
        lift: 5.0,
        front_overhang: front,
        rear_overhang: rear,
        shape,
        weld_size: None,
    }
}

fn count(group: &Group, name: &str) -> usize {
    group.primitives().filter(|p| p.is_named(name)).count()
}

#[test]
fn bay_count_rounds_up_with_a_floor_of_two() {
    assert_eq!(3, num_bays(14.0, 5.0));
    assert_eq!(2, num_bays(10.0, 5.0));
    assert_eq!(2, num_bays(4.0, 5.0));
    assert_eq!(7, num_bays(14.0, 2.0));
}

#[test]
fn inclined_layout_without_overhangs() {
    let layout = TrussLayout::new(&spec(TrussShape::Inclined, 0.0, 0.0));
    assert_eq!(3, layout.num_bays);
    assert_eq!(4, layout.lower.len());
    assert_eq!(4, layout.upper.len());
    assert_eq!(0, layout.upper_offset);
    assert!(layout.lower.iter().all(|p| p.y == 0.0));
    assert_eq!(14.0, layout.lower[3].x);
    assert_eq!(1.0, layout.upper[0].y);
    assert_eq!(2.0, layout.upper[3].y);
    assert_relative_eq!(layout.bay_length, 14.0 / 3.0);
}

#[test]
fn overhang_nodes_extend_the_slope() {
    let layout = TrussLayout::new(&spec(TrussShape::Inclined, 0.7, 1.4));
    assert_eq!(6, layout.upper.len());
    assert_eq!(1, layout.upper_offset);
    assert_relative_eq!(layout.upper[0].x, -0.7);
    assert_relative_eq!(layout.upper[0].y, 0.95, epsilon = 1e-12);
    assert_relative_eq!(layout.upper[5].x, 15.4, epsilon = 1e-12);
    assert_relative_eq!(layout.upper[5].y, 2.1, epsilon = 1e-12);

    for (low, up) in layout.verticals() {
        assert_eq!(low.x, up.x);
    }
}

#[test]
fn diagonals_zig_zag() {
    let layout = TrussLayout::new(&spec(TrussShape::Inclined, 0.7, 0.0));
    let diagonals = layout.diagonals();
    assert_eq!(3, diagonals.len());

    // Even bays rise from the lower node, odd bays fall back to it.
    let (a, b) = diagonals[0];
    assert_eq!((0.0, 0.0), (a.x, a.y));
    assert_eq!(layout.lower[1].x, b.x);
    assert!(b.y > 0.0);

    let (a, b) = diagonals[1];
    assert_eq!(layout.lower[1].x, a.x);
    assert!(a.y > 0.0);
    assert_eq!(layout.lower[2], b);

    let (a, b) = diagonals[2];
    assert_eq!(layout.lower[2], a);
    assert_eq!(14.0, b.x);
}

#[test]
fn arched_chord_rises_to_arch_height_at_midspan() {
    let profile = ChordProfile::Arched {
        span: 14.0,
        height_left: 1.0,
        arch_height: 2.0,
    };
    assert_eq!(1.0, profile.height_at(0.0));
    assert_eq!(1.0, profile.height_at(14.0));
    assert_relative_eq!(profile.height_at(7.0), 3.0);
    assert_eq!(1.0, profile.height_at(-0.5));
    assert_eq!(1.0, profile.height_at(15.0));

    let layout = TrussLayout::new(&spec(TrussShape::Arched { arch_height: 2.0 }, 0.5, 0.5));
    assert_eq!(4, layout.lower.len());
    assert_eq!(1.0, layout.upper[0].y);
    assert_relative_eq!(layout.upper[2].y, 1.0 + 16.0 / 9.0, epsilon = 1e-12);
    assert_eq!(1.0, layout.upper[5].y);
}

#[test]
fn generated_truss_member_counts() {
    let cfg = GeneratorConfig::default();
    let truss = generate_truss(&spec(TrussShape::Inclined, 0.7, 1.4), &cfg);

    assert_relative_eq!(
        truss.transform.position,
        Point3::new(0.0, 5.0, 2.5),
        epsilon = 1e-12
    );
    assert_eq!(3, count(&truss, "lower-chord"));
    assert_eq!(5, count(&truss, "upper-chord"));
    assert_eq!(4, count(&truss, "vertical"));
    assert_eq!(3, count(&truss, "diagonal"));
    assert_eq!(0, count(&truss, "weld"));
}

#[test]
fn upper_chord_is_bevelled() {
    let cfg = GeneratorConfig::default();
    let mut level = spec(TrussShape::Inclined, 0.0, 0.0);
    level.height_right = level.height_left;
    let truss = generate_truss(&level, &cfg);

    let chord = truss
        .primitives()
        .find(|p| p.is_named("upper-chord"))
        .expect("upper chord");
    let up = chord.transform.rotation * Vector3::y();
    assert_relative_eq!(up.y, cfg.upper_chord_bevel.cos(), epsilon = 1e-12);

    let lower = truss
        .primitives()
        .find(|p| p.is_named("lower-chord"))
        .expect("lower chord");
    assert_relative_eq!((lower.transform.rotation * Vector3::y()).y, 1.0, epsilon = 1e-12);
}

#[test]
fn zero_height_end_skips_degenerate_vertical_and_welds_follow_flag() {
    let cfg = GeneratorConfig::default();
    let mut flat_start = spec(TrussShape::Inclined, 0.0, 0.0);
    flat_start.height_left = 0.0;
    flat_start.weld_size = Some(0.05);
    let truss = generate_truss(&flat_start, &cfg);

    assert_eq!(3, count(&truss, "vertical"));
    assert_eq!(4, count(&truss, "weld"));
}
