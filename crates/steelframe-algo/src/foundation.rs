use crate::beam::create_rod;
use crate::config::GeneratorConfig;
use nalgebra::{Point3, UnitQuaternion, Vector3};
use steelframe_core::geom::Transform;
use steelframe_core::material::MaterialRole;
use steelframe_core::params::{FoundationParams, FrameParams};
use steelframe_core::scene::{Group, Primitive, PrimitiveKind};

/// Elevations of the rebar rows measured from the slab base.
///
/// A single row sits at mid-slab; otherwise rows are spread between the two
/// cover planes.
pub fn rebar_elevations(slab_thickness: f64, rows: usize, cover: f64) -> Vec<f64> {
    match rows {
        0 => Vec::new(),
        1 => vec![slab_thickness / 2.0],
        _ => {
            let spacing = (slab_thickness - 2.0 * cover) / (rows - 1) as f64;
            (0..rows).map(|k| cover + k as f64 * spacing).collect()
        }
    }
}

/// Grid cells along x and z covering `footprint` at `spacing`.
pub fn rebar_cells(footprint: (f64, f64), spacing: f64) -> (usize, usize) {
    (
        (footprint.0 / spacing).floor() as usize,
        (footprint.1 / spacing).floor() as usize,
    )
}

/// Ground marker, sand, gravel and concrete slab stacked bottom-up, plus the
/// rebar grid. The group is lowered so the slab top meets y = 0.
pub fn generate_foundation(
    frame: &FrameParams,
    params: &FoundationParams,
    cfg: &GeneratorConfig,
) -> Group {
    let (fx, fz) = params.footprint(frame.length, frame.width);
    let center_x = frame.length / 2.0;
    let center_z = frame.width / 2.0;

    let layers = [
        ("ground", MaterialRole::Ground, cfg.ground_marker_thickness),
        ("sand", MaterialRole::Sand, params.sand_thickness),
        ("gravel", MaterialRole::Gravel, params.gravel_thickness),
        ("concrete-slab", MaterialRole::ConcreteSlab, params.slab_thickness),
    ];
    let total: f64 = layers.iter().map(|(_, _, t)| t).sum();

    let mut group = Group::new("foundation")
        .with_transform(Transform::from_translation(Vector3::new(0.0, -total, 0.0)));

    let mut base = 0.0;
    for (name, role, thickness) in layers {
        if thickness <= 0.0 {
            tracing::trace!(layer = name, "skipping empty foundation layer");
            continue;
        }
        group.push(
            Primitive::new(
                PrimitiveKind::Slab,
                Transform::new(
                    Point3::new(center_x, base + thickness / 2.0, center_z),
                    UnitQuaternion::identity(),
                    Vector3::new(fx, thickness, fz),
                ),
                role,
            )
            .named(name),
        );
        base += thickness;
    }

    let slab_base = total - params.slab_thickness;
    group.push_group(rebar_grid(frame, params, cfg, slab_base));
    group
}

fn rebar_grid(
    frame: &FrameParams,
    params: &FoundationParams,
    cfg: &GeneratorConfig,
    slab_base: f64,
) -> Group {
    let footprint = params.footprint(frame.length, frame.width);
    let spacing = params.rebar_spacing;
    let (nx, nz) = rebar_cells(footprint, spacing);
    let x0 = (frame.length - footprint.0) / 2.0;
    let z0 = (frame.width - footprint.1) / 2.0;
    let segment = spacing * cfg.rebar_fill_ratio;

    let mut group = Group::new("rebar")
        .with_transform(Transform::from_translation(Vector3::new(0.0, slab_base, 0.0)));

    for y in rebar_elevations(params.slab_thickness, params.rebar_rows, cfg.rebar_cover) {
        for i in 0..nx {
            for j in 0..nz {
                let start = Point3::new(x0 + i as f64 * spacing, y, z0 + j as f64 * spacing);
                group.push_opt(
                    create_rod(
                        start,
                        start + Vector3::new(segment, 0.0, 0.0),
                        params.rebar_thickness,
                        MaterialRole::Rebar,
                    )
                    .map(|r| r.named("rebar")),
                );
                group.push_opt(
                    create_rod(
                        start,
                        start + Vector3::new(0.0, 0.0, segment),
                        params.rebar_thickness,
                        MaterialRole::Rebar,
                    )
                    .map(|r| r.named("rebar")),
                );
            }
        }
    }

    tracing::debug!(
        cells_x = nx,
        cells_z = nz,
        rows = params.rebar_rows,
        segments = group.children.len(),
        "generated rebar grid"
    );
    group
}
