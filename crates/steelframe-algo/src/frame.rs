use crate::beam::{create_beam, create_weld};
use crate::config::GeneratorConfig;
use crate::foundation::{generate_foundation, rebar_cells};
use crate::roof::{generate_roof, RoofShape};
use crate::truss::{generate_truss, num_bays, ChordProfile, TrussShape, TrussSpec};
use itertools::Itertools;
use nalgebra::{Point3, UnitQuaternion};
use steelframe_core::error::{FrameError, Result};
use steelframe_core::geom::EPSILON;
use steelframe_core::material::{material_for, DefaultTables, MaterialRole, MaterialSpec};
use steelframe_core::params::{BuildInput, FrameParams, RoofMaterial, RoofType};
use steelframe_core::report::Warning;
use steelframe_core::scene::{Group, SceneGraph};
use steelframe_core::validate::{validate_arch_height, validate_frame, validate_input};

pub const ROOT_NAME: &str = "steel-frame";

/// A freshly generated scene and the fallbacks taken while building it.
#[derive(Debug, Clone, PartialEq)]
pub struct Build {
    pub scene: SceneGraph,
    pub warnings: Vec<Warning>,
    /// Parameters the scene was generated from.
    pub input: BuildInput,
    pub roof: RoofShape,
}

/// A regenerated roof group with its material and the resolved shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RoofBuild {
    pub group: Group,
    pub material: MaterialSpec,
    pub shape: RoofShape,
    pub warnings: Vec<Warning>,
}

/// Full rebuild: validates `input`, then generates foundation, columns, tie
/// beams, trusses, purlins and roof into a new scene graph.
pub fn build_scene(
    input: &BuildInput,
    cfg: &GeneratorConfig,
    tables: &DefaultTables,
) -> Result<Build> {
    validate_input(input, cfg.rebar_cover)?;
    let frame = &input.frame;

    let mut warnings = Vec::new();
    let shape = resolve_roof_shape(frame, cfg, tables, &mut warnings);
    validate_roof_shape(frame, shape)?;
    let roof_material = resolve_roof_material(frame, &mut warnings);

    let estimate = estimate_primitives(input);
    if estimate > cfg.max_primitives {
        return Err(FrameError::TooManyPrimitives {
            count: estimate,
            max: cfg.max_primitives,
        });
    }

    tracing::info!(
        length = frame.length,
        width = frame.width,
        columns = frame.num_columns,
        trusses = frame.truss_count,
        roof = shape.name(),
        estimate,
        "rebuilding frame"
    );

    let weld_size = input.welding.show.then_some(input.welding.size);
    let mut root = Group::new(ROOT_NAME);

    if input.foundation.show {
        root.push_group(generate_foundation(frame, &input.foundation, cfg));
    }
    root.push_group(columns(frame, weld_size));
    root.push_group(tie_beams(frame));

    root.push_group(trusses(frame, shape, weld_size, cfg));

    let chord = truss_spec(frame, shape, 0.0, None).profile();
    root.push_group(purlins(frame, &chord));
    root.push_group(generate_roof(frame, shape, &chord, cfg));

    let scene = SceneGraph::new(root, tables.palette_with_roof(roof_material));
    tracing::info!(primitives = scene.primitive_count(), "frame rebuilt");

    Ok(Build {
        scene,
        warnings,
        input: input.clone(),
        roof: shape,
    })
}

/// Regenerates only the roof group for `frame`, validated like a full rebuild.
pub fn build_roof(
    frame: &FrameParams,
    cfg: &GeneratorConfig,
    tables: &DefaultTables,
) -> Result<RoofBuild> {
    validate_frame(frame)?;
    let mut warnings = Vec::new();
    let shape = resolve_roof_shape(frame, cfg, tables, &mut warnings);
    validate_roof_shape(frame, shape)?;
    let material = resolve_roof_material(frame, &mut warnings);
    let chord = truss_spec(frame, shape, 0.0, None).profile();
    Ok(RoofBuild {
        group: generate_roof(frame, shape, &chord, cfg),
        material,
        shape,
        warnings,
    })
}

/// Arch rise checked after fallbacks, so defaulted and fallback arches are
/// held to the same rules as an explicit one.
fn validate_roof_shape(frame: &FrameParams, shape: RoofShape) -> Result<()> {
    match shape {
        RoofShape::Arched { arch_height } => validate_arch_height(arch_height, frame.roof_thickness),
        RoofShape::Flat | RoofShape::Gable => Ok(()),
    }
}

/// True when `after` with roof `after_shape` generates the same columns, tie
/// beams, trusses and purlins as `before` with `before_shape`.
pub fn same_structure(
    before: &FrameParams,
    before_shape: RoofShape,
    after: &FrameParams,
    after_shape: RoofShape,
) -> bool {
    if truss_shape(before_shape) != truss_shape(after_shape) {
        return false;
    }
    let mut structural = after.clone();
    structural.roof_type = before.roof_type.clone();
    structural.roof_material = before.roof_material.clone();
    structural.roof_color = before.roof_color.clone();
    structural.roof_opacity = before.roof_opacity;
    structural.roof_thickness = before.roof_thickness;
    structural.arch_height = before.arch_height;
    structural == *before
}

pub fn truss_shape(shape: RoofShape) -> TrussShape {
    match shape {
        RoofShape::Arched { arch_height } => TrussShape::Arched { arch_height },
        RoofShape::Flat | RoofShape::Gable => TrussShape::Inclined,
    }
}

pub fn resolve_roof_shape(
    frame: &FrameParams,
    cfg: &GeneratorConfig,
    tables: &DefaultTables,
    warnings: &mut Vec<Warning>,
) -> RoofShape {
    let roof_type = match &frame.roof_type {
        RoofType::Other(name) => {
            tracing::warn!(
                roof_type = %name,
                fallback = tables.fallback_roof_type.as_str(),
                "unknown roof type"
            );
            warnings.push(Warning::new(
                "roof_type_fallback",
                format!(
                    "Unknown roof type '{name}'; using '{}'.",
                    tables.fallback_roof_type.as_str()
                ),
            ));
            &tables.fallback_roof_type
        }
        known => known,
    };

    match roof_type {
        RoofType::Gable => RoofShape::Gable,
        RoofType::Arched => {
            let arch_height = frame.arch_height.unwrap_or_else(|| {
                warnings.push(Warning::new(
                    "roof_arch_height_defaulted",
                    format!(
                        "Arched roof without arch_height; using {}.",
                        cfg.default_arch_height
                    ),
                ));
                cfg.default_arch_height
            });
            RoofShape::Arched { arch_height }
        }
        RoofType::Flat | RoofType::Other(_) => RoofShape::Flat,
    }
}

fn resolve_roof_material(frame: &FrameParams, warnings: &mut Vec<Warning>) -> MaterialSpec {
    if let RoofMaterial::Other(name) = &frame.roof_material {
        tracing::warn!(roof_material = %name, "unknown roof material, using gray fallback");
        warnings.push(Warning::new(
            "roof_material_fallback",
            format!("Unknown roof material '{name}'; using neutral gray."),
        ));
    }
    material_for(
        &frame.roof_material,
        &frame.roof_color,
        frame.roof_opacity,
        frame.roof_thickness,
    )
}

pub fn truss_spec(
    frame: &FrameParams,
    shape: RoofShape,
    row_offset: f64,
    weld_size: Option<f64>,
) -> TrussSpec {
    TrussSpec {
        span: frame.length,
        height_left: frame.truss_height_left,
        height_right: frame.truss_height_right,
        min_bay_length: frame.truss_min_bay_length,
        section: frame.truss_section,
        row_offset,
        lift: frame.height,
        front_overhang: frame.overhang_front,
        rear_overhang: frame.overhang_rear,
        shape: truss_shape(shape),
        weld_size,
    }
}

/// z positions of the two edge rows, the only rows that carry columns.
fn edge_rows(frame: &FrameParams) -> [f64; 2] {
    [0.0, frame.width]
}

fn columns(frame: &FrameParams, weld_size: Option<f64>) -> Group {
    let mut group = Group::new("columns");
    let size = frame.column_size;
    for z in edge_rows(frame) {
        for x in frame.column_stations() {
            let top = Point3::new(x, frame.height, z);
            group.push_opt(
                create_beam(
                    Point3::new(x, 0.0, z),
                    top,
                    size,
                    size,
                    MaterialRole::Column,
                    false,
                )
                .map(|c| c.named("column")),
            );
            if let Some(weld) = weld_size {
                group.push(create_weld(top, weld, UnitQuaternion::identity()));
            }
        }
    }
    tracing::debug!(count = group.primitive_count(), "placed columns");
    group
}

fn tie_beams(frame: &FrameParams) -> Group {
    let mut group = Group::new("tie-beams");
    let size = frame.tie_beam_size;
    let stations = frame.column_stations();
    for z in edge_rows(frame) {
        for (a, b) in stations.iter().tuple_windows() {
            group.push_opt(
                create_beam(
                    Point3::new(*a, frame.height, z),
                    Point3::new(*b, frame.height, z),
                    size,
                    size,
                    MaterialRole::TieBeam,
                    false,
                )
                .map(|t| t.named("tie-beam")),
            );
        }
    }

    // Front edge, across the first column of each edge row.
    let [near, far] = edge_rows(frame);
    group.push_opt(
        create_beam(
            Point3::new(0.0, frame.height, near),
            Point3::new(0.0, frame.height, far),
            size,
            size,
            MaterialRole::TieBeam,
            false,
        )
        .map(|t| t.named("tie-beam")),
    );
    group
}

fn trusses(
    frame: &FrameParams,
    shape: RoofShape,
    weld_size: Option<f64>,
    cfg: &GeneratorConfig,
) -> Group {
    let mut group = Group::new("trusses");
    for (row, z) in frame.truss_rows().into_iter().enumerate() {
        let spec = truss_spec(frame, shape, z, weld_size);
        let mut truss = generate_truss(&spec, cfg);
        truss.name = format!("truss-{row}");
        group.push_group(truss);
    }
    tracing::debug!(rows = frame.truss_count, "generated trusses");
    group
}

/// Longitudinal purlin stations: every `purlin_spacing` from 0, always
/// including 0 and `length`, plus the overhang tips when present.
pub fn purlin_stations(frame: &FrameParams) -> Vec<f64> {
    let mut stations = Vec::new();
    if frame.overhang_front > 0.0 {
        stations.push(-frame.overhang_front);
    }
    let mut k = 0usize;
    loop {
        let x = k as f64 * frame.purlin_spacing;
        if x >= frame.length - EPSILON {
            break;
        }
        stations.push(x);
        k += 1;
    }
    stations.push(frame.length);
    if frame.overhang_rear > 0.0 {
        stations.push(frame.length + frame.overhang_rear);
    }
    stations
}

fn purlins(frame: &FrameParams, chord: &ChordProfile) -> Group {
    let mut group = Group::new("purlins");
    let (w, h) = (frame.purlin_width, frame.purlin_height);
    let z_first = 0.0;
    let z_last = frame.width;

    for x in purlin_stations(frame) {
        let y = frame.height + chord.height_at(x) + h / 2.0;
        group.push_opt(
            create_beam(
                Point3::new(x, y, z_first),
                Point3::new(x, y, z_last),
                w,
                h,
                MaterialRole::Purlin,
                false,
            )
            .map(|p| p.named("purlin")),
        );
        if frame.overhang_left > 0.0 {
            group.push_opt(
                create_beam(
                    Point3::new(x, y, z_first - frame.overhang_left),
                    Point3::new(x, y, z_first),
                    w,
                    h,
                    MaterialRole::Purlin,
                    false,
                )
                .map(|p| p.named("purlin-stub")),
            );
        }
        if frame.overhang_right > 0.0 {
            group.push_opt(
                create_beam(
                    Point3::new(x, y, z_last),
                    Point3::new(x, y, z_last + frame.overhang_right),
                    w,
                    h,
                    MaterialRole::Purlin,
                    false,
                )
                .map(|p| p.named("purlin-stub")),
            );
        }
    }
    tracing::debug!(count = group.primitive_count(), "placed purlins");
    group
}

/// Upper bound on the primitives a build would emit, computed before any
/// allocation so oversized requests are refused cheaply.
pub fn estimate_primitives(input: &BuildInput) -> usize {
    let frame = &input.frame;
    let columns = frame.num_columns as f64;
    let rows = frame.truss_count as f64;
    let bays = num_bays(frame.length, frame.truss_min_bay_length) as f64;
    let welds = input.welding.show;

    let column_prims = 2.0 * columns * if welds { 2.0 } else { 1.0 };
    let tie_prims = 2.0 * (columns - 1.0) + 1.0;
    let per_truss = 4.0 * bays + 3.0 + if welds { bays + 1.0 } else { 0.0 };
    let stations = (frame.length / frame.purlin_spacing).ceil() + 3.0;
    let purlin_prims = 3.0 * stations;

    let mut total = column_prims + tie_prims + rows * per_truss + purlin_prims + 1.0;
    if input.foundation.show {
        let f = &input.foundation;
        let (nx, nz) = rebar_cells(f.footprint(frame.length, frame.width), f.rebar_spacing);
        total += 4.0 + f.rebar_rows as f64 * nx as f64 * nz as f64 * 2.0;
    }
    total as usize
}
