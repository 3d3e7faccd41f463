use crate::beam::{create_beam, create_weld};
use crate::config::GeneratorConfig;
use itertools::Itertools;
use nalgebra::{Point2, Point3, UnitQuaternion, Vector3};
use steelframe_core::geom::{Transform, EPSILON};
use steelframe_core::material::MaterialRole;
use steelframe_core::scene::{Group, Primitive};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrussShape {
    Inclined,
    Arched { arch_height: f64 },
}

/// One truss row. Heights are measured from the lower chord.
#[derive(Debug, Clone)]
pub struct TrussSpec {
    pub span: f64,
    pub height_left: f64,
    pub height_right: f64,
    pub min_bay_length: f64,
    pub section: f64,
    /// Transverse (z) position of the row.
    pub row_offset: f64,
    /// Elevation of the lower chord, i.e. the column height.
    pub lift: f64,
    pub front_overhang: f64,
    pub rear_overhang: f64,
    pub shape: TrussShape,
    pub weld_size: Option<f64>,
}

impl TrussSpec {
    pub fn profile(&self) -> ChordProfile {
        match self.shape {
            TrussShape::Inclined => ChordProfile::Inclined {
                span: self.span,
                height_left: self.height_left,
                height_right: self.height_right,
            },
            TrussShape::Arched { arch_height } => ChordProfile::Arched {
                span: self.span,
                height_left: self.height_left,
                arch_height,
            },
        }
    }
}

/// Height of the upper chord above the lower chord as a function of x.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChordProfile {
    Inclined {
        span: f64,
        height_left: f64,
        height_right: f64,
    },
    Arched {
        span: f64,
        height_left: f64,
        arch_height: f64,
    },
}

impl ChordProfile {
    pub fn height_at(&self, x: f64) -> f64 {
        match *self {
            ChordProfile::Inclined {
                span,
                height_left,
                height_right,
            } => {
                if (x - span).abs() < EPSILON {
                    return height_right;
                }
                let slope = (height_right - height_left) / span;
                height_left + slope * x
            }
            ChordProfile::Arched {
                span,
                height_left,
                arch_height,
            } => {
                // Overhangs sit level with the nearest chord end.
                if x <= 0.0 || x >= span {
                    return height_left;
                }
                let t = x / span;
                height_left + 4.0 * arch_height * t * (1.0 - t)
            }
        }
    }
}

pub fn num_bays(span: f64, min_bay_length: f64) -> usize {
    ((span / min_bay_length).ceil() as usize).max(2)
}

/// Node positions of a truss in its own plane (x along the span, y up).
#[derive(Debug, Clone)]
pub struct TrussLayout {
    pub num_bays: usize,
    pub bay_length: f64,
    pub lower: Vec<Point2<f64>>,
    pub upper: Vec<Point2<f64>>,
    /// Index shift from a lower node to the upper node above it; 1 when a front
    /// overhang node leads the upper chord.
    pub upper_offset: usize,
}

impl TrussLayout {
    pub fn new(spec: &TrussSpec) -> Self {
        let profile = spec.profile();
        let num_bays = num_bays(spec.span, spec.min_bay_length);
        let bay_length = spec.span / num_bays as f64;

        let lower: Vec<Point2<f64>> = (0..=num_bays)
            .map(|i| {
                let x = if i == num_bays {
                    spec.span
                } else {
                    i as f64 * bay_length
                };
                Point2::new(x, 0.0)
            })
            .collect();

        let mut upper = Vec::with_capacity(lower.len() + 2);
        let mut upper_offset = 0;
        if spec.front_overhang > 0.0 {
            let x = -spec.front_overhang;
            upper.push(Point2::new(x, profile.height_at(x)));
            upper_offset = 1;
        }
        upper.extend(lower.iter().map(|p| Point2::new(p.x, profile.height_at(p.x))));
        if spec.rear_overhang > 0.0 {
            let x = spec.span + spec.rear_overhang;
            upper.push(Point2::new(x, profile.height_at(x)));
        }

        Self {
            num_bays,
            bay_length,
            lower,
            upper,
            upper_offset,
        }
    }

    /// Zig-zag braces: even bays rise from the lower node to the next upper
    /// node, odd bays fall from the current upper node to the next lower node.
    pub fn diagonals(&self) -> Vec<(Point2<f64>, Point2<f64>)> {
        (0..self.num_bays)
            .map(|i| {
                if i % 2 == 0 {
                    (self.lower[i], self.upper[i + 1 + self.upper_offset])
                } else {
                    (self.upper[i + self.upper_offset], self.lower[i + 1])
                }
            })
            .collect()
    }

    /// Struts joining each lower node to the upper node above it.
    pub fn verticals(&self) -> Vec<(Point2<f64>, Point2<f64>)> {
        self.lower
            .iter()
            .enumerate()
            .map(|(i, low)| (*low, self.upper[i + self.upper_offset]))
            .collect()
    }
}

/// Builds one truss row as a group lifted to column height at its row offset.
pub fn generate_truss(spec: &TrussSpec, cfg: &GeneratorConfig) -> Group {
    let layout = TrussLayout::new(spec);
    let s = spec.section;
    let mut group = Group::new("truss").with_transform(Transform::from_translation(Vector3::new(
        0.0,
        spec.lift,
        spec.row_offset,
    )));

    for (a, b) in layout.lower.iter().tuple_windows() {
        group.push_opt(
            create_beam(at(a), at(b), s, s, MaterialRole::Truss, false).map(|m| m.named("lower-chord")),
        );
    }

    for (a, b) in layout.upper.iter().tuple_windows() {
        group.push_opt(
            create_beam(at(a), at(b), s, s, MaterialRole::Truss, false)
                .map(|m| bevel(m, cfg.upper_chord_bevel).named("upper-chord")),
        );
    }

    for (low, up) in layout.verticals() {
        group.push_opt(
            create_beam(at(&low), at(&up), s, s, MaterialRole::Truss, false).map(|m| m.named("vertical")),
        );
    }

    for (a, b) in layout.diagonals() {
        group.push_opt(
            create_beam(at(&a), at(&b), s, s, MaterialRole::Truss, true).map(|m| m.named("diagonal")),
        );
    }

    if let Some(size) = spec.weld_size {
        for node in &layout.lower {
            group.push(create_weld(at(node), size, UnitQuaternion::identity()));
        }
    }

    tracing::trace!(
        row = spec.row_offset,
        bays = layout.num_bays,
        members = group.children.len(),
        "generated truss"
    );
    group
}

/// Rolls a chord segment about its own axis so the flange reads as bevelled.
fn bevel(mut member: Primitive, angle: f64) -> Primitive {
    member.transform.rotation *= UnitQuaternion::from_axis_angle(&Vector3::z_axis(), angle);
    member
}

fn at(p: &Point2<f64>) -> Point3<f64> {
    Point3::new(p.x, p.y, 0.0)
}
