use crate::geom::Transform;
use crate::material::{MaterialRole, MaterialSpec};
use nalgebra::Point2;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Tag carried by the replaceable roof group.
pub const ROOF_TAG: &str = "roof";

/// Closed 2D outline in the local xy plane, swept along local +z.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extrusion {
    pub profile: Vec<Point2<f64>>,
    pub depth: f64,
}

/// Unit-sized shape family; the primitive's transform scale supplies the size.
///
/// `Beam` and `Cylinder` run along local +z (scale.z is the length). `Slab` is an
/// axis-aligned box. `Extrusion` is already in scene units and keeps unit scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PrimitiveKind {
    Beam,
    Slab,
    Cylinder,
    Extrusion(Extrusion),
}

impl PrimitiveKind {
    pub fn label(&self) -> &'static str {
        match self {
            PrimitiveKind::Beam => "beam",
            PrimitiveKind::Slab => "slab",
            PrimitiveKind::Cylinder => "cylinder",
            PrimitiveKind::Extrusion(_) => "extrusion",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Primitive {
    pub kind: PrimitiveKind,
    pub transform: Transform,
    pub material: MaterialRole,
    pub name: Option<String>,
}

impl Primitive {
    pub fn new(kind: PrimitiveKind, transform: Transform, material: MaterialRole) -> Self {
        Self {
            kind,
            transform,
            material,
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Extent along the member axis for beams and cylinders.
    pub fn length(&self) -> Option<f64> {
        match self.kind {
            PrimitiveKind::Beam | PrimitiveKind::Cylinder => Some(self.transform.scale.z),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Node {
    Primitive(Primitive),
    Group(Group),
}

/// Named container with a rigid local transform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub name: String,
    pub tag: Option<String>,
    pub transform: Transform,
    pub children: Vec<Node>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tag: None,
            transform: Transform::identity(),
            children: Vec::new(),
        }
    }

    pub fn tagged(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    pub fn with_transform(mut self, transform: Transform) -> Self {
        self.transform = transform;
        self
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.children.push(Node::Primitive(primitive));
    }

    /// Pushes a generated member, skipping degenerate requests.
    pub fn push_opt(&mut self, primitive: Option<Primitive>) {
        if let Some(p) = primitive {
            self.push(p);
        }
    }

    pub fn push_group(&mut self, group: Group) {
        self.children.push(Node::Group(group));
    }

    pub fn primitives(&self) -> impl Iterator<Item = &Primitive> {
        self.children.iter().filter_map(|n| match n {
            Node::Primitive(p) => Some(p),
            Node::Group(_) => None,
        })
    }

    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.children.iter().filter_map(|n| match n {
            Node::Group(g) => Some(g),
            Node::Primitive(_) => None,
        })
    }

    pub fn group(&self, name: &str) -> Option<&Group> {
        self.groups().find(|g| g.name == name)
    }

    /// Number of primitives in this group and all nested groups.
    pub fn primitive_count(&self) -> usize {
        self.children
            .iter()
            .map(|n| match n {
                Node::Primitive(_) => 1,
                Node::Group(g) => g.primitive_count(),
            })
            .sum()
    }

    pub fn find_tagged(&self, tag: &str) -> Option<&Group> {
        if self.tag.as_deref() == Some(tag) {
            return Some(self);
        }
        self.groups().find_map(|g| g.find_tagged(tag))
    }

    fn find_tagged_mut(&mut self, tag: &str) -> Option<&mut Group> {
        if self.tag.as_deref() == Some(tag) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|n| match n {
            Node::Group(g) => g.find_tagged_mut(tag),
            Node::Primitive(_) => None,
        })
    }

    fn collect_world<'a>(&'a self, parent: &Transform, out: &mut Vec<WorldPrimitive<'a>>) {
        let frame = parent.then(&self.transform);
        for node in &self.children {
            match node {
                Node::Primitive(p) => out.push(WorldPrimitive {
                    transform: frame.then(&p.transform),
                    primitive: p,
                }),
                Node::Group(g) => g.collect_world(&frame, out),
            }
        }
    }
}

/// A primitive with its transform resolved through every enclosing group.
#[derive(Debug, Clone, Copy)]
pub struct WorldPrimitive<'a> {
    pub transform: Transform,
    pub primitive: &'a Primitive,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGraph {
    pub root: Group,
    pub materials: BTreeMap<MaterialRole, MaterialSpec>,
}

impl SceneGraph {
    pub fn new(root: Group, materials: BTreeMap<MaterialRole, MaterialSpec>) -> Self {
        Self { root, materials }
    }

    pub fn primitive_count(&self) -> usize {
        self.root.primitive_count()
    }

    pub fn world_primitives(&self) -> Vec<WorldPrimitive<'_>> {
        let mut out = Vec::with_capacity(self.primitive_count());
        self.root.collect_world(&Transform::identity(), &mut out);
        out
    }

    pub fn find_tagged(&self, tag: &str) -> Option<&Group> {
        self.root.find_tagged(tag)
    }

    /// Swaps the group carrying `tag` for `replacement`, which keeps the tag.
    /// Returns false when no group carries the tag.
    pub fn replace_tagged(&mut self, tag: &str, replacement: Group) -> bool {
        match self.root.find_tagged_mut(tag) {
            Some(slot) => {
                *slot = replacement;
                slot.tag = Some(tag.to_string());
                true
            }
            None => false,
        }
    }

    /// World-space primitives whose name tag equals `name`.
    pub fn named(&self, name: &str) -> Vec<WorldPrimitive<'_>> {
        self.world_primitives()
            .into_iter()
            .filter(|w| w.primitive.is_named(name))
            .collect()
    }
}

