use crate::geom::BBox3;
use crate::material::MaterialRole;
use crate::scene::SceneGraph;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub code: String,
    pub message: String,
}

impl Warning {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneReport {
    pub primitives_total: usize,
    pub by_kind: BTreeMap<String, usize>,
    pub by_role: BTreeMap<MaterialRole, usize>,
    pub by_name: BTreeMap<String, usize>,
    /// Bounds of primitive centres in world space.
    pub extents: Option<BBox3>,
    pub roof_tagged: bool,
    pub warnings: Vec<Warning>,
}

pub fn summarize(scene: &SceneGraph, warnings: &[Warning]) -> SceneReport {
    let mut by_kind: BTreeMap<String, usize> = BTreeMap::new();
    let mut by_role: BTreeMap<MaterialRole, usize> = BTreeMap::new();
    let mut by_name: BTreeMap<String, usize> = BTreeMap::new();
    let mut bbox = BBox3::empty();

    let world = scene.world_primitives();
    for w in &world {
        *by_kind.entry(w.primitive.kind.label().to_string()).or_default() += 1;
        *by_role.entry(w.primitive.material).or_default() += 1;
        if let Some(name) = &w.primitive.name {
            *by_name.entry(name.clone()).or_default() += 1;
        }
        bbox.include_point(w.transform.position);
    }

    SceneReport {
        primitives_total: world.len(),
        by_kind,
        by_role,
        by_name,
        extents: if bbox.is_empty() { None } else { Some(bbox) },
        roof_tagged: scene.find_tagged(crate::scene::ROOF_TAG).is_some(),
        warnings: warnings.to_vec(),
    }
}
