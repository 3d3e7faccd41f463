use crate::params::{RoofMaterial, RoofType};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Named material slot a primitive is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialRole {
    Column,
    TieBeam,
    Truss,
    Purlin,
    Weld,
    Roof,
    ConcreteSlab,
    Gravel,
    Sand,
    Ground,
    Rebar,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    /// sRGB hex string, `#rrggbb`.
    pub color: String,
    pub opacity: f64,
    pub transparent: bool,
    pub metalness: f64,
    pub roughness: f64,
    pub transmission: f64,
    pub ior: Option<f64>,
    pub thickness: f64,
}

impl MaterialSpec {
    pub fn opaque(color: &str, metalness: f64, roughness: f64) -> Self {
        Self {
            color: color.to_string(),
            opacity: 1.0,
            transparent: false,
            metalness,
            roughness,
            transmission: 0.0,
            ior: None,
            thickness: 0.0,
        }
    }
}

pub const FALLBACK_ROOF_COLOR: &str = "#888888";

/// Roof material factory shared by every roof profile.
///
/// `opacity` is taken as validated to [0, 1]. Unknown material names resolve
/// to a neutral gray and ignore the requested color.
pub fn material_for(kind: &RoofMaterial, color: &str, opacity: f64, thickness: f64) -> MaterialSpec {
    match kind {
        RoofMaterial::Polycarbonate => MaterialSpec {
            color: color.to_string(),
            opacity,
            transparent: true,
            metalness: 0.0,
            roughness: 0.1,
            transmission: opacity * 0.8,
            ior: Some(1.4),
            thickness,
        },
        RoofMaterial::Metal => MaterialSpec {
            color: color.to_string(),
            opacity,
            transparent: opacity < 1.0,
            metalness: 0.8,
            roughness: 0.2,
            transmission: 0.0,
            ior: None,
            thickness,
        },
        RoofMaterial::Tile => MaterialSpec {
            color: color.to_string(),
            opacity,
            transparent: opacity < 1.0,
            metalness: 0.1,
            roughness: 0.8,
            transmission: 0.0,
            ior: None,
            thickness,
        },
        RoofMaterial::Other(_) => MaterialSpec {
            thickness,
            ..MaterialSpec::opaque(FALLBACK_ROOF_COLOR, 0.0, 0.5)
        },
    }
}

/// Lookup tables the generator falls back on. Passed in explicitly rather than
/// read from globals so callers can swap palettes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultTables {
    pub palette: BTreeMap<MaterialRole, MaterialSpec>,
    pub fallback_roof_type: RoofType,
}

impl Default for DefaultTables {
    fn default() -> Self {
        let steel = MaterialSpec::opaque("#5a6470", 0.7, 0.35);
        let palette = BTreeMap::from([
            (MaterialRole::Column, steel.clone()),
            (MaterialRole::TieBeam, steel.clone()),
            (MaterialRole::Truss, MaterialSpec::opaque("#6b7785", 0.7, 0.35)),
            (MaterialRole::Purlin, steel),
            (MaterialRole::Weld, MaterialSpec::opaque("#c08a3e", 0.6, 0.5)),
            (MaterialRole::ConcreteSlab, MaterialSpec::opaque("#a5a5a5", 0.0, 0.9)),
            (MaterialRole::Gravel, MaterialSpec::opaque("#7d7461", 0.0, 1.0)),
            (MaterialRole::Sand, MaterialSpec::opaque("#d8c08e", 0.0, 1.0)),
            (MaterialRole::Ground, MaterialSpec::opaque("#5b4636", 0.0, 1.0)),
            (MaterialRole::Rebar, MaterialSpec::opaque("#8b4a2b", 0.5, 0.6)),
        ]);
        Self {
            palette,
            fallback_roof_type: RoofType::Flat,
        }
    }
}

impl DefaultTables {
    /// Structural palette merged with the roof material for one build.
    pub fn palette_with_roof(&self, roof: MaterialSpec) -> BTreeMap<MaterialRole, MaterialSpec> {
        let mut palette = self.palette.clone();
        palette.insert(MaterialRole::Roof, roof);
        palette
    }
}
