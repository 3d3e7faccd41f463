use serde::{Deserialize, Serialize};

/// Roof profile family. Names outside the known set are kept verbatim so the
/// generator can report them and substitute its fallback.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoofType {
    Flat,
    Gable,
    Arched,
    Other(String),
}

impl RoofType {
    pub fn as_str(&self) -> &str {
        match self {
            RoofType::Flat => "flat",
            RoofType::Gable => "gable",
            RoofType::Arched => "arched",
            RoofType::Other(name) => name,
        }
    }
}

impl From<String> for RoofType {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "flat" => RoofType::Flat,
            "gable" => RoofType::Gable,
            "arched" | "arch" => RoofType::Arched,
            _ => RoofType::Other(value),
        }
    }
}

impl From<&str> for RoofType {
    fn from(value: &str) -> Self {
        RoofType::from(value.to_string())
    }
}

impl From<RoofType> for String {
    fn from(value: RoofType) -> Self {
        value.as_str().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoofMaterial {
    Polycarbonate,
    Metal,
    Tile,
    Other(String),
}

impl RoofMaterial {
    pub fn as_str(&self) -> &str {
        match self {
            RoofMaterial::Polycarbonate => "polycarbonate",
            RoofMaterial::Metal => "metal",
            RoofMaterial::Tile => "tile",
            RoofMaterial::Other(name) => name,
        }
    }
}

impl From<String> for RoofMaterial {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "polycarbonate" => RoofMaterial::Polycarbonate,
            "metal" => RoofMaterial::Metal,
            "tile" => RoofMaterial::Tile,
            _ => RoofMaterial::Other(value),
        }
    }
}

impl From<&str> for RoofMaterial {
    fn from(value: &str) -> Self {
        RoofMaterial::from(value.to_string())
    }
}

impl From<RoofMaterial> for String {
    fn from(value: RoofMaterial) -> Self {
        value.as_str().to_string()
    }
}

/// Envelope, member sections and roof settings of the frame. Lengths in metres.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FrameParams {
    pub length: f64,
    pub width: f64,
    /// Column height; trusses sit on top of it.
    pub height: f64,
    pub num_columns: usize,
    pub column_size: f64,
    pub tie_beam_size: f64,

    pub truss_height_left: f64,
    pub truss_height_right: f64,
    pub truss_min_bay_length: f64,
    pub truss_count: usize,
    pub truss_section: f64,

    pub purlin_spacing: f64,
    pub purlin_width: f64,
    pub purlin_height: f64,

    pub overhang_front: f64,
    pub overhang_rear: f64,
    pub overhang_left: f64,
    pub overhang_right: f64,

    pub roof_type: RoofType,
    pub roof_material: RoofMaterial,
    pub roof_color: String,
    pub roof_opacity: f64,
    pub roof_thickness: f64,
    pub arch_height: Option<f64>,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            length: 14.0,
            width: 10.0,
            height: 5.0,
            num_columns: 5,
            column_size: 0.3,
            tie_beam_size: 0.2,
            truss_height_left: 1.5,
            truss_height_right: 1.5,
            truss_min_bay_length: 5.0,
            truss_count: 5,
            truss_section: 0.1,
            purlin_spacing: 1.5,
            purlin_width: 0.08,
            purlin_height: 0.12,
            overhang_front: 0.5,
            overhang_rear: 0.5,
            overhang_left: 0.3,
            overhang_right: 0.3,
            roof_type: RoofType::Flat,
            roof_material: RoofMaterial::Polycarbonate,
            roof_color: "#88ccee".to_string(),
            roof_opacity: 0.6,
            roof_thickness: 0.02,
            arch_height: None,
        }
    }
}

impl FrameParams {
    /// x positions of the column lines, evenly spaced from 0 to `length`.
    pub fn column_stations(&self) -> Vec<f64> {
        evenly_spaced(self.length, self.num_columns)
    }

    /// z positions of the truss rows, evenly spaced from 0 to `width`.
    pub fn truss_rows(&self) -> Vec<f64> {
        evenly_spaced(self.width, self.truss_count)
    }
}

fn evenly_spaced(extent: f64, count: usize) -> Vec<f64> {
    if count < 2 {
        return vec![0.0; count];
    }
    let step = extent / (count - 1) as f64;
    (0..count)
        .map(|i| if i + 1 == count { extent } else { i as f64 * step })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FoundationParams {
    pub show: bool,
    pub slab_thickness: f64,
    /// Margin added around the building footprint on every side.
    pub slab_extension: f64,
    pub rebar_thickness: f64,
    pub rebar_rows: usize,
    pub rebar_spacing: f64,
    pub gravel_thickness: f64,
    pub sand_thickness: f64,
}

impl Default for FoundationParams {
    fn default() -> Self {
        Self {
            show: true,
            slab_thickness: 0.15,
            slab_extension: 0.5,
            rebar_thickness: 0.012,
            rebar_rows: 2,
            rebar_spacing: 0.3,
            gravel_thickness: 0.1,
            sand_thickness: 0.05,
        }
    }
}

impl FoundationParams {
    /// Horizontal extent (x, z) of every foundation layer for a building of the given size.
    pub fn footprint(&self, length: f64, width: f64) -> (f64, f64) {
        (
            length + 2.0 * self.slab_extension,
            width + 2.0 * self.slab_extension,
        )
    }
}

/// Display-only weld markers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeldingParams {
    pub show: bool,
    pub size: f64,
}

impl Default for WeldingParams {
    fn default() -> Self {
        Self {
            show: false,
            size: 0.06,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BuildInput {
    pub frame: FrameParams,
    pub foundation: FoundationParams,
    pub welding: WeldingParams,
}
