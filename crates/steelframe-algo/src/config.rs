/// Fixed generator tunables that are not part of the editable parameter set.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Inset of the flat and gable roof ends from the overhang tips.
    pub roof_edge_inset: f64,
    /// Roll applied to every upper-chord segment to bevel the flange (radians).
    pub upper_chord_bevel: f64,
    pub arch_segments: usize,
    /// Arch rise used when an arched roof is requested without `arch_height`.
    pub default_arch_height: f64,
    /// Concrete cover between the slab faces and the outer rebar rows.
    pub rebar_cover: f64,
    /// Share of the rebar spacing each grid segment occupies; the rest is a visible gap.
    pub rebar_fill_ratio: f64,
    pub ground_marker_thickness: f64,
    pub max_primitives: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            roof_edge_inset: 0.2,
            upper_chord_bevel: 0.05,
            arch_segments: 16,
            default_arch_height: 1.5,
            rebar_cover: 0.04,
            rebar_fill_ratio: 0.9,
            ground_marker_thickness: 0.02,
            max_primitives: 250_000,
        }
    }
}
