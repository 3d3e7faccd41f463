use steelframe_core::error::{FrameError, Result};
use steelframe_core::material::{DefaultTables, MaterialRole};
use steelframe_core::params::{BuildInput, FrameParams};
use steelframe_core::report::{summarize, SceneReport, Warning};
use steelframe_core::scene::{SceneGraph, ROOF_TAG};

pub mod beam;
pub mod config;
pub mod foundation;
pub mod frame;
pub mod roof;
pub mod truss;

pub use config::GeneratorConfig;
pub use frame::{build_scene, Build};

/// Holds the scene currently on display.
///
/// Every rebuild constructs a complete new scene before it replaces the shown
/// one, so a rejected input leaves the previous scene untouched.
pub struct FrameModel {
    cfg: GeneratorConfig,
    tables: DefaultTables,
    current: Option<Build>,
    rebuilds: u64,
}

impl FrameModel {
    pub fn new(cfg: GeneratorConfig, tables: DefaultTables) -> Self {
        Self {
            cfg,
            tables,
            current: None,
            rebuilds: 0,
        }
    }

    pub fn rebuild(&mut self, input: &BuildInput) -> Result<&SceneGraph> {
        let build = match build_scene(input, &self.cfg, &self.tables) {
            Ok(build) => build,
            Err(err) => {
                tracing::warn!(error = %err, "rebuild rejected, keeping previous scene");
                return Err(err);
            }
        };
        self.rebuilds += 1;
        let build = self.current.insert(build);
        Ok(&build.scene)
    }

    /// Swaps only the roof of the displayed scene. A change that would also
    /// move trusses or purlins (switching to or from an arch, a new arch
    /// height, a different envelope) runs a full rebuild instead, so the
    /// result always matches what `rebuild` produces for the same parameters.
    pub fn update_roof(&mut self, frame: &FrameParams) -> Result<&SceneGraph> {
        let missing = || FrameError::MissingGroup(ROOF_TAG.to_string());
        let roof = frame::build_roof(frame, &self.cfg, &self.tables)?;

        let current = self.current.as_ref().ok_or_else(missing)?;
        if !frame::same_structure(&current.input.frame, current.roof, frame, roof.shape) {
            tracing::debug!("roof change affects the frame, rebuilding");
            let input = BuildInput {
                frame: frame.clone(),
                ..current.input.clone()
            };
            return self.rebuild(&input);
        }

        let current = self.current.as_mut().ok_or_else(missing)?;
        if !current.scene.replace_tagged(ROOF_TAG, roof.group) {
            return Err(missing());
        }
        current.scene.materials.insert(MaterialRole::Roof, roof.material);
        current.warnings.retain(|w| !w.code.starts_with("roof_"));
        current.warnings.extend(roof.warnings);
        current.input.frame = frame.clone();
        current.roof = roof.shape;
        tracing::debug!("roof replaced");
        Ok(&current.scene)
    }

    pub fn scene(&self) -> Option<&SceneGraph> {
        self.current.as_ref().map(|b| &b.scene)
    }

    pub fn warnings(&self) -> &[Warning] {
        self.current
            .as_ref()
            .map(|b| b.warnings.as_slice())
            .unwrap_or_default()
    }

    pub fn report(&self) -> Option<SceneReport> {
        self.current
            .as_ref()
            .map(|b| summarize(&b.scene, &b.warnings))
    }

    /// Number of successful full rebuilds.
    pub fn rebuilds(&self) -> u64 {
        self.rebuilds
    }
}
