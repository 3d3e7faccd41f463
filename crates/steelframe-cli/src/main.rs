use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use steelframe_algo::{FrameModel, GeneratorConfig};
use steelframe_core::material::DefaultTables;
use steelframe_core::params::{BuildInput, RoofType};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "steelframe")]
#[command(about = "Generate a steel-frame scene graph from structural parameters.")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a scene and print its report as JSON.
    Build {
        /// Parameter document (JSON); missing fields take their defaults.
        params: Option<PathBuf>,
        #[arg(long)]
        report: Option<PathBuf>,
        /// Debug dump of the whole scene graph.
        #[arg(long)]
        dump_scene: Option<PathBuf>,
        #[arg(long)]
        roof_type: Option<String>,
        #[arg(long)]
        no_foundation: bool,
        #[arg(long)]
        welds: bool,
        #[arg(long, default_value_t = 250_000)]
        max_primitives: usize,
    },
    /// Print the default parameter document.
    Defaults {
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build {
            params,
            report,
            dump_scene,
            roof_type,
            no_foundation,
            welds,
            max_primitives,
        } => {
            let mut input = match params.as_deref() {
                Some(path) => load_params(path)?,
                None => BuildInput::default(),
            };
            if let Some(roof_type) = roof_type {
                input.frame.roof_type = RoofType::from(roof_type);
            }
            if no_foundation {
                input.foundation.show = false;
            }
            if welds {
                input.welding.show = true;
            }
            let cfg = GeneratorConfig {
                max_primitives,
                ..GeneratorConfig::default()
            };
            build(&input, cfg, report.as_deref(), dump_scene.as_deref())
        }
        Command::Defaults { out } => {
            let json = serde_json::to_string_pretty(&BuildInput::default())
                .context("serialize default parameters")?;
            emit(out.as_deref(), &json)
        }
    }
}

fn build(
    input: &BuildInput,
    cfg: GeneratorConfig,
    report: Option<&Path>,
    dump_scene: Option<&Path>,
) -> Result<()> {
    let mut model = FrameModel::new(cfg, DefaultTables::default());
    model.rebuild(input).context("generate scene")?;

    if let Some(path) = dump_scene {
        let scene = model.scene().context("no scene after rebuild")?;
        let json = serde_json::to_string_pretty(scene).context("serialize scene")?;
        write_file(path, &json).with_context(|| format!("write scene: {path:?}"))?;
    }

    let report_data = model.report().context("no scene after rebuild")?;
    for w in &report_data.warnings {
        tracing::warn!(code = %w.code, "{}", w.message);
    }
    let json = serde_json::to_string_pretty(&report_data).context("serialize report")?;
    emit(report, &json)
}

fn load_params(path: &Path) -> Result<BuildInput> {
    ensure_input_file(path)?;
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read parameters: {path:?}"))?;
    serde_json::from_str(&text).with_context(|| format!("parse parameters: {path:?}"))
}

fn emit(path: Option<&Path>, json: &str) -> Result<()> {
    match path {
        Some(path) => write_file(path, json).with_context(|| format!("write output: {path:?}")),
        None => {
            println!("{json}");
            Ok(())
        }
    }
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    std::fs::write(path, contents)
}

fn ensure_input_file(input: &Path) -> Result<()> {
    match std::fs::metadata(input) {
        Ok(meta) => {
            if meta.is_file() {
                Ok(())
            } else {
                bail!("parameters path is not a file: {input:?}");
            }
        }
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            bail!("parameters not found: {input:?} (cwd: {cwd:?}).");
        }
        Err(err) => Err(err).with_context(|| format!("stat parameters: {input:?}")),
    }
}
