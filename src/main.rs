use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use vectortagger::annotation::{AnnotationRecord, VectorType};
use vectortagger::draw::{FormLog, LayerStore, ShapeId, ShapeKind};
use vectortagger::input::{Direction, PointerEvent};
use vectortagger::{Config, EditorSurface, InteractionState, SurfaceOptions};

#[derive(Parser, Debug)]
#[command(name = "vectortagger")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("VECTORTAGGER_GIT_HASH"), ")"),
    about = "Replay pointer scripts against the vector annotation editor"
)]
struct Cli {
    /// JSON script with the surface, persisted annotations and events
    #[arg(value_name = "SCRIPT")]
    script: PathBuf,

    /// Config file to use instead of ~/.config/vectortagger/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the result on a single line
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Script {
    surface: ScriptSurface,
    #[serde(default)]
    annotation_type_id: Option<u32>,
    #[serde(default)]
    annotations: Vec<AnnotationRecord>,
    #[serde(default)]
    events: Vec<ScriptEvent>,
}

#[derive(Debug, Deserialize)]
struct ScriptSurface {
    width: f64,
    height: f64,
    vector_type: VectorType,
    #[serde(default)]
    node_count: usize,
    #[serde(default = "default_mutable")]
    mutable: bool,
    #[serde(default = "default_image_scale")]
    image_scale: f64,
}

fn default_mutable() -> bool {
    true
}

fn default_image_scale() -> f64 {
    1.0
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ScriptEvent {
    Pointer(PointerEvent),
    Command(Command),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum Command {
    Start { kind: ShapeKind, x: f64, y: f64 },
    Select(u64),
    Cancel,
    Commit,
    ResetSelection,
    MoveSelection(Direction),
    SetPoint { id: ShapeId, index: usize, x: f64, y: f64 },
    DeletePoint { id: ShapeId, index: usize },
    Clear,
}

#[derive(Debug, Serialize)]
struct Report {
    state: &'static str,
    active: Option<ShapeId>,
    shapes: Vec<ShapeReport>,
    committed: Vec<ShapeReport>,
    errors: Vec<String>,
}

#[derive(Debug, Serialize)]
struct ShapeReport {
    id: ShapeId,
    kind: ShapeKind,
    closed: bool,
    mutable: bool,
    points: Vec<(f64, f64)>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let source = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script {}", cli.script.display()))?;
    let script: Script = serde_json::from_str(&source)
        .with_context(|| format!("Failed to parse script {}", cli.script.display()))?;

    let report = replay(script, &config);

    let output = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{output}");

    Ok(())
}

fn replay(script: Script, config: &Config) -> Report {
    let surface_def = script.surface;
    let options = SurfaceOptions::new(
        surface_def.width,
        surface_def.height,
        surface_def.vector_type,
        surface_def.node_count,
    )
    .with_config(config)
    .with_mutable(surface_def.mutable)
    .with_image_scale(surface_def.image_scale);
    let mut surface = EditorSurface::new(options, LayerStore::new(), FormLog::new());

    if !script.annotations.is_empty() {
        let type_id = script
            .annotation_type_id
            .or_else(|| script.annotations.first().map(|record| record.annotation_type.id))
            .unwrap_or_default();
        surface.load_annotations(&script.annotations, type_id);
    }

    let mut committed = Vec::new();
    let mut errors = Vec::new();
    log::info!("Replaying {} event(s)", script.events.len());

    for event in script.events {
        let result = match event {
            ScriptEvent::Pointer(pointer) => {
                surface.handle_pointer(pointer);
                Ok(())
            }
            ScriptEvent::Command(command) => run_command(&mut surface, command, &mut committed),
        };
        if let Err(err) = result {
            log::warn!("Event failed: {err}");
            errors.push(err.to_string());
        }
    }

    Report {
        state: match surface.state() {
            InteractionState::Idle => "idle",
            InteractionState::Authoring => "authoring",
            InteractionState::Editing => "editing",
        },
        active: surface.active_id(),
        shapes: surface.shapes().iter().map(shape_report).collect(),
        committed,
        errors,
    }
}

fn run_command(
    surface: &mut EditorSurface<LayerStore, FormLog>,
    command: Command,
    committed: &mut Vec<ShapeReport>,
) -> Result<(), vectortagger::EditorError> {
    match command {
        Command::Start { kind, x, y } => surface.start_shape(kind, x, y),
        Command::Select(id) => surface.select_for_edit(ShapeId::Annotation(id))?,
        Command::Cancel => surface.cancel_edit(),
        Command::Commit => {
            if let Some((id, _)) = surface.commit_edit() {
                if let Some(shape) = surface.shape(id) {
                    committed.push(shape_report(shape));
                }
            }
        }
        Command::ResetSelection => surface.reset_selection(),
        Command::MoveSelection(direction) => surface.move_selection(direction),
        Command::SetPoint { id, index, x, y } => surface.set_point(id, index, x, y)?,
        Command::DeletePoint { id, index } => {
            surface.delete_point(id, index)?;
        }
        Command::Clear => surface.clear(),
    }
    Ok(())
}

fn shape_report(shape: &vectortagger::draw::Shape) -> ShapeReport {
    ShapeReport {
        id: shape.id(),
        kind: shape.kind(),
        closed: shape.is_closed(),
        mutable: shape.is_mutable(),
        points: shape.points().iter().map(|point| (point.x, point.y)).collect(),
    }
}
