use std::io::{self, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::{debug, info};
use matrix_shapes::config::TransformConfig;
use matrix_shapes::prompt::Prompter;
use matrix_shapes::shape_transform::{report, run_session, Direction, Preset, ShapeId, TransformKind};

#[derive(Parser)]
#[command(name = "shape-transform")]
#[command(about = "Translate, rotate, reflect or enlarge a fixed 2D shape")]
#[command(version)]
struct Cli {
    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Print the outcome as JSON instead of point tables
    #[arg(long)]
    json: bool,

    /// Transformation to apply (asked interactively when omitted)
    #[arg(short, long, value_enum)]
    transform: Option<KindArg>,

    /// Shape to transform (asked interactively when omitted)
    #[arg(short, long, value_enum)]
    shape: Option<ShapeArg>,

    /// Rotation angle in degrees
    #[arg(long, allow_negative_numbers = true)]
    degrees: Option<f64>,

    /// Rotation direction
    #[arg(long, value_enum, ignore_case = true)]
    direction: Option<DirectionArg>,

    /// Translation x component
    #[arg(long, allow_negative_numbers = true)]
    offset_x: Option<f64>,

    /// Translation y component
    #[arg(long, allow_negative_numbers = true)]
    offset_y: Option<f64>,

    /// Enlargement scale factor
    #[arg(long, allow_negative_numbers = true)]
    factor: Option<f64>,

    /// Enlargement center x
    #[arg(long, allow_negative_numbers = true)]
    center_x: Option<f64>,

    /// Enlargement center y
    #[arg(long, allow_negative_numbers = true)]
    center_y: Option<f64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum KindArg {
    Translate,
    Rotate,
    Reflect,
    Enlarge,
}

impl From<KindArg> for TransformKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Translate => TransformKind::Translation,
            KindArg::Rotate => TransformKind::Rotation,
            KindArg::Reflect => TransformKind::Reflection,
            KindArg::Enlarge => TransformKind::Enlargement,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ShapeArg {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

impl From<ShapeArg> for ShapeId {
    fn from(arg: ShapeArg) -> Self {
        match arg {
            ShapeArg::One => ShapeId::One,
            ShapeArg::Two => ShapeId::Two,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum DirectionArg {
    Cw,
    Ccw,
}

impl From<DirectionArg> for Direction {
    fn from(arg: DirectionArg) -> Self {
        match arg {
            DirectionArg::Cw => Direction::Clockwise,
            DirectionArg::Ccw => Direction::CounterClockwise,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    info!("Starting shape-transform v{}", matrix_shapes::VERSION);

    let config = TransformConfig::default()
        .with_translation(cli.offset_x, cli.offset_y)
        .with_enlargement(cli.factor, cli.center_x, cli.center_y);
    debug!("Transform configuration: {:?}", config);

    let preset = Preset {
        kind: cli.transform.map(Into::into),
        shape: cli.shape.map(Into::into),
        degrees: cli.degrees,
        direction: cli.direction.map(Into::into),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut prompter = Prompter::new(stdin.lock(), stdout.lock());

    let outcome = run_session(&mut prompter, &preset, &config).context("Shape transform failed")?;

    let rendered = if cli.json {
        report::render_json(&outcome).context("Failed to serialise result")?
    } else {
        format!("\n{}", report::render_text(&outcome))
    };
    writeln!(prompter.writer(), "{}", rendered)?;

    Ok(())
}
