// Interactive shape transformer flow: kind, shape, parameters, compute

use std::io::{BufRead, Write};

use log::{info, warn};
use serde::Serialize;

use crate::config::TransformConfig;
use crate::errors::PromptError;
use crate::prompt::Prompter;
use crate::shape_transform::bounds::BoundingBox2D;
use crate::shape_transform::catalog::{ShapeCatalog, ShapeId};
use crate::shape_transform::shape::{Shape, TransformResult};
use crate::shape_transform::transform::{Direction, TransformKind, Transformation};

/// Answers supplied up front; `None` fields are asked for interactively
#[derive(Debug, Clone, Default)]
pub struct Preset {
    pub kind: Option<TransformKind>,
    pub shape: Option<ShapeId>,
    pub degrees: Option<f64>,
    pub direction: Option<Direction>,
}

/// Everything the presentation layer needs after one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformOutcome {
    pub original: Shape,
    pub transformation: Transformation,
    pub result: TransformResult,
    pub bounds: Option<BoundingBox2D>,
}

impl TransformOutcome {
    pub fn compute(original: Shape, transformation: Transformation) -> Self {
        let result = transformation.apply(&original);
        let bounds = result.plot_bounds(&original);
        Self {
            original,
            transformation,
            result,
            bounds,
        }
    }
}

fn choose_kind<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<TransformKind, PromptError> {
    prompter.say("Choose a transformation:")?;
    for (i, kind) in TransformKind::ALL.iter().enumerate() {
        prompter.say(&format!("{}) {}", i + 1, kind.name()))?;
    }

    let choice = prompter.ask("Enter 1, 2, 3, or 4: ", "transformation choice")?;
    match TransformKind::from_menu(&choice) {
        Some(kind) => Ok(kind),
        None => {
            warn!("Unrecognised transformation choice {:?}", choice);
            prompter.say("Invalid choice. Defaulting to Rotation.")?;
            Ok(TransformKind::Rotation)
        }
    }
}

fn choose_shape<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<ShapeId, PromptError> {
    prompter.say("Choose a shape:")?;
    prompter.say("1) Shape 1 (a–h, 8 points)")?;
    prompter.say("2) Shape 2 (a–f, 6 points)")?;

    let choice = prompter.ask("Enter 1 or 2: ", "shape choice")?;
    Ok(ShapeId::from_choice(&choice))
}

/// Ask for rotation angle and direction, falling back to the default
/// rotation when either answer is unusable
fn choose_rotation<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset: &Preset,
    config: &TransformConfig,
) -> Result<Transformation, PromptError> {
    let degrees = match preset.degrees {
        Some(degrees) => degrees.to_string(),
        None => prompter.ask("Enter rotation degrees (e.g., 90): ", "rotation degrees")?,
    };
    let direction = match preset.direction {
        Some(direction) => direction.to_string(),
        None => prompter.ask("Direction (CW or CCW): ", "rotation direction")?,
    };

    match Transformation::parse_rotation(&degrees, &direction) {
        Ok(rotation) => Ok(rotation),
        Err(err) => {
            warn!("Falling back to default rotation: {}", err);
            prompter.say(&format!(
                "Invalid input. Using default: {} degrees {}.",
                config.default_rotation_degrees,
                Direction::Clockwise
            ))?;
            Ok(Transformation::from_config(TransformKind::Rotation, config))
        }
    }
}

/// Run the whole transformer dialogue
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    preset: &Preset,
    config: &TransformConfig,
) -> Result<TransformOutcome, PromptError> {
    let kind = match preset.kind {
        Some(kind) => kind,
        None => choose_kind(prompter)?,
    };
    let shape_id = match preset.shape {
        Some(id) => id,
        None => choose_shape(prompter)?,
    };

    let transformation = match kind {
        TransformKind::Rotation => choose_rotation(prompter, preset, config)?,
        other => Transformation::from_config(other, config),
    };

    let original = ShapeCatalog::shape(kind, shape_id);
    info!(
        "Applying {} to {} ({} points)",
        transformation.describe(),
        original.name,
        original.len()
    );

    Ok(TransformOutcome::compute(original, transformation))
}
