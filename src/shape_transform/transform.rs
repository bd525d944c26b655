// 2D transform module: the four point-set transforms of the shape tool
// Every function returns a fresh TransformResult and leaves the input untouched

use std::fmt;
use std::str::FromStr;

use nalgebra::{Rotation2, Vector2};
use serde::{Deserialize, Serialize};

use crate::config::TransformConfig;
use crate::errors::TransformError;
use crate::shape_transform::shape::{Shape, TransformResult};

/// Label suffix for rotated vertices
pub const ROTATION_LABEL_MARK: &str = "′";

/// Sense of a rotation; positive angles are counter-clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "CW")]
    Clockwise,
    #[serde(rename = "CCW")]
    CounterClockwise,
}

impl Direction {
    /// Signed angle in radians for a rotation of `degrees` in this direction
    pub fn signed_radians(&self, degrees: f64) -> f64 {
        let theta = degrees.to_radians();
        match self {
            Direction::Clockwise => -theta,
            Direction::CounterClockwise => theta,
        }
    }
}

impl FromStr for Direction {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "cw" => Ok(Direction::Clockwise),
            "ccw" => Ok(Direction::CounterClockwise),
            _ => Err(TransformError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Clockwise => f.write_str("CW"),
            Direction::CounterClockwise => f.write_str("CCW"),
        }
    }
}

/// The four transforms offered by the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    Translation,
    Rotation,
    Reflection,
    Enlargement,
}

impl TransformKind {
    /// All kinds in menu order (keys "1" to "4")
    pub const ALL: [TransformKind; 4] = [
        TransformKind::Translation,
        TransformKind::Rotation,
        TransformKind::Reflection,
        TransformKind::Enlargement,
    ];

    pub fn from_menu(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(TransformKind::Translation),
            "2" => Some(TransformKind::Rotation),
            "3" => Some(TransformKind::Reflection),
            "4" => Some(TransformKind::Enlargement),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Translation => "Translation",
            TransformKind::Rotation => "Rotation",
            TransformKind::Reflection => "Reflection",
            TransformKind::Enlargement => "Enlargement",
        }
    }
}

/// Translate every vertex by `offset`
pub fn translate(shape: &Shape, offset: Vector2<f64>) -> TransformResult {
    TransformResult::new(shape.map_positions(|p| p + offset))
}

/// Rotate every vertex about the origin
///
/// # Arguments
/// * `degrees` - Rotation angle in degrees
/// * `direction` - Clockwise rotations use the negated angle
pub fn rotate(shape: &Shape, degrees: f64, direction: Direction) -> TransformResult {
    let rotation = Rotation2::new(direction.signed_radians(degrees));
    TransformResult::new(shape.map_positions(|p| rotation * p))
}

/// Reflect every vertex across the x-axis
pub fn reflect(shape: &Shape) -> TransformResult {
    TransformResult::new(shape.map_positions(|p| Vector2::new(p.x, -p.y)))
}

/// Scale every vertex by `factor` about `center`
pub fn enlarge(shape: &Shape, factor: f64, center: Vector2<f64>) -> TransformResult {
    TransformResult::new(shape.map_positions(|p| center + (p - center) * factor))
}

/// One fully parameterised transform
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Transformation {
    Translation { offset: Vector2<f64> },
    Rotation { degrees: f64, direction: Direction },
    Reflection,
    Enlargement { factor: f64, center: Vector2<f64> },
}

impl Transformation {
    /// Build the transform for `kind`, taking fixed parameters from `config`
    ///
    /// Rotation has no fixed parameters; it gets the configured default
    /// angle clockwise.
    pub fn from_config(kind: TransformKind, config: &TransformConfig) -> Self {
        match kind {
            TransformKind::Translation => Transformation::Translation {
                offset: config.translation,
            },
            TransformKind::Rotation => Transformation::Rotation {
                degrees: config.default_rotation_degrees,
                direction: Direction::Clockwise,
            },
            TransformKind::Reflection => Transformation::Reflection,
            TransformKind::Enlargement => Transformation::Enlargement {
                factor: config.enlargement_factor,
                center: config.enlargement_center,
            },
        }
    }

    /// Parse user-entered rotation parameters
    pub fn parse_rotation(degrees: &str, direction: &str) -> Result<Self, TransformError> {
        let degrees: f64 = degrees
            .trim()
            .parse()
            .map_err(|_| TransformError::InvalidDegrees(degrees.to_string()))?;
        if !degrees.is_finite() {
            return Err(TransformError::InvalidDegrees(degrees.to_string()));
        }
        let direction = direction.parse()?;
        Ok(Transformation::Rotation { degrees, direction })
    }

    pub fn kind(&self) -> TransformKind {
        match self {
            Transformation::Translation { .. } => TransformKind::Translation,
            Transformation::Rotation { .. } => TransformKind::Rotation,
            Transformation::Reflection => TransformKind::Reflection,
            Transformation::Enlargement { .. } => TransformKind::Enlargement,
        }
    }

    pub fn apply(&self, shape: &Shape) -> TransformResult {
        match *self {
            Transformation::Translation { offset } => translate(shape, offset),
            Transformation::Rotation { degrees, direction } => {
                rotate(shape, degrees, direction).with_label_suffix(ROTATION_LABEL_MARK)
            }
            Transformation::Reflection => reflect(shape),
            Transformation::Enlargement { factor, center } => enlarge(shape, factor, center),
        }
    }

    /// Short legend text, e.g. `rotated 90° CW`
    pub fn describe(&self) -> String {
        match self {
            Transformation::Translation { offset } => {
                format!("translated by ({}, {})", offset.x, offset.y)
            }
            Transformation::Rotation { degrees, direction } => {
                format!("rotated {}° {}", degrees, direction)
            }
            Transformation::Reflection => "reflected over x-axis".to_string(),
            Transformation::Enlargement { factor, center } => {
                format!("enlarged k={} about ({},{})", factor, center.x, center.y)
            }
        }
    }

    /// Heading for the console table of transformed points
    pub fn heading(&self) -> String {
        match self {
            Transformation::Translation { offset } => {
                format!("Translated points (by {}, {}):", offset.x, offset.y)
            }
            Transformation::Rotation { degrees, direction } => {
                format!("Rotated points ({}° {}):", degrees, direction)
            }
            Transformation::Reflection => "Reflected points (y -> -y):".to_string(),
            Transformation::Enlargement { factor, center } => format!(
                "Enlarged points (k={}, center=({},{})):",
                factor, center.x, center.y
            ),
        }
    }

    /// Decimal places for transformed coordinates; `None` prints them as-is
    pub fn precision(&self) -> Option<usize> {
        match self {
            Transformation::Rotation { .. } | Transformation::Enlargement { .. } => Some(2),
            Transformation::Translation { .. } | Transformation::Reflection => None,
        }
    }
}
