// Fixed polygons the transformer works on
// Each transform kind draws the same named shape from its own coordinate table

use serde::{Deserialize, Serialize};

use crate::shape_transform::shape::Shape;
use crate::shape_transform::transform::TransformKind;

const LOWER_8: [&str; 8] = ["a", "b", "c", "d", "e", "f", "g", "h"];
const LOWER_6: [&str; 6] = ["a", "b", "c", "d", "e", "f"];
const UPPER_8: [&str; 8] = ["A", "B", "C", "D", "E", "F", "G", "H"];
const UPPER_6: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

// Rotation and reflection
const SHAPE_1: [(f64, f64); 8] = [
    (6.0, 10.0),
    (6.0, 8.0),
    (8.0, 8.0),
    (8.0, 2.0),
    (10.0, 2.0),
    (10.0, 8.0),
    (12.0, 8.0),
    (12.0, 10.0),
];
const SHAPE_2: [(f64, f64); 6] = [(4.0, 2.0), (6.0, 2.0), (6.0, 6.0), (2.0, 6.0), (2.0, 4.0), (4.0, 4.0)];

// Translation
const SHAPE_1_TRANSLATION: [(f64, f64); 8] = [
    (1.0, -1.0),
    (1.0, -3.0),
    (3.0, -3.0),
    (3.0, -9.0),
    (5.0, -9.0),
    (5.0, -3.0),
    (7.0, -3.0),
    (7.0, -1.0),
];
const SHAPE_2_TRANSLATION: [(f64, f64); 6] = [
    (3.0, -5.0),
    (5.0, -5.0),
    (5.0, -1.0),
    (1.0, -1.0),
    (1.0, -3.0),
    (3.0, -3.0),
];

// Enlargement
const SHAPE_1_ENLARGEMENT: [(f64, f64); 8] = [
    (2.0, 10.0),
    (2.0, 8.0),
    (4.0, 8.0),
    (4.0, 2.0),
    (6.0, 2.0),
    (6.0, 8.0),
    (8.0, 8.0),
    (8.0, 10.0),
];
const SHAPE_2_ENLARGEMENT: [(f64, f64); 6] = [(3.0, 2.0), (5.0, 2.0), (5.0, 6.0), (1.0, 6.0), (1.0, 4.0), (3.0, 4.0)];

/// Which of the two predefined shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeId {
    One,
    Two,
}

impl ShapeId {
    /// Lenient menu resolution: `"1"` is Shape 1, anything else is Shape 2
    pub fn from_choice(choice: &str) -> Self {
        if choice.trim() == "1" {
            ShapeId::One
        } else {
            ShapeId::Two
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ShapeId::One => "Shape 1",
            ShapeId::Two => "Shape 2",
        }
    }
}

/// Lookup of the coordinate table for a shape and transform kind
pub struct ShapeCatalog;

impl ShapeCatalog {
    pub fn shape(kind: TransformKind, id: ShapeId) -> Shape {
        let name = id.name();
        match (kind, id) {
            (TransformKind::Rotation | TransformKind::Reflection, ShapeId::One) => {
                Shape::from_table(name, &LOWER_8, &SHAPE_1)
            }
            (TransformKind::Rotation | TransformKind::Reflection, ShapeId::Two) => {
                Shape::from_table(name, &LOWER_6, &SHAPE_2)
            }
            (TransformKind::Translation, ShapeId::One) => {
                Shape::from_table(name, &LOWER_8, &SHAPE_1_TRANSLATION)
            }
            (TransformKind::Translation, ShapeId::Two) => {
                Shape::from_table(name, &LOWER_6, &SHAPE_2_TRANSLATION)
            }
            (TransformKind::Enlargement, ShapeId::One) => {
                Shape::from_table(name, &UPPER_8, &SHAPE_1_ENLARGEMENT)
            }
            (TransformKind::Enlargement, ShapeId::Two) => {
                Shape::from_table(name, &UPPER_6, &SHAPE_2_ENLARGEMENT)
            }
        }
    }
}
