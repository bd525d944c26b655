// Shape transform module: Contains the point-set transforms of the shape tool
// This module applies translation, rotation, reflection and enlargement to fixed 2D polygons

// ======================== MODULE DECLARATIONS ========================
pub mod bounds;
pub mod catalog;
pub mod report;
pub mod session;
pub mod shape;
pub mod transform;

mod _tests_session;

// ======================== CORE DATA ========================
pub use shape::{
    LabeledPoint,    // struct - vertex label plus Vector2<f64> position
    Shape,           // struct - named, ordered list of labelled vertices
    TransformResult, // struct - transformed vertices in input order
};
// TransformResult impl methods:
//   positions(&self) -> impl Iterator<Item = Vector2<f64>>      - transformed coordinates
//   labels(&self) -> impl Iterator<Item = &str>                 - vertex labels
//   with_label_suffix(self, suffix: &str) -> Self               - decorates labels (rotation uses ′)
//   plot_bounds(&self, original: &Shape) -> Option<BoundingBox2D> - padded frame for both point sets

pub use bounds::BoundingBox2D; // struct - 2D axis-aligned bounding box

// ======================== TRANSFORMS ========================
pub use transform::{
    Direction,      // enum - Clockwise / CounterClockwise, parsed from "CW" / "CCW"
    TransformKind,  // enum - Translation, Rotation, Reflection, Enlargement
    Transformation, // enum - a kind with its parameters
    enlarge,        // fn(shape, factor: f64, center: Vector2<f64>) -> TransformResult
    reflect,        // fn(shape) -> TransformResult - across the x-axis
    rotate,         // fn(shape, degrees: f64, direction: Direction) -> TransformResult - about the origin
    translate,      // fn(shape, offset: Vector2<f64>) -> TransformResult
};
// Transformation impl methods:
//   from_config(kind, config: &TransformConfig) -> Self         - fixed parameters from configuration
//   parse_rotation(degrees: &str, direction: &str) -> Result<Self, TransformError> - user-entered rotation
//   apply(&self, shape: &Shape) -> TransformResult              - dispatches to the transform functions
//   describe(&self) -> String                                    - legend text

// ======================== SHAPE CATALOG ========================
pub use catalog::{
    ShapeCatalog, // struct - coordinate table lookup per (TransformKind, ShapeId)
    ShapeId,      // enum - One, Two
};

// ======================== INTERACTIVE SESSION ========================
pub use session::{
    Preset,           // struct - answers given on the command line
    TransformOutcome, // struct - original, transformation, result and plot bounds
    run_session,      // fn(prompter, preset, config) -> Result<TransformOutcome, PromptError>
};
