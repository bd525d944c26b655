use nalgebra::Vector2;
use serde::Serialize;

use crate::shape_transform::bounds::BoundingBox2D;

/// A point tagged with its vertex label
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledPoint {
    pub label: String,
    pub position: Vector2<f64>,
}

impl LabeledPoint {
    pub fn new(label: impl Into<String>, position: Vector2<f64>) -> Self {
        Self {
            label: label.into(),
            position,
        }
    }
}

/// A named polygon given as an ordered list of labelled vertices
///
/// The last vertex implicitly connects back to the first; that closing edge
/// only matters to whoever draws the shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    pub name: String,
    pub points: Vec<LabeledPoint>,
}

impl Shape {
    pub fn new(name: impl Into<String>, points: Vec<LabeledPoint>) -> Self {
        Self {
            name: name.into(),
            points,
        }
    }

    /// Pair up labels and coordinates positionally
    pub fn from_table(name: impl Into<String>, labels: &[&str], coords: &[(f64, f64)]) -> Self {
        debug_assert_eq!(labels.len(), coords.len(), "every vertex needs a label");
        let points = labels
            .iter()
            .zip(coords)
            .map(|(label, &(x, y))| LabeledPoint::new(*label, Vector2::new(x, y)))
            .collect();
        Self::new(name, points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.points.iter().map(|p| p.position)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.label.as_str())
    }

    /// Map every vertex through `f`, keeping labels and order
    pub(crate) fn map_positions<F>(&self, f: F) -> Vec<LabeledPoint>
    where
        F: Fn(Vector2<f64>) -> Vector2<f64>,
    {
        self.points
            .iter()
            .map(|p| LabeledPoint::new(p.label.clone(), f(p.position)))
            .collect()
    }
}

/// The image of a shape under one transform
///
/// Same length and label order as the input shape. Always a fresh allocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformResult {
    pub points: Vec<LabeledPoint>,
}

impl TransformResult {
    pub fn new(points: Vec<LabeledPoint>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn positions(&self) -> impl Iterator<Item = Vector2<f64>> + '_ {
        self.points.iter().map(|p| p.position)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.points.iter().map(|p| p.label.as_str())
    }

    /// Decorate every label with a suffix (rotation results use a prime mark)
    pub fn with_label_suffix(mut self, suffix: &str) -> Self {
        for point in &mut self.points {
            point.label.push_str(suffix);
        }
        self
    }

    /// Padded box that frames both the original and the transformed vertices
    ///
    /// Returns `None` only when both point sets are empty.
    pub fn plot_bounds(&self, original: &Shape) -> Option<BoundingBox2D> {
        BoundingBox2D::from_points(original.positions().chain(self.positions()))
            .map(|bbox| bbox.padded_for_plot())
    }
}
