// 2D bounding box module: framing of point sets for downstream plotting

use nalgebra::Vector2;
use serde::Serialize;

use crate::config::{PLOT_MIN_RANGE, PLOT_PADDING_FRACTION};

/// 2D axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoundingBox2D {
    /// Minimum corner (bottom-left in standard coordinate system)
    pub min: Vector2<f64>,
    /// Maximum corner (top-right in standard coordinate system)
    pub max: Vector2<f64>,
}

impl BoundingBox2D {
    /// Create a bounding box from a collection of points
    ///
    /// # Returns
    /// * `Some(BoundingBox2D)` if there are points to bound
    /// * `None` if the iterator is empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let mut min = first_point;
        let mut max = first_point;

        for point in points_iter {
            min.x = min.x.min(point.x);
            min.y = min.y.min(point.y);
            max.x = max.x.max(point.x);
            max.y = max.y.max(point.y);
        }

        Some(Self { min, max })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Expand the bounding box by different margins in x and y directions
    pub fn expand_by(&self, margin: Vector2<f64>) -> BoundingBox2D {
        BoundingBox2D {
            min: self.min - margin,
            max: self.max + margin,
        }
    }

    /// Pad each axis by a fixed fraction of its range
    ///
    /// Degenerate axes (a horizontal or vertical segment) are treated as
    /// having at least `PLOT_MIN_RANGE` so the padding never collapses.
    pub fn padded_for_plot(&self) -> BoundingBox2D {
        let x_range = self.width().max(PLOT_MIN_RANGE);
        let y_range = self.height().max(PLOT_MIN_RANGE);
        self.expand_by(Vector2::new(
            PLOT_PADDING_FRACTION * x_range,
            PLOT_PADDING_FRACTION * y_range,
        ))
    }
}
