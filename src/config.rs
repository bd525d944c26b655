// Constants and tunable transform parameters

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

// Tolerances
pub const TRANSFORM_TOLERANCE: f64 = 1e-9; // For comparing transformed coordinates

// Prompting
pub const MAX_ROW_ATTEMPTS: usize = 5; // Re-prompts per matrix row before giving up

// Rotation fallback when the prompted values cannot be used
pub const DEFAULT_ROTATION_DEGREES: f64 = 90.0;

// Plot bounds
pub const PLOT_PADDING_FRACTION: f64 = 0.08;
pub const PLOT_MIN_RANGE: f64 = 1.0;

/// Parameters for the transforms that the original tool hard-coded.
///
/// Defaults reproduce the fixed values (translation by `(-2, 3)`,
/// enlargement by `2` about `(1, 0)`); the binaries let each field be
/// overridden from the command line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformConfig {
    /// Translation vector
    pub translation: Vector2<f64>,
    /// Enlargement scale factor
    pub enlargement_factor: f64,
    /// Enlargement center
    pub enlargement_center: Vector2<f64>,
    /// Rotation angle used when the prompt cannot be parsed
    pub default_rotation_degrees: f64,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            translation: Vector2::new(-2.0, 3.0),
            enlargement_factor: 2.0,
            enlargement_center: Vector2::new(1.0, 0.0),
            default_rotation_degrees: DEFAULT_ROTATION_DEGREES,
        }
    }
}

impl TransformConfig {
    /// Override the translation components that were supplied
    pub fn with_translation(mut self, dx: Option<f64>, dy: Option<f64>) -> Self {
        if let Some(dx) = dx {
            self.translation.x = dx;
        }
        if let Some(dy) = dy {
            self.translation.y = dy;
        }
        self
    }

    /// Override the enlargement factor and center components that were supplied
    pub fn with_enlargement(mut self, factor: Option<f64>, cx: Option<f64>, cy: Option<f64>) -> Self {
        if let Some(factor) = factor {
            self.enlargement_factor = factor;
        }
        if let Some(cx) = cx {
            self.enlargement_center.x = cx;
        }
        if let Some(cy) = cy {
            self.enlargement_center.y = cy;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_fixed_values() {
        let config = TransformConfig::default();
        assert_eq!(config.translation, Vector2::new(-2.0, 3.0));
        assert_eq!(config.enlargement_factor, 2.0);
        assert_eq!(config.enlargement_center, Vector2::new(1.0, 0.0));
    }

    #[test]
    fn test_partial_overrides() {
        let config = TransformConfig::default()
            .with_translation(Some(5.0), None)
            .with_enlargement(None, None, Some(-1.0));

        assert_eq!(config.translation, Vector2::new(5.0, 3.0));
        assert_eq!(config.enlargement_factor, 2.0);
        assert_eq!(config.enlargement_center, Vector2::new(1.0, -1.0));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: TransformConfig = serde_json::from_str(r#"{"enlargement_factor": 3.0}"#).unwrap();
        assert_eq!(config.enlargement_factor, 3.0);
        assert_eq!(config.translation, Vector2::new(-2.0, 3.0));
    }
}
