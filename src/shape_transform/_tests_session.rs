#[cfg(test)]
mod _tests_session {
    use super::super::catalog::ShapeId;
    use super::super::report::{format_point, render_json, render_text};
    use super::super::session::*;
    use super::super::shape::LabeledPoint;
    use super::super::transform::{Direction, TransformKind, Transformation};
    use crate::config::TransformConfig;
    use crate::errors::PromptError;
    use crate::prompt::Prompter;
    use nalgebra::Vector2;
    use std::io::Cursor;

    fn run(input: &str, preset: &Preset) -> (Result<TransformOutcome, PromptError>, String) {
        let mut prompter = Prompter::new(Cursor::new(input.to_string()), Vec::new());
        let outcome = run_session(&mut prompter, preset, &TransformConfig::default());
        let output = String::from_utf8(prompter.into_writer()).unwrap();
        (outcome, output)
    }

    #[test]
    fn test_rotation_session() {
        let (outcome, output) = run("2\n2\n90\nccw\n", &Preset::default());
        let outcome = outcome.unwrap();

        assert_eq!(
            outcome.transformation,
            Transformation::Rotation {
                degrees: 90.0,
                direction: Direction::CounterClockwise
            }
        );
        assert!(output.contains("4) Enlargement"));

        let text = render_text(&outcome);
        assert!(text.starts_with("Original points:\na 4,2\n"));
        assert!(text.contains("\n\nRotated points (90° CCW):\na′ -2.00,4.00\n"));
        assert!(text.ends_with("f′ -4.00,4.00"));
    }

    #[test]
    fn test_bad_degrees_fall_back_to_default() {
        let (outcome, output) = run("2\n1\nlots\nCCW\n", &Preset::default());

        assert_eq!(
            outcome.unwrap().transformation,
            Transformation::Rotation {
                degrees: 90.0,
                direction: Direction::Clockwise
            }
        );
        assert!(output.contains("Invalid input. Using default: 90 degrees CW."));
    }

    #[test]
    fn test_bad_direction_falls_back_to_default() {
        let (outcome, _) = run("2\n1\n45\nsideways\n", &Preset::default());
        assert_eq!(
            outcome.unwrap().transformation,
            Transformation::Rotation {
                degrees: 90.0,
                direction: Direction::Clockwise
            }
        );
    }

    #[test]
    fn test_invalid_menu_defaults_to_rotation() {
        let (outcome, output) = run("9\n1\n180\ncw\n", &Preset::default());

        let outcome = outcome.unwrap();
        assert_eq!(outcome.transformation.kind(), TransformKind::Rotation);
        assert_eq!(outcome.original.name, "Shape 1");
        assert!(output.contains("Invalid choice. Defaulting to Rotation."));
    }

    #[test]
    fn test_translation_session_uses_translation_table() {
        let (outcome, _) = run("1\n2\n", &Preset::default());
        let outcome = outcome.unwrap();

        assert_eq!(outcome.original.points[0].position, Vector2::new(3.0, -5.0));
        assert_eq!(outcome.result.points[0].position, Vector2::new(1.0, -2.0));

        let text = render_text(&outcome);
        assert!(text.contains("Translated points (by -2, 3):\na 1,-2\n"));
        assert!(text.ends_with("f 1,0"));
    }

    #[test]
    fn test_enlargement_session() {
        let (outcome, _) = run("4\n2\n", &Preset::default());
        let text = render_text(&outcome.unwrap());

        assert!(text.contains("Enlarged points (k=2, center=(1,0)):\nA 5.00,4.00\n"));
    }

    #[test]
    fn test_reflection_session() {
        let (outcome, _) = run("3\n2\n", &Preset::default());
        let text = render_text(&outcome.unwrap());

        assert!(text.contains("Reflected points (y -> -y):\na 4,-2\n"));
    }

    #[test]
    fn test_preset_skips_prompts() {
        let preset = Preset {
            kind: Some(TransformKind::Rotation),
            shape: Some(ShapeId::One),
            degrees: Some(180.0),
            direction: Some(Direction::CounterClockwise),
        };
        let (outcome, output) = run("", &preset);

        let outcome = outcome.unwrap();
        assert!(output.is_empty());
        assert_eq!(outcome.result.len(), 8);
        assert!(outcome.bounds.is_some());
    }

    #[test]
    fn test_end_of_input() {
        let (outcome, _) = run("2\n", &Preset::default());
        assert!(matches!(outcome, Err(PromptError::UnexpectedEof("shape choice"))));
    }

    #[test]
    fn test_format_point_normalises_negative_zero() {
        let point = LabeledPoint::new("a", Vector2::new(-0.0, 2.5));
        assert_eq!(format_point(&point, None), "a 0,2.5");
        assert_eq!(format_point(&point, Some(2)), "a 0.00,2.50");
    }

    #[test]
    fn test_json_report() {
        let (outcome, _) = run("4\n1\n", &Preset::default());
        let json: serde_json::Value =
            serde_json::from_str(&render_json(&outcome.unwrap()).unwrap()).unwrap();

        assert_eq!(json["transformation"]["kind"], "enlargement");
        assert_eq!(json["transformation"]["factor"], 2.0);
        assert_eq!(json["original"]["name"], "Shape 1");
        assert_eq!(json["result"]["points"][0]["label"], "A");
        assert_eq!(json["result"]["points"][0]["position"][0], 3.0);
    }
}
