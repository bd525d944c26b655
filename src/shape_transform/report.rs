// Console presentation of original and transformed vertices

use crate::shape_transform::session::TransformOutcome;
use crate::shape_transform::shape::LabeledPoint;

// Adding 0.0 turns -0.0 into 0.0 so reflected zeros print without a sign
fn coordinate(value: f64, precision: Option<usize>) -> String {
    let value = value + 0.0;
    match precision {
        Some(digits) => format!("{:.*}", digits, value),
        None => format!("{}", value),
    }
}

/// `label x,y`
pub fn format_point(point: &LabeledPoint, precision: Option<usize>) -> String {
    format!(
        "{} {},{}",
        point.label,
        coordinate(point.position.x, precision),
        coordinate(point.position.y, precision)
    )
}

/// Both point tables, separated by a blank line
pub fn render_text(outcome: &TransformOutcome) -> String {
    let mut lines = vec!["Original points:".to_string()];
    lines.extend(outcome.original.points.iter().map(|p| format_point(p, None)));

    lines.push(String::new());
    lines.push(outcome.transformation.heading());
    let precision = outcome.transformation.precision();
    lines.extend(outcome.result.points.iter().map(|p| format_point(p, precision)));

    lines.join("\n")
}

pub fn render_json(outcome: &TransformOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}
