// Console presentation of calculator results

use serde::Serialize;

use crate::errors::MatrixError;
use crate::matrix_ops::matrix::{Matrix, MatrixShape};
use crate::matrix_ops::operations::Operation;
use crate::matrix_ops::session::MatrixOutcome;

/// Render an entry the way Python prints a float
///
/// Positional for exponents in `-4..16` (`58.0`, `0.0001`), otherwise
/// scientific with a signed, two-digit exponent (`1e+20`, `1.5e-07`).
pub fn format_entry(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() || value == 0.0 {
        return format!("{:?}", value);
    }

    let scientific = format!("{:e}", value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return format!("{:?}", value);
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return format!("{:?}", value);
    };

    if (-4..16).contains(&exponent) {
        format!("{:?}", value)
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    }
}

/// One line per row, entries separated by single spaces
pub fn format_rows(matrix: &Matrix) -> Vec<String> {
    matrix
        .to_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|value| format_entry(*value))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Text printed for an outcome, without trailing newline
pub fn render_text(outcome: &MatrixOutcome) -> String {
    match outcome {
        MatrixOutcome::Computed { result, .. } => {
            let mut lines = vec!["Result:".to_string()];
            lines.extend(format_rows(result));
            lines.join("\n")
        }
        MatrixOutcome::NoValidOperations => format!("{}.", MatrixError::NoValidOperations),
        MatrixOutcome::InvalidChoice(_) => "Invalid choice.".to_string(),
    }
}

#[derive(Serialize)]
struct MatrixJson {
    shape: MatrixShape,
    rows: Vec<Vec<f64>>,
}

impl From<&Matrix> for MatrixJson {
    fn from(matrix: &Matrix) -> Self {
        Self {
            shape: matrix.shape(),
            rows: matrix.to_rows(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum OutcomeJson {
    Computed {
        operation: Operation,
        left: MatrixJson,
        right: MatrixJson,
        result: MatrixJson,
    },
    NoValidOperations,
    InvalidChoice {
        choice: String,
    },
}

/// JSON document describing an outcome
pub fn render_json(outcome: &MatrixOutcome) -> serde_json::Result<String> {
    let doc = match outcome {
        MatrixOutcome::Computed {
            operation,
            left,
            right,
            result,
        } => OutcomeJson::Computed {
            operation: *operation,
            left: left.into(),
            right: right.into(),
            result: result.into(),
        },
        MatrixOutcome::NoValidOperations => OutcomeJson::NoValidOperations,
        MatrixOutcome::InvalidChoice(choice) => OutcomeJson::InvalidChoice {
            choice: choice.clone(),
        },
    };
    serde_json::to_string_pretty(&doc)
}
