// Interactive matrix calculator flow: two shapes, two matrices, one operation

use std::io::{BufRead, Write};

use log::{debug, info, warn};

use crate::config::MAX_ROW_ATTEMPTS;
use crate::errors::{MatrixError, PromptError};
use crate::matrix_ops::matrix::{parse_row, Matrix, MatrixShape};
use crate::matrix_ops::operations::{apply, valid_operations, Operation};
use crate::prompt::Prompter;

/// How a calculator run ended
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixOutcome {
    /// An operation was chosen and applied
    Computed {
        operation: Operation,
        left: Matrix,
        right: Matrix,
        result: Matrix,
    },
    /// The shapes allowed nothing; no menu was shown
    NoValidOperations,
    /// The typed menu key was not offered
    InvalidChoice(String),
}

/// Prompt for a `RxC` size. A malformed size aborts the run.
pub fn read_shape<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    prompt: &str,
) -> Result<MatrixShape, PromptError> {
    let answer = prompter.ask(prompt, "matrix size")?;
    Ok(answer.parse::<MatrixShape>()?)
}

/// Prompt row by row for a matrix of `shape`
///
/// A bad row is re-requested up to `MAX_ROW_ATTEMPTS` times before the last
/// row error is returned.
pub fn read_matrix<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    shape: MatrixShape,
) -> Result<Matrix, PromptError> {
    prompter.say(&format!(
        "Enter values for a {} matrix (row-wise, space-separated):",
        shape
    ))?;

    // Grown as rows arrive, never reserved from the declared size
    let mut rows = Vec::new();
    for i in 0..shape.rows {
        rows.push(read_row(prompter, i, shape.cols)?);
    }

    Ok(Matrix::from_rows(&rows)?)
}

fn read_row<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    index: usize,
    cols: usize,
) -> Result<Vec<f64>, PromptError> {
    let mut attempt = 1;
    loop {
        let line = prompter.ask(&format!("Row {}: ", index + 1), "matrix row")?;
        match parse_row(&line, cols) {
            Ok(row) => return Ok(row),
            Err(err) if err.is_recoverable() && attempt < MAX_ROW_ATTEMPTS => {
                debug!("Row {} attempt {} rejected: {}", index + 1, attempt, err);
                prompter.say(&format!("Invalid input. Expected {} values.", cols))?;
                attempt += 1;
            }
            Err(err) => {
                warn!("Giving up on row {} after {} attempts", index + 1, attempt);
                return Err(err.into());
            }
        }
    }
}

/// Run the whole calculator dialogue
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
) -> Result<MatrixOutcome, PromptError> {
    let first_shape = read_shape(prompter, "Enter size of first matrix (e.g. 2x3): ")?;
    let left = read_matrix(prompter, first_shape)?;

    let second_shape = read_shape(prompter, "Enter size of second matrix (e.g. 3x2): ")?;
    let right = read_matrix(prompter, second_shape)?;

    let valid = valid_operations(first_shape, second_shape);
    if valid.is_empty() {
        info!("No operation fits {} and {}", first_shape, second_shape);
        return Ok(MatrixOutcome::NoValidOperations);
    }

    prompter.say("Choose operation:")?;
    for (key, op) in valid.menu() {
        prompter.say(&format!("{} ({})", op, key))?;
    }

    let choice = prompter.ask("Enter choice number: ", "operation choice")?;
    let operation = match valid.select(&choice) {
        Ok(op) => op,
        Err(MatrixError::InvalidChoice(choice)) => return Ok(MatrixOutcome::InvalidChoice(choice)),
        Err(err) => return Err(err.into()),
    };

    info!("Applying {} to {} and {}", operation, first_shape, second_shape);
    let result = apply(operation, &left, &right)?;

    Ok(MatrixOutcome::Computed {
        operation,
        left,
        right,
        result,
    })
}
