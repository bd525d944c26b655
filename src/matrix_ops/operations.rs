use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::MatrixError;
use crate::matrix_ops::matrix::{Matrix, MatrixShape};

/// Binary operations the calculator offers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// All operations in menu order
    pub const ALL: [Operation; 3] = [Operation::Add, Operation::Subtract, Operation::Multiply];

    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
        }
    }

    /// Whether two operand shapes allow this operation
    pub fn accepts(&self, a: MatrixShape, b: MatrixShape) -> bool {
        match self {
            Operation::Add | Operation::Subtract => a == b,
            Operation::Multiply => a.cols == b.rows,
        }
    }

    pub fn apply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
        apply(*self, a, b)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The set of operations two matrix shapes support
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidOperations {
    elementwise: bool,
    multiply: bool,
}

impl ValidOperations {
    pub fn contains(&self, op: Operation) -> bool {
        match op {
            Operation::Add | Operation::Subtract => self.elementwise,
            Operation::Multiply => self.multiply,
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.elementwise && !self.multiply
    }

    pub fn iter(&self) -> impl Iterator<Item = Operation> + '_ {
        Operation::ALL.into_iter().filter(move |op| self.contains(*op))
    }

    /// Numbered menu entries; keys are consecutive from "1" over the valid operations only
    pub fn menu(&self) -> Vec<(String, Operation)> {
        self.iter()
            .enumerate()
            .map(|(i, op)| ((i + 1).to_string(), op))
            .collect()
    }

    /// Resolve a menu key typed by the user
    pub fn select(&self, choice: &str) -> Result<Operation, MatrixError> {
        let choice = choice.trim();
        self.menu()
            .into_iter()
            .find(|(key, _)| key == choice)
            .map(|(_, op)| op)
            .ok_or_else(|| MatrixError::InvalidChoice(choice.to_string()))
    }
}

/// Work out which operations are dimensionally valid for `a` (left) and `b` (right)
pub fn valid_operations(a: MatrixShape, b: MatrixShape) -> ValidOperations {
    let valid = ValidOperations {
        elementwise: Operation::Add.accepts(a, b),
        multiply: Operation::Multiply.accepts(a, b),
    };
    debug!("Valid operations for {} and {}: {:?}", a, b, valid);
    valid
}

/// Apply `op` to `a` and `b`
///
/// # Errors
/// `ShapeMismatch` when the shapes do not allow the operation. Callers that
/// gate through [`valid_operations`] never see it.
pub fn apply(op: Operation, a: &Matrix, b: &Matrix) -> Result<Matrix, MatrixError> {
    let (left, right) = (a.shape(), b.shape());
    if !op.accepts(left, right) {
        return Err(MatrixError::ShapeMismatch { left, right });
    }

    let (a, b) = (a.as_dmatrix(), b.as_dmatrix());
    let result = match op {
        Operation::Add => a + b,
        Operation::Subtract => a - b,
        Operation::Multiply => a * b,
    };

    debug!("{} {} and {} -> {}x{}", op, left, right, result.nrows(), result.ncols());
    Ok(Matrix::from_dmatrix(result))
}
