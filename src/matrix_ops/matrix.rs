use std::fmt;
use std::str::FromStr;

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};

use crate::errors::MatrixError;

/// Dimensions of a matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatrixShape {
    pub rows: usize,
    pub cols: usize,
}

impl MatrixShape {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl fmt::Display for MatrixShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

impl FromStr for MatrixShape {
    type Err = MatrixError;

    /// Parse `"RxC"`, ignoring case and any whitespace
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || MatrixError::InvalidFormat(s.to_string());

        let compact: String = s
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();

        let mut parts = compact.split('x');
        let (Some(rows), Some(cols), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid());
        };

        let rows: usize = rows.parse().map_err(|_| invalid())?;
        let cols: usize = cols.parse().map_err(|_| invalid())?;
        if rows == 0 || cols == 0 || rows.checked_mul(cols).is_none() {
            return Err(invalid());
        }

        Ok(Self { rows, cols })
    }
}

/// Dense row-major matrix of `f64` entries
///
/// Immutable once built. Every row has the same number of columns, which the
/// constructors check before anything reaches the backing `DMatrix`.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    data: DMatrix<f64>,
}

impl Matrix {
    /// Build a matrix from entered rows
    ///
    /// # Errors
    /// `InvalidFormat` for an empty row set, `RowLengthMismatch` when a row
    /// differs in length from the first one.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError> {
        let Some(first) = rows.first() else {
            return Err(MatrixError::InvalidFormat("empty matrix".to_string()));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(MatrixError::InvalidFormat("empty row".to_string()));
        }

        if let Some(bad) = rows.iter().find(|row| row.len() != cols) {
            return Err(MatrixError::RowLengthMismatch {
                expected: cols,
                found: bad.len(),
            });
        }

        let data = DMatrix::from_row_iterator(rows.len(), cols, rows.iter().flatten().copied());
        Ok(Self { data })
    }

    pub(crate) fn from_dmatrix(data: DMatrix<f64>) -> Self {
        Self { data }
    }

    pub fn shape(&self) -> MatrixShape {
        MatrixShape::new(self.data.nrows(), self.data.ncols())
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[(row, col)]
    }

    pub fn as_dmatrix(&self) -> &DMatrix<f64> {
        &self.data
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.data
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

/// Parse one line of whitespace-separated values for a row of `cols` entries
pub fn parse_row(line: &str, cols: usize) -> Result<Vec<f64>, MatrixError> {
    let values = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|_| MatrixError::InvalidNumber(token.to_string()))
        })
        .collect::<Result<Vec<f64>, MatrixError>>()?;

    if values.len() != cols {
        return Err(MatrixError::RowLengthMismatch {
            expected: cols,
            found: values.len(),
        });
    }

    Ok(values)
}
