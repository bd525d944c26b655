// Matrix operations module: Contains the matrix calculator core
// This module decides which binary operations two matrices support and applies them

// ======================== MODULE DECLARATIONS ========================
pub mod matrix;
pub mod operations;
pub mod report;
pub mod session;

// Test modules
mod _tests_matrix;

// ======================== MATRIX DATA ========================
pub use matrix::{
    Matrix,      // struct - immutable rows x cols grid of f64 backed by DMatrix
    MatrixShape, // struct - (rows, cols) pair parsed from "RxC"
    parse_row,   // fn(line: &str, cols: usize) -> Result<Vec<f64>, MatrixError> - parses one entered row
};
// Matrix impl methods:
//   from_rows(rows: &[Vec<f64>]) -> Result<Self, MatrixError>  - builds matrix from row-major input
//   shape(&self) -> MatrixShape                                - returns (rows, cols)
//   get(&self, row: usize, col: usize) -> f64                  - returns one entry
//   to_rows(&self) -> Vec<Vec<f64>>                            - returns row-major copy of the entries

// ======================== OPERATIONS ========================
pub use operations::{
    Operation,        // enum - Add, Subtract, Multiply
    ValidOperations,  // struct - set of operations two shapes allow
    apply,            // fn(op, a, b) -> Result<Matrix, MatrixError> - applies a binary operation
    valid_operations, // fn(a: MatrixShape, b: MatrixShape) -> ValidOperations - shape-validity gate
};
// ValidOperations impl methods:
//   contains(&self, op: Operation) -> bool                     - membership test
//   is_empty(&self) -> bool                                    - true when no operation applies
//   iter(&self) -> impl Iterator<Item = Operation>             - operations in menu order
//   menu(&self) -> Vec<(String, Operation)>                    - numbered menu entries starting at "1"
//   select(&self, choice: &str) -> Result<Operation, MatrixError> - resolves a menu key

// ======================== INTERACTIVE SESSION ========================
pub use session::{
    MatrixOutcome, // enum - Computed, NoValidOperations, InvalidChoice
    run_session,   // fn(prompter) -> Result<MatrixOutcome, PromptError> - full prompt/compute flow
};
