
//! Matrix arithmetic and 2D shape transformation library
//!
//! This library backs two small console tools: a matrix calculator that
//! works out which binary operations two matrices support, and a shape
//! transformer that moves a fixed set of polygons around the plane.

pub mod config;
pub mod errors;
pub mod matrix_ops;
pub mod prompt;
pub mod shape_transform;

pub use errors::{MatrixError, PromptError, TransformError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
