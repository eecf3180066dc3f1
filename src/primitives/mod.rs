//! Core compute primitives.
//!
//! Feature matrices for the classification layer.

mod matrix;

pub use matrix::Matrix;
