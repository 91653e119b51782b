//! Define error types for header generation.
//!
//! Generation itself cannot fail once the inputs are accepted; these errors are raised up front, when the
//! [`super::ArrayGenerator`] is built.

use miette::Diagnostic;
use thiserror::Error;

/// Rejected generator input.
#[derive(Debug, Error, Diagnostic)]
pub enum GenerateError {
    #[error("{what} must not be empty")]
    #[diagnostic(code(dag::empty_name), help("both the array name and the value type are required"))]
    EmptyName { what: &'static str },

    #[error("minimum capacity must be greater than zero")]
    #[diagnostic(
        code(dag::zero_capacity),
        help("the growth chunk is added to the capacity on every reallocation; use at least 1")
    )]
    ZeroCapacity,

    #[error("include path must not be empty")]
    #[diagnostic(code(dag::empty_include))]
    EmptyInclude,
}
