#![forbid(unsafe_code)]
//! dag: dynamic array generator
//!
//! Given an element type and an array name, `dag` emits a single-file C header containing a type-specialized
//! resizable array: the struct, declarations for the whole operation suite, and an implementation block compiled
//! only where `<NAME>_IMPLEMENTATION` is defined.
//!
//! This crate provides the template engine ([`template`]), the header generator ([`generator`]) and the
//! command-line surface ([`cli`]). The token vocabulary and operation catalogue live in `dag_core`.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?`. The `cli` module enforces `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **Generated code**: `assert(...)` calls in the emitted C are *string literals*; they are the contracts of the
//!   generated array, not checks performed by the generator.
//!
//! - **True invariants**: A malformed catalogue entry is a generator bug and panics with an `INVARIANT:` message.

pub mod cli;
pub mod generator;
pub mod template;
pub mod version;

pub use generator::{ArrayGenerator, GenerateError, GeneratorConfig, Include};
pub use template::{Bindings, render_body, render_signature};
