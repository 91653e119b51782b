//! Provide the canonical vocabulary for the `dag` dynamic array generator.
//!
//! This crate is intentionally small and dependency-free. It contains the fixed data the generator renders:
//! - the placeholder token vocabulary understood by the template engine ([`tokens`]),
//! - the parameter descriptors used to build C signatures ([`params`]),
//! - the ordered operation catalogue with its C body templates ([`operations`]),
//! - the fixed header scaffolding templates (guards, growth constant, comparator) ([`scaffold`]).
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, no rendering. The `dag` crate owns rendering.
//! - Every template in this crate uses the `$(TOKEN)` placeholder syntax described in [`tokens`].

pub mod operations;
pub mod params;
pub mod scaffold;
pub mod tokens;

pub use operations::{Linkage, OperationGroup, OperationId, OperationInfo, OPERATIONS};
pub use params::SigParam;
pub use tokens::TokenId;
