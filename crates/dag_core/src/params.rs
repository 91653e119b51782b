//! Describe C function parameters for signature rendering.
//!
//! A parameter list is an ordered slice of [`SigParam`] entries. The receiver (`Array *ident`) is implicit and never
//! listed. A [`SigParam::Const`] entry carries no name of its own: it qualifies the typed entry that follows it, so
//! `[Const, Typed("$(VALUE)", "*src")]` renders as `const int *src`.
//!
//! ## Notes
//! - A `Const` entry must be immediately followed by a `Typed` entry. Lists that break this rule are malformed and
//!   the renderer treats them as a programming error.

/// One entry of a parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigParam {
    /// Qualifies the next entry's type with `const`.
    Const,
    /// A `(type, name)` pair. The type may contain placeholders; pointer stars live on the name (`*dst`).
    Typed { ty: &'static str, name: &'static str },
}

impl SigParam {
    /// Shorthand for a typed entry.
    pub const fn typed(ty: &'static str, name: &'static str) -> Self {
        SigParam::Typed { ty, name }
    }
}

/// Check that every `Const` entry is immediately followed by a typed entry.
pub fn is_well_formed(params: &[SigParam]) -> bool {
    params
        .iter()
        .enumerate()
        .all(|(i, p)| *p != SigParam::Const || matches!(params.get(i + 1), Some(SigParam::Typed { .. })))
}
