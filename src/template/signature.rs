//! C signature assembly for catalogued operations.
//!
//! Every signature has the shape `<ret> <ident>_<op>(<Array> *<ident>, ...)`. Parameters come from a
//! [`SigParam`] list; a [`SigParam::Const`] entry emits `const ` and suppresses the separator of the entry after it,
//! so the pair renders as `const <type> <name>`.

use dag_core::operations::OperationInfo;
use dag_core::params::SigParam;

use super::{Bindings, render_body};

/// Render the signature of `<ident>_<operation>`.
///
/// # Panics
///
/// Panics if a `Const` entry is not immediately followed by a typed entry. Parameter lists are fixed in the
/// catalogue, so a malformed one is a bug in the catalogue rather than bad input.
pub fn render_signature(bindings: &Bindings, return_type: &str, operation: &str, params: &[SigParam]) -> String {
    let ident = bindings.ident();
    let mut out = format!(
        "{} {}_{}({} *{}",
        render_body(return_type, bindings),
        ident,
        operation,
        bindings.array(),
        ident
    );

    let mut after_const = false;
    for (i, param) in params.iter().enumerate() {
        if after_const {
            after_const = false;
        } else {
            out.push_str(", ");
        }

        match param {
            SigParam::Const => {
                assert!(
                    matches!(params.get(i + 1), Some(SigParam::Typed { .. })),
                    "INVARIANT: `const` in the parameter list of `{}` must be followed by a typed parameter",
                    operation
                );
                out.push_str("const ");
                after_const = true;
            }
            SigParam::Typed { ty, name } => {
                out.push_str(&render_body(ty, bindings));
                out.push(' ');
                out.push_str(name);
            }
        }
    }

    out.push(')');
    out
}

/// Render the header declaration of an operation, including its trailing marker line if it has one.
pub fn render_declaration(bindings: &Bindings, op: &OperationInfo) -> String {
    let mut out = render_signature(bindings, op.returns, op.name, op.params);
    out.push_str(";\n");
    if let Some(marker) = op.after_decl {
        out.push_str(&render_body(marker, bindings));
    }
    out
}

/// Render the full definition of an operation followed by a blank line.
///
/// Internal operations get `static` linkage.
pub fn render_definition(bindings: &Bindings, op: &OperationInfo) -> String {
    let returns = if op.is_public() {
        op.returns.to_string()
    } else {
        format!("static {}", op.returns)
    };

    let mut out = render_signature(bindings, &returns, op.name, op.params);
    out.push_str("\n{\n");
    out.push_str(&render_body(op.body, bindings));
    out.push_str("}\n\n");
    out
}
