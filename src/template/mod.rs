//! Template engine: flat `$(TOKEN)` substitution over fixed C templates.
//!
//! The engine has exactly two jobs:
//! - [`render_body`] copies a template, replacing every recognized placeholder with its bound value.
//! - [`signature::render_signature`] assembles a C function signature from an operation descriptor.
//!
//! There are no conditionals, loops or nested expansions. A bracketed name outside the token vocabulary is not an
//! error: the `$(` is copied through and scanning resumes inside the brackets, so a malformed placeholder degrades
//! to literal text.
//!
//! ## Examples
//!
//! ```rust
//! use dag::template::{Bindings, render_body};
//!
//! let bindings = Bindings::derive("ints", "int");
//! assert_eq!(render_body("$(ARRAY) *$(IDENT);", &bindings), "Ints *ints;");
//! assert_eq!(render_body("$(OTHER)", &bindings), "$(OTHER)");
//! ```

pub mod signature;

pub use signature::{render_declaration, render_definition, render_signature};

use dag_core::tokens::{self, CLOSE, ESCAPE, OPEN, TOKEN_LEN, TokenId};

/// The binding environment of one generation run.
///
/// All four names derive from the two user-supplied names and never change afterwards:
/// - `array` is `ident` with its first character uppercased,
/// - `guard` is `array` fully uppercased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings {
    value: String,
    array: String,
    guard: String,
    ident: String,
}

impl Bindings {
    /// Derive the binding environment from the base identifier and the element type.
    ///
    /// Case mapping is ASCII-only, matching what a C compiler accepts in identifiers.
    pub fn derive(ident: &str, value: &str) -> Self {
        let mut chars = ident.chars();
        let array = match chars.next() {
            Some(first) => {
                let mut array = String::with_capacity(ident.len());
                array.push(first.to_ascii_uppercase());
                array.push_str(chars.as_str());
                array
            }
            None => String::new(),
        };
        let guard = array.to_ascii_uppercase();

        Self {
            value: value.to_string(),
            array,
            guard,
            ident: ident.to_string(),
        }
    }

    /// Look up the value bound to a token.
    pub fn get(&self, id: TokenId) -> &str {
        match id {
            TokenId::Value => &self.value,
            TokenId::Array => &self.array,
            TokenId::Guard => &self.guard,
            TokenId::Ident => &self.ident,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn array(&self) -> &str {
        &self.array
    }

    pub fn guard(&self) -> &str {
        &self.guard
    }

    pub fn ident(&self) -> &str {
        &self.ident
    }
}

/// Render a template, substituting every recognized placeholder.
///
/// Everything that is not a recognized `$(TOKEN)` is copied byte for byte.
pub fn render_body(template: &str, bindings: &Bindings) -> String {
    let bytes = template.as_bytes();
    let mut out = String::with_capacity(template.len());
    // Start of the verbatim run not yet copied to `out`.
    let mut copied = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != ESCAPE || bytes.get(i + 1) != Some(&OPEN) {
            i += 1;
            continue;
        }

        let start = i + 2;
        match placeholder_at(bytes, start) {
            Some(id) => {
                out.push_str(&template[copied..i]);
                out.push_str(bindings.get(id));
                i = start + TOKEN_LEN + 1;
                copied = i;
            }
            // Pass `$(` through and keep scanning inside the brackets.
            None => i = start,
        }
    }

    out.push_str(&template[copied..]);
    out
}

/// Resolve the token whose name starts at `start`, if the bytes there form a complete placeholder.
///
/// The close bracket must be the first one after the open bracket and sit exactly [`TOKEN_LEN`] bytes in.
fn placeholder_at(bytes: &[u8], start: usize) -> Option<TokenId> {
    let name = bytes.get(start..start + TOKEN_LEN)?;
    if name.contains(&CLOSE) || bytes.get(start + TOKEN_LEN) != Some(&CLOSE) {
        return None;
    }
    tokens::from_bytes(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints() -> Bindings {
        Bindings::derive("ints", "int")
    }

    // ========================================
    // Bindings tests
    // ========================================

    #[test]
    fn test_derive_uppercases_first_char_only() {
        let b = Bindings::derive("myList", "double");
        assert_eq!(b.ident(), "myList");
        assert_eq!(b.array(), "MyList");
        assert_eq!(b.guard(), "MYLIST");
        assert_eq!(b.value(), "double");
    }

    #[test]
    fn test_derive_keeps_non_letter_prefix() {
        let b = Bindings::derive("_vec2", "float");
        assert_eq!(b.array(), "_vec2");
        assert_eq!(b.guard(), "_VEC2");
    }

    #[test]
    fn test_derive_empty_ident() {
        let b = Bindings::derive("", "int");
        assert_eq!(b.array(), "");
        assert_eq!(b.guard(), "");
    }

    #[test]
    fn test_get_covers_every_token() {
        let b = ints();
        for info in dag_core::tokens::TOKENS {
            assert!(!b.get(info.id).is_empty(), "{:?} unbound", info.id);
        }
        assert_eq!(b.get(TokenId::Value), "int");
        assert_eq!(b.get(TokenId::Array), "Ints");
        assert_eq!(b.get(TokenId::Guard), "INTS");
        assert_eq!(b.get(TokenId::Ident), "ints");
    }

    // ========================================
    // render_body tests
    // ========================================

    #[test]
    fn test_render_plain_text_unchanged() {
        let text = "for (size_t i = 0; i < n; ++i) {}\n";
        assert_eq!(render_body(text, &ints()), text);
    }

    #[test]
    fn test_render_every_token() {
        assert_eq!(
            render_body("$(VALUE) $(ARRAY) $(GUARD) $(IDENT)", &ints()),
            "int Ints INTS ints"
        );
    }

    #[test]
    fn test_render_adjacent_tokens() {
        assert_eq!(render_body("$(IDENT)$(IDENT)", &ints()), "intsints");
    }

    #[test]
    fn test_render_token_followed_by_text() {
        assert_eq!(render_body("$(IDENT)->count", &ints()), "ints->count");
    }

    #[test]
    fn test_render_unknown_token_passes_through() {
        assert_eq!(render_body("x $(OTHER) y", &ints()), "x $(OTHER) y");
    }

    #[test]
    fn test_render_lowercase_token_passes_through() {
        assert_eq!(render_body("$(ident)", &ints()), "$(ident)");
    }

    #[test]
    fn test_render_short_token_passes_through() {
        assert_eq!(render_body("$(VAL)", &ints()), "$(VAL)");
    }

    #[test]
    fn test_render_long_token_passes_through() {
        assert_eq!(render_body("$(VALUES)", &ints()), "$(VALUES)");
    }

    #[test]
    fn test_render_unterminated_passes_through() {
        assert_eq!(render_body("$(VALUE", &ints()), "$(VALUE");
        assert_eq!(render_body("$(", &ints()), "$(");
    }

    #[test]
    fn test_render_lone_escape() {
        assert_eq!(render_body("$", &ints()), "$");
        assert_eq!(render_body("cost: $5", &ints()), "cost: $5");
        assert_eq!(render_body("$$(IDENT)", &ints()), "$ints");
    }

    #[test]
    fn test_render_resumes_inside_failed_placeholder() {
        // The outer `$(` is not a placeholder; the inner one is.
        assert_eq!(render_body("$($(IDENT))", &ints()), "$(ints)");
    }

    #[test]
    fn test_render_non_ascii_text() {
        assert_eq!(render_body("é $(IDENT) ü", &ints()), "é ints ü");
    }

    #[test]
    fn test_render_non_ascii_binding() {
        let b = Bindings::derive("ints", "größe_t");
        assert_eq!(render_body("sizeof($(VALUE))", &b), "sizeof(größe_t)");
    }
}
