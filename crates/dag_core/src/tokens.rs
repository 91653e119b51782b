//! Define the placeholder token vocabulary used by every `dag` template.
//!
//! A placeholder is written `$(TOKEN)`: the [`ESCAPE`] byte, an [`OPEN`] byte, exactly [`TOKEN_LEN`] bytes of token
//! name and a [`CLOSE`] byte. Only the spellings in [`TOKENS`] are recognized; anything else is passed through by the
//! renderer as literal text.
//!
//! ## Examples
//! ```rust
//! use dag_core::tokens::{self, TokenId};
//!
//! assert_eq!(tokens::from_bytes(b"VALUE"), Some(TokenId::Value));
//! assert_eq!(tokens::as_str(TokenId::Guard), "GUARD");
//! assert_eq!(tokens::from_bytes(b"OTHER"), None);
//! ```

/// Byte that introduces a placeholder.
pub const ESCAPE: u8 = b'$';

/// Byte that must immediately follow [`ESCAPE`].
pub const OPEN: u8 = b'(';

/// Byte that terminates a placeholder, exactly [`TOKEN_LEN`] bytes after [`OPEN`].
pub const CLOSE: u8 = b')';

/// Every token name is exactly this many bytes long.
pub const TOKEN_LEN: usize = 5;

/// Stable identifier for every placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenId {
    /// Element type name, as supplied by the caller (`int`, `struct point`).
    Value,
    /// Generated struct name (`Ints`).
    Array,
    /// Include-guard stem (`INTS`).
    Guard,
    /// Base identifier used as function prefix and receiver name (`ints`).
    Ident,
}

/// Metadata for one placeholder token.
#[derive(Debug, Clone, Copy)]
pub struct TokenInfo {
    pub id: TokenId,
    /// Spelling between the brackets; always [`TOKEN_LEN`] bytes.
    pub canonical: &'static str,
}

/// Registry of all recognized tokens.
pub const TOKENS: &[TokenInfo] = &[
    TokenInfo {
        id: TokenId::Value,
        canonical: "VALUE",
    },
    TokenInfo {
        id: TokenId::Array,
        canonical: "ARRAY",
    },
    TokenInfo {
        id: TokenId::Guard,
        canonical: "GUARD",
    },
    TokenInfo {
        id: TokenId::Ident,
        canonical: "IDENT",
    },
];

/// Resolve a token from the bytes between the brackets.
pub fn from_bytes(name: &[u8]) -> Option<TokenId> {
    TOKENS.iter().find(|t| t.canonical.as_bytes() == name).map(|t| t.id)
}

/// Return the canonical spelling of a token.
pub fn as_str(id: TokenId) -> &'static str {
    info_for(id).canonical
}

/// Return the registry entry of a token.
pub fn info_for(id: TokenId) -> &'static TokenInfo {
    match id {
        TokenId::Value => &TOKENS[0],
        TokenId::Array => &TOKENS[1],
        TokenId::Guard => &TOKENS[2],
        TokenId::Ident => &TOKENS[3],
    }
}
