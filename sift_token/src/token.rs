//! Token kinds and tokens.
//!
//! `TokenKind` is the closed set of lexical classes the scanner emits; its
//! `name` table is the fixed vocabulary used in diagnostics and dumps.
//! `Token` pairs a kind with its start position and decoded text.

use std::borrow::Cow;
use std::fmt;

use crate::Position;

/// Lexical class of a token.
///
/// Malformed input and exhaustion are reported in band: `Illegal` and
/// `EndOfInput` are ordinary kinds, not out-of-band errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum TokenKind {
    /// Malformed input. The token text is a diagnostic sentence, except for
    /// an unrecognized character, where it is that single byte.
    Illegal,
    /// Input exhausted. The only well-formed terminal token; text is empty.
    EndOfInput,
    /// Dot-stuffed `text:` block, decoded.
    MultilineText,
    /// `[A-Za-z_][A-Za-z0-9_]*`
    Identifier,
    /// `[0-9]+` with an optional magnitude suffix from `kKmMgG`.
    Number,
    /// Colon-prefixed identifier, e.g. `:contains`.
    Tag,
    /// `"`-delimited string, escapes collapsed.
    QuotedString,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// `[`
    LeftBracket,
    /// `]`
    RightBracket,
    /// `{`
    LeftBrace,
    /// `}`
    RightBrace,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
}

impl TokenKind {
    /// Display name, as it appears in diagnostics and token dumps.
    ///
    /// The `multline` spelling is historical output compatibility; do not
    /// correct it.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "<illegal>",
            TokenKind::EndOfInput => "EOF",
            TokenKind::MultilineText => "multline",
            TokenKind::Identifier => "identifier",
            TokenKind::Number => "number",
            TokenKind::Tag => "tag",
            TokenKind::QuotedString => "string",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One scanned token: where it starts, what class it is, and its text.
///
/// `text` is the decoded payload, not necessarily the raw lexeme: quoted
/// strings have escapes collapsed, multiline blocks are dot-unstuffed, and
/// `Illegal` carries a diagnostic sentence (or the offending byte). The text
/// borrows the source buffer whenever decoding is the identity and owns a
/// copy only when bytes were actually rewritten.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'src> {
    pub pos: Position,
    pub kind: TokenKind,
    pub text: Cow<'src, [u8]>,
}

impl<'src> Token<'src> {
    /// Create a token.
    #[inline]
    pub fn new(pos: Position, kind: TokenKind, text: Cow<'src, [u8]>) -> Self {
        Token { pos, kind, text }
    }
}

impl fmt::Display for Token<'_> {
    /// Renders `line:column name "text"`, the historical dump line format,
    /// with non-printable and non-ASCII bytes escaped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"{}\"", self.pos, self.kind, self.text.escape_ascii())
    }
}

// Size assertions to prevent accidental regressions
mod size_asserts {
    use super::TokenKind;
    crate::static_assert_size!(TokenKind, 1);
}
