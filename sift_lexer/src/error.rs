//! Scan failure catalog.
//!
//! Every way a scan can fail maps to one fixed diagnostic sentence, carried
//! as the text of an `Illegal` token. The wording is a compatibility
//! surface: hash comments knowingly report the bracketed-comment NUL
//! sentence, and none of the messages may be reworded.

use std::fmt;

/// What went wrong during a scan.
///
/// The scanner converts a `ScanError` into an `Illegal` token positioned at
/// the byte where the rule was violated. The unrecognized-character case is
/// not part of this catalog: its `Illegal` token carries the offending byte
/// itself rather than a sentence.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ScanError {
    // === Line discipline ===
    /// A `\r` not followed by `\n`, outside literal-preserving contexts.
    BareCarriageReturn,

    // === Embedded NUL bytes ===
    /// NUL inside a bracketed comment. Also reported for hash comments,
    /// which reuse the bracketed-comment wording.
    NulInComment,
    /// NUL inside a quoted string.
    NulInString,
    /// NUL inside a multiline text body.
    NulInMultiline,

    // === Premature end of input ===
    /// Input ended inside a bracketed comment.
    EofInComment,
    /// Input ended inside a quoted string.
    EofInString,
    /// Input ended inside a multiline text block.
    EofInMultiline,

    // === Token structure ===
    /// `/` not followed by the `*` that would open a bracketed comment.
    MissingCommentStar,
    /// `:` not followed by an identifier-start byte.
    InvalidTagStart,
}

impl ScanError {
    /// The diagnostic sentence, exactly as it appears in `Illegal` tokens.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            ScanError::BareCarriageReturn => "expected \\n after \\r",
            ScanError::NulInComment => "invalid NUL character encountered in bracketed comment",
            ScanError::NulInString => "invalid NUL character encountered in string",
            ScanError::NulInMultiline => "invalid NUL character encountered in multiline string",
            ScanError::EofInComment => "premature EOF trying to read bracketed comment",
            ScanError::EofInString => "premature EOF trying to read string",
            ScanError::EofInMultiline => "premature EOF trying to read multiline string",
            ScanError::MissingCommentStar => "expecting '*' to begin bracketed comment",
            ScanError::InvalidTagStart => "expected identifier character ([a-zA-Z_])",
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ScanError {}
