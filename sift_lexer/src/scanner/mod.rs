//! Hand-written scanner producing one positioned token per call.
//!
//! [`Scanner::scan_next`] skips trivia (whitespace and both comment forms),
//! then classifies the next byte and hands off to the matching sub-scanner.
//! The sub-scanners run in a fixed priority order: trivia first, then the
//! `text:` pre-emption inside identifier scanning, then plain
//! classification, then single-byte punctuation, with anything left over
//! reported as an unrecognized character.
//!
//! # Errors are tokens
//!
//! Malformed input produces an `Illegal` token positioned at the offending
//! byte, carrying the [`ScanError`] sentence (or the byte itself for an
//! unrecognized character). Exhaustion produces `EndOfInput`. There is no
//! out-of-band error channel and no recovery pass; calling `scan_next`
//! again after an `Illegal` token is well-defined and simply continues from
//! the cursor's exact state.

use std::borrow::Cow;

use sift_token::{Position, Token, TokenKind};

use crate::cursor::Cursor;
use crate::error::ScanError;

mod multiline;
mod quoted;

/// 256-byte lookup table for identifier continuation bytes.
/// `true` for a-z, A-Z, 0-9, and underscore.
/// Table lookup replaces the multi-range `matches!` with one indexed read;
/// NUL maps to `false`, so exhaustion and genuine NULs both stop ident loops.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_IDENT_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = matches!(
            i as u8,
            b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` is a valid identifier continuation byte.
#[inline]
fn is_ident_continue(b: u8) -> bool {
    IS_IDENT_CONTINUE_TABLE[b as usize]
}

/// Returns `true` if `b` can begin an identifier (or follow a tag's colon).
#[inline]
fn is_ident_start(b: u8) -> bool {
    matches!(b, b'a'..=b'z' | b'A'..=b'Z' | b'_')
}

/// Returns `true` for a magnitude suffix byte on a number literal.
#[inline]
fn is_magnitude_suffix(b: u8) -> bool {
    matches!(b, b'k' | b'K' | b'm' | b'M' | b'g' | b'G')
}

/// One-token-at-a-time scanner over a borrowed byte slice.
///
/// Allocates only when decoding rewrites bytes (escape collapsing,
/// dot-unstuffing); every other token text borrows the source.
pub struct Scanner<'src> {
    cursor: Cursor<'src>,
}

impl<'src> Scanner<'src> {
    /// Create a scanner primed at the first byte of `src`.
    ///
    /// An empty slice is valid: the first [`scan_next`](Self::scan_next)
    /// yields `EndOfInput` at 1:1.
    #[must_use]
    pub fn new(src: &'src [u8]) -> Self {
        Scanner {
            cursor: Cursor::new(src),
        }
    }

    /// Produce the next token.
    ///
    /// Callers loop until `EndOfInput` or `Illegal`. Calling again after
    /// either is well-defined: `EndOfInput` repeats at the same position,
    /// and scanning past an `Illegal` token continues deterministically.
    #[inline]
    pub fn scan_next(&mut self) -> Token<'src> {
        if let Err(err) = self.skip_trivia() {
            return self.illegal(err);
        }
        if self.cursor.is_exhausted() {
            return Token::new(self.cursor.pos(), TokenKind::EndOfInput, Cow::Borrowed(&[]));
        }

        let pos = self.cursor.pos();
        let start = self.cursor.index();
        let first = self.cursor.current();
        self.cursor.advance();

        match first {
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.identifier(pos, start),
            b'0'..=b'9' => self.number(pos, start),
            b':' => self.tag(pos, start),
            b'"' => self.quoted_string(pos),
            b'(' => self.single(pos, start, TokenKind::LeftParen),
            b')' => self.single(pos, start, TokenKind::RightParen),
            b'[' => self.single(pos, start, TokenKind::LeftBracket),
            b']' => self.single(pos, start, TokenKind::RightBracket),
            b'{' => self.single(pos, start, TokenKind::LeftBrace),
            b'}' => self.single(pos, start, TokenKind::RightBrace),
            b';' => self.single(pos, start, TokenKind::Semicolon),
            b',' => self.single(pos, start, TokenKind::Comma),
            // Unrecognized character: an Illegal token whose text is the
            // byte itself, not a diagnostic sentence.
            _ => self.single(pos, start, TokenKind::Illegal),
        }
    }

    /// Consume any run of whitespace, line ends, hash comments, and
    /// bracketed comments before the next token.
    fn skip_trivia(&mut self) -> Result<(), ScanError> {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\n' => self.cursor.advance(),
                b'\r' => {
                    self.require_lf_after_cr()?;
                    self.cursor.advance(); // past the '\n'
                }
                b'#' => self.skip_hash_comment()?,
                b'/' => self.skip_bracketed_comment()?,
                _ => return Ok(()),
            }
        }
    }

    /// Consume a `\r` and insist on the `\n` after it, leaving the `\n` as
    /// the current byte. The error position is the byte after the `\r`.
    fn require_lf_after_cr(&mut self) -> Result<(), ScanError> {
        self.cursor.advance();
        if self.cursor.current() != b'\n' {
            return Err(ScanError::BareCarriageReturn);
        }
        Ok(())
    }

    /// Skip a `#` comment up to (not including) its line end.
    fn skip_hash_comment(&mut self) -> Result<(), ScanError> {
        self.cursor.advance(); // past '#'
        self.cursor.advance_n(self.cursor.line_run_len());
        if self.cursor.current() == 0 && !self.cursor.is_exhausted() {
            return Err(ScanError::NulInComment);
        }
        Ok(())
    }

    /// Skip a `/* ... */` comment; the current byte is the opening `/`.
    ///
    /// A `*` terminates only when the `/` follows it immediately; anything
    /// else, including a CRLF pair, drops the star-seen state. `/* /* */`
    /// closes at the first `*/`.
    fn skip_bracketed_comment(&mut self) -> Result<(), ScanError> {
        self.cursor.advance(); // past '/'
        if self.cursor.current() != b'*' {
            return Err(ScanError::MissingCommentStar);
        }
        self.cursor.advance(); // past '*'
        let mut after_star = false;
        loop {
            if self.cursor.is_exhausted() {
                return Err(ScanError::EofInComment);
            }
            match self.cursor.current() {
                0 => return Err(ScanError::NulInComment),
                b'\r' => {
                    self.require_lf_after_cr()?;
                    self.cursor.advance();
                    after_star = false;
                }
                b'*' => {
                    self.cursor.advance();
                    after_star = true;
                }
                b'/' if after_star => {
                    self.cursor.advance();
                    return Ok(());
                }
                _ => {
                    self.cursor.advance();
                    after_star = false;
                }
            }
        }
    }

    /// Scan the tail of an identifier whose first byte is consumed.
    ///
    /// An identifier spelled exactly `text` and immediately followed by `:`
    /// pre-empts the plain identifier and switches into the multiline text
    /// sub-scan.
    fn identifier(&mut self, pos: Position, start: usize) -> Token<'src> {
        self.cursor.eat_while(is_ident_continue);
        if self.cursor.slice_from(start) == b"text" && self.cursor.current() == b':' {
            self.cursor.advance(); // past ':'
            return self.multiline_text(pos);
        }
        Token::new(
            pos,
            TokenKind::Identifier,
            Cow::Borrowed(self.cursor.slice_from(start)),
        )
    }

    /// Scan the tail of a number whose first digit is consumed, including
    /// at most one magnitude suffix byte.
    fn number(&mut self, pos: Position, start: usize) -> Token<'src> {
        self.cursor.eat_while(|b| b.is_ascii_digit());
        if is_magnitude_suffix(self.cursor.current()) {
            self.cursor.advance();
        }
        Token::new(
            pos,
            TokenKind::Number,
            Cow::Borrowed(self.cursor.slice_from(start)),
        )
    }

    /// Scan a tag; the leading `:` is consumed. The captured text includes
    /// the colon.
    fn tag(&mut self, pos: Position, start: usize) -> Token<'src> {
        if !is_ident_start(self.cursor.current()) {
            return self.illegal(ScanError::InvalidTagStart);
        }
        self.cursor.eat_while(is_ident_continue);
        Token::new(
            pos,
            TokenKind::Tag,
            Cow::Borrowed(self.cursor.slice_from(start)),
        )
    }

    /// Emit a token for the single already-consumed byte at `start`.
    fn single(&self, pos: Position, start: usize, kind: TokenKind) -> Token<'src> {
        Token::new(pos, kind, Cow::Borrowed(self.cursor.slice_from(start)))
    }

    /// Materialize a failure as an `Illegal` token at the current position.
    #[cold]
    fn illegal(&self, err: ScanError) -> Token<'src> {
        Token::new(
            self.cursor.pos(),
            TokenKind::Illegal,
            Cow::Borrowed(err.message().as_bytes()),
        )
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    /// Yields every token up to but excluding `EndOfInput`. `Illegal`
    /// tokens are yielded like any other; iteration continues past them and
    /// always terminates, since every scan call consumes input or reaches
    /// the end.
    fn next(&mut self) -> Option<Token<'src>> {
        let tok = self.scan_next();
        if tok.kind == TokenKind::EndOfInput {
            None
        } else {
            Some(tok)
        }
    }
}
