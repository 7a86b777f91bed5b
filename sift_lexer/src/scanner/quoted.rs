//! Quoted string sub-scanner.
//!
//! A string runs from `"` to the first unescaped `"`. A backslash escapes
//! the byte after it (the escaped byte is kept, the backslash dropped); a
//! backslash before a line end or NUL escapes nothing and is dropped alone.
//! CRLF pairs are literal content and pass through verbatim, as does a bare
//! `\n`. The decoded text borrows the source until an escape actually
//! rewrites bytes, at which point it switches to an owned buffer.

use std::borrow::Cow;

use sift_token::{Position, Token, TokenKind};

use crate::error::ScanError;

use super::Scanner;

impl<'src> Scanner<'src> {
    /// Scan a quoted string; the opening `"` is already consumed.
    pub(super) fn quoted_string(&mut self, pos: Position) -> Token<'src> {
        match self.string_body() {
            Ok(text) => Token::new(pos, TokenKind::QuotedString, text),
            Err(err) => self.illegal(err),
        }
    }

    /// Decode the string body and consume the closing quote.
    ///
    /// `seg_start` tracks the start of the pending verbatim segment; the
    /// owned buffer exists only once an escape has dropped a backslash.
    fn string_body(&mut self) -> Result<Cow<'src, [u8]>, ScanError> {
        let content_start = self.cursor.index();
        let mut seg_start = content_start;
        let mut owned: Option<Vec<u8>> = None;
        loop {
            match self.cursor.current() {
                b'"' => {
                    let end = self.cursor.index();
                    let text = match owned {
                        Some(mut buf) => {
                            buf.extend_from_slice(self.cursor.slice(seg_start, end));
                            Cow::Owned(buf)
                        }
                        None => Cow::Borrowed(self.cursor.slice(content_start, end)),
                    };
                    self.cursor.advance(); // past the closing '"'
                    return Ok(text);
                }
                b'\\' => {
                    let backslash = self.cursor.index();
                    let buf = owned.get_or_insert_with(Vec::new);
                    buf.extend_from_slice(self.cursor.slice(seg_start, backslash));
                    self.cursor.advance(); // drop the backslash
                    let escaped = self.cursor.current();
                    if !self.cursor.is_exhausted()
                        && escaped != 0
                        && escaped != b'\r'
                        && escaped != b'\n'
                    {
                        buf.push(escaped);
                        self.cursor.advance();
                    }
                    seg_start = self.cursor.index();
                }
                b'\r' => {
                    // Both bytes of the pair stay in the pending segment.
                    self.require_lf_after_cr()?;
                    self.cursor.advance();
                }
                b'\n' => self.cursor.advance(),
                0 => {
                    return Err(if self.cursor.is_exhausted() {
                        ScanError::EofInString
                    } else {
                        ScanError::NulInString
                    });
                }
                _ => {
                    // Ordinary content: skip ahead to the next byte the
                    // scanner has to look at.
                    self.cursor.advance_n(self.cursor.string_run_len());
                }
            }
        }
    }
}
