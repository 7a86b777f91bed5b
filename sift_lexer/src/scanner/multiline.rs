//! Multiline text block sub-scanner.
//!
//! `text:` introduces an SMTP-style dot-stuffed body. The header after the
//! colon may hold spaces, tabs, and a hash comment; the body then runs line
//! by line, each kept verbatim with its `\n` or `\r\n` terminator, until a
//! line holding exactly one `.` ends the block. A line starting with `..`
//! sheds its first dot and keeps the rest. The decoded body borrows the
//! source until unstuffing actually drops a byte.

use std::borrow::Cow;

use sift_token::{Position, Token, TokenKind};

use crate::error::ScanError;

use super::Scanner;

impl<'src> Scanner<'src> {
    /// Scan a `text:` block; the word `text` and the `:` are consumed.
    pub(super) fn multiline_text(&mut self, pos: Position) -> Token<'src> {
        match self.multiline_body() {
            Ok(text) => Token::new(pos, TokenKind::MultilineText, text),
            Err(err) => self.illegal(err),
        }
    }

    /// Skip the header after `text:`: blanks, then an optional hash
    /// comment, then the line end. The body may also begin right on the
    /// header line, in which case nothing here consumes anything.
    ///
    /// Unlike trivia hash comments, the header comment swallows NUL bytes
    /// without complaint (historical behavior, kept bit for bit).
    fn multiline_header(&mut self) -> Result<(), ScanError> {
        self.cursor.eat_while(|b| b == b' ' || b == b'\t');
        if self.cursor.current() == b'#' {
            self.cursor.advance();
            loop {
                self.cursor.advance_n(self.cursor.line_run_len());
                if self.cursor.current() == 0 && !self.cursor.is_exhausted() {
                    self.cursor.advance();
                    continue;
                }
                break;
            }
        }
        if self.cursor.current() == b'\r' {
            self.require_lf_after_cr()?;
        }
        if self.cursor.current() == b'\n' {
            self.cursor.advance();
        }
        if self.cursor.is_exhausted() {
            return Err(ScanError::EofInMultiline);
        }
        Ok(())
    }

    /// Accumulate body lines until the terminator line.
    ///
    /// `owned` stays `None` while every kept line is verbatim; the first
    /// unstuffed line copies the prefix and switches to the buffer.
    fn multiline_body(&mut self) -> Result<Cow<'src, [u8]>, ScanError> {
        self.multiline_header()?;
        let body_start = self.cursor.index();
        let mut owned: Option<Vec<u8>> = None;
        loop {
            let line_start = self.cursor.index();
            let mut kept_from = line_start;
            let mut terminator = false;
            if self.cursor.current() == b'.' {
                self.cursor.advance();
                terminator = true;
                if self.cursor.current() == b'.' {
                    // Dot-stuffed: shed exactly the first dot.
                    self.cursor.advance();
                    terminator = false;
                    kept_from = line_start + 1;
                }
                let rest = self.cursor.line_run_len();
                if rest > 0 {
                    terminator = false;
                    self.cursor.advance_n(rest);
                }
            } else {
                self.cursor.advance_n(self.cursor.line_run_len());
            }

            if self.cursor.is_exhausted() {
                return Err(ScanError::EofInMultiline);
            }
            if self.cursor.current() == 0 {
                return Err(ScanError::NulInMultiline);
            }
            if self.cursor.current() == b'\r' {
                self.require_lf_after_cr()?;
            }
            if self.cursor.current() == b'\n' {
                self.cursor.advance();
            }

            if terminator {
                // The terminator line itself never reaches the text.
                let text = match owned {
                    Some(buf) => Cow::Owned(buf),
                    None => Cow::Borrowed(self.cursor.slice(body_start, line_start)),
                };
                return Ok(text);
            }

            if let Some(buf) = owned.as_mut() {
                buf.extend_from_slice(self.cursor.slice_from(kept_from));
            } else if kept_from != line_start {
                let mut buf = self.cursor.slice(body_start, line_start).to_vec();
                buf.extend_from_slice(self.cursor.slice_from(kept_from));
                owned = Some(buf);
            }
        }
    }
}
