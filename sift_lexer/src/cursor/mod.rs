//! Position-tracking byte cursor.
//!
//! The cursor walks the source one byte at a time with exactly one byte of
//! lookahead: the current byte is always loaded, and nothing beyond it is
//! visible. Reading past the end yields `0x00` and keeps the position
//! bookkeeping parked after the last real byte, so trailing diagnostics have
//! a well-defined location.
//!
//! # Interior NUL vs. exhaustion
//!
//! A genuine NUL byte in the source also presents as `0x00`. The two cases
//! are distinguished by an index check ([`Cursor::is_exhausted`]), never by
//! the byte value alone.

use sift_token::Position;

/// Returns the earliest (minimum) of two optional offsets.
///
/// Combines results from separate memchr calls when a run has more stop
/// bytes than `memchr3` supports (at most 3 needles per call).
fn earliest_of(a: Option<usize>, b: Option<usize>) -> Option<usize> {
    match (a, b) {
        (Some(x), Some(y)) => Some(x.min(y)),
        (Some(x), None) | (None, Some(x)) => Some(x),
        (None, None) => None,
    }
}

/// Byte cursor over a borrowed source slice.
///
/// All line/column arithmetic lives in [`advance`](Cursor::advance); every
/// consuming operation routes through it, one call per byte. There is no
/// pushback and no snapshotting: the scanner never backtracks past its one
/// byte of lookahead.
#[derive(Debug)]
pub(crate) struct Cursor<'src> {
    /// Source bytes, exactly as handed in. No synthetic terminator.
    src: &'src [u8],
    /// Index one past the current byte. Capped at `src.len() + 1` once
    /// exhausted, so repeated end-of-input advances are no-ops.
    offset: usize,
    /// Current lookahead byte; `0x00` once exhausted (and for genuine NULs).
    current: u8,
    /// Position of the current byte.
    pos: Position,
    /// Position the following byte will occupy.
    next_pos: Position,
}

// &[u8] = 16 (fat pointer), usize = 8, u8 = 1 (+7 pad), 2 x Position = 16.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 48);

impl<'src> Cursor<'src> {
    /// Create a cursor primed at the first byte of `src` (or at end-of-input
    /// for an empty slice), positioned at 1:1.
    pub(crate) fn new(src: &'src [u8]) -> Self {
        let mut cursor = Cursor {
            src,
            offset: 0,
            current: 0,
            pos: Position::START,
            next_pos: Position::START,
        };
        cursor.advance();
        cursor
    }

    /// Returns the current lookahead byte.
    ///
    /// Returns `0x00` once the input is exhausted; a genuine NUL looks the
    /// same, so callers that care must also consult
    /// [`is_exhausted`](Self::is_exhausted).
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.current
    }

    /// Consume the current byte and load the next one.
    ///
    /// The single place where line/column arithmetic happens: loading a
    /// `'\n'` bumps the line and resets the column for the byte after it,
    /// loading anything else bumps the column. Past the end of input this
    /// loads the `0x00` sentinel and leaves both positions untouched, so the
    /// reported position stays parked after the last real byte.
    #[inline]
    pub(crate) fn advance(&mut self) {
        self.pos = self.next_pos;
        let Some(&b) = self.src.get(self.offset) else {
            self.current = 0;
            self.offset = self.src.len() + 1;
            return;
        };
        if b == b'\n' {
            self.next_pos.line += 1;
            self.next_pos.column = 1;
        } else {
            self.next_pos.column += 1;
        }
        self.current = b;
        self.offset += 1;
    }

    /// Consume `n` bytes, each through [`advance`](Self::advance).
    #[inline]
    pub(crate) fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            self.advance();
        }
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must return `false` so that exhaustion stops the loop; all
    /// the scanner's classification predicates reject NUL.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while pred(self.current) {
            self.advance();
        }
    }

    /// True once the current byte is the synthetic `0x00` past the end of
    /// input, as opposed to a genuine NUL at an in-bounds index.
    #[inline]
    pub(crate) fn is_exhausted(&self) -> bool {
        self.offset > self.src.len()
    }

    /// Position of the current byte (or of end-of-input once exhausted).
    #[inline]
    pub(crate) fn pos(&self) -> Position {
        self.pos
    }

    /// Byte index of the current byte. Equals `src.len()` once exhausted.
    #[inline]
    pub(crate) fn index(&self) -> usize {
        self.offset - 1
    }

    /// Source bytes in `start..end`.
    #[inline]
    pub(crate) fn slice(&self, start: usize, end: usize) -> &'src [u8] {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(end <= self.src.len(), "slice end {end} out of bounds");
        &self.src[start..end]
    }

    /// Source bytes from `start` up to the current byte (exclusive).
    #[inline]
    pub(crate) fn slice_from(&self, start: usize) -> &'src [u8] {
        self.slice(start, self.index())
    }

    /// Length of the run of line-body bytes starting at the current byte:
    /// everything up to the next `\r`, `\n`, or NUL, or to end of input.
    /// Zero when already at a stop byte or exhausted.
    ///
    /// SIMD-accelerated lookahead only: the caller still consumes the run
    /// through [`advance_n`](Self::advance_n).
    pub(crate) fn line_run_len(&self) -> usize {
        if self.is_exhausted() {
            return 0;
        }
        let rest = &self.src[self.index()..];
        memchr::memchr3(b'\r', b'\n', 0, rest).unwrap_or(rest.len())
    }

    /// Length of the run of plain string bytes starting at the current byte:
    /// everything up to the next `"`, `\`, `\r`, `\n`, or NUL, or to end of
    /// input. Zero when already at a stop byte or exhausted.
    ///
    /// Two memchr searches combined via [`earliest_of`], since the stop set
    /// has five bytes.
    pub(crate) fn string_run_len(&self) -> usize {
        if self.is_exhausted() {
            return 0;
        }
        let rest = &self.src[self.index()..];
        let primary = memchr::memchr3(b'"', b'\\', b'\n', rest);
        let secondary = memchr::memchr2(b'\r', 0, rest);
        earliest_of(primary, secondary).unwrap_or(rest.len())
    }
}

#[cfg(test)]
mod tests;
