//! Source positions.
//!
//! 1-based line/column coordinates. Column counts bytes within a line, not
//! characters: the scanner operates on raw bytes and diagnostics point at
//! byte offsets within the line.

use std::fmt;

/// A source position: 1-based line and column.
///
/// A consumed `'\n'` increments `line` and resets `column` to 1 for the byte
/// that follows it; every other consumed byte increments `column` by 1.
///
/// Ordering is line-major, so token positions compare in scan order.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    /// Position of the first byte of any input.
    pub const START: Position = Position { line: 1, column: 1 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Position { line, column }
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

// Size assertions to prevent accidental regressions
mod size_asserts {
    use super::Position;
    crate::static_assert_size!(Position, 8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_start() {
        assert_eq!(Position::START, Position::new(1, 1));
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(3, 14).to_string(), "3:14");
        assert_eq!(format!("{:?}", Position::new(3, 14)), "3:14");
    }

    #[test]
    fn test_position_line_major_order() {
        assert!(Position::new(1, 99) < Position::new(2, 1));
        assert!(Position::new(2, 3) < Position::new(2, 4));
        assert!(Position::new(2, 4) <= Position::new(2, 4));
    }
}
