//! Sift token and position types.
//!
//! This crate contains the shared output types of the Sift scanner:
//! - `Position` for 1-based line/column source locations
//! - `TokenKind`, the closed set of lexical classes, with its fixed
//!   display-name table
//! - `Token`, one positioned token with its decoded text
//!
//! It is standalone so external tooling (highlighters, config linters) can
//! consume scanner output without depending on the scanner itself.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-produced types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod position;
mod token;

pub use position::Position;
pub use token::{Token, TokenKind};
