//! Sift lexical scanner.
//!
//! Turns raw configuration bytes into positioned tokens:
//! - [`Scanner`] produces one token per call (or by iteration)
//! - [`ScanError`] catalogs the diagnostic sentences carried by illegal
//!   tokens
//! - [`Token`], [`TokenKind`], and [`Position`] are re-exported from
//!   `sift_token`
//!
//! # Errors are tokens
//!
//! The scanner never fails out of band. Malformed input becomes an
//! `Illegal` token carrying a fixed diagnostic sentence (or the offending
//! byte itself), positioned at the byte where the problem was noticed;
//! `EndOfInput` marks exhaustion. Inputs are arbitrary bytes: the scanner
//! imposes no text encoding, and NUL is an ordinary (illegal) input byte,
//! never an end marker.

mod cursor;
mod error;
mod scanner;

pub use error::ScanError;
pub use scanner::Scanner;
pub use sift_token::{Position, Token, TokenKind};
