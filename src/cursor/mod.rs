//! Character-stream cursor for the recursive descent parser.
//!
//! Scanning and parsing are fused: rather than producing a token stream,
//! the parser reads straight from a cursor which provides
//!
//! - One character of lookahead over a character source
//! - Automatic skipping of whitespace between tokens
//! - Reading of whole identifiers and integer literals
//! - Position tracking for error reporting

pub mod cursor;
pub mod source;
