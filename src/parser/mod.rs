//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains a recursive descent parser that reads directly from
//! a [`Cursor`](crate::cursor::cursor::Cursor). The grammar is
//!
//! ```text
//! Expression := Term (('+'|'-') Term)*
//! Term       := Factor (('*'|'/') Factor)*
//! Factor     := Identifier | Number | '(' Expression ')'
//! ```
//!
//! Both binary levels are left-associative. One character of lookahead
//! always decides the next production, so there is no backtracking and the
//! first malformed character fails the parse.

pub mod expr;
pub mod lookups;
pub mod parser;

#[cfg(test)]
mod tests;
