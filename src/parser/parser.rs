//! Entry points for parsing.
//!
//! [`parse`] reads one expression and leaves whatever follows it in the
//! cursor; checking [`Cursor::at_end`] afterwards is up to the caller.
//! [`parse_complete`] and [`parse_str`] additionally reject trailing input.

use crate::{
    ast::ast::Expr,
    cursor::{cursor::Cursor, source::Source},
    errors::errors::{Error, ErrorImpl},
};

use super::expr::parse_expr;

/// Parses one expression from the cursor.
///
/// # Returns
///
/// The expression tree, or the first syntax error encountered. Input after
/// the expression is not consumed and is not an error.
pub fn parse<S: Source>(cursor: &mut Cursor<S>) -> Result<Expr, Error> {
    let result = parse_expr(cursor);

    match &result {
        Ok(expr) => tracing::debug!(tree = %expr, at_end = cursor.at_end(), "parsed expression"),
        Err(error) => tracing::debug!(%error, "parse failed"),
    }

    result
}

/// Parses one expression and requires the cursor to be exhausted afterwards.
pub fn parse_complete<S: Source>(cursor: &mut Cursor<S>) -> Result<Expr, Error> {
    let expr = parse(cursor)?;

    match cursor.current() {
        None => Ok(expr),
        Some(found) => Err(Error::new(
            ErrorImpl::TrailingInput { found },
            cursor.get_position(),
        )),
    }
}

/// Parses a complete expression from a string.
pub fn parse_str(text: &str) -> Result<Expr, Error> {
    parse_complete(&mut Cursor::from_text(text))
}
