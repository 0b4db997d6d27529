use crate::{
    ast::{
        ast::Expr,
        expressions::{NumberExpr, SymbolExpr},
        operators::BinOp,
    },
    cursor::{cursor::Cursor, source::Source},
    errors::errors::{Error, ErrorImpl},
    Span, MK_BINARY_EXPR,
};

use super::lookups::{get_binding_power, BindingPower, MAX_NESTING_DEPTH};

/// Parses one operand at the given parenthesis depth.
type OperandHandler<S> = fn(&mut Cursor<S>, u32) -> Result<Expr, Error>;

/// Parses a sum or difference of one or more terms.
pub fn parse_expr<S: Source>(cursor: &mut Cursor<S>) -> Result<Expr, Error> {
    parse_expr_at(cursor, 0)
}

/// Parses a product or quotient of one or more factors.
pub fn parse_term<S: Source>(cursor: &mut Cursor<S>) -> Result<Expr, Error> {
    parse_term_at(cursor, 0)
}

/// Parses an identifier, a number or a parenthesized expression.
pub fn parse_factor<S: Source>(cursor: &mut Cursor<S>) -> Result<Expr, Error> {
    parse_factor_at(cursor, 0)
}

fn parse_expr_at<S: Source>(cursor: &mut Cursor<S>, depth: u32) -> Result<Expr, Error> {
    parse_binary_expr(cursor, depth, BindingPower::Additive, parse_term_at)
}

fn parse_term_at<S: Source>(cursor: &mut Cursor<S>, depth: u32) -> Result<Expr, Error> {
    parse_binary_expr(cursor, depth, BindingPower::Multiplicative, parse_factor_at)
}

fn parse_factor_at<S: Source>(cursor: &mut Cursor<S>, depth: u32) -> Result<Expr, Error> {
    let start = cursor.get_position();

    match cursor.current() {
        Some(c) if c.is_alphabetic() => {
            let value = cursor.read_identifier();
            Ok(Expr::from(SymbolExpr {
                value,
                span: Span {
                    start,
                    end: cursor.get_last_end(),
                },
            }))
        }
        Some(c) if c.is_ascii_digit() => {
            let value = cursor.read_integer()?;
            Ok(Expr::from(NumberExpr {
                value,
                span: Span {
                    start,
                    end: cursor.get_last_end(),
                },
            }))
        }
        Some('(') => {
            if depth >= MAX_NESTING_DEPTH {
                return Err(Error::new(
                    ErrorImpl::NestingTooDeep {
                        limit: MAX_NESTING_DEPTH,
                    },
                    start,
                ));
            }
            cursor.skip();
            let expr = parse_expr_at(cursor, depth + 1)?;
            cursor.expect(')')?;
            Ok(expr)
        }
        found => Err(Error::new(ErrorImpl::ExpectedFactor { found }, start)),
    }
}

// Folds `operand (op operand)*` to the left for every operator at `bp`.
fn parse_binary_expr<S: Source>(
    cursor: &mut Cursor<S>,
    depth: u32,
    bp: BindingPower,
    operand: OperandHandler<S>,
) -> Result<Expr, Error> {
    let mut left = operand(cursor, depth)?;

    while BinOp::peek(cursor).is_some_and(|op| get_binding_power(op) == bp) {
        let position = cursor.get_position();
        let Some(operator) = BinOp::recognize(cursor) else {
            break;
        };
        let right = operand(cursor, depth)?;

        tracing::trace!(%operator, position = position.0, "reduced binary expression");
        left = MK_BINARY_EXPR!(left, operator, position, right);
    }

    Ok(left)
}
