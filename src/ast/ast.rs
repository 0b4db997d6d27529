use std::fmt::{self, Display};

use crate::Span;

use super::{
    expressions::{BinaryExpr, NumberExpr, SymbolExpr},
    operators::BinOp,
};

/// An expression tree.
///
/// Children are owned by their parent, so every tree is finite and acyclic.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Binary(BinaryExpr),
    Symbol(SymbolExpr),
    Number(NumberExpr),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn get_span(&self) -> &Span {
        match self {
            Expr::Binary(expr) => &expr.span,
            Expr::Symbol(expr) => &expr.span,
            Expr::Number(expr) => &expr.span,
        }
    }
}

impl From<BinaryExpr> for Expr {
    fn from(expr: BinaryExpr) -> Self {
        Expr::Binary(expr)
    }
}

impl From<SymbolExpr> for Expr {
    fn from(expr: SymbolExpr) -> Self {
        Expr::Symbol(expr)
    }
}

impl From<NumberExpr> for Expr {
    fn from(expr: NumberExpr) -> Self {
        Expr::Number(expr)
    }
}

/// Renders binary nodes fully parenthesized, e.g. `((abc + 5) * r2d2)`.
impl Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        enum Piece<'a> {
            Node(&'a Expr),
            Operator(BinOp),
            Close,
        }

        // Explicit stack: trees can be as deep as the input is long.
        let mut stack = vec![Piece::Node(self)];

        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Node(Expr::Binary(expr)) => {
                    f.write_str("(")?;
                    stack.push(Piece::Close);
                    stack.push(Piece::Node(&*expr.right));
                    stack.push(Piece::Operator(expr.operator));
                    stack.push(Piece::Node(&*expr.left));
                }
                Piece::Node(Expr::Symbol(expr)) => f.write_str(&expr.value)?,
                Piece::Node(Expr::Number(expr)) => write!(f, "{}", expr.value)?,
                Piece::Operator(operator) => write!(f, " {} ", operator)?,
                Piece::Close => f.write_str(")")?,
            }
        }

        Ok(())
    }
}
