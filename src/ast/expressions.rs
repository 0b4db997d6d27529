use crate::{Position, Span};

use super::{ast::Expr, operators::BinOp};

// LITERALS

/// Number Expression
/// Represents a non-negative integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct NumberExpr {
    pub value: i64,
    pub span: Span,
}

/// Symbol Expression
/// Represents a variable reference in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub value: String,
    pub span: Span,
}

// COMPLEX

/// Binary Expression
/// Represents an arithmetic operation between two expressions in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: BinOp,
    /// Where the operator character appeared, used when evaluation fails
    pub operator_position: Position,
    pub right: Box<Expr>,
    pub span: Span,
}

fn placeholder() -> Box<Expr> {
    Box::new(Expr::Number(NumberExpr {
        value: 0,
        span: Span::default(),
    }))
}

// Left-associated chains like `1+1+...+1` nest one level per operator, so
// children are torn down from an explicit stack instead of recursively.
impl Drop for BinaryExpr {
    fn drop(&mut self) {
        if !matches!(*self.left, Expr::Binary(_)) && !matches!(*self.right, Expr::Binary(_)) {
            return;
        }

        let mut stack = vec![
            std::mem::replace(&mut self.left, placeholder()),
            std::mem::replace(&mut self.right, placeholder()),
        ];

        while let Some(mut expr) = stack.pop() {
            if let Expr::Binary(binary) = expr.as_mut() {
                stack.push(std::mem::replace(&mut binary.left, placeholder()));
                stack.push(std::mem::replace(&mut binary.right, placeholder()));
            }
        }
    }
}
