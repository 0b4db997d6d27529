use crate::{
    ast::{ast::Expr, expressions::BinaryExpr},
    errors::errors::Error,
};

use super::environment::Environment;

enum Frame<'a> {
    /// Evaluate this node and push its value
    Visit(&'a Expr),
    /// Both operands are on the value stack; combine them
    Apply(&'a BinaryExpr),
}

impl Expr {
    /// Reduces the tree to an integer.
    ///
    /// Binary nodes evaluate their left operand before their right one.
    /// Neither the tree nor the environment is modified, so evaluating the
    /// same tree against the same environment always gives the same result.
    /// Work is kept on explicit stacks, so tree depth is bounded only by
    /// memory.
    ///
    /// # Returns
    ///
    /// The value, or an arithmetic error positioned at the failing operator.
    pub fn eval(&self, environment: &Environment) -> Result<i64, Error> {
        let mut frames = vec![Frame::Visit(self)];
        let mut values: Vec<i64> = Vec::new();

        while let Some(frame) = frames.pop() {
            match frame {
                Frame::Visit(Expr::Binary(expr)) => {
                    frames.push(Frame::Apply(expr));
                    frames.push(Frame::Visit(&*expr.right));
                    frames.push(Frame::Visit(&*expr.left));
                }
                Frame::Visit(Expr::Symbol(expr)) => values.push(environment.lookup(&expr.value)),
                Frame::Visit(Expr::Number(expr)) => values.push(expr.value),
                Frame::Apply(expr) => {
                    let (Some(right), Some(left)) = (values.pop(), values.pop()) else {
                        unreachable!("binary expression evaluated without both operands");
                    };
                    values.push(apply_binary_expr(expr, left, right)?);
                }
            }
        }

        match values.pop() {
            Some(value) => Ok(value),
            None => unreachable!("evaluation produced no value"),
        }
    }
}

fn apply_binary_expr(expr: &BinaryExpr, left: i64, right: i64) -> Result<i64, Error> {
    let value = expr
        .operator
        .apply(left, right)
        .map_err(|e| Error::new(e, expr.operator_position))?;

    tracing::trace!(left, operator = %expr.operator, right, value, "evaluated binary expression");
    Ok(value)
}

/// Evaluates the tree and logs the result.
pub fn evaluate(expr: &Expr, environment: &Environment) -> Result<i64, Error> {
    tracing::debug!(bindings = environment.len(), "evaluating expression");

    let result = expr.eval(environment);

    match &result {
        Ok(value) => tracing::debug!(tree = %expr, value, "evaluated expression"),
        Err(error) => tracing::debug!(tree = %expr, %error, "evaluation failed"),
    }

    result
}
