//! Utility macros for the parser.
//!
//! - `MK_BINARY_EXPR!` - Creates a binary expression node spanning both operands

/// Creates an `Expr::Binary` whose span runs from the start of the left
/// operand to the end of the right operand.
///
/// # Arguments
///
/// * `$left` - The left operand
/// * `$operator` - The BinOp
/// * `$position` - Position of the operator character
/// * `$right` - The right operand
///
/// # Example
///
/// ```ignore
/// let expr = MK_BINARY_EXPR!(left, BinOp::Plus, position, right);
/// ```
#[macro_export]
macro_rules! MK_BINARY_EXPR {
    ($left:expr, $operator:expr, $position:expr, $right:expr) => {{
        let left: $crate::ast::ast::Expr = $left;
        let right: $crate::ast::ast::Expr = $right;
        $crate::ast::ast::Expr::Binary($crate::ast::expressions::BinaryExpr {
            span: $crate::Span {
                start: left.get_span().start,
                end: right.get_span().end,
            },
            left: Box::new(left),
            operator: $operator,
            operator_position: $position,
            right: Box::new(right),
        })
    }};
}
