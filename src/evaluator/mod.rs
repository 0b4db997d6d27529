//! Evaluation of expression trees.
//!
//! - environment: The variable bindings consulted while evaluating
//! - evaluator: Reduction of an `Expr` to an integer

pub mod environment;
pub mod evaluator;
