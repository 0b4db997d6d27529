/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The expression sum type and its rendering
/// - expressions: Definitions for the individual expression nodes
/// - operators: The binary operators and their arithmetic
pub mod ast;
pub mod expressions;
pub mod operators;
