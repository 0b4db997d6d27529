use crate::ast::operators::BinOp;

/// Precedence levels, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Additive,
    Multiplicative,
}

/// Parenthesized expressions nested deeper than this are rejected, so the
/// descent cannot exhaust the stack.
pub const MAX_NESTING_DEPTH: u32 = 256;

pub fn get_binding_power(op: BinOp) -> BindingPower {
    match op {
        BinOp::Plus | BinOp::Minus => BindingPower::Additive,
        BinOp::Times | BinOp::Divide => BindingPower::Multiplicative,
    }
}
