use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::{
    cursor::{cursor::Cursor, source::Source},
    errors::errors::ErrorImpl,
};

lazy_static! {
    pub static ref OPERATOR_LOOKUP: HashMap<char, BinOp> = {
        let mut map = HashMap::new();
        map.insert('+', BinOp::Plus);
        map.insert('-', BinOp::Minus);
        map.insert('*', BinOp::Times);
        map.insert('/', BinOp::Divide);
        map
    };
}

/// The binary operators available in expressions.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum BinOp {
    Plus,
    Minus,
    Times,
    Divide,
}

impl BinOp {
    /// Returns the character the operator is written as.
    pub fn symbol(&self) -> char {
        match self {
            BinOp::Plus => '+',
            BinOp::Minus => '-',
            BinOp::Times => '*',
            BinOp::Divide => '/',
        }
    }

    /// Applies the operator to two integers.
    ///
    /// Division truncates toward zero. Division by zero and results that do
    /// not fit in an `i64` are errors rather than panics or wraparound.
    pub fn apply(&self, left: i64, right: i64) -> Result<i64, ErrorImpl> {
        let result = match self {
            BinOp::Plus => left.checked_add(right),
            BinOp::Minus => left.checked_sub(right),
            BinOp::Times => left.checked_mul(right),
            BinOp::Divide => {
                if right == 0 {
                    return Err(ErrorImpl::DivisionByZero);
                }
                left.checked_div(right)
            }
        };

        result.ok_or_else(|| ErrorImpl::ArithmeticOverflow {
            operation: format!("{} {} {}", left, self.symbol(), right),
        })
    }

    /// Returns the operator the lookahead starts, without consuming it.
    pub fn peek<S: Source>(cursor: &Cursor<S>) -> Option<BinOp> {
        if cursor.at_end() {
            return None;
        }
        OPERATOR_LOOKUP.get(&cursor.peek()).copied()
    }

    /// Consumes an operator from the cursor. Should only be called when the
    /// lookahead is one of `+ - * /`; otherwise nothing is consumed and
    /// `None` is returned.
    pub fn recognize<S: Source>(cursor: &mut Cursor<S>) -> Option<BinOp> {
        let op = BinOp::peek(cursor)?;
        cursor.skip();
        Some(op)
    }
}

impl Display for BinOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
