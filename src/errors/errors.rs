use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

/// Which stage of the pipeline raised an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raised while parsing; the input is malformed.
    Syntax,
    /// Raised while evaluating a well-formed tree.
    Arithmetic,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_internal_error(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_kind(&self) -> ErrorKind {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. }
            | ErrorImpl::ExpectedFactor { .. }
            | ErrorImpl::NumberParseError { .. }
            | ErrorImpl::NestingTooDeep { .. }
            | ErrorImpl::TrailingInput { .. } => ErrorKind::Syntax,
            ErrorImpl::DivisionByZero | ErrorImpl::ArithmeticOverflow { .. } => {
                ErrorKind::Arithmetic
            }
        }
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { .. } => "UnexpectedCharacter",
            ErrorImpl::ExpectedFactor { .. } => "ExpectedFactor",
            ErrorImpl::NumberParseError { .. } => "NumberParseError",
            ErrorImpl::NestingTooDeep { .. } => "NestingTooDeep",
            ErrorImpl::TrailingInput { .. } => "TrailingInput",
            ErrorImpl::DivisionByZero => "DivisionByZero",
            ErrorImpl::ArithmeticOverflow { .. } => "ArithmeticOverflow",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnexpectedCharacter { expected, found } => ErrorTip::Suggestion(format!(
                "Expected `{}` but found {}",
                expected,
                describe(*found)
            )),
            ErrorImpl::ExpectedFactor { found } => ErrorTip::Suggestion(format!(
                "Expected a factor but found {}",
                describe(*found)
            )),
            ErrorImpl::NumberParseError { token } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                token
            )),
            ErrorImpl::NestingTooDeep { limit } => ErrorTip::Suggestion(format!(
                "Parentheses may be nested at most {} deep",
                limit
            )),
            ErrorImpl::TrailingInput { found } => ErrorTip::Suggestion(format!(
                "Unscanned input starting at `{}`, did you miss an operator?",
                found
            )),
            ErrorImpl::DivisionByZero => ErrorTip::None,
            ErrorImpl::ArithmeticOverflow { operation } => {
                ErrorTip::Suggestion(format!("`{}` does not fit in a 64-bit integer", operation))
            }
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} at {}", self.internal_error, self.position.0)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.internal_error)
    }
}

fn describe(found: Option<char>) -> String {
    match found {
        Some(c) => format!("`{}`", c),
        None => String::from("end of input"),
    }
}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

/// `found: None` means the input ended where a character was required.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("expected {expected:?} but found {found:?}")]
    UnexpectedCharacter { expected: char, found: Option<char> },
    #[error("expected a factor")]
    ExpectedFactor { found: Option<char> },
    #[error("error parsing number: {token:?}")]
    NumberParseError { token: String },
    #[error("parentheses nested deeper than {limit}")]
    NestingTooDeep { limit: u32 },
    #[error("unscanned input after parsing: {found:?}")]
    TrailingInput { found: char },
    #[error("division by zero")]
    DivisionByZero,
    #[error("arithmetic overflow in {operation:?}")]
    ArithmeticOverflow { operation: String },
}
