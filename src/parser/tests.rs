//! Unit tests for the parser module.
//!
//! This module contains tests for parsing:
//! - Literals, identifiers and parenthesized expressions
//! - Precedence and associativity of the binary operators
//! - Spans recorded on the nodes
//! - Malformed input and trailing input

use pretty_assertions::assert_eq;

use super::{
    expr::{parse_factor, parse_term},
    lookups::{get_binding_power, BindingPower, MAX_NESTING_DEPTH},
    parser::{parse, parse_complete, parse_str},
};
use crate::{
    ast::{ast::Expr, operators::BinOp},
    cursor::cursor::Cursor,
    errors::errors::{ErrorImpl, ErrorKind},
    test_utils::init_test_logging,
    Position, Span,
};

fn parse_to_string(source: &str) -> String {
    parse_str(source).unwrap().to_string()
}

#[test]
fn test_parse_number() {
    assert_eq!(parse_to_string("42"), "42");
}

#[test]
fn test_parse_identifier() {
    assert_eq!(parse_to_string("abc"), "abc");
    assert_eq!(parse_to_string("r2d2"), "r2d2");
}

#[test]
fn test_parse_sample_expression() {
    init_test_logging();

    assert_eq!(
        parse_to_string("  (abc+5) * (r2d2 * 3 + abc) \n"),
        "((abc + 5) * ((r2d2 * 3) + abc))"
    );
}

#[test]
fn test_additive_is_left_associative() {
    assert_eq!(parse_to_string("8-3-2"), "((8 - 3) - 2)");
}

#[test]
fn test_multiplicative_is_left_associative() {
    assert_eq!(parse_to_string("8/4/2"), "((8 / 4) / 2)");
}

#[test]
fn test_multiplication_binds_tighter() {
    assert_eq!(parse_to_string("2+3*4"), "(2 + (3 * 4))");
    assert_eq!(parse_to_string("2*3+4"), "((2 * 3) + 4)");
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(parse_to_string("(2+3)*4"), "((2 + 3) * 4)");
}

#[test]
fn test_redundant_parentheses() {
    assert_eq!(parse_to_string("((7))"), "7");
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(parse_to_string(" 1 + 2 "), parse_to_string("1+2"));
    assert_eq!(parse_to_string("\t(\na\n)\r\n*\n2 "), "(a * 2)");
}

#[test]
fn test_binary_node_fields() {
    let expr = parse_str("a / 3").unwrap();

    match expr {
        Expr::Binary(binary) => {
            assert_eq!(binary.operator, BinOp::Divide);
            assert_eq!(binary.operator_position, Position(2));
            assert_eq!(binary.left.to_string(), "a");
            assert_eq!(binary.right.to_string(), "3");
        }
        other => panic!("expected a binary expression, found {:?}", other),
    }
}

#[test]
fn test_spans() {
    let expr = parse_str("  ab + (12 * c) ").unwrap();
    assert_eq!(
        expr.get_span(),
        &Span {
            start: Position(2),
            end: Position(14)
        }
    );

    let Expr::Binary(binary) = expr else {
        panic!("expected a binary expression");
    };
    assert_eq!(
        binary.left.get_span(),
        &Span {
            start: Position(2),
            end: Position(4)
        }
    );
    assert_eq!(
        binary.right.get_span(),
        &Span {
            start: Position(8),
            end: Position(14)
        }
    );
}

#[test]
fn test_parse_leaves_trailing_input() {
    let mut cursor = Cursor::from_text("1 + 2 )");

    let expr = parse(&mut cursor).unwrap();
    assert_eq!(expr.to_string(), "(1 + 2)");
    assert!(!cursor.at_end());
    assert_eq!(cursor.peek(), ')');
}

#[test]
fn test_parse_at_end_without_trailing_input() {
    let mut cursor = Cursor::from_text("(abc+5)*(r2d2*3+abc)");

    assert!(parse(&mut cursor).is_ok());
    assert!(cursor.at_end());
}

#[test]
fn test_juxtaposed_factors_are_trailing_input() {
    let mut cursor = Cursor::from_text("2 3");

    assert_eq!(parse(&mut cursor).unwrap().to_string(), "2");
    assert_eq!(cursor.peek(), '3');
}

#[test]
fn test_parse_complete_rejects_trailing_input() {
    let mut cursor = Cursor::from_text("1 + 2 )");

    let error = parse_complete(&mut cursor).unwrap_err();
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::TrailingInput { found: ')' }
    );
    assert_eq!(error.get_position(), &Position(6));
}

#[test]
fn test_missing_factor_after_operator() {
    let error = parse_str("(1+").unwrap_err();

    assert_eq!(error.get_error_kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ExpectedFactor { found: None }
    );
    assert_eq!(error.get_position(), &Position(3));
}

#[test]
fn test_missing_closing_paren() {
    let error = parse_str("(1+2").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedCharacter {
            expected: ')',
            found: None
        }
    );
}

#[test]
fn test_wrong_closing_character() {
    let error = parse_str("(1+2]").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::UnexpectedCharacter {
            expected: ')',
            found: Some(']')
        }
    );
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_unary_minus_is_not_a_factor() {
    let error = parse_str("-1").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ExpectedFactor { found: Some('-') }
    );
}

#[test]
fn test_empty_input() {
    let error = parse_str("   ").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ExpectedFactor { found: None }
    );
}

#[test]
fn test_empty_parentheses() {
    let error = parse_str("()").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::ExpectedFactor { found: Some(')') }
    );
    assert_eq!(error.get_position(), &Position(1));
}

#[test]
fn test_number_literal_overflow() {
    let error = parse_str("1 + 99999999999999999999").unwrap_err();

    assert_eq!(error.get_error_name(), "NumberParseError");
    assert_eq!(error.get_position(), &Position(4));
}

#[test]
fn test_floating_point_is_rejected() {
    let error = parse_str("1.5").unwrap_err();

    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::TrailingInput { found: '.' }
    );
}

#[test]
fn test_parse_term_stops_at_additive_operator() {
    let mut cursor = Cursor::from_text("2*3+4");

    assert_eq!(parse_term(&mut cursor).unwrap().to_string(), "(2 * 3)");
    assert_eq!(cursor.peek(), '+');
}

#[test]
fn test_parse_factor_stops_at_any_operator() {
    let mut cursor = Cursor::from_text("x*y");

    assert_eq!(parse_factor(&mut cursor).unwrap().to_string(), "x");
    assert_eq!(cursor.peek(), '*');
}

#[test]
fn test_parse_from_reader() {
    let mut cursor = Cursor::from_reader("  (abc+5) * (r2d2 * 3 + abc) \n".as_bytes());

    let expr = parse(&mut cursor).unwrap();
    assert!(cursor.at_end());
    assert_eq!(expr.to_string(), "((abc + 5) * ((r2d2 * 3) + abc))");
}

fn nested(depth: usize, inner: &str) -> String {
    format!("{}{}{}", "(".repeat(depth), inner, ")".repeat(depth))
}

#[test]
fn test_nesting_up_to_limit() {
    let source = nested(MAX_NESTING_DEPTH as usize, "a + 1");

    assert_eq!(parse_to_string(&source), "(a + 1)");
}

#[test]
fn test_nesting_past_limit() {
    let source = nested(MAX_NESTING_DEPTH as usize + 1, "1");
    let error = parse_str(&source).unwrap_err();

    assert_eq!(error.get_error_kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_internal_error(),
        &ErrorImpl::NestingTooDeep {
            limit: MAX_NESTING_DEPTH
        }
    );
    assert_eq!(error.get_position(), &Position(MAX_NESTING_DEPTH));
}

#[test]
fn test_sibling_groups_do_not_add_depth() {
    let group = nested(MAX_NESTING_DEPTH as usize, "1");
    let source = vec![group.as_str(); 4].join(" * ");

    assert_eq!(parse_to_string(&source), "(((1 * 1) * 1) * 1)");
}

#[test]
fn test_long_flat_sum() {
    let source = vec!["x"; 100_000].join(" + ");
    let expr = parse_str(&source).unwrap();

    assert_eq!(expr.get_span().start, Position(0));
    assert_eq!(expr.get_span().end, Position(source.len() as u32));
}

#[test]
fn test_binding_power_of_each_operator() {
    assert_eq!(get_binding_power(BinOp::Plus), BindingPower::Additive);
    assert_eq!(get_binding_power(BinOp::Minus), BindingPower::Additive);
    assert_eq!(get_binding_power(BinOp::Times), BindingPower::Multiplicative);
    assert_eq!(get_binding_power(BinOp::Divide), BindingPower::Multiplicative);
    assert!(BindingPower::Additive < BindingPower::Multiplicative);
}
