//! The stack machine that evaluates an expression in postfix order.

use crate::{
    error::{DivisionByZero, InsufficientOperands, MalformedExpression},
    funcs,
};
use smartcalc_error::Error;
use smartcalc_parser::{
    lexer::{
        op::{BinOpKind, UnaryOpKind},
        token::TokenKind,
    },
    rpn::Rpn,
};
use std::ops::Range;

/// Evaluates a compiled expression with the given value for `x`.
///
/// This is a single pass over the postfix tokens: operands are pushed onto a stack, operators
/// and functions pop their arguments and push their result. A well-formed expression leaves
/// exactly one value behind.
pub fn evaluate(rpn: &Rpn, x: f64) -> Result<f64, Error> {
    let mut operands: Vec<f64> = Vec::new();

    for token in rpn.tokens() {
        match token.kind {
            TokenKind::Number(value) => operands.push(value),
            TokenKind::Variable => operands.push(x),
            TokenKind::Unary(op) => {
                let Some(operand) = operands.pop() else {
                    return Err(insufficient(op.symbol(), &token.span));
                };
                operands.push(match op {
                    UnaryOpKind::Pos => operand,
                    UnaryOpKind::Neg => -operand,
                });
            },
            TokenKind::Binary(op) => {
                let (Some(rhs), Some(lhs)) = (operands.pop(), operands.pop()) else {
                    return Err(insufficient(op.symbol(), &token.span));
                };
                operands.push(binary(op, lhs, rhs, &token.span)?);
            },
            TokenKind::Func(func) => {
                let Some(operand) = operands.pop() else {
                    return Err(insufficient(func.name(), &token.span));
                };
                operands.push(funcs::apply(func, operand, &token.span)?);
            },
            // brackets are consumed during conversion and never reach postfix order
            TokenKind::OpenParen | TokenKind::CloseParen => unreachable!(),
        }
    }

    match operands.as_slice() {
        [value] => Ok(*value),
        _ => Err(Error::new(full_span(rpn), MalformedExpression)),
    }
}

/// Applies a binary operator. `/` and `mod` reject a zero right operand; `^` follows IEEE
/// `powf`, so a negative base under a fractional exponent quietly yields NaN rather than an
/// error.
fn binary(op: BinOpKind, lhs: f64, rhs: f64, span: &Range<usize>) -> Result<f64, Error> {
    match op {
        BinOpKind::Div | BinOpKind::Mod if rhs == 0.0 => {
            Err(Error::new(vec![span.clone()], DivisionByZero))
        },
        BinOpKind::Add => Ok(lhs + rhs),
        BinOpKind::Sub => Ok(lhs - rhs),
        BinOpKind::Mul => Ok(lhs * rhs),
        BinOpKind::Div => Ok(lhs / rhs),
        // the remainder keeps the sign of the dividend
        BinOpKind::Mod => Ok(lhs % rhs),
        BinOpKind::Exp => Ok(lhs.powf(rhs)),
    }
}

fn insufficient(symbol: &'static str, span: &Range<usize>) -> Error {
    Error::new(vec![span.clone()], InsufficientOperands { symbol })
}

/// The region covering every token of the expression, for errors that have no single token to
/// point at.
fn full_span(rpn: &Rpn) -> Vec<Range<usize>> {
    let start = rpn.tokens().iter().map(|token| token.span.start).min();
    let end = rpn.tokens().iter().map(|token| token.span.end).max();
    match (start, end) {
        (Some(start), Some(end)) => vec![start..end],
        _ => Vec::new(),
    }
}
