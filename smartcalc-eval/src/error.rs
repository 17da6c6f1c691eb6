//! Error kinds produced while evaluating a compiled expression.

use smartcalc_error::{build_report, ErrorKind};
use ariadne::Report;
use std::{any::Any, ops::Range};

/// An operator or function was reached with too few values left on the operand stack.
#[derive(Debug, Clone, PartialEq)]
pub struct InsufficientOperands {
    /// The operator or function that could not be applied.
    pub symbol: &'static str,
}

impl ErrorKind for InsufficientOperands {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("not enough operands for `{}`", self.symbol),
            "this operation is missing an operand".to_string(),
            None,
        )
    }
}

/// The right-hand side of a `/` or `mod` evaluated to zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DivisionByZero;

impl ErrorKind for DivisionByZero {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "division by zero".to_string(),
            "the divisor of this operation is zero".to_string(),
            None,
        )
    }
}

/// A function was applied to a value outside its domain.
#[derive(Debug, Clone, PartialEq)]
pub struct OutOfDomain {
    /// The name of the function.
    pub name: &'static str,

    /// The value the function was applied to.
    pub value: f64,
}

impl ErrorKind for OutOfDomain {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            format!("`{}` is not defined for {}", self.name, self.value),
            "the argument of this call is out of range".to_string(),
            Some(match self.name {
                "asin" | "acos" => format!("`{}` accepts arguments between -1 and 1", self.name),
                "sqrt" => "`sqrt` accepts non-negative arguments".to_string(),
                _ => format!("`{}` accepts positive arguments", self.name),
            }),
        )
    }
}

/// Evaluation finished with no value, or more than one, left on the operand stack.
#[derive(Debug, Clone, PartialEq)]
pub struct MalformedExpression;

impl ErrorKind for MalformedExpression {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<'a, (&'a str, Range<usize>)> {
        build_report(
            src_id,
            spans,
            "malformed expression".to_string(),
            String::new(),
            Some("the expression does not reduce to a single value".to_string()),
        )
    }
}
