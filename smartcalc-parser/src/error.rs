//! Error kinds produced while scanning an expression and converting it to postfix order.

use smartcalc_error::{build_report, ErrorKind};
use ariadne::Report;
use std::{any::Any, ops::Range};

/// The character cannot appear in an expression.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidCharacter {
    /// The character that could not be scanned.
    pub ch: char,
}

impl ErrorKind for InvalidCharacter {
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
            format!("invalid character: `{}`", self.ch),
            "this character".to_string(),
            None,
        )
    }
}

/// The number literal is malformed.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidNumber {
    /// The text of the malformed literal.
    pub literal: String,
}

impl ErrorKind for InvalidNumber {
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
            format!("invalid number: `{}`", self.literal),
            "this literal".to_string(),
            Some("a number may contain one dot and one exponent marker, such as `2.5e-3`".to_string()),
        )
    }
}

/// The run of letters is not a known keyword.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidToken {
    /// The name that could not be resolved.
    pub name: String,
}

impl ErrorKind for InvalidToken {
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
            format!("invalid token: `{}`", self.name),
            "this name".to_string(),
            Some("the known names are `x`, `mod`, and the functions \
                `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `sqrt`, `ln`, and `log`".to_string()),
        )
    }
}

/// Two values sit next to each other with nothing joining them.
#[derive(Debug, Clone, PartialEq)]
pub struct MissingOperator;

impl ErrorKind for MissingOperator {
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
            "missing an operator between these values".to_string(),
            "this value".to_string(),
            Some("add an operator, such as `*`, between them".to_string()),
        )
    }
}

/// The brackets in the expression do not pair up.
#[derive(Debug, Clone, PartialEq)]
pub struct UnmatchedBracket;

impl ErrorKind for UnmatchedBracket {
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
            "unmatched bracket".to_string(),
            "this bracket has no partner".to_string(),
            None,
        )
    }
}
