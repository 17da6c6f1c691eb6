use std::ops::Range;
use super::{
    func::Func,
    op::{Associativity, BinOpKind, Precedence, UnaryOpKind},
};

/// The different kinds of tokens an expression is made of.
///
/// Each consumer of the token stream matches on this exhaustively, so adding a kind forces the
/// lexer, the postfix converter, and the evaluator to all account for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// A validated number literal, carrying its parsed value.
    Number(f64),

    /// The free variable `x`.
    Variable,

    OpenParen,

    CloseParen,

    /// A unary sign operator.
    Unary(UnaryOpKind),

    /// A binary operator, explicit or inserted implicitly by the lexer.
    Binary(BinOpKind),

    /// A call of one of the builtin functions.
    Func(Func),
}

impl TokenKind {
    /// Returns the precedence and associativity of the token if it is an operator. Brackets and
    /// functions take no part in operator comparisons.
    pub fn op(self) -> Option<(Precedence, Associativity)> {
        match self {
            TokenKind::Unary(op) => Some((op.precedence(), op.associativity())),
            TokenKind::Binary(op) => Some((op.precedence(), op.associativity())),
            _ => None,
        }
    }
}

/// A token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// The region of the source code that this token originated from. Implicitly inserted
    /// multiplications carry the empty region between the tokens they join.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,
}
