//! Conversion of the scanned token stream into postfix (reverse Polish) order, using the
//! shunting-yard algorithm.

use crate::{
    error::UnmatchedBracket,
    lexer::{
        self,
        op::{Associativity, Precedence},
        token::{Token, TokenKind},
    },
};
use smartcalc_error::Error;

/// An expression compiled to postfix order.
///
/// An `Rpn` is immutable once built: evaluating it many times (for instance once per sample
/// when plotting) re-reads the same tokens and needs no further parsing. It carries no
/// interior state, so sharing it across threads read-only is sound; it provides no
/// synchronization of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct Rpn {
    tokens: Box<[Token]>,
}

impl Rpn {
    /// Scans the source expression and converts it to postfix order.
    pub fn compile(source: &str) -> Result<Rpn, Error> {
        convert(lexer::scan(source)?)
    }

    /// The tokens of the expression in postfix order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }
}

/// Reorders the scanned token stream into postfix order.
///
/// Operands stream straight to the output; operators wait on a pending stack until an operator
/// arrives that binds no tighter than they do. Functions and open brackets also wait there,
/// released when the matching close bracket is consumed, so a function applies to exactly its
/// bracketed argument.
pub fn convert(tokens: Vec<Token>) -> Result<Rpn, Error> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut pending: Vec<Token> = Vec::new();

    for token in tokens {
        match token.kind {
            TokenKind::Number(_) | TokenKind::Variable => output.push(token),
            TokenKind::Func(_) | TokenKind::OpenParen => pending.push(token),
            TokenKind::CloseParen => {
                loop {
                    let Some(top) = pending.pop() else {
                        return Err(Error::new(vec![token.span.clone()], UnmatchedBracket));
                    };
                    if top.kind == TokenKind::OpenParen {
                        break;
                    }
                    output.push(top);
                }
                // the bracket group was a function argument; apply the function to it
                if pending.last().is_some_and(|top| matches!(top.kind, TokenKind::Func(_))) {
                    output.extend(pending.pop());
                }
            },
            TokenKind::Unary(op) => push_operator(&mut pending, &mut output, token, op.precedence()),
            TokenKind::Binary(op) => push_operator(&mut pending, &mut output, token, op.precedence()),
        }
    }

    while let Some(top) = pending.pop() {
        match top.kind {
            TokenKind::OpenParen | TokenKind::CloseParen => {
                return Err(Error::new(vec![top.span.clone()], UnmatchedBracket));
            },
            _ => output.push(top),
        }
    }

    Ok(Rpn { tokens: output.into_boxed_slice() })
}

/// Applies the operator rule: pop every pending operator that binds tighter than the incoming
/// one, or equally tight while grouping leftward, then leave the incoming operator pending.
fn push_operator(pending: &mut Vec<Token>, output: &mut Vec<Token>, token: Token, precedence: Precedence) {
    while let Some((top_precedence, top_associativity)) =
        pending.last().and_then(|top| top.kind.op())
    {
        if top_precedence > precedence
            || (top_precedence == precedence && top_associativity == Associativity::Left)
        {
            output.extend(pending.pop());
        } else {
            break;
        }
    }
    pending.push(token);
}
