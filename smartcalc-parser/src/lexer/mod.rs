pub mod func;
pub mod op;
pub mod token;

use crate::{
    error::{InvalidCharacter, InvalidNumber, InvalidToken, MissingOperator},
    tokenizer::{self, token::{Token as RawToken, TokenKind as RawTokenKind}},
};
use func::Func;
use op::{BinOpKind, UnaryOpKind};
use smartcalc_error::Error;
use std::ops::Range;
use token::{Token, TokenKind};

/// Scans the source string into the token stream consumed by the postfix converter.
///
/// Scanning validates number literals and keywords, resolves the sign operators, and inserts
/// the multiplications the source leaves implicit. It fails on the first malformed piece of
/// input with no partial result.
pub fn scan(source: &str) -> Result<Vec<Token>, Error> {
    Lexer::new(source).scan()
}

/// The lexer pass, walking the raw tokens left to right. Classification of a raw token often
/// depends on what was produced just before it (a `-` after `(` negates, a number after `)`
/// multiplies), so the pass keeps its output available for lookback.
struct Lexer<'source> {
    /// The raw tokens produced by the tokenizer.
    raw: Box<[RawToken<'source>]>,

    /// The index of the **next** raw token to be consumed.
    cursor: usize,

    /// The tokens produced so far.
    out: Vec<Token>,
}

impl<'source> Lexer<'source> {
    fn new(source: &'source str) -> Self {
        Self {
            raw: tokenizer::tokenize_complete(source),
            cursor: 0,
            out: Vec::new(),
        }
    }

    fn scan(mut self) -> Result<Vec<Token>, Error> {
        while self.cursor < self.raw.len() {
            let raw = self.raw[self.cursor].clone();
            self.cursor += 1;

            match raw.kind {
                RawTokenKind::Num => self.number(&raw)?,
                RawTokenKind::Name => self.name(&raw)?,
                RawTokenKind::Add => self.sign(&raw, UnaryOpKind::Pos, BinOpKind::Add),
                RawTokenKind::Sub => self.sign(&raw, UnaryOpKind::Neg, BinOpKind::Sub),
                RawTokenKind::Mul => self.push(raw.span.clone(), TokenKind::Binary(BinOpKind::Mul)),
                RawTokenKind::Div => self.push(raw.span.clone(), TokenKind::Binary(BinOpKind::Div)),
                RawTokenKind::Exp => self.push(raw.span.clone(), TokenKind::Binary(BinOpKind::Exp)),
                RawTokenKind::OpenParen => {
                    if matches!(
                        self.prev_kind(),
                        Some(TokenKind::Number(_) | TokenKind::Variable | TokenKind::CloseParen),
                    ) {
                        self.push_implicit_mul(raw.span.start);
                    }
                    self.push(raw.span.clone(), TokenKind::OpenParen);
                },
                RawTokenKind::CloseParen => self.push(raw.span.clone(), TokenKind::CloseParen),
                RawTokenKind::Whitespace => self.check_fused_atoms()?,
                RawTokenKind::Symbol => {
                    return Err(Error::new(
                        vec![raw.span.clone()],
                        InvalidCharacter { ch: raw.lexeme.chars().next().unwrap_or_default() },
                    ));
                },
            }
        }

        Ok(self.out)
    }

    /// The kind of the last token produced, if any.
    fn prev_kind(&self) -> Option<TokenKind> {
        self.out.last().map(|token| token.kind)
    }

    fn push(&mut self, span: Range<usize>, kind: TokenKind) {
        self.out.push(Token { span, kind });
    }

    /// Pushes a multiplication spanning the empty region at `at`, standing in for the `*` the
    /// source omitted between two adjacent atoms.
    fn push_implicit_mul(&mut self, at: usize) {
        self.push(at..at, TokenKind::Binary(BinOpKind::Mul));
    }

    /// Validates a raw number run and produces its token. A number directly after `)` or `x`
    /// multiplies what came before it.
    fn number(&mut self, raw: &RawToken) -> Result<(), Error> {
        let Some(value) = validate_number(raw.lexeme) else {
            return Err(Error::new(
                vec![raw.span.clone()],
                InvalidNumber { literal: raw.lexeme.to_string() },
            ));
        };

        if matches!(self.prev_kind(), Some(TokenKind::CloseParen | TokenKind::Variable)) {
            self.push_implicit_mul(raw.span.start);
        }
        self.push(raw.span.clone(), TokenKind::Number(value));
        Ok(())
    }

    /// Splits a raw run of letters into keywords and produces their tokens. A variable or
    /// function directly after an operand multiplies it, except that two variables in a row
    /// (`xx`) are rejected; `mod` joins its operands itself.
    fn name(&mut self, raw: &RawToken) -> Result<(), Error> {
        let mut rest = raw.lexeme;
        let mut start = raw.span.start;

        while !rest.is_empty() {
            let piece = split_keyword(rest);
            let span = start..start + piece.len();

            if piece == "x" {
                match self.prev_kind() {
                    Some(TokenKind::Variable) => {
                        let mut spans = vec![span];
                        if let Some(prev) = self.out.last() {
                            spans.insert(0, prev.span.clone());
                        }
                        return Err(Error::new(spans, MissingOperator));
                    },
                    Some(TokenKind::Number(_) | TokenKind::CloseParen) => {
                        self.push_implicit_mul(span.start);
                    },
                    _ => (),
                }
                self.push(span, TokenKind::Variable);
            } else if piece == "mod" {
                self.push(span, TokenKind::Binary(BinOpKind::Mod));
            } else if let Some(func) = Func::from_keyword(piece) {
                if matches!(
                    self.prev_kind(),
                    Some(TokenKind::Number(_) | TokenKind::Variable | TokenKind::CloseParen),
                ) {
                    self.push_implicit_mul(span.start);
                }
                self.push(span, TokenKind::Func(func));
            } else {
                return Err(Error::new(vec![span], InvalidToken { name: piece.to_string() }));
            }

            rest = &rest[piece.len()..];
            start += piece.len();
        }

        Ok(())
    }

    /// Produces a `+` or `-` token. The sign is unary when it opens the expression, a bracket
    /// group, or the right-hand side of a binary operator; everywhere else it is binary.
    fn sign(&mut self, raw: &RawToken, unary: UnaryOpKind, binary: BinOpKind) {
        let kind = match self.prev_kind() {
            None | Some(TokenKind::OpenParen | TokenKind::Binary(_)) => TokenKind::Unary(unary),
            _ => TokenKind::Binary(binary),
        };
        self.push(raw.span.clone(), kind);
    }

    /// Whitespace never joins two atoms: a digit or variable on both sides of a space run is
    /// missing its operator, not one long operand.
    fn check_fused_atoms(&mut self) -> Result<(), Error> {
        let operand_before = matches!(
            self.prev_kind(),
            Some(TokenKind::Number(_) | TokenKind::Variable),
        );
        let operand_after = self.raw.get(self.cursor).is_some_and(|next| {
            next.kind == RawTokenKind::Num
                || (next.kind == RawTokenKind::Name && next.lexeme.starts_with('x'))
        });

        if operand_before && operand_after {
            let mut spans = Vec::new();
            if let Some(prev) = self.out.last() {
                spans.push(prev.span.clone());
            }
            if let Some(next) = self.raw.get(self.cursor) {
                spans.push(next.span.clone());
            }
            return Err(Error::new(spans, MissingOperator));
        }

        Ok(())
    }
}

/// Checks a raw number run against the literal grammar and parses its value. A literal may
/// contain one dot (not within the exponent) and one exponent marker with an optional sign,
/// the marker may not open or close the literal, and the value must be finite.
fn validate_number(lexeme: &str) -> Option<f64> {
    let mut has_dot = false;
    let mut has_e = false;
    let mut has_sign = false;

    for ch in lexeme.chars() {
        match ch {
            '0'..='9' => (),
            '.' if !has_dot && !has_e => has_dot = true,
            'e' | 'E' if !has_e => has_e = true,
            '+' | '-' if has_e && !has_sign => has_sign = true,
            _ => return None,
        }
    }

    if lexeme == "." || lexeme.starts_with(".e") || lexeme.starts_with(".E") {
        return None;
    }
    if lexeme.ends_with(['e', 'E']) {
        return None;
    }

    lexeme.parse().ok().filter(|value: &f64| value.is_finite())
}

/// Returns the leading keyword piece of a run of letters. The scan stops as soon as the
/// accumulated prefix reads `x` or `mod`, so `xcos` splits into `x` and `cos`, and `mod` is
/// never swallowed into a longer name.
fn split_keyword(rest: &str) -> &str {
    for end in 1..rest.len() {
        let prefix = &rest[..end];
        if prefix == "x" || prefix == "mod" {
            return prefix;
        }
    }
    rest
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Scans the input and strips the spans, leaving just the token kinds.
    fn kinds(input: &str) -> Vec<TokenKind> {
        scan(input)
            .unwrap()
            .into_iter()
            .map(|token| token.kind)
            .collect()
    }

    /// Asserts that scanning the input fails with the given error kind.
    fn assert_scan_fails<T: 'static>(input: &str) {
        let err = scan(input).unwrap_err();
        assert!(
            err.kind.as_any().is::<T>(),
            "scanning `{}` produced the wrong error: {:?}",
            input,
            err.kind,
        );
    }

    #[test]
    fn plain_arithmetic() {
        assert_eq!(kinds("1 + 2*3"), vec![
            TokenKind::Number(1.0),
            TokenKind::Binary(BinOpKind::Add),
            TokenKind::Number(2.0),
            TokenKind::Binary(BinOpKind::Mul),
            TokenKind::Number(3.0),
        ]);
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(kinds("2.543e+2"), vec![TokenKind::Number(254.3)]);
        assert_eq!(kinds("1E-2"), vec![TokenKind::Number(0.01)]);
        assert_eq!(kinds(".5"), vec![TokenKind::Number(0.5)]);
    }

    #[test]
    fn unary_signs() {
        assert_eq!(kinds("-1+-2"), vec![
            TokenKind::Unary(UnaryOpKind::Neg),
            TokenKind::Number(1.0),
            TokenKind::Binary(BinOpKind::Add),
            TokenKind::Unary(UnaryOpKind::Neg),
            TokenKind::Number(2.0),
        ]);
        assert_eq!(kinds("( -5)"), vec![
            TokenKind::OpenParen,
            TokenKind::Unary(UnaryOpKind::Neg),
            TokenKind::Number(5.0),
            TokenKind::CloseParen,
        ]);
        assert_eq!(kinds("2^-3"), vec![
            TokenKind::Number(2.0),
            TokenKind::Binary(BinOpKind::Exp),
            TokenKind::Unary(UnaryOpKind::Neg),
            TokenKind::Number(3.0),
        ]);
    }

    #[test]
    fn implicit_multiplication() {
        assert_eq!(kinds("2(3)5"), vec![
            TokenKind::Number(2.0),
            TokenKind::Binary(BinOpKind::Mul),
            TokenKind::OpenParen,
            TokenKind::Number(3.0),
            TokenKind::CloseParen,
            TokenKind::Binary(BinOpKind::Mul),
            TokenKind::Number(5.0),
        ]);
        assert_eq!(kinds("2xcos(3x)x4x"), vec![
            TokenKind::Number(2.0),
            TokenKind::Binary(BinOpKind::Mul),
            TokenKind::Variable,
            TokenKind::Binary(BinOpKind::Mul),
            TokenKind::Func(Func::Cos),
            TokenKind::OpenParen,
            TokenKind::Number(3.0),
            TokenKind::Binary(BinOpKind::Mul),
            TokenKind::Variable,
            TokenKind::CloseParen,
            TokenKind::Binary(BinOpKind::Mul),
            TokenKind::Variable,
            TokenKind::Binary(BinOpKind::Mul),
            TokenKind::Number(4.0),
            TokenKind::Binary(BinOpKind::Mul),
            TokenKind::Variable,
        ]);
    }

    #[test]
    fn keyword_splitting() {
        assert_eq!(kinds("2modx"), vec![
            TokenKind::Number(2.0),
            TokenKind::Binary(BinOpKind::Mod),
            TokenKind::Variable,
        ]);
        assert_eq!(kinds("x cos(1)"), vec![
            TokenKind::Variable,
            TokenKind::Binary(BinOpKind::Mul),
            TokenKind::Func(Func::Cos),
            TokenKind::OpenParen,
            TokenKind::Number(1.0),
            TokenKind::CloseParen,
        ]);
    }

    #[test]
    fn implicit_mul_spans_are_empty() {
        let tokens = scan("2x").unwrap();
        assert_eq!(tokens[1].kind, TokenKind::Binary(BinOpKind::Mul));
        assert_eq!(tokens[1].span, 1..1);
    }

    #[test]
    fn invalid_characters() {
        assert_scan_fails::<InvalidCharacter>("1 , 2");
        assert_scan_fails::<InvalidCharacter>("2 + _");
    }

    #[test]
    fn invalid_numbers() {
        assert_scan_fails::<InvalidNumber>("2 + 5.5.5");
        assert_scan_fails::<InvalidNumber>("1.2ee-3");
        assert_scan_fails::<InvalidNumber>("1.2e");
        assert_scan_fails::<InvalidNumber>(".e1");
        assert_scan_fails::<InvalidNumber>(".");
        assert_scan_fails::<InvalidNumber>("1e999");
    }

    #[test]
    fn invalid_names() {
        assert_scan_fails::<InvalidToken>("5*a");
        assert_scan_fails::<InvalidToken>("sinb(1)");
        assert_scan_fails::<InvalidToken>("5fmod4");
        assert_scan_fails::<InvalidToken>("3mob2");

        let err = scan("pow(3,2)").unwrap_err();
        let kind = err.kind.as_any().downcast_ref::<InvalidToken>();
        assert_eq!(kind, Some(&InvalidToken { name: "pow".to_string() }));
    }

    #[test]
    fn missing_operators() {
        assert_scan_fails::<MissingOperator>("5 7");
        assert_scan_fails::<MissingOperator>("x 55");
        assert_scan_fails::<MissingOperator>("2 x");
        assert_scan_fails::<MissingOperator>("xx");
    }

    #[test]
    fn number_grammar() {
        assert_eq!(validate_number("1"), Some(1.0));
        assert_eq!(validate_number("1."), Some(1.0));
        assert_eq!(validate_number("1e3"), Some(1000.0));
        assert_eq!(validate_number("2.5E-1"), Some(0.25));
        assert_eq!(validate_number(".."), None);
        assert_eq!(validate_number("1e2e3"), None);
        assert_eq!(validate_number("1e+"), None);
    }
}
