use logos::Logos;
use std::ops::Range;

/// The different kinds of tokens that can be produced by the tokenizer.
///
/// These are raw lexical classes only. Deciding whether a `-` negates or subtracts, whether a
/// run of letters is a keyword, or whether a [`Num`](TokenKind::Num) run is a well-formed
/// literal is the job of the lexer pass built on top of this.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    #[regex(r"[a-zA-Z]+")]
    Name,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    /// A maximal run of number-literal characters: digits and dots, plus exponent markers
    /// (`e`/`E`) each optionally followed by one sign. The run is deliberately permissive
    /// (`1.2.3` and `1.2ee-3` both match) so that a malformed literal is captured whole and
    /// rejected with its full text.
    #[regex(r"[0-9.]([0-9.]|[eE][+-]?)*")]
    Num,

    #[regex(r".", priority = 0)]
    Symbol,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}

impl Token<'_> {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(&self) -> bool {
        self.kind.is_whitespace()
    }
}
