pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows
/// the lexer pass to look back and ahead while classifying tokens.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(Ok(kind)) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Num, "1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, "2"),
            ],
        );
    }

    #[test]
    fn number_runs() {
        compare_tokens(
            "2.543e+2 1.2ee-3 .5",
            [
                (TokenKind::Num, "2.543e+2"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, "1.2ee-3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, ".5"),
            ],
        );
    }

    #[test]
    fn sign_ends_number_run() {
        compare_tokens(
            "1e+3+4",
            [
                (TokenKind::Num, "1e+3"),
                (TokenKind::Add, "+"),
                (TokenKind::Num, "4"),
            ],
        );
    }

    #[test]
    fn adjacent_atoms() {
        compare_tokens(
            "2xcos(3x)",
            [
                (TokenKind::Num, "2"),
                (TokenKind::Name, "xcos"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Num, "3"),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn unknown_symbols() {
        compare_tokens(
            "3 , $",
            [
                (TokenKind::Num, "3"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, ","),
                (TokenKind::Whitespace, " "),
                (TokenKind::Symbol, "$"),
            ],
        );
    }
}
