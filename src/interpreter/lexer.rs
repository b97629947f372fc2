use std::fmt;

use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token of a CPN expression.
///
/// Tokens are separated by whitespace, except that parentheses always stand
/// on their own, so `(+ 1 2)` and `( + 1 2 )` lex identically.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `42`, `-10`, `.5`, `6.` or `2.1e-10`.
    #[regex(r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?", parse_number, priority = 3)]
    Number(f64),
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Operator and constant names such as `+`, `sqrt` or `PI`, and any
    /// other run of characters that is not a number.
    #[regex(r"[^ \t\r\n\f()]+", |lex| lex.slice().to_string())]
    Symbol(String),
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Symbol(s) => write!(f, "{s}"),
        }
    }
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value.
/// - `None`: If the slice is not a valid float, which logos reports as a
///   lexing error.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Splits a line of input into tokens paired with their 1-based column.
///
/// # Errors
/// Returns [`ParseError::UnexpectedToken`] for a lexeme that cannot be
/// tokenized.
///
/// # Example
/// ```
/// use cpncalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(sqrt 16)").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::LParen, 1),
///                 (Token::Symbol("sqrt".into()), 2),
///                 (Token::Number(16.0), 7),
///                 (Token::RParen, 9)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let column = column_of(source, lexer.span().start);
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         column });
            },
        }
    }

    Ok(tokens)
}

/// Converts a byte offset into a 1-based character column.
fn column_of(source: &str, offset: usize) -> usize {
    source[..offset].chars().count() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn signed_and_exponent_numbers() {
        assert_eq!(kinds("-10 +3.5 .5 6. 2e-3"),
                   vec![Token::Number(-10.0),
                        Token::Number(3.5),
                        Token::Number(0.5),
                        Token::Number(6.0),
                        Token::Number(0.002)]);
    }

    #[test]
    fn operators_are_symbols() {
        assert_eq!(kinds("+ - * / PI"),
                   vec![Token::Symbol("+".into()),
                        Token::Symbol("-".into()),
                        Token::Symbol("*".into()),
                        Token::Symbol("/".into()),
                        Token::Symbol("PI".into())]);
    }

    #[test]
    fn parens_split_without_whitespace() {
        assert_eq!(kinds("(+ 1 2)"),
                   vec![Token::LParen,
                        Token::Symbol("+".into()),
                        Token::Number(1.0),
                        Token::Number(2.0),
                        Token::RParen]);
    }

    #[test]
    fn number_followed_by_letters_is_a_symbol() {
        assert_eq!(kinds("1e5x"), vec![Token::Symbol("1e5x".into())]);
    }

    #[test]
    fn columns_count_characters() {
        let tokens = tokenize("  ( π 1 )").unwrap();
        let columns: Vec<usize> = tokens.iter().map(|(_, c)| *c).collect();
        assert_eq!(columns, vec![3, 5, 7, 9]);
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(tokenize(" \t ").unwrap().is_empty());
    }
}
