use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::operation::parse_operation,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one CPN expression.
///
/// Grammar:
/// ```text
///     expr := NUMBER
///           | "(" TAG expr* ")"
///           | NAME
/// ```
/// Nothing about the operator is checked here: any tag and any number of
/// operands is accepted, and bare names like `PI` become operator nodes with
/// no children. Tokens after the expression are left in the stream.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, column)` pairs.
///
/// # Returns
/// The parsed expression tree.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the stream runs out before the expression is
///   complete.
/// - `UnexpectedToken` for a `)` where an expression should start.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Number(n), _) => {
            let value = *n;
            tokens.next();
            Ok(Expr::number(value))
        },
        (Token::LParen, _) => parse_operation(tokens),
        (Token::Symbol(name), _) => {
            let node = Expr::constant(name.clone());
            tokens.next();
            Ok(node)
        },
        (tok @ Token::RParen, column) => {
            Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                              column: *column, })
        },
    }
}

/// Parses a complete line of input into a single expression.
///
/// Unlike [`parse_expression`], the whole line must be consumed.
///
/// # Errors
/// - `UnexpectedEndOfInput` for an empty line or an unterminated expression.
/// - `UnexpectedToken` for a misplaced parenthesis.
/// - `UnexpectedTrailingTokens` if anything follows the expression.
///
/// # Example
/// ```
/// use cpncalc::{error::ParseError, interpreter::parser::core::parse_line};
///
/// let expr = parse_line("( * ( + 4 5 8 3 -10 ) 7 ( / 6 4 ) 18 )").unwrap();
/// assert_eq!(expr.children.len(), 4);
///
/// assert_eq!(parse_line("(+ 1 2"), Err(ParseError::UnexpectedEndOfInput));
/// ```
pub fn parse_line(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter)?;

    if let Some((tok, column)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:  tok.to_string(),
                                                          column: *column, });
    }

    Ok(expr)
}
