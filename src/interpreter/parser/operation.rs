use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a parenthesized operation of the form `( TAG expr* )`.
///
/// The token right after `(` is taken as the operator tag, whatever it names.
/// Operands are parsed until the next token is `)`, which is consumed.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `(`.
///
/// # Returns
/// An operator node holding the operands in the order they were written.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the tag, an operand or the closing `)` is
///   missing.
/// - `UnexpectedToken` if the tag slot holds a parenthesis.
pub fn parse_operation<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::LParen, _)) => {},
        Some((tok, column)) => {
            return Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                                     column: *column, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput),
    }

    let tag = parse_operator_tag(tokens)?;
    let mut children = Vec::new();

    loop {
        match tokens.peek() {
            Some((Token::RParen, _)) => {
                tokens.next();
                break;
            },
            Some(_) => children.push(parse_expression(tokens)?),
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    Ok(Expr::operator(tag, children))
}

/// Reads the operator tag that follows an opening parenthesis.
///
/// Symbols are taken verbatim. A number in the tag slot is kept as its text
/// and will fail as an unknown operator when evaluated.
fn parse_operator_tag<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<String>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Symbol(s), _)) => Ok(s.clone()),
        Some((tok @ Token::Number(_), _)) => Ok(tok.to_string()),
        Some((tok, column)) => {
            Err(ParseError::UnexpectedToken { token:  tok.to_string(),
                                              column: *column, })
        },
        None => Err(ParseError::UnexpectedEndOfInput),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parse(source: &str) -> ParseResult<Expr> {
        let tokens = tokenize(source).unwrap();
        parse_operation(&mut tokens.iter().peekable())
    }

    #[test]
    fn operands_in_order() {
        assert_eq!(parse("( dist 0 0 3 4 )").unwrap(),
                   Expr::operator("dist",
                                  vec![Expr::number(0.0),
                                       Expr::number(0.0),
                                       Expr::number(3.0),
                                       Expr::number(4.0)]));
    }

    #[test]
    fn constants_as_operands() {
        assert_eq!(parse("(* 2 PI)").unwrap(),
                   Expr::operator("*", vec![Expr::number(2.0), Expr::constant("PI")]));
    }

    #[test]
    fn numeric_tag_is_kept() {
        assert_eq!(parse("(5 1)").unwrap(), Expr::operator("5", vec![Expr::number(1.0)]));
    }

    #[test]
    fn missing_tag() {
        assert_eq!(parse("("), Err(ParseError::UnexpectedEndOfInput));
        assert_eq!(parse("( )"),
                   Err(ParseError::UnexpectedToken { token:  ")".into(),
                                                     column: 3, }));
        assert_eq!(parse("((+ 1) 2)"),
                   Err(ParseError::UnexpectedToken { token:  "(".into(),
                                                     column: 2, }));
    }

    #[test]
    fn missing_close_paren() {
        assert_eq!(parse("(+ 1 2"), Err(ParseError::UnexpectedEndOfInput));
    }
}
