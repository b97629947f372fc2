//! # cpncalc
//!
//! cpncalc evaluates arithmetic written in Cambridge Polish Notation: fully
//! parenthesized prefix expressions where every operator takes a variable
//! number of operands, such as `( * ( + 4 5 8 3 -10 ) 7 ( / 6 4 ) 18 )`.
//!
//! A line is lexed, parsed into an n-ary tree and then evaluated to an `f64`.
//! Only malformed input is an error; an unknown operator or an operand count
//! an operator cannot use evaluates to `NaN`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the expression tree.
///
/// This module declares `Expr`, a node holding either a number or an
/// operator tag together with its ordered operands. Trees are built by the
/// parser, evaluated once and then dropped.
pub mod ast;
/// Provides the error type for lexing and parsing.
///
/// # Responsibilities
/// - Distinguishes premature end of input from misplaced and leftover tokens.
/// - Carries the column of the offending token for one-line diagnostics.
pub mod error;
/// Ties together lexing, parsing and evaluation.
///
/// # Responsibilities
/// - Tokenizes a line into numbers, parentheses and symbols.
/// - Builds the expression tree by recursive descent.
/// - Evaluates the tree with per-operator rules.
pub mod interpreter;
/// Installs the stderr logger that carries evaluator diagnostics.
pub mod logging;
/// The read-eval-print loop.
///
/// Reads one line at a time, evaluates it and prints the result or a
/// diagnostic, without letting a bad line end the session.
pub mod repl;

pub use crate::{
    error::ParseError,
    interpreter::{
        evaluator::core::{evaluate, evaluate_opt},
        parser::core::{parse_expression, parse_line},
    },
};

/// Parses and evaluates a single line of CPN.
///
/// # Errors
/// Returns a [`ParseError`] if the line is not exactly one well-formed
/// expression. Evaluation itself cannot fail.
///
/// # Examples
/// ```
/// use cpncalc::evaluate_line;
///
/// assert_eq!(evaluate_line("(dist 0 0 3 4)").unwrap(), 5.0);
/// assert!(evaluate_line("(avg)").unwrap().is_nan());
///
/// // An unterminated expression is a parse error.
/// assert!(evaluate_line("(+ 1 2").is_err());
/// ```
pub fn evaluate_line(source: &str) -> Result<f64, ParseError> {
    let expr = parse_line(source)?;
    Ok(evaluate(&expr))
}
