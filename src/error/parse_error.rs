use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing.
///
/// Columns are 1-based character offsets into the line being parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found a token that cannot appear at this position.
    #[error("Error at column {column}: Unexpected token '{token}'.")]
    UnexpectedToken {
        /// The offending lexeme.
        token:  String,
        /// Where the token starts.
        column: usize,
    },
    /// Ran out of tokens while an expression or a `)` was still expected.
    #[error("Unexpected end of input.")]
    UnexpectedEndOfInput,
    /// A complete expression was followed by more tokens.
    ///
    /// A line holds exactly one expression, so `(+ 1 2) 3` is rejected here
    /// instead of evaluating to 3 and silently dropping the `3`.
    #[error("Error at column {column}: Extra tokens after expression, starting at '{token}'.")]
    UnexpectedTrailingTokens {
        /// The first leftover token.
        token:  String,
        /// Where the leftover token starts.
        column: usize,
    },
}

