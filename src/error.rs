/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing and parsing a line
/// of input. These are the only failures the core reports as errors; problems
/// found during evaluation resolve to `NaN` instead.
pub mod parse_error;

pub use parse_error::ParseError;
