/// Entry points of the recursive-descent parser.
///
/// Dispatches on the next token to build numeric leaves, bare names and
/// parenthesized operations, and provides the whole-line parser used by the
/// shell.
pub mod core;

/// Parenthesized operations.
///
/// Handles `( TAG expr* )`: reads the operator tag and collects operands until
/// the matching close paren.
pub mod operation;
