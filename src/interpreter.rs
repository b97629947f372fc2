/// The evaluator module computes the value of an expression tree.
///
/// The evaluator walks the tree produced by the parser, dispatches on each
/// node's operator and folds the evaluated operands. Invalid operators and
/// operand counts resolve to `NaN` rather than to an error.
///
/// # Responsibilities
/// - Maps operator tags to a closed set of known operators.
/// - Implements the variadic arithmetic, functions and constants.
/// - Reports unknown operators as non-fatal diagnostics.
pub mod evaluator;
/// The lexer module tokenizes a line of input.
///
/// Produces numbers, parentheses and symbols, each paired with the column it
/// starts at so the parser can point at the offending token.
pub mod lexer;
/// The parser module builds the expression tree from tokens.
///
/// # Responsibilities
/// - Converts tokens into an n-ary tree, leaves first.
/// - Reports unbalanced parentheses and premature end of input.
/// - Leaves all operator and arity checks to the evaluator.
pub mod parser;
