/// Tree evaluation entry points.
///
/// Walks an expression tree, resolves operator tags and folds the evaluated
/// operands. Invalid input never fails here; it produces `NaN`.
pub mod core;

/// The table of known operators.
///
/// Declares every operator and constant tag together with the operand counts
/// it accepts.
pub mod operator;

/// Variadic arithmetic: `+`, `-`, `*`, `/` and `avg`.
pub mod arithmetic;

/// Single-operand functions and `log`.
pub mod function;

/// Euclidean distance between 2-D and 3-D points.
pub mod dist;
