use std::f64::consts;

use log::{debug, warn};

use crate::{
    ast::{Element, Expr},
    interpreter::evaluator::{arithmetic, dist, function, operator::Operator},
};

/// Evaluates an expression tree to a number.
///
/// Numeric leaves return their value, constants return their value without
/// looking at any operands, and operators evaluate their operands in order
/// and combine them.
///
/// Evaluation never fails: an unknown tag or an operand count the operator
/// cannot use produces `NaN`, which then propagates through any enclosing
/// arithmetic. Unknown tags are reported with a `warn` log record.
///
/// # Example
/// ```
/// use cpncalc::{evaluate, interpreter::parser::core::parse_line};
///
/// let tree = parse_line("( * ( + 4 5 8 3 -10 ) 7 ( / 6 4 ) 18 )").unwrap();
/// assert_eq!(evaluate(&tree), 1890.0);
///
/// let tree = parse_line("(+ 1 (foo 2))").unwrap();
/// assert!(evaluate(&tree).is_nan());
/// ```
#[must_use]
pub fn evaluate(expr: &Expr) -> f64 {
    let tag = match &expr.element {
        Element::Number(n) => return *n,
        Element::Operator(tag) => tag,
    };

    let Some(op) = Operator::from_tag(tag) else {
        warn!("unknown operator '{tag}'");
        return f64::NAN;
    };

    let arity = op.arity();
    if !arity.check(expr.arity()) {
        debug!("'{tag}' expects {arity} operands, got {}", expr.arity());
        return f64::NAN;
    }

    apply(op, expr)
}

/// Evaluates an optional node. A missing node evaluates to `NaN`.
///
/// This is the entry point for callers holding a possibly absent subtree,
/// such as the result of [`Expr::child`]. [`evaluate`] itself never looks up
/// a child that is not there, since operand counts are checked first.
///
/// ```
/// use cpncalc::{ast::Expr, interpreter::evaluator::core::evaluate_opt};
///
/// let tree = Expr::operator("sqrt", vec![Expr::number(9.0)]);
///
/// assert_eq!(evaluate_opt(tree.child(0)), 9.0);
/// assert!(evaluate_opt(tree.child(1)).is_nan());
/// ```
#[must_use]
pub fn evaluate_opt(expr: Option<&Expr>) -> f64 {
    expr.map_or(f64::NAN, evaluate)
}

/// Applies a known operator to the node's operands.
fn apply(op: Operator, expr: &Expr) -> f64 {
    match op {
        Operator::Pi => consts::PI,
        Operator::E => consts::E,
        Operator::Add => arithmetic::sum(&operands(expr)),
        Operator::Subtract => arithmetic::difference(&operands(expr)),
        Operator::Multiply => arithmetic::product(&operands(expr)),
        Operator::Divide => arithmetic::quotient(&operands(expr)),
        Operator::Avg => arithmetic::average(&operands(expr)),
        Operator::Sqrt => function::sqrt(&operands(expr)),
        Operator::Ln => function::ln(&operands(expr)),
        Operator::Sin => function::sin(&operands(expr)),
        Operator::Cos => function::cos(&operands(expr)),
        Operator::Tan => function::tan(&operands(expr)),
        Operator::Log => function::log(&operands(expr)),
        Operator::Dist => dist::dist(&operands(expr)),
    }
}

/// Evaluates every operand of a node, in source order.
fn operands(expr: &Expr) -> Vec<f64> {
    expr.children.iter().map(evaluate).collect()
}
