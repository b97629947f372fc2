/// Adds up all operands. No operands sum to `0`.
///
/// ```
/// use cpncalc::interpreter::evaluator::arithmetic::sum;
///
/// assert_eq!(sum(&[4.0, 5.0, 8.0, 3.0, -10.0]), 10.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
#[must_use]
pub fn sum(args: &[f64]) -> f64 {
    args.iter().sum()
}

/// Multiplies all operands. No operands multiply to `1`.
#[must_use]
pub fn product(args: &[f64]) -> f64 {
    args.iter().product()
}

/// Subtracts every remaining operand from the first.
///
/// A single operand is returned unchanged; `(- 7)` is `7`, not `-7`.
/// Without operands the result is `NaN`.
///
/// ```
/// use cpncalc::interpreter::evaluator::arithmetic::difference;
///
/// assert_eq!(difference(&[10.0, 2.0, 3.0]), 5.0);
/// assert_eq!(difference(&[7.0]), 7.0);
/// assert!(difference(&[]).is_nan());
/// ```
#[must_use]
pub fn difference(args: &[f64]) -> f64 {
    match args.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, x| acc - x),
        None => f64::NAN,
    }
}

/// Divides the first operand by every remaining operand.
///
/// A single operand is returned unchanged. Without operands the result is
/// `NaN`. Division by zero follows IEEE 754.
#[must_use]
pub fn quotient(args: &[f64]) -> f64 {
    match args.split_first() {
        Some((first, rest)) => rest.iter().fold(*first, |acc, x| acc / x),
        None => f64::NAN,
    }
}

/// Arithmetic mean. No operands average to `NaN`.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn average(args: &[f64]) -> f64 {
    sum(args) / args.len() as f64
}
