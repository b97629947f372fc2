/// Applies a single-operand `f64` method to an operand slice.
///
/// The generated functions return `NaN` unless exactly one operand is given.
///
/// # Example
/// ```
/// use cpncalc::interpreter::evaluator::function::{sin, sqrt};
///
/// assert_eq!(sqrt(&[16.0]), 4.0);
/// assert_eq!(sin(&[0.0]), 0.0);
/// assert!(sqrt(&[1.0, 2.0]).is_nan());
/// ```
macro_rules! unary_function {
    ($fname:ident, $real_fn:ident) => {
        #[must_use]
        pub fn $fname(args: &[f64]) -> f64 {
            match args {
                [x] => x.$real_fn(),
                _ => f64::NAN,
            }
        }
    };
}

unary_function!(sqrt, sqrt);
unary_function!(ln, ln);
unary_function!(sin, sin);
unary_function!(cos, cos);
unary_function!(tan, tan);

/// Computes a logarithm.
///
/// - With one operand: the base-10 logarithm of that operand.
/// - With two operands `base` and `value`: `ln(value) / ln(base)`.
///
/// Any other operand count yields `NaN`.
///
/// # Example
/// ```
/// use cpncalc::interpreter::evaluator::function::log;
///
/// assert!((log(&[1000.0]) - 3.0).abs() < 1e-12);
/// assert!((log(&[2.0, 8.0]) - 3.0).abs() < 1e-12);
/// assert!(log(&[]).is_nan());
/// ```
#[must_use]
pub fn log(args: &[f64]) -> f64 {
    match args {
        [value] => value.log10(),
        [base, value] => value.ln() / base.ln(),
        _ => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{E, PI};

    use super::*;

    #[test]
    fn unary_functions() {
        assert!((ln(&[E]) - 1.0).abs() < 1e-12);
        assert_eq!(cos(&[0.0]), 1.0);
        assert!((tan(&[PI / 4.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn unary_functions_reject_other_counts() {
        assert!(ln(&[]).is_nan());
        assert!(cos(&[1.0, 2.0]).is_nan());
    }

    #[test]
    fn sqrt_of_negative_is_nan() {
        assert!(sqrt(&[-4.0]).is_nan());
    }

    #[test]
    fn log_base_comes_first() {
        assert!((log(&[10.0, 100.0]) - 2.0).abs() < 1e-12);
        assert!((log(&[100.0, 10.0]) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn log_with_too_many_operands() {
        assert!(log(&[2.0, 4.0, 8.0]).is_nan());
    }
}
