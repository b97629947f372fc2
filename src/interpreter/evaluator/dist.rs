/// Euclidean distance between two points given as flat coordinates.
///
/// - Four operands `x1 y1 x2 y2` describe two 2-D points.
/// - Six operands `x1 y1 z1 x2 y2 z2` describe two 3-D points.
///
/// Any other operand count yields `NaN`.
///
/// # Example
/// ```
/// use cpncalc::interpreter::evaluator::dist::dist;
///
/// assert_eq!(dist(&[0.0, 0.0, 3.0, 4.0]), 5.0);
/// assert_eq!(dist(&[0.0, 0.0, 0.0, 1.0, 2.0, 2.0]), 3.0);
/// assert!(dist(&[1.0, 2.0, 3.0]).is_nan());
/// ```
#[must_use]
pub fn dist(args: &[f64]) -> f64 {
    match args {
        [x1, y1, x2, y2] => (x2 - x1).hypot(y2 - y1),
        [x1, y1, z1, x2, y2, z2] => {
            let (dx, dy, dz) = (x2 - x1, y2 - y1, z2 - z1);
            dz.mul_add(dz, dy.mul_add(dy, dx * dx)).sqrt()
        },
        _ => f64::NAN,
    }
}
