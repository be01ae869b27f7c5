//! Closed-form pieces of the function graph.
//!
//! Everything here is pure and independent of the tables, so these are free
//! functions rather than `Evaluator` methods.

use crate::error::EvalError;

/// Threshold on `x² + y²` below which `glr` switches to `alg2`.
pub const GLR_ALG2_RADIUS_SQ: f64 = 1.04;

/// Simplified substitute used when `Gold` cannot divide.
pub fn alg2(x: f64, y: f64, z: f64) -> f64 {
    x + y + z
}

/// Substitute used when a table lookup cannot be completed.
pub fn alg3(x: f64, y: f64, z: f64) -> f64 {
    1.3498 * x + 2.2362 * y - 2.348 * x * y * z
}

/// Ratio of the two arguments, smaller over larger in the direction of the guards.
///
/// Each branch needs a strict inequality between `x` and `y`, so equal
/// arguments always fail, zero or not.
pub fn gold(x: f64, y: f64) -> Result<f64, EvalError> {
    if x != 0.0 && x < y {
        return Ok(x / y);
    }
    if y != 0.0 && y > x {
        return Ok(y / x);
    }
    Err(EvalError::DivisionByZero { x, y })
}

pub fn glr(x: f64, y: f64) -> f64 {
    let sum = x * x + y * y;
    if sum < GLR_ALG2_RADIUS_SQ {
        return alg2(x, y, 1.0);
    }
    if x >= 1.0 && y >= 1.0 {
        return 4.0 / sum;
    }
    if x >= 1.0 {
        return y;
    }
    x
}
