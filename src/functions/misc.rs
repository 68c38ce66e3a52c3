use crate::error::EvalError;
use crate::eval::Evaluator;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sqrt", sqrt);
    evaluator.register_function("cbrt", cbrt);
    evaluator.register_function("abs", abs);
    evaluator.register_function("floor", floor);
    evaluator.register_function("ceil", ceil);
    evaluator.register_function("round", round);
}

pub fn sqrt(x: f64) -> Result<f64, EvalError> {
    if x < 0.0 {
        return Err(EvalError::domain("Square root of negative number"));
    }
    Ok(x.sqrt())
}

/// Cube root; defined for negative input.
pub fn cbrt(x: f64) -> Result<f64, EvalError> {
    Ok(x.cbrt())
}

pub fn abs(x: f64) -> Result<f64, EvalError> {
    Ok(x.abs())
}

pub fn floor(x: f64) -> Result<f64, EvalError> {
    Ok(x.floor())
}

pub fn ceil(x: f64) -> Result<f64, EvalError> {
    Ok(x.ceil())
}

pub fn round(x: f64) -> Result<f64, EvalError> {
    Ok(x.round())
}

/// Factorial of a non-negative integer argument; not part of the default
/// registration set. Arguments above 170 overflow `f64`.
pub fn factorial(x: f64) -> Result<f64, EvalError> {
    if x < 0.0 {
        return Err(EvalError::domain("Factorial of negative number"));
    }
    if x > 170.0 {
        return Err(EvalError::domain("Factorial argument too large"));
    }
    let n = x.round() as u64;
    Ok((1..=n).map(|i| i as f64).product())
}
