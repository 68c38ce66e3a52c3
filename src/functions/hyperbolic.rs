use crate::error::EvalError;
use crate::eval::Evaluator;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sinh", sinh);
    evaluator.register_function("cosh", cosh);
    evaluator.register_function("tanh", tanh);
}

pub fn sinh(x: f64) -> Result<f64, EvalError> {
    Ok(x.sinh())
}

pub fn cosh(x: f64) -> Result<f64, EvalError> {
    Ok(x.cosh())
}

pub fn tanh(x: f64) -> Result<f64, EvalError> {
    Ok(x.tanh())
}

// The inverse hyperbolics are not part of the default registration set.

pub fn asinh(x: f64) -> Result<f64, EvalError> {
    Ok(x.asinh())
}

pub fn acosh(x: f64) -> Result<f64, EvalError> {
    if x < 1.0 {
        return Err(EvalError::domain("acosh domain error: x must be >= 1"));
    }
    Ok(x.acosh())
}

pub fn atanh(x: f64) -> Result<f64, EvalError> {
    if x <= -1.0 || x >= 1.0 {
        return Err(EvalError::domain(
            "atanh domain error: x must be in (-1, 1)",
        ));
    }
    Ok(x.atanh())
}
