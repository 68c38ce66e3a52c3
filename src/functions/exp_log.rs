use crate::error::EvalError;
use crate::eval::Evaluator;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("exp", exp);
    evaluator.register_function("ln", ln);
    evaluator.register_function("log", log);
    evaluator.register_function("log2", log2);
}

pub fn exp(x: f64) -> Result<f64, EvalError> {
    Ok(x.exp())
}

/// Natural logarithm.
pub fn ln(x: f64) -> Result<f64, EvalError> {
    if x <= 0.0 {
        return Err(EvalError::domain("Logarithm of non-positive number"));
    }
    Ok(x.ln())
}

/// Base-10 logarithm.
pub fn log(x: f64) -> Result<f64, EvalError> {
    if x <= 0.0 {
        return Err(EvalError::domain("Logarithm of non-positive number"));
    }
    Ok(x.log10())
}

/// Base-2 logarithm.
pub fn log2(x: f64) -> Result<f64, EvalError> {
    if x <= 0.0 {
        return Err(EvalError::domain("Logarithm of non-positive number"));
    }
    Ok(x.log2())
}

/// Base-2 exponential; not part of the default registration set.
pub fn exp2(x: f64) -> Result<f64, EvalError> {
    Ok(x.exp2())
}
