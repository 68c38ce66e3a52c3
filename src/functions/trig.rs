use crate::error::EvalError;
use crate::eval::Evaluator;

pub fn register(evaluator: &mut Evaluator) {
    evaluator.register_function("sin", sin);
    evaluator.register_function("cos", cos);
    evaluator.register_function("tan", tan);
    evaluator.register_function("asin", asin);
    evaluator.register_function("acos", acos);
    evaluator.register_function("atan", atan);
}

pub fn sin(x: f64) -> Result<f64, EvalError> {
    Ok(x.sin())
}

pub fn cos(x: f64) -> Result<f64, EvalError> {
    Ok(x.cos())
}

pub fn tan(x: f64) -> Result<f64, EvalError> {
    Ok(x.tan())
}

pub fn asin(x: f64) -> Result<f64, EvalError> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(EvalError::domain("asin domain error: x must be in [-1, 1]"));
    }
    Ok(x.asin())
}

pub fn acos(x: f64) -> Result<f64, EvalError> {
    if !(-1.0..=1.0).contains(&x) {
        return Err(EvalError::domain("acos domain error: x must be in [-1, 1]"));
    }
    Ok(x.acos())
}

pub fn atan(x: f64) -> Result<f64, EvalError> {
    Ok(x.atan())
}
