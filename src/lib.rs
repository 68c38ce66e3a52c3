//! Recursive-descent evaluation of infix arithmetic expressions over
//! registrable tables of unary functions and named constants.

pub mod error;
pub mod eval;
pub mod functions;

pub use error::EvalError;
pub use eval::{Evaluator, Operator, UnaryFn};

/// Evaluates a single expression with the default function and constant
/// set. Hosts that register their own functions or constants should hold
/// an [`Evaluator`] instead of going through this.
pub fn evaluate_expression(expression: &str) -> Result<f64, EvalError> {
    let evaluator = Evaluator::with_builtins();
    evaluator.evaluate(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_shot_evaluation() {
        assert_eq!(evaluate_expression("2 + 2 * 3").unwrap(), 8.0);
        assert_eq!(evaluate_expression("sqrt(144)").unwrap(), 12.0);
        assert!(evaluate_expression("2 +").is_err());
    }
}
