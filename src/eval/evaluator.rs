use std::collections::HashMap;
use std::sync::Arc;

use log::debug;

use crate::error::EvalError;
use crate::eval::parser::Descent;
use crate::functions;

/// A registered unary numeric function. The function performs its own
/// domain checks and its failure is surfaced as the evaluation's failure.
pub type UnaryFn = Arc<dyn Fn(f64) -> Result<f64, EvalError> + Send + Sync>;

/// Evaluates infix arithmetic expressions against owned tables of named
/// unary functions and named constants.
///
/// Each instance owns its tables independently; there is no global
/// registry. The tables are only mutated through the `register_*` calls
/// and are read-only during an evaluation. The descent evaluates inline
/// while parsing; hosts that need to evaluate one expression repeatedly
/// under changing bindings would want a separate parsed representation,
/// which this type deliberately does not build.
pub struct Evaluator {
    pub(crate) functions: HashMap<String, UnaryFn>,
    pub(crate) constants: HashMap<String, f64>,
}

impl Evaluator {
    /// Creates an `Evaluator` with empty function and constant tables.
    pub fn new() -> Self {
        Self {
            functions: HashMap::new(),
            constants: HashMap::new(),
        }
    }

    /// Creates an `Evaluator` pre-populated with the default function
    /// set (trigonometric, hyperbolic, exponential/logarithmic, roots
    /// and rounding) and the constants `pi`, `e` and `phi`.
    pub fn with_builtins() -> Self {
        let mut evaluator = Self::new();
        functions::register_defaults(&mut evaluator);
        evaluator
    }

    /// Registers a function with the evaluator. A later registration
    /// for the same name replaces the earlier one.
    pub fn register_function<F>(&mut self, name: &str, function: F)
    where
        F: Fn(f64) -> Result<f64, EvalError> + Send + Sync + 'static,
    {
        self.functions.insert(name.to_string(), Arc::new(function));
    }

    /// Registers a constant with the evaluator. A later registration
    /// for the same name replaces the earlier one.
    pub fn register_constant(&mut self, name: &str, value: f64) {
        self.constants.insert(name.to_string(), value);
    }

    /// Parses and computes the value of a complete expression.
    ///
    /// The whole input must be consumed: non-whitespace characters left
    /// over after the top-level production (`"2+2)"`, `"2 2"`) are
    /// rejected with [`EvalError::TrailingInput`]. A failed evaluation
    /// leaves the tables untouched.
    pub fn evaluate(&self, expression: &str) -> Result<f64, EvalError> {
        debug!("evaluating: {expression:?}");
        let mut descent = Descent::new(expression, self);
        let value = descent.expression()?;
        descent.finish()?;
        Ok(value)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_tables_resolve_nothing() {
        let evaluator = Evaluator::new();
        assert_eq!(
            evaluator.evaluate("pi"),
            Err(EvalError::UnknownIdentifier("pi".to_string()))
        );
        assert_eq!(
            evaluator.evaluate("sin(0)"),
            Err(EvalError::UnknownFunction("sin".to_string()))
        );
        // Plain arithmetic needs no tables.
        assert_eq!(evaluator.evaluate("2+3").unwrap(), 5.0);
    }

    #[test]
    fn test_builtins_are_registered() {
        let evaluator = Evaluator::with_builtins();
        for name in [
            "sin", "cos", "tan", "asin", "acos", "atan", "sinh", "cosh", "tanh", "sqrt", "cbrt",
            "abs", "exp", "ln", "log", "log2", "floor", "ceil", "round",
        ] {
            assert!(
                evaluator.evaluate(&format!("{name}(0.5)")).is_ok(),
                "builtin '{name}' missing"
            );
        }
        assert!(evaluator.evaluate("pi + e + phi").is_ok());
    }

    #[test]
    fn test_register_constant_resolves_on_next_call() {
        let mut evaluator = Evaluator::new();
        evaluator.register_constant("x", 3.0);
        assert_eq!(evaluator.evaluate("x").unwrap(), 3.0);
        assert_eq!(evaluator.evaluate("x*x").unwrap(), 9.0);

        // Re-registration overwrites.
        evaluator.register_constant("x", 5.0);
        assert_eq!(evaluator.evaluate("x").unwrap(), 5.0);
    }

    #[test]
    fn test_register_function_last_wins() {
        let mut evaluator = Evaluator::new();
        evaluator.register_function("twice", |x| Ok(x * 2.0));
        assert_eq!(evaluator.evaluate("twice(21)").unwrap(), 42.0);

        evaluator.register_function("twice", |x| Ok(x * 200.0));
        assert_eq!(evaluator.evaluate("twice(21)").unwrap(), 4200.0);
    }

    #[test]
    fn test_function_failure_propagates() {
        let mut evaluator = Evaluator::new();
        evaluator.register_function("reject", |_| Err(EvalError::domain("always rejected")));
        assert_eq!(
            evaluator.evaluate("reject(1)"),
            Err(EvalError::Domain("always rejected".to_string()))
        );
    }

    #[test]
    fn test_tables_survive_failed_evaluations() {
        let mut evaluator = Evaluator::new();
        evaluator.register_constant("x", 2.0);
        assert!(evaluator.evaluate("x/0").is_err());
        assert!(evaluator.evaluate("(x").is_err());
        assert_eq!(evaluator.evaluate("x").unwrap(), 2.0);
    }

    #[test]
    fn test_repeated_evaluation_is_stable() {
        let evaluator = Evaluator::with_builtins();
        let first = evaluator.evaluate("sin(pi/4) + 2^0.5").unwrap();
        for _ in 0..10 {
            assert_eq!(evaluator.evaluate("sin(pi/4) + 2^0.5").unwrap(), first);
        }
    }

    #[test]
    fn test_call_syntax_wins_over_constant() {
        let mut evaluator = Evaluator::new();
        evaluator.register_constant("f", 1.0);
        evaluator.register_function("f", |x| Ok(x + 10.0));
        assert_eq!(evaluator.evaluate("f(1)").unwrap(), 11.0);
        assert_eq!(evaluator.evaluate("f").unwrap(), 1.0);
    }
}
