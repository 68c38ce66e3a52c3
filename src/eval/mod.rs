mod cursor;
mod evaluator;
mod parser;

pub use evaluator::{Evaluator, UnaryFn};

use crate::error::EvalError;

/// Binary arithmetic operators, one per grammar tier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

impl Operator {
    /// Applies the operator to two operands.
    ///
    /// Division and modulo by an exactly-zero right operand are domain
    /// errors. Power is `f64::powf` without interception: a negative base
    /// with a fractional exponent yields NaN and NaN is passed through.
    pub fn apply(&self, left: f64, right: f64) -> Result<f64, EvalError> {
        match self {
            Operator::Add => Ok(left + right),
            Operator::Subtract => Ok(left - right),
            Operator::Multiply => Ok(left * right),
            Operator::Divide => {
                if right == 0.0 {
                    Err(EvalError::domain("Division by zero"))
                } else {
                    Ok(left / right)
                }
            }
            Operator::Modulo => {
                if right == 0.0 {
                    Err(EvalError::domain("Modulo by zero"))
                } else {
                    Ok(left % right)
                }
            }
            Operator::Power => Ok(left.powf(right)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_arithmetic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), Ok(5.0));
        assert_eq!(Operator::Subtract.apply(2.0, 3.0), Ok(-1.0));
        assert_eq!(Operator::Multiply.apply(2.0, 3.0), Ok(6.0));
        assert_eq!(Operator::Divide.apply(7.0, 2.0), Ok(3.5));
        assert_eq!(Operator::Modulo.apply(7.0, 2.0), Ok(1.0));
        assert_eq!(Operator::Power.apply(2.0, 10.0), Ok(1024.0));
    }

    #[test]
    fn test_division_by_zero() {
        assert!(matches!(
            Operator::Divide.apply(1.0, 0.0),
            Err(EvalError::Domain(_))
        ));
        assert!(matches!(
            Operator::Modulo.apply(1.0, 0.0),
            Err(EvalError::Domain(_))
        ));
    }

    #[test]
    fn test_power_nan_passes_through() {
        let result = Operator::Power.apply(-8.0, 0.5).unwrap();
        assert!(result.is_nan());
    }
}
