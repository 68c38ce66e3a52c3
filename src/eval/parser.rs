use log::{debug, trace};

use crate::error::EvalError;
use crate::eval::cursor::Cursor;
use crate::eval::{Evaluator, Operator};

/// One recursive descent over a single expression.
///
/// Precedence is encoded structurally in the call hierarchy
/// (`expression` -> `term` -> `factor`) and each production folds its
/// operands as it goes; no syntax tree is built.
pub(crate) struct Descent<'a> {
    cursor: Cursor<'a>,
    evaluator: &'a Evaluator,
}

impl<'a> Descent<'a> {
    pub fn new(input: &'a str, evaluator: &'a Evaluator) -> Self {
        Self {
            cursor: Cursor::new(input),
            evaluator,
        }
    }

    /// expression := term (('+' | '-') term)*
    pub fn expression(&mut self) -> Result<f64, EvalError> {
        trace!("expression at {}", self.cursor.pos());
        let mut value = self.term()?;

        loop {
            self.cursor.skip_spaces();
            let op = match self.cursor.peek() {
                Some('+') => Operator::Add,
                Some('-') => Operator::Subtract,
                _ => break,
            };
            self.cursor.bump();
            let right = self.term()?;
            value = op.apply(value, right)?;
        }

        Ok(value)
    }

    /// term := factor (('*' | '/' | '%') factor)*
    fn term(&mut self) -> Result<f64, EvalError> {
        trace!("term at {}", self.cursor.pos());
        let mut value = self.factor()?;

        loop {
            self.cursor.skip_spaces();
            let op = match self.cursor.peek() {
                Some('*') => Operator::Multiply,
                Some('/') => Operator::Divide,
                Some('%') => Operator::Modulo,
                _ => break,
            };
            self.cursor.bump();
            let right = self.factor()?;
            value = op.apply(value, right)?;
        }

        Ok(value)
    }

    /// factor := ('-' | '+') factor | base ('^' factor)?
    ///
    /// Unary sign recurses into `factor`, so it binds tighter than any
    /// binary operator: `-2^2` is `-(2^2)` because the inner call
    /// consumes the `^` before the negation applies.
    fn factor(&mut self) -> Result<f64, EvalError> {
        self.cursor.skip_spaces();
        match self.cursor.peek() {
            None => Err(EvalError::UnexpectedEnd),
            Some('-') => {
                self.cursor.bump();
                Ok(-self.factor()?)
            }
            Some('+') => {
                self.cursor.bump();
                self.factor()
            }
            Some(_) => {
                let value = self.base()?;
                self.power_tail(value)
            }
        }
    }

    /// base := '(' expression ')' | identifier '(' expression ')'
    ///       | identifier | number
    fn base(&mut self) -> Result<f64, EvalError> {
        match self.cursor.peek() {
            Some('(') => {
                self.cursor.bump();
                let value = self.expression()?;
                self.closing_paren()?;
                Ok(value)
            }
            Some(c) if c.is_ascii_alphabetic() => self.identifier(),
            _ => self.number(),
        }
    }

    /// Exponentiation recurses into `factor` (not `term`) for its right
    /// operand, which makes it right-associative: `2^3^2` is `2^(3^2)`.
    fn power_tail(&mut self, base: f64) -> Result<f64, EvalError> {
        self.cursor.skip_spaces();
        if self.cursor.eat('^') {
            let exponent = self.factor()?;
            return Operator::Power.apply(base, exponent);
        }
        Ok(base)
    }

    /// Resolves an identifier: a following `(` always means a function
    /// call with one sub-expression argument; otherwise a constant lookup.
    fn identifier(&mut self) -> Result<f64, EvalError> {
        let name = self.cursor.scan_identifier();
        self.cursor.skip_spaces();

        if self.cursor.eat('(') {
            let argument = self.expression()?;
            self.closing_paren()?;
            let function = self
                .evaluator
                .functions
                .get(name)
                .ok_or_else(|| EvalError::UnknownFunction(name.to_string()))?;
            debug!("applying {name}({argument})");
            return function(argument);
        }

        self.evaluator
            .constants
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UnknownIdentifier(name.to_string()))
    }

    fn number(&mut self) -> Result<f64, EvalError> {
        let literal = self.cursor.scan_number()?;
        literal
            .parse::<f64>()
            .map_err(|_| EvalError::InvalidNumber(literal.to_string()))
    }

    fn closing_paren(&mut self) -> Result<(), EvalError> {
        self.cursor.skip_spaces();
        if self.cursor.eat(')') {
            Ok(())
        } else {
            Err(EvalError::MismatchedParens)
        }
    }

    /// Full-consumption check: anything but spaces and tabs left after
    /// the top-level production is rejected.
    pub fn finish(&mut self) -> Result<(), EvalError> {
        self.cursor.skip_spaces();
        match self.cursor.peek() {
            None => Ok(()),
            Some(_) => Err(EvalError::TrailingInput(self.cursor.pos())),
        }
    }
}
