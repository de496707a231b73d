//! Arithmetic expression evaluation.
//!
//! A plain AST walk over `f64`. Every input line is a single small
//! expression, so there is no environment, no name resolution and no
//! execution plan; the only failure modes are division by zero and
//! non-finite results.

pub mod operations;

use crate::ast::{Expr, MathConstant};
use crate::error::CalcError;
use crate::CalcResult;

/// Evaluates arithmetic expressions
#[derive(Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, expr: &Expr) -> CalcResult<f64> {
        let value = match expr {
            Expr::Number(n) => *n,
            Expr::Constant(MathConstant::Pi) => std::f64::consts::PI,
            Expr::Constant(MathConstant::E) => std::f64::consts::E,
            Expr::Negate(inner) => -self.evaluate(inner)?,
            Expr::Binary { op, left, right } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                operations::number_arithmetic(left, *op, right)?
            }
            Expr::Function { function, argument } => {
                let argument = self.evaluate(argument)?;
                operations::apply_function(*function, argument)?
            }
        };

        if !value.is_finite() {
            return Err(CalcError::evaluation("result is not a finite number"));
        }

        Ok(value)
    }
}
