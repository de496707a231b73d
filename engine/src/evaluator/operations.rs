//! Numeric operations for the evaluator.

use crate::ast::{ArithmeticOp, MathFunction};
use crate::error::CalcError;
use crate::CalcResult;

/// Perform a binary arithmetic operation.
///
/// Division and modulo by zero are reported explicitly instead of producing
/// an IEEE infinity or NaN; other non-finite results are caught by the
/// evaluator's final check.
pub fn number_arithmetic(left: f64, op: ArithmeticOp, right: f64) -> CalcResult<f64> {
    match op {
        ArithmeticOp::Add => Ok(left + right),
        ArithmeticOp::Subtract => Ok(left - right),
        ArithmeticOp::Multiply => Ok(left * right),
        ArithmeticOp::Divide => {
            if right == 0.0 {
                Err(CalcError::evaluation("division by zero"))
            } else {
                Ok(left / right)
            }
        }
        ArithmeticOp::Modulo => {
            if right == 0.0 {
                Err(CalcError::evaluation("modulo by zero"))
            } else {
                Ok(left % right)
            }
        }
        ArithmeticOp::Power => Ok(left.powf(right)),
    }
}

/// Apply a function from the fixed set.
///
/// Domain errors (`sqrt(-1)`, `log(0)`, `asin(2)`) produce NaN or an
/// infinity and are rejected by the evaluator's finiteness check.
pub fn apply_function(function: MathFunction, value: f64) -> CalcResult<f64> {
    let result = match function {
        MathFunction::Sqrt => value.sqrt(),
        MathFunction::Sin => value.sin(),
        MathFunction::Cos => value.cos(),
        MathFunction::Tan => value.tan(),
        MathFunction::Asin => value.asin(),
        MathFunction::Acos => value.acos(),
        MathFunction::Atan => value.atan(),
        MathFunction::Log => value.ln(),
        MathFunction::Log10 => value.log10(),
        MathFunction::Exp => value.exp(),
        MathFunction::Abs => value.abs(),
        MathFunction::Floor => value.floor(),
        MathFunction::Ceil => value.ceil(),
        MathFunction::Round => value.round(),
    };
    Ok(result)
}
