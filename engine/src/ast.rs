//! Abstract syntax tree for arithmetic expressions.
//!
//! The evaluator walks this tree directly; there is no intermediate
//! representation. The node set is deliberately closed: a fixed operator set,
//! a fixed function set and two constants. Nothing here can reference names,
//! call out, or grow at runtime.

/// Binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithmeticOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Power,
}

/// The fixed set of supported functions, all unary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathFunction {
    Sqrt,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    /// Natural logarithm (`log` and `ln` both parse to this)
    Log,
    Log10,
    Exp,
    Abs,
    Floor,
    Ceil,
    Round,
}

/// Named constants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathConstant {
    Pi,
    E,
}

/// An arithmetic expression
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(f64),
    Constant(MathConstant),
    Negate(Box<Expr>),
    Binary {
        op: ArithmeticOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Function {
        function: MathFunction,
        argument: Box<Expr>,
    },
}
