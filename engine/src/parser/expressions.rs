use crate::ast::{ArithmeticOp, Expr, MathConstant, MathFunction};
use crate::error::CalcError;
use crate::parser::Rule;
use pest::iterators::Pair;

/// Build an [`Expr`] from an `expression` pair. Additive operators are
/// left-associative.
pub(crate) fn parse_expression(pair: Pair<Rule>) -> Result<Expr, CalcError> {
    let mut inner = pair.into_inner();

    let first = inner
        .next()
        .ok_or_else(|| CalcError::Parse("empty expression".to_string()))?;
    let mut expr = parse_term(first)?;

    while let Some(op_pair) = inner.next() {
        let op = match op_pair.as_str() {
            "+" => ArithmeticOp::Add,
            "-" => ArithmeticOp::Subtract,
            other => {
                return Err(CalcError::Parse(format!(
                    "unexpected additive operator '{}'",
                    other
                )))
            }
        };
        let rhs = inner
            .next()
            .ok_or_else(|| CalcError::Parse("missing right operand".to_string()))?;
        expr = Expr::Binary {
            op,
            left: Box::new(expr),
            right: Box::new(parse_term(rhs)?),
        };
    }

    Ok(expr)
}

fn parse_term(pair: Pair<Rule>) -> Result<Expr, CalcError> {
    let mut inner = pair.into_inner();

    let first = inner
        .next()
        .ok_or_else(|| CalcError::Parse("empty term".to_string()))?;
    let mut expr = parse_power(first)?;

    while let Some(op_pair) = inner.next() {
        let op = match op_pair.as_str() {
            "*" => ArithmeticOp::Multiply,
            "/" => ArithmeticOp::Divide,
            "%" => ArithmeticOp::Modulo,
            other => {
                return Err(CalcError::Parse(format!(
                    "unexpected multiplicative operator '{}'",
                    other
                )))
            }
        };
        let rhs = inner
            .next()
            .ok_or_else(|| CalcError::Parse("missing right operand".to_string()))?;
        expr = Expr::Binary {
            op,
            left: Box::new(expr),
            right: Box::new(parse_power(rhs)?),
        };
    }

    Ok(expr)
}

/// Power is right-associative: `2^3^2` is `2^(3^2)`. The grammar yields a
/// flat operand list, folded here from the right.
fn parse_power(pair: Pair<Rule>) -> Result<Expr, CalcError> {
    let mut operands = Vec::new();
    for inner in pair.into_inner() {
        if inner.as_rule() == Rule::factor {
            operands.push(parse_factor(inner)?);
        }
    }

    let mut expr = operands
        .pop()
        .ok_or_else(|| CalcError::Parse("empty power expression".to_string()))?;
    while let Some(base) = operands.pop() {
        expr = Expr::Binary {
            op: ArithmeticOp::Power,
            left: Box::new(base),
            right: Box::new(expr),
        };
    }

    Ok(expr)
}

fn parse_factor(pair: Pair<Rule>) -> Result<Expr, CalcError> {
    let mut negated = false;
    let mut primary = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::neg_op => negated = true,
            Rule::primary => primary = Some(parse_primary(inner)?),
            _ => {}
        }
    }

    let expr = primary.ok_or_else(|| CalcError::Parse("empty factor".to_string()))?;
    Ok(if negated {
        Expr::Negate(Box::new(expr))
    } else {
        expr
    })
}

fn parse_primary(pair: Pair<Rule>) -> Result<Expr, CalcError> {
    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::function_call => return parse_function_call(inner),
            Rule::number_literal => return parse_number_literal(inner),
            Rule::constant => return parse_constant(inner),
            Rule::expression => return parse_expression(inner),
            _ => {}
        }
    }
    Err(CalcError::Parse("empty primary expression".to_string()))
}

fn parse_number_literal(pair: Pair<Rule>) -> Result<Expr, CalcError> {
    let text = pair.as_str();
    let value = text
        .parse::<f64>()
        .map_err(|_| CalcError::Parse(format!("invalid number '{}'", text)))?;
    Ok(Expr::Number(value))
}

fn parse_constant(pair: Pair<Rule>) -> Result<Expr, CalcError> {
    let constant = match pair.as_str() {
        "pi" => MathConstant::Pi,
        "e" => MathConstant::E,
        other => return Err(CalcError::Parse(format!("unknown constant '{}'", other))),
    };
    Ok(Expr::Constant(constant))
}

fn parse_function_call(pair: Pair<Rule>) -> Result<Expr, CalcError> {
    let mut name = None;
    let mut argument = None;

    for inner in pair.into_inner() {
        match inner.as_rule() {
            Rule::function_name => name = Some(inner.as_str().to_string()),
            Rule::expression => argument = Some(parse_expression(inner)?),
            _ => {}
        }
    }

    let name = name.ok_or_else(|| CalcError::Parse("function call without name".to_string()))?;
    let argument =
        argument.ok_or_else(|| CalcError::Parse("function call without argument".to_string()))?;

    let function = match name.as_str() {
        "sqrt" => MathFunction::Sqrt,
        "sin" => MathFunction::Sin,
        "cos" => MathFunction::Cos,
        "tan" => MathFunction::Tan,
        "asin" => MathFunction::Asin,
        "acos" => MathFunction::Acos,
        "atan" => MathFunction::Atan,
        "log" | "ln" => MathFunction::Log,
        "log10" => MathFunction::Log10,
        "exp" => MathFunction::Exp,
        "abs" => MathFunction::Abs,
        "floor" => MathFunction::Floor,
        "ceil" => MathFunction::Ceil,
        "round" => MathFunction::Round,
        other => return Err(CalcError::Parse(format!("unknown function '{}'", other))),
    };

    Ok(Expr::Function {
        function,
        argument: Box::new(argument),
    })
}
