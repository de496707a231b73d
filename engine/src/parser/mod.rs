use crate::ast::Expr;
use crate::error::CalcError;
use pest::Parser;
use pest_derive::Parser;

pub mod conversions;
pub mod expressions;

#[derive(Parser)]
#[grammar = "src/parser/calc.pest"]
pub struct CalcParser;

/// Parse a normalized arithmetic expression into an AST.
///
/// Expects operator glyphs to already be normalized (see
/// [`normalize_operators`]); the caret is the grammar's native power operator
/// and needs no rewriting.
pub fn parse(content: &str) -> Result<Expr, CalcError> {
    let mut pairs = CalcParser::parse(Rule::calculation, content)
        .map_err(|e| CalcError::parse(content, format!("invalid expression ({})", e.variant)))?;

    let calculation = pairs
        .next()
        .ok_or_else(|| CalcError::parse(content, "empty parse result"))?;

    for pair in calculation.into_inner() {
        if pair.as_rule() == Rule::expression {
            return expressions::parse_expression(pair);
        }
    }

    Err(CalcError::parse(content, "no expression found"))
}

/// Rewrite display operator glyphs to the grammar's native operators.
///
/// Applied only on the arithmetic path, never before conversion matching.
pub fn normalize_operators(expr: &str) -> String {
    expr.replace('×', "*").replace('÷', "/")
}
