//! # Smartcalc Engine
//!
//! **One line in, one answer out**
//!
//! Smartcalc evaluates arithmetic expressions, converts between physical
//! units, and converts between currencies using a static exchange-rate table,
//! while keeping a rolling history of computations.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smartcalc::{Engine, Evaluation, JsonFileStore};
//!
//! fn main() -> smartcalc::CalcResult<()> {
//!     let mut engine = Engine::with_store(Box::new(JsonFileStore::new("calc_history.json")));
//!
//!     match engine.evaluate("5.7 km m")? {
//!         Evaluation::Conversion(result) => println!("{} {}", result.value, result.to),
//!         Evaluation::Arithmetic { value } => println!("{}", value),
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Dispatch
//!
//! Every input line is classified before anything is computed:
//!
//! 1. Lines shaped like `<number> <token> <token>` become a
//!    [`ConversionRequest`]. The unit table is consulted first; if both tokens
//!    are three-letter codes, the currency table second.
//! 2. Everything else, including conversion-shaped lines with no table entry,
//!    is evaluated as an arithmetic expression with a fixed operator and
//!    function set.
//!
//! The conversion tables are built once and never mutated. Currency rates form
//! a star graph around `usd`; resolution is a direct edge or a single hop
//! through the hub, nothing more.

pub mod ast;
pub mod convert;
pub mod engine;
pub mod error;
pub mod evaluator;
pub mod history;
pub mod parser;
pub mod rates;
pub mod tables;

pub use ast::{ArithmeticOp, Expr, MathConstant, MathFunction};
pub use convert::{ConversionEngine, ConversionKind, ConversionResult};
pub use engine::{Engine, Evaluation};
pub use error::CalcError;
pub use evaluator::Evaluator;
pub use history::{EntryKind, HistoryEntry, HistoryStore, JsonFileStore, MemoryStore};
pub use parser::conversions::{classify, ConversionRequest, Input};
pub use rates::{RateResolver, HUB_CURRENCY};
pub use tables::UnitCurrencyTable;

/// Result type for smartcalc operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests;
