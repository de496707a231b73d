//! Conversion engine.
//!
//! Applies the disambiguation policy to a classified conversion request:
//! the unit table wins over the currency table, and currency is only
//! attempted for exactly-three-letter codes. A request that matches neither
//! is not an error here; the caller gives the whole original line a second
//! chance as arithmetic.

use crate::parser::conversions::ConversionRequest;
use crate::rates::RateResolver;
use crate::tables::UnitCurrencyTable;

/// Which table produced a conversion result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversionKind {
    Unit,
    Currency,
}

/// A successful conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionResult {
    pub kind: ConversionKind,
    pub value: f64,
    pub from: String,
    pub to: String,
}

/// Computes conversion results against the static tables
pub struct ConversionEngine<'a> {
    tables: &'a UnitCurrencyTable,
}

impl<'a> ConversionEngine<'a> {
    pub fn new(tables: &'a UnitCurrencyTable) -> Self {
        Self { tables }
    }

    /// Convert a request, or `None` when neither table has an entry.
    ///
    /// Precedence, in order:
    /// 1. unit-table lookup (case-insensitive);
    /// 2. currency resolution, only when both tokens are exactly 3 letters;
    /// 3. `None` — the caller falls back to arithmetic.
    pub fn convert(&self, request: &ConversionRequest) -> Option<ConversionResult> {
        if let Some(formula) = self
            .tables
            .lookup_unit(&request.from_unit, &request.to_unit)
        {
            return Some(ConversionResult {
                kind: ConversionKind::Unit,
                value: formula(request.value),
                from: request.from_unit.clone(),
                to: request.to_unit.clone(),
            });
        }

        if is_currency_code(&request.from_unit) && is_currency_code(&request.to_unit) {
            let resolver = RateResolver::new(self.tables);
            if let Some(rate) = resolver.resolve(&request.from_unit, &request.to_unit) {
                return Some(ConversionResult {
                    kind: ConversionKind::Currency,
                    value: request.value * rate,
                    from: request.from_unit.clone(),
                    to: request.to_unit.clone(),
                });
            }
        }

        None
    }
}

/// Currency codes are exactly 3 letters; this is what keeps a token like
/// `m` (meters) or `°c` from ever being mistaken for a currency.
fn is_currency_code(token: &str) -> bool {
    token.len() == 3 && token.chars().all(|c| c.is_ascii_alphabetic())
}
