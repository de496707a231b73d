//! Currency rate resolution.
//!
//! A two-branch lookup over the star-shaped rate table: direct edge first,
//! else one hop through the hub. This deliberately does not generalize to
//! multi-hop chains; the table is constructed as a star and a general
//! shortest-path search would only hide topology mistakes. Symmetry is not
//! assumed: `resolve(a, b)` and `resolve(b, a)` are computed independently.

use crate::tables::UnitCurrencyTable;

/// The hub currency every non-hub row has exactly one edge to
pub const HUB_CURRENCY: &str = "usd";

/// Resolves conversion rates between currency codes
pub struct RateResolver<'a> {
    tables: &'a UnitCurrencyTable,
}

impl<'a> RateResolver<'a> {
    pub fn new(tables: &'a UnitCurrencyTable) -> Self {
        Self { tables }
    }

    /// Resolve a rate from one currency code to another, or `None` when no
    /// path exists. Codes are matched case-insensitively.
    pub fn resolve(&self, from: &str, to: &str) -> Option<f64> {
        if let Some(rate) = self.tables.direct_rate(from, to) {
            return Some(rate);
        }

        let into_hub = self.tables.direct_rate(from, HUB_CURRENCY)?;
        let out_of_hub = self.tables.direct_rate(HUB_CURRENCY, to)?;
        tracing::debug!(%from, %to, "rate resolved through hub");
        Some(into_hub * out_of_hub)
    }
}
