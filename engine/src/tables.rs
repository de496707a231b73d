//! Static unit and currency lookup data.
//!
//! Built once at startup and only ever read afterwards; there is no runtime
//! mutation API. Unit conversions are directional entries with their own
//! formulas. The reverse direction must be stored explicitly: absence means
//! "unsupported", never "derive the inverse".
//!
//! Currency rates form a star graph centered on the `usd` hub: the `usd` row
//! holds rates out of usd into every supported currency, and every other
//! currency holds exactly one edge, its rate into usd. Resolution must stay a
//! direct lookup or a single hop through the hub (see `rates.rs`); table
//! edits that break the star shape silently make pairs unreachable.

use std::collections::HashMap;

/// A stored unit conversion formula
pub type UnitFn = fn(f64) -> f64;

/// Immutable unit and currency lookup table
pub struct UnitCurrencyTable {
    units: HashMap<(String, String), UnitFn>,
    rates: HashMap<String, HashMap<String, f64>>,
}

impl Default for UnitCurrencyTable {
    fn default() -> Self {
        Self::new()
    }
}

impl UnitCurrencyTable {
    pub fn new() -> Self {
        let unit_entries: [(&str, &str, UnitFn); 16] = [
            // Length
            ("km", "m", |v| v * 1000.0),
            ("m", "km", |v| v / 1000.0),
            ("miles", "km", |v| v * 1.60934),
            ("km", "miles", |v| v * 0.621371),
            ("m", "ft", |v| v * 3.28084),
            ("ft", "m", |v| v * 0.3048),
            ("cm", "inch", |v| v * 0.393701),
            ("inch", "cm", |v| v * 2.54),
            // Mass
            ("kg", "lbs", |v| v * 2.20462),
            ("lbs", "kg", |v| v * 0.453592),
            ("g", "oz", |v| v * 0.035274),
            ("oz", "g", |v| v * 28.3495),
            // Temperature, with and without the degree sign
            ("c", "f", |v| v * 9.0 / 5.0 + 32.0),
            ("f", "c", |v| (v - 32.0) * 5.0 / 9.0),
            ("°c", "°f", |v| v * 9.0 / 5.0 + 32.0),
            ("°f", "°c", |v| (v - 32.0) * 5.0 / 9.0),
        ];

        let mut units = HashMap::new();
        for (from, to, formula) in unit_entries {
            units.insert((from.to_string(), to.to_string()), formula);
        }

        // Rates out of the hub; the inverse edge into the hub is derived here,
        // at construction time, not at resolution time.
        let usd_rates: [(&str, f64); 8] = [
            ("inr", 83.5),
            ("aed", 3.67),
            ("eur", 0.92),
            ("gbp", 0.79),
            ("cad", 1.38),
            ("aud", 1.52),
            ("jpy", 150.5),
            ("sgd", 1.34),
        ];

        let mut rates: HashMap<String, HashMap<String, f64>> = HashMap::new();
        let mut usd_row = HashMap::new();
        for (code, rate) in usd_rates {
            usd_row.insert(code.to_string(), rate);
            let mut row = HashMap::new();
            row.insert("usd".to_string(), 1.0 / rate);
            rates.insert(code.to_string(), row);
        }
        rates.insert("usd".to_string(), usd_row);

        Self { units, rates }
    }

    /// Look up a unit conversion formula. Directional and case-insensitive.
    pub fn lookup_unit(&self, from: &str, to: &str) -> Option<UnitFn> {
        self.units
            .get(&(from.to_lowercase(), to.to_lowercase()))
            .copied()
    }

    /// Look up a direct currency edge. Case-insensitive, no hub routing.
    pub fn direct_rate(&self, from: &str, to: &str) -> Option<f64> {
        self.rates
            .get(&from.to_lowercase())
            .and_then(|row| row.get(&to.to_lowercase()))
            .copied()
    }
}
