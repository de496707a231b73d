//! Input classification.
//!
//! Decides whether a raw line is a conversion candidate or an arithmetic
//! expression. This is a pure grammar check; whether the tokens actually name
//! a known unit or currency pair is decided later by the conversion engine,
//! so that a conversion-shaped line with unknown tokens can still get a
//! second chance as math.

use regex::Regex;
use std::sync::OnceLock;

/// A conversion candidate: `<number> <token> <token>`.
///
/// Tokens keep their original casing for display; all lookups are
/// case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub value: f64,
    pub from_unit: String,
    pub to_unit: String,
}

/// Classified input line
#[derive(Debug, Clone, PartialEq)]
pub enum Input {
    Conversion(ConversionRequest),
    Expression(String),
}

// Matches: 123.45 km m OR 100 AED INR OR 23.9 C F
// Tokens are 1-3 letters, degree sign allowed. Anything else (extra spaces
// inside tokens, multiple numbers, trailing text) fails and the whole line is
// treated as arithmetic.
static CONVERSION_LINE: OnceLock<Regex> = OnceLock::new();

fn conversion_pattern() -> &'static Regex {
    CONVERSION_LINE.get_or_init(|| {
        Regex::new(r"^(-?\d*\.?\d+)\s+([a-zA-Z°]{1,3})\s+([a-zA-Z°]{1,3})$")
            .expect("conversion pattern is valid")
    })
}

/// Classify a raw input line.
///
/// The raw string is not modified before conversion matching; operator glyph
/// normalization applies only on the arithmetic path.
pub fn classify(raw: &str) -> Input {
    let trimmed = raw.trim();

    if let Some(captures) = conversion_pattern().captures(trimmed) {
        if let Ok(value) = captures[1].parse::<f64>() {
            return Input::Conversion(ConversionRequest {
                value,
                from_unit: captures[2].to_string(),
                to_unit: captures[3].to_string(),
            });
        }
    }

    Input::Expression(trimmed.to_string())
}
