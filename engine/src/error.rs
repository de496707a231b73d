use std::fmt;

/// Error types for the smartcalc engine.
///
/// Lookup failures are deliberately absent: a conversion-shaped line with no
/// table entry is not an error, it falls through to arithmetic evaluation.
/// Persistence problems are likewise not surfaced here; the engine degrades
/// to in-memory history and logs a warning.
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Input matched no recognized grammar
    Parse(String),

    /// Expression parsed but could not be computed (division by zero,
    /// non-finite result)
    Evaluation(String),
}

impl CalcError {
    /// Create a parse error that echoes the offending input
    pub fn parse(input: &str, message: impl Into<String>) -> Self {
        Self::Parse(format!("{}: '{}'", message.into(), input))
    }

    /// Create an evaluation error
    pub fn evaluation(message: impl Into<String>) -> Self {
        Self::Evaluation(message.into())
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::Parse(msg) => write!(f, "Parse error: {}", msg),
            CalcError::Evaluation(msg) => write!(f, "Evaluation error: {}", msg),
        }
    }
}

impl std::error::Error for CalcError {}
