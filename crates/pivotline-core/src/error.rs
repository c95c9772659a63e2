use thiserror::Error;

/// Validation and contract errors exposed by `pivotline-core`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol cannot be empty")]
    EmptySymbol,
    #[error("symbol length {len} exceeds max {max}")]
    SymbolTooLong { len: usize, max: usize },
    #[error("symbol must start with an ASCII letter or '^': '{ch}'")]
    SymbolInvalidStart { ch: char },
    #[error("symbol contains invalid character '{ch}' at index {index}")]
    SymbolInvalidChar { ch: char, index: usize },

    #[error("timestamp must be RFC3339 UTC (suffix Z): '{value}'")]
    TimestampNotUtc { value: String },

    #[error("field '{field}' must be finite")]
    NonFiniteValue { field: &'static str },
    #[error("field '{field}' must be non-negative")]
    NegativeValue { field: &'static str },
}

/// Errors raised by the pivot calculators.
///
/// The level calculator itself is total over finite inputs; only the CPR
/// width ratio has a singularity, which is surfaced as a defined error
/// instead of an unguarded division.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PivotError {
    #[error("central pivot is zero, CPR width is undefined")]
    ZeroCentralPivot,
}
