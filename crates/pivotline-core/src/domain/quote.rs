use serde::{Deserialize, Serialize};

use crate::ValidationError;

/// One trading day's High/Low/Close triple.
///
/// Immutable once constructed. High >= low is conventional for real market
/// data but is not enforced here; the pivot formulas remain well-defined on
/// an inverted range, so rejecting it would be a caller policy, not a data
/// invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyQuote {
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl DailyQuote {
    pub fn new(high: f64, low: f64, close: f64) -> Result<Self, ValidationError> {
        validate_non_negative("high", high)?;
        validate_non_negative("low", low)?;
        validate_non_negative("close", close)?;

        Ok(Self { high, low, close })
    }

    /// High minus low, the range term shared by the R2/R3 and S2/S3 formulas.
    pub fn range(&self) -> f64 {
        self.high - self.low
    }

    /// True when the quote violates the high >= low convention.
    pub fn is_inverted(&self) -> bool {
        self.high < self.low
    }
}

fn validate_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteValue { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeValue { field });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_conventional_quote() {
        let quote = DailyQuote::new(200.0, 100.0, 150.0).expect("quote should be valid");
        assert_eq!(quote.range(), 100.0);
        assert!(!quote.is_inverted());
    }

    #[test]
    fn accepts_inverted_range_but_flags_it() {
        let quote = DailyQuote::new(100.0, 200.0, 150.0).expect("inverted range is accepted");
        assert!(quote.is_inverted());
        assert_eq!(quote.range(), -100.0);
    }

    #[test]
    fn rejects_non_finite_values() {
        let err = DailyQuote::new(f64::NAN, 100.0, 150.0).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NonFiniteValue { field: "high" }
        ));

        let err = DailyQuote::new(200.0, f64::INFINITY, 150.0).expect_err("must fail");
        assert!(matches!(err, ValidationError::NonFiniteValue { field: "low" }));
    }

    #[test]
    fn rejects_negative_values() {
        let err = DailyQuote::new(200.0, 100.0, -1.0).expect_err("must fail");
        assert!(matches!(
            err,
            ValidationError::NegativeValue { field: "close" }
        ));
    }
}
