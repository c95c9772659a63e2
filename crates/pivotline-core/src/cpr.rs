use serde::{Deserialize, Serialize};

use crate::PivotError;

/// Central Pivot Range width, as percentage distances from the central
/// pivot to each boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CprWidth {
    /// Percentage distance CP -> upper boundary, relative to CP.
    pub upper_pct: f64,
    /// Percentage distance lower boundary -> CP, relative to CP.
    pub lower_pct: f64,
}

impl CprWidth {
    /// Compute the width percentages. A zero central pivot has no defined
    /// ratio and is rejected rather than propagated as an IEEE infinity.
    pub fn compute(
        central_pivot: f64,
        lower_boundary: f64,
        upper_boundary: f64,
    ) -> Result<Self, PivotError> {
        if central_pivot == 0.0 {
            return Err(PivotError::ZeroCentralPivot);
        }

        Ok(Self {
            upper_pct: (upper_boundary - central_pivot) / central_pivot * 100.0,
            lower_pct: (central_pivot - lower_boundary) / central_pivot * 100.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapsed_range_has_zero_width() {
        let width = CprWidth::compute(150.0, 150.0, 150.0).expect("must compute");
        assert_eq!(width.upper_pct, 0.0);
        assert_eq!(width.lower_pct, 0.0);
    }

    #[test]
    fn symmetric_range_has_symmetric_width() {
        let width = CprWidth::compute(100.0, 90.0, 110.0).expect("must compute");
        assert_eq!(width.upper_pct, 10.0);
        assert_eq!(width.lower_pct, 10.0);
    }

    #[test]
    fn zero_pivot_is_a_defined_error() {
        let err = CprWidth::compute(0.0, 0.0, 0.0).expect_err("must fail");
        assert_eq!(err, PivotError::ZeroCentralPivot);
    }
}
