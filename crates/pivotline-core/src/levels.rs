//! Classical floor-trader pivot levels.
//!
//! Nine levels are derived from one day's High/Low/Close: three resistances,
//! the Central Pivot Range (upper boundary, central pivot, lower boundary),
//! and three supports. The calculation is a pure function with no rounding;
//! two-decimal formatting is strictly a rendering concern.

use serde::{Deserialize, Serialize};

use crate::DailyQuote;

/// The nine fixed pivot level identifiers, in table order (resistance down
/// to support).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotLevel {
    R3,
    R2,
    R1,
    UpperBoundary,
    CentralPivot,
    LowerBoundary,
    S1,
    S2,
    S3,
}

impl PivotLevel {
    /// All levels in display order.
    pub const ALL: [Self; 9] = [
        Self::R3,
        Self::R2,
        Self::R1,
        Self::UpperBoundary,
        Self::CentralPivot,
        Self::LowerBoundary,
        Self::S1,
        Self::S2,
        Self::S3,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::R3 => "Resistance (R3)",
            Self::R2 => "Resistance (R2)",
            Self::R1 => "Resistance (R1)",
            Self::UpperBoundary => "Upper Boundary",
            Self::CentralPivot => "Central Pivot (CP)",
            Self::LowerBoundary => "Lower Boundary",
            Self::S1 => "Support (S1)",
            Self::S2 => "Support (S2)",
            Self::S3 => "Support (S3)",
        }
    }

    /// Human-readable formula label shown alongside the value.
    pub const fn formula(self) -> &'static str {
        match self {
            Self::R3 => "R1 + (H - L)",
            Self::R2 => "CP + (H - L)",
            Self::R1 => "(2 x CP) - L",
            Self::UpperBoundary => "(CP - LB) + CP",
            Self::CentralPivot => "(H + L + C) / 3",
            Self::LowerBoundary => "(H + L) / 2",
            Self::S1 => "(2 x CP) - H",
            Self::S2 => "CP - (H - L)",
            Self::S3 => "S1 - (H - L)",
        }
    }
}

/// One rendered row of the levels table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LevelRow {
    pub level: PivotLevel,
    pub name: &'static str,
    pub formula: &'static str,
    pub value: f64,
}

/// All nine pivot levels computed atomically from one [`DailyQuote`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LevelSet {
    pub r3: f64,
    pub r2: f64,
    pub r1: f64,
    pub upper_boundary: f64,
    pub central_pivot: f64,
    pub lower_boundary: f64,
    pub s1: f64,
    pub s2: f64,
    pub s3: f64,
}

impl LevelSet {
    /// Compute all levels from a quote. Pure and total over finite inputs:
    /// degenerate quotes (high == low == close, or an inverted range) still
    /// yield a well-defined set.
    pub fn compute(quote: &DailyQuote) -> Self {
        let (h, l, c) = (quote.high, quote.low, quote.close);

        let pp = (h + l + c) / 3.0;
        let lb = (h + l) / 2.0;
        let ub = 2.0 * pp - lb;
        let hl = h - l;

        Self {
            r3: 2.0 * pp - l + hl,
            r2: pp + hl,
            r1: 2.0 * pp - l,
            upper_boundary: ub,
            central_pivot: pp,
            lower_boundary: lb,
            s1: 2.0 * pp - h,
            s2: pp - hl,
            s3: 2.0 * pp - h - hl,
        }
    }

    pub const fn value(&self, level: PivotLevel) -> f64 {
        match level {
            PivotLevel::R3 => self.r3,
            PivotLevel::R2 => self.r2,
            PivotLevel::R1 => self.r1,
            PivotLevel::UpperBoundary => self.upper_boundary,
            PivotLevel::CentralPivot => self.central_pivot,
            PivotLevel::LowerBoundary => self.lower_boundary,
            PivotLevel::S1 => self.s1,
            PivotLevel::S2 => self.s2,
            PivotLevel::S3 => self.s3,
        }
    }

    /// The nine `(level, name, formula, value)` rows in display order.
    pub fn rows(&self) -> Vec<LevelRow> {
        PivotLevel::ALL
            .iter()
            .map(|&level| LevelRow {
                level,
                name: level.as_str(),
                formula: level.formula(),
                value: self.value(level),
            })
            .collect()
    }

    /// CPR width of this set, as percentages of the central pivot.
    pub fn cpr_width(&self) -> Result<crate::CprWidth, crate::PivotError> {
        crate::CprWidth::compute(self.central_pivot, self.lower_boundary, self.upper_boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_reference_scenario() {
        let quote = DailyQuote::new(200.0, 100.0, 150.0).expect("valid quote");
        let levels = LevelSet::compute(&quote);

        assert_eq!(levels.central_pivot, 150.0);
        assert_eq!(levels.lower_boundary, 150.0);
        assert_eq!(levels.upper_boundary, 150.0);
        assert_eq!(levels.r1, 200.0);
        assert_eq!(levels.r2, 250.0);
        assert_eq!(levels.r3, 300.0);
        assert_eq!(levels.s1, 100.0);
        assert_eq!(levels.s2, 50.0);
        assert_eq!(levels.s3, -50.0);
    }

    #[test]
    fn rows_follow_display_order() {
        let quote = DailyQuote::new(200.0, 100.0, 150.0).expect("valid quote");
        let rows = LevelSet::compute(&quote).rows();

        assert_eq!(rows.len(), 9);
        assert_eq!(rows[0].name, "Resistance (R3)");
        assert_eq!(rows[4].name, "Central Pivot (CP)");
        assert_eq!(rows[4].formula, "(H + L + C) / 3");
        assert_eq!(rows[8].name, "Support (S3)");
    }

    #[test]
    fn degenerate_quote_collapses_to_close() {
        let quote = DailyQuote::new(100.0, 100.0, 100.0).expect("valid quote");
        let levels = LevelSet::compute(&quote);

        for level in PivotLevel::ALL {
            assert_eq!(levels.value(level), 100.0, "{} must collapse", level.as_str());
        }
    }
}
