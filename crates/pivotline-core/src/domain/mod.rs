//! Canonical domain types for pivotline.
//!
//! All models validate their invariants at construction time:
//!
//! - [`DailyQuote`] requires finite, non-negative High/Low/Close values,
//!   but deliberately does NOT enforce high >= low. An inverted range is
//!   arithmetically well-defined for the pivot formulas; callers decide
//!   whether to warn on it (see [`DailyQuote::is_inverted`]).
//! - [`Symbol`] normalizes tickers to uppercase and accepts the `^` index
//!   prefix used by identifiers such as `^NSEI`.
//! - [`UtcDateTime`] is an RFC3339 timestamp guaranteed to be UTC.

mod quote;
mod symbol;
mod timestamp;

pub use quote::DailyQuote;
pub use symbol::Symbol;
pub use timestamp::UtcDateTime;
