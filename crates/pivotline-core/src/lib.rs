//! Core contracts for pivotline.
//!
//! This crate contains:
//! - Canonical domain models and validation
//! - The pivot level and CPR width calculators
//! - The data source trait and the Yahoo daily-quote adapter
//! - The HTTP transport seam used by adapters

pub mod adapters;
pub mod cpr;
pub mod data_source;
pub mod domain;
pub mod error;
pub mod http_client;
pub mod levels;

pub use adapters::YahooDailyAdapter;
pub use cpr::CprWidth;
pub use data_source::{
    DailyQuoteRequest, DailyQuoteSnapshot, DataSource, ProviderId, SourceError, SourceErrorKind,
};
pub use domain::{DailyQuote, Symbol, UtcDateTime};
pub use error::{PivotError, ValidationError};
pub use http_client::{
    HttpClient, HttpError, HttpRequest, HttpResponse, NoopHttpClient, ReqwestHttpClient,
};
pub use levels::{LevelRow, LevelSet, PivotLevel};

/// Default instrument when none is given: the NIFTY 50 index.
pub const DEFAULT_SYMBOL: &str = "^NSEI";
