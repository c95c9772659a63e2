use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use log::debug;
use serde::Deserialize;

use crate::data_source::{
    DailyQuoteRequest, DailyQuoteSnapshot, DataSource, ProviderId, SourceError,
};
use crate::http_client::{HttpClient, HttpRequest, NoopHttpClient};
use crate::{DailyQuote, Symbol, UtcDateTime};

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo Finance daily-quote adapter.
///
/// Real mode calls the v8 chart endpoint (`range=1d&interval=1d`), which
/// needs no cookie/crumb authentication, and normalizes the most recent
/// complete bar. When the transport reports itself as a mock, the adapter
/// instead produces deterministic HLC data derived from the symbol so tests
/// never touch the network.
#[derive(Clone)]
pub struct YahooDailyAdapter {
    http_client: Arc<dyn HttpClient>,
    use_real_api: bool,
    timeout_ms: u64,
}

impl Default for YahooDailyAdapter {
    fn default() -> Self {
        Self {
            http_client: Arc::new(NoopHttpClient),
            use_real_api: false,
            timeout_ms: 10_000,
        }
    }
}

impl YahooDailyAdapter {
    pub fn with_http_client(http_client: Arc<dyn HttpClient>) -> Self {
        let use_real_api = !http_client.is_mock();
        Self {
            http_client,
            use_real_api,
            ..Self::default()
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl DataSource for YahooDailyAdapter {
    fn id(&self) -> ProviderId {
        ProviderId::Yahoo
    }

    fn daily_quote<'a>(
        &'a self,
        req: DailyQuoteRequest,
    ) -> Pin<Box<dyn Future<Output = Result<DailyQuoteSnapshot, SourceError>> + Send + 'a>> {
        Box::pin(async move {
            if self.use_real_api {
                self.fetch_real_daily(&req).await
            } else {
                fake_snapshot(&req.symbol)
            }
        })
    }
}

impl YahooDailyAdapter {
    async fn fetch_real_daily(
        &self,
        req: &DailyQuoteRequest,
    ) -> Result<DailyQuoteSnapshot, SourceError> {
        let endpoint = format!(
            "{CHART_BASE_URL}/{}?range=1d&interval=1d",
            urlencoding::encode(req.symbol.as_str())
        );

        debug!("fetching daily chart for {}", req.symbol);

        let request = HttpRequest::get(&endpoint)
            .with_header("referer", "https://finance.yahoo.com/")
            .with_timeout_ms(self.timeout_ms);

        let response = self.http_client.execute(request).await.map_err(|error| {
            if error.retryable() {
                SourceError::unavailable(format!("yahoo transport error: {}", error.message()))
            } else {
                SourceError::internal(format!("yahoo transport error: {}", error.message()))
            }
        })?;

        if !response.is_success() {
            // 4xx means the request itself is bad (unknown symbol, malformed
            // path); retrying it would return the same answer.
            if response.status >= 400 && response.status < 500 {
                return Err(SourceError::invalid_request(format!(
                    "yahoo rejected the request with status {}",
                    response.status
                )));
            }
            return Err(SourceError::unavailable(format!(
                "yahoo returned status {}",
                response.status
            )));
        }

        parse_chart_response(&response.body, &req.symbol)
    }
}

/// Parse a v8 chart response and extract the most recent complete bar.
fn parse_chart_response(body: &str, symbol: &Symbol) -> Result<DailyQuoteSnapshot, SourceError> {
    let chart_response: YahooChartResponse = serde_json::from_str(body)
        .map_err(|e| SourceError::internal(format!("failed to parse yahoo chart: {e}")))?;

    if let Some(error) = &chart_response.chart.error {
        if !error.is_null() {
            return Err(SourceError::unavailable(format!(
                "yahoo chart API error: {error}"
            )));
        }
    }

    let result = chart_response
        .chart
        .result
        .first()
        .ok_or_else(|| SourceError::internal("no chart data in response"))?;

    let quote = result
        .indicators
        .quote
        .first()
        .ok_or_else(|| SourceError::internal("no quote data in chart response"))?;

    // Yahoo pads incomplete bars with nulls; walk back to the newest index
    // where high, low, and close are all present.
    let bar_count = quote
        .high
        .len()
        .min(quote.low.len())
        .min(quote.close.len());

    let complete = (0..bar_count).rev().find_map(|i| {
        match (quote.high[i], quote.low[i], quote.close[i]) {
            (Some(high), Some(low), Some(close)) => Some((high, low, close)),
            _ => None,
        }
    });

    let (high, low, close) =
        complete.ok_or_else(|| SourceError::internal("no complete daily bar in chart response"))?;

    let daily = DailyQuote::new(high, low, close)
        .map_err(|e| SourceError::internal(format!("yahoo bar failed validation: {e}")))?;

    Ok(DailyQuoteSnapshot {
        symbol: symbol.clone(),
        quote: daily,
        as_of: UtcDateTime::now(),
    })
}

/// Deterministic offline snapshot derived from the symbol bytes.
fn fake_snapshot(symbol: &Symbol) -> Result<DailyQuoteSnapshot, SourceError> {
    let seed = symbol_seed(symbol);
    let base = 9_000.0 + (seed % 4_000) as f64 / 10.0;

    let daily = DailyQuote::new(base + 120.0, base - 80.0, base + 30.0)
        .map_err(|e| SourceError::internal(e.to_string()))?;

    Ok(DailyQuoteSnapshot {
        symbol: symbol.clone(),
        quote: daily,
        as_of: UtcDateTime::now(),
    })
}

fn symbol_seed(symbol: &Symbol) -> u64 {
    symbol.as_str().bytes().fold(0_u64, |acc, byte| {
        acc.wrapping_mul(33).wrapping_add(byte as u64)
    })
}

// Yahoo Finance chart API response structures
#[derive(Debug, Clone, Deserialize)]
struct YahooChartResponse {
    chart: YahooChartData,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartData {
    #[serde(default)]
    result: Vec<YahooChartResult>,
    #[serde(default)]
    error: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartResult {
    indicators: YahooChartIndicators,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartIndicators {
    quote: Vec<YahooChartQuote>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChartQuote {
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_source::SourceErrorKind;

    fn nifty() -> Symbol {
        Symbol::parse("^NSEI").expect("valid symbol")
    }

    #[test]
    fn parses_complete_chart_body() {
        let body = r#"{
            "chart": {
                "result": [{
                    "timestamp": [1756425600],
                    "indicators": {
                        "quote": [{
                            "high": [24500.5],
                            "low": [24300.25],
                            "close": [24450.0]
                        }]
                    }
                }],
                "error": null
            }
        }"#;

        let snapshot = parse_chart_response(body, &nifty()).expect("must parse");
        assert_eq!(snapshot.quote.high, 24500.5);
        assert_eq!(snapshot.quote.low, 24300.25);
        assert_eq!(snapshot.quote.close, 24450.0);
        assert_eq!(snapshot.symbol.as_str(), "^NSEI");
    }

    #[test]
    fn skips_trailing_null_padded_bars() {
        let body = r#"{
            "chart": {
                "result": [{
                    "indicators": {
                        "quote": [{
                            "high": [24500.5, null],
                            "low": [24300.25, null],
                            "close": [24450.0, null]
                        }]
                    }
                }],
                "error": null
            }
        }"#;

        let snapshot = parse_chart_response(body, &nifty()).expect("must parse");
        assert_eq!(snapshot.quote.close, 24450.0);
    }

    #[test]
    fn all_null_bars_is_internal_error() {
        let body = r#"{
            "chart": {
                "result": [{
                    "indicators": {
                        "quote": [{
                            "high": [null],
                            "low": [null],
                            "close": [null]
                        }]
                    }
                }],
                "error": null
            }
        }"#;

        let err = parse_chart_response(body, &nifty()).expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::Internal);
    }

    #[test]
    fn api_error_is_unavailable() {
        let body = r#"{
            "chart": {
                "result": [],
                "error": {"code": "Not Found", "description": "No data found"}
            }
        }"#;

        let err = parse_chart_response(body, &nifty()).expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::Unavailable);
    }

    #[test]
    fn malformed_body_is_internal_error() {
        let err = parse_chart_response("not json", &nifty()).expect_err("must fail");
        assert_eq!(err.kind(), SourceErrorKind::Internal);
    }

    #[test]
    fn fake_snapshot_is_deterministic_and_ordered() {
        let first = fake_snapshot(&nifty()).expect("must build");
        let second = fake_snapshot(&nifty()).expect("must build");

        assert_eq!(first.quote, second.quote);
        assert!(first.quote.high > first.quote.low);
        assert!(first.quote.low > 0.0);
    }
}
