use std::sync::Arc;

use pivotline_core::{
    DailyQuoteRequest, DataSource, HttpClient, ReqwestHttpClient, Symbol, YahooDailyAdapter,
};

use crate::cli::FetchArgs;
use crate::error::CliError;

use super::CommandResult;

pub async fn run(args: &FetchArgs, timeout_ms: u64) -> Result<CommandResult, CliError> {
    run_with_transport(args, timeout_ms, Arc::new(ReqwestHttpClient::new())).await
}

/// Command body with the transport injected, so tests can drive the full
/// fetch path without network access.
async fn run_with_transport(
    args: &FetchArgs,
    timeout_ms: u64,
    http_client: Arc<dyn HttpClient>,
) -> Result<CommandResult, CliError> {
    let symbol = Symbol::parse(&args.symbol)?;

    let adapter = YahooDailyAdapter::with_http_client(http_client).with_timeout_ms(timeout_ms);

    let snapshot = adapter
        .daily_quote(DailyQuoteRequest::new(symbol))
        .await?;

    super::analyze(snapshot.quote, Some(&snapshot))
}
