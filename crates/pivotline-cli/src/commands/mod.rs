mod fetch;
mod levels;

use serde::Serialize;
use uuid::Uuid;

use pivotline_core::{
    CprWidth, DailyQuote, DailyQuoteSnapshot, LevelRow, LevelSet, ProviderId, Symbol, UtcDateTime,
};

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// Metadata attached to every rendered report.
#[derive(Debug, Serialize)]
pub struct ReportMeta {
    pub request_id: String,
    pub generated_at: UtcDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<ProviderId>,
    pub warnings: Vec<String>,
}

/// Raw fetched values and timestamp shown in auto-fetch mode.
#[derive(Debug, Serialize)]
pub struct FetchInfo {
    pub symbol: Symbol,
    pub as_of: UtcDateTime,
    pub last_updated: String,
}

/// The full analysis payload: input quote, nine level rows, CPR width.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub quote: DailyQuote,
    pub levels: Vec<LevelRow>,
    pub cpr_width: CprWidth,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fetched: Option<FetchInfo>,
}

/// What a command produced: either a computed analysis or an informational
/// placeholder when no valid input was given.
#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandOutput {
    Placeholder { message: String },
    Analysis(AnalysisReport),
}

/// Envelope handed to the output renderer.
#[derive(Debug, Serialize)]
pub struct Report {
    pub meta: ReportMeta,
    #[serde(flatten)]
    pub output: CommandOutput,
}

#[derive(Debug)]
pub struct CommandResult {
    pub output: CommandOutput,
    pub warnings: Vec<String>,
    pub source: Option<ProviderId>,
}

impl CommandResult {
    pub fn placeholder(message: impl Into<String>) -> Self {
        Self {
            output: CommandOutput::Placeholder {
                message: message.into(),
            },
            warnings: Vec::new(),
            source: None,
        }
    }
}

pub async fn run(cli: &Cli) -> Result<Report, CliError> {
    let result = match &cli.command {
        Command::Levels(args) => levels::run(args)?,
        Command::Fetch(args) => fetch::run(args, cli.timeout_ms).await?,
    };

    Ok(Report {
        meta: ReportMeta {
            request_id: Uuid::new_v4().to_string(),
            generated_at: UtcDateTime::now(),
            source: result.source,
            warnings: result.warnings,
        },
        output: result.output,
    })
}

/// Build the analysis payload shared by both input modes.
fn analyze(quote: DailyQuote, fetched: Option<&DailyQuoteSnapshot>) -> Result<CommandResult, CliError> {
    let mut warnings = Vec::new();
    if quote.is_inverted() {
        warnings.push(format!(
            "high ({:.2}) is below low ({:.2}); levels are computed as given",
            quote.high, quote.low
        ));
    }

    let levels = LevelSet::compute(&quote);
    let cpr_width = levels.cpr_width()?;

    let fetched = fetched.map(|snapshot| FetchInfo {
        symbol: snapshot.symbol.clone(),
        as_of: snapshot.as_of,
        last_updated: snapshot.as_of.format_human(),
    });

    let source = fetched.as_ref().map(|_| ProviderId::Yahoo);

    Ok(CommandResult {
        output: CommandOutput::Analysis(AnalysisReport {
            quote,
            levels: levels.rows(),
            cpr_width,
            fetched,
        }),
        warnings,
        source,
    })
}
