use crate::cli::OutputFormat;
use crate::commands::{AnalysisReport, CommandOutput, Report};
use crate::error::CliError;

pub fn render(report: &Report, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(report)?
            } else {
                serde_json::to_string(report)?
            };
            println!("{payload}");
        }
        OutputFormat::Table => render_table(report),
    }

    Ok(())
}

fn render_table(report: &Report) {
    if !report.meta.warnings.is_empty() {
        for warning in &report.meta.warnings {
            println!("warning: {warning}");
        }
        println!();
    }

    match &report.output {
        CommandOutput::Placeholder { message } => println!("{message}"),
        CommandOutput::Analysis(analysis) => render_analysis(analysis),
    }
}

fn render_analysis(analysis: &AnalysisReport) {
    if let Some(fetched) = &analysis.fetched {
        println!("Fetched {}", fetched.symbol);
        println!(
            "High: {:.2}   Low: {:.2}   Close: {:.2}",
            analysis.quote.high, analysis.quote.low, analysis.quote.close
        );
        println!("Last updated: {}", fetched.last_updated);
        println!();
    }

    println!("Pivot Point Levels");
    println!("{:<20} {:<18} {:>12}", "Level", "Formula", "Value");
    for row in &analysis.levels {
        println!("{:<20} {:<18} {:>12.2}", row.name, row.formula, row.value);
    }

    println!();
    println!("Central Pivot Range Width");
    println!("CP -> UB: {:.2}%", analysis.cpr_width.upper_pct);
    println!("CP -> LB: {:.2}%", analysis.cpr_width.lower_pct);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::ReportMeta;
    use pivotline_core::UtcDateTime;

    #[test]
    fn json_report_carries_levels_and_width() {
        let report = Report {
            meta: ReportMeta {
                request_id: String::from("test-request"),
                generated_at: UtcDateTime::parse("2026-08-29T10:00:00Z").expect("valid ts"),
                source: None,
                warnings: Vec::new(),
            },
            output: CommandOutput::Placeholder {
                message: String::from("no input"),
            },
        };

        let value: serde_json::Value =
            serde_json::from_str(&serde_json::to_string(&report).expect("must serialize"))
                .expect("must parse back");

        assert_eq!(value["meta"]["request_id"], "test-request");
        assert_eq!(value["kind"], "placeholder");
        assert_eq!(value["message"], "no input");
    }
}
