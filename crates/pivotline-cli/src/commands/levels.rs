use pivotline_core::DailyQuote;

use crate::cli::LevelsArgs;
use crate::error::CliError;

use super::CommandResult;

const PLACEHOLDER: &str = "Please enter valid High, Low and Close values to see the pivot point analysis.";

pub fn run(args: &LevelsArgs) -> Result<CommandResult, CliError> {
    // Unset fields default to 0.0; an all-or-nothing check keeps parity
    // with the "any falsy input" rule of the manual entry form.
    if args.high == 0.0 || args.low == 0.0 || args.close == 0.0 {
        return Ok(CommandResult::placeholder(PLACEHOLDER));
    }

    let quote = DailyQuote::new(args.high, args.low, args.close)?;
    super::analyze(quote, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CommandOutput;

    fn args(high: f64, low: f64, close: f64) -> LevelsArgs {
        LevelsArgs { high, low, close }
    }

    #[test]
    fn missing_input_yields_placeholder_not_table() {
        let result = run(&args(0.0, 0.0, 0.0)).expect("placeholder is not an error");
        assert!(matches!(result.output, CommandOutput::Placeholder { .. }));

        let result = run(&args(200.0, 0.0, 150.0)).expect("placeholder is not an error");
        assert!(matches!(result.output, CommandOutput::Placeholder { .. }));
    }

    #[test]
    fn valid_input_yields_analysis() {
        let result = run(&args(200.0, 100.0, 150.0)).expect("must compute");

        let CommandOutput::Analysis(report) = result.output else {
            panic!("expected analysis output");
        };
        assert_eq!(report.levels.len(), 9);
        assert!(result.warnings.is_empty());
        assert!(report.fetched.is_none());
    }

    #[test]
    fn inverted_range_computes_with_warning() {
        let result = run(&args(100.0, 200.0, 150.0)).expect("must compute");

        assert!(matches!(result.output, CommandOutput::Analysis(_)));
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("below low"));
    }

    #[test]
    fn negative_input_is_a_validation_error() {
        let err = run(&args(200.0, -100.0, 150.0)).expect_err("must fail");
        assert!(matches!(err, CliError::Validation(_)));
    }
}
