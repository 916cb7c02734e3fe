//! Decode a Roman numeral into an integer

use numerus::decoder::from_roman;
use numerus::output::{DecodeOutcome, OutputMode};

/// Decode `numeral` and render the outcome.
///
/// Input is folded to uppercase before validation, so `mcmxciv` works at
/// the command line. Exits with status 1 after rendering a rejection, so
/// scripts can branch on the status alone.
pub fn decode(numeral: &str, output_mode: OutputMode) -> anyhow::Result<()> {
    log::debug!("decoding numeral: {numeral}");

    let normalized = numeral.to_uppercase();
    let outcome = DecodeOutcome::from_result(from_roman(&normalized));
    outcome.render(output_mode);

    if !outcome.success {
        std::process::exit(1);
    }

    Ok(())
}
