//! Encode an integer as a Roman numeral

use numerus::encoder::{MAX_CANONICAL, to_roman};
use numerus::output::{EncodeOutcome, OutputMode};

/// Encode `value` and render the outcome
pub fn encode(value: u32, output_mode: OutputMode) -> anyhow::Result<()> {
    log::debug!("encoding value: {value}");

    if value > MAX_CANONICAL {
        log::warn!(
            "{value} exceeds {MAX_CANONICAL}; output stacks the largest symbol past its repeat limit"
        );
    }

    let outcome = EncodeOutcome {
        value,
        numeral: to_roman(value),
    };
    outcome.render(output_mode);

    Ok(())
}
