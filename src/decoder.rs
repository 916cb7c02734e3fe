//! Roman numeral to integer decoding
//!
//! Decoding is a single left-to-right fold over the symbol sequence. A
//! symbol followed by the symbol it is the registered prefix of counts as
//! one subtractive pair worth `upper - lower`; everything else adds its
//! own value. The fold trusts its input, so the public entry point runs
//! the validator first.

use crate::symbols::tokenize;
use crate::validator::{ValidationError, validate};

/// Validate a candidate numeral and decode it.
///
/// The input is taken as written: uppercase is expected and whitespace is
/// significant. Callers that accept looser input normalize before calling.
pub fn from_roman(input: &str) -> Result<u32, ValidationError> {
    let numeral = validate(input)?;
    Ok(decode_validated(numeral))
}

/// Fold an already validated numeral into its value.
///
/// An empty numeral decodes to zero, mirroring the encoder's empty
/// output for zero.
///
/// # Panics
///
/// Panics if the input contains glyphs outside the symbol table. Run
/// [`validate`] first, or use [`from_roman`].
#[must_use]
pub fn decode_validated(numeral: &str) -> u32 {
    let sequence =
        tokenize(numeral).expect("decoding requires input that already passed validation");

    let mut total = 0;
    let mut index = 0;
    while index < sequence.len() {
        let current = sequence[index];
        let (gain, advance) = sequence
            .get(index + 1)
            .copied()
            .filter(|next| next.prefix == Some(current.glyph))
            .map_or((current.value, 1), |upper| (upper.value - current.value, 2));

        total += gain;
        index += advance;
    }

    total
}
