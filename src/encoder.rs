//! Integer to Roman numeral encoding
//!
//! Greedy descent over the encoding table: repeatedly subtract the largest
//! entry that still fits and append its glyphs. Because the table includes
//! the derived subtractive pairs, the output is always canonical form
//! (`IV` rather than `IIII`).

use crate::symbols::encoding_table;

/// Largest value whose encoding respects the repeat limits and therefore
/// round-trips through the validator
pub const MAX_CANONICAL: u32 = 3_999_999;

/// Encode a non-negative integer as a Roman numeral.
///
/// Zero encodes to the empty string; the Romans had no symbol for it.
/// Values beyond [`MAX_CANONICAL`] are representable only by stacking the
/// largest symbol past its usual repeat limit, so the output for such
/// values does not round-trip through the validator.
///
/// # Panics
///
/// Panics if the encoding table lacks an entry for 1, which would make the
/// descent unable to terminate. The table always contains it.
#[must_use]
pub fn to_roman(value: u32) -> String {
    let table = encoding_table();
    let mut remaining = value;
    let mut numeral = String::new();

    while remaining > 0 {
        let entry = table
            .iter()
            .rev()
            .find(|entry| entry.value <= remaining)
            .expect("encoding table contains an entry for 1");
        numeral.push_str(&entry.glyph);
        remaining -= entry.value;
    }

    numeral
}
