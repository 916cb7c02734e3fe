//! Roman numeral symbol tables
//!
//! Holds the single source of truth for the numeral alphabet: the ordered
//! basic symbol table (values, repeat limits, subtractive prefixes), the
//! derived encoding table the encoder walks, and the tokenizer that splits
//! an input string into basic symbols.
//!
//! Symbols above `M` use the combining macron (`U+0305`) after the base
//! letter, so a glyph is one or two `char`s but always one symbol.

use std::sync::OnceLock;

/// Combining macron, suffixed to a base letter for the 1000x symbols
pub const MACRON: char = '\u{0305}';

/// One basic numeral symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    /// Integer value of the symbol
    pub value: u32,

    /// The glyph: a base letter, optionally followed by [`MACRON`]
    pub glyph: &'static str,

    /// Maximum allowed occurrences: 1 for quinary symbols, 3 for unary ones
    pub repeat_limit: u8,

    /// Glyph of the one symbol that may subtractively precede this one
    pub prefix: Option<&'static str>,
}

/// The basic symbol table, ordered by strictly increasing value.
///
/// This is the decoding table: the validator and decoder work from it
/// directly, recognizing subtractive pairs through the `prefix` relation
/// rather than through precomputed pair entries.
pub static BASIC: [Symbol; 13] = [
    Symbol { value: 1, glyph: "I", repeat_limit: 3, prefix: None },
    Symbol { value: 5, glyph: "V", repeat_limit: 1, prefix: Some("I") },
    Symbol { value: 10, glyph: "X", repeat_limit: 3, prefix: Some("I") },
    Symbol { value: 50, glyph: "L", repeat_limit: 1, prefix: Some("X") },
    Symbol { value: 100, glyph: "C", repeat_limit: 3, prefix: Some("X") },
    Symbol { value: 500, glyph: "D", repeat_limit: 1, prefix: Some("C") },
    Symbol { value: 1_000, glyph: "M", repeat_limit: 3, prefix: Some("C") },
    Symbol { value: 5_000, glyph: "V\u{305}", repeat_limit: 1, prefix: Some("M") },
    Symbol { value: 10_000, glyph: "X\u{305}", repeat_limit: 3, prefix: Some("M") },
    Symbol { value: 50_000, glyph: "L\u{305}", repeat_limit: 1, prefix: Some("X\u{305}") },
    Symbol { value: 100_000, glyph: "C\u{305}", repeat_limit: 3, prefix: Some("X\u{305}") },
    Symbol { value: 500_000, glyph: "D\u{305}", repeat_limit: 1, prefix: Some("C\u{305}") },
    Symbol { value: 1_000_000, glyph: "M\u{305}", repeat_limit: 3, prefix: Some("C\u{305}") },
];

/// Power-of-ten anchors; each contributes two derived subtractive pairs
const DECADE_ANCHORS: [u32; 6] = [10, 100, 1_000, 10_000, 100_000, 1_000_000];

/// One entry of the encoding table: a value and the glyph sequence for it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingEntry {
    /// Integer value of the entry
    pub value: u32,

    /// Glyph sequence: one basic glyph, or a derived subtractive pair
    pub glyph: String,
}

/// The encoding table: basic entries merged with the derived subtractive
/// pairs, sorted ascending by value. Used only by the encoder.
///
/// Built once on first use; construction is idempotent and safe under
/// concurrent first use.
///
/// # Panics
///
/// Panics on first use if the basic table is malformed (non-increasing
/// values, or a decade anchor without two smaller entries below it). That
/// is a defect in [`BASIC`], not a runtime condition.
#[must_use]
pub fn encoding_table() -> &'static [EncodingEntry] {
    static TABLE: OnceLock<Vec<EncodingEntry>> = OnceLock::new();
    TABLE.get_or_init(build_encoding_table)
}

/// Derive the subtractive pairs from the basic table and merge them in.
///
/// For each decade anchor (the "upper" symbol), the two largest basic
/// values below it form the pair glyphs: `(middle - lower, lower+middle)`
/// and `(upper - lower, lower+upper)`. With the standard table this yields
/// IV/IX, XL/XC, CD/CM and their macron-decade counterparts.
fn build_encoding_table() -> Vec<EncodingEntry> {
    for adjacent in BASIC.windows(2) {
        assert!(
            adjacent[0].value < adjacent[1].value,
            "basic symbol values must be strictly increasing"
        );
    }

    let mut table: Vec<EncodingEntry> = BASIC
        .iter()
        .map(|symbol| EncodingEntry {
            value: symbol.value,
            glyph: symbol.glyph.to_string(),
        })
        .collect();

    for anchor in DECADE_ANCHORS {
        let upper = BASIC
            .iter()
            .find(|s| s.value == anchor)
            .expect("decade anchor has a basic symbol");
        let middle = BASIC
            .iter()
            .rev()
            .find(|s| s.value < upper.value)
            .expect("decade anchor has a symbol below it");
        let lower = BASIC
            .iter()
            .rev()
            .find(|s| s.value < middle.value)
            .expect("decade anchor has two symbols below it");

        table.push(EncodingEntry {
            value: middle.value - lower.value,
            glyph: format!("{}{}", lower.glyph, middle.glyph),
        });
        table.push(EncodingEntry {
            value: upper.value - lower.value,
            glyph: format!("{}{}", lower.glyph, upper.glyph),
        });
    }

    table.sort_by_key(|entry| entry.value);

    for adjacent in table.windows(2) {
        assert!(
            adjacent[0].value < adjacent[1].value,
            "encoding table values must be unique"
        );
    }

    table
}

/// Look up a basic symbol by its glyph
#[must_use]
pub fn lookup(glyph: &str) -> Option<&'static Symbol> {
    BASIC.iter().find(|symbol| symbol.glyph == glyph)
}

/// Split a string into basic symbols.
///
/// A base letter followed by [`MACRON`] is consumed as one glyph. Returns
/// `None` as soon as any piece of the input is not a basic glyph; an empty
/// input tokenizes to an empty sequence (emptiness is the validator's
/// concern, not the tokenizer's).
#[must_use]
pub fn tokenize(text: &str) -> Option<Vec<&'static Symbol>> {
    let mut sequence = Vec::new();
    let mut chars = text.chars().peekable();

    while let Some(letter) = chars.next() {
        let mut glyph = String::from(letter);
        if chars.next_if_eq(&MACRON).is_some() {
            glyph.push(MACRON);
        }
        sequence.push(lookup(&glyph)?);
    }

    Some(sequence)
}
