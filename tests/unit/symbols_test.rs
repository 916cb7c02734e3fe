//! Tests for the symbol tables
//!
//! The basic table drives validation and decoding; the derived encoding
//! table drives encoding. These tests pin the relations between them.

use numerus::symbols::{BASIC, MACRON, encoding_table, lookup, tokenize};

// =============================================================================
// Basic Table Tests
// =============================================================================

#[test]
fn basic_table_has_thirteen_symbols() {
    assert_eq!(BASIC.len(), 13);
    assert_eq!(BASIC[0].glyph, "I");
    assert_eq!(BASIC[BASIC.len() - 1].value, 1_000_000);
}

#[test]
fn macron_symbols_scale_their_base_letters() {
    for (base, extended) in [("V", 5_000), ("X", 10_000), ("L", 50_000), ("C", 100_000),
        ("D", 500_000), ("M", 1_000_000)]
    {
        let glyph = format!("{base}{MACRON}");
        let symbol = lookup(&glyph).expect("macron variant registered");
        assert_eq!(symbol.value, extended);

        let plain = lookup(base).expect("base letter registered");
        assert_eq!(symbol.value, plain.value * 1_000);
        assert_eq!(symbol.repeat_limit, plain.repeat_limit);
    }
}

#[test]
fn single_use_symbols_are_never_prefixes() {
    for symbol in &BASIC {
        if let Some(prefix) = symbol.prefix {
            let lower = lookup(prefix).expect("prefix registered");
            assert_eq!(lower.repeat_limit, 3, "{} prefixed by {}", symbol.glyph, prefix);
        }
    }
}

#[test]
fn lookup_misses_unknown_glyphs() {
    assert!(lookup("Q").is_none());
    assert!(lookup("i").is_none());
    assert!(lookup("IV").is_none());
}

// =============================================================================
// Encoding Table Tests
// =============================================================================

#[test]
fn encoding_table_interleaves_pairs_between_basics() {
    let table = encoding_table();
    assert_eq!(table.len(), 25);

    // Each derived pair sits strictly between two basic values.
    let values: Vec<u32> = table.iter().map(|entry| entry.value).collect();
    assert!(values.contains(&4) && values.contains(&5));
    assert!(values.contains(&900) && values.contains(&1_000));
    assert!(values.contains(&900_000) && values.contains(&1_000_000));
}

#[test]
fn encoding_table_is_shared_across_calls() {
    let first = encoding_table();
    let second = encoding_table();
    assert!(std::ptr::eq(first, second));
}

// =============================================================================
// Tokenizer Tests
// =============================================================================

#[test]
fn tokenize_walks_macron_pairs_as_one_symbol() {
    let sequence = tokenize("X\u{305}IX").expect("valid glyphs");
    let values: Vec<u32> = sequence.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![10_000, 1, 10]);
}

#[test]
fn tokenize_rejects_stray_macrons() {
    assert!(tokenize("I\u{305}").is_none());
    assert!(tokenize("\u{305}X").is_none());
}

#[test]
fn tokenize_rejects_anything_outside_the_alphabet() {
    assert!(tokenize("XIV ").is_none());
    assert!(tokenize("X1V").is_none());
    assert!(tokenize("Ⅻ").is_none());
}
