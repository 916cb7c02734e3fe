//! Roman numeral grammar validation
//!
//! A candidate numeral passes four checks in a fixed order: emptiness,
//! symbol membership, repetition limits, then ordering. The first failure
//! wins, so an input that is both misspelled and misordered reports the
//! spelling problem.
//!
//! Validation is strict about its input: no trimming, no case folding.
//! Callers normalize before validating.

use thiserror::Error;

use crate::symbols::{BASIC, tokenize};

/// Why a candidate numeral was rejected
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The input is empty or only whitespace
    #[error("input is empty")]
    Empty,

    /// The input contains a character sequence that is not a symbol
    #[error("input contains a character that is not a roman numeral symbol")]
    Symbol,

    /// A symbol occurs more often than its repeat limit allows
    #[error("a symbol repeats beyond its limit")]
    Repeat,

    /// Symbols do not descend in value, or a subtractive pair is malformed
    #[error("symbols are out of order or form an invalid subtractive pair")]
    OrderOrComplex,
}

impl ValidationError {
    /// Stable machine-readable token for this rejection
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Empty => "InvalidEmpty",
            Self::Symbol => "InvalidSymbol",
            Self::Repeat => "InvalidRepeat",
            Self::OrderOrComplex => "InvalidOrderOrComplex",
        }
    }
}

/// Run the full check chain over a candidate numeral.
///
/// Returns the input unchanged on success so the call chains into the
/// decoder. Expects uppercase input; lowercase letters fail the symbol
/// check rather than being folded here.
pub fn validate(input: &str) -> Result<&str, ValidationError> {
    let input = check_not_empty(input)?;
    let input = check_symbols(input)?;
    let input = check_repetition(input)?;
    check_ordering(input)
}

/// Reject empty and whitespace-only input.
///
/// Trimming applies to this test only; the untrimmed input flows on, so
/// surrounding whitespace still fails the symbol check.
fn check_not_empty(input: &str) -> Result<&str, ValidationError> {
    if input.trim().is_empty() {
        Err(ValidationError::Empty)
    } else {
        Ok(input)
    }
}

/// Reject input that does not tokenize into basic symbols
fn check_symbols(input: &str) -> Result<&str, ValidationError> {
    if tokenize(input).is_some() {
        Ok(input)
    } else {
        Err(ValidationError::Symbol)
    }
}

/// Enforce the repeat limits.
///
/// Limit-1 symbols may occur once in the whole numeral. Limit-3 symbols
/// may run at most three deep consecutively; `XXXIX` is fine with four
/// `X` in total because the run is broken.
fn check_repetition(input: &str) -> Result<&str, ValidationError> {
    let Some(sequence) = tokenize(input) else {
        return Err(ValidationError::Symbol);
    };

    for symbol in &BASIC {
        if symbol.repeat_limit == 1 {
            let total = sequence.iter().filter(|s| s.value == symbol.value).count();
            if total > 1 {
                return Err(ValidationError::Repeat);
            }
        }
    }

    let mut run = 0;
    let mut run_glyph = "";
    for current in &sequence {
        if current.glyph == run_glyph {
            run += 1;
        } else {
            run = 1;
            run_glyph = current.glyph;
        }
        if run > usize::from(current.repeat_limit) {
            return Err(ValidationError::Repeat);
        }
    }

    Ok(input)
}

/// Enforce descending order and subtractive pair placement.
///
/// The scan walks the symbol sequence one unit at a time, where a unit is
/// either a lone symbol or a subtractive pair (a symbol followed by the
/// symbol it is the registered prefix of). Pairs compare by their upper
/// value. Two trackers carry the previous unit forward: after a pair the
/// next unit must stay under the pair's lower symbol, which is what rules
/// out `IXI` and `IXIX` while keeping `XCIX` legal.
fn check_ordering(input: &str) -> Result<&str, ValidationError> {
    let Some(sequence) = tokenize(input) else {
        return Err(ValidationError::Symbol);
    };

    let ceiling = BASIC[BASIC.len() - 1].value;
    let mut penultimate = ceiling;
    let mut previous = ceiling;
    let mut after_pair = false;

    let mut index = 0;
    while index < sequence.len() {
        let current = sequence[index];
        let pair_upper = sequence
            .get(index + 1)
            .copied()
            .filter(|next| next.prefix == Some(current.glyph));

        if let Some(upper) = pair_upper {
            let bound = if after_pair { penultimate } else { previous };
            if bound < upper.value {
                return Err(ValidationError::OrderOrComplex);
            }
            penultimate = current.value;
            previous = upper.value;
            after_pair = true;
            index += 2;
        } else {
            let accepted = if after_pair {
                penultimate > current.value
            } else {
                previous >= current.value
            };
            if !accepted {
                return Err(ValidationError::OrderOrComplex);
            }
            penultimate = current.value;
            previous = current.value;
            after_pair = false;
            index += 1;
        }
    }

    Ok(input)
}
