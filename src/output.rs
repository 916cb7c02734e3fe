//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON.

use serde::Serialize;

use crate::validator::ValidationError;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of encoding an integer
#[derive(Debug, Serialize)]
pub struct EncodeOutcome {
    /// The integer that was encoded
    pub value: u32,
    /// The Roman numeral produced; empty for zero
    pub numeral: String,
}

/// Result of decoding a candidate numeral
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DecodeOutcome {
    /// Whether the input was a well-formed numeral
    pub success: bool,
    /// Rejection token when validation failed
    pub token: Option<&'static str>,
    /// The decoded value; zero when validation failed
    pub answer: u32,
}

impl EncodeOutcome {
    /// Render the outcome based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.numeral),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}

impl DecodeOutcome {
    /// Fold a decoder result into a renderable outcome.
    ///
    /// Failures carry their rejection token and an answer of zero, which
    /// never collides with a successful decode: valid numerals are
    /// non-empty and decode to at least one.
    #[must_use]
    pub const fn from_result(result: Result<u32, ValidationError>) -> Self {
        match result {
            Ok(answer) => Self {
                success: true,
                token: None,
                answer,
            },
            Err(error) => Self {
                success: false,
                token: Some(error.token()),
                answer: 0,
            },
        }
    }

    /// Render the outcome based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.success {
            println!("{}", self.answer);
        } else {
            println!(
                "invalid numeral: {}",
                self.token.unwrap_or("InvalidUnknown")
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}
