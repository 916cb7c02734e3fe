//! numerus - Convert between integers and Roman numerals
//!
//! This library provides greedy encoding over a macron-extended symbol
//! table (values up to the millions), grammar validation of candidate
//! numerals, and decoding of validated input. Encoding lives in
//! [`encoder`], the check chain in [`validator`], decoding in [`decoder`],
//! and the symbol tables they share in [`symbols`].

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod decoder;
pub mod encoder;
pub mod output;
pub mod symbols;
pub mod validator;
