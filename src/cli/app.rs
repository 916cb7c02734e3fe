//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use super::commands;
use numerus::output::OutputMode;

/// numerus - Convert between integers and Roman numerals
#[derive(Parser, Debug)]
#[command(
    name = "numerus",
    version,
    about = "Convert between integers and Roman numerals",
    long_about = "Convert integers to Roman numerals and back.\n\n\
                  Symbols above M use a combining macron (X\u{305} is 10,000),\n\
                  extending the usual range to 3,999,999. Decoding checks the\n\
                  numeral against the classical grammar before converting."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Encode an integer as a Roman numeral
    Encode {
        /// The integer to encode; zero encodes to an empty numeral
        value: u32,
    },

    /// Decode a Roman numeral into an integer
    Decode {
        /// The candidate numeral; lowercase input is folded to uppercase
        numeral: String,
    },

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Encode { value }) => commands::encode(value, output_mode),
        Some(Command::Decode { numeral }) => commands::decode(&numeral, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("numerus v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("numerus v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'numerus --help' for usage");
                println!("Try 'numerus encode 1994' or 'numerus decode MCMXCIV'");
            }
            Ok(())
        },
    }
}
