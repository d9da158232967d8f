//! CLI command definitions and handlers

mod key_lengths;
mod language;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::language::DEFAULT_TYPICALITY_THRESHOLD;

/// Keyscope - cryptanalysis support
///
/// Everything runs locally over the text you pass in; no data leaves your
/// machine.
#[derive(Parser, Debug)]
#[command(name = "keyscope")]
#[command(
    version,
    about = "Cryptanalysis support — Kasiski key-length estimation and character-frequency language identification",
    after_help = "\
Examples:
  keyscope key-lengths \"PPQCAXQVEKG...\" --top 3     Rank likely Vigenère key lengths
  keyscope key-lengths --file cipher.txt --format json
  keyscope detect \"some plaintext\" --tables ./frequency_tables
  keyscope detect --file sample.txt -l en -l fr      Score only English and French
  keyscope typical \"some plaintext\" -l en --threshold 0.4

Frequency tables are JSON files named <language>.json, each mapping single
characters to expected frequencies."
)]
pub struct Cli {
    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Estimate likely key lengths of a repeating-key cipher (Kasiski examination)
    KeyLengths {
        /// Ciphertext to analyze (or use --file)
        text: Option<String>,

        /// Read the ciphertext from a file instead
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Minimum repeated-sequence length to look for
        #[arg(long, default_value = "3")]
        min_length: usize,

        /// Show only the N most voted key lengths (default: all)
        #[arg(long)]
        top: Option<usize>,

        /// Output format: text, json
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Score a text against per-language character-frequency tables
    Detect {
        /// Text to analyze (or use --file)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Directory of <language>.json frequency tables
        #[arg(long, env = "KEYSCOPE_TABLES", default_value = "frequency_tables")]
        tables: PathBuf,

        /// Score only these languages (repeatable; default: all tables found)
        #[arg(long = "language", short = 'l')]
        languages: Vec<String>,

        /// Output format: text, json
        #[arg(long, default_value = "text", value_parser = ["text", "json"])]
        format: String,
    },

    /// Check whether a text is typical of one language
    Typical {
        /// Text to analyze (or use --file)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Directory of <language>.json frequency tables
        #[arg(long, env = "KEYSCOPE_TABLES", default_value = "frequency_tables")]
        tables: PathBuf,

        /// Language to check against
        #[arg(long, short = 'l')]
        language: String,

        /// Similarity score the text must exceed
        #[arg(long, default_value_t = DEFAULT_TYPICALITY_THRESHOLD)]
        threshold: f64,
    },
}

/// Dispatch a parsed CLI invocation
pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::KeyLengths {
            text,
            file,
            min_length,
            top,
            format,
        } => {
            let input = read_input(text, file)?;
            key_lengths::run(&input, min_length, top, &format)
        }
        Commands::Detect {
            text,
            file,
            tables,
            languages,
            format,
        } => {
            let input = read_input(text, file)?;
            language::detect(&input, &tables, &languages, &format)
        }
        Commands::Typical {
            text,
            file,
            tables,
            language,
            threshold,
        } => {
            let input = read_input(text, file)?;
            language::typical(&input, &tables, &language, threshold)
        }
    }
}

/// Inline text argument, or the contents of `--file`
fn read_input(text: Option<String>, file: Option<PathBuf>) -> Result<String> {
    match (text, file) {
        (Some(text), None) => Ok(text),
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display())),
        (Some(_), Some(_)) => bail!("Pass either TEXT or --file, not both"),
        (None, None) => bail!("No input: pass TEXT or --file"),
    }
}
