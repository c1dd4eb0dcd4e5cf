//! Command line argument parsing for the spellreport CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// spellreport - spell check text files and bundle CSV/PDF reports
#[derive(Parser, Debug, Clone)]
#[command(name = "spellreport")]
#[command(about = "Spell check English text files and bundle CSV and PDF reports into a ZIP")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpellReportArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpellReportArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Spell check text files and write a report archive
    Check(CheckArgs),

    /// Show ranked suggestions for words
    Suggest(SuggestArgs),
}

/// Dictionary selection shared by all commands
#[derive(Args, Debug, Clone, Default)]
pub struct DictionaryArgs {
    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", env = "SPELLREPORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Word list or word-frequency file replacing the bundled English list
    #[arg(long, value_name = "DICTIONARY_FILE")]
    pub dictionary: Option<PathBuf>,

    /// Maximum edit distance for suggestions (1 or 2)
    #[arg(long, value_name = "N")]
    pub max_distance: Option<usize>,
}

/// Arguments for spell checking files
#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    /// Text files, or directories whose matching files are checked
    #[arg(value_name = "INPUT")]
    pub inputs: Vec<PathBuf>,

    /// Directory receiving the report archive
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Arguments for word suggestions
#[derive(Parser, Debug, Clone)]
pub struct SuggestArgs {
    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub dictionary: DictionaryArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
