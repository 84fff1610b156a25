use std::path::PathBuf;

use clap::{Parser, Subcommand};
use samarth_core::Domain;

pub mod global;

pub use global::{GlobalFlags, OutputFormat};

/// Top-level CLI parser for the `samarth` binary.
#[derive(Debug, Parser)]
#[command(
    name = "samarth",
    version,
    about = "Samarth - questions over Indian rainfall and crop production data"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// DuckDB store file (overrides `store.path`)
    #[arg(short, long, global = true)]
    pub store: Option<String>,

    /// Extra config file layered over user and project config
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Answer a question: plan it, pick the year window, run the analysis
    Ask {
        /// The question, e.g. "Compare rainfall in Maharashtra and Gujarat for the last 10 years"
        question: String,
    },
    /// Show how a question would be planned without touching the data
    Plan { question: String },
    /// Resolve a state or crop name to its canonical code
    Resolve {
        /// Name domain: state or crop
        domain: Domain,
        name: String,
    },
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            store: self.store.clone(),
            config: self.config.clone(),
        }
    }
}
