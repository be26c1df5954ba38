use crate::config::{Config, ContentOptions};
use crate::content::Symbol;
use crate::export::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// More log output (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Per-position base composition of a FASTQ, FASTA, CSV or TSV file
    Content(ContentArgs),

    /// Show or initialise the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(clap::Args, Debug)]
pub struct ContentArgs {
    /// Input file (compressed input is detected automatically)
    pub input: PathBuf,

    /// Output file for the table (default: stdout)
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, otherwise tsv)
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Worker threads (default: from config, otherwise all cores)
    #[arg(short = 't', long)]
    pub threads: Option<usize>,

    /// Reads per batch handed to a worker
    #[arg(long)]
    pub batch_size: Option<usize>,

    /// Symbols to report, comma separated (default: all)
    #[arg(long, value_enum, value_delimiter = ',')]
    pub symbols: Vec<Symbol>,

    /// Drop the other_count column
    #[arg(long, conflicts_with = "symbols")]
    pub no_other: bool,

    /// Add a total column (reads covering each position)
    #[arg(long)]
    pub total: bool,

    /// Add a fraction column per reported symbol
    #[arg(long)]
    pub proportions: bool,
}

impl ContentArgs {
    /// Config values overridden by whatever was given on the command line.
    pub fn options(&self, config: &Config) -> ContentOptions {
        let mut options = ContentOptions::from_config(config);
        if let Some(threads) = self.threads {
            options = options.with_threads(threads);
        }
        if let Some(batch_size) = self.batch_size {
            options = options.with_batch_size(batch_size);
        }
        if !self.symbols.is_empty() {
            options = options.with_symbols(self.symbols.iter().copied());
        }
        if self.no_other {
            options = options.with_other(false);
        }
        if self.total {
            options = options.with_total(true);
        }
        if self.proportions {
            options = options.with_proportions(true);
        }
        options
    }

    pub fn format(&self, config: &Config) -> OutputFormat {
        self.format.unwrap_or(config.output_format)
    }
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
