// src/cli/mod.rs
//! CLI definitions for rpmlog
//!
//! This module contains the command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.
//!
//! - `query` - Run a named rpm query for the package on a log line
//! - `parse` - Show the package identity parsed from a log line
//! - `scan` - Parse every line of a transaction log
//! - `operations` - List the available query operations
//! - `completions` - Generate shell completion scripts

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "rpmlog")]
#[command(author = "rpmlog Contributors")]
#[command(version)]
#[command(about = "Review yum/dnf transaction log entries against the RPM database", long_about = None)]
pub struct Cli {
    /// Configuration file (default: ~/.config/rpmlog/config.toml, then /etc/rpmlog/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log parsed identities and rpm invocations to stderr
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query for the package named on a log line
    ///
    /// Operations: changelog, info, list, docfiles, configfiles,
    /// provides, requires, conflicts, news
    Query {
        /// Operation name
        operation: String,

        #[command(flatten)]
        source: LineArgs,

        /// Write the result to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show the package identity parsed from a log line
    Parse {
        #[command(flatten)]
        source: LineArgs,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Parse every line of a transaction log
    Scan {
        /// Log file, e.g. /var/log/dnf.rpm.log
        file: PathBuf,

        /// Print one JSON object per line
        #[arg(long)]
        json: bool,
    },

    /// List the available query operations
    Operations,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where the log line comes from
///
/// Without `--line` or `--file` the first line of stdin is used.
#[derive(Args, Debug, Clone, Default)]
pub struct LineArgs {
    /// The log line itself
    #[arg(short, long, conflicts_with = "file")]
    pub line: Option<String>,

    /// Log file to take the line from (first line unless told otherwise)
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// 1-based line number within --file
    #[arg(short = 'n', long, requires = "file", conflicts_with = "last")]
    pub line_number: Option<usize>,

    /// Use the last non-empty line of --file (the most recent transaction)
    #[arg(long, requires = "file")]
    pub last: bool,
}
