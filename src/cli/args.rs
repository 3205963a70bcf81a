//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// judgeconf - Detect language executors and verify them against a test suite.
#[derive(Debug, Parser)]
#[command(name = "judgeconf")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .judgeconf/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Probe executors, then run the test suite (default if no command specified)
    Run(RunArgs),

    /// Probe executors and print the runtime configuration
    Probe(ProbeArgs),

    /// List known executors and host information
    List(ListArgs),

    /// Print the JSON Schema of the config file
    Schema,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Options shared by every command that probes executors.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeOptions {
    /// Probe only these executors (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip these executors (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Read override hints from a previously rendered runtime document
    #[arg(long, value_name = "FILE")]
    pub hints: Option<PathBuf>,

    /// Write the rendered runtime document to a file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Render the runtime document as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub probe: ProbeOptions,

    /// Problem directory to test (repeatable; overrides config)
    #[arg(long = "problems", value_name = "DIR")]
    pub problems: Vec<PathBuf>,

    /// Probe only, skip the test suite
    #[arg(long)]
    pub no_tests: bool,
}

/// Arguments for the `probe` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ProbeArgs {
    #[command(flatten)]
    pub probe: ProbeOptions,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
