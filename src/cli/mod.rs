//! Command-line interface for judgeconf.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ListArgs, ProbeArgs, ProbeOptions, RunArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
