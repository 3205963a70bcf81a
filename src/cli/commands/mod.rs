//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. The probing steps shared by `run`
//! and `probe` live in [`pipeline`].

pub mod completions;
pub mod dispatcher;
pub mod list;
pub mod pipeline;
pub mod probe;
pub mod run;
pub mod schema;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
