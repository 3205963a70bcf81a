//! Downstream test suite run against the active executors.
//!
//! A problem directory holds one subdirectory per case, each with a
//! `case.yml`:
//!
//! ```yaml
//! executor: python3
//! command: "${python3} main.py"
//! stdin: "1 2\n"
//! expected_output: "3\n"
//! ```

pub mod case;
pub mod runner;

pub use case::{outputs_match, TestCase};
pub use runner::{CaseOutcome, CaseResult, DirectoryRunner, TestRunner, TestSummary};
