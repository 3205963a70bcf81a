//! Built-in executor table.
//!
//! Each entry names an executor id, the binaries that may provide it (tried
//! in order), and the arguments that make the binary print its version.

use std::collections::BTreeMap;

use crate::config::CustomExecutor;

use super::catalog::{ExecutorCatalog, ExecutorUnit};
use super::command::CommandProbe;

/// Definition of a built-in executor.
pub struct ExecutorDef {
    /// Executor id.
    pub id: &'static str,
    /// Candidate binaries, first match wins. Empty means no autodetection.
    pub commands: &'static [&'static str],
    /// Arguments for the version query.
    pub version_args: &'static [&'static str],
}

/// Known executors, in default probe order.
pub const BUILTIN_EXECUTORS: &[ExecutorDef] = &[
    ExecutorDef {
        id: "python3",
        commands: &["python3", "python"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "python2",
        commands: &["python2", "python2.7"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "pypy3",
        commands: &["pypy3"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "node",
        commands: &["node", "nodejs"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "ruby",
        commands: &["ruby"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "perl",
        commands: &["perl"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "php",
        commands: &["php"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "lua",
        commands: &["lua", "lua5.4", "lua5.3"],
        version_args: &["-v"],
    },
    ExecutorDef {
        id: "gcc",
        commands: &["gcc"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "g++",
        commands: &["g++"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "clang",
        commands: &["clang"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "rustc",
        commands: &["rustc"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "go",
        commands: &["go"],
        version_args: &["version"],
    },
    ExecutorDef {
        id: "java",
        commands: &["java"],
        version_args: &["-version"],
    },
    ExecutorDef {
        id: "kotlin",
        commands: &["kotlinc", "kotlin"],
        version_args: &["-version"],
    },
    ExecutorDef {
        id: "ghc",
        commands: &["ghc"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "ocaml",
        commands: &["ocamlfind", "ocaml"],
        version_args: &["-version"],
    },
    ExecutorDef {
        id: "bash",
        commands: &["bash"],
        version_args: &["--version"],
    },
    ExecutorDef {
        id: "text",
        commands: &[],
        version_args: &[],
    },
];

/// Ids of the built-in executors in default probe order.
pub fn builtin_ids() -> Vec<&'static str> {
    BUILTIN_EXECUTORS.iter().map(|def| def.id).collect()
}

/// Build the catalog of built-in executors.
pub fn builtin_catalog() -> ExecutorCatalog {
    let mut catalog = ExecutorCatalog::new();
    for def in BUILTIN_EXECUTORS {
        let unit = if def.commands.is_empty() {
            ExecutorUnit::Unsupported
        } else {
            ExecutorUnit::Probeable(Box::new(CommandProbe::new(
                def.id,
                def.commands,
                def.version_args,
            )))
        };
        catalog.register(def.id, unit);
    }
    catalog
}

/// Register custom executors declared in configuration, in name order.
///
/// A custom executor with the same id as a built-in replaces it.
pub fn register_custom(catalog: &mut ExecutorCatalog, custom: &BTreeMap<String, CustomExecutor>) {
    for (id, def) in custom {
        let unit = if def.commands.is_empty() {
            ExecutorUnit::Unsupported
        } else {
            ExecutorUnit::Probeable(Box::new(CommandProbe::from_parts(
                id,
                def.commands.clone(),
                def.version_args.clone(),
            )))
        };
        tracing::debug!("Registering custom executor '{}'", id);
        catalog.register(id.as_str(), unit);
    }
}
