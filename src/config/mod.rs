//! Configuration loading, parsing, and validation for judgeconf.
//!
//! This module handles all aspects of configuration:
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Deep merging in [`merger`]
//! - Validation in [`validator`]
//! - Variable interpolation in [`interpolation`]
//! - Hints from rendered runtime documents in [`hints`]
//!
//! # Example
//!
//! ```
//! use judgeconf::config::{load_merged_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let dir = temp.path().join(".judgeconf");
//! fs::create_dir_all(&dir).unwrap();
//! fs::write(dir.join("config.yml"), "executors: [python3, gcc]").unwrap();
//!
//! let config = load_merged_config(temp.path()).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.executors, vec!["python3", "gcc"]);
//! ```
//!
//! # Configuration File Locations
//!
//! 1. Project config (`.judgeconf/config.yml`)
//! 2. Local overrides (`.judgeconf/config.local.yml`)

pub mod hints;
pub mod interpolation;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use schema::{
    CustomExecutor, JudgeconfConfig, OutputMode, RenderFormat, Settings, TestSettings,
};

pub use loader::{
    find_project_root, load_config, load_config_file, load_config_value, load_merged_config,
    parse_config, ConfigPaths, CONFIG_DIR,
};

pub use merger::{deep_merge, merge_configs};

pub use validator::{validate, validate_config, ValidationError};

pub use interpolation::{
    parse_interpolation, resolve_string, scalar_to_string, InterpolationContext, Segment,
};

pub use hints::{effective_hints, load_hints_file, parse_hints};
