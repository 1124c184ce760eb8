//! CLI tool for calculating ring tokens.
//!
//! Provides:
//! - Flag parsing and validation
//! - Interactive prompts for per-datacenter node counts
//! - Table and JSON rendering of the generated tokens

pub mod commands;
pub mod config;
pub mod format;
pub mod interactive;
pub mod telemetry;

pub use commands::{generate, run};
pub use config::{CliConfig, Options};
pub use format::OutputFormat;
