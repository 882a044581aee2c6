//! Command-line interface definitions and handlers.

/// CLI argument parsing with clap.
pub mod args;

/// Action implementations.
pub mod commands;

pub use args::{Action, Args};
