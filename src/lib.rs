//! # mozhi - Mozhi Translation Client
//!
//! `mozhi` sends text to one of several interchangeable Mozhi translation
//! mirrors and prints or saves the translated result.
//!
//! ## Quick Start
//!
//! ```bash
//! # Translate text
//! mozhi --target fr --text "Hello"
//!
//! # Translate a file into another file
//! mozhi -t ja -f notes.txt -o notes.ja.txt
//!
//! # List supported languages for an engine
//! mozhi --engine deepl --list-languages
//! ```
//!
//! ## Configuration
//!
//! Defaults can be stored in `~/.config/mozhi/config.toml`:
//!
//! ```toml
//! [mozhi]
//! engine = "google"
//! target = "fr"
//! selection = "round-robin"
//! timeout_secs = 10
//! mirrors = ["https://mozhi.aryak.me"]
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! # async fn demo() -> mozhi_cli::Result<()> {
//! use mozhi_cli::translation::{ClientConfig, TranslationClient, TranslationRequest};
//!
//! let config = ClientConfig::new(&["https://mozhi.aryak.me"], "google")?;
//! let client = TranslationClient::new(config)?;
//! let request = TranslationRequest::new("auto", "fr", "Hello")?;
//! println!("{}", client.translate(&request).await?);
//! # Ok(())
//! # }
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management and resolution.
pub mod config;

/// Error types and exit codes.
pub mod error;

/// File system utilities.
pub mod fs;

/// Input reading from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors, logging).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Mirror selection, URL building and the HTTP client.
pub mod translation;

/// Terminal UI components (spinner, colors).
pub mod ui;

pub use error::{MozhiError, Result};
