//! Error types shared by the library layers.
//!
//! Every failure is tagged with the stage it happened in so the CLI can tell
//! the user whether the request, the response decoding, a file, or the
//! configuration was at fault, and pick a matching exit code.

use std::io;

use thiserror::Error;

/// Errors produced by mirror selection, HTTP calls, file I/O and configuration.
#[derive(Error, Debug)]
pub enum MozhiError {
    /// Transport failure, timeout, or a non-200 response from a mirror.
    ///
    /// `url` is the mirror and endpoint without the query.
    #[error("Request to {url} failed: {message}")]
    Request {
        url: String,
        /// Status code when the mirror answered with something other than 200.
        status: Option<u16>,
        message: String,
    },

    /// The response body was not the JSON shape the endpoint promises.
    #[error("Failed to decode response from {url}: {reason}")]
    Decode {
        url: String,
        reason: serde_json::Error,
    },

    /// Reading input or writing output failed.
    #[error("File error: {path}: {reason}")]
    File { path: String, reason: io::Error },

    /// A required argument is missing or empty.
    #[error("{0}")]
    Config(String),

    /// The configuration file or mirror list is unusable.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl MozhiError {
    pub(crate) fn file(path: impl Into<String>, reason: io::Error) -> Self {
        Self::File {
            path: path.into(),
            reason,
        }
    }

    /// Name of the stage that failed.
    pub const fn stage(&self) -> &'static str {
        match self {
            Self::Request { .. } => "request",
            Self::Decode { .. } => "decode",
            Self::File { .. } => "file",
            Self::Config(_) | Self::InvalidConfig(_) => "config",
        }
    }

    /// Process exit code for this error (sysexits values).
    pub fn exit_code(&self) -> exitcode::ExitCode {
        match self {
            Self::Request { .. } => exitcode::UNAVAILABLE,
            Self::Decode { .. } => exitcode::PROTOCOL,
            Self::File { reason, .. } if reason.kind() == io::ErrorKind::NotFound => {
                exitcode::NOINPUT
            }
            Self::File { .. } => exitcode::IOERR,
            Self::Config(_) => exitcode::USAGE,
            Self::InvalidConfig(_) => exitcode::CONFIG,
        }
    }
}

pub type Result<T> = std::result::Result<T, MozhiError>;
