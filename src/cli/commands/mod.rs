//! Action implementations.

/// Language listing handler.
pub mod languages;

/// Translation handler.
pub mod translate;
