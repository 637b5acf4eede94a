//! Core error types for url-prettifier.
//!
//! URL resolution itself never fails: unknown pages and unsupported pattern
//! shapes degrade gracefully. Errors exist only at the edges where a hard
//! failure is the right answer, namely route-table validation at construction
//! and configuration-file loading.

use thiserror::Error;

/// The primary error type for url-prettifier.
#[derive(Error, Debug)]
pub enum PrettifyError {
    /// Two routes were registered under the same page name. Page names are
    /// the lookup key for resolution, so duplicates are rejected up front
    /// instead of silently resolving to whichever entry happens to win.
    #[error("Duplicate route page name: {0}")]
    DuplicatePage(String),

    /// A route was registered with an empty page name. An empty name can
    /// never address a route and would produce the degenerate href `/`.
    #[error("Route page name is empty")]
    EmptyPageName,

    /// A route-table configuration file could not be parsed.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// An I/O error occurred while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, PrettifyError>`.
pub type PrettifyResult<T> = Result<T, PrettifyError>;
