//! # url-prettifier-core
//!
//! Foundation types for the url-prettifier crates: the error type, the
//! insertion-ordered parameter dictionary, and logging setup. This crate has
//! no knowledge of routes or URL patterns; it provides the pieces the
//! resolver crate builds on.
//!
//! ## Modules
//!
//! - [`error`] - Error types and result alias
//! - [`params`] - Insertion-ordered navigation parameters
//! - [`logging`] - Tracing-based logging setup

pub mod error;
pub mod logging;
pub mod params;

// Re-export the most commonly used types at the crate root.
pub use error::{PrettifyError, PrettifyResult};
pub use params::Params;
