//! Query-string serialization for href generation.
//!
//! The href side of a resolved link carries the navigation parameters as a
//! query string. The default serializer joins entries in insertion order
//! with values coerced to display strings; [`urlencoded`] is the
//! percent-encoding alternative for parameter values that are not URL-safe.

use std::sync::Arc;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use url_prettifier_core::params::display_value;
use url_prettifier_core::Params;

/// The type for query-string serializer functions.
///
/// A serializer receives the navigation parameters and returns the string
/// appended verbatim to `/{page}` whenever the parameters are non-empty. The
/// default produces `?key=value&...`; a custom serializer may produce any
/// suffix, including path-style ones like `/id/1`.
pub type QuerySerializer = Arc<dyn Fn(&Params) -> String + Send + Sync>;

/// Serializes parameters as `?key=value&...`, entries in insertion order.
///
/// Values are coerced to display strings and emitted as-is, with no
/// percent-encoding. This is the default serializer.
pub fn to_query_string(params: &Params) -> String {
    let parts: Vec<String> = params
        .iter()
        .map(|(key, value)| format!("{key}={}", display_value(value)))
        .collect();
    format!("?{}", parts.join("&"))
}

/// Serializes parameters as `?key=value&...` with percent-encoded keys and
/// values, entries in insertion order.
pub fn urlencoded(params: &Params) -> String {
    let parts: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                percent_encode(key),
                percent_encode(&display_value(value))
            )
        })
        .collect();
    format!("?{}", parts.join("&"))
}

/// Percent-encodes a string for use in a URL query.
fn percent_encode(input: &str) -> String {
    utf8_percent_encode(input, NON_ALPHANUMERIC).to_string()
}
