//! Logging integration for url-prettifier.
//!
//! The library itself only emits [`tracing`] events; installing a subscriber
//! is left to the embedding application. [`init`] is a convenience for
//! binaries and tests that want a sensible default.

/// Installs a global tracing subscriber.
///
/// `filter` is an `EnvFilter` directive string (e.g. `"debug"`,
/// `"url_prettifier=trace"`); invalid directives fall back to `"info"`.
/// With `pretty` set a human-readable format is used, otherwise structured
/// JSON. Does nothing if a subscriber is already installed.
pub fn init(filter: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

/// Creates a tracing span for one link resolution.
///
/// # Examples
///
/// ```
/// use url_prettifier_core::logging::resolve_span;
///
/// let span = resolve_span("article");
/// let _guard = span.enter();
/// tracing::debug!("resolving link");
/// ```
pub fn resolve_span(page: &str) -> tracing::Span {
    tracing::debug_span!("resolve", page)
}
