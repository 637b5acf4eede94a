//! # url-prettifier
//!
//! Maps a web application's internal route names and parameters to pretty,
//! human-readable URLs, and back to the pattern list a file-based router
//! registers at startup.
//!
//! A page is addressed internally as `/{page}?{params}`; the pretty URL is
//! the cosmetic path the browser address bar shows for the same navigation.
//! [`UrlPrettifier::resolve`] computes both halves at once, and
//! [`UrlPrettifier::for_each_pattern`] enumerates the declared patterns so
//! the host framework can serve the pretty paths.
//!
//! # Examples
//!
//! ```
//! use url_prettifier::{Params, PatternSpec, PrettyUrl, Route, UrlPrettifier};
//!
//! let routes = vec![
//!     Route::new("article", PrettyUrl::builder(|params: &Params| {
//!         format!("/article-{}", params.display("id").unwrap_or_default())
//!     }))
//!     .with_patterns(PatternSpec::Single("/article-:id".into())),
//!     Route::new("about", PrettyUrl::path("/about-us")),
//! ];
//! let prettifier = UrlPrettifier::new(routes).unwrap();
//!
//! // Link generation for client-side navigation.
//! let link = prettifier.resolve("article", &Params::from([("id", 7)]));
//! assert_eq!(link.href, "/article?id=7");
//! assert_eq!(link.as_path.as_deref(), Some("/article-7"));
//!
//! // Server-side pattern registration at startup.
//! let mut registered = Vec::new();
//! prettifier.for_each_pattern(|page, pattern, _defaults| {
//!     registered.push((page.to_string(), pattern.to_string()));
//! });
//! assert_eq!(registered.len(), 2);
//! ```

pub mod config;
pub mod prettifier;
pub mod query;
pub mod route;

// Re-export the most commonly used types at the crate root.
pub use prettifier::{ResolvedLink, UrlPrettifier};
pub use query::QuerySerializer;
pub use route::{PatternEntry, PatternSpec, PrettyUrl, PrettyUrlBuilder, PrettyUrlPattern, Route};
pub use url_prettifier_core::{Params, PrettifyError, PrettifyResult};
