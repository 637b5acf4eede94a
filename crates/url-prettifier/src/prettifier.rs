//! The route-to-URL resolver.
//!
//! [`UrlPrettifier`] holds the immutable route table and computes the
//! two-part link representation the host framework consumes: an internal
//! `href` carrying parameters as a query string, and a cosmetic pretty path
//! for the address bar.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use url_prettifier_core::{Params, PrettifyError, PrettifyResult};

use crate::query::{self, QuerySerializer};
use crate::route::{PrettyUrlPattern, Route};

/// The two-part link representation consumed by the host framework.
///
/// `href` resolves to the actual page; the pretty path is what the browser
/// address bar shows. Serializes as `{"href": ..., "as": ...}`, with the
/// `as` key omitted entirely when no route is registered for the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedLink {
    /// The framework-internal link target.
    pub href: String,
    /// The pretty path displayed to the user, when the page has a route.
    #[serde(rename = "as", default, skip_serializing_if = "Option::is_none")]
    pub as_path: Option<String>,
}

/// Resolves page names and parameters into [`ResolvedLink`]s and enumerates
/// the patterns to register with the host framework's router.
///
/// The route table is captured once at construction and never mutated; every
/// operation is a pure computation over it.
///
/// # Examples
///
/// ```
/// use url_prettifier::{Params, PrettyUrl, Route, UrlPrettifier};
///
/// let routes = vec![
///     Route::new("article", PrettyUrl::builder(|params: &Params| {
///         format!("/article-{}", params.display("id").unwrap_or_default())
///     })),
///     Route::new("about", PrettyUrl::path("/about-us")),
/// ];
/// let prettifier = UrlPrettifier::new(routes).unwrap();
///
/// let link = prettifier.resolve("article", &Params::from([("id", 7)]));
/// assert_eq!(link.href, "/article?id=7");
/// assert_eq!(link.as_path.as_deref(), Some("/article-7"));
/// ```
pub struct UrlPrettifier {
    routes: Vec<Route>,
    query_serializer: Option<QuerySerializer>,
}

impl fmt::Debug for UrlPrettifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UrlPrettifier")
            .field("routes", &self.routes)
            .field("custom_query_serializer", &self.query_serializer.is_some())
            .finish()
    }
}

impl UrlPrettifier {
    /// Creates a resolver over the given route table.
    ///
    /// Routes with an unusable declared pattern shape are accepted (they
    /// register no patterns) but logged, since that is usually a
    /// configuration mistake.
    ///
    /// # Errors
    ///
    /// Returns [`PrettifyError::EmptyPageName`] if a route has an empty page
    /// name, or [`PrettifyError::DuplicatePage`] if two routes share one.
    pub fn new(routes: Vec<Route>) -> PrettifyResult<Self> {
        let mut seen = HashSet::new();
        for route in &routes {
            if route.page().is_empty() {
                return Err(PrettifyError::EmptyPageName);
            }
            if !seen.insert(route.page()) {
                return Err(PrettifyError::DuplicatePage(route.page().to_string()));
            }
            if route.pattern_spec().is_some_and(|spec| !spec.is_usable()) {
                tracing::warn!(
                    page = route.page(),
                    "unsupported pretty URL pattern shape; no patterns will be registered"
                );
            }
        }

        Ok(Self {
            routes,
            query_serializer: None,
        })
    }

    /// Replaces the default query-string serialization.
    ///
    /// The serializer's output is appended verbatim to `/{page}` whenever
    /// the parameters are non-empty; it is never invoked for empty
    /// parameters.
    #[must_use]
    pub fn with_query_serializer(
        mut self,
        serializer: impl Fn(&Params) -> String + Send + Sync + 'static,
    ) -> Self {
        self.query_serializer = Some(Arc::new(serializer));
        self
    }

    /// Resolves a page name and parameters into a link.
    ///
    /// The `href` is produced for registered and unknown pages alike; the
    /// pretty path is present only when a route is registered under `page`.
    /// Unknown pages are not an error.
    pub fn resolve(&self, page: &str, params: &Params) -> ResolvedLink {
        let span = url_prettifier_core::logging::resolve_span(page);
        let _guard = span.enter();

        let mut href = format!("/{page}");
        if !params.is_empty() {
            match &self.query_serializer {
                Some(serializer) => href.push_str(&serializer(params)),
                None => href.push_str(&query::to_query_string(params)),
            }
        }

        let as_path = if let Some(route) = self.route(page) {
            Some(route.pretty_url().render(params))
        } else {
            tracing::debug!(page, "no route registered; returning href only");
            None
        };

        ResolvedLink { href, as_path }
    }

    /// Returns the route registered under `page`, if any.
    pub fn route(&self, page: &str) -> Option<&Route> {
        self.routes.iter().find(|route| route.page() == page)
    }

    /// Returns the route table, in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Returns the number of registered routes.
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Returns `true` if no routes are registered.
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Normalizes a route's declared patterns into a uniform list.
    ///
    /// The route does not have to be registered with this resolver; this
    /// delegates to [`Route::pretty_url_patterns`].
    pub fn pretty_url_patterns(&self, route: &Route) -> Vec<PrettyUrlPattern> {
        route.pretty_url_patterns()
    }

    /// Invokes `callback` once per normalized pattern of every route, in
    /// registration order then pattern order.
    ///
    /// Host-framework startup code uses this to register one server-side
    /// route per pattern, supplying the defaults for segments a pattern
    /// omits (see [`PrettyUrlPattern::omitted_defaults`]).
    pub fn for_each_pattern<F>(&self, mut callback: F)
    where
        F: FnMut(&str, &str, Option<&Params>),
    {
        for route in &self.routes {
            for pattern in route.pretty_url_patterns() {
                callback(
                    route.page(),
                    &pattern.pattern,
                    pattern.default_params.as_ref(),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::PrettyUrl;

    fn prettifier() -> UrlPrettifier {
        UrlPrettifier::new(vec![
            Route::new("article", PrettyUrl::builder(|params: &Params| {
                format!("/article-{}", params.display("id").unwrap_or_default())
            })),
            Route::new("about", PrettyUrl::path("/about-us")),
        ])
        .unwrap()
    }

    #[test]
    fn test_resolve_without_params_has_no_query_string() {
        let link = prettifier().resolve("about", &Params::new());
        assert_eq!(link.href, "/about");
        assert_eq!(link.as_path.as_deref(), Some("/about-us"));
    }

    #[test]
    fn test_resolve_empty_params_never_invokes_serializer() {
        let prettifier = prettifier().with_query_serializer(|_params: &Params| {
            unreachable!("serializer must not run for empty params")
        });
        let link = prettifier.resolve("about", &Params::new());
        assert_eq!(link.href, "/about");
    }

    #[test]
    fn test_resolve_unknown_page_builds_href() {
        let link = prettifier().resolve("missing", &Params::from([("id", 1)]));
        assert_eq!(link.href, "/missing?id=1");
        assert_eq!(link.as_path, None);
    }

    #[test]
    fn test_duplicate_page_rejected() {
        let result = UrlPrettifier::new(vec![
            Route::new("article", PrettyUrl::path("/a")),
            Route::new("article", PrettyUrl::path("/b")),
        ]);
        assert!(matches!(
            result,
            Err(PrettifyError::DuplicatePage(page)) if page == "article"
        ));
    }

    #[test]
    fn test_empty_page_name_rejected() {
        let result = UrlPrettifier::new(vec![Route::new("", PrettyUrl::path("/"))]);
        assert!(matches!(result, Err(PrettifyError::EmptyPageName)));
    }

    #[test]
    fn test_route_lookup() {
        let prettifier = prettifier();
        assert!(prettifier.route("about").is_some());
        assert!(prettifier.route("missing").is_none());
        assert_eq!(prettifier.len(), 2);
        assert!(!prettifier.is_empty());
    }

    #[test]
    fn test_resolved_link_serializes_without_absent_as() {
        let link = ResolvedLink {
            href: "/missing?id=1".into(),
            as_path: None,
        };
        assert_eq!(
            serde_json::to_string(&link).unwrap(),
            r#"{"href":"/missing?id=1"}"#
        );

        let link = ResolvedLink {
            href: "/article?id=1".into(),
            as_path: Some("/article-1".into()),
        };
        assert_eq!(
            serde_json::to_string(&link).unwrap(),
            r#"{"href":"/article?id=1","as":"/article-1"}"#
        );
    }

    #[test]
    fn test_resolved_link_deserializes_missing_as() {
        let link: ResolvedLink = serde_json::from_str(r#"{"href":"/x"}"#).unwrap();
        assert_eq!(link.as_path, None);
    }

    #[test]
    fn test_debug_does_not_expose_serializer() {
        let debug = format!("{:?}", prettifier());
        assert!(debug.contains("custom_query_serializer: false"));
    }
}
