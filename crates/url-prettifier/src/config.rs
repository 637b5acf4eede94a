//! Declarative route tables loaded from configuration files.
//!
//! Routes whose pretty URL is a fixed string are plain data, so they can be
//! declared in TOML or JSON instead of code. Builder pretty URLs are
//! code-only and cannot appear in files.
//!
//! ```toml
//! [[routes]]
//! page = "about"
//! prettyUrl = "/about-us"
//!
//! [[routes]]
//! page = "article"
//! prettyUrl = "/article"
//! prettyUrlPatterns = ["/article-:id"]
//! ```

use std::path::Path;

use serde::Deserialize;

use url_prettifier_core::{PrettifyError, PrettifyResult};

use crate::route::{PatternSpec, PrettyUrl, Route};

/// One declarative route entry.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteEntry {
    /// The unique page name.
    pub page: String,
    /// The fixed pretty path for the page.
    pub pretty_url: String,
    /// Declared patterns, in any of the supported shapes.
    #[serde(default)]
    pub pretty_url_patterns: Option<PatternSpec>,
}

impl From<RouteEntry> for Route {
    fn from(entry: RouteEntry) -> Self {
        let route = Self::new(entry.page, PrettyUrl::path(entry.pretty_url));
        match entry.pretty_url_patterns {
            Some(spec) => route.with_patterns(spec),
            None => route,
        }
    }
}

#[derive(Debug, Deserialize)]
struct RouteTable {
    routes: Vec<RouteEntry>,
}

/// Loads a route table from a TOML string with a `[[routes]]` array.
///
/// # Errors
///
/// Returns [`PrettifyError::Configuration`] if the TOML is malformed.
pub fn from_toml_str(input: &str) -> PrettifyResult<Vec<Route>> {
    let table: RouteTable = toml::from_str(input).map_err(|e| {
        PrettifyError::Configuration(format!("Failed to parse TOML route table: {e}"))
    })?;
    Ok(table.routes.into_iter().map(Route::from).collect())
}

/// Loads a route table from a TOML file.
///
/// # Errors
///
/// Returns [`PrettifyError::Io`] if the file cannot be read, or
/// [`PrettifyError::Configuration`] if the TOML is malformed.
pub fn from_toml_file(path: impl AsRef<Path>) -> PrettifyResult<Vec<Route>> {
    let content = std::fs::read_to_string(path)?;
    from_toml_str(&content)
}

/// Loads a route table from a JSON string holding a top-level array of
/// entries.
///
/// # Errors
///
/// Returns [`PrettifyError::Configuration`] if the JSON is malformed.
pub fn from_json_str(input: &str) -> PrettifyResult<Vec<Route>> {
    let entries: Vec<RouteEntry> = serde_json::from_str(input).map_err(|e| {
        PrettifyError::Configuration(format!("Failed to parse JSON route table: {e}"))
    })?;
    Ok(entries.into_iter().map(Route::from).collect())
}

/// Loads a route table from a JSON file.
///
/// # Errors
///
/// Returns [`PrettifyError::Io`] if the file cannot be read, or
/// [`PrettifyError::Configuration`] if the JSON is malformed.
pub fn from_json_file(path: impl AsRef<Path>) -> PrettifyResult<Vec<Route>> {
    let content = std::fs::read_to_string(path)?;
    from_json_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::PrettyUrlPattern;
    use url_prettifier_core::Params;

    #[test]
    fn test_toml_route_table() {
        let routes = from_toml_str(
            r#"
            [[routes]]
            page = "about"
            prettyUrl = "/about-us"

            [[routes]]
            page = "article"
            prettyUrl = "/article"
            prettyUrlPatterns = ["/article-:id"]
            "#,
        )
        .unwrap();

        assert_eq!(routes.len(), 2);
        assert_eq!(routes[0].page(), "about");
        assert_eq!(
            routes[0].pretty_url_patterns(),
            vec![PrettyUrlPattern::new("/about-us")]
        );
        assert_eq!(
            routes[1].pretty_url_patterns(),
            vec![PrettyUrlPattern::new("/article-:id")]
        );
    }

    #[test]
    fn test_toml_pattern_with_defaults() {
        let routes = from_toml_str(
            r#"
            [[routes]]
            page = "article"
            prettyUrl = "/article"

            [[routes.prettyUrlPatterns]]
            pattern = "/article-one"

            [routes.prettyUrlPatterns.defaultParams]
            id = 1
            "#,
        )
        .unwrap();

        let patterns = routes[0].pretty_url_patterns();
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].pattern, "/article-one");
        assert_eq!(patterns[0].default_params, Some(Params::from([("id", 1)])));
    }

    #[test]
    fn test_json_route_table() {
        let routes = from_json_str(
            r#"[
                {"page": "about", "prettyUrl": "/about-us"},
                {"page": "article", "prettyUrl": "/article",
                 "prettyUrlPatterns": [
                    "/article-:id",
                    {"pattern": "/article-one", "defaultParams": {"id": 1}}
                 ]}
            ]"#,
        )
        .unwrap();

        assert_eq!(routes.len(), 2);
        let patterns = routes[1].pretty_url_patterns();
        assert_eq!(patterns.len(), 2);
        assert_eq!(patterns[0].pattern, "/article-:id");
        assert_eq!(patterns[1].default_params, Some(Params::from([("id", 1)])));
    }

    #[test]
    fn test_malformed_toml_is_configuration_error() {
        let err = from_toml_str("routes = not toml").unwrap_err();
        assert!(matches!(err, PrettifyError::Configuration(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = from_toml_file("/nonexistent/routes.toml").unwrap_err();
        assert!(matches!(err, PrettifyError::Io(_)));
    }
}
