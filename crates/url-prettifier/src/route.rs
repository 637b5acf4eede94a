//! Route definitions and pretty URL pattern normalization.
//!
//! A [`Route`] ties a unique page name to its pretty URL and, optionally, to
//! declared URL patterns. Patterns can be declared in several shapes
//! (a bare string, a list of strings, a list of full pattern objects); the
//! shapes are modeled as the explicit [`PatternSpec`] variant type and
//! collapsed into a uniform `Vec<PrettyUrlPattern>` by
//! [`Route::pretty_url_patterns`].

use std::fmt;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use url_prettifier_core::Params;

/// The type for pretty URL builder functions.
///
/// A builder computes the cosmetic path from the navigation parameters at
/// resolve time. It is wrapped in an `Arc` so routes stay cheaply cloneable
/// and shareable across threads.
pub type PrettyUrlBuilder = Arc<dyn Fn(&Params) -> String + Send + Sync>;

/// Matches `:name` placeholders in Express-style pattern strings.
static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":([A-Za-z0-9_]+)").expect("placeholder regex is valid"));

/// The pretty URL of a route: either a fixed path or a function of the
/// navigation parameters.
#[derive(Clone)]
pub enum PrettyUrl {
    /// A fixed pretty path, used verbatim.
    Path(String),
    /// A path computed from the parameters at resolve time.
    Builder(PrettyUrlBuilder),
}

impl PrettyUrl {
    /// Creates a fixed pretty path.
    pub fn path(path: impl Into<String>) -> Self {
        Self::Path(path.into())
    }

    /// Creates a pretty URL computed from the parameters.
    pub fn builder(build: impl Fn(&Params) -> String + Send + Sync + 'static) -> Self {
        Self::Builder(Arc::new(build))
    }

    /// Renders the pretty path for the given parameters.
    pub fn render(&self, params: &Params) -> String {
        match self {
            Self::Path(path) => path.clone(),
            Self::Builder(build) => build(params),
        }
    }

    /// Returns the fixed path, or `None` for builders.
    pub fn fixed_path(&self) -> Option<&str> {
        match self {
            Self::Path(path) => Some(path),
            Self::Builder(_) => None,
        }
    }
}

impl fmt::Debug for PrettyUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => f.debug_tuple("Path").field(path).finish(),
            Self::Builder(_) => f.write_str("Builder(..)"),
        }
    }
}

/// One concrete pattern registration for the host framework's router.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrettyUrlPattern {
    /// The route-matching template string (e.g. `/article-:id`).
    pub pattern: String,
    /// Parameter values applied when the pattern omits a segment.
    #[serde(rename = "defaultParams", default, skip_serializing_if = "Option::is_none")]
    pub default_params: Option<Params>,
}

impl PrettyUrlPattern {
    /// Creates a pattern with no default parameters.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            default_params: None,
        }
    }

    /// Attaches default parameter values to this pattern.
    #[must_use]
    pub fn with_default_params(mut self, defaults: Params) -> Self {
        self.default_params = Some(defaults);
        self
    }

    /// Returns the `:name` placeholders the pattern binds, in order.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_prettifier::PrettyUrlPattern;
    ///
    /// let pattern = PrettyUrlPattern::new("/article-:id/:slug");
    /// assert_eq!(pattern.param_names(), vec!["id", "slug"]);
    /// ```
    pub fn param_names(&self) -> Vec<&str> {
        PLACEHOLDER
            .captures_iter(&self.pattern)
            .filter_map(|captures| captures.get(1))
            .map(|m| m.as_str())
            .collect()
    }

    /// Returns the default parameter names the pattern has no placeholder
    /// for. These are the values the host router must supply itself when the
    /// pattern matches, since no URL segment carries them.
    pub fn omitted_defaults(&self) -> Vec<&str> {
        let named = self.param_names();
        self.default_params
            .as_ref()
            .map(|defaults| defaults.keys().filter(|key| !named.contains(key)).collect())
            .unwrap_or_default()
    }
}

/// One entry of a declared pattern list: a bare string or a full pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternEntry {
    /// A bare pattern string with no defaults.
    Bare(String),
    /// A full pattern, possibly with default parameter values.
    Full(PrettyUrlPattern),
}

impl PatternEntry {
    /// Converts this entry into a uniform [`PrettyUrlPattern`].
    pub fn to_pattern(&self) -> PrettyUrlPattern {
        match self {
            Self::Bare(pattern) => PrettyUrlPattern::new(pattern.clone()),
            Self::Full(pattern) => pattern.clone(),
        }
    }
}

/// The shapes a route's declared patterns may take.
///
/// Deserializes untagged, so declarative route tables can use whichever
/// shape reads best. Shapes outside the supported set land in
/// [`PatternSpec::Other`] and normalize to no patterns at all; they are
/// never an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatternSpec {
    /// One bare pattern string.
    Single(String),
    /// A list of patterns; entries may mix bare strings and full patterns.
    Many(Vec<PatternEntry>),
    /// Any unsupported shape, kept as raw data.
    Other(Value),
}

impl PatternSpec {
    /// Collapses the declared shape into a uniform pattern list, order
    /// preserved. Unsupported shapes collapse to an empty list.
    pub fn normalize(&self) -> Vec<PrettyUrlPattern> {
        match self {
            Self::Single(pattern) => vec![PrettyUrlPattern::new(pattern.clone())],
            Self::Many(entries) => entries.iter().map(PatternEntry::to_pattern).collect(),
            Self::Other(_) => Vec::new(),
        }
    }

    /// Returns `false` when this spec is an unsupported shape.
    pub const fn is_usable(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

/// One registered route: a unique page name, its pretty URL, and optionally
/// its declared patterns.
///
/// Routes are supplied once when the resolver is constructed and never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct Route {
    page: String,
    pretty_url: PrettyUrl,
    pretty_url_patterns: Option<PatternSpec>,
}

impl Route {
    /// Creates a route for `page` with the given pretty URL.
    pub fn new(page: impl Into<String>, pretty_url: PrettyUrl) -> Self {
        Self {
            page: page.into(),
            pretty_url,
            pretty_url_patterns: None,
        }
    }

    /// Declares the route's URL patterns.
    #[must_use]
    pub fn with_patterns(mut self, patterns: PatternSpec) -> Self {
        self.pretty_url_patterns = Some(patterns);
        self
    }

    /// Returns the page name.
    pub fn page(&self) -> &str {
        &self.page
    }

    /// Returns the pretty URL.
    pub const fn pretty_url(&self) -> &PrettyUrl {
        &self.pretty_url
    }

    /// Returns the declared pattern shape, if any.
    pub const fn pattern_spec(&self) -> Option<&PatternSpec> {
        self.pretty_url_patterns.as_ref()
    }

    /// Normalizes this route's declared patterns into a uniform list.
    ///
    /// With nothing declared, a fixed pretty path stands in as the single
    /// pattern; builder routes declare nothing implicitly. Unsupported
    /// declared shapes normalize to an empty list.
    pub fn pretty_url_patterns(&self) -> Vec<PrettyUrlPattern> {
        match &self.pretty_url_patterns {
            Some(spec) => spec.normalize(),
            None => self
                .pretty_url
                .fixed_path()
                .map(|path| vec![PrettyUrlPattern::new(path)])
                .unwrap_or_default(),
        }
    }
}
