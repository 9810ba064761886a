//! # Virgule Router
//!
//! A zero-dependency routing library for declarative route trees:
//! - Static routes (`/auth/login`)
//! - Dynamic parameters (`/discussions/:discussion_id`)
//! - Nested child routes mirroring nested UI layout
//! - A catch-all fallback (`*`) so matching never fails
//!
//! The router carries an arbitrary payload per route. Matching a nested route
//! returns the full chain of payloads from the root definition down to the
//! leaf, plus the extracted parameters, so callers can wrap a leaf's output in
//! its ancestors' shells.
//!
//! ## Path Normalization
//!
//! Caller-supplied paths are normalized before matching, so trailing slashes,
//! double slashes, and backslashes all resolve the same way.
//!
//! ## Example
//!
//! ```
//! use virgule_router::{RouteDef, Router};
//!
//! let router = Router::from_routes(vec![
//!     RouteDef::new("/", "landing"),
//!     RouteDef::new("/app", "shell")
//!         .child(RouteDef::new("", "dashboard"))
//!         .child(RouteDef::new("discussions/:discussion_id", "discussion")),
//!     RouteDef::new("*", "not-found"),
//! ]);
//!
//! let m = router.match_path("/app/discussions/42").unwrap();
//! assert_eq!(m.chain, vec![&"shell", &"discussion"]);
//! assert_eq!(m.params.get("discussion_id"), Some(&"42".to_string()));
//!
//! let m = router.match_path("/no/such/page").unwrap();
//! assert_eq!(m.chain, vec![&"not-found"]);
//! ```

pub mod path;
pub mod pattern;
mod tree;

pub use path::{is_valid_path, normalize_path};
pub use pattern::{classify_segment, match_segments, parse_pattern, Params, Segment};
pub use tree::RouteDef;

use tree::join_patterns;

/// Router construction options
#[derive(Debug, Clone, Copy, Default)]
pub struct RouterConfig {
    /// Match static segments case-insensitively
    pub case_insensitive: bool,
}

/// One flattened, absolutely-addressed route
#[derive(Debug, Clone)]
struct FlatRoute {
    pattern: String,
    segments: Vec<Segment>,
    priority: usize,
    /// Payload indices from the root definition down to this route
    chain: Vec<usize>,
}

/// Result of matching a path against the route tree
#[derive(Debug)]
pub struct Match<'a, T> {
    /// Payloads from the outermost matched definition down to the leaf
    pub chain: Vec<&'a T>,
    /// Extracted parameters from the path
    pub params: Params,
    /// The absolute pattern that matched (`*` for the fallback)
    pub pattern: &'a str,
}

/// Main router: a flattened route tree with priority-ordered matching
///
/// Built once from a list of [`RouteDef`]s and immutable afterward.
/// Construction never fails and performs no I/O.
pub struct Router<T> {
    payloads: Vec<T>,
    routes: Vec<FlatRoute>,
    fallback: Option<FlatRoute>,
    config: RouterConfig,
}

impl<T> Router<T> {
    /// Builds a router with default options (case-sensitive)
    pub fn from_routes(defs: Vec<RouteDef<T>>) -> Self {
        Self::with_config(defs, RouterConfig::default())
    }

    /// Builds a router with explicit options
    pub fn with_config(defs: Vec<RouteDef<T>>, config: RouterConfig) -> Self {
        let mut payloads = Vec::new();
        let mut routes = Vec::new();
        let mut fallback = None;

        for def in defs {
            flatten_def(def, "", &[], &mut payloads, &mut routes, &mut fallback);
        }

        // Stable sort: statics before parameters, registration order otherwise
        routes.sort_by_key(|r| r.priority);

        Self {
            payloads,
            routes,
            fallback,
            config,
        }
    }

    /// Matches a path against all routes and returns the first match
    ///
    /// Routes are checked in priority order (static > parameter > positional
    /// catch-all). An otherwise-unmatched path resolves to the `*` fallback
    /// when one is registered, so with a fallback this never returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use virgule_router::{RouteDef, Router};
    ///
    /// let router = Router::from_routes(vec![
    ///     RouteDef::new("/users/:id", "user"),
    /// ]);
    ///
    /// let m = router.match_path("/users/123").unwrap();
    /// assert_eq!(m.params.get("id"), Some(&"123".to_string()));
    /// assert!(router.match_path("/other").is_none());
    /// ```
    pub fn match_path(&self, path: &str) -> Option<Match<'_, T>> {
        let normalized = normalize_path(path);

        self.routes
            .iter()
            .find_map(|route| {
                match_segments(&route.segments, &normalized, self.config.case_insensitive).map(
                    |params| Match {
                        chain: self.resolve_chain(&route.chain),
                        params,
                        pattern: route.pattern.as_str(),
                    },
                )
            })
            .or_else(|| self.fallback_match(&normalized))
    }

    /// The fallback payload, if a `*` route was registered
    pub fn fallback(&self) -> Option<&T> {
        self.fallback
            .as_ref()
            .and_then(|fb| fb.chain.last())
            .map(|&idx| &self.payloads[idx])
    }

    /// Absolute patterns of all registered routes, in match order
    ///
    /// The `*` fallback is not included.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|r| r.pattern.as_str())
    }

    /// Number of matchable routes, excluding the fallback
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// True if no routes are registered
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    fn resolve_chain(&self, chain: &[usize]) -> Vec<&T> {
        chain.iter().map(|&idx| &self.payloads[idx]).collect()
    }

    /// The fallback matches any normalized path, binding the remainder
    /// (possibly empty) under `splat`.
    fn fallback_match(&self, path: &str) -> Option<Match<'_, T>> {
        let fb = self.fallback.as_ref()?;
        let mut params = Params::new();
        params.insert(
            "splat".to_string(),
            path.trim_start_matches('/').to_string(),
        );
        Some(Match {
            chain: self.resolve_chain(&fb.chain),
            params,
            pattern: fb.pattern.as_str(),
        })
    }
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self::from_routes(Vec::new())
    }
}

/// Recursively flattens a definition subtree into absolute routes
///
/// A node with children is matchable only through its children (an index
/// child with the empty pattern matches the parent path itself); its payload
/// still joins the chain of every descendant.
fn flatten_def<T>(
    def: RouteDef<T>,
    parent_pattern: &str,
    ancestors: &[usize],
    payloads: &mut Vec<T>,
    routes: &mut Vec<FlatRoute>,
    fallback: &mut Option<FlatRoute>,
) {
    let (pattern, payload, children) = def.into_parts();

    let idx = payloads.len();
    payloads.push(payload);
    let mut chain = ancestors.to_vec();
    chain.push(idx);

    // A top-level bare `*` is the router-level fallback, not a positional
    // catch-all segment.
    if ancestors.is_empty() && pattern == "*" {
        *fallback = Some(FlatRoute {
            pattern,
            segments: Vec::new(),
            priority: usize::MAX,
            chain,
        });
        return;
    }

    let absolute = join_patterns(parent_pattern, &pattern);

    if children.is_empty() {
        let segments = parse_pattern(&absolute);
        let priority = route_priority(&segments);
        routes.push(FlatRoute {
            pattern: absolute,
            segments,
            priority,
            chain,
        });
    } else {
        for child in children {
            flatten_def(child, &absolute, &chain, payloads, routes, fallback);
        }
    }
}

/// Match priority for a route (lower sorts first)
///
/// Fully static patterns outrank parameterized ones; any positional
/// catch-all sorts after both. Depth breaks ties so registration order only
/// decides between equally-shaped patterns.
fn route_priority(segments: &[Segment]) -> usize {
    let dynamic = segments
        .iter()
        .filter(|s| !matches!(s, Segment::Static(_)))
        .count();
    let has_catch_all = segments.iter().any(|s| matches!(s, Segment::CatchAll(_)));

    let base = if has_catch_all { 10_000 } else { dynamic * 100 };
    base + segments.len()
}
