//! Pattern parsing and matching for route segments
//!
//! Pure functional parsing of URL patterns into typed segments. All functions
//! are **pure**: same input → same output, no side effects.

use std::collections::HashMap;

/// Parameters extracted from a matched path
pub type Params = HashMap<String, String>;

/// Represents different types of route pattern segments
///
/// # Examples
///
/// ```
/// use virgule_router::pattern::{classify_segment, Segment};
///
/// // Static segment
/// let seg = classify_segment("discussions");
/// assert!(matches!(seg, Segment::Static(_)));
///
/// // Named parameter
/// let seg = classify_segment(":discussion_id");
/// assert!(matches!(seg, Segment::Param(_)));
///
/// // Catch-all
/// let seg = classify_segment("*rest");
/// assert!(matches!(seg, Segment::CatchAll(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Static text segment
    Static(String),
    /// Named parameter: `:id`
    Param(String),
    /// Catch-all segment: `*` or `*rest`; binds the remaining path
    CatchAll(String),
}

/// Classifies a segment into a pattern type (pure function)
///
/// # Parsing Rules (evaluated in order)
///
/// 1. **Catch-all**: `*` (binds under the name `splat`) or `*name`
/// 2. **Parameter**: `:name`
/// 3. **Static**: any other text
pub fn classify_segment(segment: &str) -> Segment {
    if let Some(name) = segment.strip_prefix('*') {
        let name = if name.is_empty() { "splat" } else { name };
        return Segment::CatchAll(name.to_string());
    }

    match segment.strip_prefix(':') {
        Some(name) => Segment::Param(name.to_string()),
        None => Segment::Static(segment.to_string()),
    }
}

/// Parses a full pattern into segments (pure function)
///
/// Empty patterns and `/` both parse to an empty segment list, which matches
/// only the root path.
///
/// # Examples
///
/// ```
/// use virgule_router::pattern::{parse_pattern, Segment};
///
/// let segments = parse_pattern("/app/discussions/:discussion_id");
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[2], Segment::Param("discussion_id".to_string()));
/// ```
pub fn parse_pattern(pattern: &str) -> Vec<Segment> {
    pattern
        .split('/')
        .filter(|s| !s.is_empty())
        .map(classify_segment)
        .collect()
}

/// Matches parsed segments against a path (pure function)
///
/// The path must already be in canonical form (see [`crate::path::normalize_path`]).
/// Returns the extracted parameters on a match, `None` otherwise.
///
/// A catch-all segment consumes every remaining path segment and binds them
/// joined with `/`; it requires at least one remaining segment.
///
/// # Examples
///
/// ```
/// use virgule_router::pattern::{match_segments, parse_pattern};
///
/// let segments = parse_pattern("/users/:id");
/// let params = match_segments(&segments, "/users/123", false).unwrap();
/// assert_eq!(params.get("id"), Some(&"123".to_string()));
///
/// assert!(match_segments(&segments, "/users", false).is_none());
/// assert!(match_segments(&segments, "/users/123/posts", false).is_none());
/// ```
pub fn match_segments(segments: &[Segment], path: &str, case_insensitive: bool) -> Option<Params> {
    let path_segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    fn walk(
        segments: &[Segment],
        path_segments: &[&str],
        params: Params,
        case_insensitive: bool,
    ) -> Option<Params> {
        match segments.split_first() {
            // Base case: consumed all pattern segments
            None => {
                if path_segments.is_empty() {
                    Some(params)
                } else {
                    None
                }
            }
            Some((segment, rest)) => match segment {
                Segment::CatchAll(name) => {
                    if path_segments.is_empty() {
                        return None;
                    }
                    let mut params = params;
                    params.insert(name.clone(), path_segments.join("/"));
                    Some(params)
                }
                Segment::Param(name) => {
                    let (head, tail) = path_segments.split_first()?;
                    let mut params = params;
                    params.insert(name.clone(), (*head).to_string());
                    walk(rest, tail, params, case_insensitive)
                }
                Segment::Static(text) => {
                    let (head, tail) = path_segments.split_first()?;
                    let matches = if case_insensitive {
                        text.eq_ignore_ascii_case(head)
                    } else {
                        text == head
                    };
                    if !matches {
                        return None;
                    }
                    walk(rest, tail, params, case_insensitive)
                }
            },
        }
    }

    walk(segments, &path_segments, Params::new(), case_insensitive)
}
