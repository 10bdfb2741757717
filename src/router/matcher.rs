//! Path pattern matching.
//!
//! Patterns are `/`-separated segments; a segment starting with `:` captures
//! one non-empty path segment under that name. Leading and trailing slashes
//! are ignored on both sides, so `:coinId/price` matches `/btc-bitcoin/price/`.

use std::collections::HashMap;

/// Captured path parameters.
pub type Params = HashMap<String, String>;

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Match `pathname` against `pattern`, returning captured params on success.
pub fn match_path(pattern: &str, pathname: &str) -> Option<Params> {
    let pattern_segments = segments(pattern);
    let path_segments = segments(pathname);

    if pattern_segments.len() != path_segments.len() {
        return None;
    }

    let mut params = Params::new();
    for (pat, seg) in pattern_segments.iter().zip(path_segments.iter()) {
        if let Some(name) = pat.strip_prefix(':') {
            params.insert(name.to_string(), (*seg).to_string());
        } else if pat != seg {
            return None;
        }
    }
    Some(params)
}

/// Normalize a pathname: single leading slash, no trailing slash, no empty segments.
pub fn normalize(pathname: &str) -> String {
    let joined = segments(pathname).join("/");
    format!("/{}", joined)
}
