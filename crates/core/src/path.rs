//! Language prefixes on URL paths.
//!
//! Every internal link goes through `add_language`, and switching language
//! maps the current location through `remove_language` and back, so the rest
//! of the path and the query string survive the switch.
//!
//! Paths are router locations and therefore absolute. A relative or empty
//! path is read as if it started with `/`, so `remove_language` undoes
//! `add_language` up to that leading slash.

/// Prefix `path` with `/{lang}`.
///
/// Duplicate slashes in the path part are collapsed; the query string is
/// left alone. `games` and `/games` give the same result.
#[must_use]
pub fn add_language(lang: &str, path: &str) -> String {
    let (path, query) = split_query(path);
    let mut out = String::with_capacity(lang.len() + path.len() + query.len() + 2);
    out.push('/');
    out.push_str(lang.trim_matches('/'));
    out.push('/');
    out.push_str(path.trim_start_matches('/'));
    let mut out = collapse_slashes(&out);
    out.push_str(query);
    out
}

/// Strip a leading `/{current}` segment, or return `path` unchanged.
///
/// Only a whole segment matches: `/english/` is not stripped by `en`.
#[must_use]
pub fn remove_language(current: &str, path: &str) -> String {
    let (path_part, query) = split_query(path);
    let current = current.trim_matches('/');
    if current.is_empty() {
        return path.to_string();
    }
    let Some(rest) = path_part
        .strip_prefix('/')
        .and_then(|p| p.strip_prefix(current))
    else {
        return path.to_string();
    };
    if rest.is_empty() {
        return format!("/{query}");
    }
    if rest.starts_with('/') {
        return format!("{rest}{query}");
    }
    path.to_string()
}

/// First path segment, if any.
#[must_use]
pub fn first_segment(path: &str) -> Option<&str> {
    let (path, _) = split_query(path);
    path.trim_start_matches('/')
        .split('/')
        .next()
        .filter(|segment| !segment.is_empty())
}

/// Split `path?query` into `("path", "?query")`. The query keeps its `?`.
#[must_use]
pub fn split_query(path: &str) -> (&str, &str) {
    match path.find('?') {
        Some(at) => path.split_at(at),
        None => (path, ""),
    }
}

fn collapse_slashes(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut previous_slash = false;
    for ch in raw.chars() {
        if ch == '/' {
            if previous_slash {
                continue;
            }
            previous_slash = true;
        } else {
            previous_slash = false;
        }
        out.push(ch);
    }
    out
}
