//! Route resolution.
//!
//! Two paths, tried in order:
//!
//! 1. **Exact**: the URL itself is a key in the `(method, segment count)`
//!    bucket.
//! 2. **Structural**: walk the bucket in registration order and take the
//!    first pattern whose every segment is either literally equal to the URL
//!    segment or a placeholder whose regex accepts it. Placeholder segments
//!    are captured, left to right.
//!
//! A structural winner that captured nothing is still "not found"; a purely
//! literal pattern can only be reached through the exact path.

use crate::{
    logging,
    patterns::PatternRegistry,
    table::{Bucket, RouteEntry, RouteTable, segment_count},
};
use routeway_core::{Method, RouteError};

/// A route found for a request, before destination normalisation.
#[derive(Debug, Clone)]
pub struct Matched<'a> {
    /// The stored pattern that matched.
    pub pattern: &'a str,
    /// Its entry.
    pub entry: &'a RouteEntry,
    /// Captured placeholder values, left to right.
    pub params: Vec<String>,
    /// Whether the exact path was taken.
    pub exact: bool,
}

/// Find the route for `method` and an already normalised `url`.
pub fn find<'a>(
    table: &'a RouteTable,
    patterns: &PatternRegistry,
    method: &Method,
    url: &str,
) -> Result<Matched<'a>, RouteError> {
    if table.is_empty() {
        logging::not_found(method, url, "empty table");
        return Err(RouteError::NotFound(url.to_string()));
    }

    let Some(bucket) = table.bucket(method, segment_count(url)) else {
        logging::not_found(method, url, "no bucket");
        return Err(RouteError::NotFound(url.to_string()));
    };

    if let Some((pattern, entry)) = bucket.get_key_value(url) {
        logging::matched(method, url, pattern, true, 0);
        return Ok(Matched {
            pattern,
            entry,
            params: Vec::new(),
            exact: true,
        });
    }

    match structural(bucket, patterns, url)? {
        Some(found) if !found.params.is_empty() => {
            logging::matched(method, url, found.pattern, false, found.params.len());
            Ok(found)
        }
        _ => {
            logging::not_found(method, url, "no structural match");
            Err(RouteError::NotFound(url.to_string()))
        }
    }
}

fn structural<'a>(
    bucket: &'a Bucket,
    patterns: &PatternRegistry,
    url: &str,
) -> Result<Option<Matched<'a>>, RouteError> {
    let url_parts: Vec<&str> = url.trim_start_matches('/').split('/').collect();

    'candidates: for (pattern, entry) in bucket.iter() {
        let pattern_parts: Vec<&str> = pattern.trim_start_matches('/').split('/').collect();
        if pattern_parts.len() != url_parts.len() {
            continue;
        }

        let mut params = Vec::new();
        for (pattern_part, url_part) in pattern_parts.iter().zip(&url_parts) {
            if pattern_part == url_part {
                continue;
            }
            if patterns.is_placeholder(pattern_part) {
                let accepted = patterns.matches(pattern_part, url_part).inspect_err(|_| {
                    logging::unknown_placeholder(pattern, pattern_part);
                })?;
                if accepted {
                    params.push((*url_part).to_string());
                    continue;
                }
            }
            continue 'candidates;
        }

        return Ok(Some(Matched {
            pattern,
            entry,
            params,
            exact: false,
        }));
    }

    Ok(None)
}

/// Normalise a raw request URL for matching.
///
/// Drops any query string or fragment and removes `strip` when it forms the
/// leading whole segments of the path. An empty result is `/`.
pub fn normalize_url(raw: &str, strip: &str) -> String {
    let path = raw.split(['?', '#']).next().unwrap_or_default();
    let strip = strip.trim_matches('/');

    let url = if strip.is_empty() {
        path
    } else {
        path.strip_prefix('/')
            .unwrap_or(path)
            .strip_prefix(strip)
            .filter(|rest| rest.is_empty() || rest.starts_with('/'))
            .unwrap_or(path)
    };

    if url.is_empty() { "/".to_string() } else { url.to_string() }
}
