//! Placeholder registry.
//!
//! A placeholder is a whole path segment such as `(n)` that stands for "this
//! segment matches regex R and is captured as a parameter". Segments are
//! detected as placeholders by containing the marker (default `(`), then the
//! whole segment is looked up as a token.
//!
//! Lookup is lazy: an unknown token is only reported when a resolution
//! actually reaches it.
//!
//! # Built-in tokens
//!
//! | Token | Matches |
//! |-------|---------|
//! | `(n)` | ASCII digits |
//! | `(s)` | ASCII letters, digits, `_` and `-` |
//! | `(*)` | anything except `/` |

use regex::Regex;
use routeway_core::RouteError;
use std::collections::HashMap;
use thiserror::Error;

/// Token for a numeric segment.
pub const NUMBER_PLACEHOLDER: &str = "(n)";
/// Token for a string (alphanumeric slug) segment.
pub const STRING_PLACEHOLDER: &str = "(s)";
/// Token for any single segment.
pub const ANY_PLACEHOLDER: &str = "(*)";
/// Default placeholder detection marker.
pub const DEFAULT_MARKER: &str = "(";
/// Default regex locating placeholder groups inside a stored pattern.
pub const DEFAULT_GROUP: &str = r"\((.*?)\)";

const NUMBER_REGEX: &str = r"^[0-9]+$";
const STRING_REGEX: &str = r"^[A-Za-z0-9_\-]+$";
const ANY_REGEX: &str = r"^[^/]+$";

/// A placeholder regex failed to compile.
#[derive(Error, Debug)]
#[error("invalid regex for placeholder {token}")]
pub struct PatternError {
    /// The token (or `group`) whose regex was rejected.
    pub token: String,
    /// The underlying regex error.
    #[source]
    pub source: regex::Error,
}

/// Maps placeholder tokens to the regexes their segments must match.
#[derive(Debug, Clone)]
pub struct PatternRegistry {
    marker: String,
    group: Regex,
    tokens: HashMap<String, Regex>,
}

impl PatternRegistry {
    /// A registry with the built-in tokens, marker and group regex.
    pub fn new() -> Self {
        let mut tokens = HashMap::new();
        tokens.insert(NUMBER_PLACEHOLDER.to_string(), builtin(NUMBER_REGEX));
        tokens.insert(STRING_PLACEHOLDER.to_string(), builtin(STRING_REGEX));
        tokens.insert(ANY_PLACEHOLDER.to_string(), builtin(ANY_REGEX));

        Self {
            marker: DEFAULT_MARKER.to_string(),
            group: builtin(DEFAULT_GROUP),
            tokens,
        }
    }

    /// Register or replace a token.
    ///
    /// The regex is used as given: anchor it (`^...$`) unless partial
    /// matches are intended.
    pub fn register(&mut self, token: impl Into<String>, regex: &str) -> Result<(), PatternError> {
        let token = token.into();
        let compiled = Regex::new(regex).map_err(|source| PatternError {
            token: token.clone(),
            source,
        })?;
        self.tokens.insert(token, compiled);
        Ok(())
    }

    /// Remove a token. Returns false if it was not registered.
    pub fn unregister(&mut self, token: &str) -> bool {
        self.tokens.remove(token).is_some()
    }

    /// Change the placeholder detection marker.
    pub fn set_marker(&mut self, marker: impl Into<String>) {
        self.marker = marker.into();
    }

    /// Change the regex used by reverse routing to find placeholder groups.
    pub fn set_group(&mut self, regex: &str) -> Result<(), PatternError> {
        self.group = Regex::new(regex).map_err(|source| PatternError {
            token: "group".to_string(),
            source,
        })?;
        Ok(())
    }

    /// The placeholder detection marker.
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// The reverse-routing group regex.
    pub fn group(&self) -> &Regex {
        &self.group
    }

    /// Check whether a pattern segment is a placeholder.
    pub fn is_placeholder(&self, segment: &str) -> bool {
        !self.marker.is_empty() && segment.contains(self.marker.as_str())
    }

    /// The regex for a token.
    pub fn matcher(&self, token: &str) -> Result<&Regex, RouteError> {
        self.tokens
            .get(token)
            .ok_or_else(|| RouteError::UnknownPlaceholder(token.to_string()))
    }

    /// Check a URL segment against a token.
    pub fn matches(&self, token: &str, segment: &str) -> Result<bool, RouteError> {
        Ok(self.matcher(token)?.is_match(segment))
    }

    /// Check whether a token is registered.
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains_key(token)
    }

    /// Number of registered tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if no tokens are registered.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl Default for PatternRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// Built-in patterns are literals checked by the tests below.
fn builtin(pattern: &'static str) -> Regex {
    Regex::new(pattern).expect("built-in placeholder regex is valid")
}
