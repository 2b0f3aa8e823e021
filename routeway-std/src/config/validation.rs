//! Configuration validation.
//!
//! Serde handles the syntax; this module checks what serde cannot: that
//! regexes compile, that declared routes use allowed methods, and that the
//! separators do not collide with the action string syntax.
//!
//! Validation is a pure function returning every problem found, not just the
//! first.

use crate::config::schema::RouterConfig;
use regex::Regex;
use routeway_core::Method;
use thiserror::Error;

/// A semantic problem in a [`RouterConfig`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// `allowed_methods` is empty or contains an empty name.
    #[error("allowed_methods must list at least one non-empty method")]
    EmptyMethod,

    /// `default_action` is empty.
    #[error("default_action must not be empty")]
    EmptyDefaultAction,

    /// `placeholder_marker` is empty.
    #[error("placeholder_marker must not be empty")]
    EmptyMarker,

    /// `namespace_separator` is empty or contains a character that splits
    /// action strings.
    #[error("namespace_separator {0:?} must be non-empty and must not contain '@', '.' or '/'")]
    InvalidSeparator(String),

    /// A regex does not compile.
    #[error("invalid regex for {name}: {reason}")]
    InvalidRegex {
        /// `placeholder_group` or the placeholder token.
        name: String,
        /// Compiler message.
        reason: String,
    },

    /// A placeholder token does not contain the marker, so no segment could
    /// ever be detected as it.
    #[error("placeholder {token} does not contain the marker {marker:?}")]
    UnmarkedPlaceholder {
        /// The token.
        token: String,
        /// The configured marker.
        marker: String,
    },

    /// A declared route has an empty method or pattern.
    #[error("route #{index} must have a method and a pattern")]
    IncompleteRoute {
        /// Position in `routes`.
        index: usize,
    },

    /// A declared route uses a method outside the allow-list.
    #[error("route #{index} uses method {method} which is not allowed")]
    MethodNotAllowed {
        /// Position in `routes`.
        index: usize,
        /// The offending method.
        method: String,
    },
}

/// Validate a configuration, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.allowed_methods.is_empty()
        || config.allowed_methods.iter().any(|method| method.trim().is_empty())
    {
        errors.push(ValidationError::EmptyMethod);
    }

    if config.default_action.is_empty() {
        errors.push(ValidationError::EmptyDefaultAction);
    }

    if let Err(e) = check_marker(&config.placeholder_marker) {
        errors.push(e);
    }
    if let Err(e) = check_separator(&config.namespace_separator) {
        errors.push(e);
    }

    check_regex("placeholder_group", &config.placeholder_group, &mut errors);
    for (token, regex) in &config.placeholders {
        check_regex(token, regex, &mut errors);
        if !config.placeholder_marker.is_empty() && !token.contains(&config.placeholder_marker) {
            errors.push(ValidationError::UnmarkedPlaceholder {
                token: token.clone(),
                marker: config.placeholder_marker.clone(),
            });
        }
    }

    let allowed = config.method_set();
    for (index, route) in config.routes.iter().enumerate() {
        if route.method.trim().is_empty() || route.pattern.is_empty() {
            errors.push(ValidationError::IncompleteRoute { index });
            continue;
        }

        let method = Method::from(route.method.as_str());
        if !allowed.contains(&method) {
            errors.push(ValidationError::MethodNotAllowed {
                index,
                method: method.to_string(),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Check a placeholder marker.
pub fn check_marker(marker: &str) -> Result<(), ValidationError> {
    if marker.is_empty() {
        return Err(ValidationError::EmptyMarker);
    }
    Ok(())
}

/// Check a namespace separator against the action string syntax.
pub fn check_separator(separator: &str) -> Result<(), ValidationError> {
    if separator.is_empty() || separator.contains(['@', '.', '/']) {
        return Err(ValidationError::InvalidSeparator(separator.to_string()));
    }
    Ok(())
}

fn check_regex(name: &str, regex: &str, errors: &mut Vec<ValidationError>) {
    if let Err(e) = Regex::new(regex) {
        errors.push(ValidationError::InvalidRegex {
            name: name.to_string(),
            reason: e.to_string(),
        });
    }
}
