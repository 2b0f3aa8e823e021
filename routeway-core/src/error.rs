//! Error types for Routeway.
//!
//! Every failure the engine can report is a variant of [`RouteError`]. They
//! are all local and synchronous: nothing is retried and nothing is swallowed.
//! The one intentional early exit, an object destination that renders itself,
//! is modelled as [`Resolution::Rendered`](crate::Resolution::Rendered) and is
//! not an error.

use thiserror::Error;

/// A boxed error type for collaborator failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while registering, resolving or reversing routes.
#[derive(Error, Debug)]
pub enum RouteError {
    /// Registration used a method outside the allow-list.
    #[error("The HTTP method {0} is not allowed.")]
    UnsupportedMethod(String),

    /// Empty table, missing bucket, or no structural match.
    #[error("The route {0} not found.")]
    NotFound(String),

    /// A pattern segment references a placeholder token that is not registered.
    #[error("The placeholder {0} is not registered.")]
    UnknownPlaceholder(String),

    /// An object destination without a string representation.
    #[error("The object {0} does not have a string representation.")]
    InvalidDestination(String),

    /// An array destination with neither a controller key nor a first element.
    #[error(
        "Array structured route should have 0 index as controller name or controller => controllerName pairs."
    )]
    InvalidArrayRoute,

    /// Reverse lookup on a name that was never registered.
    #[error("The route alias {0} not found.")]
    AliasNotFound(String),

    /// A handler returned something that is neither an action nor an array.
    #[error(
        "Callable structured array response should return string like NameController@NameMethod or Array."
    )]
    InvalidCallableResult,

    /// The invocation collaborator failed to call a handler.
    #[error("handler invocation failed")]
    Invocation(#[source] BoxError),
}

impl RouteError {
    /// Stable numeric code for this error.
    ///
    /// Codes 1 to 5 match the historical message catalogue so hosts can keep
    /// translating by code.
    pub fn code(&self) -> u16 {
        match self {
            RouteError::InvalidArrayRoute => 1,
            RouteError::InvalidCallableResult => 2,
            RouteError::AliasNotFound(_) => 3,
            RouteError::NotFound(_) => 4,
            RouteError::InvalidDestination(_) => 5,
            RouteError::UnsupportedMethod(_) => 6,
            RouteError::UnknownPlaceholder(_) => 7,
            RouteError::Invocation(_) => 8,
        }
    }

    /// Returns true for the "route not found" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RouteError::NotFound(_))
    }
}

impl From<BoxError> for RouteError {
    fn from(err: BoxError) -> Self {
        RouteError::Invocation(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_follow_catalogue() {
        assert_eq!(
            RouteError::NotFound("/missing".into()).to_string(),
            "The route /missing not found."
        );
        assert_eq!(
            RouteError::AliasNotFound("home".into()).to_string(),
            "The route alias home not found."
        );
    }

    #[test]
    fn test_codes_are_distinct() {
        let errors = [
            RouteError::InvalidArrayRoute,
            RouteError::InvalidCallableResult,
            RouteError::AliasNotFound(String::new()),
            RouteError::NotFound(String::new()),
            RouteError::InvalidDestination(String::new()),
            RouteError::UnsupportedMethod(String::new()),
            RouteError::UnknownPlaceholder(String::new()),
            RouteError::Invocation("boom".into()),
        ];
        let mut codes: Vec<u16> = errors.iter().map(RouteError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_invocation_keeps_source() {
        use std::error::Error as _;

        let err = RouteError::from(BoxError::from("container missing binding"));
        assert_eq!(
            err.source().map(ToString::to_string),
            Some("container missing binding".to_string())
        );
    }
}
