//! Resolution results.

use crate::middleware::MiddlewareList;

/// The outcome of resolving a request.
#[derive(Debug, Clone)]
pub enum Resolution {
    /// A route for the dispatcher.
    Route(ResolvedRoute),
    /// An object destination rendered itself; this text is the whole response
    /// and no further routing happens.
    Rendered(String),
}

impl Resolution {
    /// The resolved route, if this is not an inline response.
    pub fn route(&self) -> Option<&ResolvedRoute> {
        match self {
            Resolution::Route(route) => Some(route),
            Resolution::Rendered(_) => None,
        }
    }

    /// The rendered text, if this is an inline response.
    pub fn rendered(&self) -> Option<&str> {
        match self {
            Resolution::Route(_) => None,
            Resolution::Rendered(text) => Some(text),
        }
    }

    /// Consume into the resolved route, if any.
    pub fn into_route(self) -> Option<ResolvedRoute> {
        match self {
            Resolution::Route(route) => Some(route),
            Resolution::Rendered(_) => None,
        }
    }
}

/// A normalised route: who to call, with what, behind which middleware.
///
/// Built once per resolution and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct ResolvedRoute {
    controller: String,
    action: String,
    params: Vec<String>,
    middleware: MiddlewareList,
    namespace: Option<String>,
}

impl ResolvedRoute {
    /// Build a resolved route.
    ///
    /// `namespace_separator` is used to split the namespace off the
    /// controller identifier.
    pub fn new(
        controller: impl Into<String>,
        action: impl Into<String>,
        params: Vec<String>,
        middleware: MiddlewareList,
        namespace_separator: &str,
    ) -> Self {
        let controller = controller.into();
        let namespace = if namespace_separator.is_empty() {
            None
        } else {
            controller
                .rsplit_once(namespace_separator)
                .map(|(namespace, _)| namespace.to_string())
        };
        Self {
            controller,
            action: action.into(),
            params,
            middleware,
            namespace,
        }
    }

    /// The controller identifier, namespace included.
    pub fn controller(&self) -> &str {
        &self.controller
    }

    /// The method to call on the controller.
    pub fn action(&self) -> &str {
        &self.action
    }

    /// Positional parameters: extracted path segments, then literal trailing
    /// pieces of the destination.
    pub fn params(&self) -> &[String] {
        &self.params
    }

    /// Middleware attached at registration time, outermost first.
    pub fn middleware(&self) -> &MiddlewareList {
        &self.middleware
    }

    /// The controller's namespace, i.e. everything before its last separator.
    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }
}
