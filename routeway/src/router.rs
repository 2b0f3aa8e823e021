//! The router.
//!
//! [`Router`] is the registration and query surface. It owns a
//! [`RouteEngine`] plus the two host collaborators (where the current request
//! comes from, and how handler destinations are invoked) and memoises the
//! resolution of the current request.

use routeway_core::{
    Destination, DirectInvoker, Invoker, Method, MethodSet, Middleware, MiddlewareList,
    RequestSource, Resolution, RouteError,
};
use routeway_std::{
    alias::AliasTable,
    config::{ConfigError, RouterConfig, ValidationError, load_config},
    engine::RouteEngine,
    patterns::PatternError,
    scope::{Pushed, Rules},
    table::RouteTable,
};
use std::{
    fmt,
    ops::{Deref, DerefMut},
    path::Path,
    sync::Arc,
};

/// Route registration and resolution.
///
/// # Example
///
/// ```rust,ignore
/// let mut router = Router::new();
/// router.get("/", "IndexController")?.name("home");
/// router.prefix("admin", |r| {
///     r.get("/users", "Admin\\UserController@list")?;
///     Ok(())
/// })?;
///
/// let resolution = router.resolve("GET", "/admin/users")?;
/// ```
pub struct Router {
    engine: RouteEngine,
    source: Arc<dyn RequestSource>,
    invoker: Arc<dyn Invoker>,
    current: Option<Resolution>,
}

impl Router {
    /// An empty router.
    ///
    /// The current request defaults to `GET /` until a [`RequestSource`] is
    /// set, and handlers are called directly until an [`Invoker`] is set.
    pub fn new() -> Self {
        Self::with_engine(RouteEngine::new())
    }

    fn with_engine(engine: RouteEngine) -> Self {
        Self {
            engine,
            source: Arc::new(RootRequest),
            invoker: Arc::new(DirectInvoker),
            current: None,
        }
    }

    /// Build a router from a configuration, registering its declared routes.
    pub fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        Ok(Self::with_engine(RouteEngine::from_config(config)?))
    }

    /// Load a TOML configuration file and build a router from it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_config(&load_config(path)?)
    }

    /// Set where the current request comes from.
    pub fn set_source(&mut self, source: impl RequestSource + 'static) -> &mut Self {
        self.source = Arc::new(source);
        self.current = None;
        self
    }

    /// Set how handler destinations are invoked.
    pub fn set_invoker(&mut self, invoker: impl Invoker + 'static) -> &mut Self {
        self.invoker = Arc::new(invoker);
        self.current = None;
        self
    }

    // ========================================================================
    // Registration
    // ========================================================================

    /// Register a route.
    ///
    /// `method` is case-insensitive and must be allowed (see
    /// [`Router::allow_method`]). Active prefix, namespace and middleware
    /// scopes are applied. Registering the same method and final pattern
    /// twice replaces the first destination.
    pub fn map(
        &mut self,
        method: impl Into<Method>,
        pattern: &str,
        destination: impl Into<Destination>,
    ) -> Result<&mut Self, RouteError> {
        self.engine.map(method.into(), pattern, destination.into())?;
        self.current = None;
        Ok(self)
    }

    /// Register a `GET` route.
    pub fn get(
        &mut self,
        pattern: &str,
        destination: impl Into<Destination>,
    ) -> Result<&mut Self, RouteError> {
        self.map(Method::Get, pattern, destination)
    }

    /// Register a `POST` route.
    pub fn post(
        &mut self,
        pattern: &str,
        destination: impl Into<Destination>,
    ) -> Result<&mut Self, RouteError> {
        self.map(Method::Post, pattern, destination)
    }

    /// Register a `PUT` route.
    pub fn put(
        &mut self,
        pattern: &str,
        destination: impl Into<Destination>,
    ) -> Result<&mut Self, RouteError> {
        self.map(Method::Put, pattern, destination)
    }

    /// Register a `PATCH` route.
    pub fn patch(
        &mut self,
        pattern: &str,
        destination: impl Into<Destination>,
    ) -> Result<&mut Self, RouteError> {
        self.map(Method::Patch, pattern, destination)
    }

    /// Register a `DELETE` route.
    pub fn delete(
        &mut self,
        pattern: &str,
        destination: impl Into<Destination>,
    ) -> Result<&mut Self, RouteError> {
        self.map(Method::Delete, pattern, destination)
    }

    /// Register a `HEAD` route. `HEAD` is not allowed by default.
    pub fn head(
        &mut self,
        pattern: &str,
        destination: impl Into<Destination>,
    ) -> Result<&mut Self, RouteError> {
        self.map(Method::Head, pattern, destination)
    }

    /// Register an `OPTIONS` route. `OPTIONS` is not allowed by default.
    pub fn options(
        &mut self,
        pattern: &str,
        destination: impl Into<Destination>,
    ) -> Result<&mut Self, RouteError> {
        self.map(Method::Options, pattern, destination)
    }

    /// Name the most recently registered route for reverse routing.
    ///
    /// Does nothing before the first registration; the alias then stays
    /// unknown to [`Router::url`].
    pub fn name(&mut self, alias: &str) -> &mut Self {
        self.engine.name(alias);
        self
    }

    /// Attach middleware to the most recently registered route, after any
    /// middleware it got from scopes.
    pub fn middleware<I, M>(&mut self, items: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Middleware + 'static,
    {
        if self.engine.attach_middleware(middleware_list(items)) {
            self.current = None;
        }
        self
    }

    // ========================================================================
    // Scopes
    // ========================================================================

    /// Run `f` with `prefix` prepended to every pattern it registers.
    pub fn prefix<F>(&mut self, prefix: &str, f: F) -> Result<&mut Self, RouteError>
    where
        F: FnOnce(&mut Router) -> Result<(), RouteError>,
    {
        self.rules(Rules::new().prefix(prefix), f)
    }

    /// Run `f` with `namespace` prepended to every action destination it
    /// registers.
    pub fn namespace<F>(&mut self, namespace: &str, f: F) -> Result<&mut Self, RouteError>
    where
        F: FnOnce(&mut Router) -> Result<(), RouteError>,
    {
        self.rules(Rules::new().namespace(namespace), f)
    }

    /// Run `f` with `items` attached to every route it registers.
    pub fn with_middleware<I, M, F>(&mut self, items: I, f: F) -> Result<&mut Self, RouteError>
    where
        I: IntoIterator<Item = M>,
        M: Middleware + 'static,
        F: FnOnce(&mut Router) -> Result<(), RouteError>,
    {
        self.rules(Rules::new().middleware(middleware_list(items)), f)
    }

    /// Run `f` inside a combined prefix, namespace and middleware scope.
    ///
    /// Whatever was pushed is popped when `f` returns, whether it succeeded,
    /// failed or panicked. Empty values are neither pushed nor popped.
    pub fn rules<F>(&mut self, rules: Rules, f: F) -> Result<&mut Self, RouteError>
    where
        F: FnOnce(&mut Router) -> Result<(), RouteError>,
    {
        let pushed = self.engine.enter(rules);
        let result = {
            let mut guard = ScopeGuard {
                router: &mut *self,
                pushed,
            };
            f(&mut guard)
        };
        result?;
        Ok(self)
    }

    // ========================================================================
    // Queries
    // ========================================================================

    /// The full route table.
    pub fn routes(&self) -> &RouteTable {
        self.engine.table()
    }

    /// Every recorded alias.
    pub fn aliases(&self) -> &AliasTable {
        self.engine.aliases()
    }

    /// Build a URL from an alias, filling placeholders left to right.
    pub fn url<S: AsRef<str>>(&self, alias: &str, params: &[S]) -> Result<String, RouteError> {
        self.engine.url(alias, params)
    }

    /// Resolve a method and URL, without touching the memoised current route.
    pub fn resolve(&self, method: impl Into<Method>, url: &str) -> Result<Resolution, RouteError> {
        self.engine.resolve(&method.into(), url, self.invoker.as_ref())
    }

    /// Resolve the current request, as reported by the [`RequestSource`].
    ///
    /// The first successful resolution is cached until the router changes.
    pub fn current_route(&mut self) -> Result<&Resolution, RouteError> {
        let resolution = match self.current.take() {
            Some(resolution) => resolution,
            None => {
                let method = Method::from(self.source.current_method());
                let url = self.source.current_url();
                self.engine.resolve(&method, &url, self.invoker.as_ref())?
            }
        };
        Ok(&*self.current.insert(resolution))
    }

    /// Forget every route and alias.
    pub fn reset(&mut self) -> &mut Self {
        self.engine.reset();
        self.current = None;
        self
    }

    /// The underlying engine.
    pub fn engine(&self) -> &RouteEngine {
        &self.engine
    }

    // ========================================================================
    // Settings
    // ========================================================================

    /// The methods `map` accepts.
    pub fn allowed_methods(&self) -> &MethodSet {
        self.engine.methods()
    }

    /// Replace the allow-list.
    pub fn set_allowed_methods<I, M>(&mut self, methods: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<Method>,
    {
        self.engine.set_allowed_methods(methods.into_iter().collect());
        self
    }

    /// Add a method to the allow-list.
    pub fn allow_method(&mut self, method: impl Into<Method>) -> &mut Self {
        self.engine.allow_method(method.into());
        self
    }

    /// Register or replace a placeholder token.
    pub fn placeholder(&mut self, token: &str, regex: &str) -> Result<&mut Self, PatternError> {
        self.engine.patterns_mut().register(token, regex)?;
        self.current = None;
        Ok(self)
    }

    /// Change the substring that marks a pattern segment as a placeholder.
    ///
    /// An empty marker is rejected and leaves the current one in place.
    pub fn set_placeholder_marker(
        &mut self,
        marker: &str,
    ) -> Result<&mut Self, ValidationError> {
        self.engine.set_placeholder_marker(marker)?;
        self.current = None;
        Ok(self)
    }

    /// Change the method name used when a destination supplies none.
    pub fn set_default_action(&mut self, action: &str) -> &mut Self {
        self.engine.set_default_action(action);
        self.current = None;
        self
    }

    /// Change the separator joining namespace scopes.
    ///
    /// Separators that are empty or contain `@`, `.` or `/` would be split by
    /// action parsing and are rejected.
    pub fn set_namespace_separator(
        &mut self,
        separator: &str,
    ) -> Result<&mut Self, ValidationError> {
        self.engine.set_namespace_separator(separator)?;
        self.current = None;
        Ok(self)
    }

    /// Change the leading segments removed from incoming URLs.
    pub fn set_strip_segments<I, S>(&mut self, segments: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.engine.set_strip_segments(segments);
        self.current = None;
        self
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("engine", &self.engine)
            .field("current", &self.current)
            .finish_non_exhaustive()
    }
}

/// The request seen before a host sets a source: `GET /`.
struct RootRequest;

impl RequestSource for RootRequest {
    fn current_url(&self) -> String {
        "/".to_string()
    }

    fn current_method(&self) -> String {
        Method::Get.as_str().to_string()
    }
}

fn middleware_list<I, M>(items: I) -> MiddlewareList
where
    I: IntoIterator<Item = M>,
    M: Middleware + 'static,
{
    items
        .into_iter()
        .map(|item| Arc::new(item) as Arc<dyn Middleware>)
        .collect()
}

/// Pops a scope when dropped.
struct ScopeGuard<'a> {
    router: &'a mut Router,
    pushed: Pushed,
}

impl Deref for ScopeGuard<'_> {
    type Target = Router;

    fn deref(&self) -> &Router {
        &*self.router
    }
}

impl DerefMut for ScopeGuard<'_> {
    fn deref_mut(&mut self) -> &mut Router {
        &mut *self.router
    }
}

impl Drop for ScopeGuard<'_> {
    fn drop(&mut self) {
        self.router.engine.exit(self.pushed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeway_std::{
        scope::ScopeDepth,
        testing::{RecordingInvoker, StaticRequest},
    };

    #[test]
    fn test_router_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Router>();
    }

    #[test]
    fn test_scope_is_released_when_callback_fails() {
        let mut router = Router::new();
        let err = router
            .prefix("admin", |r| {
                r.get("/ok", "Admin@ok")?;
                r.map("cli", "/nope", "Admin@nope")?;
                Ok(())
            })
            .unwrap_err();

        assert!(matches!(err, RouteError::UnsupportedMethod(_)));
        assert_eq!(router.engine().scope_depth(), ScopeDepth::default());

        router.get("/after", "After").unwrap();
        assert!(router.routes().get(&Method::Get, "/after").is_some());
        assert!(router.routes().get(&Method::Get, "/admin/ok").is_some());
    }

    #[test]
    fn test_current_route_is_memoised() {
        let invoker = RecordingInvoker::new();
        let mut router = Router::new();
        router.set_invoker(invoker.clone());
        router
            .get("/", Destination::handler(|_: &[String]| "Index@home".into()))
            .unwrap();

        router.current_route().unwrap();
        router.current_route().unwrap();
        assert_eq!(invoker.call_count(), 1);

        router.get("/other", "Other").unwrap();
        router.current_route().unwrap();
        assert_eq!(invoker.call_count(), 2);
    }

    #[test]
    fn test_default_source_is_root() {
        let mut router = Router::new();
        router.get("/", "IndexController").unwrap();
        assert_eq!(
            router.current_route().unwrap().route().unwrap().controller(),
            "IndexController"
        );
    }

    #[test]
    fn test_separator_that_splits_actions_is_rejected() {
        let mut router = Router::new();
        for separator in [".", "@", "/", ""] {
            let err = router.set_namespace_separator(separator).unwrap_err();
            assert_eq!(err, ValidationError::InvalidSeparator(separator.to_string()));
        }

        router
            .namespace("Api", |r| {
                r.get("/x", "UserController@show")?;
                Ok(())
            })
            .unwrap();
        let route = router.resolve("GET", "/x").unwrap().into_route().unwrap();
        assert_eq!(route.controller(), "Api\\UserController");
        assert_eq!(route.action(), "show");
        assert!(route.params().is_empty());
    }

    #[test]
    fn test_empty_marker_is_rejected() {
        let mut router = Router::new();
        assert_eq!(
            router.set_placeholder_marker("").unwrap_err(),
            ValidationError::EmptyMarker
        );

        router.get("/user/(n)", "UserController.show").unwrap();
        let route = router.resolve("GET", "/user/5").unwrap().into_route().unwrap();
        assert_eq!(route.params(), ["5"]);
    }

    #[test]
    fn test_failed_resolution_is_not_cached() {
        let request = StaticRequest::new("GET", "/late");
        let mut router = Router::new();
        router.set_source(request.clone());

        assert!(router.current_route().unwrap_err().is_not_found());

        router.get("/late", "Late").unwrap();
        let resolution = router.current_route().unwrap();
        assert_eq!(resolution.route().unwrap().controller(), "Late");
    }
}
