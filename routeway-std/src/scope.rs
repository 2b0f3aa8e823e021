//! Registration scopes.
//!
//! Three independent stacks (prefix, namespace, middleware) that nested
//! registration callbacks push onto and pop from. They only influence how
//! `map` composes the stored pattern, destination and middleware; nothing
//! here survives past registration.
//!
//! [`ScopeStack::enter`] returns a [`Pushed`] record of what was actually
//! pushed (empty values are skipped) and [`ScopeStack::exit`] pops exactly
//! that, so a callback that pushes nothing cannot pop an outer scope.

use routeway_core::{Destination, MiddlewareList};

/// What a nested registration block pushes.
#[derive(Debug, Clone, Default)]
pub struct Rules {
    prefix: Option<String>,
    namespace: Option<String>,
    middleware: MiddlewareList,
}

impl Rules {
    /// No scope changes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Prefix every pattern registered inside.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Prefix every action destination registered inside.
    pub fn namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Attach middleware to every route registered inside.
    pub fn middleware(mut self, middleware: MiddlewareList) -> Self {
        self.middleware = middleware;
        self
    }
}

/// Record of the pushes made by one [`ScopeStack::enter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[must_use = "pass the record back to `ScopeStack::exit`"]
pub struct Pushed {
    prefix: bool,
    namespace: bool,
    middleware: bool,
}

/// Current depth of each stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScopeDepth {
    /// Active prefixes.
    pub prefixes: usize,
    /// Active namespaces.
    pub namespaces: usize,
    /// Active middleware groups.
    pub middleware: usize,
}

/// The prefix, namespace and middleware stacks.
#[derive(Debug, Clone, Default)]
pub struct ScopeStack {
    prefixes: Vec<String>,
    namespaces: Vec<String>,
    middleware: Vec<MiddlewareList>,
}

impl ScopeStack {
    /// Empty stacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the non-empty parts of `rules`.
    ///
    /// Slashes are trimmed from both ends of a prefix; a prefix that is empty
    /// afterwards is not pushed.
    pub fn enter(&mut self, rules: Rules) -> Pushed {
        let mut pushed = Pushed::default();

        if let Some(prefix) = rules.prefix {
            let prefix = prefix.trim_matches('/');
            if !prefix.is_empty() {
                self.prefixes.push(prefix.to_string());
                pushed.prefix = true;
            }
        }

        if let Some(namespace) = rules.namespace {
            if !namespace.is_empty() {
                self.namespaces.push(namespace);
                pushed.namespace = true;
            }
        }

        if !rules.middleware.is_empty() {
            self.middleware.push(rules.middleware);
            pushed.middleware = true;
        }

        crate::logging::scope_entered(self.depth());
        pushed
    }

    /// Pop what `enter` pushed.
    pub fn exit(&mut self, pushed: Pushed) {
        if pushed.prefix {
            self.prefixes.pop();
        }
        if pushed.namespace {
            self.namespaces.pop();
        }
        if pushed.middleware {
            self.middleware.pop();
        }
        crate::logging::scope_exited(self.depth());
    }

    /// Current depth of each stack.
    pub fn depth(&self) -> ScopeDepth {
        ScopeDepth {
            prefixes: self.prefixes.len(),
            namespaces: self.namespaces.len(),
            middleware: self.middleware.len(),
        }
    }

    /// Compose the pattern to store.
    ///
    /// The pattern gets a leading `/` (empty means `/`), then the active
    /// prefixes are prepended. A bare `/` under a prefix collapses onto the
    /// prefix itself.
    pub fn compose_pattern(&self, pattern: &str) -> String {
        let pattern = if pattern.is_empty() {
            "/".to_string()
        } else if pattern.starts_with('/') {
            pattern.to_string()
        } else {
            format!("/{pattern}")
        };

        if self.prefixes.is_empty() {
            return pattern;
        }

        let tail = if pattern == "/" { "" } else { pattern.as_str() };
        format!("/{}{}", self.prefixes.join("/"), tail)
    }

    /// Compose the destination to store.
    ///
    /// Only action destinations are namespaced; handlers, descriptors and
    /// objects are stored untouched.
    pub fn compose_destination(&self, destination: Destination, separator: &str) -> Destination {
        match destination {
            Destination::Action(action) if !self.namespaces.is_empty() => {
                let namespace = self.namespaces.join(separator);
                Destination::Action(format!("{namespace}{separator}{action}"))
            }
            other => other,
        }
    }

    /// Middleware from every active group, outermost first.
    pub fn middleware(&self) -> MiddlewareList {
        self.middleware.iter().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routeway_core::Middleware;
    use std::sync::Arc;

    #[test]
    fn test_compose_without_prefix() {
        let scopes = ScopeStack::new();
        assert_eq!(scopes.compose_pattern("/"), "/");
        assert_eq!(scopes.compose_pattern(""), "/");
        assert_eq!(scopes.compose_pattern("users"), "/users");
        assert_eq!(scopes.compose_pattern("/users/(n)"), "/users/(n)");
    }

    #[test]
    fn test_compose_with_nested_prefixes() {
        let mut scopes = ScopeStack::new();
        let outer = scopes.enter(Rules::new().prefix("/my-prefix"));
        assert_eq!(scopes.compose_pattern("/test"), "/my-prefix/test");
        assert_eq!(scopes.compose_pattern("/"), "/my-prefix");

        let inner = scopes.enter(Rules::new().prefix("done/"));
        assert_eq!(scopes.compose_pattern("/by/me"), "/my-prefix/done/by/me");
        assert_eq!(scopes.compose_pattern("by"), "/my-prefix/done/by");

        scopes.exit(inner);
        scopes.exit(outer);
        assert_eq!(scopes.compose_pattern("/hey-there"), "/hey-there");
    }

    #[test]
    fn test_empty_values_are_not_pushed() {
        let mut scopes = ScopeStack::new();
        let outer = scopes.enter(Rules::new().prefix("categories"));

        let empty = scopes.enter(Rules::new().prefix("").namespace(""));
        assert_eq!(empty, Pushed::default());
        scopes.exit(empty);

        // The outer prefix survives an inner block that pushed nothing.
        assert_eq!(scopes.compose_pattern("/(n)"), "/categories/(n)");
        scopes.exit(outer);
        assert_eq!(scopes.depth(), ScopeDepth::default());
    }

    #[test]
    fn test_namespace_only_applies_to_actions() {
        let mut scopes = ScopeStack::new();
        let outer = scopes.enter(Rules::new().namespace("Api"));
        let inner = scopes.enter(Rules::new().namespace("V1"));

        assert_eq!(
            scopes.compose_destination(Destination::from("Ctrl"), "\\"),
            Destination::from("Api\\V1\\Ctrl")
        );
        assert_eq!(
            scopes.compose_destination(Destination::from(["Ctrl", "show"]), "\\"),
            Destination::from(["Ctrl", "show"])
        );

        scopes.exit(inner);
        scopes.exit(outer);
        assert_eq!(
            scopes.compose_destination(Destination::from("Ctrl"), "\\"),
            Destination::from("Ctrl")
        );
    }

    #[test]
    fn test_middleware_is_flattened_in_order() {
        let mut scopes = ScopeStack::new();
        let outer = scopes.enter(Rules::new().middleware(vec![Arc::new("session")]));
        let inner = scopes.enter(Rules::new().middleware(vec![Arc::new("auth"), Arc::new("csrf")]));

        let names: Vec<_> = scopes.middleware().iter().map(|m| m.name().to_string()).collect();
        assert_eq!(names, vec!["session", "auth", "csrf"]);

        scopes.exit(inner);
        scopes.exit(outer);
        assert!(scopes.middleware().is_empty());
    }
}
