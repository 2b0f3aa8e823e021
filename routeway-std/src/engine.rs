//! The registration and resolution engine.
//!
//! [`RouteEngine`] owns every piece of router state: the table, aliases,
//! scopes, placeholder registry, allow-list and settings. It is synchronous,
//! collaborator-free apart from the [`Invoker`] passed to [`RouteEngine::resolve`],
//! and makes no decision about where the current request comes from.

use crate::{
    alias::AliasTable,
    config::{
        ConfigError, RouterConfig, ValidationError, check_marker, check_separator,
        validate_config,
    },
    logging,
    normalize::Normalizer,
    patterns::PatternRegistry,
    resolver::{self, Matched},
    scope::{Pushed, Rules, ScopeDepth, ScopeStack},
    table::{RouteEntry, RouteTable, segment_count},
};
use routeway_core::{
    Destination, Invoker, Method, MethodSet, MiddlewareList, Resolution, RouteError,
};

/// Route registration and resolution state.
#[derive(Debug, Clone)]
pub struct RouteEngine {
    table: RouteTable,
    aliases: AliasTable,
    scopes: ScopeStack,
    patterns: PatternRegistry,
    methods: MethodSet,
    default_action: String,
    namespace_separator: String,
    strip: String,
    last: Option<(Method, String)>,
}

impl Default for RouteEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl RouteEngine {
    /// An empty engine with default settings.
    pub fn new() -> Self {
        Self {
            table: RouteTable::new(),
            aliases: AliasTable::new(),
            scopes: ScopeStack::new(),
            patterns: PatternRegistry::new(),
            methods: MethodSet::default(),
            default_action: "index".to_string(),
            namespace_separator: "\\".to_string(),
            strip: String::new(),
            last: None,
        }
    }

    /// Build an engine from a configuration and register its declared routes.
    pub fn from_config(config: &RouterConfig) -> Result<Self, ConfigError> {
        validate_config(config).map_err(ConfigError::Validation)?;

        let mut engine = Self {
            patterns: config.pattern_registry()?,
            methods: config.method_set(),
            default_action: config.default_action.clone(),
            namespace_separator: config.namespace_separator.clone(),
            strip: config.strip_prefix(),
            ..Self::new()
        };

        for route in &config.routes {
            engine.map(route.method(), &route.pattern, Destination::from(&route.destination))?;
            if let Some(name) = &route.name {
                engine.name(name);
            }
        }
        Ok(engine)
    }

    /// Register a route.
    ///
    /// The method must be in the allow-list. The pattern gets a leading `/`
    /// and the active prefixes, action destinations get the active
    /// namespaces, and the entry carries the active middleware. Registering
    /// the same method and composed pattern again replaces the entry.
    ///
    /// Returns the stored pattern.
    pub fn map(
        &mut self,
        method: Method,
        pattern: &str,
        destination: Destination,
    ) -> Result<&str, RouteError> {
        if !self.methods.contains(&method) {
            return Err(RouteError::UnsupportedMethod(method.to_string()));
        }

        let pattern = self.scopes.compose_pattern(pattern);
        let destination = self
            .scopes
            .compose_destination(destination, &self.namespace_separator);

        logging::route_registered(&method, &pattern, segment_count(&pattern), destination.kind());

        let entry = RouteEntry::new(destination, self.scopes.middleware());
        self.table.insert(method.clone(), &pattern, entry);

        let (_, stored) = self.last.insert((method, pattern));
        Ok(stored.as_str())
    }

    /// Name the most recently registered route.
    ///
    /// Returns false, and records nothing, when no route has been registered.
    pub fn name(&mut self, alias: &str) -> bool {
        let Some((_, pattern)) = &self.last else {
            return false;
        };
        logging::alias_named(alias, pattern);
        self.aliases.insert(alias, pattern.clone());
        true
    }

    /// Append middleware to the most recently registered route.
    ///
    /// Returns false when no route has been registered.
    pub fn attach_middleware(&mut self, items: MiddlewareList) -> bool {
        let Some((method, pattern)) = &self.last else {
            return false;
        };
        match self.table.get_mut(method, pattern) {
            Some(entry) => {
                entry.extend_middleware(items);
                true
            }
            None => false,
        }
    }

    /// Push a registration scope.
    pub fn enter(&mut self, rules: Rules) -> Pushed {
        self.scopes.enter(rules)
    }

    /// Pop a registration scope.
    pub fn exit(&mut self, pushed: Pushed) {
        self.scopes.exit(pushed);
    }

    /// Current scope depth.
    pub fn scope_depth(&self) -> ScopeDepth {
        self.scopes.depth()
    }

    /// Find the route for a raw request URL without normalising its
    /// destination.
    pub fn find(&self, method: &Method, raw_url: &str) -> Result<Matched<'_>, RouteError> {
        let url = resolver::normalize_url(raw_url, &self.strip);
        resolver::find(&self.table, &self.patterns, method, &url)
    }

    /// Resolve a raw request URL.
    pub fn resolve(
        &self,
        method: &Method,
        raw_url: &str,
        invoker: &dyn Invoker,
    ) -> Result<Resolution, RouteError> {
        let matched = self.find(method, raw_url)?;
        Normalizer::new(invoker, &self.default_action, &self.namespace_separator).normalize(
            matched.entry.destination(),
            matched.params,
            matched.entry.middleware().clone(),
        )
    }

    /// Build a URL from an alias and positional parameters.
    pub fn url<S: AsRef<str>>(&self, alias: &str, params: &[S]) -> Result<String, RouteError> {
        self.aliases.url(alias, params, self.patterns.group())
    }

    /// Forget every route and alias.
    pub fn reset(&mut self) {
        self.table.clear();
        self.aliases.clear();
        self.last = None;
    }

    /// The route table.
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// The alias table.
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// The placeholder registry.
    pub fn patterns(&self) -> &PatternRegistry {
        &self.patterns
    }

    /// Mutable access to the placeholder registry.
    pub fn patterns_mut(&mut self) -> &mut PatternRegistry {
        &mut self.patterns
    }

    /// The allow-list.
    pub fn methods(&self) -> &MethodSet {
        &self.methods
    }

    /// Replace the allow-list.
    pub fn set_allowed_methods(&mut self, methods: MethodSet) {
        self.methods = methods;
    }

    /// Add one method to the allow-list. Returns false if already allowed.
    pub fn allow_method(&mut self, method: Method) -> bool {
        self.methods.insert(method)
    }

    /// Method name used when a destination supplies none.
    pub fn default_action(&self) -> &str {
        &self.default_action
    }

    /// Change the default method name.
    pub fn set_default_action(&mut self, action: impl Into<String>) {
        self.default_action = action.into();
    }

    /// Separator joining namespace scopes.
    pub fn namespace_separator(&self) -> &str {
        &self.namespace_separator
    }

    /// Change the namespace separator.
    ///
    /// Rejects an empty separator or one containing `@`, `.` or `/`.
    pub fn set_namespace_separator(&mut self, separator: &str) -> Result<(), ValidationError> {
        check_separator(separator)?;
        self.namespace_separator = separator.to_string();
        Ok(())
    }

    /// Change the placeholder marker. Rejects an empty marker.
    pub fn set_placeholder_marker(&mut self, marker: &str) -> Result<(), ValidationError> {
        check_marker(marker)?;
        self.patterns.set_marker(marker);
        Ok(())
    }

    /// Segments removed from incoming URLs, joined by `/`.
    pub fn strip(&self) -> &str {
        &self.strip
    }

    /// Change the segments removed from incoming URLs.
    pub fn set_strip_segments<I, S>(&mut self, segments: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.strip = segments
            .into_iter()
            .filter_map(|segment| {
                let segment = segment.as_ref().trim_matches('/');
                (!segment.is_empty()).then(|| segment.to_string())
            })
            .collect::<Vec<_>>()
            .join("/");
    }

    /// Method and stored pattern of the most recently registered route.
    pub fn last_registered(&self) -> Option<(&Method, &str)> {
        self.last
            .as_ref()
            .map(|(method, pattern)| (method, pattern.as_str()))
    }
}
