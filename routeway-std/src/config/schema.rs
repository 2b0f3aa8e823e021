//! Configuration schema definitions.
//!
//! Every field has a default, so an empty file is a valid configuration that
//! behaves like [`RouterConfig::default`].

use crate::patterns::{DEFAULT_GROUP, DEFAULT_MARKER, PatternError, PatternRegistry};
use routeway_core::{Descriptor, Destination, Method, MethodSet};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration for a router.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct RouterConfig {
    /// Methods `map` accepts.
    pub allowed_methods: Vec<String>,

    /// Method name used when a destination does not supply one.
    pub default_action: String,

    /// Joins namespace scopes and splits the namespace off a controller.
    pub namespace_separator: String,

    /// Substring marking a pattern segment as a placeholder.
    pub placeholder_marker: String,

    /// Regex locating placeholder groups when building URLs from aliases.
    pub placeholder_group: String,

    /// Additional or replacement placeholder tokens (token → regex).
    pub placeholders: BTreeMap<String, String>,

    /// Leading path segments removed from incoming URLs, e.g. a
    /// sub-directory the application is served from.
    pub strip_segments: Vec<String>,

    /// Routes registered when the router is built.
    pub routes: Vec<RouteConfig>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            allowed_methods: MethodSet::default()
                .iter()
                .map(|method| method.as_str().to_string())
                .collect(),
            default_action: "index".to_string(),
            namespace_separator: "\\".to_string(),
            placeholder_marker: DEFAULT_MARKER.to_string(),
            placeholder_group: DEFAULT_GROUP.to_string(),
            placeholders: BTreeMap::new(),
            strip_segments: Vec::new(),
            routes: Vec::new(),
        }
    }
}

impl RouterConfig {
    /// The allow-list.
    pub fn method_set(&self) -> MethodSet {
        self.allowed_methods.iter().map(String::as_str).collect()
    }

    /// A pattern registry with the built-in tokens plus the configured ones.
    pub fn pattern_registry(&self) -> Result<PatternRegistry, PatternError> {
        let mut registry = PatternRegistry::new();
        registry.set_marker(self.placeholder_marker.as_str());
        registry.set_group(&self.placeholder_group)?;
        for (token, regex) in &self.placeholders {
            registry.register(token.as_str(), regex)?;
        }
        Ok(registry)
    }

    /// The strip segments joined into the string removed from incoming URLs.
    pub fn strip_prefix(&self) -> String {
        self.strip_segments
            .iter()
            .map(|segment| segment.trim_matches('/'))
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

/// A declared route.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct RouteConfig {
    /// HTTP method, any case.
    pub method: String,

    /// URL pattern, placeholders allowed.
    pub pattern: String,

    /// Where the pattern points.
    pub destination: DestinationConfig,

    /// Alias for reverse routing.
    #[serde(default)]
    pub name: Option<String>,
}

impl RouteConfig {
    /// The parsed method.
    pub fn method(&self) -> Method {
        Method::from(self.method.as_str())
    }
}

/// A destination as written in a configuration file.
///
/// ```toml
/// destination = "UserController@show"
/// destination = { controller = "UserController", method = "show" }
/// destination = ["UserController", "show"]
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(untagged)]
pub enum DestinationConfig {
    /// `"Controller@method"` or `"Controller.method"`.
    Action(String),
    /// `[controller, method]`.
    Positional(Vec<String>),
    /// `{ controller, method }`.
    Keyed {
        /// Controller identifier.
        #[serde(default)]
        controller: Option<String>,
        /// Method name.
        #[serde(default)]
        method: Option<String>,
    },
}

impl From<&DestinationConfig> for Destination {
    fn from(config: &DestinationConfig) -> Self {
        match config {
            DestinationConfig::Action(action) => Destination::Action(action.clone()),
            DestinationConfig::Positional(items) => {
                Destination::Descriptor(Descriptor::positional(items.iter().map(String::as_str)))
            }
            DestinationConfig::Keyed { controller, method } => {
                let pairs = controller
                    .iter()
                    .map(|controller| ("controller", controller.as_str()))
                    .chain(method.iter().map(|method| ("method", method.as_str())));
                Destination::Descriptor(Descriptor::keyed(pairs))
            }
        }
    }
}
