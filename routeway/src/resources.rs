//! Resource route generators.
//!
//! Each generator registers a fixed set of routes for one controller under a
//! prefix, using nothing but [`Router::prefix`] and [`Router::map`].

use crate::Router;
use routeway_core::RouteError;
use routeway_std::patterns::NUMBER_PLACEHOLDER;

/// `(method, pattern, controller method)`. A pattern of `/` collapses onto
/// the prefix; `#` stands for `/(n)`.
type Blueprint = [(&'static str, &'static str, &'static str)];

const CRUD: &Blueprint = &[
    ("GET", "/", "index"),
    ("POST", "/", "store"),
    ("GET", "/create", "create"),
    ("PUT", "#", "update"),
    ("PATCH", "#", "updateFew"),
    ("GET", "#", "show"),
    ("GET", "#/edit", "edit"),
    ("DELETE", "#", "destroy"),
];

const REST: &Blueprint = &[
    ("GET", "/", "list"),
    ("GET", "#", "one"),
    ("POST", "/", "save"),
    ("PUT", "#", "replace"),
    ("PATCH", "#", "replaceFew"),
    ("DELETE", "#", "remove"),
];

const AUTH: &[(&str, &str, &str, &str)] = &[
    ("GET", "/login", "login", "login"),
    ("POST", "/login", "loginPost", "post.login"),
    ("GET", "/register", "register", "register"),
    ("POST", "/register", "registerPost", "post.register"),
    ("POST", "/logout", "logout", "logout"),
];

impl Router {
    /// Register the eight CRUD routes for `controller` under `prefix`.
    ///
    /// | Method | Pattern | Action |
    /// |--------|---------|--------|
    /// | GET | `/` | `index` |
    /// | POST | `/` | `store` |
    /// | GET | `/create` | `create` |
    /// | PUT | `/(n)` | `update` |
    /// | PATCH | `/(n)` | `updateFew` |
    /// | GET | `/(n)` | `show` |
    /// | GET | `/(n)/edit` | `edit` |
    /// | DELETE | `/(n)` | `destroy` |
    pub fn crud(&mut self, prefix: &str, controller: &str) -> Result<&mut Self, RouteError> {
        self.blueprint(prefix, controller, CRUD)
    }

    /// Register the six REST routes for `controller` under `prefix`.
    ///
    /// | Method | Pattern | Action |
    /// |--------|---------|--------|
    /// | GET | `/` | `list` |
    /// | GET | `/(n)` | `one` |
    /// | POST | `/` | `save` |
    /// | PUT | `/(n)` | `replace` |
    /// | PATCH | `/(n)` | `replaceFew` |
    /// | DELETE | `/(n)` | `remove` |
    pub fn rest(&mut self, prefix: &str, controller: &str) -> Result<&mut Self, RouteError> {
        self.blueprint(prefix, controller, REST)
    }

    /// Register the five named authentication routes for `controller` under
    /// `prefix`.
    ///
    /// `namespace`, when not empty, is prepended to the controller with the
    /// router's namespace separator. Routes are named `login`, `post.login`,
    /// `register`, `post.register` and `logout`.
    pub fn auth(
        &mut self,
        prefix: &str,
        controller: &str,
        namespace: &str,
    ) -> Result<&mut Self, RouteError> {
        let separator = self.engine().namespace_separator().to_string();
        let namespace = namespace.trim_end_matches(separator.as_str());
        let controller = if namespace.is_empty() {
            controller.to_string()
        } else {
            format!("{namespace}{separator}{controller}")
        };

        self.prefix(prefix, |r| {
            for (method, pattern, action, alias) in AUTH {
                r.map(*method, pattern, format!("{controller}.{action}"))?
                    .name(alias);
            }
            Ok(())
        })
    }

    fn blueprint(
        &mut self,
        prefix: &str,
        controller: &str,
        routes: &Blueprint,
    ) -> Result<&mut Self, RouteError> {
        let argument = format!("/{NUMBER_PLACEHOLDER}");
        self.prefix(prefix, |r| {
            for (method, pattern, action) in routes {
                let pattern = pattern.replace('#', &argument);
                r.map(*method, &pattern, format!("{controller}.{action}"))?;
            }
            Ok(())
        })
    }
}
