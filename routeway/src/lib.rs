//! # routeway - Route Registration and Resolution
//!
//! `routeway` maps `(method, URL)` pairs to destinations and back. Routes are
//! registered with flat, segment based patterns where a whole segment may be a
//! placeholder such as `(n)`; resolution first tries an exact lookup and then a
//! structural, first-match-wins scan, and hands the dispatcher a normalised
//! `(controller, action, params, middleware)` tuple.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use routeway::prelude::*;
//!
//! let mut router = Router::new();
//! router.get("/", "IndexController")?.name("home");
//! router.put("/user/(n)", "UserController.update")?;
//!
//! router.rules(Rules::new().prefix("admin").namespace("Admin"), |r| {
//!     r.crud("post", "PostController")?;
//!     Ok(())
//! })?;
//!
//! let route = router.resolve("PUT", "/user/42")?.into_route().unwrap();
//! assert_eq!(route.controller(), "UserController");
//! assert_eq!(route.params(), ["42"]);
//!
//! assert_eq!(router.url("home", &[] as &[&str])?, "/");
//! ```
//!
//! ## Collaborators
//!
//! The router never touches a socket. Tell it where the current request comes
//! from with [`Router::set_source`] and how handler destinations are called
//! with [`Router::set_invoker`].

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod resources;
mod router;
mod shared;

pub use router::Router;
pub use shared::SharedRouter;

pub use routeway_core::{
    // Errors
    BoxError,
    // Destinations
    Descriptor,
    Destination,
    // Collaborators
    DirectInvoker,
    Handler,
    HandlerOutput,
    Inline,
    Invoker,
    // Methods
    Method,
    MethodSet,
    Middleware,
    MiddlewareList,
    ObjectDestination,
    RequestSource,
    // Results
    Resolution,
    ResolvedRoute,
    RouteError,
};

pub use routeway_std::{
    alias::AliasTable,
    config::{ConfigError, DestinationConfig, RouteConfig, RouterConfig, ValidationError, load_config},
    patterns::{ANY_PLACEHOLDER, NUMBER_PLACEHOLDER, PatternError, STRING_PLACEHOLDER},
    scope::Rules,
    table::{RouteEntry, RouteRef, RouteTable},
};

/// Lower-level building blocks.
pub mod engine {
    pub use routeway_std::{
        engine::RouteEngine,
        normalize::Normalizer,
        patterns::PatternRegistry,
        resolver::{Matched, normalize_url},
        scope::{Pushed, ScopeDepth, ScopeStack},
        table::{Bucket, segment_count},
    };
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use routeway_std::testing::*;
}

/// Prelude module - common imports for Routeway.
///
/// # Usage
///
/// ```rust,ignore
/// use routeway::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Descriptor, Destination, HandlerOutput, Method, Resolution, ResolvedRoute, RouteError,
        Router, Rules, SharedRouter,
    };

    #[cfg(feature = "macros")]
    pub use crate::routes;
}

#[cfg(feature = "macros")]
pub use routeway_macros::routes;
