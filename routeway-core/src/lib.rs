//! # routeway-core
//!
//! Core types and collaborator traits for the Routeway route registration engine.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! hosts and extensions (dispatchers, request adapters, middleware) that don't
//! need the full `routeway-std` implementation.
//!
//! # Vocabulary
//!
//! ## Registration side
//!
//! - [`Method`] / [`MethodSet`]: HTTP verbs and the allow-list checked by `map`.
//! - [`Destination`]: what a pattern points at before normalisation. Either an
//!   action string (`"Controller.method"` or `"Controller@method"`), a
//!   [`Handler`], a [`Descriptor`] (keyed or positional array form) or an
//!   [`ObjectDestination`].
//!
//! ## Resolution side
//!
//! - [`Resolution`]: the outcome of resolving a request, either a
//!   [`ResolvedRoute`] for the dispatcher or inline rendered text.
//! - [`ResolvedRoute`]: `(controller, action, params, middleware)`.
//!
//! ## Collaborators
//!
//! The engine never reads sockets or instantiates controllers. It talks to
//! the host through narrow traits:
//!
//! - [`RequestSource`]: supplies the current URL and method.
//! - [`Invoker`]: calls [`Handler`] destinations with positional parameters.
//! - [`Middleware`]: opaque items carried on a resolved route, never executed.
//!
//! # Error Types
//!
//! - [`RouteError`] - every registration, resolution and reverse-routing failure
//! - [`BoxError`] - failures reported by collaborators

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod destination;
mod error;
mod handler;
mod method;
mod middleware;
mod request;
mod resolved;

// Re-exports
pub use destination::{Descriptor, Destination, Inline, ObjectDestination};
pub use error::{BoxError, RouteError};
pub use handler::{DirectInvoker, Handler, HandlerOutput, Invoker};
pub use method::{Method, MethodSet};
pub use middleware::{Middleware, MiddlewareList};
pub use request::RequestSource;
pub use resolved::{Resolution, ResolvedRoute};
