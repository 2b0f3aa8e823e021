//! Middleware descriptors.
//!
//! The engine only carries middleware: it records which items were attached
//! to a route at registration time and hands them to the dispatcher in the
//! [`ResolvedRoute`](crate::ResolvedRoute). Running them is the host's job.

use std::{fmt, sync::Arc};

/// An opaque middleware item attached to a route.
pub trait Middleware: Send + Sync + fmt::Debug {
    /// Identifier used in logs and by dispatchers that look middleware up by name.
    fn name(&self) -> &str;
}

/// An ordered list of middleware, outermost first.
pub type MiddlewareList = Vec<Arc<dyn Middleware>>;

impl Middleware for &'static str {
    fn name(&self) -> &str {
        self
    }
}

impl Middleware for String {
    fn name(&self) -> &str {
        self
    }
}

impl<T: Middleware + ?Sized> Middleware for Arc<T> {
    fn name(&self) -> &str {
        (**self).name()
    }
}
