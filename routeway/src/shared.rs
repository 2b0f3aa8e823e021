//! A router shared between threads.

use crate::Router;
use routeway_core::{Method, Resolution, RouteError};
use routeway_std::table::RouteTable;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable handle to a [`Router`] behind a read-write lock.
///
/// Registration takes the write lock; resolution and reverse routing take the
/// read lock, so any number of threads can resolve concurrently once
/// registration is done. A poisoned lock is recovered rather than propagated:
/// scopes are released on unwind, so the router is consistent even after a
/// registration callback panicked.
#[derive(Debug, Clone, Default)]
pub struct SharedRouter {
    inner: Arc<RwLock<Router>>,
}

impl SharedRouter {
    /// Share `router`.
    pub fn new(router: Router) -> Self {
        Self {
            inner: Arc::new(RwLock::new(router)),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Router> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Router> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run registration code with exclusive access.
    pub fn register<F, T>(&self, f: F) -> Result<T, RouteError>
    where
        F: FnOnce(&mut Router) -> Result<T, RouteError>,
    {
        f(&mut self.write())
    }

    /// Resolve a method and URL.
    pub fn resolve(&self, method: impl Into<Method>, url: &str) -> Result<Resolution, RouteError> {
        self.read().resolve(method, url)
    }

    /// Resolve the current request, memoised like [`Router::current_route`].
    pub fn current_route(&self) -> Result<Resolution, RouteError> {
        self.write().current_route().cloned()
    }

    /// Build a URL from an alias.
    pub fn url<S: AsRef<str>>(&self, alias: &str, params: &[S]) -> Result<String, RouteError> {
        self.read().url(alias, params)
    }

    /// A copy of the route table.
    pub fn routes_snapshot(&self) -> RouteTable {
        self.read().routes().clone()
    }
}

impl From<Router> for SharedRouter {
    fn from(router: Router) -> Self {
        Self::new(router)
    }
}
