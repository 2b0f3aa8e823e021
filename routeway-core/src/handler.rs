//! Callable destinations and the invocation seam.
//!
//! A [`Handler`] is a closure registered as a destination. The engine never
//! calls it directly: it goes through an [`Invoker`], which is where a host
//! plugs in its dependency-injection container. [`DirectInvoker`] is the
//! plain implementation that just calls the closure.

use crate::{
    destination::{Descriptor, ObjectDestination},
    error::BoxError,
};
use std::{fmt, sync::Arc};

type HandlerFn = dyn Fn(&[String]) -> HandlerOutput + Send + Sync;

/// A callable destination.
///
/// Receives the extracted path parameters positionally, left to right.
#[derive(Clone)]
pub struct Handler {
    inner: Arc<HandlerFn>,
}

impl Handler {
    /// Wrap a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&[String]) -> HandlerOutput + Send + Sync + 'static,
    {
        Self { inner: Arc::new(f) }
    }

    /// Call the closure with positional parameters.
    pub fn call(&self, params: &[String]) -> HandlerOutput {
        (self.inner)(params)
    }

    /// Check whether two handlers wrap the same closure.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler").finish_non_exhaustive()
    }
}

/// What a [`Handler`] hands back to the resolver.
#[derive(Debug, Clone)]
pub enum HandlerOutput {
    /// An action string, normalised like an action destination.
    Action(String),
    /// An array descriptor, normalised like a descriptor destination.
    Descriptor(Descriptor),
    /// An object; renders inline or fails like an object destination.
    Object(Arc<dyn ObjectDestination>),
    /// No usable value.
    Nothing,
}

impl From<&str> for HandlerOutput {
    fn from(action: &str) -> Self {
        HandlerOutput::Action(action.to_string())
    }
}

impl From<String> for HandlerOutput {
    fn from(action: String) -> Self {
        HandlerOutput::Action(action)
    }
}

impl From<Descriptor> for HandlerOutput {
    fn from(descriptor: Descriptor) -> Self {
        HandlerOutput::Descriptor(descriptor)
    }
}

impl From<()> for HandlerOutput {
    fn from(_: ()) -> Self {
        HandlerOutput::Nothing
    }
}

/// The invocation collaborator.
///
/// Implementations decide how a handler is called: a DI container may resolve
/// extra arguments, wrap the call in a scope, or refuse it.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot invoke route handlers",
    label = "missing `Invoker` implementation",
    note = "Implement `Invoker::invoke` or use `DirectInvoker`."
)]
pub trait Invoker: Send + Sync {
    /// Invoke `handler` with the extracted positional parameters.
    fn invoke(&self, handler: &Handler, params: &[String]) -> Result<HandlerOutput, BoxError>;
}

/// Calls handlers directly with the extracted parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectInvoker;

impl Invoker for DirectInvoker {
    fn invoke(&self, handler: &Handler, params: &[String]) -> Result<HandlerOutput, BoxError> {
        Ok(handler.call(params))
    }
}

impl<T: Invoker + ?Sized> Invoker for Arc<T> {
    fn invoke(&self, handler: &Handler, params: &[String]) -> Result<HandlerOutput, BoxError> {
        (**self).invoke(handler, params)
    }
}
