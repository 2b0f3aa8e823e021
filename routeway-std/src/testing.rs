//! Testing utilities for Routeway.
//!
//! # Features
//!
//! - [`StaticRequest`]: a [`RequestSource`] whose URL and method can be changed
//!   between resolutions
//! - [`RecordingInvoker`]: an [`Invoker`] that records every handler call and
//!   can be told to fail

use routeway_core::{BoxError, Handler, HandlerOutput, Invoker, RequestSource};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ============================================================================
// Static Request
// ============================================================================

/// A request source with a fixed, settable URL and method.
///
/// Clones share state, so a test can keep one handle and give the other to a
/// router.
///
/// # Example
///
/// ```rust,ignore
/// let request = StaticRequest::new("GET", "/");
/// router.set_source(request.clone());
///
/// request.set("PUT", "/user/4");
/// let route = router.current_route()?;
/// ```
#[derive(Debug, Clone)]
pub struct StaticRequest {
    inner: Arc<Mutex<(String, String)>>,
}

impl StaticRequest {
    /// A source reporting `method` and `url`.
    pub fn new(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Mutex::new((method.into(), url.into()))),
        }
    }

    /// Change both method and URL.
    pub fn set(&self, method: impl Into<String>, url: impl Into<String>) {
        *lock(&self.inner) = (method.into(), url.into());
    }

    /// Change the URL only.
    pub fn set_url(&self, url: impl Into<String>) {
        lock(&self.inner).1 = url.into();
    }
}

impl Default for StaticRequest {
    fn default() -> Self {
        Self::new("GET", "/")
    }
}

impl RequestSource for StaticRequest {
    fn current_url(&self) -> String {
        lock(&self.inner).1.clone()
    }

    fn current_method(&self) -> String {
        lock(&self.inner).0.clone()
    }
}

// ============================================================================
// Recording Invoker
// ============================================================================

/// An invoker that records the parameters of every call.
///
/// # Example
///
/// ```rust,ignore
/// let invoker = RecordingInvoker::new();
/// router.set_invoker(invoker.clone());
///
/// router.resolve("GET", "/user/4")?;
/// assert_eq!(invoker.calls(), vec![vec!["4".to_string()]]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordingInvoker {
    calls: Arc<Mutex<Vec<Vec<String>>>>,
    failure: Arc<Mutex<Option<String>>>,
}

impl RecordingInvoker {
    /// Create an invoker that calls handlers directly.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every following call fail with `message` without running the
    /// handler.
    pub fn set_error(&self, message: impl Into<String>) {
        *lock(&self.failure) = Some(message.into());
    }

    /// Clear error state.
    pub fn clear_error(&self) {
        *lock(&self.failure) = None;
    }

    /// Parameters of every call, in call order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        lock(&self.calls).clone()
    }

    /// Number of calls.
    pub fn call_count(&self) -> usize {
        lock(&self.calls).len()
    }
}

impl Invoker for RecordingInvoker {
    fn invoke(&self, handler: &Handler, params: &[String]) -> Result<HandlerOutput, BoxError> {
        lock(&self.calls).push(params.to_vec());
        if let Some(message) = lock(&self.failure).clone() {
            return Err(message.into());
        }
        Ok(handler.call(params))
    }
}
