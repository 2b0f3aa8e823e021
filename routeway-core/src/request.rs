//! The current-request seam.

use std::sync::Arc;

/// Supplies the URL and method of the request being routed.
///
/// Hosts adapt their request object to this trait; the router only reads it
/// when asked for the current route.
pub trait RequestSource: Send + Sync {
    /// The raw request URL path, possibly with a query string.
    fn current_url(&self) -> String;

    /// The raw request method name, any case.
    fn current_method(&self) -> String;
}

impl<T: RequestSource + ?Sized> RequestSource for Arc<T> {
    fn current_url(&self) -> String {
        (**self).current_url()
    }

    fn current_method(&self) -> String {
        (**self).current_method()
    }
}
