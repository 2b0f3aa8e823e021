//! Structured log events for registration and resolution.
//!
//! Every function compiles to nothing unless the `tracing` feature is enabled.

use crate::scope::ScopeDepth;
use routeway_core::Method;

pub(crate) fn route_registered(method: &Method, pattern: &str, segments: usize, kind: &str) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(%method, pattern, segments, destination = kind, "Registered route");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (method, pattern, segments, kind);
    }
}

pub(crate) fn alias_named(alias: &str, pattern: &str) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(alias, pattern, "Named route");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (alias, pattern);
    }
}

pub(crate) fn scope_entered(depth: ScopeDepth) {
    #[cfg(feature = "tracing")]
    {
        tracing::trace!(
            prefixes = depth.prefixes,
            namespaces = depth.namespaces,
            middleware = depth.middleware,
            "Entered scope"
        );
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = depth;
    }
}

pub(crate) fn scope_exited(depth: ScopeDepth) {
    #[cfg(feature = "tracing")]
    {
        tracing::trace!(
            prefixes = depth.prefixes,
            namespaces = depth.namespaces,
            middleware = depth.middleware,
            "Exited scope"
        );
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = depth;
    }
}

pub(crate) fn matched(method: &Method, url: &str, pattern: &str, exact: bool, params: usize) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(%method, url, pattern, exact, params, "Resolved route");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (method, url, pattern, exact, params);
    }
}

pub(crate) fn not_found(method: &Method, url: &str, reason: &'static str) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(%method, url, reason, "Route not found");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (method, url, reason);
    }
}

pub(crate) fn unknown_placeholder(pattern: &str, token: &str) {
    #[cfg(feature = "tracing")]
    {
        tracing::warn!(pattern, token, "Pattern references an unregistered placeholder");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (pattern, token);
    }
}

pub(crate) fn rendered_inline(type_name: &str, bytes: usize) {
    #[cfg(feature = "tracing")]
    {
        tracing::debug!(object = type_name, bytes, "Object destination rendered inline");
    }
    #[cfg(not(feature = "tracing"))]
    {
        let _ = (type_name, bytes);
    }
}
