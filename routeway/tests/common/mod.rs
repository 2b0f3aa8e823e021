#![allow(dead_code)]

use routeway::{Method, ObjectDestination, ResolvedRoute, RouteError, Router};

// ============================================================================
// Table inspection
// ============================================================================

/// `(method, segments, pattern, action)` for every action route, in table
/// walk order.
pub fn rows(router: &Router) -> Vec<(String, usize, String, String)> {
    router
        .routes()
        .iter()
        .filter_map(|row| {
            let action = row.entry.destination().as_action()?;
            Some((
                row.method.to_string(),
                row.segments,
                row.pattern.to_string(),
                action.to_string(),
            ))
        })
        .collect()
}

/// Shorthand for building expected rows.
pub fn row(method: &str, segments: usize, pattern: &str, action: &str) -> (String, usize, String, String) {
    (
        method.to_string(),
        segments,
        pattern.to_string(),
        action.to_string(),
    )
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve and expect a route, not an inline response.
pub fn route(router: &Router, method: &str, url: &str) -> ResolvedRoute {
    router
        .resolve(method, url)
        .unwrap_or_else(|e| panic!("{method} {url} should resolve: {e}"))
        .into_route()
        .unwrap_or_else(|| panic!("{method} {url} should not render inline"))
}

/// Resolve and expect a failure.
pub fn failure(router: &Router, method: &str, url: &str) -> RouteError {
    match router.resolve(Method::from(method), url) {
        Ok(resolution) => panic!("{method} {url} should fail, got {resolution:?}"),
        Err(e) => e,
    }
}

pub fn middleware_names(route: &ResolvedRoute) -> Vec<String> {
    route
        .middleware()
        .iter()
        .map(|m| m.name().to_string())
        .collect()
}

// ============================================================================
// Test Destinations
// ============================================================================

/// An object destination with no string form.
#[derive(Debug)]
pub struct Silent;

impl ObjectDestination for Silent {
    fn type_name(&self) -> &str {
        "Silent"
    }

    fn render(&self) -> Option<String> {
        None
    }
}

/// A self-rendering status page.
#[derive(Debug)]
pub struct StatusPage {
    pub code: u16,
}

impl ObjectDestination for StatusPage {
    fn render(&self) -> Option<String> {
        Some(format!("status {}", self.code))
    }
}
