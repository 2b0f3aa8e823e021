//! The route table.
//!
//! A three-level mapping: method → segment count → pattern → entry. The
//! segment count partitions patterns so resolution only ever scans patterns
//! with as many segments as the URL.
//!
//! Within a bucket patterns keep insertion order. Re-inserting an existing
//! pattern replaces its entry in place, so it keeps its original position.

use routeway_core::{Destination, Method, Middleware, MiddlewareList};
use std::collections::{BTreeMap, HashMap};

/// Number of segments in a pattern or URL: the count of `/` characters.
///
/// `/` has one segment, `/user/(n)` has two.
pub fn segment_count(path: &str) -> usize {
    path.matches('/').count()
}

/// A stored route: the raw destination plus the middleware attached when it
/// was registered.
#[derive(Debug, Clone)]
pub struct RouteEntry {
    destination: Destination,
    middleware: MiddlewareList,
}

impl RouteEntry {
    /// Build an entry.
    pub fn new(destination: Destination, middleware: MiddlewareList) -> Self {
        Self {
            destination,
            middleware,
        }
    }

    /// The raw destination.
    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    /// Middleware attached to this route, outermost first.
    pub fn middleware(&self) -> &MiddlewareList {
        &self.middleware
    }

    /// Append middleware to this route.
    pub fn extend_middleware(&mut self, items: MiddlewareList) {
        self.middleware.extend(items);
    }
}

// Middleware is compared by name.
impl PartialEq for RouteEntry {
    fn eq(&self, other: &Self) -> bool {
        self.destination == other.destination
            && self.middleware.len() == other.middleware.len()
            && self
                .middleware
                .iter()
                .zip(&other.middleware)
                .all(|(a, b)| a.name() == b.name())
    }
}

/// All patterns sharing a method and a segment count, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Bucket {
    entries: Vec<(String, RouteEntry)>,
    index: HashMap<String, usize>,
}

impl Bucket {
    /// Insert or replace. Returns the previous entry for this pattern.
    fn insert(&mut self, pattern: String, entry: RouteEntry) -> Option<RouteEntry> {
        if let Some(&slot) = self.index.get(&pattern) {
            return Some(std::mem::replace(&mut self.entries[slot].1, entry));
        }
        self.index.insert(pattern.clone(), self.entries.len());
        self.entries.push((pattern, entry));
        None
    }

    /// Exact lookup.
    pub fn get(&self, pattern: &str) -> Option<&RouteEntry> {
        self.index.get(pattern).map(|&slot| &self.entries[slot].1)
    }

    /// Exact lookup returning the stored pattern alongside its entry.
    pub fn get_key_value(&self, pattern: &str) -> Option<(&str, &RouteEntry)> {
        self.index.get(pattern).map(|&slot| {
            let (pattern, entry) = &self.entries[slot];
            (pattern.as_str(), entry)
        })
    }

    fn get_mut(&mut self, pattern: &str) -> Option<&mut RouteEntry> {
        let slot = *self.index.get(pattern)?;
        Some(&mut self.entries[slot].1)
    }

    /// Iterate `(pattern, entry)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RouteEntry)> {
        self.entries
            .iter()
            .map(|(pattern, entry)| (pattern.as_str(), entry))
    }

    /// Patterns in insertion order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(pattern, _)| pattern.as_str())
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One row of a table walk.
#[derive(Debug, Clone, Copy)]
pub struct RouteRef<'a> {
    /// The route's method.
    pub method: &'a Method,
    /// The pattern's segment count.
    pub segments: usize,
    /// The stored pattern.
    pub pattern: &'a str,
    /// The stored entry.
    pub entry: &'a RouteEntry,
}

/// The full route table.
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    methods: BTreeMap<Method, BTreeMap<usize, Bucket>>,
    len: usize,
}

impl RouteTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route, replacing any entry with the same method and pattern.
    ///
    /// The pattern must already carry its prefixes; its segment count is
    /// computed here.
    pub fn insert(&mut self, method: Method, pattern: &str, entry: RouteEntry) -> Option<RouteEntry> {
        let previous = self
            .methods
            .entry(method)
            .or_default()
            .entry(segment_count(pattern))
            .or_default()
            .insert(pattern.to_string(), entry);

        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Exact lookup by method, segment count and pattern.
    pub fn lookup(&self, method: &Method, segments: usize, pattern: &str) -> Option<&RouteEntry> {
        self.bucket(method, segments)?.get(pattern)
    }

    /// Exact lookup, computing the segment count from the pattern.
    pub fn get(&self, method: &Method, pattern: &str) -> Option<&RouteEntry> {
        self.lookup(method, segment_count(pattern), pattern)
    }

    /// Mutable exact lookup, computing the segment count from the pattern.
    pub fn get_mut(&mut self, method: &Method, pattern: &str) -> Option<&mut RouteEntry> {
        self.methods
            .get_mut(method)?
            .get_mut(&segment_count(pattern))?
            .get_mut(pattern)
    }

    /// All patterns for a method with the given segment count.
    pub fn bucket(&self, method: &Method, segments: usize) -> Option<&Bucket> {
        self.methods.get(method)?.get(&segments)
    }

    /// Methods that have at least one route.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.keys()
    }

    /// Walk every route: methods in order, then segment counts ascending,
    /// then patterns in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = RouteRef<'_>> {
        self.methods.iter().flat_map(|(method, buckets)| {
            buckets.iter().flat_map(move |(&segments, bucket)| {
                bucket.iter().map(move |(pattern, entry)| RouteRef {
                    method,
                    segments,
                    pattern,
                    entry,
                })
            })
        })
    }

    /// Total number of routes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop every route.
    pub fn clear(&mut self) {
        self.methods.clear();
        self.len = 0;
    }
}
