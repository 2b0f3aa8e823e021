//! HTTP methods and the registration allow-list.

use std::fmt;

/// An HTTP method.
///
/// Parsing is case-insensitive. Verbs without a dedicated variant are kept as
/// upper-cased [`Method::Extension`] values, so hosts can register routes for
/// custom verbs (e.g. `CLI`) once they are on the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `PATCH`
    Patch,
    /// `DELETE`
    Delete,
    /// `HEAD`
    Head,
    /// `OPTIONS`
    Options,
    /// Any other verb, stored upper-cased.
    ///
    /// Prefer [`Method::parse`] over building this variant by hand; it keeps
    /// the standard verbs on their dedicated variants.
    Extension(String),
}

impl Method {
    /// Parse a method name, ignoring case.
    pub fn parse(name: &str) -> Self {
        let upper = name.trim().to_ascii_uppercase();
        match upper.as_str() {
            "GET" => Method::Get,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "PATCH" => Method::Patch,
            "DELETE" => Method::Delete,
            "HEAD" => Method::Head,
            "OPTIONS" => Method::Options,
            _ => Method::Extension(upper),
        }
    }

    /// The canonical upper-case name.
    pub fn as_str(&self) -> &str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
            Method::Delete => "DELETE",
            Method::Head => "HEAD",
            Method::Options => "OPTIONS",
            Method::Extension(name) => name,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Method {
    fn from(name: &str) -> Self {
        Method::parse(name)
    }
}

impl From<String> for Method {
    fn from(name: String) -> Self {
        Method::parse(&name)
    }
}

impl From<&Method> for Method {
    fn from(method: &Method) -> Self {
        method.clone()
    }
}

/// The set of methods `map` accepts.
///
/// Defaults to `GET, POST, PUT, PATCH, DELETE`. The set is replaced wholesale
/// with [`MethodSet::replace`] or grown one verb at a time with
/// [`MethodSet::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSet {
    methods: Vec<Method>,
}

impl MethodSet {
    /// An empty allow-list. Every registration fails until verbs are added.
    pub fn empty() -> Self {
        Self {
            methods: Vec::new(),
        }
    }

    /// Replace the whole allow-list.
    pub fn replace<I, M>(&mut self, methods: I)
    where
        I: IntoIterator<Item = M>,
        M: Into<Method>,
    {
        self.methods.clear();
        for method in methods {
            self.insert(method);
        }
    }

    /// Add one verb. Returns false if it was already allowed.
    pub fn insert(&mut self, method: impl Into<Method>) -> bool {
        let method = method.into();
        if self.methods.contains(&method) {
            return false;
        }
        self.methods.push(method);
        true
    }

    /// Check whether a method is allowed.
    pub fn contains(&self, method: &Method) -> bool {
        self.methods.contains(method)
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Method> {
        self.methods.iter()
    }

    /// Number of allowed verbs.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if nothing is allowed.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<M: Into<Method>> FromIterator<M> for MethodSet {
    fn from_iter<I: IntoIterator<Item = M>>(methods: I) -> Self {
        let mut set = Self::empty();
        set.replace(methods);
        set
    }
}

impl Default for MethodSet {
    fn default() -> Self {
        Self {
            methods: vec![
                Method::Get,
                Method::Post,
                Method::Put,
                Method::Patch,
                Method::Delete,
            ],
        }
    }
}
