//! Route destinations.
//!
//! A [`Destination`] is the raw value a pattern maps to. It stays raw inside
//! the route table and is only normalised into a
//! [`ResolvedRoute`](crate::ResolvedRoute) when a request resolves to it.

use crate::{error::RouteError, handler::Handler};
use std::{fmt, sync::Arc};

/// The value a registered pattern points at.
#[derive(Debug, Clone)]
pub enum Destination {
    /// `"Controller.method"`, `"Controller@method"`, or just `"Controller"`.
    ///
    /// Pieces after the method are literal trailing parameters.
    Action(String),
    /// A callable invoked through the [`Invoker`](crate::Invoker).
    Handler(Handler),
    /// The keyed (`{controller, method}`) or positional (`[controller, method]`) form.
    Descriptor(Descriptor),
    /// An arbitrary object; resolves only if it can render itself.
    Object(Arc<dyn ObjectDestination>),
}

impl Destination {
    /// Build an action destination.
    pub fn action(action: impl Into<String>) -> Self {
        Destination::Action(action.into())
    }

    /// Build a handler destination from a closure.
    pub fn handler<F>(f: F) -> Self
    where
        F: Fn(&[String]) -> crate::HandlerOutput + Send + Sync + 'static,
    {
        Destination::Handler(Handler::new(f))
    }

    /// Build an object destination.
    pub fn object<O: ObjectDestination + 'static>(object: O) -> Self {
        Destination::Object(Arc::new(object))
    }

    /// Build an object destination that renders `value` through `Display`.
    pub fn inline<T>(value: T) -> Self
    where
        T: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        Destination::object(Inline(value))
    }

    /// Short label used in logs and snapshots.
    pub fn kind(&self) -> &'static str {
        match self {
            Destination::Action(_) => "action",
            Destination::Handler(_) => "handler",
            Destination::Descriptor(_) => "descriptor",
            Destination::Object(_) => "object",
        }
    }

    /// The action string, if this is an action destination.
    pub fn as_action(&self) -> Option<&str> {
        match self {
            Destination::Action(action) => Some(action),
            _ => None,
        }
    }
}

impl PartialEq for Destination {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Destination::Action(a), Destination::Action(b)) => a == b,
            (Destination::Descriptor(a), Destination::Descriptor(b)) => a == b,
            (Destination::Handler(a), Destination::Handler(b)) => a.ptr_eq(b),
            (Destination::Object(a), Destination::Object(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl From<&str> for Destination {
    fn from(action: &str) -> Self {
        Destination::Action(action.to_string())
    }
}

impl From<String> for Destination {
    fn from(action: String) -> Self {
        Destination::Action(action)
    }
}

impl From<Descriptor> for Destination {
    fn from(descriptor: Descriptor) -> Self {
        Destination::Descriptor(descriptor)
    }
}

impl From<Handler> for Destination {
    fn from(handler: Handler) -> Self {
        Destination::Handler(handler)
    }
}

impl<const N: usize> From<[&str; N]> for Destination {
    fn from(items: [&str; N]) -> Self {
        Destination::Descriptor(Descriptor::positional(items))
    }
}

/// The array form of a destination.
///
/// Empty strings count as missing, so `Descriptor::positional([""])` has no
/// controller and fails normalisation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Descriptor {
    controller: Option<String>,
    action: Option<String>,
}

impl Descriptor {
    /// Keyed form with a controller and no method.
    pub fn new(controller: impl Into<String>) -> Self {
        Self {
            controller: non_empty(controller.into()),
            action: None,
        }
    }

    /// Set the method name.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = non_empty(action.into());
        self
    }

    /// Positional form: first item is the controller, second the method.
    /// Further items are ignored.
    pub fn positional<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut items = items.into_iter().map(Into::into);
        Self {
            controller: items.next().and_then(non_empty),
            action: items.next().and_then(non_empty),
        }
    }

    /// Keyed form from `(key, value)` pairs. Only `controller` and `method`
    /// are read.
    pub fn keyed<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut descriptor = Self::default();
        for (key, value) in pairs {
            match key.as_ref() {
                "controller" => descriptor.controller = non_empty(value.into()),
                "method" => descriptor.action = non_empty(value.into()),
                _ => {}
            }
        }
        descriptor
    }

    /// The controller identifier, if present.
    pub fn controller(&self) -> Option<&str> {
        self.controller.as_deref()
    }

    /// The method name, if present.
    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    /// Synthesise the `"Controller@method"` action string.
    pub fn to_action(&self, default_action: &str) -> Result<String, RouteError> {
        let controller = self
            .controller
            .as_deref()
            .ok_or(RouteError::InvalidArrayRoute)?;
        let action = self.action.as_deref().unwrap_or(default_action);
        Ok(format!("{controller}@{action}"))
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// An object used directly as a destination.
///
/// Objects that can render themselves short-circuit resolution: the rendered
/// text becomes the whole response. Objects that cannot are rejected with
/// [`RouteError::InvalidDestination`].
pub trait ObjectDestination: Send + Sync + fmt::Debug {
    /// Name reported in [`RouteError::InvalidDestination`].
    fn type_name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Render the object, or `None` if it has no string form.
    fn render(&self) -> Option<String>;
}

/// Wraps any `Display` value as a self-rendering [`ObjectDestination`].
#[derive(Debug, Clone)]
pub struct Inline<T>(pub T);

impl<T> ObjectDestination for Inline<T>
where
    T: fmt::Display + fmt::Debug + Send + Sync,
{
    fn type_name(&self) -> &str {
        std::any::type_name::<T>()
    }

    fn render(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_keyed_and_positional_agree() {
        let keyed = Descriptor::keyed([("controller", "UserController"), ("method", "show")]);
        let positional = Descriptor::positional(["UserController", "show"]);

        assert_eq!(keyed, positional);
        assert_eq!(keyed.to_action("index").unwrap(), "UserController@show");
    }

    #[test]
    fn test_descriptor_defaults_action() {
        let descriptor = Descriptor::new("HomeController");
        assert_eq!(descriptor.to_action("index").unwrap(), "HomeController@index");
    }

    #[test]
    fn test_descriptor_without_controller_fails() {
        let empty = Descriptor::positional(Vec::<String>::new());
        assert!(matches!(
            empty.to_action("index"),
            Err(RouteError::InvalidArrayRoute)
        ));

        let blank = Descriptor::keyed([("controller", ""), ("method", "show")]);
        assert!(matches!(
            blank.to_action("index"),
            Err(RouteError::InvalidArrayRoute)
        ));
    }

    #[test]
    fn test_destination_equality() {
        assert_eq!(Destination::from("A.b"), Destination::action("A.b"));
        assert_ne!(Destination::from("A.b"), Destination::from(["A", "b"]));

        let handler = Destination::handler(|_| crate::HandlerOutput::Nothing);
        assert_eq!(handler.clone(), handler);
        assert_ne!(
            handler,
            Destination::handler(|_| crate::HandlerOutput::Nothing)
        );
    }

    #[test]
    fn test_inline_renders() {
        let inline = Inline(42);
        assert_eq!(inline.render().as_deref(), Some("42"));
        assert_eq!(ObjectDestination::type_name(&inline), "i32");
    }
}
