//! Destination normalisation.
//!
//! Turns a stored [`Destination`] plus the extracted parameters into a
//! [`Resolution`]. Handlers run through the [`Invoker`]; whatever they return
//! is normalised again as if it had been registered directly.

use crate::logging;
use routeway_core::{
    Descriptor, Destination, Handler, HandlerOutput, Invoker, MiddlewareList, ObjectDestination,
    Resolution, ResolvedRoute, RouteError,
};

/// Characters accepted between the controller, the method and any trailing
/// literal parameters of an action string.
const ACTION_SEPARATORS: [char; 3] = ['@', '.', '/'];

/// Normalises destinations for one resolution.
#[derive(Clone, Copy)]
pub struct Normalizer<'a> {
    invoker: &'a dyn Invoker,
    default_action: &'a str,
    namespace_separator: &'a str,
}

impl<'a> Normalizer<'a> {
    /// Build a normaliser.
    pub fn new(
        invoker: &'a dyn Invoker,
        default_action: &'a str,
        namespace_separator: &'a str,
    ) -> Self {
        Self {
            invoker,
            default_action,
            namespace_separator,
        }
    }

    /// Normalise `destination` with the extracted `params`.
    pub fn normalize(
        &self,
        destination: &Destination,
        params: Vec<String>,
        middleware: MiddlewareList,
    ) -> Result<Resolution, RouteError> {
        match destination {
            Destination::Action(action) => Ok(self.action(action, params, middleware)),
            Destination::Descriptor(descriptor) => self.descriptor(descriptor, params, middleware),
            Destination::Object(object) => render(object.as_ref()),
            Destination::Handler(handler) => self.handler(handler, params, middleware),
        }
    }

    fn handler(
        &self,
        handler: &Handler,
        params: Vec<String>,
        middleware: MiddlewareList,
    ) -> Result<Resolution, RouteError> {
        match self.invoker.invoke(handler, &params)? {
            HandlerOutput::Action(action) => Ok(self.action(&action, params, middleware)),
            HandlerOutput::Descriptor(descriptor) => {
                self.descriptor(&descriptor, params, middleware)
            }
            HandlerOutput::Object(object) => render(object.as_ref()),
            HandlerOutput::Nothing => Err(RouteError::InvalidCallableResult),
        }
    }

    fn descriptor(
        &self,
        descriptor: &Descriptor,
        params: Vec<String>,
        middleware: MiddlewareList,
    ) -> Result<Resolution, RouteError> {
        let action = descriptor.to_action(self.default_action)?;
        Ok(self.action(&action, params, middleware))
    }

    fn action(&self, action: &str, mut params: Vec<String>, middleware: MiddlewareList) -> Resolution {
        let mut pieces = action.split(ACTION_SEPARATORS);
        let controller = pieces.next().unwrap_or_default();
        let method = pieces
            .next()
            .filter(|method| !method.is_empty())
            .unwrap_or(self.default_action);
        params.extend(pieces.map(str::to_string));

        Resolution::Route(ResolvedRoute::new(
            controller,
            method,
            params,
            middleware,
            self.namespace_separator,
        ))
    }
}

fn render(object: &dyn ObjectDestination) -> Result<Resolution, RouteError> {
    match object.render() {
        Some(text) => {
            logging::rendered_inline(object.type_name(), text.len());
            Ok(Resolution::Rendered(text))
        }
        None => Err(RouteError::InvalidDestination(object.type_name().to_string())),
    }
}
