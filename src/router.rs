//! Radix-tree request router with a fallback.
//!
//! One tree per HTTP method. O(path-length) lookup. Anything the trees do not
//! match goes to the fallback handler, which is where the vanity responder
//! lives: every unclaimed path is a candidate module path.

use std::collections::HashMap;
use std::sync::Arc;

use matchit::Router as MatchitRouter;

use crate::handler::{BoxedHandler, Handler};
use crate::method::Method;

/// The application router.
///
/// Build it once at startup; pass it to [`Server::serve`](crate::Server::serve).
/// Each builder call returns `self` so registrations chain naturally.
pub struct Router {
    routes: HashMap<Method, MatchitRouter<BoxedHandler>>,
    fallback: Option<BoxedHandler>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new(), fallback: None }
    }

    /// Register a handler for a method + path pair. Returns `self` for chaining.
    ///
    /// ```rust,no_run
    /// # use govanity::{health, Method, Router};
    /// Router::new()
    ///     .on(Method::Get, "/healthz", health::liveness)
    ///     .on(Method::Get, "/readyz",  health::readiness);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route or conflicts with one already
    /// registered for `method`.
    pub fn on(mut self, method: Method, path: &str, handler: impl Handler) -> Self {
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler.into_boxed_handler())
            .unwrap_or_else(|e| panic!("invalid route `{method} {path}`: {e}"));
        self
    }

    /// Handler for every request no route matches, whatever its method.
    pub fn fallback(mut self, handler: impl Handler) -> Self {
        self.fallback = Some(handler.into_boxed_handler());
        self
    }

    /// Resolves a request to a handler. `method` is `None` for methods outside
    /// [`Method`], which only the fallback can serve.
    pub(crate) fn lookup(&self, method: Option<Method>, path: &str) -> Option<BoxedHandler> {
        method
            .and_then(|m| self.routes.get(&m))
            .and_then(|tree| tree.at(path).ok())
            .map(|matched| Arc::clone(matched.value))
            .or_else(|| self.fallback.clone())
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}
