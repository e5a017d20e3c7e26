//! Method + path routing.
//!
//! One radix tree per HTTP method, O(path-length) lookup via [`matchit`].
//! Handlers are type-erased into boxed-future closures once at startup; the
//! per-request cost is one `Arc` clone and one virtual call.

use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use http::Method;
use hyper::body::Incoming;

use crate::response::Body;

/// The request type handlers receive. No wrapper: hyper's request is the
/// request, and this application reads nothing from it.
pub type Request = http::Request<Incoming>;

/// The response type handlers return.
pub type Response = http::Response<Body>;

type BoxFuture = Pin<Box<dyn Future<Output = Response> + Send + 'static>>;

type BoxedHandler = Arc<dyn Fn(Request) -> BoxFuture + Send + Sync + 'static>;

/// The application router.
///
/// Build it once at startup and hand it to [`Server::serve`](crate::Server::serve).
/// Each registration returns `self` so routes chain naturally:
///
/// ```rust,no_run
/// use cicd101::{Router, routes};
///
/// let app = Router::new()
///     .get("/", routes::index)
///     .get("/healthz", routes::liveness)
///     .get("/readyz", routes::readiness);
/// ```
pub struct Router {
    routes: HashMap<Method, matchit::Router<BoxedHandler>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Registers a handler for `GET` on `path`. Returns `self` for chaining.
    ///
    /// # Panics
    ///
    /// Panics if `path` is not a valid route pattern or is registered twice.
    /// Routes are wired once at startup; a bad pattern is a programming
    /// error, not a runtime condition.
    pub fn get<H, Fut>(self, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        self.route(Method::GET, path, handler)
    }

    fn route<H, Fut>(mut self, method: Method, path: &str, handler: H) -> Self
    where
        H: Fn(Request) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        let handler: BoxedHandler = Arc::new(move |req| Box::pin(handler(req)) as BoxFuture);
        self.routes
            .entry(method)
            .or_default()
            .insert(path, handler)
            .unwrap_or_else(|e| panic!("invalid route `{path}`: {e}"));
        self
    }

    /// Finds the handler for a method + path pair. `None` is the 404 path.
    pub(crate) fn lookup(&self, method: &Method, path: &str) -> Option<BoxedHandler> {
        let tree = self.routes.get(method)?;
        let matched = tree.at(path).ok()?;
        Some(Arc::clone(matched.value))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response;

    fn sample() -> Router {
        Router::new().get("/", |_req| async { response::text("ok") })
    }

    #[test]
    fn lookup_matches_registered_path() {
        assert!(sample().lookup(&Method::GET, "/").is_some());
    }

    #[test]
    fn lookup_misses_unknown_path() {
        assert!(sample().lookup(&Method::GET, "/missing").is_none());
    }

    #[test]
    fn lookup_misses_unregistered_method() {
        assert!(sample().lookup(&Method::POST, "/").is_none());
    }

    #[test]
    #[should_panic(expected = "invalid route")]
    fn duplicate_registration_panics() {
        sample().get("/", |_req| async { response::text("again") });
    }
}
