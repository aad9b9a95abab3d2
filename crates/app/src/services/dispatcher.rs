//! Route dispatcher — exact-match `(method, path)` lookup and invoke.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use blinkhub_domain::error::{HubError, RouteError};
use blinkhub_domain::route::{Method, Request, Response, RouteKey};

/// Boxed future returned by [`Handler::call`].
pub type HandlerFuture<'a> = Pin<Box<dyn Future<Output = Result<Response, HubError>> + Send + 'a>>;

/// The unit of logic bound to a route.
pub trait Handler: Send + Sync {
    fn call(&self, request: Request) -> HandlerFuture<'_>;
}

impl<F, Fut> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = Result<Response, HubError>> + Send + 'static,
{
    fn call(&self, request: Request) -> HandlerFuture<'_> {
        Box::pin(self(request))
    }
}

/// Static route table.
///
/// Routes are registered during startup through `&mut self`; once the
/// dispatcher is shared (typically behind an `Arc`) the table is read-only.
/// Registration order has no effect on lookup.
#[derive(Default)]
pub struct RouteDispatcher {
    routes: HashMap<Method, HashMap<String, Arc<dyn Handler>>>,
}

impl RouteDispatcher {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `(method, path)`.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::Duplicate`] if the route is already bound.
    pub fn register(
        &mut self,
        method: Method,
        path: impl Into<String>,
        handler: impl Handler + 'static,
    ) -> Result<(), RouteError> {
        let path = path.into();
        match self.routes.entry(method).or_default().entry(path) {
            Entry::Occupied(entry) => Err(RouteError::Duplicate {
                method,
                path: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                tracing::debug!(%method, path = %entry.key(), "route registered");
                entry.insert(Arc::new(handler));
                Ok(())
            }
        }
    }

    /// Look up the handler for `request` and invoke it.
    ///
    /// The handler's result is returned untouched.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::NotFound`] (wrapped in [`HubError::Route`]) when
    /// no handler matches, otherwise whatever the handler returns.
    pub async fn dispatch(&self, request: Request) -> Result<Response, HubError> {
        let handler = self
            .routes
            .get(&request.method)
            .and_then(|paths| paths.get(request.path.as_str()))
            .ok_or_else(|| RouteError::NotFound {
                method: request.method.to_string(),
                path: request.path.clone(),
            })?;
        handler.call(request).await
    }

    /// All registered routes, in no particular order.
    pub fn routes(&self) -> impl Iterator<Item = RouteKey> + '_ {
        self.routes.iter().flat_map(|(method, paths)| {
            paths.keys().map(|path| RouteKey::new(*method, path.clone()))
        })
    }

    /// Number of registered routes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.routes.values().map(HashMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
