use std::future::Future;
use std::sync::Arc;

use futures::FutureExt;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::ServiceError;
use crate::message::EventMessage;

/// What a callback resolves to: the service's return value, or an error the
/// dispatcher will wrap.
pub type CallbackResult = Result<Value, ServiceError>;

type CallbackFuture = BoxFuture<'static, CallbackResult>;

type Callback = Arc<dyn Fn(EventMessage, bool) -> CallbackFuture + Send + Sync>;

/// Caller-owned service exposing zero or more named async callbacks.
///
/// Cloning is cheap; all clones share the same registry. The registry is
/// immutable once built, so dispatches never contend on it.
#[derive(Clone)]
pub struct ServiceHandle {
    methods: Arc<Vec<(String, Callback)>>,
}

impl ServiceHandle {
    pub fn builder() -> ServiceBuilder {
        ServiceBuilder { methods: Vec::new() }
    }

    /// Declared callback names, in declaration order.
    pub fn method_names(&self) -> Vec<String> {
        self.methods.iter().map(|(name, _)| name.clone()).collect()
    }

    pub fn declares(&self, method: &str) -> bool {
        self.methods.iter().any(|(name, _)| name == method)
    }

    pub(crate) fn callback(&self, method: &str) -> Option<Callback> {
        self.methods
            .iter()
            .find(|(name, _)| name == method)
            .map(|(_, cb)| Arc::clone(cb))
    }
}

impl std::fmt::Debug for ServiceHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceHandle")
            .field("methods", &self.method_names())
            .finish()
    }
}

/// Collects callbacks before freezing them into a [`ServiceHandle`].
pub struct ServiceBuilder {
    methods: Vec<(String, Callback)>,
}

impl ServiceBuilder {
    /// Declare a callback under `name`. Declaring a name twice replaces the
    /// earlier callback but keeps its position in declaration order.
    pub fn on<F, Fut>(mut self, name: impl Into<String>, callback: F) -> Self
    where
        F: Fn(EventMessage, bool) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = CallbackResult> + Send + 'static,
    {
        let name = name.into();
        let callback: Callback = Arc::new(move |message, fire| callback(message, fire).boxed());

        match self.methods.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = callback,
            None => self.methods.push((name, callback)),
        }
        self
    }

    pub fn build(self) -> ServiceHandle {
        ServiceHandle { methods: Arc::new(self.methods) }
    }
}
