//! Ordered chains of asynchronous transforms applied to outgoing requests and
//! incoming responses.

use std::fmt;
use std::future::Future;

use futures::future::{self, BoxFuture, FutureExt};

use crate::error::{Error, Stage};
use crate::Result;

#[cfg(test)]
mod tests;

type Handler<T> = Box<dyn Fn(T) -> BoxFuture<'static, anyhow::Result<T>> + Send + Sync>;

/// Position of a handler inside its chain, handed out by
/// [`InterceptorChain::register`] and accepted by [`InterceptorChain::eject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InterceptorId(usize);

impl InterceptorId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A growable sequence of handlers, each receiving the output of the previous
/// one. Ejected handlers keep their slot as an identity transform so that ids
/// handed out earlier stay valid.
pub struct InterceptorChain<T> {
    stage: Stage,
    handlers: Vec<Handler<T>>,
}

impl<T> InterceptorChain<T>
where
    T: Send + 'static,
{
    pub fn new(stage: Stage) -> InterceptorChain<T> {
        InterceptorChain {
            stage,
            handlers: Vec::new(),
        }
    }

    /// Appends an asynchronous handler and returns its id.
    ///
    /// A handler returning `Err` aborts the chain; the handlers after it do
    /// not run.
    pub fn register<F, Fut>(&mut self, handler: F) -> InterceptorId
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<T>> + Send + 'static,
    {
        self.handlers.push(Box::new(move |value| handler(value).boxed()));
        InterceptorId(self.handlers.len() - 1)
    }

    pub fn register_sync<F>(&mut self, handler: F) -> InterceptorId
    where
        F: Fn(T) -> anyhow::Result<T> + Send + Sync + 'static,
    {
        self.register(move |value| future::ready(handler(value)))
    }

    /// Replaces the handler at `id` with the identity transform.
    ///
    /// Returns `false` without touching the chain when `id` does not belong to
    /// it.
    pub fn eject(&mut self, id: InterceptorId) -> bool {
        match self.handlers.get_mut(id.0) {
            Some(slot) => {
                *slot = identity();
                true
            }
            None => false,
        }
    }

    /// Number of slots, ejected ones included.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub async fn run(&self, mut value: T) -> Result<T> {
        for (index, handler) in self.handlers.iter().enumerate() {
            value = handler(value).await.map_err(|source| Error::Interceptor {
                stage: self.stage,
                index,
                source,
            })?;
        }
        Ok(value)
    }
}

fn identity<T>() -> Handler<T>
where
    T: Send + 'static,
{
    Box::new(|value: T| -> BoxFuture<'static, anyhow::Result<T>> {
        future::ready(Ok(value)).boxed()
    })
}

impl<T> fmt::Debug for InterceptorChain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InterceptorChain")
            .field("stage", &self.stage)
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

/// The pair of chains owned by a [`Client`](crate::Client).
#[derive(Debug)]
pub struct Interceptors {
    pub request: InterceptorChain<crate::RequestConfig>,
    pub response: InterceptorChain<crate::Response<serde_json::Value>>,
}

impl Default for Interceptors {
    fn default() -> Self {
        Interceptors {
            request: InterceptorChain::new(Stage::Request),
            response: InterceptorChain::new(Stage::Response),
        }
    }
}
