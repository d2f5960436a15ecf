//! Operation composition
//!
//! Every (resource kind, verb) pair is declared as an [`Operation`]: an input
//! transform from the dynamic payload to a typed request, a remote call, and
//! an output transform from the typed response back to a dynamic object.
//! [`Operation::bind`] freezes the three parts and a client configuration
//! into a uniform [`Callable`]; the request and response types are erased at
//! that point, so mismatched wiring between a transform and its remote call
//! is a compile error rather than a runtime fault.

use std::future::Future;

use anyhow::Result;
use futures::future::{BoxFuture, FutureExt};

use crate::aws::http::ClientConfig;
use crate::value::Obj;

/// A bound, ready-to-invoke operation: dynamic payload in, dynamic result
/// out. The only artifact the dispatch tables hold.
pub type Callable = Box<dyn Fn(Obj) -> BoxFuture<'static, Result<Obj>> + Send + Sync>;

/// One operation before binding. Immutable; assembled in a single struct
/// literal.
pub(crate) struct Operation<D, C, E> {
    /// Payload to typed request. Lossy on missing required fields: yields the
    /// empty request, which the remote end then rejects.
    pub decode: D,
    /// The remote call. Constructs its own client from the configuration on
    /// every invocation.
    pub call: C,
    /// Typed response to dynamic object. Skipped when the remote call fails;
    /// the remote error propagates unchanged.
    pub encode: E,
}

impl<D, C, E> Operation<D, C, E> {
    /// Freeze this operation into a [`Callable`] bound to `config`.
    pub(crate) fn bind<Req, Resp, Fut>(self, config: &ClientConfig) -> Callable
    where
        D: Fn(&Obj) -> Req + Send + Sync + 'static,
        C: Fn(ClientConfig, Req) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<Resp>> + Send + 'static,
        E: Fn(Resp) -> Obj + Clone + Send + Sync + 'static,
        Req: Send + 'static,
        Resp: Send + 'static,
    {
        let config = config.clone();
        Box::new(move |payload: Obj| {
            let request = (self.decode)(&payload);
            let response = (self.call)(config.clone(), request);
            let encode = self.encode.clone();
            async move { Ok(encode(response.await?)) }.boxed()
        })
    }
}
