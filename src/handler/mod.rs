//! Command and query handlers.
//!
//! A handler is registered under a message name on the bus and receives
//! every command (or query) carrying that name. Handlers may be structs
//! implementing the trait or plain async closures:
//!
//! ```ignore
//! struct QueryAHandler;
//!
//! #[async_trait]
//! impl QueryHandler for QueryAHandler {
//!     async fn handle(&self, _query: Query) -> Result<Response, HandlerError> {
//!         Ok(Response::named("ResultA"))
//!     }
//! }
//!
//! bus.register_query_handler("QueryA", QueryAHandler)
//!     .register_command_handler("CommandA", |cmd: Command| async move {
//!         Ok::<_, HandlerError>((Response::named("ResultA"), vec![Event::named("EventA")]))
//!     });
//! ```

mod error;
mod registry;

use std::future::Future;

use async_trait::async_trait;

use crate::message::{Command, Event, Query, Response};

pub use error::HandlerError;
pub(crate) use registry::HandlerRegistry;

/// What a command handler produces: the response plus the events to publish.
pub type CommandOutput = (Response, Vec<Event>);

/// Handles one command name. Exactly one handler is bound per name.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    async fn handle(&self, command: Command) -> Result<CommandOutput, HandlerError>;
}

/// Handles one query name. Exactly one handler is bound per name.
#[async_trait]
pub trait QueryHandler: Send + Sync {
    async fn handle(&self, query: Query) -> Result<Response, HandlerError>;
}

#[async_trait]
impl<F, Fut> CommandHandler for F
where
    F: Fn(Command) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<CommandOutput, HandlerError>> + Send + 'static,
{
    async fn handle(&self, command: Command) -> Result<CommandOutput, HandlerError> {
        (self)(command).await
    }
}

#[async_trait]
impl<F, Fut> QueryHandler for F
where
    F: Fn(Query) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Response, HandlerError>> + Send + 'static,
{
    async fn handle(&self, query: Query) -> Result<Response, HandlerError> {
        (self)(query).await
    }
}
