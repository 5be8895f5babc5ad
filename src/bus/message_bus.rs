use async_trait::async_trait;

use super::error::BusError;
use crate::handler::CommandOutput;
use crate::message::{Command, Event, Query, Response};

/// Dispatch surface of a message bus.
///
/// Registration is implementation specific; callers that only dispatch can
/// hold an `Arc<dyn MessageBus>`.
#[async_trait]
pub trait MessageBus: Send + Sync {
    /// Run the command through its handler, then publish the events it
    /// produced, in order, before returning the handler's output.
    async fn execute(&self, command: Command) -> Result<CommandOutput, BusError>;

    /// Run the query through its handler and return its response.
    async fn call(&self, query: Query) -> Result<Response, BusError>;

    /// Deliver each event, in order, to the listeners of its name.
    async fn publish(&self, events: Vec<Event>) -> Result<(), BusError>;

    /// Drop every handler and listener.
    async fn dispose(&self);
}
