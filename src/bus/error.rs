//! Errors surfaced by bus operations.

use thiserror::Error;

use crate::handler::HandlerError;
use crate::message::MessageName;

#[derive(Debug, Error)]
pub enum BusError {
    /// No command handler bound to this name.
    #[error("unable to find a command handler for ({0})")]
    CommandHandlerNotFound(MessageName),
    /// No query handler bound to this name.
    #[error("unable to find a query handler for ({0})")]
    QueryHandlerNotFound(MessageName),
    /// A command or query handler failed. Nothing was published.
    #[error("handler for ({name}) failed: {source}")]
    Handler {
        name: MessageName,
        #[source]
        source: HandlerError,
    },
    /// A listener failed while an event was being published.
    #[error("listener for ({event}) failed: {source}")]
    Listener {
        event: MessageName,
        #[source]
        source: HandlerError,
    },
}

impl BusError {
    pub fn is_handler_not_found(&self) -> bool {
        matches!(
            self,
            BusError::CommandHandlerNotFound(_) | BusError::QueryHandlerNotFound(_)
        )
    }

    /// Name of the message the error is about.
    pub fn message_name(&self) -> &MessageName {
        match self {
            BusError::CommandHandlerNotFound(name)
            | BusError::QueryHandlerNotFound(name)
            | BusError::Handler { name, .. }
            | BusError::Listener { event: name, .. } => name,
        }
    }
}
