//! Message bus - routes commands and queries, fans out events.
//!
//! ## Routing
//!
//! ```text
//!   execute(Command) ──► command registry ──► CommandHandler
//!                                                  │
//!                                  (Response, [Event, ...])
//!                                                  │
//!                          ┌───────────────────────┘
//!                          ▼
//!   publish(Event) ──► listener registry ──► Listener, Listener, ...
//!
//!   call(Query) ─────► query registry ─────► QueryHandler ──► Response
//! ```
//!
//! Commands and queries have exactly one handler per name (last
//! registration wins). Events have any number of listeners per name,
//! invoked in registration order.

mod config;
mod error;
mod local;
mod message_bus;

pub use config::{BusConfig, ListenerFailurePolicy};
pub use error::BusError;
pub use local::LocalMessageBus;
pub use message_bus::MessageBus;
