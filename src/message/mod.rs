//! Messages exchanged over the bus.
//!
//! Every message is a [`Message`] envelope (name + JSON payload). The kind
//! decides how the bus routes it:
//!
//! - [`Command`] and [`Query`]: point-to-point, one handler per name
//! - [`Event`]: fan-out, zero or more listeners per name
//! - [`Response`]: what handlers hand back to the caller

mod message;
mod name;

pub use message::{Command, Event, Message, MessageType, Query, Response};
pub use name::MessageName;
