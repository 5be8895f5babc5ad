//! In-process CQRS message bus.
//!
//! Commands and queries are routed by name to a single handler; events
//! produced by command handlers (or published directly) are fanned out to
//! every listener registered under their name.
//!
//! ```ignore
//! use local_bus::{Command, Event, HandlerError, Listener, LocalMessageBus, MessageBus, Response};
//!
//! let bus = LocalMessageBus::default();
//! bus.register_command_handler("CreateOrder", |cmd: Command| async move {
//!     let created = Event::new("OrderCreated", cmd.payload().clone());
//!     Ok::<_, HandlerError>((Response::named("OrderAccepted"), vec![created]))
//! })
//! .on("OrderCreated", Listener::new(|event: Event| async move {
//!     println!("order created: {}", event.payload());
//!     Ok::<_, HandlerError>(())
//! }));
//!
//! let (response, events) = bus.execute(Command::named("CreateOrder")).await?;
//! ```

pub mod bus;
pub mod handler;
pub mod listener;
pub mod logger;
pub mod message;

pub use bus::{BusConfig, BusError, ListenerFailurePolicy, LocalMessageBus, MessageBus};
pub use handler::{CommandHandler, CommandOutput, HandlerError, QueryHandler};
pub use listener::{EventListener, Listener};
pub use logger::{Logger, LoggerFactory, TracingLogger, TracingLoggerFactory};
pub use message::{Command, Event, Message, MessageName, MessageType, Query, Response};

// Handlers and listeners are written with `#[async_trait]`.
pub use async_trait::async_trait;
