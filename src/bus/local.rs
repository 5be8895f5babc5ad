//! In-process message bus.

use std::sync::Arc;

use async_trait::async_trait;

use super::config::{BusConfig, ListenerFailurePolicy};
use super::error::BusError;
use super::message_bus::MessageBus;
use crate::handler::{CommandHandler, CommandOutput, HandlerRegistry, QueryHandler};
use crate::listener::{Listener, ListenerRegistry};
use crate::logger::{Logger, LoggerFactory, TracingLoggerFactory};
use crate::message::{Command, Event, MessageName, Query, Response};

const LOGGER_NAME: &str = "LocalMessageBus";

/// Message bus dispatching within the current process.
///
/// Owns a command registry, a query registry and a listener registry; no
/// state is shared between instances. Registration methods take `&self`
/// and return `&Self`, so a bus behind an `Arc` can be configured fluently.
///
/// Listeners of one event are awaited one after the other, and an event is
/// fully delivered before the next one starts.
///
/// ## Example
///
/// ```ignore
/// let bus = LocalMessageBus::default();
/// bus.register_command_handler("CommandA", CommandAHandler)
///     .on("EventA", Listener::new(|event: Event| async move {
///         println!("got {}", event.name());
///         Ok::<_, HandlerError>(())
///     }));
///
/// let (response, events) = bus.execute(Command::named("CommandA")).await?;
/// ```
pub struct LocalMessageBus {
    logger: Arc<dyn Logger>,
    config: BusConfig,
    command_handlers: HandlerRegistry<dyn CommandHandler>,
    query_handlers: HandlerRegistry<dyn QueryHandler>,
    listeners: ListenerRegistry,
}

impl LocalMessageBus {
    /// Create a bus with the default configuration.
    pub fn new(logger_factory: &dyn LoggerFactory) -> Self {
        Self::with_config(logger_factory, BusConfig::default())
    }

    pub fn with_config(logger_factory: &dyn LoggerFactory, config: BusConfig) -> Self {
        Self {
            logger: logger_factory.create(&[LOGGER_NAME]),
            config,
            command_handlers: HandlerRegistry::new(),
            query_handlers: HandlerRegistry::new(),
            listeners: ListenerRegistry::new(),
        }
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    /// Bind `handler` to the command `name`, replacing any previous binding.
    pub fn register_command_handler(
        &self,
        name: impl Into<MessageName>,
        handler: impl CommandHandler + 'static,
    ) -> &Self {
        self.command_handlers.insert(name.into(), Arc::new(handler));
        self
    }

    /// Bind `handler` to the query `name`, replacing any previous binding.
    pub fn register_query_handler(
        &self,
        name: impl Into<MessageName>,
        handler: impl QueryHandler + 'static,
    ) -> &Self {
        self.query_handlers.insert(name.into(), Arc::new(handler));
        self
    }

    /// Invoke `listener` on every future publish under `name`.
    pub fn on(&self, name: impl Into<MessageName>, listener: Listener) -> &Self {
        self.listeners.add(name.into(), listener);
        self
    }

    /// Invoke `listener` on the next publish under `name` only.
    pub fn once(&self, name: impl Into<MessageName>, listener: Listener) -> &Self {
        self.listeners.add_once(name.into(), listener);
        self
    }

    /// Remove listeners.
    ///
    /// - `off(Some(name), Some(&listener))`: that listener under that name
    /// - `off(Some(name), None)`: every listener under that name
    /// - `off(None, Some(&listener))`: that listener under every name
    /// - `off(None, None)`: every listener
    pub fn off(&self, name: Option<&str>, listener: Option<&Listener>) -> &Self {
        match (name, listener) {
            (Some(name), Some(listener)) => self.listeners.remove(name, listener),
            (Some(name), None) => self.listeners.remove_all(name),
            (None, Some(listener)) => self.listeners.remove_everywhere(listener),
            (None, None) => self.listeners.clear(),
        }
        self
    }

    /// Publish a single event.
    pub async fn publish_event(&self, event: Event) -> Result<(), BusError> {
        self.notify(&event).await
    }

    pub fn has_command_handler(&self, name: &str) -> bool {
        self.command_handlers.contains(name)
    }

    pub fn has_query_handler(&self, name: &str) -> bool {
        self.query_handlers.contains(name)
    }

    /// Registered command names, sorted.
    pub fn command_names(&self) -> Vec<MessageName> {
        self.command_handlers.names()
    }

    /// Registered query names, sorted.
    pub fn query_names(&self) -> Vec<MessageName> {
        self.query_handlers.names()
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.count(name)
    }

    async fn notify(&self, event: &Event) -> Result<(), BusError> {
        self.logger.debug(format_args!(
            "publish message ({}) {}",
            event.name(),
            event.payload()
        ));

        let name = event.name().as_str();
        for entry in self.listeners.snapshot(name) {
            if entry.once && !self.listeners.claim_once(name, &entry.listener) {
                continue;
            }
            let Err(source) = entry.listener.handle(event.clone()).await else {
                continue;
            };
            match self.config.listener_failure {
                ListenerFailurePolicy::Propagate => {
                    return Err(BusError::Listener {
                        event: event.name().clone(),
                        source,
                    });
                }
                ListenerFailurePolicy::Isolate => {
                    self.logger.warn(format_args!(
                        "listener for ({}) failed: {}",
                        event.name(),
                        source
                    ));
                }
            }
        }
        Ok(())
    }
}

impl Default for LocalMessageBus {
    fn default() -> Self {
        Self::new(&TracingLoggerFactory::default())
    }
}

#[async_trait]
impl MessageBus for LocalMessageBus {
    async fn execute(&self, command: Command) -> Result<CommandOutput, BusError> {
        self.logger.debug(format_args!(
            "execute command ({}) {}",
            command.name(),
            command.payload()
        ));

        let name = command.name().clone();
        let handler = self
            .command_handlers
            .get(name.as_str())
            .ok_or_else(|| BusError::CommandHandlerNotFound(name.clone()))?;

        let (response, events) = handler
            .handle(command)
            .await
            .map_err(|source| BusError::Handler { name, source })?;

        for event in &events {
            self.notify(event).await?;
        }
        Ok((response, events))
    }

    async fn call(&self, query: Query) -> Result<Response, BusError> {
        self.logger.debug(format_args!(
            "execute query ({}) {}",
            query.name(),
            query.payload()
        ));

        let name = query.name().clone();
        let handler = self
            .query_handlers
            .get(name.as_str())
            .ok_or_else(|| BusError::QueryHandlerNotFound(name.clone()))?;

        handler
            .handle(query)
            .await
            .map_err(|source| BusError::Handler { name, source })
    }

    async fn publish(&self, events: Vec<Event>) -> Result<(), BusError> {
        for event in &events {
            self.notify(event).await?;
        }
        Ok(())
    }

    async fn dispose(&self) {
        self.logger.debug(format_args!("dispose"));
        self.listeners.clear();
        self.command_handlers.clear();
        self.query_handlers.clear();
    }
}
