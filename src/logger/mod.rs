//! Logging capability consumed by the bus.
//!
//! The bus only needs leveled logging through a named [`Logger`], built
//! once at construction by a [`LoggerFactory`]. The bundled
//! [`TracingLoggerFactory`] forwards everything to `tracing`; install any
//! subscriber (e.g. `tracing_subscriber::fmt`) to see the output.

use std::fmt;
use std::sync::Arc;

/// Named, leveled logger.
///
/// Messages arrive as `format_args!` output, so an implementation that
/// drops a level never pays for formatting it.
pub trait Logger: Send + Sync {
    fn debug(&self, args: fmt::Arguments<'_>);

    fn warn(&self, args: fmt::Arguments<'_>);
}

/// Builds named loggers.
pub trait LoggerFactory {
    /// Create a logger whose name is built from the given segments.
    fn create(&self, names: &[&str]) -> Arc<dyn Logger>;
}

/// Logger forwarding to `tracing` with its name as the `logger` field.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Logger for TracingLogger {
    fn debug(&self, args: fmt::Arguments<'_>) {
        tracing::debug!(logger = %self.name, "{}", args);
    }

    fn warn(&self, args: fmt::Arguments<'_>) {
        tracing::warn!(logger = %self.name, "{}", args);
    }
}

/// Factory for [`TracingLogger`]s.
///
/// Logger names are the container name followed by the requested
/// segments, joined with `/`: a factory for container `orders` creates
/// `orders/LocalMessageBus` for the bus.
#[derive(Debug, Clone)]
pub struct TracingLoggerFactory {
    container: String,
}

impl TracingLoggerFactory {
    pub fn new(container: impl Into<String>) -> Self {
        Self {
            container: container.into(),
        }
    }

    pub(crate) fn logger_name(&self, names: &[&str]) -> String {
        std::iter::once(self.container.as_str())
            .chain(names.iter().copied())
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl Default for TracingLoggerFactory {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

impl LoggerFactory for TracingLoggerFactory {
    fn create(&self, names: &[&str]) -> Arc<dyn Logger> {
        Arc::new(TracingLogger::new(self.logger_name(names)))
    }
}
