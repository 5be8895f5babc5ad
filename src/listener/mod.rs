//! Event listeners and the per-bus listener registry.

mod registry;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::handler::HandlerError;
use crate::message::Event;

pub(crate) use registry::ListenerRegistry;

/// Callback invoked for every published event of the name it is registered under.
#[async_trait]
pub trait EventListener: Send + Sync {
    async fn handle(&self, event: Event) -> Result<(), HandlerError>;
}

#[async_trait]
impl<F, Fut> EventListener for F
where
    F: Fn(Event) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), HandlerError>> + Send + 'static,
{
    async fn handle(&self, event: Event) -> Result<(), HandlerError> {
        (self)(event).await
    }
}

/// Shared handle to a registered listener.
///
/// Closures have no identity of their own, so the handle is what `off`
/// compares against: two `Listener`s are equal only if they are clones of
/// the same handle.
///
/// ```ignore
/// let audit = Listener::new(|event: Event| async move {
///     println!("{}", event.name());
///     Ok::<_, HandlerError>(())
/// });
///
/// bus.on("OrderCreated", audit.clone());
/// bus.off(Some("OrderCreated"), Some(&audit));
/// ```
#[derive(Clone)]
pub struct Listener(Arc<dyn EventListener>);

impl Listener {
    pub fn new(listener: impl EventListener + 'static) -> Self {
        Self(Arc::new(listener))
    }

    pub fn from_arc(listener: Arc<dyn EventListener>) -> Self {
        Self(listener)
    }

    pub async fn handle(&self, event: Event) -> Result<(), HandlerError> {
        self.0.handle(event).await
    }
}

impl PartialEq for Listener {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Listener {}

impl fmt::Debug for Listener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Listener")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}
