use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::message::MessageName;

/// Name → handler map with last-write-wins registration.
///
/// Lookups clone the `Arc` out and release the lock before the handler
/// runs, so handlers are free to register or dispose while executing.
pub(crate) struct HandlerRegistry<H: ?Sized> {
    handlers: RwLock<HashMap<MessageName, Arc<H>>>,
}

impl<H: ?Sized> HandlerRegistry<H> {
    pub(crate) fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<MessageName, Arc<H>>> {
        self.handlers.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<MessageName, Arc<H>>> {
        self.handlers.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Bind `handler` to `name`, returning the handler it replaced.
    pub(crate) fn insert(&self, name: MessageName, handler: Arc<H>) -> Option<Arc<H>> {
        self.write().insert(name, handler)
    }

    pub(crate) fn get(&self, name: &str) -> Option<Arc<H>> {
        self.read().get(name).cloned()
    }

    pub(crate) fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    pub(crate) fn names(&self) -> Vec<MessageName> {
        let mut names: Vec<_> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub(crate) fn clear(&self) {
        self.write().clear();
    }
}

impl<H: ?Sized> Default for HandlerRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}
