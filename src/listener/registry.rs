use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::Listener;
use crate::message::MessageName;

/// One registration, as handed out by [`ListenerRegistry::snapshot`].
#[derive(Clone)]
pub(crate) struct Entry {
    pub(crate) listener: Listener,
    pub(crate) once: bool,
}

/// Name-keyed listener lists owned by one bus.
///
/// Listeners of a name are kept in registration order, which is also
/// their invocation order. Every mutation is a single map operation, so a
/// poisoned lock still guards a consistent map and is recovered rather
/// than propagated.
#[derive(Default)]
pub(crate) struct ListenerRegistry {
    listeners: RwLock<HashMap<MessageName, Vec<Entry>>>,
}

impl ListenerRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<MessageName, Vec<Entry>>> {
        self.listeners.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<MessageName, Vec<Entry>>> {
        self.listeners.write().unwrap_or_else(|e| e.into_inner())
    }

    /// Register a listener for every future publish under `name`.
    pub(crate) fn add(&self, name: MessageName, listener: Listener) {
        self.push(name, listener, false);
    }

    /// Register a listener for the next publish under `name` only.
    pub(crate) fn add_once(&self, name: MessageName, listener: Listener) {
        self.push(name, listener, true);
    }

    fn push(&self, name: MessageName, listener: Listener, once: bool) {
        self.write()
            .entry(name)
            .or_default()
            .push(Entry { listener, once });
    }

    /// Registrations to walk for one publish under `name`.
    ///
    /// Nothing is removed here: listeners registered after this call are
    /// not part of the list, and one-shot entries stay registered until
    /// [`claim_once`](Self::claim_once) takes them right before they run.
    pub(crate) fn snapshot(&self, name: &str) -> Vec<Entry> {
        self.read().get(name).cloned().unwrap_or_default()
    }

    /// Remove one one-shot registration of `listener` under `name`.
    ///
    /// Returns `false` when it is already gone (taken by a concurrent
    /// publish or removed with `off`), in which case it must not run.
    pub(crate) fn claim_once(&self, name: &str, listener: &Listener) -> bool {
        let mut listeners = self.write();
        let Some(entries) = listeners.get_mut(name) else {
            return false;
        };
        let Some(index) = entries
            .iter()
            .position(|e| e.once && e.listener == *listener)
        else {
            return false;
        };

        entries.remove(index);
        if entries.is_empty() {
            listeners.remove(name);
        }
        true
    }

    /// Remove every registration of `listener` under `name`.
    pub(crate) fn remove(&self, name: &str, listener: &Listener) {
        let mut listeners = self.write();
        if let Some(entries) = listeners.get_mut(name) {
            entries.retain(|e| e.listener != *listener);
            if entries.is_empty() {
                listeners.remove(name);
            }
        }
    }

    /// Remove every registration of `listener`, whatever the name.
    pub(crate) fn remove_everywhere(&self, listener: &Listener) {
        self.write().retain(|_, entries| {
            entries.retain(|e| e.listener != *listener);
            !entries.is_empty()
        });
    }

    /// Remove all listeners registered under `name`.
    pub(crate) fn remove_all(&self, name: &str) {
        self.write().remove(name);
    }

    pub(crate) fn clear(&self) {
        self.write().clear();
    }

    /// Number of listeners currently registered under `name`.
    pub(crate) fn count(&self, name: &str) -> usize {
        self.read().get(name).map_or(0, Vec::len)
    }
}
