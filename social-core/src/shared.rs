//! Thread-safe handle to a single [`GraphStore`].
//!
//! Mutations take the write lock and reads the read lock, so a reader never
//! sees a half-applied change (a removed user whose friendships are still
//! present, or the reverse).

use std::sync::{Arc, PoisonError, RwLock};

use crate::command::{Command, Outcome};
use crate::error::Result;
use crate::store::GraphStore;

/// Cloneable, shareable owner of one network.
#[derive(Debug, Clone, Default)]
pub struct SharedGraphStore {
    inner: Arc<RwLock<GraphStore>>,
}

impl SharedGraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing store.
    pub fn from_store(store: GraphStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(store)),
        }
    }

    /// Run `f` with shared read access.
    pub fn read<T>(&self, f: impl FnOnce(&GraphStore) -> T) -> T {
        // Store operations validate before mutating, so a poisoned lock still
        // guards a consistent graph.
        let guard = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        f(&guard)
    }

    /// Run `f` with exclusive write access.
    pub fn write<T>(&self, f: impl FnOnce(&mut GraphStore) -> T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    /// Execute a command under the lock it needs.
    pub fn execute(&self, command: &Command) -> Result<Outcome> {
        if command.is_mutation() {
            self.write(|store| command.execute(store))
        } else {
            self.read(|store| command.query(store))
        }
    }

    /// Copy out the current state.
    pub fn snapshot(&self) -> GraphStore {
        self.read(GraphStore::clone)
    }
}
