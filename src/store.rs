//! Port to the persistence collaborator.
//!
//! The core consumes these four signatures and nothing else; whether the
//! other side is extension storage, a sync service or a file is not its
//! concern. [`MemoryStore`] is the reference implementation used by tests.

use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::{Mutex, RwLock};

use promptstash_core_types::{CoreError, PromptEntry, PromptId};

pub type WatchCallback = Box<dyn Fn(&[PromptEntry]) + Send + Sync>;

#[async_trait]
pub trait PromptStore: Send + Sync {
    async fn get_all(&self) -> Result<Vec<PromptEntry>, CoreError>;
    async fn get(&self, id: &PromptId) -> Result<Option<PromptEntry>, CoreError>;
    /// Insert or replace by id.
    async fn set(&self, entry: PromptEntry) -> Result<(), CoreError>;
    /// Observe changes. Dropping the guard unsubscribes.
    fn watch(&self, callback: WatchCallback) -> WatchGuard;
}

/// Keeps a watch subscription alive; unsubscribes on drop so observers
/// never outlive the component that registered them.
pub struct WatchGuard {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl WatchGuard {
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }
}

impl Drop for WatchGuard {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[derive(Default)]
struct Watchers {
    next_id: u64,
    subscribers: Vec<(u64, WatchCallback)>,
}

/// In-memory store backing unit and integration tests.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<Vec<PromptEntry>>,
    watchers: Arc<Mutex<Watchers>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    fn notify(&self) {
        let snapshot = self.entries.read().clone();
        for (_, callback) in self.watchers.lock().subscribers.iter() {
            callback(&snapshot);
        }
    }
}

#[async_trait]
impl PromptStore for MemoryStore {
    async fn get_all(&self) -> Result<Vec<PromptEntry>, CoreError> {
        Ok(self.entries.read().clone())
    }

    async fn get(&self, id: &PromptId) -> Result<Option<PromptEntry>, CoreError> {
        Ok(self.entries.read().iter().find(|e| &e.id == id).cloned())
    }

    async fn set(&self, entry: PromptEntry) -> Result<(), CoreError> {
        {
            let mut entries = self.entries.write();
            match entries.iter_mut().find(|e| e.id == entry.id) {
                Some(existing) => *existing = entry,
                None => entries.push(entry),
            }
        }
        self.notify();
        Ok(())
    }

    fn watch(&self, callback: WatchCallback) -> WatchGuard {
        let id = {
            let mut watchers = self.watchers.lock();
            watchers.next_id += 1;
            let id = watchers.next_id;
            watchers.subscribers.push((id, callback));
            id
        };
        let watchers = Arc::clone(&self.watchers);
        WatchGuard::new(move || {
            watchers.lock().subscribers.retain(|(wid, _)| *wid != id);
        })
    }
}
