use std::{
    collections::HashMap,
    sync::{PoisonError, RwLock},
};

/// Storage for the points of processed receipts.
///
/// Implementations own their concurrency discipline; handlers share a store
/// across tasks through the application state.
///
pub trait ReceiptStore: Send + Sync {
    /// Stores the points for a receipt id, replacing any previous value.
    fn put(&self, id: String, points: u64);

    /// Returns the points stored for a receipt id, if any.
    fn get(&self, id: &str) -> Option<u64>;
}

/// In-memory receipt store guarded by a read-write lock.
///
#[derive(Debug, Default)]
pub struct InMemoryStore {
    receipts: RwLock<HashMap<String, u64>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ReceiptStore for InMemoryStore {
    fn put(&self, id: String, points: u64) {
        self.receipts
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, points);
    }

    fn get(&self, id: &str) -> Option<u64> {
        self.receipts
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(id)
            .copied()
    }
}
