// 🗄️ Receipt Store - Process-local map from id to scored receipt
// Nothing is persisted: a restart forgets every receipt

use crate::receipt::{Receipt, ScoredReceipt};
use chrono::Utc;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("No receipt found for that id")]
    NotFound(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

// ============================================================================
// STORE INTERFACE
// ============================================================================

/// Storage for scored receipts.
///
/// Implementations must be safe to share between request handlers: two
/// concurrent `put`s never receive the same id and never lose an entry.
pub trait ReceiptStore: Send + Sync {
    /// Store `receipt` with its points under a fresh id
    fn put(&self, receipt: Receipt, points: u64) -> ScoredReceipt;

    fn get(&self, id: &str) -> StoreResult<ScoredReceipt>;

    /// Number of receipts stored so far
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// IN-MEMORY STORE
// ============================================================================

/// HashMap behind a single RwLock
#[derive(Debug, Clone, Default)]
pub struct InMemoryReceiptStore {
    receipts: Arc<RwLock<HashMap<String, ScoredReceipt>>>,
}

impl InMemoryReceiptStore {
    pub fn new() -> Self {
        Self::default()
    }

    // Entries are inserted whole, so a poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, ScoredReceipt>> {
        self.receipts.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, ScoredReceipt>> {
        self.receipts.write().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ReceiptStore for InMemoryReceiptStore {
    fn put(&self, receipt: Receipt, points: u64) -> ScoredReceipt {
        let mut receipts = self.write();

        // Id generation and insert happen under the same guard
        loop {
            let id = Uuid::new_v4().to_string();
            if let Entry::Vacant(slot) = receipts.entry(id.clone()) {
                let scored = ScoredReceipt {
                    id,
                    receipt,
                    points,
                    processed_at: Utc::now(),
                };
                slot.insert(scored.clone());
                return scored;
            }
        }
    }

    fn get(&self, id: &str) -> StoreResult<ScoredReceipt> {
        self.read()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn len(&self) -> usize {
        self.read().len()
    }
}

// ============================================================================
// TESTS
// ============================================================================
