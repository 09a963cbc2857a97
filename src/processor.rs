// ⚙️ Receipt Processor - Validate, score, store
// The one entry point shared by the HTTP server and the CLI

use crate::receipt::ScoredReceipt;
use crate::scoring::score_breakdown;
use crate::store::{InMemoryReceiptStore, ReceiptStore, StoreResult};
use crate::validation::{validate, ValidationError};
use serde_json::Value;
use std::sync::Arc;

#[derive(Clone)]
pub struct ReceiptProcessor {
    store: Arc<dyn ReceiptStore>,
}

impl ReceiptProcessor {
    pub fn new(store: Arc<dyn ReceiptStore>) -> Self {
        ReceiptProcessor { store }
    }

    /// Processor backed by a fresh in-memory store
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryReceiptStore::new()))
    }

    /// Validate and score `raw`, then store it.
    ///
    /// Nothing is stored when validation fails.
    pub fn process(&self, raw: &Value) -> Result<ScoredReceipt, ValidationError> {
        let receipt = match validate(raw) {
            Ok(receipt) => receipt,
            Err(reason) => {
                tracing::warn!(%reason, "receipt rejected");
                return Err(reason);
            }
        };

        let breakdown = score_breakdown(&receipt);
        for contribution in breakdown.awarded() {
            tracing::debug!(
                rule = contribution.rule.name(),
                points = contribution.points,
                detail = %contribution.detail,
                "rule awarded points"
            );
        }

        let scored = self.store.put(receipt, breakdown.points);
        tracing::info!(
            id = %scored.id,
            retailer = %scored.receipt.retailer,
            points = scored.points,
            stored = self.store.len(),
            "receipt processed"
        );

        Ok(scored)
    }

    /// Points recorded for `id` when it was processed
    pub fn points(&self, id: &str) -> StoreResult<u64> {
        self.store.get(id).map(|scored| scored.points)
    }

    pub fn get(&self, id: &str) -> StoreResult<ScoredReceipt> {
        self.store.get(id)
    }
}

impl Default for ReceiptProcessor {
    fn default() -> Self {
        Self::in_memory()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::receipt::Receipt;
    use crate::scoring::score;
    use crate::store::StoreError;
    use serde_json::json;
    use std::sync::Mutex;

    fn create_test_receipt() -> Value {
        json!({
            "retailer": "Target",
            "purchaseDate": "2022-01-01",
            "purchaseTime": "13:01",
            "items": [
                { "shortDescription": "Mountain Dew 12PK", "price": "6.49" }
            ],
            "total": "6.49"
        })
    }

    /// Store that records every put, to check what the processor hands over
    #[derive(Default)]
    struct RecordingStore {
        inner: InMemoryReceiptStore,
        puts: Mutex<Vec<(Receipt, u64)>>,
    }

    impl ReceiptStore for RecordingStore {
        fn put(&self, receipt: Receipt, points: u64) -> ScoredReceipt {
            self.puts.lock().unwrap().push((receipt.clone(), points));
            self.inner.put(receipt, points)
        }

        fn get(&self, id: &str) -> StoreResult<ScoredReceipt> {
            self.inner.get(id)
        }

        fn len(&self) -> usize {
            self.inner.len()
        }
    }

    #[test]
    fn test_process_then_points() {
        let processor = ReceiptProcessor::in_memory();
        let scored = processor.process(&create_test_receipt()).unwrap();

        assert_eq!(scored.points, 12);
        assert_eq!(processor.points(&scored.id), Ok(12));
    }

    #[test]
    fn test_points_match_scorer() {
        let processor = ReceiptProcessor::in_memory();
        let scored = processor.process(&create_test_receipt()).unwrap();
        let stored = processor.get(&scored.id).unwrap();

        assert_eq!(stored.points, score(&stored.receipt));
    }

    #[test]
    fn test_invalid_receipt_not_stored() {
        let store = Arc::new(RecordingStore::default());
        let processor = ReceiptProcessor::new(store.clone());

        let mut raw = create_test_receipt();
        raw["total"] = json!("10.5");

        assert_eq!(processor.process(&raw).unwrap_err(), ValidationError::Total);
        assert!(store.puts.lock().unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_store_receives_validated_receipt() {
        let store = Arc::new(RecordingStore::default());
        let processor = ReceiptProcessor::new(store.clone());

        processor.process(&create_test_receipt()).unwrap();

        let puts = store.puts.lock().unwrap();
        assert_eq!(puts.len(), 1);
        assert_eq!(puts[0].0.retailer, "Target");
        assert_eq!(puts[0].1, 12);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_unknown_id() {
        let processor = ReceiptProcessor::in_memory();
        assert_eq!(
            processor.points("missing"),
            Err(StoreError::NotFound("missing".to_string()))
        );
    }
}
