use crate::{core::store::ReceiptStore, domain::prelude::*};
use std::{fmt, sync::Arc};
use tracing::info;

/// Generates fresh receipt ids.
///
/// Injected into the application state so tests can substitute a
/// deterministic sequence for random UUIDs.
///
#[derive(Clone)]
pub struct IdGenerator(Arc<dyn Fn() -> String + Send + Sync>);

impl IdGenerator {
    pub fn new(generate: impl Fn() -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(generate))
    }

    /// Random hyphenated v4 UUIDs.
    pub fn uuid() -> Self {
        Self::new(|| uuid::Uuid::new_v4().to_string())
    }

    pub fn next_id(&self) -> String {
        (self.0)()
    }
}

impl fmt::Debug for IdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("IdGenerator")
    }
}

#[derive(Clone)]
pub struct AppState {
    /// Where the points of processed receipts are kept.
    pub store: Arc<dyn ReceiptStore>,

    /// Source of ids for newly processed receipts.
    pub ids: IdGenerator,
}

impl AppState {
    pub fn new(store: Arc<dyn ReceiptStore>, ids: IdGenerator) -> Self {
        Self { store, ids }
    }

    /// Scores a receipt and stores its points under a fresh id.
    ///
    /// Nothing is stored, and no id is drawn, when scoring fails.
    ///
    pub fn process(&self, receipt: &Receipt) -> Result<ScoreRecord, ScoringError> {
        let points = score(receipt)?;
        let id = self.ids.next_id();
        self.store.put(id.clone(), points);

        info!(%id, points, retailer = %receipt.retailer, "processed receipt");
        Ok(ScoreRecord { id, points })
    }

    /// Looks up the points of a processed receipt.
    ///
    pub fn points(&self, id: &str) -> Option<u64> {
        self.store.get(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::InMemoryStore;
    use std::sync::atomic::{AtomicU64, Ordering};

    fn counting_ids() -> IdGenerator {
        let next = AtomicU64::new(1);
        IdGenerator::new(move || format!("receipt-{}", next.fetch_add(1, Ordering::SeqCst)))
    }

    fn costco(total: &str) -> Receipt {
        Receipt {
            retailer: "Costco".to_string(),
            purchase_date: "2019-11-13".to_string(),
            purchase_time: "14:01".to_string(),
            items: vec![Item {
                short_description: "   Ribeye Steak   ".to_string(),
                price: "25.00".to_string(),
            }],
            total: total.to_string(),
        }
    }

    #[test]
    fn process_stores_points_under_generated_id() {
        let state = AppState::new(Arc::new(InMemoryStore::new()), counting_ids());

        let record = state.process(&costco("25.00")).unwrap();

        assert_eq!(
            record,
            ScoreRecord {
                id: "receipt-1".to_string(),
                points: 102,
            }
        );
        assert_eq!(state.points("receipt-1"), Some(102));
        assert_eq!(state.points("receipt-1"), Some(102));
    }

    #[test]
    fn failed_scoring_stores_nothing() {
        let store = Arc::new(InMemoryStore::new());
        let state = AppState::new(store.clone(), counting_ids());

        assert!(state.process(&costco("25.0F")).is_err());
        assert!(store.is_empty());

        // the failed call must not have consumed an id
        let record = state.process(&costco("25.00")).unwrap();
        assert_eq!(record.id, "receipt-1");
    }

    #[test]
    fn uuid_generator_yields_distinct_ids() {
        let ids = IdGenerator::uuid();
        let first = ids.next_id();
        assert_ne!(first, ids.next_id());
        assert!(uuid::Uuid::parse_str(&first).is_ok());
    }
}
