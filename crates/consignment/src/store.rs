use std::sync::RwLock;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::debug;

use crate::{Consignment, Error};

/// Append-only storage for consignment records.
#[async_trait]
pub trait ConsignmentStore: Send + Sync {
    /// Append a consignment and return the stored value.
    ///
    /// Fails with [`Error::InvalidRecord`] if the record has no vessel
    /// assigned. Nothing is stored in that case.
    async fn create(&self, consignment: Consignment) -> Result<Consignment, Error>;

    /// A snapshot of all stored consignments, in insertion order.
    async fn get_all(&self) -> Vec<Consignment>;
}

/// An in memory consignment store.
///
/// Records live for the process lifetime and do not persist to disk.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    consignments: RwLock<Vec<Record>>,
}

#[derive(Debug)]
struct Record {
    created_at: DateTime<Utc>,
    consignment: Consignment,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ConsignmentStore for InMemoryStore {
    async fn create(&self, consignment: Consignment) -> Result<Consignment, Error> {
        if consignment.vessel_id.is_empty() {
            return Err(Error::InvalidRecord);
        }

        let record = Record {
            created_at: Utc::now(),
            consignment: consignment.clone(),
        };

        let mut consignments = self
            .consignments
            .write()
            .map_err(|_| Error::StoreFailed("store lock poisoned".to_string()))?;
        debug!(id = %record.consignment.id, created_at = %record.created_at, "storing consignment");
        consignments.push(record);

        Ok(consignment)
    }

    async fn get_all(&self) -> Vec<Consignment> {
        // Writers only append, so a poisoned lock still guards a consistent list.
        let consignments = self
            .consignments
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        consignments
            .iter()
            .map(|record| record.consignment.clone())
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::Container;

    fn consignment(id: &str, vessel_id: &str) -> Consignment {
        Consignment {
            id: id.to_string(),
            description: "test freight".to_string(),
            weight: 100,
            containers: vec![Container::default()],
            vessel_id: vessel_id.to_string(),
        }
    }

    #[tokio::test]
    async fn create_rejects_missing_vessel_assignment() {
        let store = InMemoryStore::new();

        let err = store.create(consignment("c1", "")).await.unwrap_err();
        assert!(matches!(err, Error::InvalidRecord));
        assert!(store.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn create_returns_the_stored_value() {
        let store = InMemoryStore::new();

        let stored = store.create(consignment("c1", "v1")).await.unwrap();
        assert_eq!(stored, consignment("c1", "v1"));
    }

    #[tokio::test]
    async fn get_all_preserves_insertion_order() {
        let store = InMemoryStore::new();
        store.create(consignment("c1", "v1")).await.unwrap();
        store.create(consignment("c2", "v1")).await.unwrap();
        store.create(consignment("c3", "v2")).await.unwrap();

        let ids: Vec<_> = store
            .get_all()
            .await
            .into_iter()
            .map(|consignment| consignment.id)
            .collect();
        assert_eq!(ids, ["c1", "c2", "c3"]);
    }

    #[tokio::test]
    async fn get_all_returns_a_snapshot() {
        let store = InMemoryStore::new();
        store.create(consignment("c1", "v1")).await.unwrap();

        let mut snapshot = store.get_all().await;
        snapshot.clear();

        assert_eq!(store.get_all().await.len(), 1);
    }

    #[tokio::test]
    async fn get_all_on_empty_store_is_empty() {
        let store = InMemoryStore::new();

        assert!(store.get_all().await.is_empty());
    }

    #[tokio::test]
    async fn consecutive_reads_are_identical() {
        let store = InMemoryStore::new();
        store.create(consignment("c1", "v1")).await.unwrap();
        store.create(consignment("c2", "v1")).await.unwrap();

        assert_eq!(store.get_all().await, store.get_all().await);
    }
}
