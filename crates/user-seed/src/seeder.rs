//! Bulk insertion of the user roster into the document store.

use thiserror::Error;
use tracing::{debug, info};

use crate::store::{DocumentStore, StoreError};
use crate::users::{USERS_COLLECTION, UserRecord};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Seeder for inserting user records.
///
/// Takes the store by value so a fake can be injected in tests.
pub struct Seeder<S> {
    store: S,
}

impl<S: DocumentStore> Seeder<S> {
    /// Creates a new seeder backed by the given store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Seeds one user document per name, in list order.
    ///
    /// Duplicate names each get their own document; the store assigns the
    /// ids, so re-running doubles the documents rather than updating them.
    /// The first failed insert aborts the run and surfaces the store error
    /// (already-created documents are not rolled back).
    ///
    /// Returns the number of documents created.
    pub async fn seed_users(&self, names: &[&str]) -> Result<usize, SeedError> {
        info!("Seeding {} users...", names.len());

        let mut created = 0;
        for name in names {
            let record = UserRecord::from_name(name);
            let id = self.store.create(USERS_COLLECTION, &record.fields()).await?;
            debug!("Created user {name}: {id}");
            created += 1;
        }

        info!("Seeded {created} users");
        Ok(created)
    }

    /// Returns a reference to the store for advanced usage.
    pub fn store(&self) -> &S {
        &self.store
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use uuid::Uuid;

    use super::*;

    /// Fake store that records every create call.
    #[derive(Default)]
    struct RecordingStore {
        documents: Mutex<Vec<(String, BTreeMap<String, String>)>>,
        fail_at: Option<usize>,
    }

    impl RecordingStore {
        fn failing_at(call_index: usize) -> Self {
            Self {
                documents: Mutex::new(Vec::new()),
                fail_at: Some(call_index),
            }
        }

        fn documents(&self) -> Vec<(String, BTreeMap<String, String>)> {
            self.documents.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl DocumentStore for RecordingStore {
        async fn create(
            &self,
            collection: &str,
            fields: &BTreeMap<String, String>,
        ) -> Result<String, StoreError> {
            let mut documents = self.documents.lock().unwrap();
            if self.fail_at == Some(documents.len()) {
                return Err(StoreError::Write {
                    status: 429,
                    body: "quota exceeded".to_string(),
                });
            }
            documents.push((collection.to_string(), fields.clone()));
            Ok(Uuid::new_v4().to_string())
        }
    }

    #[tokio::test]
    async fn test_seeds_one_document_per_name() {
        let seeder = Seeder::new(RecordingStore::default());
        let count = seeder
            .seed_users(&["Vidal Puma", "Nelson Roldan", "Kalil Powell"])
            .await
            .unwrap();

        assert_eq!(count, 3);

        let documents = seeder.store().documents();
        assert_eq!(documents.len(), 3);
        for (collection, _) in &documents {
            assert_eq!(collection, "users");
        }

        let (_, fields) = &documents[1];
        assert_eq!(fields.get("full_name").map(String::as_str), Some("Nelson Roldan"));
        assert_eq!(fields.get("username").map(String::as_str), Some("Nelson Roldan"));
        assert_eq!(fields.get("password").map(String::as_str), Some("Nelson Roldan"));
        assert_eq!(fields.get("rol").map(String::as_str), Some("empresa"));
    }

    #[tokio::test]
    async fn test_empty_roster_succeeds_with_zero() {
        let seeder = Seeder::new(RecordingStore::default());
        let count = seeder.seed_users(&[]).await.unwrap();

        assert_eq!(count, 0);
        assert!(seeder.store().documents().is_empty());
    }

    #[tokio::test]
    async fn test_duplicates_are_not_suppressed() {
        let seeder = Seeder::new(RecordingStore::default());
        let count = seeder
            .seed_users(&["Joseph Yauri", "Joseph Yauri"])
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(seeder.store().documents().len(), 2);
    }

    #[tokio::test]
    async fn test_rerun_doubles_the_documents() {
        let names = ["Marco Ayllon", "Samuel Saunders"];
        let seeder = Seeder::new(RecordingStore::default());

        seeder.seed_users(&names).await.unwrap();
        seeder.seed_users(&names).await.unwrap();

        assert_eq!(seeder.store().documents().len(), 2 * names.len());
    }

    #[tokio::test]
    async fn test_fail_fast_stops_remaining_inserts() {
        let seeder = Seeder::new(RecordingStore::failing_at(1));
        let err = seeder
            .seed_users(&["Emilia Machuca", "Gherson Gonzales", "Tomas Gallegos"])
            .await
            .unwrap_err();

        assert!(matches!(err, SeedError::Store(StoreError::Write { status: 429, .. })));
        // Only the document before the failure exists; nothing after it.
        assert_eq!(seeder.store().documents().len(), 1);
    }

    #[tokio::test]
    async fn test_default_roster_seeds_twelve() {
        let seeder = Seeder::new(RecordingStore::default());
        let count = seeder
            .seed_users(&crate::users::DEFAULT_USERS)
            .await
            .unwrap();

        assert_eq!(count, 12);
    }
}
