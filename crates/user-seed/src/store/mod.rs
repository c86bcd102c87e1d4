//! The document store seam.
//!
//! The seeder only needs the ability to create a document in a named
//! collection; everything else the store supports (queries, updates,
//! deletes) is deliberately absent from this trait.

mod firestore;

use std::collections::BTreeMap;

use async_trait::async_trait;
use thiserror::Error;

pub use firestore::{Credentials, FirestoreClient};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("credential file {path}: {message}")]
    Credentials { path: String, message: String },
    #[error("authentication rejected: {0}")]
    Auth(String),
    #[error("connection failed: {0}")]
    Connection(String),
    #[error("write rejected (status {status}): {body}")]
    Write { status: u16, body: String },
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A schema-less document database grouped into named collections.
///
/// Implementations assign document identifiers themselves; the seeder never
/// supplies one and never assumes uniqueness beyond what the store provides.
#[async_trait]
pub trait DocumentStore {
    /// Creates a new document holding `fields` in `collection`.
    ///
    /// Returns the store-assigned document id.
    async fn create(
        &self,
        collection: &str,
        fields: &BTreeMap<String, String>,
    ) -> Result<String, StoreError>;
}
