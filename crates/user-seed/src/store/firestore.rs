//! Firestore REST v1 client.

use std::collections::BTreeMap;
use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::{DocumentStore, StoreError};

const DEFAULT_ENDPOINT: &str = "https://firestore.googleapis.com/v1";

/// Contents of the local credential file.
///
/// The file carries the project id and a ready-made OAuth2 access token
/// (e.g. from `gcloud auth print-access-token`); minting tokens from a
/// service-account key is left to the surrounding tooling.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    pub project_id: String,
    pub token: String,
}

/// Firestore document body: every field wrapped as a typed value.
#[derive(Debug, Serialize)]
struct DocumentBody<'a> {
    fields: BTreeMap<&'a str, FieldValue<'a>>,
}

#[derive(Debug, Serialize)]
struct FieldValue<'a> {
    #[serde(rename = "stringValue")]
    string_value: &'a str,
}

/// Response from the createDocument endpoint.
#[derive(Debug, Deserialize)]
struct CreatedDocument {
    /// Full resource name, e.g.
    /// `projects/p/databases/(default)/documents/users/AbC123`.
    name: String,
}

/// Client for creating documents via the Firestore REST API.
pub struct FirestoreClient {
    client: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl FirestoreClient {
    /// Creates a client from already-loaded credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            credentials,
        }
    }

    /// Creates a client from a credential file on disk.
    ///
    /// The file is read once here; a missing or malformed file is
    /// [`StoreError::Credentials`].
    pub fn from_credentials_file(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let credentials = Self::load_credentials(path)?;
        Ok(Self::new(credentials))
    }

    /// Points the client at a custom endpoint, e.g. a local emulator.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn load_credentials(path: &Path) -> Result<Credentials, StoreError> {
        let data = std::fs::read_to_string(path).map_err(|e| StoreError::Credentials {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_str(&data).map_err(|e| StoreError::Credentials {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn create_url(&self, collection: &str) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents/{}",
            self.endpoint, self.credentials.project_id, collection
        )
    }

    /// Maps a non-success response status onto the error taxonomy.
    fn error_for_status(status: reqwest::StatusCode, body: String) -> StoreError {
        match status {
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
                StoreError::Auth(format!("status {status}: {body}"))
            }
            _ => StoreError::Write {
                status: status.as_u16(),
                body,
            },
        }
    }

    /// Extracts the document id from a full resource name.
    fn document_id(resource_name: &str) -> String {
        resource_name
            .rsplit('/')
            .next()
            .unwrap_or(resource_name)
            .to_string()
    }
}

#[async_trait]
impl DocumentStore for FirestoreClient {
    async fn create(
        &self,
        collection: &str,
        fields: &BTreeMap<String, String>,
    ) -> Result<String, StoreError> {
        let body = DocumentBody {
            fields: fields
                .iter()
                .map(|(k, v)| {
                    (
                        k.as_str(),
                        FieldValue {
                            string_value: v.as_str(),
                        },
                    )
                })
                .collect(),
        };

        let resp = self
            .client
            .post(self.create_url(collection))
            .bearer_auth(&self.credentials.token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    StoreError::Connection(e.to_string())
                } else {
                    StoreError::Http(e)
                }
            })?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(Self::error_for_status(status, body));
        }

        let created: CreatedDocument = resp.json().await?;
        Ok(Self::document_id(&created.name))
    }
}
