//! Configuration for seeding runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the credential file, next to the binary's cwd.
pub const DEFAULT_CREDENTIALS_PATH: &str = "firebase_key.json";

/// Configuration for a seeding run.
///
/// The roster itself is compiled in ([`crate::users::DEFAULT_USERS`]); only
/// the connection to the store is configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Path to the credential file.
    pub credentials_path: PathBuf,

    /// Endpoint override, e.g. a local Firestore emulator.
    pub endpoint: Option<String>,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from(DEFAULT_CREDENTIALS_PATH),
            endpoint: None,
        }
    }
}

impl SeedConfig {
    /// Loads configuration from the environment.
    ///
    /// `FIREBASE_CREDENTIALS` overrides the credential file path and
    /// `FIRESTORE_EMULATOR_HOST` (host:port) redirects writes to a local
    /// emulator.
    pub fn from_env() -> Self {
        let credentials_path = std::env::var("FIREBASE_CREDENTIALS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_PATH));

        let endpoint = std::env::var("FIRESTORE_EMULATOR_HOST")
            .ok()
            .map(|host| format!("http://{host}/v1"));

        Self {
            credentials_path,
            endpoint,
        }
    }
}
