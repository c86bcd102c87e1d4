//! Seeds the default user roster into Firestore.
//!
//! Run with:
//! ```
//! cargo run -p user-seed --bin seed
//! ```
//!
//! Expects a credential file at `firebase_key.json` (or the path in
//! `FIREBASE_CREDENTIALS`) holding the project id and an access token.

use tracing_subscriber::EnvFilter;
use user_seed::config::SeedConfig;
use user_seed::seeder::Seeder;
use user_seed::store::FirestoreClient;
use user_seed::users::DEFAULT_USERS;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = SeedConfig::from_env();

    let mut store = FirestoreClient::from_credentials_file(&config.credentials_path)?;
    if let Some(endpoint) = &config.endpoint {
        tracing::info!("Using store endpoint {endpoint}");
        store = store.with_endpoint(endpoint.clone());
    }

    let seeder = Seeder::new(store);
    let count = seeder.seed_users(&DEFAULT_USERS).await?;

    tracing::info!("Seed completed: {count} users added");

    Ok(())
}
