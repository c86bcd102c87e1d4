//! Firestore seeding for the platform's default user roster.
//!
//! This crate inserts the twelve company accounts into the `users` collection
//! of the project's Firestore database. The `Seeder` works against any
//! [`store::DocumentStore`], which keeps it testable with a fake store; the
//! shipped implementation is [`store::FirestoreClient`], a thin REST v1
//! client authenticated from a local credential file.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use user_seed::prelude::*;
//!
//! let store = FirestoreClient::from_credentials_file("firebase_key.json")?;
//! let count = Seeder::new(store).seed_users(&DEFAULT_USERS).await?;
//! println!("seeded {count} users");
//! ```

pub mod config;
pub mod seeder;
pub mod store;
pub mod users;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::config::SeedConfig;
    pub use crate::seeder::{SeedError, Seeder};
    pub use crate::store::{DocumentStore, FirestoreClient, StoreError};
    pub use crate::users::{DEFAULT_ROLE, DEFAULT_USERS, USERS_COLLECTION, UserRecord};
}
